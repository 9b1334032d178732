//! # Card Rewriting
//!
//! The textual transform at the heart of cardlink. A card block looks like:
//!
//! ```text
//! <!-- Rashed -->
//! <div class="col-lg-4 col-md-6">
//!   <div class="attorney-card-compact">...</div>
//! </div>
//! ```
//!
//! [`wrap_card`] splices an anchor between the column wrapper and the compact
//! card so the whole card becomes clickable, leaving every byte of the card's
//! own markup untouched:
//!
//! ```text
//! <!-- Rashed -->
//! <div class="col-lg-4 col-md-6">
//!   <a href="attorney-rashed.html" class="attorney-card-link">
//!   <div class="attorney-card-compact">...</div></a>
//! </div>
//! ```
//!
//! This is a pattern match over the page text, not an HTML parse. It only
//! recognizes the exact wrapper/card nesting the roster pages use, and that is
//! intentional: a stricter structural parser would accept (and rewrite) markup
//! the original pages never contain. The pattern requires nothing but
//! whitespace between the wrapper and the card, so a card that already carries
//! an anchor no longer matches and the transform is idempotent.

use crate::error::Result;
use regex::Regex;

const CONTAINER_OPEN: &str = r#"<div class="col-lg-4 col-md-6">"#;
const CARD_OPEN: &str = r#"<div class="attorney-card-compact">"#;

/// Class carried by the spliced-in anchor, so the stylesheet can strip the
/// default link styling from the wrapped card.
pub const LINK_CLASS: &str = "attorney-card-link";

/// Compile the unwrapped-card pattern for one attorney name.
///
/// Capture groups: (1) the marker comment, the column wrapper's opening tag,
/// and the whitespace around them; (2) the compact card from its opening tag
/// through its closing `</div>`; (3) the whitespace and closing `</div>` of
/// the column wrapper. Whitespace between tokens is arbitrary and may span
/// lines.
fn card_pattern(name: &str) -> Result<Regex> {
    let pattern = format!(
        r"(?s)(<!--\s*{name}\s*-->\s*{container}\s*)({card}.*?</div>)(\s*</div>)",
        name = regex::escape(name),
        container = regex::escape(CONTAINER_OPEN),
        card = regex::escape(CARD_OPEN),
    );
    Ok(Regex::new(&pattern)?)
}

/// Wrap every unwrapped card block for `name` in an anchor to `href`.
///
/// Returns the rewritten text, or `None` when no block matched -- either the
/// name does not appear in `content`, or its card was already wrapped by an
/// earlier run.
pub fn wrap_card(content: &str, name: &str, href: &str) -> Result<Option<String>> {
    let re = card_pattern(name)?;
    if !re.is_match(content) {
        return Ok(None);
    }

    let anchor = format!(r#"<a href="{href}" class="{LINK_CLASS}">"#);
    let rewritten = re.replace_all(content, |caps: &regex::Captures| {
        format!("{}{}{}</a>{}", &caps[1], anchor, &caps[2], &caps[3])
    });
    Ok(Some(rewritten.into_owned()))
}
