use cardlink::config::LinkerConfig;
use cardlink::error::Result;
use cardlink::linker::{self, FileOutcome, RunReport};
use clap::Parser;
use colored::*;
use std::path::PathBuf;

mod args;
use args::Cli;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => LinkerConfig::load(path)?,
        None => LinkerConfig::default(),
    };
    let base_dir = cli.dir.clone().unwrap_or_else(|| PathBuf::from("."));

    let report = linker::run(&config, &base_dir, cli.dry_run)?;
    print_report(&report, cli.dry_run);
    Ok(())
}

fn print_report(report: &RunReport, dry_run: bool) {
    for file in &report.files {
        let name = file.path.display();
        match file.outcome {
            FileOutcome::Updated if dry_run => {
                println!("{}", format!("Would update {}", name).yellow())
            }
            FileOutcome::Updated => println!("{}", format!("Updated {}", name).green()),
            FileOutcome::Unchanged => {
                println!("{}", format!("No changes needed for {}", name).dimmed())
            }
            // Missing files are skipped silently, as the original tool did.
            FileOutcome::Missing => {}
        }
    }

    if !dry_run {
        println!("All attorney profile pages have been updated with clickable attorney cards!");
    }
}
