use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

use check_updates_core::{Section, TableRenderer, UpdatePlanner};
use phpcu::cli::Args;
use phpcu::detector::ProjectDetector;
use phpcu::packagist::PackagistClient;
use phpcu::parsers::ComposerJsonParser;
use phpcu::scanner;
use phpcu::updater::FileUpdater;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let args = Args::parse();
    phpcu::logging::init(args.verbose);

    if args.no_color {
        colored::control::set_override(false);
    }

    // 1. Locate and read composer.json
    let detector = ProjectDetector::new(args.project_path());
    let manifest_path = detector.detect()?;
    info!(path = %manifest_path.display(), "reading manifest");

    let manifest = ComposerJsonParser::new(!args.no_dev).parse(&manifest_path)?;

    println!(
        "Found {} packages in «require» section.",
        manifest.count(Section::Require)
    );
    if !args.no_dev {
        println!(
            "Found {} packages in «require-dev» section.",
            manifest.count(Section::RequireDev)
        );
    }

    // 2. Query Packagist, one package at a time
    let client = PackagistClient::new(&args.registry);

    let progress = ProgressBar::new(manifest.dependencies.len() as u64);
    progress.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .context("invalid progress bar template")?
            .progress_chars("=>-"),
    );

    let report = scanner::scan(&client, &manifest.dependencies, &progress).await;
    progress.finish_and_clear();

    // 3. Report failures after the whole scan
    if !manifest.invalid.is_empty() || !report.failures.is_empty() {
        println!("{}", "Some packages could not be checked:".dimmed());
        for (name, error) in &manifest.invalid {
            println!("  {}", format!("{name}: {error}").dimmed());
        }
        for error in &report.failures {
            println!("  {}", error.to_string().dimmed());
        }
        println!();
    }

    // 4. Display results
    let renderer = TableRenderer::new(!args.no_color);
    renderer.render(&report.candidates);

    if !args.update {
        if report.updatable().next().is_some() {
            println!();
            println!(
                "Tip: re-run with {} to update your composer.json ({} to choose all, minor, patch or none)",
                "-u".cyan(),
                "-l".cyan()
            );
        }
        return Ok(());
    }

    // 5. Plan and write
    let mut planner = UpdatePlanner::new(args.level.into());
    if let Some(current) = planner
        .family()
        .and_then(|family| manifest.platform_requirement(family))
    {
        planner = planner.with_current_platform(current.clone());
    }
    let plan = planner.plan(&report.candidates);

    println!();
    println!("{} packages will be updated", plan.len());
    if plan.is_empty() {
        return Ok(());
    }

    let result = FileUpdater::new().apply(&manifest_path, &plan)?;
    result.print_summary();

    Ok(())
}
