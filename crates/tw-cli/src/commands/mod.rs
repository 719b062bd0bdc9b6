pub mod apply;
pub mod play;
pub mod prompt;
pub mod render;
pub mod worlds;

use colored::Colorize;
use tw_core::{UpdateReport, World};

/// Build a bundled world by id.
fn load_world(id: &str) -> Result<World, String> {
    tw_story::worlds::by_id(id).map_err(|e| e.to_string())
}

/// Print applied changes and skipped clauses of an update.
fn print_report(report: &UpdateReport) {
    if report.applied.is_empty() && report.failures.is_empty() {
        println!("  {}", "No changes.".dimmed());
    }
    for change in &report.applied {
        println!("  {} {change}", "+".green().bold());
    }
    for failure in &report.failures {
        println!("  {} {failure}", "!".yellow().bold());
    }
}
