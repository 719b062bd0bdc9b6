use std::fs;
use std::path::Path;

use colored::Colorize;
use tw_core::update::strip_narration;

pub fn run(world: &str, update: &Path, json: bool) -> Result<(), String> {
    let mut world = super::load_world(world)?;
    let text = fs::read_to_string(update)
        .map_err(|e| format!("cannot read {}: {e}", update.display()))?;

    let report = world.parse_updates(&text);

    if json {
        let out = serde_json::json!({
            "report": report,
            "state": world.render(false),
        });
        let pretty = serde_json::to_string_pretty(&out).map_err(|e| e.to_string())?;
        println!("{pretty}");
        return Ok(());
    }

    println!("{}", "Predicted outcomes".bold());
    println!("{}\n", strip_narration(&text));
    if let Some(narration) = &report.narration {
        println!("{}", "Narration".bold());
        println!("{narration}\n");
    }
    println!("{}", "Changes".bold());
    super::print_report(&report);
    println!();
    println!("{}", "World state".bold());
    print!("{}", world.render(false));
    Ok(())
}
