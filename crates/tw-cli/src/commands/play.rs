use std::fs;
use std::io::{self, Write};
use std::path::Path;

use colored::Colorize;
use tracing::info;
use tw_story::{NarrativeModel, ScriptedModel, StoryConfig, StoryError, StoryResult, StorySession};

/// A line holding only this ends a pasted model response.
const END_OF_RESPONSE: &str = ".";

/// Asks the operator to act as the narrative model: prints each prompt and
/// reads the pasted response from stdin.
struct StdioModel;

impl NarrativeModel for StdioModel {
    fn complete(&mut self, prompt: &str) -> StoryResult<String> {
        println!("{}", "--- prompt ---".dimmed());
        println!("{prompt}");
        println!(
            "{}",
            format!("--- paste the response, then a line with '{END_OF_RESPONSE}' ---").dimmed()
        );

        let mut response = String::new();
        let mut line = String::new();
        loop {
            line.clear();
            let read = io::stdin()
                .read_line(&mut line)
                .map_err(|e| StoryError::Model(e.to_string()))?;
            if read == 0 {
                return Err(StoryError::Model("input closed before the response ended".into()));
            }
            if line.trim() == END_OF_RESPONSE {
                return Ok(response);
            }
            response.push_str(&line);
        }
    }
}

pub fn run(
    world: &str,
    script: Option<&Path>,
    config: StoryConfig,
    transcript: Option<&Path>,
) -> Result<(), String> {
    info!(world, scripted = script.is_some(), "story started");
    let world = super::load_world(world)?;

    match script {
        Some(path) => {
            let text = fs::read_to_string(path)
                .map_err(|e| format!("cannot read {}: {e}", path.display()))?;
            play(StorySession::new(world, ScriptedModel::from_script(&text), config), transcript)
        }
        None => play(StorySession::new(world, StdioModel, config), transcript),
    }
}

fn play<M: NarrativeModel>(
    mut session: StorySession<M>,
    transcript: Option<&Path>,
) -> Result<(), String> {
    println!("  {} a story. Type 'q' to quit.\n", "Starting".bold());

    let mut line = String::new();
    loop {
        println!("{}", "World state".bold());
        println!("{}", session.state());

        match session.narrate_if_moved() {
            Ok(Some(narration)) => println!("{}\n{narration}\n", "Narration".bold()),
            Ok(None) => {}
            Err(e) => println!("{}\n", e.to_string().yellow()),
        }

        print!("What do you want to do?\n> ");
        io::stdout().flush().map_err(|e| e.to_string())?;

        line.clear();
        match io::stdin().read_line(&mut line) {
            Ok(0) => break, // EOF
            Err(e) => return Err(e.to_string()),
            _ => {}
        }

        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        if input.eq_ignore_ascii_case("q") || input.eq_ignore_ascii_case("quit") {
            break;
        }

        match session.turn(input) {
            Ok(turn) => {
                println!("\n{}", "Predicted outcomes".bold());
                println!("{}\n", turn.outcomes);
                if let Some(narration) = &turn.narration {
                    println!("{}\n{narration}\n", "Narration".bold());
                }
                super::print_report(&turn.report);
                println!();
            }
            Err(e) => println!("{}\n", e.to_string().yellow()),
        }
    }

    info!(entries = session.transcript().len(), "story ended");
    if let Some(path) = transcript {
        fs::write(path, session.transcript().export_markdown())
            .map_err(|e| format!("cannot write {}: {e}", path.display()))?;
        println!("  Transcript written to {}", path.display());
    }
    println!("Goodbye!");
    Ok(())
}
