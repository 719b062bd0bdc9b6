//! CLI frontend for the Taleweave story engine.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tw_story::StoryConfig;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "tw",
    about = "Taleweave: a world-state engine for model-driven interactive stories",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the bundled example worlds
    Worlds,

    /// Print the world state as the player sees it
    Render {
        /// Id of the bundled world
        #[arg(short, long, default_value = "1")]
        world: String,

        /// Leave out the per-component descriptions
        #[arg(short, long)]
        brief: bool,
    },

    /// Apply an update file to a world and print what changed
    Apply {
        /// File holding update text in the update protocol
        update: PathBuf,

        /// Id of the bundled world
        #[arg(short, long, default_value = "1")]
        world: String,

        /// Print the report and resulting state as JSON
        #[arg(long)]
        json: bool,
    },

    /// Play a story interactively, reading player inputs from stdin
    Play {
        /// Id of the bundled world
        #[arg(short, long, default_value = "1")]
        world: String,

        /// Replay model responses from a file (separated by `---` lines)
        /// instead of asking on the terminal
        #[arg(short, long)]
        script: Option<PathBuf>,

        /// Leave out the per-component descriptions in prompts
        #[arg(short, long)]
        brief: bool,

        /// Do not narrate scenes when the player arrives somewhere new
        #[arg(long)]
        no_narration: bool,

        /// Write the session transcript (markdown) to this file on exit
        #[arg(short, long)]
        transcript: Option<PathBuf>,

        /// Keep at most this many transcript entries
        #[arg(long, default_value = "500")]
        max_transcript: usize,
    },

    /// Print the world-update prompt for a player input
    Prompt {
        /// What the player does
        input: String,

        /// Id of the bundled world
        #[arg(short, long, default_value = "1")]
        world: String,

        /// Leave out the per-component descriptions
        #[arg(short, long)]
        brief: bool,
    },
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Worlds => commands::worlds::run(),
        Commands::Render { world, brief } => commands::render::run(&world, !brief),
        Commands::Apply {
            update,
            world,
            json,
        } => commands::apply::run(&world, &update, json),
        Commands::Play {
            world,
            script,
            brief,
            no_narration,
            transcript,
            max_transcript,
        } => {
            let config = StoryConfig::default()
                .with_detail(!brief)
                .with_narration(!no_narration)
                .with_max_transcript(max_transcript);
            commands::play::run(&world, script.as_deref(), config, transcript.as_deref())
        }
        Commands::Prompt {
            input,
            world,
            brief,
        } => commands::prompt::run(&world, &input, !brief),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}
