use std::io;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use blind_chess::core::settings_persistence::{default_settings_path, load_settings, save_settings};
use blind_chess::core::GameSettings;
use blind_chess::game::Game;
use blind_chess::ui::{Console, ConsoleOptions};

/// Name the piece that can reach the square. Wrong answers end the game.
#[derive(Parser, Debug)]
#[command(name = "blind_chess", version, about)]
struct Args {
    /// Random seed for a reproducible game
    #[arg(long)]
    seed: Option<u64>,

    /// Seconds to count down before the first question
    #[arg(long)]
    countdown: Option<u64>,

    /// Do not clear the screen after the countdown
    #[arg(long)]
    no_clear: bool,

    /// Settings file (defaults to the user config directory)
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Write the effective settings to the settings file and exit
    #[arg(long)]
    write_settings: bool,
}

impl Args {
    fn apply(&self, settings: &mut GameSettings) {
        if let Some(seed) = self.seed {
            settings.seed = Some(seed);
        }
        if let Some(countdown) = self.countdown {
            settings.countdown_secs = countdown;
        }
        if self.no_clear {
            settings.clear_screen = false;
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let settings_path = args.settings.clone().unwrap_or_else(default_settings_path);
    let loaded = settings_path
        .exists()
        .then(|| load_settings(&settings_path));
    let mut settings = match &loaded {
        Some(Ok(settings)) => settings.clone(),
        _ => GameSettings::default(),
    };
    args.apply(&mut settings);

    // Log to stderr so prompts on stdout stay readable
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(settings.log_level.as_str())),
        )
        .with_writer(io::stderr)
        .init();

    match loaded {
        Some(Ok(_)) => info!("[SETTINGS] Loaded settings from {:?}", settings_path),
        Some(Err(e)) => warn!(
            "[SETTINGS] Failed to load settings file at {:?}: {}. Using defaults.",
            settings_path, e
        ),
        None => info!("[SETTINGS] No settings file found at {:?}. Using defaults.", settings_path),
    }

    settings.validate().context("invalid settings")?;

    if args.write_settings {
        save_settings(&settings, &settings_path)
            .with_context(|| format!("writing settings to {}", settings_path.display()))?;
        println!("Settings written to {}", settings_path.display());
        return Ok(());
    }

    let mut game = match settings.seed {
        Some(seed) => {
            info!("[CLI] Using seed {}", seed);
            Game::from_seed(seed)
        }
        None => Game::from_entropy(),
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = Console::new(stdin.lock(), stdout.lock(), ConsoleOptions::from(&settings));
    let summary = console.run(&mut game)?;
    info!("[CLI] Final score {} at level {}", summary.score, summary.level);

    Ok(())
}
