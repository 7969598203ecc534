//! Skyward - a 2D side-scrolling platformer
//!
//! Runs a headless scripted session: the player walks, jumps, attacks a
//! training dummy, takes damage and dies, driven by fixed gameplay ticks.

mod demo;
mod settings;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use skyward_assets::AssetServer;
use skyward_core::GameTime;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use demo::{register_placeholders, Script, Session};
use settings::GameSettings;

#[derive(Parser, Debug)]
#[command(name = "skyward", about = "Skyward platformer (headless session)")]
struct Args {
    /// Settings file (defaults to the user config directory)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the asset root
    #[arg(short, long)]
    assets: Option<PathBuf>,

    /// Maximum number of frames to simulate
    #[arg(short, long, default_value_t = 600)]
    frames: u64,

    /// Use generated sprite strips instead of files
    #[arg(short, long)]
    placeholders: bool,

    /// Health of the training dummy
    #[arg(long, default_value_t = 30)]
    dummy_health: u32,

    /// Write the effective settings to this file before running
    #[arg(long)]
    write_config: Option<PathBuf>,

    /// Save the effective settings to the user config directory
    #[arg(long)]
    save_settings: bool,
}

fn main() -> Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set tracing subscriber")?;

    let args = Args::parse();
    info!("Starting Skyward...");

    let mut settings = match &args.config {
        Some(path) => GameSettings::load_from(path)?,
        None => GameSettings::load(),
    };
    if let Some(base) = args.assets {
        settings.assets.base_path = base;
    }
    settings.assets.placeholders |= args.placeholders;

    if let Some(path) = &args.write_config {
        settings
            .save_to(path)
            .with_context(|| format!("Failed to write settings to {:?}", path))?;
    }
    if args.save_settings {
        settings.save().context("Failed to save settings")?;
    }

    let time = GameTime::new(settings.time.to_time_config()?);

    let mut assets = AssetServer::new(&settings.assets.base_path);
    if settings.assets.placeholders {
        register_placeholders(&mut assets, &settings.player.sprites);
    }

    let mut session = Session::new(
        time,
        settings.player.clone(),
        &mut assets,
        args.dummy_health,
        Script::walkthrough(),
    )
    .context("Failed to load player sprites")?;

    while session.time().frame_count < args.frames {
        session.frame();
        if session.is_finished() {
            break;
        }
    }

    if session.time().paused {
        warn!("Session ended while paused");
    }

    let ticks = session.scene().tick_count();
    match session.player() {
        Some(player) => info!(
            "Session over after {} ticks: player {} at {:?}, health {}",
            ticks,
            player.state(),
            player.position(),
            player.health()
        ),
        None => info!(
            "Session over after {} ticks: player destroyed, {} objects remain",
            ticks,
            session.scene().len()
        ),
    }

    Ok(())
}
