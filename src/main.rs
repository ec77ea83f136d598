use anyhow::{Context, Result};
use clap::Parser;
use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use torus_snake::app::App;
use torus_snake::game::GameConfig;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter, e.g. `debug` or `torus_snake=trace`
const LOG_ENV: &str = "TORUS_SNAKE_LOG";

#[derive(Parser)]
#[command(name = "torus_snake")]
#[command(version, about = "Snake on a grid whose edges wrap around")]
struct Cli {
    /// JSON configuration file; flags below override its values
    #[arg(long)]
    config: Option<PathBuf>,

    /// Ticks per second
    #[arg(long)]
    speed: Option<u32>,

    /// Canvas width in pixels
    #[arg(long)]
    screen_width: Option<u32>,

    /// Canvas height in pixels
    #[arg(long)]
    screen_height: Option<u32>,

    /// Cell edge length in pixels
    #[arg(long)]
    cell_size: Option<u32>,

    /// Length the snake grows to after each reset
    #[arg(long)]
    initial_length: Option<usize>,

    /// Seed for food placement
    #[arg(long)]
    seed: Option<u64>,

    /// Write logs to this file
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Print the resolved configuration as JSON and exit
    #[arg(long)]
    print_config: bool,
}

impl Cli {
    fn resolve_config(&self) -> Result<GameConfig> {
        let mut config = match &self.config {
            Some(path) => GameConfig::load(path)?,
            None => GameConfig::default(),
        };

        if let Some(speed) = self.speed {
            config.speed = speed;
        }
        if let Some(width) = self.screen_width {
            config.screen_width = width;
        }
        if let Some(height) = self.screen_height {
            config.screen_height = height;
        }
        if let Some(cell_size) = self.cell_size {
            config.cell_size = cell_size;
        }
        if let Some(length) = self.initial_length {
            config.initial_length = length;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }

        config.validate().context("Invalid game configuration")?;
        Ok(config)
    }
}

/// The terminal belongs to the game, so logs only go to a file
fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        init_logging(path)?;
    }

    let config = cli.resolve_config()?;

    if cli.print_config {
        println!("{}", config.to_json()?);
        return Ok(());
    }

    let mut app = App::new(config)?;
    app.run().await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use tempfile::TempDir;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["torus_snake"]);
        assert_eq!(cli.resolve_config().unwrap(), GameConfig::default());
    }

    #[test]
    fn test_flags_override_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("snake.json");
        std::fs::write(&path, r#"{ "speed": 5, "initial_length": 4 }"#).unwrap();

        let cli = Cli::parse_from([
            "torus_snake",
            "--config",
            path.to_str().unwrap(),
            "--speed",
            "10",
            "--screen-width",
            "400",
            "--seed",
            "3",
        ]);
        let config = cli.resolve_config().unwrap();

        assert_eq!(config.speed, 10);
        assert_eq!(config.initial_length, 4);
        assert_eq!(config.screen_width, 400);
        assert_eq!(config.seed, Some(3));
    }

    #[test]
    fn test_invalid_flags_rejected() {
        let cli = Cli::parse_from(["torus_snake", "--cell-size", "33"]);
        assert!(cli.resolve_config().is_err());
    }
}
