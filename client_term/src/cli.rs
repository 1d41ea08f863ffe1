use std::fs;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use clap::Parser;
use game_core::Config;

#[derive(Debug, Parser)]
#[command(name = "love-pong", version, about = "A Pong challenge for the terminal")]
pub struct Cli {
    /// TOML file with game settings; missing keys keep their defaults
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Seed for serve directions (defaults to the clock)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Player score the challenge asks for
    #[arg(long)]
    pub target_player: Option<u32>,

    /// Opponent score the challenge asks for
    #[arg(long)]
    pub target_opponent: Option<u32>,

    /// Plain Pong, no challenge
    #[arg(long)]
    pub free_play: bool,

    /// Where log output goes while the terminal is in use
    #[arg(long, default_value = "love-pong.log")]
    pub log_file: PathBuf,
}

impl Cli {
    /// Defaults, then the config file, then command-line overrides
    pub fn load_config(&self) -> Result<Config> {
        let mut config = match &self.config {
            Some(path) => load_config_file(path)?,
            None => Config::default(),
        };

        if let Some(target) = self.target_player {
            config.target_player = target;
        }
        if let Some(target) = self.target_opponent {
            config.target_opponent = target;
        }

        config.validate().context("invalid game configuration")?;
        Ok(config)
    }

    pub fn seed(&self) -> u64 {
        self.seed.unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_nanos() as u64)
                .unwrap_or_default()
        })
    }
}

pub fn load_config_file(path: &Path) -> Result<Config> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read config file {}", path.display()))?;
    let config: Config = toml::from_str(&text)
        .with_context(|| format!("failed to parse config file {}", path.display()))?;
    tracing::info!(path = %path.display(), "loaded config file");
    Ok(config)
}
