pub mod toml_config;

use crate::domain::model::Chips;
use crate::utils::error::{AppError, Result};
use crate::utils::validation::{validate_at_least, validate_path, validate_url, Validate};
use serde::{Deserialize, Serialize};
use self::toml_config::TomlConfig;

#[cfg(feature = "cli")]
use clap::Parser;

pub const DEFAULT_PLAYERS: usize = 5;
pub const DEFAULT_ROUNDS: u32 = 20;
pub const DEFAULT_TOTAL_CHIPS: Chips = 500;
pub const DEFAULT_BOOK_URL: &str =
    "http://manybooks.net/send/1:text:.txt:text/topeliusz2724927249-8/topeliusz2724927249-8.txt";
pub const DEFAULT_WORDLIST_PATH: &str = "ordlista.csv";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub players: usize,
    pub rounds: u32,
    pub total_chips: Chips,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            players: DEFAULT_PLAYERS,
            rounds: DEFAULT_ROUNDS,
            total_chips: DEFAULT_TOTAL_CHIPS,
        }
    }
}

impl Validate for GameConfig {
    fn validate(&self) -> Result<()> {
        validate_at_least("game.players", self.players, 1)?;
        validate_at_least("game.rounds", self.rounds, 1)?;
        validate_at_least("game.total_chips", self.total_chips, 0)?;

        // After round one every player must still hold a chip per remaining round.
        let required = Chips::try_from(self.players)
            .ok()
            .and_then(|players| players.checked_mul(Chips::from(self.rounds.saturating_sub(1))))
            .ok_or_else(|| AppError::InvalidConfigValueError {
                field: "game.total_chips".to_string(),
                value: self.total_chips.to_string(),
                reason: format!(
                    "{} players over {} rounds need more chips than can be counted",
                    self.players, self.rounds
                ),
            })?;
        if self.total_chips < required {
            return Err(AppError::InvalidConfigValueError {
                field: "game.total_chips".to_string(),
                value: self.total_chips.to_string(),
                reason: format!(
                    "{} players over {} rounds need at least {} chips",
                    self.players, self.rounds, required
                ),
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordlistConfig {
    pub source_url: String,
    pub wordlist_path: String,
    pub passes: usize,
}

impl Default for WordlistConfig {
    fn default() -> Self {
        Self {
            source_url: DEFAULT_BOOK_URL.to_string(),
            wordlist_path: DEFAULT_WORDLIST_PATH.to_string(),
            passes: 1,
        }
    }
}

impl Validate for WordlistConfig {
    fn validate(&self) -> Result<()> {
        validate_url("wordlist.source_url", &self.source_url)?;
        validate_path("wordlist.path", &self.wordlist_path)?;
        validate_at_least("wordlist.passes", self.passes, 1)?;
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoggingConfig {
    pub verbose: bool,
    pub json: bool,
}

fn load_toml(path: Option<&str>) -> Result<TomlConfig> {
    match path {
        Some(path) => {
            tracing::debug!("Loading configuration from: {}", path);
            TomlConfig::from_file(path)
        }
        None => Ok(TomlConfig::default()),
    }
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "chip-ledger")]
#[command(about = "Tracks chips, rounds and medals for a poker night")]
pub struct LedgerArgs {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(long)]
    pub players: Option<usize>,

    #[arg(long)]
    pub rounds: Option<u32>,

    #[arg(long)]
    pub total_chips: Option<Chips>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Log as JSON lines")]
    pub log_json: bool,
}

#[cfg(feature = "cli")]
impl LedgerArgs {
    /// Flags win over the file, the file wins over the defaults.
    pub fn resolve(&self) -> Result<(GameConfig, LoggingConfig)> {
        let file = load_toml(self.config.as_deref())?;
        let game = file.game();
        let defaults = GameConfig::default();

        let config = GameConfig {
            players: self.players.or(game.players).unwrap_or(defaults.players),
            rounds: self.rounds.or(game.rounds).unwrap_or(defaults.rounds),
            total_chips: self
                .total_chips
                .or(game.total_chips)
                .unwrap_or(defaults.total_chips),
        };

        Ok((config, resolve_logging(&file, self.verbose, self.log_json)))
    }
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "wordlist-update")]
#[command(about = "Merges the words of a downloaded book into a word list")]
pub struct WordlistArgs {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(long)]
    pub source_url: Option<String>,

    /// Word list file; the result is written next to it
    #[arg(long)]
    pub wordlist: Option<String>,

    #[arg(long)]
    pub passes: Option<usize>,

    #[arg(long, help = "Log CPU and memory usage per pass")]
    pub monitor: bool,

    /// Show the resolved configuration without fetching or writing
    #[arg(long)]
    pub dry_run: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Log as JSON lines")]
    pub log_json: bool,
}

#[cfg(feature = "cli")]
impl WordlistArgs {
    pub fn resolve(&self) -> Result<(WordlistConfig, LoggingConfig)> {
        let file = load_toml(self.config.as_deref())?;
        let section = file.wordlist();
        let defaults = WordlistConfig::default();

        let config = WordlistConfig {
            source_url: self
                .source_url
                .clone()
                .or(section.source_url)
                .unwrap_or(defaults.source_url),
            wordlist_path: self
                .wordlist
                .clone()
                .or(section.path)
                .unwrap_or(defaults.wordlist_path),
            passes: self.passes.or(section.passes).unwrap_or(defaults.passes),
        };

        Ok((config, resolve_logging(&file, self.verbose, self.log_json)))
    }
}

fn resolve_logging(file: &TomlConfig, verbose: bool, json: bool) -> LoggingConfig {
    let logging = file.logging();
    LoggingConfig {
        verbose: verbose || logging.verbose.unwrap_or(false),
        json: json || logging.json.unwrap_or(false),
    }
}
