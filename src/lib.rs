pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::adapters::{HttpTextSource, LocalStorage, TerminalConsole};
pub use crate::app::{LedgerSession, WordlistPipeline};
pub use crate::config::{GameConfig, WordlistConfig};
pub use crate::core::{engine::AnalysisEngine, ledger::Ledger};
pub use crate::utils::error::{AppError, Result};

#[cfg(feature = "cli")]
pub use crate::config::{LedgerArgs, WordlistArgs};
