pub mod allocation;
pub mod engine;
pub mod ledger;
pub mod ranking;
pub mod wordlist;

pub use crate::domain::model::{
    AnalysisInput, AnalysisReport, Chips, Medal, MergeOutcome, PassReport, Player,
};
pub use crate::domain::ports::{Console, Pipeline, Storage, TextSource};
pub use crate::utils::error::Result;
