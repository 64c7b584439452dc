pub mod ledger_session;
pub mod pipelines;

pub use ledger_session::LedgerSession;
pub use pipelines::WordlistPipeline;
