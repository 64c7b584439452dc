pub mod wordlist_pipeline;

pub use wordlist_pipeline::WordlistPipeline;
