// Adapters layer: concrete implementations of the domain ports.

pub mod console;
pub mod http;
pub mod storage;

pub use console::{Prompt, TerminalConsole};
pub use http::HttpTextSource;
pub use storage::LocalStorage;
