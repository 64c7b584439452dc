use crate::core::wordlist::{TokenSet, Wordlist};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

pub type Chips = i64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Medal {
    Gold,
    Silver,
    Bronze,
}

impl Medal {
    pub const TIERS: [Medal; 3] = [Medal::Gold, Medal::Silver, Medal::Bronze];

    pub fn as_str(self) -> &'static str {
        match self {
            Medal::Gold => "Gold",
            Medal::Silver => "Silver",
            Medal::Bronze => "Bronze",
        }
    }

    /// Label printed on the console.
    pub fn label(self) -> &'static str {
        match self {
            Medal::Gold => "Guld",
            Medal::Silver => "Silver",
            Medal::Bronze => "Brons",
        }
    }
}

impl fmt::Display for Medal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    pub club: String,
    pub chips: Chips,
    pub medal: Option<Medal>,
}

impl Player {
    pub fn new(name: &str, club: &str, chips: Chips) -> Self {
        Self {
            name: name.trim().to_string(),
            club: club.trim().to_string(),
            chips,
            medal: None,
        }
    }
}

/// Everything the wordlist run reads before analysing.
#[derive(Debug, Clone, Default)]
pub struct AnalysisInput {
    pub book: TokenSet,
    pub wordlist: Wordlist,
}

#[derive(Debug, Clone)]
pub struct MergeOutcome {
    pub wordlist: Wordlist,
    pub words_before: usize,
    pub added: usize,
    pub elapsed: Duration,
}

#[derive(Debug, Clone)]
pub struct PassReport {
    pub pass: usize,
    pub words_before: usize,
    pub words_after: usize,
    pub added: usize,
    pub elapsed: Duration,
    pub output_path: Option<String>,
}

#[derive(Debug, Clone)]
pub struct AnalysisReport {
    pub book_words: usize,
    pub book_distinct_words: usize,
    pub wordlist_words: usize,
    pub passes: Vec<PassReport>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_medal_names() {
        assert_eq!(Medal::Gold.to_string(), "Gold");
        assert_eq!(Medal::Bronze.to_string(), "Bronze");
        assert_eq!(Medal::Gold.label(), "Guld");
        assert_eq!(Medal::Bronze.label(), "Brons");
    }
}
