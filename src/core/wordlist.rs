use rand::seq::SliceRandom;
use rand::Rng;
use regex::Regex;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

static NON_WORD_CHARS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)[^a-zåäö ]+").expect("word filter pattern is valid")
});

/// Lowercase tokens of one line: everything but letters and spaces is
/// removed before splitting, so `"Värld123"` yields `"värld"`.
pub fn tokenize_line(line: &str) -> Vec<String> {
    NON_WORD_CHARS
        .replace_all(line, "")
        .split(' ')
        .filter(|word| !word.is_empty())
        .map(str::to_lowercase)
        .collect()
}

/// Distinct tokens of a text, in order of first appearance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenSet {
    total: usize,
    words: Vec<String>,
}

impl TokenSet {
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = HashSet::new();
        let mut set = Self::default();

        for line in lines {
            for word in tokenize_line(line.as_ref()) {
                set.total += 1;
                if seen.insert(word.clone()) {
                    set.words.push(word);
                }
            }
        }

        set
    }

    pub fn from_text(text: &str) -> Self {
        Self::from_lines(text.lines())
    }

    /// Number of tokens before deduplication.
    pub fn total(&self) -> usize {
        self.total
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }
}

/// A deduplicated, lowercase list of known words.
#[derive(Debug, Clone, Default)]
pub struct Wordlist {
    words: Vec<String>,
    index: HashSet<String>,
}

impl Wordlist {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads the file format: entries separated by newlines and/or commas,
    /// surrounding spaces ignored, empty entries dropped.
    pub fn parse(content: &str) -> Self {
        let mut wordlist = Self::new();
        wordlist.merge(
            content
                .split(['\n', ','])
                .map(|entry| entry.trim().to_lowercase())
                .filter(|entry| !entry.is_empty()),
        );
        wordlist
    }

    /// Adds every word not already present and returns how many were added.
    pub fn merge<I, S>(&mut self, words: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let before = self.words.len();
        for word in words {
            let word = word.into();
            if !self.index.contains(&word) {
                self.index.insert(word.clone());
                self.words.push(word);
            }
        }
        self.words.len() - before
    }

    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.words.shuffle(rng);
    }

    pub fn contains(&self, word: &str) -> bool {
        self.index.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn to_file_contents(&self) -> String {
        let mut contents = self.words.join(",");
        contents.push('\n');
        contents
    }
}

impl<S: Into<String>> FromIterator<S> for Wordlist {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut wordlist = Self::new();
        wordlist.merge(iter);
        wordlist
    }
}

/// `dir/ordlista.csv` becomes `dir/ordlista_<timestamp>.csv`.
pub fn timestamped_path(path: &Path, timestamp_millis: i64) -> PathBuf {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();

    let file_name = match path.extension() {
        Some(ext) => format!("{}_{}.{}", stem, timestamp_millis, ext.to_string_lossy()),
        None => format!("{}_{}", stem, timestamp_millis),
    };

    path.with_file_name(file_name)
}
