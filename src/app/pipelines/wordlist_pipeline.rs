use crate::core::wordlist::{timestamped_path, TokenSet, Wordlist};
use crate::core::{AnalysisInput, MergeOutcome, Pipeline, Storage, TextSource};
use crate::utils::error::Result;
use std::path::Path;
use std::time::Instant;

/// Book words into a stored word list.
///
/// Read failures are logged and replaced by empty data; only `load`
/// reports its failure to the caller.
pub struct WordlistPipeline<S: Storage, T: TextSource> {
    storage: S,
    source: T,
    wordlist_file: String,
}

impl<S: Storage, T: TextSource> WordlistPipeline<S, T> {
    /// `wordlist_file` is relative to the storage.
    pub fn new(storage: S, source: T, wordlist_file: impl Into<String>) -> Self {
        Self {
            storage,
            source,
            wordlist_file: wordlist_file.into(),
        }
    }

    async fn read_book(&self) -> TokenSet {
        tracing::info!("Reading words from book: {}", self.source.location());

        let book = match self.source.fetch_lines().await {
            Ok(lines) => TokenSet::from_lines(&lines),
            Err(e) => {
                tracing::error!("Failed to read book, continuing without it: {}", e);
                TokenSet::default()
            }
        };

        tracing::info!("Book contained {} words", book.total());
        tracing::info!("Book contained {} distinct words", book.len());
        book
    }

    async fn read_wordlist(&self) -> Wordlist {
        tracing::info!("Reading wordlist: {}", self.wordlist_file);

        let wordlist = match self.storage.read_file(&self.wordlist_file).await {
            Ok(data) => Wordlist::parse(&String::from_utf8_lossy(&data)),
            Err(e) => {
                tracing::error!("Failed to read wordlist, starting empty: {}", e);
                Wordlist::new()
            }
        };

        tracing::info!("Wordlist contained {} distinct words", wordlist.len());
        wordlist
    }
}

#[async_trait::async_trait]
impl<S: Storage, T: TextSource> Pipeline for WordlistPipeline<S, T> {
    async fn extract(&self) -> Result<AnalysisInput> {
        let book = self.read_book().await;
        let wordlist = self.read_wordlist().await;
        Ok(AnalysisInput { book, wordlist })
    }

    async fn transform(&self, input: AnalysisInput) -> Result<MergeOutcome> {
        tracing::info!("Merging book words into wordlist");
        let started = Instant::now();

        let mut wordlist = input.wordlist;
        let words_before = wordlist.len();
        let added = wordlist.merge(input.book.words().iter().cloned());
        wordlist.shuffle(&mut rand::thread_rng());

        let elapsed = started.elapsed();
        tracing::info!("Merge took {:.3}s", elapsed.as_secs_f64());
        tracing::info!("{} new words", added);

        Ok(MergeOutcome {
            wordlist,
            words_before,
            added,
            elapsed,
        })
    }

    async fn load(&self, outcome: &MergeOutcome) -> Result<String> {
        let timestamp = chrono::Utc::now().timestamp_millis();
        let output = timestamped_path(Path::new(&self.wordlist_file), timestamp)
            .to_string_lossy()
            .into_owned();

        tracing::info!("Writing wordlist: {}", output);
        self.storage
            .write_file(&output, outcome.wordlist.to_file_contents().as_bytes())
            .await?;

        tracing::debug!("Wrote {} words", outcome.wordlist.len());
        Ok(output)
    }
}
