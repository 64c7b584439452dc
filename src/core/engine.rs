use crate::core::{AnalysisInput, AnalysisReport, PassReport, Pipeline};
use crate::utils::error::Result;
use crate::utils::monitor::RunMonitor;

/// Runs a wordlist pipeline: one extract, then `passes` rounds of
/// transform and load, each pass starting from the previous list.
pub struct AnalysisEngine<P: Pipeline> {
    pipeline: P,
    passes: usize,
    monitor: RunMonitor,
}

impl<P: Pipeline> AnalysisEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self::new_with_monitoring(pipeline, false)
    }

    pub fn new_with_monitoring(pipeline: P, monitor_enabled: bool) -> Self {
        Self {
            pipeline,
            passes: 1,
            monitor: RunMonitor::new(monitor_enabled),
        }
    }

    pub fn with_passes(mut self, passes: usize) -> Self {
        self.passes = passes.max(1);
        self
    }

    pub async fn run(&mut self) -> Result<AnalysisReport> {
        tracing::info!("Starting wordlist analysis ({} pass(es))", self.passes);

        let input = self.pipeline.extract().await?;
        self.monitor.log_phase("Extract");

        let mut report = AnalysisReport {
            book_words: input.book.total(),
            book_distinct_words: input.book.len(),
            wordlist_words: input.wordlist.len(),
            passes: Vec::with_capacity(self.passes),
        };

        let book = input.book;
        let mut wordlist = input.wordlist;

        for pass in 1..=self.passes {
            let outcome = self
                .pipeline
                .transform(AnalysisInput {
                    book: book.clone(),
                    wordlist,
                })
                .await?;
            self.monitor.log_phase(&format!("Transform pass {}", pass));

            // A failed write is reported in the pass and the run goes on.
            let output_path = match self.pipeline.load(&outcome).await {
                Ok(path) => Some(path),
                Err(e) => {
                    tracing::error!("❌ Writing pass {} failed: {}", pass, e);
                    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
                    None
                }
            };

            report.passes.push(PassReport {
                pass,
                words_before: outcome.words_before,
                words_after: outcome.wordlist.len(),
                added: outcome.added,
                elapsed: outcome.elapsed,
                output_path,
            });
            wordlist = outcome.wordlist;
        }

        self.monitor.log_final();
        Ok(report)
    }
}
