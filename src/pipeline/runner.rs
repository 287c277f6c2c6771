//! Pipeline runner — orchestrates stage execution.
//!
//! The [`Pipeline`] executes the stages in order — aggregate lines into
//! the count mapping, select the top N, scale and render — notifying a
//! [`PipelineObserver`] at each boundary. The pass is single-threaded and
//! strictly sequential; no stage knows about the stages downstream of it.
//!
//! A mid-read failure does not abort the run: the failure is reported to
//! the observer and the remaining stages operate on the counts
//! accumulated before it.

use std::io::{BufRead, Write};

use crate::cloud::{select_top, HtmlRenderer};
use crate::error::TagCloudError;
use crate::nlp::{SeparatorSet, WordCounter};
use crate::pipeline::observer::{
    PipelineObserver, StageClock, StageReport, STAGE_AGGREGATE, STAGE_RENDER, STAGE_SELECT,
};
use crate::types::{CloudConfig, CloudStats, RankedEntry};

// ---------------------------------------------------------------------------
// Conditional tracing support
// ---------------------------------------------------------------------------

/// Enter a tracing span for a pipeline stage (when the `tracing` feature is
/// enabled). When disabled, this is a no-op and the compiler eliminates it.
macro_rules! trace_stage {
    ($name:expr) => {
        #[cfg(feature = "tracing")]
        let _span = tracing::info_span!("pipeline_stage", stage = $name).entered();
    };
}

/// A tag cloud pipeline bound to one configuration.
#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    config: CloudConfig,
}

impl Pipeline {
    /// Build a pipeline over `config`.
    pub fn new(config: CloudConfig) -> Self {
        Self { config }
    }

    /// The configuration this pipeline runs with.
    pub fn config(&self) -> &CloudConfig {
        &self.config
    }

    /// Run the full pass: aggregate `reader`, select the top `n`, render
    /// to `sink`.
    ///
    /// `source_name` appears in the document title. The precondition
    /// `n <= distinct words` applies as in [`select_top`]; interactive
    /// callers that need the mapping size before choosing `n` use
    /// [`aggregate`](Self::aggregate) and [`finish`](Self::finish)
    /// separately.
    pub fn run<R: BufRead, W: Write>(
        &self,
        reader: R,
        source_name: &str,
        n: usize,
        sink: W,
        observer: &mut impl PipelineObserver,
    ) -> Result<CloudStats, TagCloudError> {
        let counter = self.aggregate(reader, observer);
        self.finish(&counter, source_name, n, sink, observer)
    }

    /// Stage 1: consume every line of `reader` into a [`WordCounter`].
    ///
    /// A mid-read failure is reported via
    /// [`PipelineObserver::on_read_error`] and the counter is returned
    /// with everything accumulated before the failure.
    pub fn aggregate<R: BufRead>(
        &self,
        reader: R,
        observer: &mut impl PipelineObserver,
    ) -> WordCounter {
        trace_stage!(STAGE_AGGREGATE);
        observer.on_stage_start(STAGE_AGGREGATE);
        let clock = StageClock::start();

        let mut counter = WordCounter::new(SeparatorSet::new(&self.config.separators));
        if let Err(error) = counter.consume(reader) {
            #[cfg(feature = "tracing")]
            tracing::warn!(%error, "read failed, continuing with partial counts");
            observer.on_read_error(&error);
        }

        let report = StageReport::new(clock.elapsed()).with_items(counter.distinct_words());
        observer.on_stage_end(STAGE_AGGREGATE, &report);
        counter
    }

    /// Stages 2 and 3: select the top `n` entries of `counter` and render
    /// the document to `sink`.
    pub fn finish<W: Write>(
        &self,
        counter: &WordCounter,
        source_name: &str,
        n: usize,
        sink: W,
        observer: &mut impl PipelineObserver,
    ) -> Result<CloudStats, TagCloudError> {
        trace_stage!(STAGE_SELECT);
        observer.on_stage_start(STAGE_SELECT);
        let clock = StageClock::start();
        let entries = select_top(counter.counts(), n);
        let report = StageReport::new(clock.elapsed()).with_items(entries.len());
        observer.on_stage_end(STAGE_SELECT, &report);

        self.render(counter, source_name, &entries, sink, observer)
    }

    fn render<W: Write>(
        &self,
        counter: &WordCounter,
        source_name: &str,
        entries: &[RankedEntry],
        sink: W,
        observer: &mut impl PipelineObserver,
    ) -> Result<CloudStats, TagCloudError> {
        trace_stage!(STAGE_RENDER);
        observer.on_stage_start(STAGE_RENDER);
        let clock = StageClock::start();

        let renderer = HtmlRenderer::new(&self.config);
        renderer.render(sink, source_name, entries)?;

        let report = StageReport::new(clock.elapsed()).with_items(entries.len());
        observer.on_stage_end(STAGE_RENDER, &report);

        Ok(CloudStats {
            lines_read: counter.lines_read(),
            distinct_words: counter.distinct_words(),
            rendered: entries.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::observer::{NoopObserver, StageTimingObserver};
    use std::io::Cursor;

    const SAMPLE: &str = "The cat.\nthe DOG, the cat!\n";

    fn run_sample(n: usize) -> (CloudStats, String) {
        let pipeline = Pipeline::new(CloudConfig::default());
        let mut sink = Vec::new();
        let stats = pipeline
            .run(Cursor::new(SAMPLE), "input.txt", n, &mut sink, &mut NoopObserver)
            .unwrap();
        (stats, String::from_utf8(sink).unwrap())
    }

    #[test]
    fn test_run_counts_and_renders() {
        let (stats, html) = run_sample(2);

        assert_eq!(
            stats,
            CloudStats {
                lines_read: 2,
                distinct_words: 3,
                rendered: 2,
            }
        );
        // "the" (3) and "cat" (2) survive the cut, alphabetical in the body.
        assert!(html.contains(">cat</span>"));
        assert!(html.contains(">the</span>"));
        assert!(!html.contains(">dog</span>"));

        let cat = html.find(">cat<").unwrap();
        let the = html.find(">the<").unwrap();
        assert!(cat < the);
    }

    #[test]
    fn test_run_with_n_zero() {
        let (stats, html) = run_sample(0);
        assert_eq!(stats.rendered, 0);
        assert!(html.contains("<title>Top 0 words in input.txt</title>"));
        assert!(!html.contains("<span"));
    }

    #[test]
    fn test_run_on_empty_input() {
        let pipeline = Pipeline::new(CloudConfig::default());
        let mut sink = Vec::new();
        let stats = pipeline
            .run(Cursor::new(""), "empty.txt", 0, &mut sink, &mut NoopObserver)
            .unwrap();

        assert_eq!(stats, CloudStats::default());
        assert!(String::from_utf8(sink).unwrap().contains("Top 0 words"));
    }

    #[test]
    fn test_observer_sees_stages_in_order() {
        let pipeline = Pipeline::new(CloudConfig::default());
        let mut observer = StageTimingObserver::new();
        let mut sink = Vec::new();
        pipeline
            .run(Cursor::new(SAMPLE), "input.txt", 3, &mut sink, &mut observer)
            .unwrap();

        let stages: Vec<_> = observer.reports().iter().map(|(s, _)| *s).collect();
        assert_eq!(stages, vec![STAGE_AGGREGATE, STAGE_SELECT, STAGE_RENDER]);
        assert_eq!(observer.read_errors(), 0);

        // The aggregate stage reports the distinct word count.
        assert_eq!(observer.reports()[0].1.items(), Some(3));
    }

    #[test]
    fn test_run_is_idempotent() {
        let (_, first) = run_sample(3);
        let (_, second) = run_sample(3);
        assert_eq!(first, second, "identical input and N must produce identical bytes");
    }

    #[test]
    fn test_aggregate_then_finish_matches_run() {
        // The interactive flow (aggregate, inspect the size, then finish)
        // produces the same document as the single-shot run.
        let pipeline = Pipeline::new(CloudConfig::default());

        let counter = pipeline.aggregate(Cursor::new(SAMPLE), &mut NoopObserver);
        assert_eq!(counter.distinct_words(), 3);

        let mut staged = Vec::new();
        pipeline
            .finish(&counter, "input.txt", 2, &mut staged, &mut NoopObserver)
            .unwrap();

        let (_, single_shot) = run_sample(2);
        assert_eq!(String::from_utf8(staged).unwrap(), single_shot);
    }

    #[test]
    fn test_full_document_golden() {
        let (_, html) = run_sample(3);
        let expected = "\
<html>
 <head>
  <title>Top 3 words in input.txt</title>
  <link href=\"http://web.cse.ohio-state.edu/software/2231/web-sw2/assignments/projects/tag-cloud-generator/data/tagcloud.css\"rel=\"stylesheet\" type=\"text/css\">
 </head>
 <body>
  <h2>Top 3 words in input.txt</h2>
  <hr>
   <div class=\"cdiv\">
    <p class=\"cbox\">
     <span style=\"cursor:default\" class=\"f29\" title=\"count: 2\">cat</span>
     <span style=\"cursor:default\" class=\"f11\" title=\"count: 1\">dog</span>
     <span style=\"cursor:default\" class=\"f48\" title=\"count: 3\">the</span>
    </p>
   </div>
 </body>
</html>
";
        assert_eq!(html, expected);
    }
}
