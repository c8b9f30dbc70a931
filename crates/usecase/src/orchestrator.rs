use chord_kernel_domain::{count_windows, score_windows};
use chord_kernel_ports::{corpus::CorpusProvider, observer::ScoreObserver};
use chord_kernel_shared_kernel::{ErrorContext, InversionMode, LookBack, Progression, Result, StyleKey};
use tracing::debug;

use crate::dto::{ScoreReport, ScoreRequest};

/// Slides the kernel over a progression using a freshly loaded corpus.
///
/// Each run fetches the corpus once and builds its two tables from scratch;
/// nothing is kept between runs.
pub struct ScoreProgression<'a> {
    corpus: &'a dyn CorpusProvider,
    observer: Option<&'a dyn ScoreObserver>,
}

impl<'a> ScoreProgression<'a> {
    pub fn new(corpus: &'a dyn CorpusProvider) -> Self {
        Self { corpus, observer: None }
    }

    pub fn with_observer(mut self, observer: &'a dyn ScoreObserver) -> Self {
        self.observer = Some(observer);
        self
    }

    pub fn run(&self, request: &ScoreRequest) -> Result<ScoreReport> {
        // A missing style surfaces exactly as the provider reported it.
        let text = self.corpus.fetch(&request.style, request.mode)?;
        debug!(style = %request.style, mode = ?request.mode, bytes = text.len(), "loaded corpus");

        if let Some(observer) = self.observer {
            observer.on_start(&request.progression).context("observer rejected progression start")?;
        }

        let look_back = request.look_back;
        let context_table = count_windows(look_back.get(), &text);
        let extended_table = count_windows(look_back.extended(), &text);
        let query = request.progression.as_strs();
        let positions = score_windows(&query, look_back, &context_table, &extended_table);

        if let Some(observer) = self.observer {
            for position in &positions {
                observer
                    .on_position(&request.style, position)
                    .with_context(|| format!("observer rejected position {}", position.position))?;
            }
        }

        Ok(ScoreReport {
            style: request.style.clone(),
            mode: request.mode,
            look_back,
            progression: request.progression.clone(),
            positions,
        })
    }

    pub fn frequencies(&self, request: &ScoreRequest) -> Result<Vec<f64>> {
        self.run(request).map(|report| report.frequencies())
    }
}

/// Scores a raw query string against `style`.
///
/// `look_back` is validated before the corpus is touched.
pub fn score(
    corpus: &dyn CorpusProvider,
    query: &str,
    style: &str,
    with_inversions: bool,
    look_back: usize,
    observer: Option<&dyn ScoreObserver>,
) -> Result<Vec<f64>> {
    let look_back = LookBack::new(look_back)?;
    let request = ScoreRequest::new(Progression::parse(query), StyleKey::new(style)?)
        .mode(InversionMode::from_flag(with_inversions))
        .look_back(look_back);

    let usecase = ScoreProgression::new(corpus);
    match observer {
        Some(observer) => usecase.with_observer(observer).frequencies(&request),
        None => usecase.frequencies(&request),
    }
}

#[cfg(test)]
mod tests {
    use std::{collections::HashMap, sync::Mutex};

    use chord_kernel_domain::PositionScore;
    use chord_kernel_shared_kernel::{ChordKernelError, DomainError, InfrastructureError};

    use super::*;

    #[derive(Default)]
    struct StubCorpus {
        texts: HashMap<(String, InversionMode), String>,
        fetches: Mutex<usize>,
    }

    impl StubCorpus {
        fn with(mut self, style: &str, mode: InversionMode, text: &str) -> Self {
            self.texts.insert((style.into(), mode), text.into());
            self
        }

        fn fetches(&self) -> usize {
            *self.fetches.lock().unwrap()
        }
    }

    impl CorpusProvider for StubCorpus {
        fn fetch(&self, style: &StyleKey, mode: InversionMode) -> Result<String> {
            *self.fetches.lock().unwrap() += 1;
            self.texts
                .get(&(style.as_str().to_string(), mode))
                .cloned()
                .ok_or_else(|| InfrastructureError::StyleNotSupported { style: style.to_string() }.into())
        }
    }

    #[derive(Default)]
    struct RecordingObserver {
        lines: Mutex<Vec<String>>,
    }

    impl ScoreObserver for RecordingObserver {
        fn on_start(&self, progression: &Progression) -> Result<()> {
            self.lines.lock().unwrap().push(format!("start {progression}"));
            Ok(())
        }

        fn on_position(&self, style: &StyleKey, score: &PositionScore) -> Result<()> {
            self.lines.lock().unwrap().push(format!(
                "{style} {} -> {} {:.2}",
                score.context_label(),
                score.following,
                score.percentage()
            ));
            Ok(())
        }
    }

    fn request(query: &str, style: &str, look_back: usize) -> ScoreRequest {
        ScoreRequest::new(Progression::parse(query), StyleKey::new(style).unwrap())
            .look_back(LookBack::new(look_back).unwrap())
    }

    #[test]
    fn scores_each_window_against_the_corpus() {
        let stub = StubCorpus::default().with("bach", InversionMode::Simple, "I,IV,V,I\nI,V,vi,IV");
        let report = ScoreProgression::new(&stub).run(&request("I, V, vi", "bach", 1)).unwrap();

        // I and V each continue two different ways.
        assert_eq!(report.frequencies(), vec![0.5, 0.5]);
        assert_eq!(report.positions[1].context, vec!["V".to_string()]);
        assert_eq!(report.positions[1].following, "vi");
        assert_eq!(stub.fetches(), 1);
    }

    #[test]
    fn selects_corpus_by_inversion_mode() {
        let stub = StubCorpus::default()
            .with("bach", InversionMode::Simple, "V,I,vi")
            .with("bach", InversionMode::WithInversions, "V(1),I(0),vi(0)");
        let usecase = ScoreProgression::new(&stub);
        let simple = request("V(1),I(0)", "bach", 1);
        let inverted = simple.clone().mode(InversionMode::WithInversions);

        assert_eq!(usecase.frequencies(&inverted).unwrap(), vec![1.0]);
        assert_eq!(usecase.frequencies(&simple).unwrap(), vec![0.0]);
    }

    #[test]
    fn unknown_style_propagates_provider_error() {
        let stub = StubCorpus::default();
        let err = ScoreProgression::new(&stub).run(&request("I,V", "nobody", 1)).unwrap_err();

        assert!(matches!(
            err,
            ChordKernelError::Infrastructure(InfrastructureError::StyleNotSupported { ref style }) if style == "nobody"
        ));
    }

    #[test]
    fn short_query_yields_empty_result() {
        let stub = StubCorpus::default().with("bach", InversionMode::Simple, "I,IV,V,I");
        let freqs = ScoreProgression::new(&stub).frequencies(&request("I", "bach", 2)).unwrap();
        assert!(freqs.is_empty());
    }

    #[test]
    fn repeated_runs_are_identical() {
        let stub = StubCorpus::default().with("bach", InversionMode::Simple, "I,IV,V,I\nii,V,I,vi");
        let usecase = ScoreProgression::new(&stub);
        let req = request("ii,V,I,IV", "bach", 1);

        assert_eq!(usecase.run(&req).unwrap(), usecase.run(&req).unwrap());
        assert_eq!(stub.fetches(), 2);
    }

    #[test]
    fn observer_sees_start_and_every_position() {
        let stub = StubCorpus::default().with("bach", InversionMode::Simple, "I,IV,V,I");
        let observer = RecordingObserver::default();
        ScoreProgression::new(&stub)
            .with_observer(&observer)
            .run(&request("I,IV,V", "bach", 1))
            .unwrap();

        let lines = observer.lines.lock().unwrap();
        assert_eq!(*lines, vec!["start I,IV,V", "bach I -> IV 100.00", "bach IV -> V 100.00"]);
    }

    #[test]
    fn score_rejects_zero_context_before_fetching() {
        let stub = StubCorpus::default().with("bach", InversionMode::Simple, "I,IV,V,I");
        let err = score(&stub, "I,IV", "bach", false, 0, None).unwrap_err();

        assert!(matches!(err, ChordKernelError::Domain(DomainError::InvalidContextLength { .. })));
        assert_eq!(stub.fetches(), 0);
    }

    #[test]
    fn score_accepts_raw_arguments() {
        let stub = StubCorpus::default().with("monteverdi", InversionMode::Simple, "I,IV,V,I");
        let freqs = score(&stub, "I,IV,V", "Monteverdi", false, 1, None).unwrap();
        assert_eq!(freqs, vec![1.0, 1.0]);
    }
}
