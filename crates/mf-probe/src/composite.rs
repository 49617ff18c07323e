//! A composite prober that delegates to multiple [`Prober`] implementations.

use std::path::Path;

use mf_core::ProbeResult;

use crate::prober::Prober;

/// Tries each registered [`Prober`] in order and returns the first successful result.
pub struct CompositeProber {
    probers: Vec<Box<dyn Prober>>,
}

impl CompositeProber {
    /// Create a new `CompositeProber` from an ordered list of probers.
    ///
    /// The first prober whose [`Prober::supports`] returns `true` and whose
    /// [`Prober::probe`] succeeds wins.
    pub fn new(probers: Vec<Box<dyn Prober>>) -> Self {
        Self { probers }
    }
}

impl Prober for CompositeProber {
    fn name(&self) -> &'static str {
        "composite"
    }

    fn supports(&self, path: &Path) -> bool {
        self.probers.iter().any(|p| p.supports(path))
    }

    fn probe(&self, path: &Path) -> mf_core::Result<ProbeResult> {
        let mut last_err = None;

        for prober in &self.probers {
            if !prober.supports(path) {
                continue;
            }

            match prober.probe(path) {
                Ok(info) => return Ok(info),
                // A missing file will be missing for every backend.
                Err(e) if e.is_not_found() => return Err(e),
                Err(e) => {
                    tracing::debug!(
                        prober = prober.name(),
                        error = %e,
                        "prober failed, trying next"
                    );
                    last_err = Some(e);
                }
            }
        }

        Err(last_err.unwrap_or_else(|| {
            mf_core::Error::Probe(format!("no prober supports file: {}", path.display()))
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    struct Fixed {
        name: &'static str,
        result: fn() -> mf_core::Result<ProbeResult>,
        calls: Arc<AtomicUsize>,
    }

    impl Prober for Fixed {
        fn name(&self) -> &'static str {
            self.name
        }

        fn probe(&self, _path: &Path) -> mf_core::Result<ProbeResult> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            (self.result)()
        }

        fn supports(&self, _path: &Path) -> bool {
            true
        }
    }

    fn fixed(
        name: &'static str,
        result: fn() -> mf_core::Result<ProbeResult>,
    ) -> (Box<dyn Prober>, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        let prober = Fixed {
            name,
            result,
            calls: Arc::clone(&calls),
        };
        (Box::new(prober), calls)
    }

    #[test]
    fn composite_no_probers_returns_error() {
        let composite = CompositeProber::new(vec![]);
        assert!(!composite.supports(Path::new("movie.mkv")));
        let result = composite.probe(Path::new("movie.mkv"));
        assert!(matches!(result, Err(mf_core::Error::Probe(_))));
    }

    #[test]
    fn composite_falls_through_to_next_prober() {
        let (failing, failing_calls) =
            fixed("failing", || Err(mf_core::Error::Probe("bad".into())));
        let (working, working_calls) = fixed("working", || {
            Ok(ProbeResult {
                format_name: "matroska,webm".into(),
                ..Default::default()
            })
        });

        let composite = CompositeProber::new(vec![failing, working]);
        let info = composite.probe(Path::new("movie.mkv")).unwrap();

        assert_eq!(info.format_name, "matroska,webm");
        assert_eq!(failing_calls.load(Ordering::SeqCst), 1);
        assert_eq!(working_calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn composite_stops_on_not_found() {
        let (missing, _) = fixed("missing", || Err(mf_core::Error::not_found("movie.mkv")));
        let (working, working_calls) = fixed("working", || Ok(ProbeResult::default()));

        let composite = CompositeProber::new(vec![missing, working]);
        let err = composite.probe(Path::new("movie.mkv")).unwrap_err();

        assert!(err.is_not_found());
        assert_eq!(working_calls.load(Ordering::SeqCst), 0);
    }
}
