//! File analysis: probe, then classify.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use mf_classify::FormatClassifier;
use mf_core::{Config, NormalizedMediaInfo, Result};
use mf_probe::{FfprobeProber, Prober};

/// One file to analyze in a batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisRequest {
    pub path: PathBuf,
    /// Release name used to disambiguate H.264/HEVC encoder names.
    pub release_name: Option<String>,
}

impl AnalysisRequest {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            release_name: None,
        }
    }

    pub fn with_release_name(mut self, release_name: impl Into<String>) -> Self {
        self.release_name = Some(release_name.into());
        self
    }
}

/// Result of analyzing one file in a batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisOutcome {
    pub path: PathBuf,
    /// `None` when the file could not be probed.
    pub info: Option<NormalizedMediaInfo>,
}

impl AnalysisOutcome {
    pub fn is_success(&self) -> bool {
        self.info.is_some()
    }
}

/// Composes a [`Prober`] with a [`FormatClassifier`].
///
/// A probe failure only affects the file being analyzed.
pub struct MediaAnalyzer {
    prober: Arc<dyn Prober>,
    classifier: FormatClassifier,
    threads: usize,
}

impl MediaAnalyzer {
    /// Create an analyzer. Batches run on rayon's global pool.
    pub fn new(prober: Arc<dyn Prober>, classifier: FormatClassifier) -> Self {
        Self {
            prober,
            classifier,
            threads: 0,
        }
    }

    /// Create an ffprobe-backed analyzer from configuration.
    ///
    /// Fails with [`mf_core::Error::ToolNotFound`] when ffprobe cannot be
    /// located.
    pub fn from_config(config: &Config) -> Result<Self> {
        let prober = FfprobeProber::from_config(&config.probe)?;
        tracing::debug!(
            prober = prober.name(),
            threads = config.analysis.threads,
            "Media analyzer ready"
        );
        Ok(Self::new(Arc::new(prober), FormatClassifier::default())
            .with_threads(config.analysis.threads))
    }

    /// Number of worker threads for [`analyze_batch`](Self::analyze_batch);
    /// zero uses rayon's global pool.
    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = threads;
        self
    }

    pub fn classifier(&self) -> &FormatClassifier {
        &self.classifier
    }

    /// Probe and normalize a file, propagating probe failures.
    pub fn try_analyze(
        &self,
        path: &Path,
        release_name: Option<&str>,
    ) -> Result<NormalizedMediaInfo> {
        let probe = self.prober.probe(path)?;
        Ok(self.classifier.normalize(&probe, release_name))
    }

    /// Probe and normalize a file.
    ///
    /// Probe failures are logged with the path and yield `None`.
    pub fn analyze(&self, path: &Path, release_name: Option<&str>) -> Option<NormalizedMediaInfo> {
        match self.try_analyze(path, release_name) {
            Ok(info) => Some(info),
            Err(e) if e.is_not_found() => {
                tracing::warn!(path = %path.display(), "Media file not found");
                None
            }
            Err(e) => {
                tracing::error!(path = %path.display(), error = %e, "Failed to analyze media file");
                None
            }
        }
    }

    /// Analyze many files in parallel.
    ///
    /// Returns one outcome per request, in request order.
    pub fn analyze_batch(&self, requests: &[AnalysisRequest]) -> Vec<AnalysisOutcome> {
        let run = || {
            requests
                .par_iter()
                .map(|req| AnalysisOutcome {
                    path: req.path.clone(),
                    info: self.analyze(&req.path, req.release_name.as_deref()),
                })
                .collect::<Vec<_>>()
        };

        if self.threads == 0 {
            return run();
        }

        match rayon::ThreadPoolBuilder::new().num_threads(self.threads).build() {
            Ok(pool) => pool.install(run),
            Err(e) => {
                tracing::warn!(
                    threads = self.threads,
                    error = %e,
                    "Falling back to global thread pool"
                );
                run()
            }
        }
    }
}

impl std::fmt::Debug for MediaAnalyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MediaAnalyzer")
            .field("prober", &self.prober.name())
            .field("threads", &self.threads)
            .finish()
    }
}
