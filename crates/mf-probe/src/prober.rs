//! The [`Prober`] trait defining the interface for media file probing.

use std::path::Path;

use mf_core::ProbeResult;

/// A media file prober producing a structured [`ProbeResult`].
///
/// Implementations must be safe to share across threads (`Send + Sync`).
pub trait Prober: Send + Sync {
    /// Human-readable name identifying this prober implementation.
    fn name(&self) -> &'static str;

    /// Probe a media file at the given path.
    ///
    /// Fails with [`mf_core::Error::NotFound`] when the file does not exist
    /// and with a probe or tool error when analysis fails.
    fn probe(&self, path: &Path) -> mf_core::Result<ProbeResult>;

    /// Check whether this prober supports the given file path.
    ///
    /// A return value of `true` does not guarantee that [`Prober::probe`]
    /// will succeed.
    fn supports(&self, path: &Path) -> bool;
}
