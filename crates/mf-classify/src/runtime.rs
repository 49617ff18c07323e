//! Runtime reconciliation across stream and container durations.

use std::time::Duration;

/// Pick the best runtime estimate.
///
/// Priority, not averaging: a nonzero video-stream duration, then a nonzero
/// audio-stream duration, then the container duration (possibly zero).
/// Containers sometimes report truncated or zero durations, so sane
/// per-stream values are preferred.
///
/// ```
/// use mf_classify::resolve_runtime;
/// use std::time::Duration;
///
/// let runtime = resolve_runtime(None, Some(Duration::from_secs(600)), Duration::from_secs(599));
/// assert_eq!(runtime, Duration::from_secs(600));
/// ```
pub fn resolve_runtime(
    audio: Option<Duration>,
    video: Option<Duration>,
    container: Duration,
) -> Duration {
    video
        .filter(|d| !d.is_zero())
        .or_else(|| audio.filter(|d| !d.is_zero()))
        .unwrap_or(container)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mins(m: u64, s: u64) -> Duration {
        Duration::from_secs(m * 60 + s)
    }

    #[test]
    fn video_wins() {
        assert_eq!(resolve_runtime(None, Some(mins(10, 0)), mins(9, 59)), mins(10, 0));
        assert_eq!(
            resolve_runtime(Some(mins(5, 0)), Some(mins(10, 0)), mins(9, 59)),
            mins(10, 0)
        );
    }

    #[test]
    fn audio_when_no_video() {
        assert_eq!(resolve_runtime(Some(mins(5, 0)), None, mins(9, 59)), mins(5, 0));
    }

    #[test]
    fn container_fallback() {
        assert_eq!(resolve_runtime(None, None, mins(9, 59)), mins(9, 59));
        assert_eq!(resolve_runtime(None, None, Duration::ZERO), Duration::ZERO);
    }

    #[test]
    fn zero_stream_durations_are_skipped() {
        assert_eq!(
            resolve_runtime(Some(mins(5, 0)), Some(Duration::ZERO), mins(9, 59)),
            mins(5, 0)
        );
        assert_eq!(
            resolve_runtime(Some(Duration::ZERO), Some(Duration::ZERO), mins(9, 59)),
            mins(9, 59)
        );
    }
}
