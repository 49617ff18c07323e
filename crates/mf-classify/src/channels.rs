//! Audio channel count derivation.

use std::sync::OnceLock;

use regex::Regex;

fn position_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(\d\.\d)").expect("valid channel position regex"))
}

/// Extract the leading "<digit>.<digit>" position token from a layout
/// description.
///
/// Returns `0.0` when the description does not start with such a token
/// (e.g. "stereo", "22.2", " 5.1").
pub fn layout_channels(layout: &str) -> f64 {
    position_regex()
        .captures(layout)
        .and_then(|c| c.get(1))
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .unwrap_or(0.0)
}

/// Channel count from a layout description, falling back to the raw count.
///
/// ```
/// use mf_classify::channel_count;
///
/// assert_eq!(channel_count(Some("5.1(side)"), Some(6)), 5.1);
/// assert_eq!(channel_count(None, Some(2)), 2.0);
/// assert_eq!(channel_count(None, None), 0.0);
/// ```
pub fn channel_count(layout: Option<&str>, raw_channels: Option<u32>) -> f64 {
    let from_layout = layout.map(layout_channels).unwrap_or(0.0);
    if from_layout > 0.0 {
        return from_layout;
    }

    raw_channels.map(f64::from).unwrap_or(0.0)
}

/// FLAC streams that report six raw channels are 5.1 audio.
pub fn flac_channel_override(format: Option<&str>, raw_channels: Option<u32>) -> Option<f64> {
    match (format, raw_channels) {
        (Some("flac"), Some(6)) => Some(5.1),
        _ => None,
    }
}

/// Channel count for a normalized record.
///
/// Order: layout-derived count, then the FLAC six-channel rule, then the raw
/// count, then zero.
pub fn audio_channels(
    format: Option<&str>,
    layout: Option<&str>,
    raw_channels: Option<u32>,
) -> f64 {
    let from_layout = layout.map(layout_channels).unwrap_or(0.0);
    if from_layout > 0.0 {
        return from_layout;
    }

    flac_channel_override(format, raw_channels)
        .unwrap_or_else(|| channel_count(None, raw_channels))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_token_extraction() {
        assert_eq!(layout_channels("5.1(side)"), 5.1);
        assert_eq!(layout_channels("7.1"), 7.1);
        assert_eq!(layout_channels("7.1(wide)"), 7.1);
        assert_eq!(layout_channels("22.2"), 0.0);
        assert_eq!(layout_channels(" 5.1"), 0.0);
        assert_eq!(layout_channels("stereo"), 0.0);
        assert_eq!(layout_channels("mono"), 0.0);
        assert_eq!(layout_channels(""), 0.0);
        // Only a leading token counts.
        assert_eq!(layout_channels("quad 4.0"), 0.0);
    }

    #[test]
    fn layout_wins_over_raw_count() {
        assert_eq!(channel_count(Some("5.1(side)"), Some(6)), 5.1);
        assert_eq!(channel_count(Some("7.1"), Some(8)), 7.1);
    }

    #[test]
    fn raw_count_fallback() {
        assert_eq!(channel_count(None, Some(2)), 2.0);
        assert_eq!(channel_count(Some("stereo"), Some(2)), 2.0);
        assert_eq!(channel_count(Some("4.0"), Some(4)), 4.0);
        assert_eq!(channel_count(Some("22.2"), Some(24)), 24.0);
    }

    #[test]
    fn nothing_available_is_zero() {
        assert_eq!(channel_count(None, None), 0.0);
        assert_eq!(channel_count(Some("unknown"), None), 0.0);
    }

    #[test]
    fn flac_six_channels_is_five_one() {
        assert_eq!(flac_channel_override(Some("flac"), Some(6)), Some(5.1));
        assert_eq!(flac_channel_override(Some("flac"), Some(2)), None);
        assert_eq!(flac_channel_override(Some("ac3"), Some(6)), None);
        assert_eq!(flac_channel_override(None, Some(6)), None);
    }

    #[test]
    fn audio_channels_composition() {
        // Layout first.
        assert_eq!(audio_channels(Some("flac"), Some("5.1(side)"), Some(6)), 5.1);
        // FLAC rule when the layout has no position token.
        assert_eq!(audio_channels(Some("flac"), None, Some(6)), 5.1);
        assert_eq!(audio_channels(Some("flac"), Some("hexagonal"), Some(6)), 5.1);
        // Raw count for everything else.
        assert_eq!(audio_channels(Some("ac3"), None, Some(6)), 6.0);
        assert_eq!(audio_channels(Some("aac"), Some("stereo"), Some(2)), 2.0);
        assert_eq!(audio_channels(None, None, None), 0.0);
    }
}
