//! Audio codec classification.
//!
//! An ordered table of (match, label) rules; the first matching rule wins.
//! Comparisons are exact and case-sensitive apart from the `pcm_` prefix rule.

use crate::classification::Classification;

/// How a rule decides whether it applies.
#[derive(Debug, Clone, Copy)]
enum AudioMatch {
    CodecTag(&'static str),
    Format(&'static str),
    FormatPrefix(&'static str),
    FormatIn(&'static [&'static str]),
}

/// How a matching rule produces its label.
#[derive(Debug, Clone, Copy)]
enum AudioLabel {
    Fixed(&'static str),
    /// "DTS", refined by profile.
    Dts,
    /// "AAC", or "HE-AAC" for the SBR Matroska codec id.
    Aac,
}

#[derive(Debug, Clone, Copy)]
struct AudioRule {
    when: AudioMatch,
    label: AudioLabel,
}

const fn rule(when: AudioMatch, label: AudioLabel) -> AudioRule {
    AudioRule { when, label }
}

use AudioLabel::{Aac, Dts, Fixed};
use AudioMatch::{CodecTag, Format, FormatIn, FormatPrefix};

static AUDIO_RULES: &[AudioRule] = &[
    rule(CodecTag("thd+"), Fixed("TrueHD Atmos")),
    rule(Format("truehd"), Fixed("TrueHD")),
    rule(Format("flac"), Fixed("FLAC")),
    rule(Format("dts"), Dts),
    rule(CodecTag("ec+3"), Fixed("EAC3 Atmos")),
    rule(Format("eac3"), Fixed("EAC3")),
    rule(Format("ac3"), Fixed("AC3")),
    rule(Format("aac"), Aac),
    rule(Format("mp3"), Fixed("MP3")),
    rule(Format("mp2"), Fixed("MP2")),
    rule(Format("opus"), Fixed("Opus")),
    rule(FormatPrefix("pcm_"), Fixed("PCM")),
    rule(Format("vorbis"), Fixed("Vorbis")),
    rule(FormatIn(&["wmav1", "wmav2"]), Fixed("WMA")),
];

/// DTS profile → canonical label. Unlisted profiles stay plain "DTS".
static DTS_PROFILES: &[(&str, &str)] = &[
    ("DTS:X", "DTS-X"),
    ("DTS-HD MA", "DTS-HD MA"),
    ("DTS-ES", "DTS-ES"),
    ("DTS-HD HRA", "DTS-HD HRA"),
    ("DTS Express", "DTS Express"),
    ("DTS 96/24", "DTS 96/24"),
];

const HE_AAC_CODEC_ID: &str = "A_AAC/MPEG4/LC/SBR";

impl AudioMatch {
    fn matches(self, format: &str, codec_tag: &str) -> bool {
        match self {
            CodecTag(tag) => codec_tag == tag,
            Format(f) => format == f,
            FormatPrefix(prefix) => format.starts_with(prefix),
            FormatIn(set) => set.contains(&format),
        }
    }
}

impl AudioLabel {
    fn resolve(self, codec_tag: &str, profile: &str) -> &'static str {
        match self {
            Fixed(label) => label,
            Dts => DTS_PROFILES
                .iter()
                .find(|(p, _)| *p == profile)
                .map(|(_, label)| *label)
                .unwrap_or("DTS"),
            Aac if codec_tag == HE_AAC_CODEC_ID => "HE-AAC",
            Aac => "AAC",
        }
    }
}

/// Classify an audio stream's format into its canonical codec name.
///
/// `format` is `None` when the file has no audio stream. A missing codec tag
/// or profile is treated as an empty string.
///
/// ```
/// use mf_classify::{classify_audio, Classification};
///
/// assert_eq!(
///     classify_audio(Some("dts"), None, Some("DTS-HD MA")),
///     Classification::Known("DTS-HD MA".into())
/// );
/// ```
pub fn classify_audio(
    format: Option<&str>,
    codec_tag: Option<&str>,
    profile: Option<&str>,
) -> Classification {
    let Some(format) = format else {
        return Classification::Missing;
    };
    if format.is_empty() {
        return Classification::Unidentified;
    }

    let codec_tag = codec_tag.unwrap_or_default();
    let profile = profile.unwrap_or_default();

    AUDIO_RULES
        .iter()
        .find(|r| r.when.matches(format, codec_tag))
        .map(|r| Classification::Known(r.label.resolve(codec_tag, profile).to_string()))
        .unwrap_or_else(|| Classification::Unrecognized(format.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn label(format: &str, codec_tag: &str, profile: &str) -> Classification {
        classify_audio(Some(format), Some(codec_tag), Some(profile))
    }

    fn known(s: &str) -> Classification {
        Classification::Known(s.to_string())
    }

    #[test]
    fn catalogued_formats() {
        let cases = [
            ("truehd", "thd+", "", "TrueHD Atmos"),
            ("truehd", "", "", "TrueHD"),
            ("flac", "", "", "FLAC"),
            ("dts", "", "", "DTS"),
            ("eac3", "ec+3", "", "EAC3 Atmos"),
            ("eac3", "", "", "EAC3"),
            ("ac3", "", "", "AC3"),
            ("aac", "", "LC", "AAC"),
            ("aac", "A_AAC/MPEG4/LC/SBR", "", "HE-AAC"),
            ("mp3", "", "", "MP3"),
            ("mp2", "", "", "MP2"),
            ("opus", "", "", "Opus"),
            ("pcm_s16le", "", "", "PCM"),
            ("pcm_s24be", "", "", "PCM"),
            ("vorbis", "", "", "Vorbis"),
            ("wmav1", "", "", "WMA"),
            ("wmav2", "", "", "WMA"),
        ];

        for (format, tag, profile, expected) in cases {
            assert_eq!(
                label(format, tag, profile),
                known(expected),
                "format={format} tag={tag} profile={profile}"
            );
        }
    }

    #[test]
    fn dts_profiles() {
        let cases = [
            ("DTS:X", "DTS-X"),
            ("DTS-HD MA", "DTS-HD MA"),
            ("DTS-ES", "DTS-ES"),
            ("DTS-HD HRA", "DTS-HD HRA"),
            ("DTS Express", "DTS Express"),
            ("DTS 96/24", "DTS 96/24"),
            ("DTS", "DTS"),
            ("something else", "DTS"),
        ];

        for (profile, expected) in cases {
            assert_eq!(label("dts", "", profile), known(expected), "{profile}");
        }
    }

    #[test]
    fn codec_tag_rules_win_over_format() {
        // The Atmos tag is checked before any format rule.
        assert_eq!(label("flac", "thd+", ""), known("TrueHD Atmos"));
        // But DTS is listed before the E-AC-3 Atmos tag.
        assert_eq!(label("dts", "ec+3", "DTS-ES"), known("DTS-ES"));
    }

    #[test]
    fn missing_and_unidentified() {
        assert_eq!(classify_audio(None, Some("thd+"), None), Classification::Missing);
        assert_eq!(classify_audio(Some(""), Some("thd+"), None), Classification::Unidentified);
    }

    #[test]
    fn absent_tag_and_profile_default_to_empty() {
        assert_eq!(classify_audio(Some("aac"), None, None), known("AAC"));
        assert_eq!(classify_audio(Some("dts"), None, None), known("DTS"));
    }

    #[test]
    fn comparisons_are_case_sensitive() {
        assert_eq!(
            label("TrueHD", "", ""),
            Classification::Unrecognized("TrueHD".into())
        );
        assert_eq!(label("truehd", "THD+", ""), known("TrueHD"));
        assert_eq!(
            label("PCM_s16le", "", ""),
            Classification::Unrecognized("PCM_s16le".into())
        );
    }

    #[test]
    fn unknown_format_passes_through() {
        assert_eq!(
            label("newcodec123", "", ""),
            Classification::Unrecognized("newcodec123".into())
        );
    }
}
