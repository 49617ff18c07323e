//! Video codec classification.
//!
//! Same shape as the audio table: ordered rules, first match wins. The
//! format is trimmed before matching. H.264 and HEVC are disambiguated with
//! the release name (see [`crate::release`]).

use crate::classification::Classification;
use crate::release::{match_token, H264_TOKENS, HEVC_TOKENS};

#[derive(Debug, Clone, Copy)]
enum VideoMatch {
    CodecTag(&'static str),
    Format(&'static str),
    FormatIn(&'static [&'static str]),
}

#[derive(Debug, Clone, Copy)]
enum VideoLabel {
    Fixed(&'static str),
    /// First release-name token found, else the last token.
    ReleaseToken(&'static [&'static str]),
    /// The format itself, upper-cased.
    Uppercase,
    /// MPEG-4 Part 2, named after the FourCC.
    Mpeg4,
}

#[derive(Debug, Clone, Copy)]
struct VideoRule {
    when: VideoMatch,
    label: VideoLabel,
}

const fn rule(when: VideoMatch, label: VideoLabel) -> VideoRule {
    VideoRule { when, label }
}

use VideoLabel::{Fixed, Mpeg4, ReleaseToken, Uppercase};
use VideoMatch::{CodecTag, Format, FormatIn};

static VIDEO_RULES: &[VideoRule] = &[
    rule(CodecTag("x264"), Fixed("x264")),
    rule(Format("h264"), ReleaseToken(H264_TOKENS)),
    rule(CodecTag("x265"), Fixed("x265")),
    rule(Format("hevc"), ReleaseToken(HEVC_TOKENS)),
    rule(Format("mpeg2video"), Fixed("MPEG2")),
    rule(Format("mpeg4"), Mpeg4),
    rule(Format("vc1"), Fixed("VC1")),
    rule(Format("av1"), Fixed("AV1")),
    rule(FormatIn(&["vp6", "vp7", "vp8", "vp9"]), Uppercase),
    rule(FormatIn(&["WMV1", "WMV2"]), Fixed("WMV")),
    // Legacy QuickTime/RealVideo formats have no useful canonical name.
    rule(
        FormatIn(&["qtrle", "rpza", "rv10", "rv20", "rv30", "rv40"]),
        Fixed(""),
    ),
];

static DIVX_TAGS: &[&str] = &["DIV3", "DIVX", "DX50"];

impl VideoMatch {
    fn matches(self, format: &str, codec_tag: &str) -> bool {
        match self {
            CodecTag(tag) => codec_tag == tag,
            Format(f) => format == f,
            FormatIn(set) => set.contains(&format),
        }
    }
}

impl VideoLabel {
    fn resolve(self, format: &str, codec_tag: &str, release_name: Option<&str>) -> String {
        match self {
            Fixed(label) => label.to_string(),
            ReleaseToken(tokens) => match_token(release_name, tokens).to_string(),
            Uppercase => format.to_uppercase(),
            Mpeg4 if codec_tag == "XVID" => "XviD".to_string(),
            Mpeg4 if DIVX_TAGS.contains(&codec_tag) => "DivX".to_string(),
            Mpeg4 => String::new(),
        }
    }
}

/// Classify a video stream's format into its canonical codec name.
///
/// `format` is `None` when the file has no video stream. `release_name` is
/// the scene or file name used to prefer encoder names for H.264 and HEVC.
///
/// ```
/// use mf_classify::{classify_video, Classification};
///
/// assert_eq!(
///     classify_video(Some("h264"), None, Some("Show.S01E01.x264-GROUP")),
///     Classification::Known("x264".into())
/// );
/// ```
pub fn classify_video(
    format: Option<&str>,
    codec_tag: Option<&str>,
    release_name: Option<&str>,
) -> Classification {
    let Some(format) = format.map(str::trim) else {
        return Classification::Missing;
    };
    if format.is_empty() {
        return Classification::Unidentified;
    }

    let codec_tag = codec_tag.unwrap_or_default();

    VIDEO_RULES
        .iter()
        .find(|r| r.when.matches(format, codec_tag))
        .map(|r| Classification::Known(r.label.resolve(format, codec_tag, release_name)))
        .unwrap_or_else(|| Classification::Unrecognized(format.to_string()))
}
