//! Release-name token matching.
//!
//! Release names often carry the encoder ("x264", "x265") rather than the
//! codec standard. Surfacing that token gives users the name they recognize.

/// Media file extensions stripped from a release name before matching.
static MEDIA_EXTENSIONS: &[&str] = &[
    "3gp", "asf", "asx", "avc", "avi", "bin", "bivx", "dat", "divx", "dv", "dvr-ms", "fli",
    "flv", "ifo", "img", "iso", "m2t", "m2ts", "m2v", "m4v", "mk3d", "mkv", "mov", "mp4",
    "mpeg", "mpg", "mts", "nrg", "nsv", "nuv", "ogm", "ogv", "pva", "qt", "rm", "rmvb", "strm",
    "svq3", "ts", "ty", "viv", "vob", "vp3", "webm", "wmv", "wpl", "wtv", "xvid",
];

/// Tokens tried for H.264 streams; the last one is the fallback.
pub static H264_TOKENS: &[&str] = &["AVC", "x264", "h264"];

/// Tokens tried for HEVC streams; the last one is the fallback.
pub static HEVC_TOKENS: &[&str] = &["HEVC", "x265", "h265"];

/// Remove a known media file extension from the end of `name`.
///
/// Names without an extension, or with an extension that is not a media
/// container (e.g. the group suffix in "Show.x264-GROUP"), are returned as is.
pub fn strip_extension(name: &str) -> &str {
    match name.rsplit_once('.') {
        Some((stem, ext))
            if MEDIA_EXTENSIONS
                .iter()
                .any(|known| known.eq_ignore_ascii_case(ext)) =>
        {
            stem
        }
        _ => name,
    }
}

/// Pick the first token that appears in the release name.
///
/// The match is a case-insensitive substring search over the name with its
/// media extension removed. When nothing matches, or the name is absent or
/// blank, the last token is returned.
///
/// ```
/// use mf_classify::release::{match_token, H264_TOKENS};
///
/// assert_eq!(match_token(Some("Show.S01E01.1080p.x264-GROUP"), H264_TOKENS), "x264");
/// assert_eq!(match_token(None, H264_TOKENS), "h264");
/// ```
pub fn match_token<'t>(release_name: Option<&str>, tokens: &[&'t str]) -> &'t str {
    let name = release_name
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .map(strip_extension)
        .unwrap_or_default()
        .to_lowercase();

    tokens
        .iter()
        .find(|token| !name.is_empty() && name.contains(&token.to_lowercase()))
        .or_else(|| tokens.last())
        .copied()
        .unwrap_or_default()
}
