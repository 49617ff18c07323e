//! Dynamic-range classification of video streams.
//!
//! [`dynamic_range`] yields the coarse "HDR"/"" label. [`dynamic_range_type`]
//! refines it into an [`HdrType`] using side data the prober attaches to the
//! stream.

use mf_core::{HdrType, ProbeStream};

/// Codec tags signalling Dolby Vision.
pub static DOLBY_VISION_TAGS: &[&str] = &["dvhe", "dvh1"];

/// Transfer characteristic markers that indicate HDR.
pub static HDR_TRANSFERS: &[&str] = &["PQ", "HLG", "smpte2084"];

/// Label used for HDR streams.
pub const HDR_LABEL: &str = "HDR";

const MIN_HDR_BIT_DEPTH: u8 = 10;

const DOVI_RECORD: &str = "DOVI configuration record";
const HDR10_PLUS_MARKERS: &[&str] = &["HDR10+", "SMPTE2094-40"];
const STATIC_METADATA_MARKERS: &[&str] = &[
    "Mastering display metadata",
    "Content light level metadata",
];

fn is_dolby_vision_tag(codec_tag: &str) -> bool {
    DOLBY_VISION_TAGS
        .iter()
        .any(|t| t.eq_ignore_ascii_case(codec_tag))
}

fn non_blank(s: Option<&str>) -> Option<&str> {
    s.filter(|v| !v.trim().is_empty())
}

/// Classify a video stream as "HDR" or "".
///
/// Dolby Vision codec tags are HDR regardless of bit depth. Otherwise the
/// stream needs at least 10 bits, BT.2020 primaries, and a PQ or HLG transfer.
///
/// ```
/// use mf_classify::dynamic_range;
///
/// assert_eq!(dynamic_range("dvhe", 8, None, None), "HDR");
/// assert_eq!(dynamic_range("", 10, Some("bt2020"), Some("smpte2084")), "HDR");
/// assert_eq!(dynamic_range("", 8, Some("bt2020"), Some("smpte2084")), "");
/// ```
pub fn dynamic_range(
    codec_tag: &str,
    bit_depth: u8,
    color_primaries: Option<&str>,
    color_transfer: Option<&str>,
) -> &'static str {
    if is_dolby_vision_tag(codec_tag) {
        return HDR_LABEL;
    }

    if bit_depth < MIN_HDR_BIT_DEPTH {
        return "";
    }

    let (Some(primaries), Some(transfer)) = (non_blank(color_primaries), non_blank(color_transfer))
    else {
        return "";
    };

    if primaries.eq_ignore_ascii_case("bt2020")
        && HDR_TRANSFERS.iter().any(|t| transfer.contains(t))
    {
        HDR_LABEL
    } else {
        ""
    }
}

/// Classify a video stream into a specific HDR type.
pub fn dynamic_range_type(stream: &ProbeStream) -> HdrType {
    let has_hdr10_plus = HDR10_PLUS_MARKERS.iter().any(|m| stream.has_side_data(m));

    let dolby_vision = stream.has_side_data(DOVI_RECORD)
        || stream.codec_tag.as_deref().is_some_and(is_dolby_vision_tag);

    if dolby_vision {
        return match stream.dv_bl_compatibility_id {
            Some(1) | Some(6) if has_hdr10_plus => HdrType::DolbyVisionHdr10Plus,
            Some(1) | Some(6) => HdrType::DolbyVisionHdr10,
            Some(2) => HdrType::DolbyVisionSdr,
            Some(4) => HdrType::DolbyVisionHlg,
            _ => HdrType::DolbyVision,
        };
    }

    if stream.bit_depth.unwrap_or(0) < MIN_HDR_BIT_DEPTH {
        return HdrType::None;
    }

    let transfer = non_blank(stream.color_transfer.as_deref())
        .unwrap_or_default()
        .to_ascii_lowercase();

    if transfer.contains("smpte2084") {
        if has_hdr10_plus {
            HdrType::Hdr10Plus
        } else if STATIC_METADATA_MARKERS.iter().any(|m| stream.has_side_data(m)) {
            HdrType::Hdr10
        } else {
            HdrType::Pq10
        }
    } else if transfer.contains("arib-std-b67") {
        HdrType::Hlg10
    } else {
        HdrType::None
    }
}
