//! FFprobe-based media probing.
//!
//! Runs `ffprobe` with JSON output and maps its format and stream sections
//! onto [`ProbeResult`]. The mapping is lenient: fields ffprobe omits or
//! reports in an unexpected shape become `None` rather than failing the probe.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use mf_core::config::ProbeConfig;
use mf_core::{Error, ProbeResult, ProbeStream, Result, StreamKind};

use crate::command::ToolCommand;
use crate::prober::Prober;
use crate::tools::resolve_tool;

#[derive(Debug, Deserialize)]
struct FfprobeOutput {
    #[serde(default)]
    format: FfprobeFormat,
    #[serde(default)]
    streams: Vec<FfprobeStream>,
}

#[derive(Debug, Default, Deserialize)]
struct FfprobeFormat {
    #[serde(default)]
    format_name: String,
    duration: Option<String>,
    bit_rate: Option<String>,
    size: Option<String>,
}

#[derive(Debug, Deserialize)]
struct FfprobeStream {
    #[serde(default)]
    index: u32,
    #[serde(default)]
    codec_type: String,
    codec_name: Option<String>,
    codec_tag_string: Option<String>,
    profile: Option<String>,
    bit_rate: Option<String>,
    bits_per_raw_sample: Option<String>,
    pix_fmt: Option<String>,
    width: Option<u32>,
    height: Option<u32>,
    r_frame_rate: Option<String>,
    avg_frame_rate: Option<String>,
    color_primaries: Option<String>,
    color_transfer: Option<String>,
    channels: Option<u32>,
    channel_layout: Option<String>,
    duration: Option<String>,
    #[serde(default)]
    disposition: FfprobeDisposition,
    #[serde(default)]
    tags: HashMap<String, String>,
    #[serde(default)]
    side_data_list: Vec<FfprobeSideData>,
}

#[derive(Debug, Default, Deserialize)]
struct FfprobeDisposition {
    #[serde(default)]
    default: u8,
}

#[derive(Debug, Deserialize)]
struct FfprobeSideData {
    side_data_type: Option<String>,
    dv_bl_signal_compatibility_id: Option<u8>,
}

/// Prober backed by the `ffprobe` command-line tool.
#[derive(Debug, Clone)]
pub struct FfprobeProber {
    program: PathBuf,
    probe_size: Option<u64>,
    analyze_duration_us: Option<u64>,
}

impl FfprobeProber {
    /// Create a prober that runs the given ffprobe binary.
    pub fn new(program: PathBuf) -> Self {
        Self {
            program,
            probe_size: None,
            analyze_duration_us: None,
        }
    }

    /// Resolve ffprobe from configuration (or `PATH`) and apply its options.
    pub fn from_config(config: &ProbeConfig) -> Result<Self> {
        let program = resolve_tool("ffprobe", config.ffprobe_path.as_deref())?;
        Ok(Self {
            program,
            probe_size: config.probe_size,
            analyze_duration_us: config.analyze_duration_us,
        })
    }

    fn command(&self, path: &Path) -> ToolCommand {
        let mut cmd = ToolCommand::new(self.program.clone());
        cmd.args(["-v", "quiet", "-print_format", "json"]);
        if let Some(size) = self.probe_size {
            cmd.arg("-probesize").arg(size.to_string());
        }
        if let Some(us) = self.analyze_duration_us {
            cmd.arg("-analyzeduration").arg(us.to_string());
        }
        cmd.args(["-show_format", "-show_streams"]);
        cmd.arg(path.to_string_lossy());
        cmd
    }
}

impl Prober for FfprobeProber {
    fn name(&self) -> &'static str {
        "ffprobe"
    }

    fn supports(&self, _path: &Path) -> bool {
        true
    }

    fn probe(&self, path: &Path) -> Result<ProbeResult> {
        if !path.exists() {
            return Err(Error::not_found(path));
        }

        let output = self.command(path).execute()?;
        parse_ffprobe_json(path, &output.stdout)
    }
}

/// Parse `ffprobe -print_format json -show_format -show_streams` output.
pub fn parse_ffprobe_json(path: &Path, json: &str) -> Result<ProbeResult> {
    let output: FfprobeOutput =
        serde_json::from_str(json).map_err(|e| Error::parse("ffprobe", e.to_string()))?;

    Ok(ProbeResult {
        path: path.to_path_buf(),
        format_name: output.format.format_name,
        duration: output
            .format
            .duration
            .as_deref()
            .and_then(parse_seconds)
            .unwrap_or_default(),
        bit_rate: output.format.bit_rate.and_then(|s| s.parse().ok()),
        size: output.format.size.and_then(|s| s.parse().ok()),
        streams: output.streams.into_iter().map(convert_stream).collect(),
    })
}

fn convert_stream(stream: FfprobeStream) -> ProbeStream {
    let duration = stream
        .duration
        .as_deref()
        .and_then(parse_seconds)
        .or_else(|| {
            // Matroska keeps per-stream duration in a "DURATION" (or
            // "DURATION-<lang>") tag instead.
            stream
                .tags
                .get("DURATION")
                .or_else(|| {
                    let mut keys: Vec<&String> = stream
                        .tags
                        .keys()
                        .filter(|k| k.to_ascii_uppercase().starts_with("DURATION"))
                        .collect();
                    keys.sort();
                    keys.first().and_then(|k| stream.tags.get(*k))
                })
                .and_then(|v| parse_timestamp(v))
        });

    let bit_depth = stream
        .bits_per_raw_sample
        .as_deref()
        .and_then(|s| s.parse::<u8>().ok())
        .filter(|d| *d > 0)
        .or_else(|| stream.pix_fmt.as_deref().and_then(bit_depth_from_pix_fmt));

    let frame_rate = stream
        .r_frame_rate
        .as_deref()
        .and_then(parse_frame_rate)
        .or_else(|| stream.avg_frame_rate.as_deref().and_then(parse_frame_rate));

    ProbeStream {
        index: stream.index,
        kind: StreamKind::from_codec_type(&stream.codec_type),
        codec_name: stream.codec_name,
        codec_tag: stream.codec_tag_string.and_then(parse_codec_tag),
        profile: stream.profile,
        bit_rate: stream.bit_rate.and_then(|s| s.parse().ok()),
        bit_depth,
        width: stream.width,
        height: stream.height,
        frame_rate,
        color_primaries: stream.color_primaries,
        color_transfer: stream.color_transfer,
        channels: stream.channels,
        channel_layout: stream.channel_layout,
        duration,
        language: stream.tags.get("language").cloned(),
        default: stream.disposition.default == 1,
        dv_bl_compatibility_id: stream
            .side_data_list
            .iter()
            .find_map(|sd| sd.dv_bl_signal_compatibility_id),
        side_data: stream
            .side_data_list
            .into_iter()
            .filter_map(|sd| sd.side_data_type)
            .collect(),
    }
}

/// ffprobe prints unprintable fourcc bytes as `[N]` and unknown tags as
/// `0x…`; such tags carry no information.
fn parse_codec_tag(tag: String) -> Option<String> {
    if tag.is_empty() || tag.contains('[') || tag.starts_with("0x") {
        None
    } else {
        Some(tag)
    }
}

fn parse_seconds(s: &str) -> Option<Duration> {
    let secs: f64 = s.trim().parse().ok()?;
    Duration::try_from_secs_f64(secs).ok()
}

/// Parse an `HH:MM:SS.fraction` timestamp.
fn parse_timestamp(s: &str) -> Option<Duration> {
    let mut parts = s.trim().splitn(3, ':');
    let hours: u64 = parts.next()?.parse().ok()?;
    let minutes: u64 = parts.next()?.parse().ok()?;
    let sec_part = parts.next()?;
    let (secs, frac) = sec_part.split_once('.').unwrap_or((sec_part, ""));
    let seconds: u64 = secs.parse().ok()?;

    // Fractional digits are nanoseconds padded or truncated to 9 places.
    let digits: String = frac.chars().take(9).collect();
    let nanos: u32 = if digits.is_empty() {
        0
    } else {
        format!("{digits:0<9}").parse().ok()?
    };

    let total = hours
        .checked_mul(3600)?
        .checked_add(minutes.checked_mul(60)?)?
        .checked_add(seconds)?;
    Some(Duration::new(total, nanos))
}

fn parse_frame_rate(rate_str: &str) -> Option<f64> {
    let parts: Vec<&str> = rate_str.split('/').collect();
    if parts.len() == 2 {
        let num: f64 = parts[0].parse().ok()?;
        let den: f64 = parts[1].parse().ok()?;
        if den != 0.0 && num != 0.0 {
            return Some(num / den);
        }
        return None;
    }
    rate_str.parse().ok()
}

fn bit_depth_from_pix_fmt(pix_fmt: &str) -> Option<u8> {
    if pix_fmt.is_empty() || pix_fmt == "unknown" {
        return None;
    }
    for depth in [16u8, 14, 12, 10, 9] {
        let d = depth.to_string();
        if pix_fmt.ends_with(&format!("p{d}le"))
            || pix_fmt.ends_with(&format!("p{d}be"))
            || pix_fmt.ends_with(&format!("p{d}"))
        {
            return Some(depth);
        }
    }
    Some(8)
}
