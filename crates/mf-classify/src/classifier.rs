//! The format classifier: rule tables plus diagnostic reporting.

use std::sync::Arc;

use mf_core::{NormalizedMediaInfo, ProbeResult, StreamKind, SCHEMA_REVISION};

use crate::audio::classify_audio;
use crate::channels::audio_channels;
use crate::dynamic_range::{dynamic_range, dynamic_range_type};
use crate::report::{DiagnosticSink, TracingSink, UnknownFormat};
use crate::runtime::resolve_runtime;
use crate::video::classify_video;

/// Where a classified value came from, attached to diagnostic events.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileContext<'a> {
    /// Release or file name of the media file.
    pub release_name: Option<&'a str>,
    /// Full probe record.
    pub probe: Option<&'a ProbeResult>,
}

impl<'a> FileContext<'a> {
    /// Context carrying only a release name.
    pub fn release(release_name: &'a str) -> Self {
        Self {
            release_name: Some(release_name),
            probe: None,
        }
    }
}

/// Classifies probe results into canonical labels.
///
/// Stateless apart from the shared sink; cheap to clone and safe to use from
/// many threads at once.
#[derive(Clone)]
pub struct FormatClassifier {
    sink: Arc<dyn DiagnosticSink>,
}

impl Default for FormatClassifier {
    fn default() -> Self {
        Self::new(Arc::new(TracingSink))
    }
}

impl std::fmt::Debug for FormatClassifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormatClassifier").finish_non_exhaustive()
    }
}

impl FormatClassifier {
    /// Create a classifier reporting unrecognized formats to `sink`.
    pub fn new(sink: Arc<dyn DiagnosticSink>) -> Self {
        Self { sink }
    }

    /// Canonical audio codec name. See [`classify_audio`].
    pub fn audio_codec(
        &self,
        format: Option<&str>,
        codec_tag: Option<&str>,
        profile: Option<&str>,
        ctx: &FileContext<'_>,
    ) -> Option<String> {
        let result = classify_audio(format, codec_tag, profile);
        if result.is_unrecognized() {
            self.report(StreamKind::Audio, format, codec_tag, profile, ctx);
        }
        result.into_label()
    }

    /// Canonical video codec name, disambiguated with the context's release
    /// name. See [`classify_video`].
    pub fn video_codec(
        &self,
        format: Option<&str>,
        codec_tag: Option<&str>,
        ctx: &FileContext<'_>,
    ) -> Option<String> {
        let result = classify_video(format, codec_tag, ctx.release_name);
        if result.is_unrecognized() {
            self.report(StreamKind::Video, format, codec_tag, None, ctx);
        }
        result.into_label()
    }

    fn report(
        &self,
        kind: StreamKind,
        format: Option<&str>,
        codec_tag: Option<&str>,
        profile: Option<&str>,
        ctx: &FileContext<'_>,
    ) {
        self.sink.unknown_format(&UnknownFormat {
            kind,
            format: format.unwrap_or_default().to_string(),
            codec_tag: codec_tag.unwrap_or_default().to_string(),
            profile: profile.unwrap_or_default().to_string(),
            release_name: ctx.release_name.map(str::to_string),
            path: ctx.probe.map(|p| p.path.clone()),
            probe: ctx.probe.cloned(),
        });
    }

    /// Build the normalized record for a probed file.
    ///
    /// Only the primary (first) audio and video streams feed the codec,
    /// channel and dynamic-range fields. The probe record is not modified.
    pub fn normalize(
        &self,
        probe: &ProbeResult,
        release_name: Option<&str>,
    ) -> NormalizedMediaInfo {
        let ctx = FileContext {
            release_name,
            probe: Some(probe),
        };
        let audio = probe.primary_audio();
        let video = probe.primary_video();

        // A stream without a codec name is present but unidentified.
        let audio_codec = self.audio_codec(
            audio.map(|a| a.codec_name.as_deref().unwrap_or_default()),
            audio.and_then(|a| a.codec_tag.as_deref()),
            audio.and_then(|a| a.profile.as_deref()),
            &ctx,
        );
        let video_codec = self.video_codec(
            video.map(|v| v.codec_name.as_deref().unwrap_or_default()),
            video.and_then(|v| v.codec_tag.as_deref()),
            &ctx,
        );

        let audio_channels = audio
            .map(|a| {
                audio_channels(
                    a.codec_name.as_deref(),
                    a.channel_layout.as_deref(),
                    a.channels,
                )
            })
            .unwrap_or(0.0);

        let video_dynamic_range = video
            .map(|v| {
                dynamic_range(
                    v.codec_tag.as_deref().unwrap_or_default(),
                    v.bit_depth.unwrap_or(0),
                    v.color_primaries.as_deref(),
                    v.color_transfer.as_deref(),
                )
            })
            .unwrap_or_default()
            .to_string();

        NormalizedMediaInfo {
            schema_revision: SCHEMA_REVISION,
            container_format: probe.format_name.clone(),

            audio_codec,
            audio_profile: audio.and_then(|a| a.profile.clone()),
            audio_bitrate: audio.and_then(|a| a.bit_rate),
            audio_channels,
            audio_stream_count: probe.stream_count(StreamKind::Audio),
            audio_languages: languages(probe, StreamKind::Audio),

            video_codec,
            video_bit_depth: video.and_then(|v| v.bit_depth),
            video_bitrate: video.and_then(|v| v.bit_rate),
            video_fps: video.and_then(|v| v.frame_rate),
            video_color_primaries: video.and_then(|v| v.color_primaries.clone()),
            video_color_transfer: video.and_then(|v| v.color_transfer.clone()),
            video_dynamic_range,
            video_dynamic_range_type: video.map(dynamic_range_type).unwrap_or_default(),
            width: video.and_then(|v| v.width).unwrap_or(0),
            height: video.and_then(|v| v.height).unwrap_or(0),

            subtitles: languages(probe, StreamKind::Subtitle),
            run_time: resolve_runtime(
                audio.and_then(|a| a.duration),
                video.and_then(|v| v.duration),
                probe.duration,
            ),
        }
    }
}

/// Distinct, non-blank language tags of all streams of `kind`, in order.
fn languages(probe: &ProbeResult, kind: StreamKind) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for lang in probe
        .streams_of(kind)
        .filter_map(|s| s.language.as_deref())
        .map(str::trim)
        .filter(|l| !l.is_empty())
    {
        if !out.iter().any(|seen| seen == lang) {
            out.push(lang.to_string());
        }
    }
    out
}
