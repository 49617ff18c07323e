//! Canonical classification of media probe results.
//!
//! Turns the raw, heterogeneous strings a prober reports (codec names, codec
//! tags, profiles, channel layouts, colour metadata) into the canonical labels
//! stored on a [`mf_core::NormalizedMediaInfo`].
//!
//! The rule tables are pure functions returning a [`Classification`].
//! [`FormatClassifier`] wraps them, reports unrecognized formats to a
//! [`DiagnosticSink`] and builds the normalized record.

mod audio;
mod channels;
mod classification;
mod classifier;
mod dynamic_range;
pub mod release;
mod report;
mod runtime;
mod video;

pub use audio::classify_audio;
pub use channels::{audio_channels, channel_count, flac_channel_override, layout_channels};
pub use classification::Classification;
pub use classifier::{FileContext, FormatClassifier};
pub use dynamic_range::{
    dynamic_range, dynamic_range_type, DOLBY_VISION_TAGS, HDR_LABEL, HDR_TRANSFERS,
};
pub use report::{DiagnosticSink, MemorySink, TracingSink, UnknownFormat};
pub use runtime::resolve_runtime;
pub use video::classify_video;
