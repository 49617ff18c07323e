//! # mf-probe
//!
//! Media file probing into structured [`mf_core::ProbeResult`] records.
//!
//! The actual demuxing is delegated to `ffprobe`; this crate runs it, maps
//! its JSON output onto the shared probe model, and exposes the [`Prober`]
//! seam so callers and tests can substitute their own backends.
//!
//! ## Quick start
//!
//! ```no_run
//! use mf_probe::{FfprobeProber, Prober};
//! use std::path::Path;
//!
//! let prober = FfprobeProber::from_config(&Default::default())?;
//! let info = prober.probe(Path::new("movie.mkv"))?;
//! println!("Container: {}", info.format_name);
//! if let Some(v) = info.primary_video() {
//!     println!("Video: {:?} {:?}x{:?}", v.codec_name, v.width, v.height);
//! }
//! # Ok::<(), mf_core::Error>(())
//! ```

pub mod command;
pub mod composite;
pub mod ffprobe;
pub mod prober;
pub mod tools;

// Re-export key types at crate root for convenience.
pub use command::{ToolCommand, ToolOutput};
pub use composite::CompositeProber;
pub use ffprobe::{parse_ffprobe_json, FfprobeProber};
pub use prober::Prober;
pub use tools::{check_tool, require_tool, resolve_tool, ToolInfo};
