//! Tubely media processing
//!
//! Wraps the external ffprobe and ffmpeg tools behind narrow async traits:
//! [`MediaProber`] classifies the orientation of an uploaded video and
//! [`FastStartRemuxer`] moves container metadata to the front of the file.

pub mod error;
pub mod probe;
pub mod remux;
pub mod traits;
mod tool;

pub use error::MediaError;
pub use probe::{classify_aspect_ratio, parse_probe_output, AspectRatio, Dimensions, Ffprobe};
pub use remux::{fast_start_path, Ffmpeg};
pub use traits::{FastStartRemuxer, MediaProber};
