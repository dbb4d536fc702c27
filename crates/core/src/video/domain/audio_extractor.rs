use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::audio::domain::audio_segment::AudioTrack;

#[derive(Error, Debug)]
pub enum MediaError {
    #[error("cannot open media file {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    #[error("no audio stream in {path}")]
    NoAudioStream { path: PathBuf },
    #[error("audio decoding failed for {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

/// Domain interface for extracting the audio track of a video file.
pub trait AudioExtractor: Send {
    /// Decode the best audio stream to mono signed 16-bit PCM at the given
    /// sample rate.
    fn extract(&self, path: &Path, target_sample_rate: u32) -> Result<AudioTrack, MediaError>;
}
