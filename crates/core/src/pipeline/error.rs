use std::path::PathBuf;

use thiserror::Error;

use crate::video::domain::audio_extractor::MediaError;
use crate::video::domain::subtitle_burner::EmbedError;

/// Failures that terminate a pipeline run.
///
/// Per-segment recognition failures are absorbed before this level and never
/// appear here. Every variant maps to the stage it occurred in so callers
/// can render a user-facing message.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("audio extraction failed: {0}")]
    Media(#[from] MediaError),
    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("subtitle embedding failed: {0}")]
    Embed(#[from] EmbedError),
    #[error("run cancelled")]
    Cancelled,
}

impl PipelineError {
    /// The pipeline stage this failure belongs to.
    pub fn stage(&self) -> &'static str {
        match self {
            PipelineError::InvalidConfig(_) => "configuration",
            PipelineError::Media(_) => "extracting audio",
            PipelineError::Io { .. } => "writing subtitles",
            PipelineError::Embed(_) => "embedding subtitles",
            PipelineError::Cancelled => "cancelled",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_names() {
        assert_eq!(
            PipelineError::InvalidConfig("bad".into()).stage(),
            "configuration"
        );
        assert_eq!(PipelineError::Cancelled.stage(), "cancelled");
    }

    #[test]
    fn test_media_error_converts() {
        let err: PipelineError = MediaError::NoAudioStream {
            path: PathBuf::from("a.mp4"),
        }
        .into();
        assert_eq!(err.stage(), "extracting audio");
        assert!(err.to_string().contains("a.mp4"));
    }
}
