use thiserror::Error;

use super::audio_segment::AudioSegment;

/// Result of recognizing one audio clip.
///
/// "No speech" is a normal, frequent outcome for silent or noisy segments,
/// not an error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RecognitionOutcome {
    Recognized(String),
    NoSpeechDetected,
}

/// A transport- or service-level recognition failure.
///
/// These are recoverable at the pipeline level: the affected segment's
/// transcript becomes empty text and the run continues.
#[derive(Error, Debug)]
pub enum RecognitionServiceError {
    #[error("recognition request failed: {0}")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),
    #[error("recognition service returned HTTP {status}")]
    Status { status: u16 },
    #[error("malformed recognition response: {detail}")]
    MalformedResponse { detail: String },
    #[error("failed to encode audio clip: {0}")]
    ClipEncoding(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Domain interface for speech-to-text recognition of a single segment.
pub trait SpeechRecognizer: Send + Sync {
    fn recognize(
        &self,
        clip: &AudioSegment,
        language: &str,
    ) -> Result<RecognitionOutcome, RecognitionServiceError>;
}
