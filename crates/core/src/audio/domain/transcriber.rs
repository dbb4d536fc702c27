use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use super::audio_segment::AudioSegment;
use super::speech_recognizer::SpeechRecognizer;
use super::transcript::Transcript;

/// Per-run options for segment transcription.
pub struct TranscribeConfig {
    pub language: String,
    /// Called with `(completed, total)` after each segment finishes. Advisory.
    pub on_progress: Option<Box<dyn Fn(usize, usize) + Send + Sync>>,
    /// Checked at segment boundaries; an in-flight recognition call is not
    /// interrupted.
    pub cancelled: Arc<AtomicBool>,
}

impl TranscribeConfig {
    pub fn new(language: impl Into<String>) -> Self {
        Self {
            language: language.into(),
            on_progress: None,
            cancelled: Arc::new(AtomicBool::new(false)),
        }
    }
}

/// Drives a [`SpeechRecognizer`] over an ordered segment list.
///
/// Implementations may dispatch segments concurrently, but the returned
/// transcripts are always in strictly increasing segment index order.
/// Service failures are absorbed per segment (empty transcript), never
/// propagated. A cancelled run returns only the transcripts completed
/// before the cancel point.
pub trait SegmentTranscriber: Send {
    fn transcribe(
        &self,
        recognizer: Arc<dyn SpeechRecognizer>,
        segments: Vec<AudioSegment>,
        config: TranscribeConfig,
    ) -> Vec<Transcript>;
}
