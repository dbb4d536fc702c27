use std::sync::atomic::Ordering;
use std::sync::Arc;

use crate::audio::domain::audio_segment::AudioSegment;
use crate::audio::domain::speech_recognizer::{RecognitionOutcome, SpeechRecognizer};
use crate::audio::domain::transcriber::{SegmentTranscriber, TranscribeConfig};
use crate::audio::domain::transcript::Transcript;

const DEFAULT_CHANNEL_CAPACITY: usize = 8;

/// Transcribes segments on a bounded worker pool.
///
/// Layout: `dispatcher → workers [recognize] → main [collect/reorder]`
///
/// The recognition service is the rate-limiting resource, so the pool stays
/// small; one worker reproduces strictly sequential dispatch. Results are
/// collected in completion order and re-sorted to segment index order before
/// returning, so downstream stages never observe dispatch order.
pub struct PooledTranscriber {
    workers: usize,
}

impl PooledTranscriber {
    pub fn new(workers: usize) -> Self {
        Self {
            workers: workers.max(1),
        }
    }
}

impl Default for PooledTranscriber {
    fn default() -> Self {
        Self::new(1)
    }
}

impl SegmentTranscriber for PooledTranscriber {
    fn transcribe(
        &self,
        recognizer: Arc<dyn SpeechRecognizer>,
        segments: Vec<AudioSegment>,
        config: TranscribeConfig,
    ) -> Vec<Transcript> {
        let total = segments.len();
        if total == 0 {
            return Vec::new();
        }

        let workers = self.workers.min(total);
        let TranscribeConfig {
            language,
            on_progress,
            cancelled,
        } = config;

        let (job_tx, job_rx) =
            crossbeam_channel::bounded::<AudioSegment>(DEFAULT_CHANNEL_CAPACITY);
        let (result_tx, result_rx) =
            crossbeam_channel::bounded::<Transcript>(DEFAULT_CHANNEL_CAPACITY);

        let mut transcripts = Vec::with_capacity(total);

        std::thread::scope(|scope| {
            for _ in 0..workers {
                let job_rx = job_rx.clone();
                let result_tx = result_tx.clone();
                let recognizer = Arc::clone(&recognizer);
                let language = language.clone();
                scope.spawn(move || {
                    for segment in job_rx {
                        let transcript =
                            recognize_segment(recognizer.as_ref(), &segment, &language);
                        if result_tx.send(transcript).is_err() {
                            break;
                        }
                    }
                });
            }
            drop(job_rx);
            drop(result_tx);

            let dispatch_cancelled = Arc::clone(&cancelled);
            scope.spawn(move || {
                for segment in segments {
                    if dispatch_cancelled.load(Ordering::Relaxed) {
                        break;
                    }
                    if job_tx.send(segment).is_err() {
                        break;
                    }
                }
            });

            for transcript in result_rx {
                transcripts.push(transcript);
                if let Some(callback) = &on_progress {
                    callback(transcripts.len(), total);
                }
            }
        });

        transcripts.sort_by_key(|t| t.index);
        transcripts
    }
}

fn recognize_segment(
    recognizer: &dyn SpeechRecognizer,
    segment: &AudioSegment,
    language: &str,
) -> Transcript {
    match recognizer.recognize(segment, language) {
        Ok(RecognitionOutcome::Recognized(text)) => Transcript::new(segment.index(), text),
        Ok(RecognitionOutcome::NoSpeechDetected) => Transcript::empty(segment.index()),
        Err(e) => {
            log::warn!(
                "segment {}: recognition failed, substituting empty transcript: {e}",
                segment.index()
            );
            Transcript::empty(segment.index())
        }
    }
}
