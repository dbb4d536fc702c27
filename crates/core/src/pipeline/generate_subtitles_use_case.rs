use std::fs;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::audio::domain::audio_segment::AudioSegment;
use crate::audio::domain::chunker::Chunker;
use crate::audio::domain::speech_recognizer::SpeechRecognizer;
use crate::audio::domain::transcriber::{SegmentTranscriber, TranscribeConfig};
use crate::audio::domain::transcript::Transcript;
use crate::filtering::domain::filler_filter::FillerFilter;
use crate::filtering::domain::filler_lexicon::FillerLexicon;
use crate::pipeline::error::PipelineError;
use crate::pipeline::progress::ProgressObserver;
use crate::shared::constants::{DEFAULT_CHUNK_DURATION_MS, DEFAULT_LANGUAGE, RECOGNITION_SAMPLE_RATE};
use crate::subtitle::domain::subtitle_document::SubtitleDocument;
use crate::subtitle::domain::subtitle_writer::{SubtitleFormat, SubtitleWriter};
use crate::video::domain::audio_extractor::AudioExtractor;
use crate::video::domain::subtitle_burner::SubtitleBurner;

const SCRATCH_PREFIX: &str = "clearsub-";

/// Configuration for a subtitle generation run.
#[derive(Clone)]
pub struct PipelineConfig {
    pub chunk_duration_ms: u64,
    pub language: String,
    pub format: SubtitleFormat,
    pub lexicon: FillerLexicon,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            chunk_duration_ms: DEFAULT_CHUNK_DURATION_MS,
            language: DEFAULT_LANGUAGE.to_string(),
            format: SubtitleFormat::Srt,
            lexicon: FillerLexicon::default(),
        }
    }
}

/// Counts reported by a completed run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunSummary {
    pub segment_count: usize,
    pub cue_count: usize,
}

/// Orchestrates the full subtitle pipeline: extract audio, chunk, recognize
/// speech, filter filler words, serialize, and optionally burn the result
/// into the video.
///
/// With a burner, `output` is the destination video and the subtitle file is
/// an intermediate inside a per-run scratch directory; without one, `output`
/// is the subtitle file itself. Scratch removal is best-effort in every
/// path, including cancellation and failure.
pub struct GenerateSubtitlesUseCase {
    extractor: Box<dyn AudioExtractor>,
    recognizer: Arc<dyn SpeechRecognizer>,
    transcriber: Box<dyn SegmentTranscriber>,
    burner: Option<Box<dyn SubtitleBurner>>,
    observer: Arc<dyn ProgressObserver>,
    cancelled: Arc<AtomicBool>,
    config: PipelineConfig,
}

impl GenerateSubtitlesUseCase {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        extractor: Box<dyn AudioExtractor>,
        recognizer: Arc<dyn SpeechRecognizer>,
        transcriber: Box<dyn SegmentTranscriber>,
        burner: Option<Box<dyn SubtitleBurner>>,
        observer: Arc<dyn ProgressObserver>,
        cancelled: Option<Arc<AtomicBool>>,
        config: PipelineConfig,
    ) -> Self {
        Self {
            extractor,
            recognizer,
            transcriber,
            burner,
            observer,
            cancelled: cancelled.unwrap_or_else(|| Arc::new(AtomicBool::new(false))),
            config,
        }
    }

    pub fn run(&self, input: &Path, output: &Path) -> Result<RunSummary, PipelineError> {
        if self.config.chunk_duration_ms == 0 {
            return Err(PipelineError::InvalidConfig(
                "chunk duration must be positive".to_string(),
            ));
        }

        self.observer.on_progress(10, "extracting audio");
        let track = self.extractor.extract(input, RECOGNITION_SAMPLE_RATE)?;
        self.check_cancelled()?;

        self.observer.on_progress(20, "splitting audio");
        let segments = Chunker::split(&track, self.config.chunk_duration_ms)
            .map_err(|e| PipelineError::InvalidConfig(e.to_string()))?;
        drop(track);
        let segment_count = segments.len();
        self.check_cancelled()?;

        self.observer.on_progress(30, "recognizing speech");
        let transcripts = self.transcribe(segments);
        self.check_cancelled()?;

        self.observer.on_progress(60, "filtering filler words");
        let filtered: Vec<Transcript> = transcripts
            .iter()
            .map(|t| {
                Transcript::new(t.index, FillerFilter::filter(&t.text, &self.config.lexicon))
            })
            .collect();

        self.observer.on_progress(70, "writing subtitles");
        let document = SubtitleDocument::from_transcripts(&filtered, self.config.chunk_duration_ms);
        let rendered = SubtitleWriter::render(&document, self.config.format);

        // The scratch directory cleans itself up when dropped, so every
        // early-return below still removes the intermediate subtitle file.
        let mut scratch = None;
        let subtitle_path = if self.burner.is_some() {
            let dir = scratch_parent(output);
            let tmp = tempfile::Builder::new()
                .prefix(SCRATCH_PREFIX)
                .tempdir_in(dir)
                .map_err(|e| PipelineError::Io {
                    path: dir.to_path_buf(),
                    source: e,
                })?;
            let path = tmp
                .path()
                .join(format!("subtitles.{}", self.config.format.extension()));
            scratch = Some(tmp);
            path
        } else {
            output.to_path_buf()
        };

        fs::write(&subtitle_path, &rendered).map_err(|e| PipelineError::Io {
            path: subtitle_path.clone(),
            source: e,
        })?;
        self.check_cancelled()?;

        if let Some(burner) = &self.burner {
            self.observer.on_progress(80, "embedding subtitles");
            burner.burn(input, &subtitle_path, output)?;
        }

        self.observer.on_progress(90, "cleaning up");
        if let Some(tmp) = scratch {
            let path = tmp.path().to_path_buf();
            if let Err(e) = tmp.close() {
                log::warn!("failed to remove scratch directory {}: {e}", path.display());
            }
        }

        self.observer.on_progress(100, "done");
        Ok(RunSummary {
            segment_count,
            cue_count: document.cues().len(),
        })
    }

    fn transcribe(&self, segments: Vec<AudioSegment>) -> Vec<Transcript> {
        let observer = Arc::clone(&self.observer);
        let config = TranscribeConfig {
            language: self.config.language.clone(),
            on_progress: Some(Box::new(move |completed, total| {
                let percent = 30 + (completed * 30 / total.max(1)) as u8;
                observer.on_progress(
                    percent,
                    &format!("recognized segment {completed}/{total}"),
                );
            })),
            cancelled: Arc::clone(&self.cancelled),
        };
        self.transcriber
            .transcribe(Arc::clone(&self.recognizer), segments, config)
    }

    fn check_cancelled(&self) -> Result<(), PipelineError> {
        if self.cancelled.load(Ordering::Relaxed) {
            Err(PipelineError::Cancelled)
        } else {
            Ok(())
        }
    }
}

fn scratch_parent(output: &Path) -> &Path {
    match output.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}
