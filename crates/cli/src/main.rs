use std::path::PathBuf;
use std::process;
use std::sync::Arc;

use clap::Parser;

use clearsub_core::audio::infrastructure::http_recognizer::HttpRecognizer;
use clearsub_core::filtering::domain::filler_lexicon::FillerLexicon;
use clearsub_core::pipeline::generate_subtitles_use_case::{
    GenerateSubtitlesUseCase, PipelineConfig,
};
use clearsub_core::pipeline::infrastructure::pooled_transcriber::PooledTranscriber;
use clearsub_core::pipeline::progress::ProgressObserver;
use clearsub_core::subtitle::domain::subtitle_writer::SubtitleFormat;
use clearsub_core::video::domain::subtitle_burner::SubtitleBurner;
use clearsub_core::video::infrastructure::ffmpeg_audio_extractor::FfmpegAudioExtractor;
use clearsub_core::video::infrastructure::ffmpeg_subtitle_burner::FfmpegSubtitleBurner;

/// Subtitle generation with filler-word filtering for videos.
#[derive(Parser)]
#[command(name = "clearsub")]
struct Cli {
    /// Input video file.
    input: PathBuf,

    /// Output file: a subtitle file, or a video file with --burn-in.
    /// Defaults to the input name with the matching extension.
    output: Option<PathBuf>,

    /// Subtitle format: srt, ass, or txt.
    #[arg(long, default_value = "srt")]
    format: String,

    /// Transcription window per subtitle cue, in milliseconds.
    #[arg(long, default_value = "10000")]
    chunk_ms: u64,

    /// Speech recognition language code.
    #[arg(long, default_value = "zh-CN")]
    language: String,

    /// Speech recognition service endpoint URL.
    #[arg(long)]
    endpoint: String,

    /// Speech recognition service API key.
    #[arg(long)]
    api_key: Option<String>,

    /// JSON file with filler tokens to remove (defaults to the built-in list).
    #[arg(long)]
    fillers: Option<PathBuf>,

    /// Keep filler words in the subtitles.
    #[arg(long)]
    no_filter: bool,

    /// Burn the subtitles into a copy of the video instead of writing a
    /// subtitle file.
    #[arg(long)]
    burn_in: bool,

    /// Concurrent recognition requests.
    #[arg(long, default_value = "1")]
    workers: usize,
}

/// Writes a progress line to stderr, rewriting it in place.
struct StderrProgress;

impl ProgressObserver for StderrProgress {
    fn on_progress(&self, percent: u8, message: &str) {
        eprint!("\r[{percent:3}%] {message}                    ");
        if percent == 100 {
            eprintln!();
        }
    }
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    validate(&cli)?;

    let format = SubtitleFormat::parse(&cli.format)
        .ok_or_else(|| format!("Format must be srt, ass, or txt, got '{}'", cli.format))?;

    let lexicon = if cli.no_filter {
        FillerLexicon::empty()
    } else {
        match &cli.fillers {
            Some(path) => FillerLexicon::from_file(path)?,
            None => FillerLexicon::default(),
        }
    };

    let output = cli
        .output
        .clone()
        .unwrap_or_else(|| default_output(&cli.input, cli.burn_in, format));

    let mut recognizer = HttpRecognizer::new(&cli.endpoint);
    if let Some(key) = &cli.api_key {
        recognizer = recognizer.with_api_key(key);
    }

    let burner: Option<Box<dyn SubtitleBurner>> = if cli.burn_in {
        Some(Box::new(FfmpegSubtitleBurner))
    } else {
        None
    };

    let use_case = GenerateSubtitlesUseCase::new(
        Box::new(FfmpegAudioExtractor),
        Arc::new(recognizer),
        Box::new(PooledTranscriber::new(cli.workers)),
        burner,
        Arc::new(StderrProgress),
        None,
        PipelineConfig {
            chunk_duration_ms: cli.chunk_ms,
            language: cli.language.clone(),
            format,
            lexicon,
        },
    );

    let summary = use_case
        .run(&cli.input, &output)
        .map_err(|e| format!("{e} (stage: {})", e.stage()))?;

    log::info!(
        "{} segments recognized, {} cues written",
        summary.segment_count,
        summary.cue_count
    );
    eprintln!("Output written to {}", output.display());
    Ok(())
}

fn validate(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    if !cli.input.exists() {
        return Err(format!("Input file not found: {}", cli.input.display()).into());
    }
    if cli.chunk_ms == 0 {
        return Err("Chunk duration must be positive".into());
    }
    if cli.workers == 0 {
        return Err("Workers must be at least 1".into());
    }
    if cli.endpoint.is_empty() {
        return Err("Recognition endpoint must not be empty".into());
    }
    if cli.no_filter && cli.fillers.is_some() {
        return Err("--no-filter and --fillers are mutually exclusive".into());
    }
    Ok(())
}

fn default_output(input: &PathBuf, burn_in: bool, format: SubtitleFormat) -> PathBuf {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("output");
    let parent = input.parent().unwrap_or_else(|| std::path::Path::new("."));
    if burn_in {
        let ext = input
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("mp4");
        parent.join(format!("{stem}_processed.{ext}"))
    } else {
        parent.join(format!("{stem}_subtitle.{}", format.extension()))
    }
}
