/// Sample rate the recognition service expects for audio clips.
pub const RECOGNITION_SAMPLE_RATE: u32 = 16000;

/// Default transcription window per segment (~one subtitle cue).
pub const DEFAULT_CHUNK_DURATION_MS: u64 = 10000;

pub const DEFAULT_LANGUAGE: &str = "zh-CN";
