pub mod audio_segment;
pub mod chunker;
pub mod speech_recognizer;
pub mod transcriber;
pub mod transcript;
