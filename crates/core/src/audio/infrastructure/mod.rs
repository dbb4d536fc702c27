pub mod http_recognizer;
pub mod wav_codec;
