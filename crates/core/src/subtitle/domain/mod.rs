pub mod subtitle_cue;
pub mod subtitle_document;
pub mod subtitle_writer;
pub mod timecode;
