use std::path::Path;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum EmbedError {
    #[error("failed to launch the transcoder: {0}")]
    Launch(#[source] std::io::Error),
    #[error("subtitle burn-in failed ({status}): {stderr}")]
    Transcode { status: String, stderr: String },
}

/// Domain interface for compositing a subtitle file into video pixel data.
pub trait SubtitleBurner: Send {
    fn burn(&self, video: &Path, subtitle: &Path, output: &Path) -> Result<(), EmbedError>;
}
