use std::path::Path;
use std::process::Command;

use crate::video::domain::subtitle_burner::{EmbedError, SubtitleBurner};

/// Burns a subtitle file into a video by invoking the `ffmpeg` executable
/// with a `subtitles=` video filter.
pub struct FfmpegSubtitleBurner;

impl SubtitleBurner for FfmpegSubtitleBurner {
    fn burn(&self, video: &Path, subtitle: &Path, output: &Path) -> Result<(), EmbedError> {
        let filter = format!("subtitles='{}'", escape_filter_path(subtitle));

        let result = Command::new("ffmpeg")
            .arg("-y")
            .arg("-i")
            .arg(video)
            .arg("-vf")
            .arg(&filter)
            .arg(output)
            .output()
            .map_err(EmbedError::Launch)?;

        if !result.status.success() {
            return Err(EmbedError::Transcode {
                status: result.status.to_string(),
                stderr: String::from_utf8_lossy(&result.stderr).into_owned(),
            });
        }

        log::debug!("burned {} into {}", subtitle.display(), output.display());
        Ok(())
    }
}

/// Escape a path for embedding in an ffmpeg filter string.
///
/// Backslashes must be doubled before colons are escaped, or the added
/// escape characters would themselves be doubled.
pub fn escape_filter_path(path: &Path) -> String {
    path.to_string_lossy()
        .replace('\\', "\\\\")
        .replace(':', "\\:")
}
