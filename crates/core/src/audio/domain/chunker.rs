use thiserror::Error;

use super::audio_segment::{AudioSegment, AudioTrack};

#[derive(Error, Debug)]
pub enum ChunkError {
    #[error("chunk duration must be positive, got {given}ms")]
    InvalidDuration { given: u64 },
}

/// Splits an audio track into fixed-duration segments.
pub struct Chunker;

impl Chunker {
    /// Split `track` into segments of `chunk_duration_ms` each.
    ///
    /// Segments are returned in strictly increasing index order with no gaps
    /// or overlaps; their sample counts sum exactly to the track's sample
    /// count. The final segment may be shorter than the configured duration.
    pub fn split(
        track: &AudioTrack,
        chunk_duration_ms: u64,
    ) -> Result<Vec<AudioSegment>, ChunkError> {
        if chunk_duration_ms == 0 {
            return Err(ChunkError::InvalidDuration {
                given: chunk_duration_ms,
            });
        }

        let samples_per_chunk =
            (track.sample_rate() as u64 * chunk_duration_ms / 1000).max(1) as usize;

        Ok(track
            .samples()
            .chunks(samples_per_chunk)
            .enumerate()
            .map(|(index, chunk)| AudioSegment::new(index, chunk.to_vec(), track.sample_rate()))
            .collect())
    }
}
