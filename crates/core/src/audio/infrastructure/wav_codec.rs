use std::io::Cursor;

use crate::audio::domain::audio_segment::AudioSegment;

/// Serialize a segment to an in-memory WAV file (mono, 16-bit PCM).
///
/// The recognition service consumes complete WAV clips, so each segment is
/// encoded independently with its own header.
pub fn encode_wav_clip(segment: &AudioSegment) -> Result<Vec<u8>, hound::Error> {
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate: segment.sample_rate(),
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };

    let mut cursor = Cursor::new(Vec::new());
    let mut writer = hound::WavWriter::new(&mut cursor, spec)?;
    for &sample in segment.samples() {
        writer.write_sample(sample)?;
    }
    writer.finalize()?;

    Ok(cursor.into_inner())
}
