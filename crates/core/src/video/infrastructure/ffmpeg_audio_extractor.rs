use std::path::Path;

use crate::audio::domain::audio_segment::AudioTrack;
use crate::video::domain::audio_extractor::{AudioExtractor, MediaError};

/// Decodes the audio track of a video file using ffmpeg-next.
///
/// The best audio stream is decoded and resampled to packed mono i16 at the
/// requested sample rate, which is the clip format the recognition service
/// expects.
pub struct FfmpegAudioExtractor;

impl AudioExtractor for FfmpegAudioExtractor {
    fn extract(&self, path: &Path, target_sample_rate: u32) -> Result<AudioTrack, MediaError> {
        ffmpeg_next::init().map_err(|e| open_error(path, e))?;

        let mut ictx = ffmpeg_next::format::input(path).map_err(|e| open_error(path, e))?;

        let audio_stream = ictx
            .streams()
            .best(ffmpeg_next::media::Type::Audio)
            .ok_or_else(|| MediaError::NoAudioStream {
                path: path.to_path_buf(),
            })?;

        let audio_stream_index = audio_stream.index();
        let codec_params = audio_stream.parameters();

        let codec_ctx = ffmpeg_next::codec::context::Context::from_parameters(codec_params)
            .map_err(|e| decode_error(path, e))?;
        let mut decoder = codec_ctx
            .decoder()
            .audio()
            .map_err(|e| decode_error(path, e))?;

        let mut resampler = ffmpeg_next::software::resampling::Context::get(
            decoder.format(),
            decoder.channel_layout(),
            decoder.rate(),
            ffmpeg_next::format::Sample::I16(ffmpeg_next::format::sample::Type::Packed),
            ffmpeg_next::ChannelLayout::MONO,
            target_sample_rate,
        )
        .map_err(|e| decode_error(path, e))?;

        let mut all_samples: Vec<i16> = Vec::new();
        let mut decoded_frame = ffmpeg_next::util::frame::audio::Audio::empty();
        let mut resampled_frame = ffmpeg_next::util::frame::audio::Audio::empty();

        for (stream, packet) in ictx.packets() {
            if stream.index() != audio_stream_index {
                continue;
            }

            decoder
                .send_packet(&packet)
                .map_err(|e| decode_error(path, e))?;

            while decoder.receive_frame(&mut decoded_frame).is_ok() {
                resampler
                    .run(&decoded_frame, &mut resampled_frame)
                    .map_err(|e| decode_error(path, e))?;
                extract_i16_samples(&resampled_frame, &mut all_samples);
            }
        }

        // Flush the decoder
        decoder.send_eof().map_err(|e| decode_error(path, e))?;
        while decoder.receive_frame(&mut decoded_frame).is_ok() {
            resampler
                .run(&decoded_frame, &mut resampled_frame)
                .map_err(|e| decode_error(path, e))?;
            extract_i16_samples(&resampled_frame, &mut all_samples);
        }

        // Flush the resampler (may have buffered samples)
        if let Ok(Some(delay)) = resampler.flush(&mut resampled_frame) {
            if delay.output > 0 {
                extract_i16_samples(&resampled_frame, &mut all_samples);
            }
        }

        Ok(AudioTrack::new(all_samples, target_sample_rate))
    }
}

fn open_error(path: &Path, e: ffmpeg_next::Error) -> MediaError {
    MediaError::Open {
        path: path.to_path_buf(),
        source: Box::new(e),
    }
}

fn decode_error(path: &Path, e: ffmpeg_next::Error) -> MediaError {
    MediaError::Decode {
        path: path.to_path_buf(),
        source: Box::new(e),
    }
}

/// Extract i16 samples from a packed mono resampled frame.
fn extract_i16_samples(frame: &ffmpeg_next::util::frame::audio::Audio, out: &mut Vec<i16>) {
    let num_samples = frame.samples();
    if num_samples == 0 {
        return;
    }
    let data = frame.data(0);
    let ints = unsafe { std::slice::from_raw_parts(data.as_ptr() as *const i16, num_samples) };
    out.extend_from_slice(ints);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_nonexistent_file() {
        let extractor = FfmpegAudioExtractor;
        let path = if cfg!(windows) {
            Path::new("Z:\\nonexistent\\file.mp4")
        } else {
            Path::new("/nonexistent/file.mp4")
        };
        let result = extractor.extract(path, 16000);
        assert!(matches!(result, Err(MediaError::Open { .. })));
    }
}
