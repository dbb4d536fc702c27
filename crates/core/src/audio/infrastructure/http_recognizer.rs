use std::time::Duration;

use serde::Deserialize;

use crate::audio::domain::audio_segment::AudioSegment;
use crate::audio::domain::speech_recognizer::{
    RecognitionOutcome, RecognitionServiceError, SpeechRecognizer,
};
use crate::audio::infrastructure::wav_codec::encode_wav_clip;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

#[derive(Deserialize)]
struct RecognitionResponse {
    #[serde(default)]
    transcript: Option<String>,
}

/// Speech recognizer backed by a remote HTTP recognition service.
///
/// Each clip is posted as a complete WAV file with the language code in the
/// query string. The service answers with a JSON body carrying a
/// `transcript` field; an empty or absent transcript means no speech was
/// detected in the clip.
pub struct HttpRecognizer {
    endpoint: String,
    api_key: Option<String>,
    client: reqwest::blocking::Client,
}

impl HttpRecognizer {
    pub fn new(endpoint: impl Into<String>) -> Self {
        let client = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_else(|_| reqwest::blocking::Client::new());
        Self {
            endpoint: endpoint.into(),
            api_key: None,
            client,
        }
    }

    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl SpeechRecognizer for HttpRecognizer {
    fn recognize(
        &self,
        clip: &AudioSegment,
        language: &str,
    ) -> Result<RecognitionOutcome, RecognitionServiceError> {
        let wav = encode_wav_clip(clip)
            .map_err(|e| RecognitionServiceError::ClipEncoding(Box::new(e)))?;

        let mut request = self
            .client
            .post(&self.endpoint)
            .query(&[("lang", language)])
            .header(reqwest::header::CONTENT_TYPE, "audio/wav")
            .body(wav);
        if let Some(key) = &self.api_key {
            request = request.query(&[("key", key)]);
        }

        let response = request
            .send()
            .map_err(|e| RecognitionServiceError::Transport(Box::new(e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(RecognitionServiceError::Status {
                status: status.as_u16(),
            });
        }

        let body = response
            .text()
            .map_err(|e| RecognitionServiceError::Transport(Box::new(e)))?;
        parse_response(&body)
    }
}

fn parse_response(body: &str) -> Result<RecognitionOutcome, RecognitionServiceError> {
    if body.trim().is_empty() {
        return Ok(RecognitionOutcome::NoSpeechDetected);
    }

    let parsed: RecognitionResponse =
        serde_json::from_str(body).map_err(|e| RecognitionServiceError::MalformedResponse {
            detail: e.to_string(),
        })?;

    match parsed.transcript {
        Some(text) if !text.trim().is_empty() => Ok(RecognitionOutcome::Recognized(text)),
        _ => Ok(RecognitionOutcome::NoSpeechDetected),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_transcript() {
        let outcome = parse_response(r#"{"transcript": "你好"}"#).unwrap();
        assert_eq!(outcome, RecognitionOutcome::Recognized("你好".to_string()));
    }

    #[test]
    fn test_parse_empty_body_is_no_speech() {
        assert_eq!(
            parse_response("").unwrap(),
            RecognitionOutcome::NoSpeechDetected
        );
    }

    #[test]
    fn test_parse_absent_transcript_is_no_speech() {
        assert_eq!(
            parse_response("{}").unwrap(),
            RecognitionOutcome::NoSpeechDetected
        );
    }

    #[test]
    fn test_parse_blank_transcript_is_no_speech() {
        assert_eq!(
            parse_response(r#"{"transcript": "  "}"#).unwrap(),
            RecognitionOutcome::NoSpeechDetected
        );
    }

    #[test]
    fn test_parse_garbage_is_malformed() {
        let result = parse_response("not json");
        assert!(matches!(
            result,
            Err(RecognitionServiceError::MalformedResponse { .. })
        ));
    }

    #[test]
    fn test_unreachable_endpoint_is_transport_error() {
        let recognizer = HttpRecognizer::new("http://127.0.0.1:1/recognize");
        let clip = AudioSegment::new(0, vec![0i16; 160], 16000);
        let result = recognizer.recognize(&clip, "zh-CN");
        assert!(matches!(
            result,
            Err(RecognitionServiceError::Transport(_))
        ));
    }
}
