use crate::audio::domain::transcript::Transcript;

use super::subtitle_cue::SubtitleCue;

/// An ordered sequence of cues with strictly increasing, non-overlapping
/// start times.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SubtitleDocument {
    cues: Vec<SubtitleCue>,
}

impl SubtitleDocument {
    /// Build a document from ordered transcripts using a fixed per-segment
    /// time window.
    ///
    /// Each non-blank transcript maps to one cue spanning
    /// `[index * chunk_duration_ms, index * chunk_duration_ms + chunk_duration_ms)`.
    /// The window is the full configured chunk duration even for a shorter
    /// final segment; sub-chunk speech boundaries are not detected. Blank
    /// transcripts produce no cue.
    pub fn from_transcripts(transcripts: &[Transcript], chunk_duration_ms: u64) -> Self {
        let cues = transcripts
            .iter()
            .filter(|t| !t.is_blank())
            .map(|t| {
                let start_ms = t.index as u64 * chunk_duration_ms;
                SubtitleCue::new(start_ms, start_ms + chunk_duration_ms, t.text.clone())
            })
            .collect();
        Self { cues }
    }

    pub fn cues(&self) -> &[SubtitleCue] {
        &self.cues
    }

    pub fn is_empty(&self) -> bool {
        self.cues.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transcripts(texts: &[&str]) -> Vec<Transcript> {
        texts
            .iter()
            .enumerate()
            .map(|(i, t)| Transcript::new(i, *t))
            .collect()
    }

    #[test]
    fn test_blank_transcripts_dropped() {
        let doc = SubtitleDocument::from_transcripts(&transcripts(&["", "你好", ""]), 10000);
        assert_eq!(doc.cues().len(), 1);
        assert_eq!(doc.cues()[0], SubtitleCue::new(10000, 20000, "你好"));
    }

    #[test]
    fn test_cue_window_is_fixed_chunk_duration() {
        let doc = SubtitleDocument::from_transcripts(&transcripts(&["一", "二"]), 5000);
        assert_eq!(doc.cues()[0].start_ms, 0);
        assert_eq!(doc.cues()[0].end_ms, 5000);
        assert_eq!(doc.cues()[1].start_ms, 5000);
        assert_eq!(doc.cues()[1].end_ms, 10000);
    }

    #[test]
    fn test_start_times_strictly_increasing() {
        let doc = SubtitleDocument::from_transcripts(
            &transcripts(&["一", "", "三", "四", ""]),
            10000,
        );
        let starts: Vec<u64> = doc.cues().iter().map(|c| c.start_ms).collect();
        assert_eq!(starts, vec![0, 20000, 30000]);
        assert!(starts.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_whitespace_only_transcript_dropped() {
        let doc = SubtitleDocument::from_transcripts(&transcripts(&["  ", "好"]), 10000);
        assert_eq!(doc.cues().len(), 1);
    }

    #[test]
    fn test_all_blank_gives_empty_document() {
        let doc = SubtitleDocument::from_transcripts(&transcripts(&["", ""]), 10000);
        assert!(doc.is_empty());
    }
}
