use super::subtitle_document::SubtitleDocument;
use super::timecode::{ass_timestamp, srt_timestamp};

/// The three supported subtitle serializations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubtitleFormat {
    /// Numbered cues with `-->` time ranges (Premiere, Vegas).
    Srt,
    /// Styled captions with a fixed style header (Jianying).
    Ass,
    /// One `start end text` line per cue, seconds with two decimals (Bijian).
    PlainTimed,
}

impl SubtitleFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            SubtitleFormat::Srt => "srt",
            SubtitleFormat::Ass => "ass",
            SubtitleFormat::PlainTimed => "txt",
        }
    }

    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "srt" => Some(SubtitleFormat::Srt),
            "ass" => Some(SubtitleFormat::Ass),
            "txt" => Some(SubtitleFormat::PlainTimed),
            _ => None,
        }
    }
}

const ASS_HEADER: &str = "\
[Script Info]
Title: 自动生成的字幕
ScriptType: v4.00+
Collisions: Normal
PlayResX: 1920
PlayResY: 1080

[V4+ Styles]
Format: Name, Fontname, Fontsize, PrimaryColour, SecondaryColour, OutlineColour, BackColour, Bold, Italic, Underline, StrikeOut, ScaleX, ScaleY, Spacing, Angle, BorderStyle, Outline, Shadow, Alignment, MarginL, MarginR, MarginV, Encoding
Style: Default,微软雅黑,54,&H00FFFFFF,&H000000FF,&H00000000,&H80000000,-1,0,0,0,100,100,0,0,1,2,0,2,10,10,10,1

[Events]
Format: Layer, Start, End, Style, Name, MarginL, MarginR, MarginV, Effect, Text
";

/// Serializes a [`SubtitleDocument`] to one of the output encodings.
///
/// Rendering is a pure function of the document; writing the result to disk
/// is the caller's concern.
pub struct SubtitleWriter;

impl SubtitleWriter {
    pub fn render(document: &SubtitleDocument, format: SubtitleFormat) -> String {
        match format {
            SubtitleFormat::Srt => Self::render_srt(document),
            SubtitleFormat::Ass => Self::render_ass(document),
            SubtitleFormat::PlainTimed => Self::render_plain(document),
        }
    }

    /// Cue numbering is dense over emitted cues, starting at 1.
    fn render_srt(document: &SubtitleDocument) -> String {
        let mut out = String::new();
        for (n, cue) in document.cues().iter().enumerate() {
            out.push_str(&format!(
                "{}\n{} --> {}\n{}\n\n",
                n + 1,
                srt_timestamp(cue.start_ms),
                srt_timestamp(cue.end_ms),
                cue.text
            ));
        }
        out
    }

    fn render_ass(document: &SubtitleDocument) -> String {
        let mut out = String::from(ASS_HEADER);
        for cue in document.cues() {
            out.push_str(&format!(
                "Dialogue: 0,{},{},Default,,0,0,0,,{}\n",
                ass_timestamp(cue.start_ms),
                ass_timestamp(cue.end_ms),
                cue.text
            ));
        }
        out
    }

    fn render_plain(document: &SubtitleDocument) -> String {
        let mut out = String::new();
        for cue in document.cues() {
            out.push_str(&format!(
                "{:.2} {:.2} {}\n",
                cue.start_ms as f64 / 1000.0,
                cue.end_ms as f64 / 1000.0,
                cue.text
            ));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::domain::transcript::Transcript;

    fn document(texts: &[&str]) -> SubtitleDocument {
        let transcripts: Vec<Transcript> = texts
            .iter()
            .enumerate()
            .map(|(i, t)| Transcript::new(i, *t))
            .collect();
        SubtitleDocument::from_transcripts(&transcripts, 10000)
    }

    #[test]
    fn test_srt_single_cue() {
        let srt = SubtitleWriter::render(&document(&["", "你好", ""]), SubtitleFormat::Srt);
        assert_eq!(srt, "1\n00:00:10,000 --> 00:00:20,000\n你好\n\n");
    }

    #[test]
    fn test_srt_numbering_dense_over_emitted_cues() {
        let srt = SubtitleWriter::render(&document(&["一", "", "三"]), SubtitleFormat::Srt);
        // The skipped middle transcript reserves no cue number.
        assert_eq!(
            srt,
            "1\n00:00:00,000 --> 00:00:10,000\n一\n\n\
             2\n00:00:20,000 --> 00:00:30,000\n三\n\n"
        );
    }

    #[test]
    fn test_plain_single_cue() {
        let txt = SubtitleWriter::render(&document(&["", "你好", ""]), SubtitleFormat::PlainTimed);
        assert_eq!(txt, "10.00 20.00 你好\n");
    }

    #[test]
    fn test_ass_header_present_once() {
        let ass = SubtitleWriter::render(&document(&["你好"]), SubtitleFormat::Ass);
        assert!(ass.starts_with("[Script Info]\n"));
        assert_eq!(ass.matches("[V4+ Styles]").count(), 1);
        assert!(ass.contains("Style: Default,微软雅黑,54,"));
        assert!(ass.contains("[Events]\n"));
    }

    #[test]
    fn test_ass_dialogue_line() {
        let ass = SubtitleWriter::render(&document(&["", "你好"]), SubtitleFormat::Ass);
        assert!(ass.ends_with("Dialogue: 0,0:00:10.00,0:00:20.00,Default,,0,0,0,,你好\n"));
    }

    #[test]
    fn test_empty_document_renders_header_only_for_ass() {
        let ass = SubtitleWriter::render(&document(&[]), SubtitleFormat::Ass);
        assert!(ass.contains("[Events]"));
        assert!(!ass.contains("Dialogue:"));
    }

    #[test]
    fn test_empty_document_renders_empty_srt_and_plain() {
        assert!(SubtitleWriter::render(&document(&[]), SubtitleFormat::Srt).is_empty());
        assert!(SubtitleWriter::render(&document(&[]), SubtitleFormat::PlainTimed).is_empty());
    }

    #[test]
    fn test_format_extension_and_parse() {
        for (name, format) in [
            ("srt", SubtitleFormat::Srt),
            ("ass", SubtitleFormat::Ass),
            ("txt", SubtitleFormat::PlainTimed),
        ] {
            assert_eq!(SubtitleFormat::parse(name), Some(format));
            assert_eq!(format.extension(), name);
        }
        assert_eq!(SubtitleFormat::parse("vtt"), None);
    }
}
