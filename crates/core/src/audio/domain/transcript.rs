/// The recognized text for one audio segment.
///
/// `text` is empty when no speech was detected in the segment or when the
/// recognition call failed recoverably. A complete run produces exactly one
/// transcript per segment, with indices forming a gapless `0..N` range.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transcript {
    pub index: usize,
    pub text: String,
}

impl Transcript {
    pub fn new(index: usize, text: impl Into<String>) -> Self {
        Self {
            index,
            text: text.into(),
        }
    }

    pub fn empty(index: usize) -> Self {
        Self {
            index,
            text: String::new(),
        }
    }

    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transcript_fields() {
        let t = Transcript::new(3, "你好");
        assert_eq!(t.index, 3);
        assert_eq!(t.text, "你好");
        assert!(!t.is_blank());
    }

    #[test]
    fn test_empty_transcript_is_blank() {
        assert!(Transcript::empty(0).is_blank());
    }

    #[test]
    fn test_whitespace_only_is_blank() {
        assert!(Transcript::new(1, "  \t ").is_blank());
    }
}
