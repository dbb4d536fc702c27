use super::filler_lexicon::FillerLexicon;

/// Removes filler tokens from transcript text.
pub struct FillerFilter;

impl FillerFilter {
    /// Remove every occurrence of each lexicon token from `text`, then
    /// collapse whitespace runs to a single space and trim.
    ///
    /// Matching is plain substring removal: the target script has no
    /// whitespace-delimited word boundaries. Each token is applied once, in
    /// lexicon order, with no re-scan afterwards — a compound filler that
    /// re-forms from the text surrounding an earlier removal survives.
    pub fn filter(text: &str, lexicon: &FillerLexicon) -> String {
        let mut out = text.to_string();
        for token in lexicon.tokens() {
            if out.contains(token.as_str()) {
                out = out.replace(token.as_str(), "");
            }
        }
        collapse_whitespace(&out)
    }
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
