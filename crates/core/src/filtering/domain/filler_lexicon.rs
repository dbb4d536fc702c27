use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LexiconError {
    #[error("failed to read lexicon file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse lexicon file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// An ordered, immutable list of filler tokens targeted for removal.
///
/// Tokens are applied in list order. The default list covers common Mandarin
/// discourse fillers; callers may override it with their own list or load
/// one from a JSON array file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FillerLexicon {
    tokens: Vec<String>,
}

impl FillerLexicon {
    /// Build a lexicon from the given tokens, preserving order.
    /// Empty tokens are dropped.
    pub fn new(tokens: Vec<String>) -> Self {
        Self {
            tokens: tokens.into_iter().filter(|t| !t.is_empty()).collect(),
        }
    }

    /// A lexicon with no tokens; filtering with it is a no-op.
    pub fn empty() -> Self {
        Self { tokens: Vec::new() }
    }

    /// Load a lexicon from a JSON file containing an array of strings.
    pub fn from_file(path: &Path) -> Result<Self, LexiconError> {
        let raw = fs::read_to_string(path).map_err(|e| LexiconError::Read {
            path: path.to_path_buf(),
            source: e,
        })?;
        let tokens: Vec<String> =
            serde_json::from_str(&raw).map_err(|e| LexiconError::Parse {
                path: path.to_path_buf(),
                source: e,
            })?;
        Ok(Self::new(tokens))
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl Default for FillerLexicon {
    fn default() -> Self {
        Self::new(
            [
                "嗯", "啊", "呃", "额", "那个", "这个", "就是", "然后", "所以", "其实",
                "你知道", "我觉得",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        )
    }
}
