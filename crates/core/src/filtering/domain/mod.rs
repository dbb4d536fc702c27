pub mod filler_filter;
pub mod filler_lexicon;
