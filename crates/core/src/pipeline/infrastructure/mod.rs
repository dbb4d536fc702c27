pub mod pooled_transcriber;
