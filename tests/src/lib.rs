//! Cross-crate checks for the exercises, the catalogue and the transcripts.

mod exercises;
