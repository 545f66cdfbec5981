mod catalog;
mod properties;
mod transcripts;
