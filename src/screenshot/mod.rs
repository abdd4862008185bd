pub mod extraction_error;
pub mod stats_extractor;
pub mod text_recognizer;
