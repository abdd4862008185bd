pub mod data_processor;
pub mod load_error;
