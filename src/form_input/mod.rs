pub mod field_parser;
pub mod form_edit;
pub mod input_error;
