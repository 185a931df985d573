//! Utility modules

pub mod file_validation;
pub mod text;

pub use text::{
    char_type, is_punctuation, next_grapheme_column, normalize_line_breaks, prev_grapheme_column,
    word_count, CharType,
};

pub use file_validation::{
    decode_text, encoding_for_label, filename_for_display, is_likely_binary, read_text_file,
    validate_file_for_opening, DecodedText, FileOpenError, MAX_FILE_SIZE,
};
