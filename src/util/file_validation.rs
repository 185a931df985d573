//! File validation for opening documents
//!
//! Validates files before loading them, checking for:
//! - File existence and permissions
//! - File size limits
//! - Binary content and text encoding
//!
//! Text is decoded as UTF-8 first, then as GBK, unless the caller names an
//! encoding explicitly.

use encoding_rs::{Encoding, GBK, UTF_16BE, UTF_16LE, UTF_8};
use std::fs::{self, File};
use std::io::Read;
use std::path::Path;

/// Maximum file size in bytes (50 MB)
pub const MAX_FILE_SIZE: u64 = 50 * 1024 * 1024;

/// Errors that can occur when opening a file as a document
#[derive(Debug, Clone, PartialEq)]
pub enum FileOpenError {
    /// File does not exist
    NotFound,
    /// Permission denied to read file
    PermissionDenied,
    /// Path is a directory, not a file
    IsDirectory,
    /// File appears to be binary (contains null bytes)
    BinaryFile,
    /// File exceeds size limit
    TooLarge { size_mb: f64 },
    /// File content does not decode; holds the encodings that were tried
    InvalidEncoding(String),
    /// Encoding label not recognized
    UnknownEncoding(String),
    /// Other I/O error
    IoError(String),
}

impl FileOpenError {
    /// Get a user-friendly error message
    pub fn user_message(&self, filename: &str) -> String {
        match self {
            Self::NotFound => format!("File not found: {}", filename),
            Self::PermissionDenied => format!("Permission denied: {}", filename),
            Self::IsDirectory => format!("Cannot open directory: {}", filename),
            Self::BinaryFile => format!("Cannot open binary file: {}", filename),
            Self::TooLarge { size_mb } => {
                format!(
                    "{} is too large ({:.1} MB, max {} MB)",
                    filename,
                    size_mb,
                    MAX_FILE_SIZE / (1024 * 1024)
                )
            }
            Self::InvalidEncoding(tried) => format!("{} is not valid {} text", filename, tried),
            Self::UnknownEncoding(label) => format!("Unknown encoding '{}' for {}", label, filename),
            Self::IoError(msg) => format!("Error opening {}: {}", filename, msg),
        }
    }
}

impl From<std::io::Error> for FileOpenError {
    fn from(e: std::io::Error) -> Self {
        match e.kind() {
            std::io::ErrorKind::NotFound => Self::NotFound,
            std::io::ErrorKind::PermissionDenied => Self::PermissionDenied,
            _ => Self::IoError(e.to_string()),
        }
    }
}

impl std::fmt::Display for FileOpenError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound => write!(f, "file not found"),
            Self::PermissionDenied => write!(f, "permission denied"),
            Self::IsDirectory => write!(f, "is a directory"),
            Self::BinaryFile => write!(f, "binary file"),
            Self::TooLarge { size_mb } => write!(f, "file too large ({:.1} MB)", size_mb),
            Self::InvalidEncoding(tried) => write!(f, "not valid {} text", tried),
            Self::UnknownEncoding(label) => write!(f, "unknown encoding '{}'", label),
            Self::IoError(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for FileOpenError {}

/// Validate a file before attempting to open it
///
/// Checks:
/// - File exists
/// - Is not a directory
/// - Has read permissions
/// - Does not exceed size limit
///
/// Does NOT check for binary content (use `is_likely_binary` separately after this passes)
pub fn validate_file_for_opening(path: &Path) -> Result<(), FileOpenError> {
    let metadata = fs::metadata(path)?;

    if metadata.is_dir() {
        return Err(FileOpenError::IsDirectory);
    }

    if metadata.len() > MAX_FILE_SIZE {
        return Err(FileOpenError::TooLarge {
            size_mb: metadata.len() as f64 / (1024.0 * 1024.0),
        });
    }

    Ok(())
}

/// Check if a file is likely binary by scanning for null bytes
///
/// Reads the first 8KB of the file. Returns `false` on any read error
/// (let the actual read fail with a better error).
pub fn is_likely_binary(path: &Path) -> bool {
    let Ok(mut file) = File::open(path) else {
        return false;
    };

    let mut buffer = [0u8; 8192];
    let Ok(bytes_read) = file.read(&mut buffer) else {
        return false;
    };

    buffer[..bytes_read].contains(&0)
}

/// Text read from disk together with the encoding it was decoded from
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedText {
    pub text: String,
    pub encoding: &'static Encoding,
}

/// Look up an encoding by its WHATWG label (`utf-8`, `gbk`, `latin1`, ...)
pub fn encoding_for_label(label: &str) -> Result<&'static Encoding, FileOpenError> {
    Encoding::for_label(label.trim().as_bytes())
        .ok_or_else(|| FileOpenError::UnknownEncoding(label.to_string()))
}

/// Decode `bytes` strictly with `encoding`, or UTF-8 then GBK when `None`
pub fn decode_text(
    bytes: &[u8],
    encoding: Option<&'static Encoding>,
) -> Result<DecodedText, FileOpenError> {
    let fallback = [UTF_8, GBK];
    let candidates: &[&'static Encoding] = match &encoding {
        Some(explicit) => std::slice::from_ref(explicit),
        None => &fallback,
    };

    for &candidate in candidates {
        if let Some(text) = candidate.decode_without_bom_handling_and_without_replacement(bytes) {
            return Ok(DecodedText {
                text: text.into_owned(),
                encoding: candidate,
            });
        }
    }

    let tried = candidates
        .iter()
        .map(|enc| enc.name())
        .collect::<Vec<_>>()
        .join(" or ");
    Err(FileOpenError::InvalidEncoding(tried))
}

/// Validate, read and decode a text file
///
/// The null-byte sniff is skipped for an explicit UTF-16 encoding, where
/// zero bytes are ordinary content.
pub fn read_text_file(
    path: &Path,
    encoding: Option<&'static Encoding>,
) -> Result<DecodedText, FileOpenError> {
    validate_file_for_opening(path)?;
    let wide = matches!(encoding, Some(enc) if enc == UTF_16LE || enc == UTF_16BE);
    if !wide && is_likely_binary(path) {
        return Err(FileOpenError::BinaryFile);
    }

    let bytes = fs::read(path)?;
    decode_text(&bytes, encoding)
}

/// Get the filename from a path for display in messages
pub fn filename_for_display(path: &Path) -> String {
    path.file_name()
        .unwrap_or_default()
        .to_string_lossy()
        .to_string()
}
