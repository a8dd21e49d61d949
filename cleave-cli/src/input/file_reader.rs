//! File reading with optional legacy-encoding support

use crate::error::CliError;
use anyhow::{Context, Result};
use encoding_rs::Encoding;
use std::fs;
use std::path::Path;

/// Reads input documents as text
#[derive(Debug, Clone, Copy, Default)]
pub struct FileReader {
    encoding: Option<&'static Encoding>,
}

impl FileReader {
    /// Reader for UTF-8 files
    pub fn new() -> Self {
        Self::default()
    }

    /// Reader that decodes from the encoding named by `label`
    ///
    /// Labels follow the WHATWG Encoding Standard (`"shift_jis"`,
    /// `"windows-1252"`, `"utf-16le"`, ...).
    pub fn with_encoding(label: &str) -> Result<Self> {
        let encoding = Encoding::for_label(label.trim().as_bytes())
            .ok_or_else(|| CliError::UnknownEncoding(label.to_string()))?;
        Ok(Self {
            encoding: Some(encoding),
        })
    }

    /// Name of the configured encoding
    pub fn encoding_name(&self) -> &'static str {
        self.encoding.map_or("UTF-8", Encoding::name)
    }

    /// Read a whole file into a string
    pub fn read_text(&self, path: &Path) -> Result<String> {
        let Some(encoding) = self.encoding else {
            return fs::read_to_string(path)
                .with_context(|| format!("Failed to read file: {}", path.display()));
        };

        let bytes =
            fs::read(path).with_context(|| format!("Failed to read file: {}", path.display()))?;
        let (decoded, used, had_errors) = encoding.decode(&bytes);
        if had_errors {
            log::warn!(
                "{}: malformed {} sequences replaced",
                path.display(),
                used.name()
            );
        }
        Ok(decoded.into_owned())
    }

    /// Size of a file in bytes
    pub fn file_size(path: &Path) -> Result<u64> {
        let metadata = fs::metadata(path)
            .with_context(|| format!("Failed to get metadata for: {}", path.display()))?;

        Ok(metadata.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::{self, File};
    use tempfile::TempDir;

    #[test]
    fn test_read_text_success() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("test.txt");

        let content = "Hello, world!\nThis is a test.";
        fs::write(&file_path, content).unwrap();

        let result = FileReader::new().read_text(&file_path).unwrap();
        assert_eq!(result, content);
    }

    #[test]
    fn test_read_text_nonexistent_file() {
        let path = Path::new("/nonexistent/file.txt");
        let result = FileReader::new().read_text(path);

        assert!(result.is_err());
        let err_msg = result.unwrap_err().to_string();
        assert!(err_msg.contains("Failed to read file"));
    }

    #[test]
    fn test_invalid_utf8_is_an_error_without_encoding() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("latin1.txt");
        fs::write(&file_path, [b'c', b'a', b'f', 0xE9]).unwrap();

        assert!(FileReader::new().read_text(&file_path).is_err());
    }

    #[test]
    fn test_decodes_legacy_encoding() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("latin1.txt");
        fs::write(&file_path, [b'c', b'a', b'f', 0xE9]).unwrap();

        let reader = FileReader::with_encoding("windows-1252").unwrap();
        assert_eq!(reader.read_text(&file_path).unwrap(), "café");
        assert_eq!(reader.encoding_name(), "windows-1252");
    }

    #[test]
    fn test_decodes_shift_jis() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("sjis.txt");
        // "日本" in Shift_JIS
        fs::write(&file_path, [0x93, 0xFA, 0x96, 0x7B]).unwrap();

        let reader = FileReader::with_encoding("shift_jis").unwrap();
        assert_eq!(reader.read_text(&file_path).unwrap(), "日本");
    }

    #[test]
    fn test_unknown_encoding_label() {
        let err = FileReader::with_encoding("klingon-8").unwrap_err();
        assert!(err.to_string().contains("Unknown encoding"));
    }

    #[test]
    fn test_file_size() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("sized.txt");

        fs::write(&file_path, "a".repeat(1024)).unwrap();

        assert_eq!(FileReader::file_size(&file_path).unwrap(), 1024);
    }

    #[test]
    fn test_empty_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("empty.txt");

        File::create(&file_path).unwrap();

        assert_eq!(FileReader::new().read_text(&file_path).unwrap(), "");
        assert_eq!(FileReader::file_size(&file_path).unwrap(), 0);
    }
}
