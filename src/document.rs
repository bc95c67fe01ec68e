use std::ffi::OsStr;
use std::fs;
use std::path::Path;
use std::process::{Command, Stdio};

use thiserror::Error;

/// File formats the reader understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileType {
    Pdf,
    Docx,
    PlainText,
}

impl FileType {
    pub fn from_path(path: &Path) -> Option<FileType> {
        let ext = path.extension()?.to_str()?.to_lowercase();
        match ext.as_str() {
            "pdf" => Some(FileType::Pdf),
            "docx" => Some(FileType::Docx),
            "txt" | "md" => Some(FileType::PlainText),
            _ => None,
        }
    }
}

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("unsupported file type")]
    UnsupportedType,

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{tool} failed: {message}")]
    Tool { tool: &'static str, message: String },

    #[error("extracted output was not valid UTF-8")]
    InvalidEncoding,
}

/// Extract plain text from a document on disk. PDF goes through `pdftotext`,
/// DOCX through `pandoc`; both must be on PATH.
pub fn read_to_text(path: &Path) -> Result<String, ExtractionError> {
    match FileType::from_path(path) {
        None => Err(ExtractionError::UnsupportedType),
        Some(FileType::PlainText) => Ok(fs::read_to_string(path)?),
        Some(FileType::Pdf) => run_tool("pdftotext", &[path.as_os_str(), OsStr::new("-")]),
        Some(FileType::Docx) => run_tool("pandoc", &[OsStr::new("--to=plain"), path.as_os_str()]),
    }
}

/// Extraction that never fails: errors become short bracketed notes, which
/// then flow through summarization like any other text.
pub fn read_to_text_or_note(path: &Path) -> String {
    match read_to_text(path) {
        Ok(text) => text,
        Err(ExtractionError::UnsupportedType) => "[Unsupported file type]".to_string(),
        Err(e) => match FileType::from_path(path) {
            Some(FileType::Pdf) => format!("[Error reading PDF: {}]", e),
            Some(FileType::Docx) => format!("[Error reading DOCX: {}]", e),
            _ => format!("[Error reading file: {}]", e),
        },
    }
}

fn run_tool(tool: &'static str, args: &[&OsStr]) -> Result<String, ExtractionError> {
    let output = Command::new(tool)
        .args(args)
        .stdin(Stdio::null())
        .output()
        .map_err(|e| ExtractionError::Tool {
            tool,
            message: e.to_string(),
        })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(ExtractionError::Tool {
            tool,
            message: stderr.trim().to_string(),
        });
    }

    String::from_utf8(output.stdout).map_err(|_| ExtractionError::InvalidEncoding)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn file_type_detection_is_case_insensitive() {
        assert_eq!(
            FileType::from_path(Path::new("notes.PDF")),
            Some(FileType::Pdf)
        );
        assert_eq!(
            FileType::from_path(Path::new("thesis.Docx")),
            Some(FileType::Docx)
        );
        assert_eq!(
            FileType::from_path(Path::new("notes.txt")),
            Some(FileType::PlainText)
        );
        assert_eq!(
            FileType::from_path(Path::new("notes.md")),
            Some(FileType::PlainText)
        );
        assert_eq!(FileType::from_path(Path::new("image.png")), None);
        assert_eq!(FileType::from_path(Path::new("no_extension")), None);
    }

    #[test]
    fn unsupported_type_becomes_bracketed_note() {
        assert_eq!(
            read_to_text_or_note(Path::new("slides.pptx")),
            "[Unsupported file type]"
        );
    }

    #[test]
    fn missing_pdf_reports_a_pdf_note() {
        let note = read_to_text_or_note(Path::new("/nonexistent/dir/lecture.pdf"));
        assert!(note.starts_with("[Error reading PDF: "));
        assert!(note.ends_with(']'));
    }

    #[test]
    fn missing_docx_reports_a_docx_note() {
        let note = read_to_text_or_note(Path::new("/nonexistent/dir/notes.docx"));
        assert!(note.starts_with("[Error reading DOCX: "));
    }

    #[test]
    fn missing_plain_text_reports_a_generic_note() {
        let note = read_to_text_or_note(Path::new("/nonexistent/dir/notes.txt"));
        assert!(note.starts_with("[Error reading file: "));
    }

    #[test]
    fn plain_text_reads_straight_through() {
        let path: PathBuf = std::env::temp_dir().join("studybuddy_doc_test.txt");
        fs::write(&path, "Cells divide. Tissues grow.").unwrap();
        assert_eq!(
            read_to_text(&path).unwrap(),
            "Cells divide. Tissues grow."
        );
        let _ = fs::remove_file(&path);
    }
}
