use crate::document::{Document, LineEnding};
use crate::error::PatchError;
use std::fs;
use tempfile::TempDir;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_missing_file_is_not_readable() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("does_not_exist.jsx");

        let err = Document::load(&path).unwrap_err();
        match err {
            PatchError::FileNotReadable { path: p, .. } => assert_eq!(p, path),
            other => panic!("expected FileNotReadable, got {other:?}"),
        }
    }

    #[test]
    fn test_load_save_round_trip_is_byte_identical() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("component.jsx");
        let content = "line one\nline two\nno trailing newline";
        fs::write(&path, content).unwrap();

        let doc = Document::load(&path).unwrap();
        doc.save(&path).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), content);
    }

    #[test]
    fn test_save_overwrites_existing_content() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("component.jsx");
        fs::write(&path, "old content\n").unwrap();

        let doc = Document::from_string("new content\n".to_string());
        doc.save(&path).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "new content\n");
    }

    #[test]
    fn test_save_into_missing_directory_is_write_failure() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("no_such_dir").join("component.jsx");

        let doc = Document::from_string("content\n".to_string());
        let err = doc.save(&path).unwrap_err();
        assert!(matches!(err, PatchError::WriteFailure { .. }));
    }

    #[test]
    fn test_line_ending_detection() {
        let lf = Document::from_string("a\nb\n".to_string());
        assert_eq!(lf.line_ending(), LineEnding::Lf);

        let crlf = Document::from_string("a\r\nb\r\n".to_string());
        assert_eq!(crlf.line_ending(), LineEnding::CrLf);
    }

    #[test]
    fn test_normalize_rewrites_newlines_for_crlf() {
        let crlf = Document::from_string("a\r\nb\r\n".to_string());
        assert_eq!(crlf.normalize("x\ny"), "x\r\ny");
        // Already-CRLF input is not doubled.
        assert_eq!(crlf.normalize("x\r\ny"), "x\r\ny");

        let lf = Document::from_string("a\nb\n".to_string());
        assert_eq!(lf.normalize("x\ny"), "x\ny");
    }

    #[test]
    fn test_line_numbers_are_one_based() {
        let doc = Document::from_string("first\nsecond\nthird\n".to_string());
        assert_eq!(doc.line_number_at(0), 1);
        let offset = doc.find("second").unwrap();
        assert_eq!(doc.line_number_at(offset), 2);
    }

    #[test]
    fn test_lines_with_offsets() {
        let doc = Document::from_string("ab\r\ncd\nef".to_string());
        let lines = doc.lines_with_offsets();
        assert_eq!(lines, vec![(0, "ab"), (4, "cd"), (7, "ef")]);
    }
}
