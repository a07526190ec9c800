use std::fs;
use std::io::Write;
use std::path::Path;

use crate::error::PatchError;

/// Line-ending convention of a loaded file, preserved through every splice.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineEnding {
    Lf,
    CrLf,
}

/// One file's content, held fully in memory for the scope of a patch run.
///
/// The document is either written back whole or not at all; there is no
/// partially patched state observable on disk.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Document {
    text: String,
    ending: LineEnding,
}

impl Document {
    pub fn from_string(text: String) -> Self {
        let ending = if text.contains("\r\n") {
            LineEnding::CrLf
        } else {
            LineEnding::Lf
        };
        Self { text, ending }
    }

    /// Reads the whole file as UTF-8.
    pub fn load(path: &Path) -> Result<Self, PatchError> {
        let text = fs::read_to_string(path).map_err(|source| PatchError::FileNotReadable {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::from_string(text))
    }

    /// Writes the full content back, overwriting the original.
    ///
    /// Goes through a temp file in the destination directory and renames it
    /// into place, so a failure mid-write leaves the original file intact.
    pub fn save(&self, path: &Path) -> Result<(), PatchError> {
        let dir = path.parent().unwrap_or_else(|| Path::new("."));
        let write_err = |source| PatchError::WriteFailure {
            path: path.to_path_buf(),
            source,
        };

        let mut tmp = tempfile::NamedTempFile::new_in(dir).map_err(write_err)?;
        tmp.write_all(self.text.as_bytes()).map_err(write_err)?;
        tmp.persist(path).map_err(|e| write_err(e.error))?;
        Ok(())
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn line_ending(&self) -> LineEnding {
        self.ending
    }

    /// Rewrites `\n` in patch literals to this document's line ending.
    /// Patch text is authored with bare `\n`.
    pub fn normalize(&self, s: &str) -> String {
        match self.ending {
            LineEnding::Lf => s.to_string(),
            LineEnding::CrLf => {
                // Avoid doubling a \r that is already there.
                s.replace("\r\n", "\n").replace('\n', "\r\n")
            }
        }
    }

    /// Substring presence check, line-ending normalized.
    pub fn contains(&self, needle: &str) -> bool {
        self.text.contains(&self.normalize(needle))
    }

    /// 1-based line number of the byte at `offset`.
    pub fn line_number_at(&self, offset: usize) -> usize {
        self.text[..offset].matches('\n').count() + 1
    }

    /// Byte offset of the first normalized occurrence of `needle`.
    pub fn find(&self, needle: &str) -> Option<usize> {
        self.text.find(&self.normalize(needle))
    }

    /// Lines of the document as `(byte_offset, content)` pairs, content
    /// excluding the line terminator.
    pub fn lines_with_offsets(&self) -> Vec<(usize, &str)> {
        let mut out = Vec::new();
        let mut offset = 0;
        for raw in self.text.split_inclusive('\n') {
            let content = raw.trim_end_matches('\n').trim_end_matches('\r');
            out.push((offset, content));
            offset += raw.len();
        }
        out
    }

    /// Replaces the byte range `start..end` with `replacement` (already
    /// normalized by the caller).
    pub(crate) fn splice(&mut self, start: usize, end: usize, replacement: &str) {
        self.text.replace_range(start..end, replacement);
    }
}
