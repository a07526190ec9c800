use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::document::Document;
use crate::error::PatchError;

fn default_window() -> usize {
    5
}

/// Literal text used to locate the splice point. Matching is always
/// exact-text; if upstream edits changed the anchor, the patch reports
/// `NotFound` instead of guessing.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Anchor {
    /// A whole line expected near a known position. The hinted line (1-based)
    /// is checked first, then a bounded ring of `window` lines either side.
    /// Content is compared with surrounding whitespace trimmed, so the
    /// replacement can be re-indented to match the file.
    Line {
        text: String,
        hint: usize,
        #[serde(default = "default_window")]
        window: usize,
    },
    /// An exact substring expected to appear once anywhere in the document.
    Substring { text: String },
}

/// Where an anchor matched.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Location {
    pub start: usize,
    pub end: usize,
    /// 1-based line number of the match start, for operator diagnostics.
    pub line: usize,
}

/// One declarative edit: find `anchor`, splice in `replacement`, unless
/// `sentinel` (a fragment unique to the replacement) is already present.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Patch {
    pub id: String,
    pub anchor: Anchor,
    pub replacement: String,
    pub sentinel: String,
}

/// Outcome of one patch against one document. Line numbers are 1-based.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Applied { line: usize },
    AlreadyApplied,
    NotFound,
}

#[derive(Clone, Debug)]
pub struct PatchReport {
    pub id: String,
    pub outcome: Outcome,
}

/// Finds the anchor in `doc` without mutating anything.
pub fn locate(doc: &Document, anchor: &Anchor) -> Option<Location> {
    match anchor {
        Anchor::Substring { text } => {
            let needle = doc.normalize(text);
            let start = doc.text().find(&needle)?;
            Some(Location {
                start,
                end: start + needle.len(),
                line: doc.line_number_at(start),
            })
        }
        Anchor::Line { text, hint, window } => {
            let lines = doc.lines_with_offsets();
            let wanted = text.trim();
            let matches_at = |idx: usize| {
                lines
                    .get(idx)
                    .is_some_and(|(_, content)| content.trim() == wanted)
            };

            // 1-based hint; check it first, then ring outward.
            let hint_idx = hint.checked_sub(1)?;
            let mut found = None;
            if matches_at(hint_idx) {
                found = Some(hint_idx);
            } else {
                for delta in 1..=*window {
                    if hint_idx >= delta && matches_at(hint_idx - delta) {
                        found = Some(hint_idx - delta);
                        break;
                    }
                    if matches_at(hint_idx + delta) {
                        found = Some(hint_idx + delta);
                        break;
                    }
                }
            }

            let idx = found?;
            let (offset, content) = lines[idx];
            Some(Location {
                start: offset,
                end: offset + content.len(),
                line: idx + 1,
            })
        }
    }
}

impl Patch {
    /// Applies this patch to `doc` in memory. Mutates only on `Applied`;
    /// on `NotFound` and `AlreadyApplied` the document is byte-identical.
    pub fn apply(&self, doc: &mut Document) -> Outcome {
        if doc.contains(&self.sentinel) {
            return Outcome::AlreadyApplied;
        }
        let Some(loc) = locate(doc, &self.anchor) else {
            return Outcome::NotFound;
        };

        let replacement = match &self.anchor {
            Anchor::Substring { .. } => doc.normalize(&self.replacement),
            Anchor::Line { .. } => {
                // Re-indent each replacement line with the matched line's
                // leading whitespace; the replacement is authored flush-left.
                let matched = &doc.text()[loc.start..loc.end];
                let indent = &matched[..matched.len() - matched.trim_start().len()];
                let indented = self
                    .replacement
                    .lines()
                    .map(|l| {
                        if l.is_empty() {
                            String::new()
                        } else {
                            format!("{indent}{l}")
                        }
                    })
                    .collect::<Vec<_>>()
                    .join("\n");
                doc.normalize(&indented)
            }
        };

        doc.splice(loc.start, loc.end, &replacement);
        Outcome::Applied { line: loc.line }
    }
}

/// Applies a list of patches to the document in one pass with shared
/// reporting. Patches in one set must target non-overlapping regions, so
/// the application order does not affect the final text.
pub fn apply_all(doc: &mut Document, patches: &[Patch]) -> Vec<PatchReport> {
    patches
        .iter()
        .map(|p| PatchReport {
            id: p.id.clone(),
            outcome: p.apply(doc),
        })
        .collect()
}

/// A named collection of patches, loadable from a JSON file.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PatchSet {
    pub name: String,
    pub patches: Vec<Patch>,
}

impl PatchSet {
    pub fn load(path: &Path) -> Result<Self, PatchError> {
        let raw = fs::read_to_string(path).map_err(|source| PatchError::FileNotReadable {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&raw).map_err(|source| PatchError::PatchSetInvalid {
            path: path.to_path_buf(),
            source,
        })
    }
}
