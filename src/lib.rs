pub mod document;
pub mod error;
pub mod history_view;
pub mod patch;
pub mod preview;
pub mod report;

pub use document::{Document, LineEnding};
pub use error::PatchError;
pub use patch::{Anchor, Outcome, Patch, PatchReport, PatchSet, apply_all, locate};

#[cfg(test)]
mod tests;
