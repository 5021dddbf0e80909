use std::path::PathBuf;

/// A media file offered in the selector, with the label shown for it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaFile {
    pub path: PathBuf,
    pub label: String,
}
