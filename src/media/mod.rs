pub mod gather;
pub mod types;

pub use types::MediaFile;
