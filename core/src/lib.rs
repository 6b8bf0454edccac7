mod catalog;
mod manifest;

pub use catalog::*;
pub use manifest::*;

/// Name of the manifest file inside an `.appiconset` directory.
pub const MANIFEST_FILE: &str = "Contents.json";

/// Output directory used when nothing else is configured.
pub const DEFAULT_OUTPUT_DIR: &str = "AppIcon.appiconset";
