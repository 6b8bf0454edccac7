pub mod config;
pub mod error;
pub mod generator;
pub mod logger;
pub mod sample;
pub mod verify;

pub use appiconset_core::{MANIFEST_FILE, Manifest, ManifestEntry, SIZE_CATALOG, SizeSpec};
pub use error::{IconsetError, Result};
pub use generator::{GenerateOptions, ResizeFilter, generate_iconset};
pub use verify::{VerifyReport, ensure_consistent, verify_iconset};
