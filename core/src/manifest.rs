use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::catalog::SizeSpec;

pub const MAC_IDIOM: &str = "mac";
pub const MANIFEST_VERSION: u32 = 1;
pub const MANIFEST_AUTHOR: &str = "xcode";

#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("failed to serialize manifest: {0}")]
    Serialize(#[source] serde_json::Error),
    #[error("failed to parse manifest: {0}")]
    Parse(#[source] serde_json::Error),
}

/// One record of the `images` array in `Contents.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestEntry {
    pub size: String,
    pub idiom: String,
    pub filename: String,
    pub scale: String,
}

impl ManifestEntry {
    pub fn for_spec(spec: &SizeSpec) -> Self {
        Self {
            size: spec.size_label(),
            idiom: MAC_IDIOM.to_string(),
            filename: spec.filename(),
            scale: spec.scale_label(),
        }
    }

    /// Recovers the variant from the `size` and `scale` strings.
    /// Returns `None` for non-square sizes or anything that does not parse.
    pub fn size_spec(&self) -> Option<SizeSpec> {
        let (w, h) = self.size.split_once('x')?;
        let point_size: u32 = w.parse().ok()?;
        if h.parse::<u32>().ok()? != point_size {
            return None;
        }
        let scale: u32 = self.scale.strip_suffix('x')?.parse().ok()?;
        if point_size == 0 || scale == 0 {
            return None;
        }
        Some(SizeSpec::new(point_size, scale))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestInfo {
    pub version: u32,
    pub author: String,
}

impl Default for ManifestInfo {
    fn default() -> Self {
        Self {
            version: MANIFEST_VERSION,
            author: MANIFEST_AUTHOR.to_string(),
        }
    }
}

/// The `Contents.json` document of an `.appiconset`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    pub images: Vec<ManifestEntry>,
    pub info: ManifestInfo,
}

impl Manifest {
    pub fn new(images: Vec<ManifestEntry>) -> Self {
        Self {
            images,
            info: ManifestInfo::default(),
        }
    }

    pub fn filenames(&self) -> impl Iterator<Item = &str> {
        self.images.iter().map(|e| e.filename.as_str())
    }

    /// Two-space indented JSON, no trailing newline.
    pub fn to_json(&self) -> Result<String, ManifestError> {
        serde_json::to_string_pretty(self).map_err(ManifestError::Serialize)
    }

    pub fn from_json(s: &str) -> Result<Self, ManifestError> {
        serde_json::from_str(s).map_err(ManifestError::Parse)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SIZE_CATALOG;

    fn catalog_manifest() -> Manifest {
        Manifest::new(SIZE_CATALOG.iter().map(ManifestEntry::for_spec).collect())
    }

    #[test]
    fn test_entry_fields() {
        for spec in SIZE_CATALOG {
            let entry = ManifestEntry::for_spec(&spec);
            assert_eq!(entry.size, format!("{0}x{0}", spec.point_size));
            assert_eq!(entry.scale, format!("{}x", spec.scale));
            assert_eq!(entry.idiom, "mac");
            assert_eq!(entry.filename, spec.filename());
        }
    }

    #[test]
    fn test_info_constants() {
        let m = catalog_manifest();
        assert_eq!(m.info.version, 1);
        assert_eq!(m.info.author, "xcode");
    }

    #[test]
    fn test_json_shape() {
        let json = catalog_manifest().to_json().unwrap();
        let v: serde_json::Value = serde_json::from_str(&json).unwrap();
        let obj = v.as_object().unwrap();
        assert_eq!(obj.len(), 2);
        let images = obj["images"].as_array().unwrap();
        assert_eq!(images.len(), 10);
        let first = images[0].as_object().unwrap();
        let keys: Vec<&str> = first.keys().map(|k| k.as_str()).collect();
        assert_eq!(keys.len(), 4);
        for k in ["size", "idiom", "filename", "scale"] {
            assert!(keys.contains(&k), "missing {k}");
        }
        assert_eq!(images[1]["filename"], "icon_16x16@2x.png");
        assert_eq!(images[1]["size"], "16x16");
        assert_eq!(images[1]["scale"], "2x");
        assert_eq!(v["info"]["version"], 1);
        assert_eq!(v["info"]["author"], "xcode");
    }

    #[test]
    fn test_json_layout() {
        let json = catalog_manifest().to_json().unwrap();
        assert!(json.starts_with("{\n  \"images\": [\n    {\n      \"size\": \"16x16\","));
        assert!(json.ends_with("\"author\": \"xcode\"\n  }\n}"));
    }

    #[test]
    fn test_parse_back() {
        let m = catalog_manifest();
        let parsed = Manifest::from_json(&m.to_json().unwrap()).unwrap();
        assert_eq!(parsed, m);
        assert!(matches!(Manifest::from_json("{\"images\": 3}"), Err(ManifestError::Parse(_))));
    }

    #[test]
    fn test_size_spec_recovery() {
        for spec in SIZE_CATALOG {
            assert_eq!(ManifestEntry::for_spec(&spec).size_spec(), Some(spec));
        }
        let mut bad = ManifestEntry::for_spec(&SIZE_CATALOG[0]);
        bad.size = "16x32".into();
        assert_eq!(bad.size_spec(), None);
        bad.size = "16x16".into();
        bad.scale = "two".into();
        assert_eq!(bad.size_spec(), None);
    }
}
