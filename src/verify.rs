use std::collections::BTreeSet;
use std::fmt;
use std::fs;
use std::path::Path;

use appiconset_core::{MAC_IDIOM, MANIFEST_FILE, Manifest};

use crate::error::{IconsetError, Result};

/// Differences between `Contents.json` and the files next to it.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct VerifyReport {
    pub checked: usize,
    pub missing: Vec<String>,
    pub wrong_size: Vec<(String, u32, (u32, u32))>,
    pub undecodable: Vec<String>,
    pub bad_entries: Vec<String>,
    pub orphans: Vec<String>,
}

impl VerifyReport {
    pub fn is_clean(&self) -> bool {
        self.missing.is_empty()
            && self.wrong_size.is_empty()
            && self.undecodable.is_empty()
            && self.bad_entries.is_empty()
            && self.orphans.is_empty()
    }
}

impl fmt::Display for VerifyReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();
        if !self.missing.is_empty() {
            parts.push(format!("missing {}", self.missing.join(", ")));
        }
        for (name, want, (w, h)) in &self.wrong_size {
            parts.push(format!("{name} is {w}x{h}, expected {want}x{want}"));
        }
        if !self.undecodable.is_empty() {
            parts.push(format!("not an image {}", self.undecodable.join(", ")));
        }
        if !self.bad_entries.is_empty() {
            parts.push(format!("malformed entries {}", self.bad_entries.join(", ")));
        }
        if !self.orphans.is_empty() {
            parts.push(format!("unreferenced {}", self.orphans.join(", ")));
        }
        if parts.is_empty() {
            write!(f, "{} images ok", self.checked)
        } else {
            write!(f, "{}", parts.join("; "))
        }
    }
}

pub fn verify_iconset(dir: &Path) -> Result<VerifyReport> {
    let manifest_path = dir.join(MANIFEST_FILE);
    let json = fs::read_to_string(&manifest_path)
        .map_err(|e| IconsetError::io("failed to read manifest", &manifest_path, e))?;
    let manifest = Manifest::from_json(&json)?;

    let mut report = VerifyReport::default();
    let mut referenced = BTreeSet::new();
    for entry in &manifest.images {
        referenced.insert(entry.filename.clone());
        let Some(spec) = entry.size_spec().filter(|_| entry.idiom == MAC_IDIOM) else {
            report.bad_entries.push(entry.filename.clone());
            continue;
        };
        let path = dir.join(&entry.filename);
        if !path.is_file() {
            report.missing.push(entry.filename.clone());
            continue;
        }
        let (w, h) = match image::image_dimensions(&path) {
            Ok(dims) => dims,
            Err(e) => {
                log::debug!("{} does not decode: {e}", path.display());
                report.undecodable.push(entry.filename.clone());
                continue;
            }
        };
        let want = spec.pixel_width();
        if (w, h) != (want, want) {
            report.wrong_size.push((entry.filename.clone(), want, (w, h)));
        }
        report.checked += 1;
    }

    let listing = fs::read_dir(dir).map_err(|e| IconsetError::io("failed to list", dir, e))?;
    for dirent in listing {
        let dirent = dirent.map_err(|e| IconsetError::io("failed to list", dir, e))?;
        let name = dirent.file_name().to_string_lossy().into_owned();
        if name.to_ascii_lowercase().ends_with(".png") && !referenced.contains(&name) {
            report.orphans.push(name);
        }
    }
    report.orphans.sort();
    Ok(report)
}

/// Like [`verify_iconset`], but an inconsistent directory is an error.
pub fn ensure_consistent(dir: &Path) -> Result<VerifyReport> {
    let report = verify_iconset(dir)?;
    if report.is_clean() {
        Ok(report)
    } else {
        Err(IconsetError::Verify {
            path: dir.to_path_buf(),
            problems: report.to_string(),
        })
    }
}
