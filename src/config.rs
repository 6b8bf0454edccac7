use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use appiconset_core::DEFAULT_OUTPUT_DIR;
use clap::ValueEnum;
use log::LevelFilter;

use crate::error::{IconsetError, Result};
use crate::generator::ResizeFilter;

pub const CONFIG_FILE: &str = "appiconset.conf";

/// Defaults for a run. Command-line flags take precedence over these.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub output: PathBuf,
    pub filter: ResizeFilter,
    pub parallel: bool,
    pub log_level: Option<LevelFilter>,
    /// Keys that were present but not understood.
    pub unknown_keys: Vec<String>,
    /// File the values came from, if any.
    pub source: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output: PathBuf::from(DEFAULT_OUTPUT_DIR),
            filter: ResizeFilter::default(),
            parallel: false,
            log_level: None,
            unknown_keys: Vec::new(),
            source: None,
        }
    }
}

fn config_file_path() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "", "appiconset").map(|d| d.config_dir().join(CONFIG_FILE))
}

/// Loads the configuration.
///
/// An explicit path must exist. Otherwise the platform config directory is
/// tried first, then `./appiconset.conf`, then the built-in defaults.
pub fn read_config(explicit: Option<&Path>) -> Result<Config> {
    if let Some(path) = explicit {
        let content = fs::read_to_string(path)
            .map_err(|e| IconsetError::io("failed to read config", path, e))?;
        let mut cfg = parse_config(&content)?;
        cfg.source = Some(path.to_path_buf());
        return Ok(cfg);
    }

    let candidates = config_file_path()
        .into_iter()
        .chain(std::iter::once(PathBuf::from(CONFIG_FILE)));
    for path in candidates {
        match fs::read_to_string(&path) {
            Ok(content) => {
                let mut cfg = parse_config(&content)?;
                cfg.source = Some(path);
                return Ok(cfg);
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => continue,
            Err(e) => return Err(IconsetError::io("failed to read config", path, e)),
        }
    }
    Ok(Config::default())
}

pub fn parse_config(content: &str) -> Result<Config> {
    let mut cfg = Config::default();
    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let Some((k, v)) = line.split_once('=') else {
            return Err(IconsetError::Config(format!("expected key=value, got `{line}`")));
        };
        let v = v.trim();
        match k.trim() {
            "output" => cfg.output = PathBuf::from(v),
            "filter" => {
                cfg.filter = ResizeFilter::from_str(v, true)
                    .map_err(|_| IconsetError::Config(format!("unknown filter `{v}`")))?
            }
            "parallel" => cfg.parallel = parse_bool("parallel", v)?,
            "log_level" => {
                cfg.log_level = Some(
                    v.parse::<LevelFilter>()
                        .map_err(|_| IconsetError::Config(format!("unknown log_level `{v}`")))?,
                )
            }
            other => cfg.unknown_keys.push(other.to_string()),
        }
    }
    if cfg.output.as_os_str().is_empty() {
        return Err(IconsetError::Config("output must not be empty".into()));
    }
    Ok(cfg)
}

fn parse_bool(key: &str, v: &str) -> Result<bool> {
    match v.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" => Ok(true),
        "0" | "false" | "no" => Ok(false),
        _ => Err(IconsetError::Config(format!("{key}: expected 0/1 or true/false, got `{v}`"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_is_default() {
        let cfg = parse_config("").unwrap();
        assert_eq!(cfg, Config::default());
        assert_eq!(cfg.output, PathBuf::from("AppIcon.appiconset"));
        assert_eq!(cfg.filter, ResizeFilter::Lanczos3);
    }

    #[test]
    fn test_parse_all_keys() {
        let content = "# defaults
output = build/Icon.appiconset
filter=catmull-rom
parallel=1
log_level=debug
unknown=ignored
";
        let cfg = parse_config(content).unwrap();
        assert_eq!(cfg.output, PathBuf::from("build/Icon.appiconset"));
        assert_eq!(cfg.filter, ResizeFilter::CatmullRom);
        assert!(cfg.parallel);
        assert_eq!(cfg.log_level, Some(LevelFilter::Debug));
        assert_eq!(cfg.unknown_keys, vec!["unknown".to_string()]);
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(matches!(parse_config("filter=bicubic"), Err(IconsetError::Config(_))));
        assert!(matches!(parse_config("parallel=maybe"), Err(IconsetError::Config(_))));
        assert!(matches!(parse_config("log_level=loud"), Err(IconsetError::Config(_))));
        assert!(matches!(parse_config("output="), Err(IconsetError::Config(_))));
        assert!(matches!(parse_config("just a line"), Err(IconsetError::Config(_))));
    }

    #[test]
    fn test_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.conf");
        fs::write(&path, "parallel=true\nfilter=nearest\n").unwrap();
        let cfg = read_config(Some(&path)).unwrap();
        assert!(cfg.parallel);
        assert_eq!(cfg.filter, ResizeFilter::Nearest);
        assert_eq!(cfg.source.as_deref(), Some(path.as_path()));

        let missing = dir.path().join("missing.conf");
        match read_config(Some(&missing)) {
            Err(IconsetError::Io { path, .. }) => assert_eq!(path, missing),
            other => panic!("unexpected result: {other:?}"),
        }
    }
}
