//! Load options from flags and JSON config files.

use clap::Args;
use gridpath_graph::{LabelCase, LoadOptions};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Directory created by `gridpath init`.
pub const CONFIG_DIR: &str = ".gridpath";

/// Config file name inside [`CONFIG_DIR`].
pub const CONFIG_FILE: &str = "config.json";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Graph-loading arguments shared by every query command.
#[derive(Args, Debug, Clone)]
pub struct GraphArgs {
    /// Edge-list file: one `SOURCE DEST [WEIGHT]` per line
    pub file: PathBuf,

    /// Treat every edge as weight 1
    #[arg(long)]
    pub unweighted: bool,

    /// Insert every edge in both directions
    #[arg(long)]
    pub undirected: bool,

    /// Upper-case node labels (file and query)
    #[arg(long)]
    pub upper: bool,

    /// Config file (defaults to .gridpath/config.json when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

/// Path of the config file under `root`.
pub fn config_path(root: &Path) -> PathBuf {
    root.join(CONFIG_DIR).join(CONFIG_FILE)
}

/// Reads load options from a JSON file.
pub fn read_config(path: &Path) -> Result<LoadOptions, ConfigError> {
    let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Resolves the effective load options.
///
/// An explicit config file must exist. Otherwise the config under `root`
/// is used if present, else the defaults. Flags are applied last.
pub fn resolve(args: &GraphArgs, root: &Path) -> Result<LoadOptions, ConfigError> {
    let mut options = match &args.config {
        Some(path) => read_config(path)?,
        None => {
            let path = config_path(root);
            if path.exists() {
                read_config(&path)?
            } else {
                LoadOptions::default()
            }
        }
    };

    if args.unweighted {
        options.config.weighted = false;
    }
    if args.undirected {
        options.config.directed = false;
    }
    if args.upper {
        options.label_case = LabelCase::Upper;
    }

    debug!("Load options: {:?}", options);
    Ok(options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn args(file: &str) -> GraphArgs {
        GraphArgs {
            file: PathBuf::from(file),
            unweighted: false,
            undirected: false,
            upper: false,
            config: None,
        }
    }

    #[test]
    fn test_defaults_without_config() {
        let dir = tempdir().unwrap();
        let options = resolve(&args("g.txt"), dir.path()).unwrap();

        assert_eq!(options, LoadOptions::default());
    }

    #[test]
    fn test_reads_config_under_root() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join(CONFIG_DIR)).unwrap();
        fs::write(
            config_path(dir.path()),
            r#"{"weighted": false, "label_case": "upper"}"#,
        )
        .unwrap();

        let options = resolve(&args("g.txt"), dir.path()).unwrap();
        assert!(!options.config.weighted);
        assert!(options.config.directed);
        assert_eq!(options.label_case, LabelCase::Upper);
    }

    #[test]
    fn test_flags_override_config() {
        let dir = tempdir().unwrap();
        let mut args = args("g.txt");
        args.undirected = true;
        args.upper = true;

        let options = resolve(&args, dir.path()).unwrap();
        assert!(!options.config.directed);
        assert_eq!(options.label_case, LabelCase::Upper);
    }

    #[test]
    fn test_missing_explicit_config_is_error() {
        let dir = tempdir().unwrap();
        let mut args = args("g.txt");
        args.config = Some(dir.path().join("nope.json"));

        let err = resolve(&args, dir.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn test_invalid_config_is_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.json");
        fs::write(&path, "{ not json").unwrap();

        let err = read_config(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }
}
