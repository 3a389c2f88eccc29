//! Label-set and catalog deserialization from TOML or JSON files.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::graph::MiddlewareCatalog;
use crate::label::LabelSet;

/// Host-side failure while materializing pipeline input.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {message}")]
    Parse { path: PathBuf, message: String },

    #[error("unsupported input format for {path} (expected .toml or .json)")]
    UnknownFormat { path: PathBuf },
}

/// Load one backend unit's labels from a flat TOML table or JSON object.
pub fn load_label_set(path: &Path) -> Result<LabelSet, InputError> {
    deserialize(path)
}

/// Load the middleware catalog: a map of name → category.
pub fn load_catalog(path: &Path) -> Result<MiddlewareCatalog, InputError> {
    deserialize(path)
}

fn deserialize<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, InputError> {
    let content = fs::read_to_string(path).map_err(|source| InputError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    match path.extension().and_then(|ext| ext.to_str()) {
        Some("toml") => toml::from_str(&content).map_err(|e| InputError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        }),
        Some("json") => serde_json::from_str(&content).map_err(|e| InputError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        }),
        _ => Err(InputError::UnknownFormat {
            path: path.to_path_buf(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toml_label_set_round_trip() {
        let dir = std::env::temp_dir().join("routeforge-loader-test");
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("unit.toml");
        fs::write(
            &path,
            r#"
"proxy.router.app.rule" = "Host(`app.local`)"
"proxy.router.app.entrypoint" = "web"
"#,
        )
        .unwrap();

        let labels = load_label_set(&path).unwrap();
        assert_eq!(
            labels.get("proxy.router.app.rule").map(String::as_str),
            Some("Host(`app.local`)")
        );
    }

    #[test]
    fn unknown_extension_is_rejected() {
        let dir = std::env::temp_dir().join("routeforge-loader-test");
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("labels.yaml");
        fs::write(&path, "proxy.router.app.rule: Host(`x`)\n").unwrap();

        let err = load_label_set(&path).unwrap_err();
        assert!(matches!(err, InputError::UnknownFormat { .. }));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load_label_set(Path::new("/nonexistent/unit.toml")).unwrap_err();
        assert!(matches!(err, InputError::Io { .. }));
    }
}
