use std::{fmt, fs, path::Path};

use anyhow::Context;
use serde::de::DeserializeOwned;
use tracing::{debug, trace};

/// Reads and parses the TOML file at `path`.
pub(crate) fn parse_toml<T>(path: impl AsRef<Path>) -> anyhow::Result<T>
where
    T: fmt::Debug + DeserializeOwned,
{
    let path = path.as_ref();
    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    trace!(?contents, "read file");

    let parsed = toml::from_str::<T>(&contents)
        .with_context(|| format!("failed to parse TOML file {}", path.display()))?;
    debug!(?parsed, "parsed TOML file");

    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use diamond_params::prelude::DiamondParams;

    use super::*;

    #[test]
    fn parses_params_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"owner = "0x0000000000000000000000000000000000000001""#
        )
        .unwrap();

        let params = parse_toml::<DiamondParams>(file.path()).unwrap();
        assert!(params.facets.is_empty());
    }

    #[test]
    fn reports_malformed_files() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "owner = 42").unwrap();

        let err = parse_toml::<DiamondParams>(file.path()).unwrap_err();
        assert!(err.to_string().starts_with("failed to parse TOML file"));
    }

    #[test]
    fn reports_missing_files() {
        let dir = tempfile::tempdir().unwrap();

        assert!(parse_toml::<DiamondParams>(dir.path().join("missing.toml")).is_err());
    }
}
