//! Config parsing from files and strings.

use std::{
    path::{Path, PathBuf},
    str::FromStr,
};

use crate::{CONFIG_FILE_NAME, Config, Error, Result, SourceContext};

impl FromStr for Config {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_config(s, CONFIG_FILE_NAME)
    }
}

impl Config {
    /// Parse a proto2ts.toml file from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        parse_config(&content, &path.display().to_string())
    }

    /// Parse a proto2ts.toml from a string with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        parse_config(content, filename)
    }

    /// Load the first proto2ts.toml found in `start` or one of its ancestors.
    ///
    /// Falls back to [`Config::default`] when there is none.
    pub fn discover(start: impl AsRef<Path>) -> Result<Self> {
        match find_config_file(start) {
            Some(path) => {
                tracing::debug!(path = %path.display(), "using discovered config");
                Self::from_file(path)
            }
            None => {
                tracing::debug!("no {} found, using defaults", CONFIG_FILE_NAME);
                Ok(Self::default())
            }
        }
    }
}

/// Walk from `start` up through its ancestors looking for proto2ts.toml.
pub fn find_config_file(start: impl AsRef<Path>) -> Option<PathBuf> {
    start
        .as_ref()
        .ancestors()
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find(|candidate| candidate.is_file())
}

/// Parse a config from content with the given filename for error reporting.
pub fn parse_config(content: &str, filename: &str) -> Result<Config> {
    let ctx = SourceContext::new(content, filename);
    let config: Config = toml::from_str(content).map_err(|e| ctx.parse_error(e))?;
    config.validate_with(&ctx)?;
    Ok(config)
}
