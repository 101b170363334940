//! API spec parsing from files and strings.

use std::{path::Path, str::FromStr};

use crate::{ApiSpec, Error, Result, error::SourceContext};

impl FromStr for ApiSpec {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_spec(s, "api.toml")
    }
}

impl ApiSpec {
    /// Parse an API spec file from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        parse_spec(&content, &path.display().to_string())
    }

    /// Parse an API spec from a string with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        parse_spec(content, filename)
    }
}

fn parse_spec(content: &str, filename: &str) -> Result<ApiSpec> {
    let source_ctx = SourceContext::new(content, filename);
    toml::from_str(content).map_err(|e| source_ctx.parse_error(e))
}
