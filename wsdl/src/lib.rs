use std::{fs, path::Path};
use url::Url;

mod parser;

pub mod error;
pub mod types;

pub use parser::{parse_str, split_qualified_name};

#[derive(Debug, Default, Clone, Copy)]
pub struct LoadOptions {
    /// Treat the source as a URL even when it does not look like one.
    pub url: bool,
}

fn source_url(source: &str, options: &LoadOptions) -> Result<Url, error::Error> {
    match Url::parse(source) {
        Ok(url) => Ok(url),
        Err(url::ParseError::RelativeUrlWithoutBase) if !options.url => Url::from_file_path(
            Path::new(source)
                .canonicalize()
                .map_err(|err| error::Error::PathConversionError(Some(err)))?,
        )
        .map_err(|()| error::Error::PathConversionError(None)),
        Err(err) => Err(err.into()),
    }
}

/// Fetches the raw WSDL text from a filesystem path or a `file`/`http`/`https` URL.
pub fn load<S: AsRef<str>>(source: S, options: &LoadOptions) -> Result<String, error::Error> {
    let url = source_url(source.as_ref(), options)?;
    tracing::debug!(%url, "loading WSDL");

    match url.scheme() {
        "file" => {
            let path = url
                .to_file_path()
                .map_err(|()| error::Error::PathConversionError(None))?;

            fs::read_to_string(path).map_err(error::Error::FileReadError)
        }

        "http" | "https" => Ok(reqwest::blocking::get(url)?.error_for_status()?.text()?),

        other => Err(error::Error::UnsupportedScheme(other.into())),
    }
}

pub fn parse<S: AsRef<str>>(
    source: S,
    options: &LoadOptions,
) -> Result<types::Document, error::Error> {
    parse_str(&load(source, options)?)
}
