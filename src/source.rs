//! Fetching of JSON documents from HTTP endpoints or local files.
//!
//! Reference documents (`items.json`, `world.json`) may live on a web server or
//! on disk; the price API is always remote. Both go through [`DocumentFetcher`],
//! which owns a lazily created blocking HTTP client.

use crate::error::{MarketError, Result};
use flate2::read::GzDecoder;
use reqwest::blocking::Client;
use serde_json::Value;
use std::cell::RefCell;
use std::fmt;
use std::fs;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};
use std::time::Duration;

const USER_AGENT: &str = concat!("albion-market/", env!("CARGO_PKG_VERSION"));

/// Where a reference document is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentSource {
    Url(String),
    Path(PathBuf),
}

impl DocumentSource {
    /// Interpret `spec` as a URL when it has an `http(s)://` scheme, else as a path.
    pub fn parse(spec: &str) -> Self {
        if spec.starts_with("http://") || spec.starts_with("https://") {
            DocumentSource::Url(spec.to_string())
        } else {
            DocumentSource::Path(PathBuf::from(spec))
        }
    }
}

impl fmt::Display for DocumentSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentSource::Url(url) => write!(f, "{}", url),
            DocumentSource::Path(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Loads JSON documents over HTTP or from the local filesystem.
pub struct DocumentFetcher {
    timeout: Duration,
    client: RefCell<Option<Client>>,
}

impl DocumentFetcher {
    pub fn new(timeout: Duration) -> Self {
        Self {
            timeout,
            client: RefCell::new(None),
        }
    }

    /// Lazy HTTP client, created on first remote request.
    fn client(&self) -> Result<Client> {
        let mut slot = self.client.borrow_mut();
        if let Some(client) = slot.as_ref() {
            return Ok(client.clone());
        }
        let client = Client::builder()
            .timeout(self.timeout)
            .user_agent(USER_AGENT)
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()?;
        *slot = Some(client.clone());
        Ok(client)
    }

    /// GET `url` and parse the body as JSON.
    ///
    /// A non-success status is reported as [`MarketError::HttpStatus`] carrying
    /// the status text, never parsed as a body.
    pub fn fetch_json(&self, url: &str) -> Result<Value> {
        log::debug!("GET {}", url);
        let client = self.client()?;
        let resp = client.get(url).send()?;
        let status = resp.status();
        if !status.is_success() {
            return Err(MarketError::HttpStatus {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("").to_string(),
                url: url.to_string(),
            });
        }
        Ok(resp.json()?)
    }

    /// Load a document from `source` (handles `.gz` files transparently).
    pub fn load(&self, source: &DocumentSource) -> Result<Value> {
        match source {
            DocumentSource::Url(url) => self.fetch_json(url),
            DocumentSource::Path(path) => read_json_file(path),
        }
    }

    /// Load a document that must be a JSON array.
    pub fn load_array(&self, source: &DocumentSource) -> Result<Vec<Value>> {
        match self.load(source)? {
            Value::Array(records) => Ok(records),
            other => Err(MarketError::MalformedDocument(format!(
                "{} is not a JSON array (found {})",
                source,
                json_kind(&other)
            ))),
        }
    }

    /// Drop the HTTP client, if one was created.
    pub fn close(&self) {
        self.client.borrow_mut().take();
    }
}

fn read_json_file(path: &Path) -> Result<Value> {
    if !path.exists() {
        return Err(MarketError::NotFound(format!(
            "reference file {} does not exist",
            path.display()
        )));
    }
    let contents = if path.extension().and_then(|e| e.to_str()) == Some("gz") {
        let file = fs::File::open(path)?;
        let mut decoder = BufReader::new(GzDecoder::new(BufReader::new(file)));
        let mut contents = String::new();
        decoder.read_to_string(&mut contents)?;
        contents
    } else {
        fs::read_to_string(path)?
    };
    Ok(serde_json::from_str(&contents)?)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_distinguishes_urls_from_paths() {
        assert_eq!(
            DocumentSource::parse("https://example.org/items.json"),
            DocumentSource::Url("https://example.org/items.json".to_string())
        );
        assert_eq!(
            DocumentSource::parse("data/items.json"),
            DocumentSource::Path(PathBuf::from("data/items.json"))
        );
    }

    #[test]
    fn missing_file_is_not_found() {
        let fetcher = DocumentFetcher::new(Duration::from_secs(1));
        let err = fetcher
            .load(&DocumentSource::Path(PathBuf::from("/nonexistent/items.json")))
            .unwrap_err();
        assert!(matches!(err, MarketError::NotFound(_)));
    }
}
