//! Albion Online market price SDK for Rust.
//!
//! Loads the static item and world reference documents, builds price lookups
//! for the Albion Online Data Project API, and renders the returned records as
//! a display-ready table or card list with item and city names resolved.
//!
//! # Quick start
//!
//! ```no_run
//! use albion_market::{MarketSdk, OutputArea, RenderMode};
//! use albion_market::queries::build_query;
//! use albion_market::source::DocumentSource;
//!
//! let sdk = MarketSdk::builder().build();
//! let mut output = OutputArea::new();
//!
//! let refs = sdk.load_references(
//!     &DocumentSource::parse("data/items.json"),
//!     &DocumentSource::parse("data/world.json"),
//!     &mut output,
//! );
//!
//! let request = build_query(&["T4_BAG"], &["Martlock"], Some(&[1u8][..])).unwrap();
//! sdk.prices(&refs).show(&request, RenderMode::Table, &mut output);
//! ```

#[cfg(feature = "async")]
pub mod async_client;
pub mod config;
pub mod error;
pub mod models;
pub mod queries;
pub mod reference;
pub mod render;
pub mod source;

#[cfg(feature = "async")]
pub use async_client::AsyncMarketSdk;
pub use config::{DisplayLocale, Server};
pub use error::{MarketError, Result};
pub use reference::{ReferenceLoader, References};
pub use render::{OutputArea, OutputState, RenderMode};

use std::fmt;
use std::time::Duration;

use crate::source::{DocumentFetcher, DocumentSource};

// ---------------------------------------------------------------------------
// MarketSdkBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing a [`MarketSdk`] instance.
///
/// Use [`MarketSdk::builder()`] to obtain a builder, chain configuration
/// methods, and call [`build()`](MarketSdkBuilder::build) to create the SDK.
#[derive(Debug, Clone)]
pub struct MarketSdkBuilder {
    server: Server,
    base_url: Option<String>,
    timeout: Duration,
    locale: DisplayLocale,
}

impl Default for MarketSdkBuilder {
    fn default() -> Self {
        Self {
            server: Server::default(),
            base_url: None,
            timeout: Duration::from_secs(30),
            locale: DisplayLocale::default(),
        }
    }
}

impl MarketSdkBuilder {
    /// Select one of the public data-project servers. Defaults to [`Server::West`].
    pub fn server(mut self, server: Server) -> Self {
        self.server = server;
        self
    }

    /// Override the price API base URL (takes precedence over [`server`](Self::server)).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the HTTP request timeout. Defaults to 30 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the name locale, number separators, date format and quality labels.
    pub fn locale(mut self, locale: DisplayLocale) -> Self {
        self.locale = locale;
        self
    }

    /// Build the SDK. No network traffic happens until the first load or query.
    pub fn build(self) -> MarketSdk {
        let base_url = self
            .base_url
            .unwrap_or_else(|| self.server.base_url().to_string());
        MarketSdk {
            fetcher: DocumentFetcher::new(self.timeout),
            base_url,
            locale: self.locale,
        }
    }
}

// ---------------------------------------------------------------------------
// MarketSdk
// ---------------------------------------------------------------------------

/// The main entry point: loads references and hands out price queries.
///
/// Created via [`MarketSdk::builder()`].
pub struct MarketSdk {
    fetcher: DocumentFetcher,
    base_url: String,
    locale: DisplayLocale,
}

impl MarketSdk {
    /// Create a new builder for configuring the SDK.
    pub fn builder() -> MarketSdkBuilder {
        MarketSdkBuilder::default()
    }

    /// Access the reference loader.
    pub fn references(&self) -> ReferenceLoader<'_> {
        ReferenceLoader::new(&self.fetcher, &self.locale)
    }

    /// Load the items and world documents.
    ///
    /// Never fails: a document that cannot be loaded yields an empty catalog
    /// and a message appended to `output`.
    pub fn load_references(
        &self,
        items: &DocumentSource,
        locations: &DocumentSource,
        output: &mut OutputArea,
    ) -> References {
        self.references().load(items, locations, output)
    }

    /// Access the price query interface for loaded references.
    pub fn prices<'a>(&'a self, refs: &'a References) -> queries::PriceQuery<'a> {
        queries::PriceQuery::new(self, refs)
    }

    /// Base URL of the price API server in use.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn locale(&self) -> &DisplayLocale {
        &self.locale
    }

    /// The document fetcher shared by reference loading and price queries.
    pub fn fetcher(&self) -> &DocumentFetcher {
        &self.fetcher
    }

    /// Consume the SDK and release the HTTP client.
    pub fn close(self) {
        self.fetcher.close();
    }
}

impl fmt::Display for MarketSdk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "MarketSdk(base_url={}, locale={})",
            self.base_url, self.locale.name_locale
        )
    }
}
