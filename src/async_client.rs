//! Async wrapper around [`MarketSdk`] for use in async runtimes (Tokio, etc.).
//!
//! Runs all SDK operations on a blocking thread pool via
//! [`tokio::task::spawn_blocking`], keeping the async event loop free.
//! Reference documents load concurrently; price queries take the loaded
//! [`References`], so they can only be issued once both loads have finished.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use albion_market::{AsyncMarketSdk, OutputArea, RenderMode};
//! use albion_market::queries::build_query;
//! use albion_market::source::DocumentSource;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() {
//!     let sdk = AsyncMarketSdk::builder().build();
//!     let mut output = OutputArea::new();
//!     let refs = sdk
//!         .load_references(
//!             DocumentSource::parse("data/items.json"),
//!             DocumentSource::parse("data/world.json"),
//!             &mut output,
//!         )
//!         .await
//!         .unwrap();
//!
//!     let request = build_query(&["T4_BAG"], &["Martlock"], None).unwrap();
//!     let display = sdk.render_prices(request, Arc::new(refs), RenderMode::Table).await;
//!     if let Ok(display) = display {
//!         output.show(display);
//!     }
//! }
//! ```

use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::config::{DisplayLocale, Server};
use crate::error::{MarketError, Result};
use crate::models::{DisplayStructure, PriceRecord};
use crate::queries::PriceRequest;
use crate::reference::{self, ItemCatalog, LocationCatalog, ReferenceLoader, References};
use crate::render::{OutputArea, RenderMode};
use crate::source::{DocumentFetcher, DocumentSource};
use crate::{MarketSdk, MarketSdkBuilder};

// ---------------------------------------------------------------------------
// AsyncMarketSdkBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing an [`AsyncMarketSdk`] instance.
///
/// Mirrors [`MarketSdkBuilder`]; the sync SDK is assembled in
/// [`build()`](AsyncMarketSdkBuilder::build).
#[derive(Debug, Clone)]
pub struct AsyncMarketSdkBuilder {
    server: Server,
    base_url: Option<String>,
    timeout: Duration,
    locale: DisplayLocale,
}

impl Default for AsyncMarketSdkBuilder {
    fn default() -> Self {
        Self {
            server: Server::default(),
            base_url: None,
            timeout: Duration::from_secs(30),
            locale: DisplayLocale::default(),
        }
    }
}

impl AsyncMarketSdkBuilder {
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

    /// Set the HTTP request timeout for price queries and reference loads.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the name locale, number separators, date format and quality labels.
    pub fn locale(mut self, locale: DisplayLocale) -> Self {
        self.locale = locale;
        self
    }

    /// Build the async SDK. The HTTP client is created lazily on a blocking thread.
    pub fn build(self) -> AsyncMarketSdk {
        let mut sync = MarketSdkBuilder::default()
            .server(self.server)
            .timeout(self.timeout)
            .locale(self.locale.clone());
        if let Some(url) = self.base_url {
            sync = sync.base_url(url);
        }
        AsyncMarketSdk {
            inner: Arc::new(Mutex::new(sync.build())),
            timeout: self.timeout,
            locale: self.locale,
        }
    }
}

// ---------------------------------------------------------------------------
// AsyncMarketSdk
// ---------------------------------------------------------------------------

/// Async wrapper around [`MarketSdk`].
///
/// The underlying [`MarketSdk`] is protected by a [`Mutex`] since it uses
/// `RefCell` internally. Reference loads build their own fetchers from the
/// copied `timeout` and `locale` so both documents can load in parallel. Call [`close()`](Self::close) rather than dropping it
/// inside the runtime once a remote request has been made.
pub struct AsyncMarketSdk {
    inner: Arc<Mutex<MarketSdk>>,
    timeout: Duration,
    locale: DisplayLocale,
}

impl AsyncMarketSdk {
    /// Create a new builder for configuring the async SDK.
    pub fn builder() -> AsyncMarketSdkBuilder {
        AsyncMarketSdkBuilder::default()
    }

    /// Run a sync SDK operation on the blocking thread pool.
    pub async fn run<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&MarketSdk) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let sdk = self.inner.clone();
        tokio::task::spawn_blocking(move || {
            let guard = sdk
                .lock()
                .map_err(|_| MarketError::InvalidArgument("SDK lock poisoned".into()))?;
            f(&guard)
        })
        .await
        .map_err(|e| MarketError::InvalidArgument(format!("Task join error: {e}")))?
    }

    /// Load the items and world documents concurrently and wait for both.
    ///
    /// Load failures are appended to `output` (items first) and leave the
    /// affected catalog empty; only a failed blocking task is returned as `Err`.
    pub async fn load_references(
        &self,
        items: DocumentSource,
        locations: DocumentSource,
        output: &mut OutputArea,
    ) -> Result<References> {
        let (timeout, locale) = (self.timeout, self.locale.clone());
        let items_src = items.clone();
        let items_task = tokio::task::spawn_blocking(move || {
            let fetcher = DocumentFetcher::new(timeout);
            let loader = ReferenceLoader::new(&fetcher, &locale);
            loader.try_load_items(&items_src)
        });

        let (timeout, locale) = (self.timeout, self.locale.clone());
        let locations_src = locations.clone();
        let locations_task = tokio::task::spawn_blocking(move || {
            let fetcher = DocumentFetcher::new(timeout);
            let loader = ReferenceLoader::new(&fetcher, &locale);
            loader.try_load_locations(&locations_src)
        });

        let (items_result, locations_result) = tokio::join!(items_task, locations_task);
        let join_err = |e: tokio::task::JoinError| {
            MarketError::InvalidArgument(format!("Task join error: {e}"))
        };

        let item_catalog = items_result.map_err(join_err)?.unwrap_or_else(|e| {
            reference::report_failure("items", &items, &e.to_string(), output);
            ItemCatalog::default()
        });
        let location_catalog = locations_result.map_err(join_err)?.unwrap_or_else(|e| {
            reference::report_failure("locations", &locations, &e.to_string(), output);
            LocationCatalog::default()
        });

        Ok(References::new(item_catalog, location_catalog))
    }

    /// Fetch raw price records for `request`.
    pub async fn fetch_prices(
        &self,
        request: PriceRequest,
        refs: Arc<References>,
    ) -> Result<Vec<PriceRecord>> {
        self.run(move |s| s.prices(&refs).fetch(&request)).await
    }

    /// Fetch and render prices for `request`.
    pub async fn render_prices(
        &self,
        request: PriceRequest,
        refs: Arc<References>,
        mode: RenderMode,
    ) -> Result<DisplayStructure> {
        self.run(move |s| s.prices(&refs).render(&request, mode)).await
    }

    /// Close the SDK, releasing the HTTP client on a blocking thread.
    pub async fn close(self) -> Result<()> {
        tokio::task::spawn_blocking(move || {
            let sdk = self
                .inner
                .lock()
                .map_err(|_| MarketError::InvalidArgument("SDK lock poisoned".into()))?;
            sdk.fetcher().close();
            Ok(())
        })
        .await
        .map_err(|e| MarketError::InvalidArgument(format!("Task join error: {e}")))?
    }
}
