//! Content hub API client
//!
//! Thin asynchronous client for a content hub HTTP API. It covers content
//! retrieval by id, basic-auth login, and search, against both the
//! delivery (published) and authoring (draft) API surfaces.
//!
//! Every method maps onto a single GET request. Non-success status codes
//! surface as [`Error::Api`] with the status and raw body, transport
//! failures as [`Error::Http`], and malformed JSON bodies as
//! [`Error::Json`].
//!
//! # Example
//!
//! ```no_run
//! use contenthub_client::{ContentHubClient, SearchQuery};
//!
//! async fn example() -> Result<(), contenthub_client::Error> {
//!     let client = ContentHubClient::new("https://content.example.com/api/my-tenant")?;
//!
//!     // Establishes the session cookie used by authoring requests
//!     let tenant_id = client.login("user", "password").await?;
//!
//!     let content = client.delivery_content_by_id("some-content-id").await?;
//!
//!     let results = client
//!         .search_delivery(&SearchQuery::new().query("*:*").filter("classification:content"))
//!         .await?;
//!     # let _ = (tenant_id, content, results);
//!     Ok(())
//! }
//! ```

mod client;
mod error;
mod types;

pub use client::{ContentHubClient, ContentHubClientBuilder};
pub use error::{Error, Result};
pub use types::{Endpoint, SearchQuery};
