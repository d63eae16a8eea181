// API client module: a small blocking HTTP client that fetches one page of
// the remote catalog at a time. It does not know about cursors; it just
// follows whatever URL the session hands it and decodes the page envelope.

use crate::error::{PokedexError, PokedexResult};
use anyhow::{Context, Result};
use log::debug;
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};

/// Blocking client shared by every navigation command.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
}

/// One entry of a listing page. `url` points at the detail resource,
/// which nothing here follows yet.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct NamedResource {
    pub name: String,
    #[serde(default)]
    pub url: String,
}

/// Page envelope returned by every paginated listing endpoint.
///
/// `next` is `null` or `""` on the last page and `previous` is `null` on
/// the first one. Both are opaque: they are followed verbatim.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Page {
    #[serde(default)]
    pub count: u64,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub results: Vec<NamedResource>,
}

impl Page {
    /// Item display names, in server order.
    pub fn names(&self) -> Vec<String> {
        self.results.iter().map(|r| r.name.clone()).collect()
    }
}

impl ApiClient {
    /// Build the underlying reqwest client. Only fails if the TLS backend
    /// cannot be initialized.
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("pokedex-cli/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to build HTTP client")?;
        Ok(ApiClient { client })
    }

    /// GET `url` and decode the body as a [`Page`].
    ///
    /// Connection failures and unreadable bodies are `Transport` errors, a
    /// non-success status is a `Status` error, and a body that is not a
    /// page envelope is a `Decode` error.
    pub fn fetch_page(&self, url: &str) -> PokedexResult<Page> {
        debug!("GET {}", url);
        let transport = |source: reqwest::Error| PokedexError::Transport {
            url: url.to_string(),
            source,
        };

        let res = self.client.get(url).send().map_err(transport)?;
        let status = res.status();
        if !status.is_success() {
            return Err(PokedexError::Status {
                url: url.to_string(),
                status,
            });
        }

        let body = res.bytes().map_err(transport)?;
        debug!("{} -> {} ({} bytes)", url, status, body.len());
        serde_json::from_slice(&body).map_err(|source| PokedexError::Decode {
            url: url.to_string(),
            source,
        })
    }
}
