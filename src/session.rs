//! Pagination cursors for one REPL run.
//!
//! The server hands back its own `next`/`previous` links with every page;
//! the session keeps the latest pair and follows them verbatim.

use crate::api::{ApiClient, Page};
use crate::error::{PokedexError, PokedexResult};
use log::debug;

/// The pair of links taken from the last page fetched. Always replaced as
/// a whole so `previous` can never describe a different page than `next`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cursors {
    /// Next page, `None` once the catalog is exhausted.
    pub next: Option<String>,
    /// Previous page, `None` on the first page.
    pub previous: Option<String>,
}

impl Cursors {
    fn from_page(page: &Page) -> Self {
        Cursors {
            next: non_empty(page.next.as_deref()),
            previous: non_empty(page.previous.as_deref()),
        }
    }
}

fn non_empty(url: Option<&str>) -> Option<String> {
    url.filter(|u| !u.is_empty()).map(str::to_string)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    cursors: Cursors,
}

impl Session {
    /// Start before the first page: `next` is the seed URL, no `previous`.
    pub fn new(start_url: impl Into<String>) -> Self {
        let start_url: String = start_url.into();
        Session {
            cursors: Cursors {
                next: non_empty(Some(start_url.as_str())),
                previous: None,
            },
        }
    }

    pub fn cursors(&self) -> &Cursors {
        &self.cursors
    }

    pub fn next_url(&self) -> Option<&str> {
        self.cursors.next.as_deref()
    }

    pub fn previous_url(&self) -> Option<&str> {
        self.cursors.previous.as_deref()
    }

    /// Fetch the page the forward cursor points at and return its item
    /// names. Fails with `EndOfCatalog` without touching the network if
    /// there is no forward cursor.
    pub fn fetch_next(&mut self, api: &ApiClient) -> PokedexResult<Vec<String>> {
        let url = self.cursors.next.clone().ok_or(PokedexError::EndOfCatalog)?;
        self.follow(api, &url)
    }

    /// Fetch the page the backward cursor points at. Fails with
    /// `NoPreviousPage` without touching the network on the first page.
    pub fn fetch_previous(&mut self, api: &ApiClient) -> PokedexResult<Vec<String>> {
        let url = self
            .cursors
            .previous
            .clone()
            .ok_or(PokedexError::NoPreviousPage)?;
        self.follow(api, &url)
    }

    // Cursors are only replaced once the page decoded; any error leaves
    // them where they were so the user can retry the same command.
    fn follow(&mut self, api: &ApiClient, url: &str) -> PokedexResult<Vec<String>> {
        let page = api.fetch_page(url)?;
        self.cursors = Cursors::from_page(&page);
        debug!(
            "cursors now next={:?} previous={:?}",
            self.cursors.next, self.cursors.previous
        );
        Ok(page.names())
    }
}
