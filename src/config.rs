//! Run-time configuration for the expenses CLI.
//!
//! The program owns no local state, so configuration is just the location of the
//! remote expense store plus the mode used to select a store implementation.

use crate::Result;
use anyhow::Context;
use url::Url;

/// The `Config` object represents the configuration of the app: the base URL of the
/// remote expense store. It provides the endpoint URLs derived from that base.
#[derive(Debug, Clone)]
pub struct Config {
    api_base: Url,
}

impl Config {
    /// Creates a configuration from the API base URL, e.g.
    /// `http://127.0.0.1:8000/api/`.
    pub fn new(mut api_base: Url) -> Self {
        // Url::join treats the last path segment as a file unless the base ends
        // with a slash.
        if !api_base.path().ends_with('/') {
            let path = format!("{}/", api_base.path());
            api_base.set_path(&path);
        }
        Self { api_base }
    }

    /// The base URL of the expense store API.
    pub fn api_base(&self) -> &Url {
        &self.api_base
    }

    /// URL of the category collection. `GET` lists all categories.
    pub fn categories_url(&self) -> Result<Url> {
        self.api_base
            .join("categories/")
            .context("Failed to build the categories URL")
    }

    /// URL of the expense collection. `GET` lists, `POST` creates.
    pub fn expenses_url(&self) -> Result<Url> {
        self.api_base
            .join("expenses/")
            .context("Failed to build the expenses URL")
    }

    /// URL of a single expense. `PUT` updates, `DELETE` removes.
    pub fn expense_url(&self, id: i64) -> Result<Url> {
        self.api_base
            .join(&format!("expenses/{id}/"))
            .with_context(|| format!("Failed to build the URL for expense {id}"))
    }
}

/// Selects the store implementation.
///
/// When `EXPENSES_IN_TEST_MODE` is set and non-zero in length, the in-memory store
/// is used instead of the HTTP store, which allows the whole program to run without
/// a server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Http,
    Test,
}

impl Mode {
    pub fn from_env() -> Self {
        match std::env::var("EXPENSES_IN_TEST_MODE") {
            Ok(value) if !value.is_empty() => Mode::Test,
            _ => Mode::Http,
        }
    }
}
