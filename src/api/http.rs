//! Implements the `ExpenseStore` trait against the remote REST API using `reqwest`.

use crate::api::ExpenseStore;
use crate::model::{Categories, Category, ExpenseInput, ExpenseRecord};
use crate::{Config, Result};
use anyhow::Context;
use tracing::trace;

/// Talks to the expense store over HTTP. One client is reused across calls.
pub struct HttpStore {
    config: Config,
    client: reqwest::Client,
}

impl HttpStore {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait::async_trait]
impl ExpenseStore for HttpStore {
    async fn list_categories(&mut self) -> Result<Categories> {
        let url = self.config.categories_url()?;
        trace!("GET {url}");
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .with_context(|| format!("Failed to send request to {url}"))?;
        let response = check(response, "Category list").await?;
        let data: Vec<Category> = response
            .json()
            .await
            .context("Failed to parse the category list response")?;
        Ok(Categories::new(data))
    }

    async fn list_expenses(&mut self) -> Result<Vec<ExpenseRecord>> {
        let url = self.config.expenses_url()?;
        trace!("GET {url}");
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .with_context(|| format!("Failed to send request to {url}"))?;
        let response = check(response, "Expense list").await?;
        response
            .json()
            .await
            .context("Failed to parse the expense list response")
    }

    async fn create_expense(&mut self, input: &ExpenseInput) -> Result<ExpenseRecord> {
        let url = self.config.expenses_url()?;
        trace!("POST {url}");
        let response = self
            .client
            .post(url.clone())
            .json(input)
            .send()
            .await
            .with_context(|| format!("Failed to send request to {url}"))?;
        let response = check(response, "Expense create").await?;
        response
            .json()
            .await
            .context("Failed to parse the created expense")
    }

    async fn update_expense(&mut self, id: i64, input: &ExpenseInput) -> Result<ExpenseRecord> {
        let url = self.config.expense_url(id)?;
        trace!("PUT {url}");
        let response = self
            .client
            .put(url.clone())
            .json(input)
            .send()
            .await
            .with_context(|| format!("Failed to send request to {url}"))?;
        let response = check(response, "Expense update").await?;
        response
            .json()
            .await
            .context("Failed to parse the updated expense")
    }

    async fn delete_expense(&mut self, id: i64) -> Result<()> {
        let url = self.config.expense_url(id)?;
        trace!("DELETE {url}");
        let response = self
            .client
            .delete(url.clone())
            .send()
            .await
            .with_context(|| format!("Failed to send request to {url}"))?;
        let _ = check(response, "Expense delete").await?;
        Ok(())
    }
}

/// Turns a non-2xx response into an error carrying the status and body.
async fn check(response: reqwest::Response, what: &str) -> Result<reqwest::Response> {
    if !response.status().is_success() {
        let status = response.status();
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Unable to read response body".to_string());
        anyhow::bail!("{what} failed with status {status}: {body}");
    }
    Ok(response)
}
