//! The `categories` command.

use crate::api::{self, ExpenseStore};
use crate::commands::Out;
use crate::model::Categories;
use crate::{Config, Mode, Result};

/// Lists the known categories in server order.
pub async fn categories(config: Config, mode: Mode) -> Result<Out<Categories>> {
    let mut store = api::store(&config, mode);
    let categories = store.list_categories().await?;

    let count = categories.len();
    let mut message = format!(
        "{count} categor{}:",
        if count == 1 { "y" } else { "ies" }
    );
    for category in categories.data() {
        message.push_str(&format!("\n  {:>4}  {}", category.id(), category.name()));
    }
    Ok(Out::new(message, categories))
}

#[cfg(test)]
mod tests {
    use super::*;
    use url::Url;

    #[tokio::test]
    async fn test_categories_lists_the_registry() {
        let config = Config::new(Url::parse("http://127.0.0.1:8000/api/").unwrap());
        let out = categories(config, Mode::Test).await.unwrap();
        assert!(out.message().contains("categories:"));
        assert!(out.message().contains("Groceries"));
        assert!(!out.structure().unwrap().is_empty());
    }
}
