use crate::model::{Amount, Categories};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The ISO date format the remote store speaks.
const DATE_FORMAT: &str = "%Y-%m-%d";

/// A single expense row exactly as served by the remote store.
///
/// The store's serializer denormalizes the category name into `category_name`
/// alongside the raw `category` foreign key; payloads that were freshly edited on the
/// client side may carry only the id. Both representations are resolved into an
/// [`Expense`] when the ledger refreshes, so nothing downstream has to guess which
/// one it was given.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExpenseRecord {
    pub(crate) id: i64,
    #[serde(default)]
    pub(crate) category: Option<i64>,
    #[serde(default)]
    pub(crate) category_name: Option<String>,
    #[serde(default)]
    pub(crate) description: String,
    #[serde(default)]
    pub(crate) amount: Amount,
    #[serde(default)]
    pub(crate) date: String,
}

impl ExpenseRecord {
    pub fn id(&self) -> i64 {
        self.id
    }

    /// Resolves the dual category representation against the registry.
    ///
    /// The denormalized name wins when present; otherwise the registry resolves the
    /// id. The id is back-filled from the name (case-insensitively) when the record
    /// carried only a name.
    pub fn normalize(&self, categories: &Categories) -> Expense {
        let category_name = match &self.category_name {
            Some(name) => name.clone(),
            None => self
                .category
                .and_then(|id| categories.name_of(id))
                .map(str::to_string)
                .unwrap_or_default(),
        };
        let category_id = self.category.or_else(|| categories.id_of(&category_name));
        Expense {
            id: self.id,
            category_id,
            category_name,
            description: self.description.clone(),
            amount: self.amount,
            date: self.date.clone(),
        }
    }
}

/// A normalized expense: carries both the category id and the resolved category name.
///
/// This is what the ledger holds and what the filter, sort and total stages operate
/// on. It is produced from an [`ExpenseRecord`] at refresh time and never written
/// back to the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub(crate) id: i64,
    pub(crate) category_id: Option<i64>,
    pub(crate) category_name: String,
    pub(crate) description: String,
    pub(crate) amount: Amount,
    pub(crate) date: String,
}

impl Expense {
    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn category_id(&self) -> Option<i64> {
        self.category_id
    }

    pub fn category_name(&self) -> &str {
        &self.category_name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn amount(&self) -> Amount {
        self.amount
    }

    /// The stored date string, which may be empty or malformed.
    pub fn date_str(&self) -> &str {
        &self.date
    }

    /// The expense date, if the stored value parses as an ISO `YYYY-MM-DD` date.
    pub fn date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, DATE_FORMAT).ok()
    }
}

/// The payload for creating or updating an expense.
///
/// The id is never part of the payload: the server assigns one on create and takes it
/// from the URL on update. The date is optional because the server stamps the current
/// date when it is absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseInput {
    pub(crate) category: i64,
    pub(crate) description: String,
    pub(crate) amount: Amount,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) date: Option<String>,
}

impl ExpenseInput {
    pub fn new(category: i64, description: impl Into<String>, amount: Amount) -> Self {
        Self {
            category,
            description: description.into(),
            amount,
            date: None,
        }
    }

    pub fn with_date(mut self, date: Option<String>) -> Self {
        self.date = date;
        self
    }

    pub fn category(&self) -> i64 {
        self.category
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn amount(&self) -> Amount {
        self.amount
    }

    pub fn date(&self) -> Option<&str> {
        self.date.as_deref()
    }
}
