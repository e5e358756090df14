use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::category::Category;

/// User-editable fields of an expense: everything except `id` and the
/// timestamps. This is the payload for both create and update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewExpense {
    pub title: String,
    pub amount: f64,
    pub category: Category,
    #[serde(with = "calendar_date")]
    pub date: NaiveDate,
}

impl NewExpense {
    pub fn new(
        title: impl Into<String>,
        amount: f64,
        category: Category,
        date: NaiveDate,
    ) -> Self {
        Self {
            title: title.into(),
            amount,
            category,
            date,
        }
    }
}

/// A single recorded expense.
///
/// Field names serialize in camelCase so the stored blob keeps the
/// `createdAt` / `updatedAt` keys existing installs already have on disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    /// Opaque unique identifier, assigned by the store on create
    pub id: String,

    /// Display title (never empty once validated)
    pub title: String,

    /// Spent amount (always positive)
    pub amount: f64,

    pub category: Category,

    /// Day the expense happened (no time component)
    #[serde(with = "calendar_date")]
    pub date: NaiveDate,

    /// Set once on create, never touched again
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    /// Set on every update; `None` until the first one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Expense {
    /// Build a freshly created record.
    pub fn create(id: impl Into<String>, data: NewExpense, now: DateTime<Utc>) -> Self {
        Self {
            id: id.into(),
            title: data.title,
            amount: data.amount,
            category: data.category,
            date: data.date,
            created_at: Some(now),
            updated_at: None,
        }
    }

    /// Build the replacement for this record: same `id` and `created_at`,
    /// new fields, `updated_at` stamped with `now`.
    pub fn replaced_with(&self, data: NewExpense, now: DateTime<Utc>) -> Self {
        Self {
            id: self.id.clone(),
            title: data.title,
            amount: data.amount,
            category: data.category,
            date: data.date,
            created_at: self.created_at,
            updated_at: Some(now),
        }
    }

    /// The editable fields of this record.
    pub fn to_new_expense(&self) -> NewExpense {
        NewExpense {
            title: self.title.clone(),
            amount: self.amount,
            category: self.category,
            date: self.date,
        }
    }
}

/// Calendar dates are written as `YYYY-MM-DD`. Reading also accepts a full
/// RFC 3339 timestamp (older blobs stored the picker's datetime), keeping
/// only the date part in the timestamp's own offset.
pub(crate) mod calendar_date {
    use chrono::{DateTime, NaiveDate};
    use serde::{de::Error, Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%Y-%m-%d";

    pub fn serialize<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&date.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        parse(&raw).ok_or_else(|| D::Error::custom(format!("invalid date '{raw}'")))
    }

    pub fn parse(raw: &str) -> Option<NaiveDate> {
        let raw = raw.trim();
        NaiveDate::parse_from_str(raw, FORMAT)
            .ok()
            .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive()))
    }
}
