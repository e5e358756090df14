use chrono::NaiveDate;
use std::collections::BTreeMap;

use crate::errors::CoreError;
use crate::models::category::Category;
use crate::models::expense::{Expense, NewExpense};

/// Form field a validation message belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FormField {
    Title,
    Amount,
    Category,
    Date,
}

impl std::fmt::Display for FormField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FormField::Title => write!(f, "title"),
            FormField::Amount => write!(f, "amount"),
            FormField::Category => write!(f, "category"),
            FormField::Date => write!(f, "date"),
        }
    }
}

/// Per-field validation messages, in field order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors {
    errors: BTreeMap<FormField, String>,
}

impl FormErrors {
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Message for one field, if it failed.
    pub fn get(&self, field: FormField) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (FormField, &str)> {
        self.errors.iter().map(|(f, m)| (*f, m.as_str()))
    }

    fn insert(&mut self, field: FormField, message: &str) {
        self.errors.insert(field, message.to_string());
    }
}

impl std::fmt::Display for FormErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for (field, message) in self.iter() {
            if !first {
                write!(f, "; ")?;
            }
            write!(f, "{field}: {message}")?;
            first = false;
        }
        Ok(())
    }
}

impl From<FormErrors> for CoreError {
    fn from(e: FormErrors) -> Self {
        CoreError::ValidationError(e.to_string())
    }
}

/// Raw state of the add/edit form, as typed by the user.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseForm {
    pub title: String,
    /// Unparsed amount text
    pub amount: String,
    pub category: Option<Category>,
    pub date: NaiveDate,
}

impl ExpenseForm {
    /// Blank form for adding: default category, given date.
    pub fn blank(date: NaiveDate) -> Self {
        Self {
            title: String::new(),
            amount: String::new(),
            category: Some(Category::default()),
            date,
        }
    }

    /// Form pre-filled from an existing expense, for editing.
    pub fn from_expense(expense: &Expense) -> Self {
        Self {
            title: expense.title.clone(),
            amount: expense.amount.to_string(),
            category: Some(expense.category),
            date: expense.date,
        }
    }

    /// Check every field and build the store payload.
    ///
    /// `today` bounds the date: expenses cannot be dated in the future.
    /// All failing fields are reported at once.
    pub fn validate(&self, today: NaiveDate) -> Result<NewExpense, FormErrors> {
        let mut errors = FormErrors::default();

        let title = self.title.trim();
        if title.is_empty() {
            errors.insert(FormField::Title, "Title is required");
        }

        let amount_text = self.amount.trim();
        let amount = if amount_text.is_empty() {
            errors.insert(FormField::Amount, "Amount is required");
            None
        } else {
            match amount_text.parse::<f64>() {
                Ok(v) if v.is_finite() && v > 0.0 => Some(v),
                _ => {
                    errors.insert(FormField::Amount, "Amount must be a positive number");
                    None
                }
            }
        };

        if self.category.is_none() {
            errors.insert(FormField::Category, "Category is required");
        }

        if self.date > today {
            errors.insert(FormField::Date, "Date cannot be in the future");
        }

        match (amount, self.category) {
            (Some(amount), Some(category)) if errors.is_empty() => {
                Ok(NewExpense::new(title, amount, category, self.date))
            }
            _ => Err(errors),
        }
    }
}
