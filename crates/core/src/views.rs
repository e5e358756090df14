use chrono::Datelike;

use crate::models::expense::Expense;

/// Expenses dated in `month` (1–12) of `year`, newest date first.
pub fn in_month(expenses: &[Expense], year: i32, month: u32) -> Vec<Expense> {
    let mut filtered: Vec<Expense> = expenses
        .iter()
        .filter(|e| e.date.year() == year && e.date.month() == month)
        .cloned()
        .collect();
    newest_first(&mut filtered);
    filtered
}

/// Sort by date descending. Stable: same-day records keep their order.
pub fn newest_first(expenses: &mut [Expense]) {
    expenses.sort_by(|a, b| b.date.cmp(&a.date));
}

/// Sum of amounts; `0.0` for an empty slice.
pub fn sum(expenses: &[Expense]) -> f64 {
    expenses.iter().map(|e| e.amount).sum()
}
