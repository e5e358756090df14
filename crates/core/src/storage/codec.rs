use crate::errors::CoreError;
use crate::models::expense::Expense;

/// Encode the whole collection as the JSON array stored under the store key.
///
/// Layout (one element per record, insertion order preserved):
/// ```text
/// [{"id":"...","title":"...","amount":15000.0,"category":"Food",
///   "date":"2024-03-01","createdAt":"2024-03-01T08:00:00Z"}, ...]
/// ```
///
/// JSON has no representation for NaN or infinity (`serde_json` would write
/// `null`, which `decode` rejects), so non-finite amounts are refused here.
pub fn encode(expenses: &[Expense]) -> Result<String, CoreError> {
    if let Some(bad) = expenses.iter().find(|e| !e.amount.is_finite()) {
        return Err(CoreError::Serialization(format!(
            "Expense {} has a non-finite amount ({})",
            bad.id, bad.amount
        )));
    }

    serde_json::to_string(expenses)
        .map_err(|e| CoreError::Serialization(format!("Failed to serialize expenses: {e}")))
}

/// Decode a stored blob back into the collection.
/// A blank value decodes to an empty collection.
pub fn decode(data: &str) -> Result<Vec<Expense>, CoreError> {
    if data.trim().is_empty() {
        return Ok(Vec::new());
    }

    serde_json::from_str(data)
        .map_err(|e| CoreError::Deserialization(format!("Failed to deserialize expenses: {e}")))
}
