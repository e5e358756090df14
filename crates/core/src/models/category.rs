use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::errors::CoreError;

/// Closed set of expense categories.
///
/// Serialized by bare variant name (`"Food"`), which is also what the
/// persisted blob contains. Declaration order is the listing order.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum Category {
    #[default]
    Food,
    Transport,
    Entertainment,
    Shopping,
    Health,
    Other,
}

impl Category {
    /// All categories in picker order.
    pub const ALL: [Category; 6] = [
        Category::Food,
        Category::Transport,
        Category::Entertainment,
        Category::Shopping,
        Category::Health,
        Category::Other,
    ];

    /// Human-readable label shown in the category picker.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Food => "Food & Dining",
            Category::Transport => "Transportation",
            Category::Entertainment => "Entertainment",
            Category::Shopping => "Shopping",
            Category::Health => "Health & Medical",
            Category::Other => "Other",
        }
    }

    /// Thumbnail glyph used next to list rows.
    pub fn icon(&self) -> &'static str {
        match self {
            Category::Food => "🍽️",
            Category::Transport => "🚗",
            Category::Entertainment => "🎬",
            Category::Shopping => "🛍️",
            Category::Health => "🏥",
            Category::Other => "📝",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Category::Food => write!(f, "Food"),
            Category::Transport => write!(f, "Transport"),
            Category::Entertainment => write!(f, "Entertainment"),
            Category::Shopping => write!(f, "Shopping"),
            Category::Health => write!(f, "Health"),
            Category::Other => write!(f, "Other"),
        }
    }
}

/// Parses the wire name, case-insensitively.
impl FromStr for Category {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Category::ALL
            .into_iter()
            .find(|c| c.to_string().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| CoreError::ValidationError(format!("Unknown category '{s}'")))
    }
}
