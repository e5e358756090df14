// ═══════════════════════════════════════════════════════════════════
// Model Tests — Category, Expense wire format, StoreConfig
// ═══════════════════════════════════════════════════════════════════

use chrono::{NaiveDate, TimeZone, Utc};
use expense_tracker_core::errors::CoreError;
use expense_tracker_core::models::category::Category;
use expense_tracker_core::models::expense::{Expense, NewExpense};
use std::collections::HashSet;

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

// ═══════════════════════════════════════════════════════════════════
//  Category
// ═══════════════════════════════════════════════════════════════════

mod category {
    use super::*;

    #[test]
    fn display_uses_wire_name() {
        assert_eq!(Category::Food.to_string(), "Food");
        assert_eq!(Category::Transport.to_string(), "Transport");
        assert_eq!(Category::Entertainment.to_string(), "Entertainment");
        assert_eq!(Category::Shopping.to_string(), "Shopping");
        assert_eq!(Category::Health.to_string(), "Health");
        assert_eq!(Category::Other.to_string(), "Other");
    }

    #[test]
    fn labels() {
        assert_eq!(Category::Food.label(), "Food & Dining");
        assert_eq!(Category::Transport.label(), "Transportation");
        assert_eq!(Category::Health.label(), "Health & Medical");
        assert_eq!(Category::Other.label(), "Other");
    }

    #[test]
    fn every_category_has_an_icon() {
        for c in Category::ALL {
            assert!(!c.icon().is_empty(), "{c} has no icon");
        }
    }

    #[test]
    fn all_is_complete_and_distinct() {
        let set: HashSet<Category> = Category::ALL.into_iter().collect();
        assert_eq!(set.len(), 6);
        assert_eq!(Category::ALL[0], Category::Food);
        assert_eq!(Category::ALL[5], Category::Other);
    }

    #[test]
    fn default_is_food() {
        assert_eq!(Category::default(), Category::Food);
    }

    #[test]
    fn parse_case_insensitive() {
        assert_eq!("food".parse::<Category>().unwrap(), Category::Food);
        assert_eq!("TRANSPORT".parse::<Category>().unwrap(), Category::Transport);
        assert_eq!(" Health ".parse::<Category>().unwrap(), Category::Health);
    }

    #[test]
    fn parse_unknown_is_validation_error() {
        let err = "Groceries".parse::<Category>().unwrap_err();
        assert!(matches!(err, CoreError::ValidationError(msg) if msg.contains("Groceries")));
    }

    #[test]
    fn serializes_as_bare_name() {
        assert_eq!(serde_json::to_string(&Category::Shopping).unwrap(), "\"Shopping\"");
        let back: Category = serde_json::from_str("\"Entertainment\"").unwrap();
        assert_eq!(back, Category::Entertainment);
    }

    #[test]
    fn unknown_wire_name_rejected() {
        assert!(serde_json::from_str::<Category>("\"Rent\"").is_err());
    }

    #[test]
    fn ordering_follows_declaration() {
        assert!(Category::Food < Category::Transport);
        assert!(Category::Health < Category::Other);
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Expense
// ═══════════════════════════════════════════════════════════════════

mod expense {
    use super::*;

    fn coffee() -> NewExpense {
        NewExpense::new("Coffee", 15000.0, Category::Food, d(2024, 3, 1))
    }

    #[test]
    fn create_sets_created_at_only() {
        let now = Utc.with_ymd_and_hms(2024, 3, 1, 8, 0, 0).unwrap();
        let e = Expense::create("abc", coffee(), now);
        assert_eq!(e.id, "abc");
        assert_eq!(e.title, "Coffee");
        assert_eq!(e.amount, 15000.0);
        assert_eq!(e.category, Category::Food);
        assert_eq!(e.date, d(2024, 3, 1));
        assert_eq!(e.created_at, Some(now));
        assert_eq!(e.updated_at, None);
    }

    #[test]
    fn replaced_with_keeps_id_and_created_at() {
        let created = Utc.with_ymd_and_hms(2024, 3, 1, 8, 0, 0).unwrap();
        let later = Utc.with_ymd_and_hms(2024, 3, 2, 9, 30, 0).unwrap();
        let original = Expense::create("abc", coffee(), created);

        let replacement = original.replaced_with(
            NewExpense::new("Bus", 5000.0, Category::Transport, d(2024, 3, 2)),
            later,
        );

        assert_eq!(replacement.id, "abc");
        assert_eq!(replacement.created_at, Some(created));
        assert_eq!(replacement.updated_at, Some(later));
        assert_eq!(replacement.title, "Bus");
        assert_eq!(replacement.category, Category::Transport);
    }

    #[test]
    fn to_new_expense_extracts_fields() {
        let e = Expense::create("abc", coffee(), Utc::now());
        assert_eq!(e.to_new_expense(), coffee());
    }

    #[test]
    fn serializes_camel_case_and_skips_missing_timestamps() {
        let now = Utc.with_ymd_and_hms(2024, 3, 1, 8, 0, 0).unwrap();
        let e = Expense::create("abc", coffee(), now);
        let json = serde_json::to_value(&e).unwrap();

        assert_eq!(json["id"], "abc");
        assert_eq!(json["category"], "Food");
        assert_eq!(json["date"], "2024-03-01");
        assert!(json.get("createdAt").is_some());
        assert!(json.get("created_at").is_none());
        assert!(json.get("updatedAt").is_none());
    }

    #[test]
    fn serde_roundtrip_preserves_timestamps() {
        let created = Utc.with_ymd_and_hms(2024, 3, 1, 8, 0, 0).unwrap();
        let e = Expense::create("abc", coffee(), created)
            .replaced_with(coffee(), Utc::now());
        let json = serde_json::to_string(&e).unwrap();
        let back: Expense = serde_json::from_str(&json).unwrap();
        assert_eq!(back, e);
    }

    #[test]
    fn reads_legacy_iso_datetime_date() {
        let json = r#"{
            "id": "1709280000000k3j9x0q2a",
            "title": "Lunch",
            "amount": 42000,
            "category": "Food",
            "date": "2024-03-01T05:12:44.120Z",
            "createdAt": "2024-03-01T05:12:50.000Z"
        }"#;
        let e: Expense = serde_json::from_str(json).unwrap();
        assert_eq!(e.date, d(2024, 3, 1));
        assert_eq!(e.amount, 42000.0);
        assert!(e.created_at.is_some());
        assert!(e.updated_at.is_none());
    }

    #[test]
    fn legacy_datetime_keeps_its_own_offset_date() {
        // Late-evening UTC stays on the UTC day; an explicit offset keeps its local day.
        let utc = r#"{"id":"x","title":"Late","amount":1,"category":"Other","date":"2024-02-29T23:30:00.000Z"}"#;
        let local = r#"{"id":"y","title":"Early","amount":1,"category":"Other","date":"2024-03-01T06:30:00+07:00"}"#;
        assert_eq!(serde_json::from_str::<Expense>(utc).unwrap().date, d(2024, 2, 29));
        assert_eq!(serde_json::from_str::<Expense>(local).unwrap().date, d(2024, 3, 1));
    }

    #[test]
    fn reads_record_without_timestamps() {
        let json = r#"{"id":"x","title":"Taxi","amount":12.5,"category":"Transport","date":"2023-12-31"}"#;
        let e: Expense = serde_json::from_str(json).unwrap();
        assert_eq!(e.created_at, None);
        assert_eq!(e.date, d(2023, 12, 31));
    }

    #[test]
    fn rejects_garbage_date() {
        let json = r#"{"id":"x","title":"Taxi","amount":12.5,"category":"Transport","date":"yesterday"}"#;
        assert!(serde_json::from_str::<Expense>(json).is_err());
    }

    #[test]
    fn rejects_unknown_category() {
        let json = r#"{"id":"x","title":"Rent","amount":1,"category":"Housing","date":"2024-01-01"}"#;
        assert!(serde_json::from_str::<Expense>(json).is_err());
    }
}

// ═══════════════════════════════════════════════════════════════════
//  StoreConfig
// ═══════════════════════════════════════════════════════════════════

mod store_config {
    use expense_tracker_core::config::{StoreConfig, DEFAULT_STORAGE_KEY};

    #[test]
    fn default_key() {
        assert_eq!(StoreConfig::default().storage_key, "@expense_tracker_data");
        assert_eq!(StoreConfig::default().storage_key, DEFAULT_STORAGE_KEY);
    }

    #[test]
    fn missing_fields_take_defaults() {
        let cfg: StoreConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(cfg, StoreConfig::default());
    }

    #[test]
    fn custom_key_from_json() {
        let cfg: StoreConfig = serde_json::from_str(r#"{"storage_key":"alt"}"#).unwrap();
        assert_eq!(cfg, StoreConfig::with_storage_key("alt"));
    }
}
