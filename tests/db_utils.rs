#[cfg(test)]
mod tests {
    use serde_json::json;
    use timeclock::utils::db_utils::{SqlValue, build_update_sql};

    const COLUMNS: &[&str] = &["name", "email", "join_date", "in_time", "work_time", "status"];

    #[test]
    fn test_builds_update_with_bound_id() {
        let payload = json!({ "name": "Jane" });
        let update = build_update_sql("members", &payload, COLUMNS, "id", 7).unwrap();

        assert_eq!(update.sql, "UPDATE members SET name = ? WHERE id = ?");
        assert_eq!(update.values.len(), 2);
        assert!(matches!(&update.values[0], SqlValue::String(s) if s == "Jane"));
        assert!(matches!(update.values[1], SqlValue::I64(7)));
    }

    #[test]
    fn test_rejects_unknown_columns() {
        let payload = json!({ "name": "Jane", "role": "admin" });
        assert!(build_update_sql("members", &payload, COLUMNS, "id", 7).is_err());
    }

    #[test]
    fn test_rejects_empty_payload() {
        let payload = json!({});
        assert!(build_update_sql("members", &payload, COLUMNS, "id", 7).is_err());
    }

    #[test]
    fn test_rejects_non_object_payload() {
        let payload = json!([1, 2, 3]);
        assert!(build_update_sql("members", &payload, COLUMNS, "id", 7).is_err());
    }

    #[test]
    fn test_classifies_dates_and_datetimes() {
        let payload = json!({ "join_date": "2024-01-05" });
        let update = build_update_sql("members", &payload, COLUMNS, "id", 1).unwrap();
        assert!(matches!(update.values[0], SqlValue::Date(_)));

        // Both datetime spellings land as DateTime
        let payload = json!({ "in_time": "2024-01-05T09:12:44" });
        let update = build_update_sql("reports", &payload, COLUMNS, "id", 1).unwrap();
        assert!(matches!(update.values[0], SqlValue::DateTime(_)));

        let payload = json!({ "in_time": "2024-01-05 09:12:44" });
        let update = build_update_sql("reports", &payload, COLUMNS, "id", 1).unwrap();
        assert!(matches!(update.values[0], SqlValue::DateTime(_)));
    }

    #[test]
    fn test_plain_strings_stay_strings() {
        let payload = json!({ "email": "jane@company.com" });
        let update = build_update_sql("members", &payload, COLUMNS, "id", 1).unwrap();
        assert!(matches!(&update.values[0], SqlValue::String(s) if s == "jane@company.com"));
    }

    #[test]
    fn test_numbers_and_nulls() {
        let payload = json!({ "work_time": 480, "status": null });
        let update = build_update_sql("members", &payload, COLUMNS, "id", 1).unwrap();

        // Key order belongs to serde_json, so assert by containment
        assert!(update.sql.starts_with("UPDATE members SET "));
        assert!(update.sql.contains("work_time = ?"));
        assert!(update.sql.contains("status = ?"));
        assert!(update.sql.ends_with("WHERE id = ?"));
        assert_eq!(update.values.len(), 3);
    }
}
