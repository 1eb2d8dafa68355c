use regex::Regex;
use std::sync::OnceLock;

/// Utility for parsing PostgreSQL constraint violation messages.
///
/// Extracts structured (entity, field, value) information from the message
/// text and constraint names PostgreSQL emits, so that a raced unique insert
/// can be reported the same way as a pre-insert validation probe.
pub struct ConstraintParser;

struct RegexPatterns {
    key_value: Regex,
    column_name: Regex,
    table_name: Regex,
}

impl RegexPatterns {
    fn new() -> Self {
        Self {
            // Matches "Key (field)=(value)" in unique violation details
            key_value: Regex::new(r"Key \(([^)]+)\)=\(([^)]*)\)").unwrap(),
            column_name: Regex::new(r#"column "([^"]+)""#).unwrap(),
            table_name: Regex::new(r#"table "([^"]+)""#).unwrap(),
        }
    }
}

static REGEX_PATTERNS: OnceLock<RegexPatterns> = OnceLock::new();

impl ConstraintParser {
    fn patterns() -> &'static RegexPatterns {
        REGEX_PATTERNS.get_or_init(RegexPatterns::new)
    }

    /// Parses a unique constraint violation into (entity, field, value).
    ///
    /// Prefers the constraint name (e.g. "users_email_key" or
    /// "users_cars_car_id_key"), falling back to the message text.
    pub fn parse_unique_violation(
        message: &str,
        constraint_name: Option<&str>,
    ) -> Option<(String, String, String)> {
        let value = Self::patterns()
            .key_value
            .captures(message)
            .map(|caps| caps[2].to_string());

        if let Some(constraint) = constraint_name {
            if let Some((entity, field)) = Self::parse_constraint_name(constraint) {
                return Some((
                    entity,
                    field,
                    value.unwrap_or_else(|| "duplicate_value".to_string()),
                ));
            }
        }

        // Fall back to the "Key (field)=(value)" detail line
        let caps = Self::patterns().key_value.captures(message)?;
        let entity = Self::patterns()
            .table_name
            .captures(message)
            .map(|c| c[1].to_string())
            .unwrap_or_else(|| "resource".to_string());
        Some((entity, caps[1].to_string(), caps[2].to_string()))
    }

    /// Parses a not-null violation into (entity, field).
    pub fn parse_not_null_violation(message: &str) -> Option<(String, String)> {
        let field = Self::patterns()
            .column_name
            .captures(message)
            .map(|c| c[1].to_string())?;
        let entity = Self::patterns()
            .table_name
            .captures(message)
            .map(|c| c[1].to_string())
            .unwrap_or_else(|| "resource".to_string());
        Some((entity, field))
    }

    /// Parses a foreign key violation into (entity, field).
    pub fn parse_foreign_key_violation(message: &str) -> Option<(String, String)> {
        let field = Self::patterns()
            .key_value
            .captures(message)
            .map(|c| c[1].to_string())?;
        let entity = Self::patterns()
            .table_name
            .captures(message)
            .map(|c| c[1].to_string())
            .unwrap_or_else(|| "resource".to_string());
        Some((entity, field))
    }

    /// Splits a PostgreSQL constraint name like "users_email_key" or
    /// "users_cars_car_id_key" into (table, column).
    ///
    /// The known table names are matched as prefixes, since both table and
    /// column names may themselves contain underscores.
    fn parse_constraint_name(constraint: &str) -> Option<(String, String)> {
        const TABLES: [&str; 3] = ["users_cars", "users", "cars"];

        let trimmed = constraint
            .strip_suffix("_pkey")
            .or_else(|| constraint.strip_suffix("_key"))
            .or_else(|| constraint.strip_suffix("_unique"))?;

        for table in TABLES {
            if let Some(rest) = trimmed.strip_prefix(table) {
                let column = rest.strip_prefix('_')?;
                if column.is_empty() {
                    return None;
                }
                return Some((table.to_string(), column.to_string()));
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_unique_violation_from_constraint_name() {
        let message = "duplicate key value violates unique constraint \"users_email_key\"\nDETAIL: Key (email)=(a@x.com) already exists.";
        let result = ConstraintParser::parse_unique_violation(message, Some("users_email_key"));
        assert_eq!(
            result,
            Some((
                "users".to_string(),
                "email".to_string(),
                "a@x.com".to_string()
            ))
        );
    }

    #[test]
    fn test_parse_unique_violation_association_table() {
        let message = "duplicate key value violates unique constraint \"users_cars_car_id_key\"\nDETAIL: Key (car_id)=(1) already exists.";
        let result =
            ConstraintParser::parse_unique_violation(message, Some("users_cars_car_id_key"));
        assert_eq!(
            result,
            Some((
                "users_cars".to_string(),
                "car_id".to_string(),
                "1".to_string()
            ))
        );
    }

    #[test]
    fn test_parse_unique_violation_without_constraint_name() {
        let message = "duplicate key value violates unique constraint\nDETAIL: Key (name)=(Tesla) already exists.";
        let result = ConstraintParser::parse_unique_violation(message, None);
        assert_eq!(
            result,
            Some((
                "resource".to_string(),
                "name".to_string(),
                "Tesla".to_string()
            ))
        );
    }

    #[test]
    fn test_parse_unique_violation_unparseable() {
        assert_eq!(
            ConstraintParser::parse_unique_violation("something went wrong", None),
            None
        );
    }

    #[test]
    fn test_parse_not_null_violation() {
        let message = "null value in column \"email\" violates not-null constraint";
        assert_eq!(
            ConstraintParser::parse_not_null_violation(message),
            Some(("resource".to_string(), "email".to_string()))
        );
    }

    #[test]
    fn test_parse_foreign_key_violation() {
        let message = "insert or update on table \"users_cars\" violates foreign key constraint \"users_cars_car_id_foreign\"\nDETAIL: Key (car_id)=(99) is not present in table \"cars\".";
        assert_eq!(
            ConstraintParser::parse_foreign_key_violation(message),
            Some(("users_cars".to_string(), "car_id".to_string()))
        );
    }

    #[test]
    fn test_constraint_name_with_pkey_suffix_has_no_column() {
        let message = "duplicate key value violates unique constraint \"users_cars_pkey\"";
        // No column component and no Key detail, nothing to extract
        assert_eq!(
            ConstraintParser::parse_unique_violation(message, Some("users_cars_pkey")),
            None
        );
    }
}
