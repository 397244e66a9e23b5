//! Free-text filtering of sub-component records.

use crate::catalog::SubComponentRecord;

/// True when the query should not narrow the list at all
pub fn is_blank(query: &str) -> bool {
    query.trim().is_empty()
}

/// Case-insensitive match against name, description, or any single tag.
///
/// Blank queries match everything. Non-blank queries are used as typed, so
/// surrounding spaces take part in the substring test.
pub fn matches(record: &SubComponentRecord, query: &str) -> bool {
    if is_blank(query) {
        return true;
    }
    matches_needle(record, &query.to_lowercase())
}

/// Visible subset of `records` for `query`, original order preserved
pub fn filter<'a>(records: &'a [SubComponentRecord], query: &str) -> Vec<&'a SubComponentRecord> {
    if is_blank(query) {
        return records.iter().collect();
    }

    let needle = query.to_lowercase();
    records
        .iter()
        .filter(|r| matches_needle(r, &needle))
        .collect()
}

fn matches_needle(record: &SubComponentRecord, needle: &str) -> bool {
    record.name.to_lowercase().contains(needle)
        || record.description.to_lowercase().contains(needle)
        || record
            .tags
            .iter()
            .any(|tag| tag.to_lowercase().contains(needle))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, name: &str, description: &str, tags: &[&str]) -> SubComponentRecord {
        SubComponentRecord {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            tags: tags.iter().map(|t| (*t).to_string()).collect(),
        }
    }

    fn auth_records() -> Vec<SubComponentRecord> {
        vec![
            record(
                "basic-auth",
                "Basic Authentication",
                "JWT-based login, register, and middleware protection",
                &["JWT", "bcrypt", "Express"],
            ),
            record(
                "forgot-password",
                "Forgot Password",
                "Secure password reset via email with token validation",
                &["Email", "Crypto", "Tokens"],
            ),
            record(
                "two-factor-auth",
                "Two-Factor Authentication",
                "TOTP-based 2FA with QR code generation",
                &["2FA", "TOTP", "QR Code"],
            ),
            record("bare", "Bare", "No tags at all", &[]),
        ]
    }

    fn ids<'a>(records: &[&'a SubComponentRecord]) -> Vec<&'a str> {
        records.iter().map(|r| r.id.as_str()).collect()
    }

    #[test]
    fn test_empty_query_is_identity() {
        let records = auth_records();
        let visible = filter(&records, "");
        assert_eq!(visible.len(), records.len());
        assert!(visible.iter().zip(&records).all(|(a, b)| std::ptr::eq(*a, b)));
    }

    #[test]
    fn test_whitespace_query_is_identity() {
        let records = auth_records();
        assert_eq!(filter(&records, "   \t").len(), records.len());
    }

    #[test]
    fn test_tag_match_is_case_insensitive() {
        let records = auth_records();
        assert_eq!(ids(&filter(&records, "jwt")), vec!["basic-auth"]);
    }

    #[test]
    fn test_case_insensitive_query() {
        let records = auth_records();
        assert_eq!(
            ids(&filter(&records, "AUTH")),
            ids(&filter(&records, "auth"))
        );
        assert_eq!(
            ids(&filter(&records, "auth")),
            vec!["basic-auth", "two-factor-auth"]
        );
    }

    #[test]
    fn test_description_match() {
        let records = auth_records();
        assert_eq!(ids(&filter(&records, "qr code gen")), vec!["two-factor-auth"]);
    }

    #[test]
    fn test_tag_match_is_per_tag() {
        let records = auth_records();
        // "JWT" and "bcrypt" are adjacent tags; a joined string would match this
        assert!(filter(&records, "jwtbcrypt").is_empty());
        assert!(filter(&records, "jwt bcrypt").is_empty());
    }

    #[test]
    fn test_no_match_is_empty() {
        let records = auth_records();
        assert!(filter(&records, "zzz-nomatch").is_empty());
    }

    #[test]
    fn test_record_without_tags() {
        let records = auth_records();
        assert_eq!(ids(&filter(&records, "no tags")), vec!["bare"]);
        assert!(!matches(&records[3], "jwt"));
    }

    #[test]
    fn test_result_preserves_order() {
        let records = auth_records();
        // "a" appears in every record; order must follow the input
        let visible = filter(&records, "a");
        let positions: Vec<_> = visible
            .iter()
            .map(|v| records.iter().position(|r| r.id == v.id).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_idempotent() {
        let records = auth_records();
        for query in ["", "auth", "TOKENS", "e", "zzz"] {
            let once: Vec<SubComponentRecord> =
                filter(&records, query).into_iter().cloned().collect();
            let twice = filter(&once, query);
            assert_eq!(ids(&twice), once.iter().map(|r| r.id.as_str()).collect::<Vec<_>>());
        }
    }

    #[test]
    fn test_query_used_as_typed() {
        let records = auth_records();
        // Trailing space is part of the needle
        assert_eq!(ids(&filter(&records, "basic ")), vec!["basic-auth"]);
        assert!(filter(&records, "jwt ").is_empty());
    }

    #[test]
    fn test_empty_records() {
        assert!(filter(&[], "").is_empty());
        assert!(filter(&[], "auth").is_empty());
    }
}
