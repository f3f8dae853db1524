//! Quote-aware CSV row handling for the trending-video export.
//!
//! The export is comma-separated with double-quoted fields that may
//! themselves contain commas. Tags arrive as one `|`-separated field.
//! Rows that are short, mis-quoted, or non-numeric are not errors —
//! ingestion skips them and the analysis core never sees them.

use taglens_core::{Record, COL_LIKES, COL_TAGS, COL_TITLE, COL_VIEWS, MIN_FIELDS};

/// Split one CSV line on commas, honoring double-quoted sections.
///
/// A `"` toggles quoted state and is stripped from the output; commas
/// inside a quoted section are ordinary characters. Matches the loose
/// semantics of the export: no escape sequences, no embedded newlines.
pub fn split_csv_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for c in line.chars() {
        match c {
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => {
                fields.push(std::mem::take(&mut current));
            }
            _ => current.push(c),
        }
    }
    fields.push(current);
    fields
}

/// Split a raw tags field on `|`, dropping empty segments.
pub fn split_tags(raw: &str) -> Vec<String> {
    raw.split('|')
        .filter(|t| !t.is_empty())
        .map(String::from)
        .collect()
}

/// Turn one parsed row into a record, or `None` if the row is unusable.
///
/// Unusable means: fewer than [`MIN_FIELDS`] columns (truncated or
/// mis-quoted row), or a views/likes field that does not parse as a
/// non-negative number.
pub fn parse_row(fields: &[String]) -> Option<Record> {
    if fields.len() < MIN_FIELDS {
        return None;
    }

    let views: f64 = fields[COL_VIEWS].parse().ok()?;
    let likes: f64 = fields[COL_LIKES].parse().ok()?;
    if views < 0.0 || likes < 0.0 || !views.is_finite() || !likes.is_finite() {
        return None;
    }

    let title = fields[COL_TITLE].clone();
    let tags = split_tags(&fields[COL_TAGS]);
    Some(Record::new(title, tags, views, likes))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Build a 16-column row with the analysis-relevant fields filled in.
    fn row(title: &str, tags: &str, views: &str, likes: &str) -> Vec<String> {
        let mut fields = vec![String::new(); MIN_FIELDS];
        fields[COL_TITLE] = title.to_string();
        fields[COL_TAGS] = tags.to_string();
        fields[COL_VIEWS] = views.to_string();
        fields[COL_LIKES] = likes.to_string();
        fields
    }

    #[test]
    fn test_split_plain_line() {
        assert_eq!(split_csv_line("a,b,c"), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_split_quoted_comma() {
        assert_eq!(
            split_csv_line("id,\"Title, with comma\",rest"),
            vec!["id", "Title, with comma", "rest"]
        );
    }

    #[test]
    fn test_split_empty_fields() {
        assert_eq!(split_csv_line("a,,c"), vec!["a", "", "c"]);
        assert_eq!(split_csv_line(""), vec![""]);
    }

    #[test]
    fn test_split_trailing_comma() {
        assert_eq!(split_csv_line("a,b,"), vec!["a", "b", ""]);
    }

    #[test]
    fn test_split_tags_drops_empty_segments() {
        assert_eq!(split_tags("music|gaming"), vec!["music", "gaming"]);
        assert_eq!(split_tags("music||gaming|"), vec!["music", "gaming"]);
        assert!(split_tags("").is_empty());
    }

    #[test]
    fn test_parse_row_happy_path() {
        let r = parse_row(&row("My Video", "music|news", "1000", "250")).unwrap();
        assert_eq!(r.title, "My Video");
        assert_eq!(r.tags, vec!["music", "news"]);
        assert_eq!(r.ratio, 0.25);
    }

    #[test]
    fn test_parse_row_short_row_skipped() {
        let fields = vec![String::from("only"), String::from("three"), String::from("cols")];
        assert!(parse_row(&fields).is_none());
    }

    #[test]
    fn test_parse_row_non_numeric_skipped() {
        assert!(parse_row(&row("v", "music", "not-a-number", "10")).is_none());
        assert!(parse_row(&row("v", "music", "10", "")).is_none());
    }

    #[test]
    fn test_parse_row_negative_counts_skipped() {
        assert!(parse_row(&row("v", "music", "-5", "10")).is_none());
        assert!(parse_row(&row("v", "music", "10", "-1")).is_none());
    }

    #[test]
    fn test_parse_row_zero_views() {
        let r = parse_row(&row("v", "music", "0", "999")).unwrap();
        assert_eq!(r.ratio, 0.0);
    }
}
