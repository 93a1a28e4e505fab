//! Column resolution
//!
//! The source export does not use stable header names, so each semantic role
//! is bound to the first column whose header contains a keyword
//! (case-insensitive). Resolution happens once, up front; the pipeline never
//! runs on a partial binding.

use crate::error::{OrderReportError, Result};

pub const GROUP_KEYWORD: &str = "classification";
pub const RATE_FREEZE_KEYWORD: &str = "rate freeze";
pub const DATE_KEYWORD: &str = "date";

/// Measure keywords in resolution order. Only matched measures are kept, so
/// the resolved set is data-dependent (0 to 4 columns).
pub const MEASURE_KEYWORDS: [&str; 4] = ["gross wt", "net wt", "fine wt", "metal amount"];

/// A role bound to a physical column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedColumn {
    pub index: usize,
    pub label: String,
}

#[derive(Debug, Clone)]
pub struct SchemaBinding {
    pub group: ResolvedColumn,
    pub rate_freeze: ResolvedColumn,
    pub date: ResolvedColumn,
    pub measures: Vec<ResolvedColumn>,
}

/// First header (in original column order) whose lowercase form contains the
/// lowercase keyword.
pub fn find_column(headers: &[String], keyword: &str) -> Option<ResolvedColumn> {
    let keyword = keyword.to_lowercase();
    headers
        .iter()
        .position(|h| h.to_lowercase().contains(&keyword))
        .map(|index| ResolvedColumn {
            index,
            label: headers[index].clone(),
        })
}

impl SchemaBinding {
    /// Resolve all roles, collecting every failure into a single error so the
    /// caller sees the full list of problems at once.
    pub fn resolve(headers: &[String]) -> Result<Self> {
        let group = find_column(headers, GROUP_KEYWORD);
        let rate_freeze = find_column(headers, RATE_FREEZE_KEYWORD);
        let date = find_column(headers, DATE_KEYWORD);

        let measures: Vec<ResolvedColumn> = MEASURE_KEYWORDS
            .iter()
            .filter_map(|keyword| find_column(headers, keyword))
            .collect();

        let mut missing = Vec::new();
        if group.is_none() {
            missing.push(format!("classification group (keyword \"{}\")", GROUP_KEYWORD));
        }
        if rate_freeze.is_none() {
            missing.push(format!("rate freeze (keyword \"{}\")", RATE_FREEZE_KEYWORD));
        }
        if date.is_none() {
            missing.push(format!("date (keyword \"{}\")", DATE_KEYWORD));
        }
        if measures.is_empty() {
            missing.push(format!(
                "measure columns (keywords {})",
                MEASURE_KEYWORDS
                    .iter()
                    .map(|k| format!("\"{}\"", k))
                    .collect::<Vec<_>>()
                    .join(", ")
            ));
        }

        if !missing.is_empty() {
            return Err(OrderReportError::Schema(format!(
                "required column(s) not found: {}",
                missing.join("; ")
            )));
        }

        Ok(SchemaBinding {
            group: group.unwrap(),
            rate_freeze: rate_freeze.unwrap(),
            date: date.unwrap(),
            measures,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(labels: &[&str]) -> Vec<String> {
        labels.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_find_column_case_insensitive_substring() {
        let h = headers(&["Sl No", "Classification Group", "RATE FREEZE", "Order Date"]);
        assert_eq!(find_column(&h, "classification").unwrap().index, 1);
        assert_eq!(find_column(&h, "rate freeze").unwrap().label, "RATE FREEZE");
        assert_eq!(find_column(&h, "date").unwrap().index, 3);
        assert!(find_column(&h, "gross wt").is_none());
    }

    #[test]
    fn test_find_column_first_match_wins() {
        let h = headers(&["Order Date", "Delivery Date"]);
        assert_eq!(find_column(&h, "date").unwrap().label, "Order Date");
    }

    #[test]
    fn test_resolve_full_binding() {
        let h = headers(&[
            "Classification Group",
            "Rate Freeze",
            "Order Date",
            "Gross Wt",
            "Net Wt",
            "Fine Wt",
            "Metal Amount",
        ]);
        let binding = SchemaBinding::resolve(&h).unwrap();
        assert_eq!(binding.group.index, 0);
        assert_eq!(binding.measures.len(), 4);
        assert_eq!(binding.measures[0].label, "Gross Wt");
        assert_eq!(binding.measures[3].label, "Metal Amount");
    }

    #[test]
    fn test_resolve_partial_measures() {
        let h = headers(&["Classification Group", "Rate Freeze", "Date", "Net Wt"]);
        let binding = SchemaBinding::resolve(&h).unwrap();
        assert_eq!(binding.measures.len(), 1);
        assert_eq!(binding.measures[0].label, "Net Wt");
    }

    #[test]
    fn test_resolve_reports_all_missing_roles() {
        let h = headers(&["Sl No", "Customer"]);
        let err = SchemaBinding::resolve(&h).unwrap_err();
        let message = format!("{}", err);
        assert!(message.contains("classification group"));
        assert!(message.contains("rate freeze"));
        assert!(message.contains("date"));
        assert!(message.contains("measure columns"));
    }

    #[test]
    fn test_resolve_fails_without_measures() {
        let h = headers(&["Classification Group", "Rate Freeze", "Date"]);
        let err = SchemaBinding::resolve(&h).unwrap_err();
        assert!(format!("{}", err).contains("measure columns"));
    }
}
