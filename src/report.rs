//! Report composition
//!
//! `generate_report` is the whole pipeline as a pure function: sheet in,
//! composed report out. The composer keeps only the four canonical
//! categories, orders them by the fixed priority list, and renames columns to
//! presentation labels.

use crate::aggregate::{aggregate, Aggregate};
use crate::category::{map_category, REPORT_ORDER};
use crate::error::Result;
use crate::filter::is_transaction;
use crate::normalizer::extract_records;
use crate::reader::Sheet;
use crate::schema::SchemaBinding;

/// Presentation labels, assigned positionally (Group, then one label per
/// resolved measure, in resolution order). Positional assignment matches the
/// source system's column renaming exactly.
pub const PRESENTATION_LABELS: [&str; 5] = ["Group", "Gross Wt", "Net Wt", "Fine Wt", "Metal Amount"];

#[derive(Debug, Clone, PartialEq)]
pub struct ReportRow {
    pub group: String,
    pub values: Vec<f64>,
}

/// The composed summary: presentation column labels plus ordered rows.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub columns: Vec<String>,
    pub rows: Vec<ReportRow>,
}

/// Run the full classification pipeline on one sheet.
///
/// Resolves the schema (failing fast on unresolved roles), normalizes and
/// filters rows, maps categories, aggregates, and composes the final report.
/// Pure: no IO, no shared state, same input always yields the same report.
pub fn generate_report(sheet: &Sheet) -> Result<Report> {
    let binding = SchemaBinding::resolve(&sheet.headers)?;

    let records = extract_records(sheet, &binding);
    let aggregates = aggregate(
        records
            .iter()
            .filter(|record| is_transaction(record))
            .map(|record| (map_category(record.group.as_deref()), record.measures.as_slice())),
        binding.measures.len(),
    );

    Ok(compose(aggregates, binding.measures.len()))
}

/// Restrict to canonical categories, order by [`REPORT_ORDER`], relabel.
/// Absent categories are omitted, never emitted as zero rows.
fn compose(aggregates: Vec<Aggregate>, measure_count: usize) -> Report {
    let columns: Vec<String> = PRESENTATION_LABELS[..=measure_count]
        .iter()
        .map(|label| label.to_string())
        .collect();

    let mut rows: Vec<(usize, ReportRow)> = aggregates
        .into_iter()
        .filter_map(|agg| {
            agg.category.priority().map(|priority| {
                (
                    priority,
                    ReportRow {
                        group: agg.category.to_string(),
                        values: agg.sums,
                    },
                )
            })
        })
        .collect();
    rows.sort_by_key(|(priority, _)| *priority);

    Report {
        columns,
        rows: rows.into_iter().map(|(_, row)| row).collect(),
    }
}

/// Render the report as an aligned text table for on-screen display.
pub fn format_table(report: &Report) -> String {
    let group_width = report
        .rows
        .iter()
        .map(|row| row.group.len())
        .chain(std::iter::once(report.columns[0].len()))
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    out.push_str(&format!("{:<width$}", report.columns[0], width = group_width));
    for label in &report.columns[1..] {
        out.push_str(&format!("  {:>12}", label));
    }
    out.push('\n');

    for row in &report.rows {
        out.push_str(&format!("{:<width$}", row.group, width = group_width));
        for value in &row.values {
            out.push_str(&format!("  {:>12.3}", value));
        }
        out.push('\n');
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::Category;
    use crate::reader::CellValue;

    fn sheet(headers: &[&str], rows: Vec<Vec<CellValue>>) -> Sheet {
        Sheet {
            headers: headers.iter().map(|s| s.to_string()).collect(),
            rows,
        }
    }

    fn text(s: &str) -> CellValue {
        CellValue::Text(s.into())
    }

    #[test]
    fn test_compose_orders_and_drops_non_canonical() {
        let aggregates = vec![
            Aggregate {
                category: Category::StandardBar,
                sums: vec![3.0],
            },
            Aggregate {
                category: Category::Other("Platinum".into()),
                sums: vec![99.0],
            },
            Aggregate {
                category: Category::GoldJewellery,
                sums: vec![1.0],
            },
            Aggregate {
                category: Category::Unknown,
                sums: vec![50.0],
            },
        ];

        let report = compose(aggregates, 1);
        let groups: Vec<&str> = report.rows.iter().map(|r| r.group.as_str()).collect();
        assert_eq!(groups, vec!["Gold Jewellery", "Standard Bar"]);
    }

    #[test]
    fn test_compose_positional_labels() {
        // Two resolved measures take the first two measure labels regardless
        // of which keywords they came from.
        let report = compose(Vec::new(), 2);
        assert_eq!(report.columns, vec!["Group", "Gross Wt", "Net Wt"]);
        assert!(report.rows.is_empty());
    }

    #[test]
    fn test_generate_report_end_to_end() {
        let sheet = sheet(
            &["Classification Group", "Rate Freeze", "Order Date", "Gross Wt"],
            vec![
                vec![
                    text("Gold Jewellery 22K"),
                    text("Manual"),
                    text("2024-01-01"),
                    text("10,000.5"),
                ],
                vec![text("Silver"), text("No"), text("2024-01-02"), text("5")],
                vec![text("Total"), text("Manual"), text("Sub Total"), text("99999")],
            ],
        );

        let report = generate_report(&sheet).unwrap();
        assert_eq!(report.columns, vec!["Group", "Gross Wt"]);
        assert_eq!(report.rows.len(), 1);
        assert_eq!(report.rows[0].group, "Gold Jewellery");
        assert_eq!(report.rows[0].values, vec![10000.5]);
    }

    #[test]
    fn test_generate_report_only_canonical_groups() {
        let sheet = sheet(
            &["Classification Group", "Rate Freeze", "Date", "Net Wt"],
            vec![
                vec![text("Platinum Ring"), text("Yes"), text("2024-01-01"), text("1")],
                vec![CellValue::Empty, text("Yes"), text("2024-01-01"), text("2")],
                vec![text("Coin Gold"), text("Yes"), text("2024-01-01"), text("3.5")],
            ],
        );

        let report = generate_report(&sheet).unwrap();
        let groups: Vec<&str> = report.rows.iter().map(|r| r.group.as_str()).collect();
        assert_eq!(groups, vec!["Standard Bar"]);
        assert_eq!(report.rows[0].values, vec![3.5]);
    }

    #[test]
    fn test_generate_report_is_idempotent() {
        let sheet = sheet(
            &["Classification Group", "Rate Freeze", "Date", "Fine Wt"],
            vec![
                vec![text("Silver"), text("Yes"), text("2024-03-01"), text("12.34567")],
                vec![text("Gold Bar"), text("Manual"), text("2024-03-02"), text("abc")],
            ],
        );

        let first = generate_report(&sheet).unwrap();
        let second = generate_report(&sheet).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.rows[0].group, "Silver");
        assert_eq!(first.rows[0].values, vec![12.346]);
        // Non-numeric cell contributes nothing but the row still aggregates.
        assert_eq!(first.rows[1].group, "Standard Bar");
        assert_eq!(first.rows[1].values, vec![0.0]);
    }

    #[test]
    fn test_generate_report_schema_failure() {
        let sheet = sheet(&["Sl No", "Customer"], Vec::new());
        let err = generate_report(&sheet).unwrap_err();
        assert!(format!("{}", err).contains("Schema validation failed"));
    }

    #[test]
    fn test_format_table_alignment() {
        let report = Report {
            columns: vec!["Group".into(), "Gross Wt".into()],
            rows: vec![ReportRow {
                group: "Gold Jewellery".into(),
                values: vec![10000.5],
            }],
        };

        let table = format_table(&report);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("Group"));
        assert!(lines[0].contains("Gross Wt"));
        assert!(lines[1].starts_with("Gold Jewellery"));
        assert!(lines[1].contains("10000.500"));
    }
}
