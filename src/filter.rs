//! Row filtering
//!
//! Keeps only genuine transactional rows: orders with an affirmative rate
//! freeze, minus the subtotal/footer rows the source report injects.

use crate::normalizer::OrderRecord;

/// Marker text the report writer drops into the date column of summary rows.
/// The scan targets the date column on purpose; that is where this export
/// places footer text.
pub const FOOTER_MARKERS: [&str; 4] = ["sub total", "total", "printed by", "subtotal"];

/// A row is retained iff its rate freeze is affirmative and its date cell
/// carries no footer marker.
pub fn is_transaction(record: &OrderRecord) -> bool {
    has_rate_freeze(record) && !is_footer(record)
}

/// Present, and after trimming and lowercasing neither blank nor "no".
/// Rows without an explicit decision are not finalized orders.
fn has_rate_freeze(record: &OrderRecord) -> bool {
    match &record.rate_freeze {
        None => false,
        Some(value) => {
            let value = value.trim().to_lowercase();
            !value.is_empty() && value != "no"
        }
    }
}

fn is_footer(record: &OrderRecord) -> bool {
    let date = record.date.to_lowercase();
    FOOTER_MARKERS.iter().any(|marker| date.contains(marker))
}
