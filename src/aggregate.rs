//! Grouped aggregation
//!
//! Sums each measure per category with missing-aware accumulation: missing
//! values are excluded from the sum, and a group with no numeric values for a
//! measure sums to zero.

use crate::category::Category;
use std::collections::HashMap;

/// Per-category measure sums, rounded to 3 decimal places.
#[derive(Debug, Clone, PartialEq)]
pub struct Aggregate {
    pub category: Category,
    pub sums: Vec<f64>,
}

/// Round to 3 decimal places, half away from zero (`f64::round` semantics).
pub fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

/// Group `(category, measures)` pairs and sum each measure column.
///
/// Groups keep first-seen order; the composer imposes the final order.
pub fn aggregate<'a, I>(items: I, measure_count: usize) -> Vec<Aggregate>
where
    I: IntoIterator<Item = (Category, &'a [Option<f64>])>,
{
    let mut order: Vec<Category> = Vec::new();
    let mut buckets: HashMap<Category, Vec<f64>> = HashMap::new();

    for (category, measures) in items {
        let sums = buckets.entry(category.clone()).or_insert_with(|| {
            order.push(category);
            vec![0.0; measure_count]
        });
        for (sum, value) in sums.iter_mut().zip(measures) {
            if let Some(value) = value {
                *sum += *value;
            }
        }
    }

    order
        .into_iter()
        .map(|category| {
            let sums = buckets
                .remove(&category)
                .unwrap_or_else(|| vec![0.0; measure_count])
                .into_iter()
                .map(round3)
                .collect();
            Aggregate { category, sums }
        })
        .collect()
}
