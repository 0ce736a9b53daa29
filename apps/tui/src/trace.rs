//! Closed-polygon trace assembly for radar charts.

use crate::error::{RadarError, RadarResult};
use std::collections::HashSet;

/// One entity's scores ready for polar plotting.
///
/// Both sequences repeat their first element at the end so the polygon closes.
#[derive(Debug, Clone, PartialEq)]
pub struct Trace {
    pub name: String,
    pub values: Vec<f64>,
    pub labels: Vec<String>,
}

impl Trace {
    /// Number of distinct axes, without the closing point.
    pub fn axis_count(&self) -> usize {
        self.values.len().saturating_sub(1)
    }
}

pub fn build_trace<S: AsRef<str>>(
    entity_name: &str,
    scores: &[f64],
    categories: &[S],
) -> RadarResult<Trace> {
    let (Some(&first_score), Some(first_label)) = (scores.first(), categories.first()) else {
        return Err(RadarError::EmptyInput {
            entity: entity_name.to_string(),
        });
    };

    if scores.len() != categories.len() {
        return Err(RadarError::ShapeMismatch {
            entity: entity_name.to_string(),
            scores: scores.len(),
            categories: categories.len(),
        });
    }

    let mut values = Vec::with_capacity(scores.len() + 1);
    values.extend_from_slice(scores);
    values.push(first_score);

    let mut labels = Vec::with_capacity(categories.len() + 1);
    labels.extend(categories.iter().map(|category| category.as_ref().to_string()));
    labels.push(first_label.as_ref().to_string());

    Ok(Trace {
        name: entity_name.to_string(),
        values,
        labels,
    })
}

/// Keeps the requested names that are known, in request order.
///
/// Unknown names are dropped rather than rejected.
pub fn select_entities<S: AsRef<str>>(known: &HashSet<&str>, requested: &[S]) -> Vec<String> {
    requested
        .iter()
        .map(|name| name.as_ref())
        .filter(|name| {
            let keep = known.contains(name);
            if !keep {
                tracing::debug!(entity = name, "dropping unknown entity from selection");
            }
            keep
        })
        .map(str::to_string)
        .collect()
}
