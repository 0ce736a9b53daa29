//! Scores compiled into the binary.

use super::{Dataset, ScoreInput};
use crate::error::RadarResult;
use std::collections::BTreeMap;

pub const CLUSTER_CATEGORIES: [&str; 6] = [
    "Physical and Admin",
    "Mentoring",
    "Global Reach",
    "Funding",
    "Expertise",
    "Local",
];

// Scores follow CLUSTER_CATEGORIES.
const CLUSTERS: [(&str, [f64; 6]); 7] = [
    ("Corporate-Backed", [8.0, 10.0, 9.0, 4.0, 8.0, 4.0]),
    ("Public/Academic-Funded", [7.0, 8.0, 4.0, 6.0, 9.0, 9.0]),
    ("Science/Tech Parks", [10.0, 6.0, 7.0, 9.0, 9.0, 10.0]),
    ("Private Co-Working", [9.0, 6.0, 7.0, 6.0, 6.0, 8.0]),
    ("Venture-Driven", [6.0, 9.0, 9.0, 10.0, 8.0, 6.0]),
    ("Non-Profit Aggregators", [2.0, 10.0, 10.0, 5.0, 8.0, 6.0]),
    ("Bayer Co.Lab Berlin", [10.0, 9.0, 8.0, 5.0, 8.0, 6.0]),
];

pub const INCUBATOR_CATEGORIES: [&str; 8] = [
    "Funding Support",
    "Scientific Expertise",
    "Commercial & Regulatory",
    "Scaling & Business Mentorship",
    "Biopharma Partnerships",
    "Lab Space & Administration",
    "Global Network Development",
    "Local Network Development",
];

const INCUBATORS: [(&str, [f64; 8]); 6] = [
    ("Bayer Co.Lab", [5.0, 9.0, 9.0, 9.0, 9.0, 10.0, 9.0, 6.0]),
    ("J Labs", [5.0, 8.0, 8.0, 7.0, 9.0, 10.0, 10.0, 7.0]),
    ("BioMedX", [8.0, 10.0, 4.0, 3.0, 8.0, 9.0, 6.0, 8.0]),
    ("BaseLaunch", [9.0, 9.0, 8.0, 8.0, 10.0, 7.0, 7.0, 9.0]),
    ("BioLabs", [3.0, 6.0, 5.0, 5.0, 6.0, 10.0, 8.0, 9.0]),
    ("BioInnovation Inst.", [10.0, 7.0, 8.0, 8.0, 7.0, 9.0, 6.0, 8.0]),
];

fn owned(categories: &[&str]) -> Vec<String> {
    categories.iter().map(ToString::to_string).collect()
}

/// Cluster scores are keyed by category, as the groups were rated per attribute.
pub fn clusters() -> RadarResult<Dataset> {
    let entities = CLUSTERS.iter().map(|(name, scores)| {
        let named = CLUSTER_CATEGORIES
            .iter()
            .zip(scores)
            .map(|(category, score)| ((*category).to_string(), *score))
            .collect::<BTreeMap<_, _>>();
        (*name, ScoreInput::Named(named))
    });
    Dataset::new(owned(&CLUSTER_CATEGORIES), entities)
}

pub fn incubators() -> RadarResult<Dataset> {
    let entities = INCUBATORS
        .iter()
        .map(|(name, scores)| (*name, ScoreInput::Positional(scores.to_vec())));
    Dataset::new(owned(&INCUBATOR_CATEGORIES), entities)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_tables_are_valid() -> Result<(), Box<dyn std::error::Error>> {
        let clusters = clusters()?;
        let incubators = incubators()?;

        assert_eq!(clusters.categories().len(), 6);
        assert_eq!(clusters.entities().len(), 7);
        assert_eq!(incubators.categories().len(), 8);
        assert_eq!(incubators.entities().len(), 6);
        Ok(())
    }

    #[test]
    fn test_bayer_berlin_trace() -> Result<(), Box<dyn std::error::Error>> {
        let clusters = clusters()?;
        let trace = clusters
            .trace("Bayer Co.Lab Berlin")
            .ok_or("Bayer Co.Lab Berlin missing")??;

        assert_eq!(trace.values, vec![10.0, 9.0, 8.0, 5.0, 8.0, 6.0, 10.0]);
        assert_eq!(trace.labels.first().map(String::as_str), Some("Physical and Admin"));
        assert_eq!(trace.labels.last().map(String::as_str), Some("Physical and Admin"));
        Ok(())
    }

    #[test]
    fn test_entity_order_is_preserved() -> Result<(), Box<dyn std::error::Error>> {
        let incubators = incubators()?;
        assert_eq!(
            incubators.names(),
            vec![
                "Bayer Co.Lab",
                "J Labs",
                "BioMedX",
                "BaseLaunch",
                "BioLabs",
                "BioInnovation Inst."
            ]
        );
        Ok(())
    }
}
