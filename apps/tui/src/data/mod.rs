//! Scored entities and the categories they are scored on.

pub mod builtin;
pub mod loader;

pub use loader::load_dataset_config;

use crate::error::{RadarError, RadarResult};
use crate::trace::{build_trace, Trace};
use serde::Deserialize;
use std::collections::{BTreeMap, HashSet};

/// Scores as they are written in configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ScoreInput {
    /// Category name to score.
    Named(BTreeMap<String, f64>),
    /// Scores in category order.
    Positional(Vec<f64>),
}

impl ScoreInput {
    /// Resolves the scores into category order.
    pub fn resolve(&self, entity: &str, categories: &[String]) -> RadarResult<Vec<f64>> {
        let scores = match self {
            Self::Positional(scores) => {
                if scores.len() != categories.len() {
                    return Err(RadarError::ShapeMismatch {
                        entity: entity.to_string(),
                        scores: scores.len(),
                        categories: categories.len(),
                    });
                }
                scores.clone()
            }
            Self::Named(named) => {
                let scores = categories
                    .iter()
                    .map(|category| {
                        named
                            .get(category)
                            .copied()
                            .ok_or_else(|| RadarError::MissingScore {
                                entity: entity.to_string(),
                                category: category.clone(),
                            })
                    })
                    .collect::<RadarResult<Vec<_>>>()?;
                if named.len() != categories.len() {
                    return Err(RadarError::ShapeMismatch {
                        entity: entity.to_string(),
                        scores: named.len(),
                        categories: categories.len(),
                    });
                }
                scores
            }
        };

        if let Some(index) = scores.iter().position(|score| !score.is_finite()) {
            return Err(RadarError::NonFiniteScore {
                entity: entity.to_string(),
                category: categories[index].clone(),
            });
        }

        Ok(scores)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Entity {
    pub name: String,
    pub scores: Vec<f64>,
}

/// Ordered categories plus entities scored on all of them, in the same order.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    categories: Vec<String>,
    entities: Vec<Entity>,
}

impl Dataset {
    pub fn new<I, N>(categories: Vec<String>, entities: I) -> RadarResult<Self>
    where
        I: IntoIterator<Item = (N, ScoreInput)>,
        N: Into<String>,
    {
        if categories.is_empty() {
            return Err(RadarError::NoCategories);
        }

        let mut seen = HashSet::new();
        let mut resolved = Vec::new();
        for (name, input) in entities {
            let name = name.into();
            if !seen.insert(name.clone()) {
                return Err(RadarError::DuplicateEntity(name));
            }
            let scores = input.resolve(&name, &categories)?;
            resolved.push(Entity { name, scores });
        }

        Ok(Self {
            categories,
            entities: resolved,
        })
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    pub fn names(&self) -> Vec<&str> {
        self.entities.iter().map(|entity| entity.name.as_str()).collect()
    }

    pub fn name_set(&self) -> HashSet<&str> {
        self.entities.iter().map(|entity| entity.name.as_str()).collect()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entities.iter().any(|entity| entity.name == name)
    }

    pub fn scores(&self, name: &str) -> Option<&[f64]> {
        self.entities
            .iter()
            .find(|entity| entity.name == name)
            .map(|entity| entity.scores.as_slice())
    }

    /// Builds the closed trace for `name`, or `None` if it is not in the dataset.
    pub fn trace(&self, name: &str) -> Option<RadarResult<Trace>> {
        self.scores(name)
            .map(|scores| build_trace(name, scores, &self.categories))
    }
}

/// Both lookup tables the dashboard can show.
#[derive(Debug, Clone, PartialEq)]
pub struct DatasetConfig {
    pub clusters: Dataset,
    pub incubators: Dataset,
}

#[derive(Debug, Deserialize)]
struct RawTable {
    categories: Vec<String>,
    entities: Vec<RawEntity>,
}

#[derive(Debug, Deserialize)]
struct RawEntity {
    name: String,
    scores: ScoreInput,
}

#[derive(Debug, Deserialize)]
struct RawConfig {
    clusters: RawTable,
    incubators: RawTable,
}

impl RawTable {
    fn into_dataset(self) -> RadarResult<Dataset> {
        Dataset::new(
            self.categories,
            self.entities
                .into_iter()
                .map(|entity| (entity.name, entity.scores)),
        )
    }
}

impl DatasetConfig {
    pub fn builtin() -> RadarResult<Self> {
        Ok(Self {
            clusters: builtin::clusters()?,
            incubators: builtin::incubators()?,
        })
    }

    pub fn from_json(source: &str) -> color_eyre::Result<Self> {
        let raw: RawConfig = serde_json::from_str(source)?;
        Ok(Self {
            clusters: raw.clusters.into_dataset()?,
            incubators: raw.incubators.into_dataset()?,
        })
    }
}
