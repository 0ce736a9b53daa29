use thiserror::Error;

/// Shape and type failures raised while assembling radar data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RadarError {
    #[error("entity `{entity}` has {scores} scores for {categories} categories")]
    ShapeMismatch {
        entity: String,
        scores: usize,
        categories: usize,
    },

    #[error("entity `{entity}` has no categories or scores to plot")]
    EmptyInput { entity: String },

    #[error("dataset defines no categories")]
    NoCategories,

    #[error("entity `{entity}` has no score for category `{category}`")]
    MissingScore { entity: String, category: String },

    #[error("entity `{entity}` has a non-finite score for category `{category}`")]
    NonFiniteScore { entity: String, category: String },

    #[error("entity `{0}` is defined more than once")]
    DuplicateEntity(String),
}

pub type RadarResult<T> = Result<T, RadarError>;
