use super::DatasetConfig;
use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use std::path::Path;

/// Loads the dataset tables once at start-up.
///
/// Without a path the built-in tables are used.
pub async fn load_dataset_config(path: Option<&Path>) -> Result<DatasetConfig> {
    let Some(path) = path else {
        tracing::debug!("using built-in dataset");
        return Ok(DatasetConfig::builtin()?);
    };

    tracing::info!(path = %path.display(), "loading dataset file");
    let source = tokio::fs::read_to_string(path)
        .await
        .wrap_err_with(|| format!("failed to read dataset file {}", path.display()))?;

    DatasetConfig::from_json(&source)
        .wrap_err_with(|| format!("invalid dataset file {}", path.display()))
}
