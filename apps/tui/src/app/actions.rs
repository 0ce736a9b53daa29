use crate::domain::ViewMode;
use crate::figure::Figure;
use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use std::path::{Path, PathBuf};

pub fn export_file_name(mode: ViewMode, timestamp: &str) -> String {
    format!("radar-{}-{timestamp}.json", mode.as_str())
}

/// Writes `figure` as Plotly JSON into `dir`, creating it when missing.
pub async fn export_figure(figure: &Figure, mode: ViewMode, dir: &Path) -> Result<PathBuf> {
    tokio::fs::create_dir_all(dir)
        .await
        .wrap_err_with(|| format!("failed to create export directory {}", dir.display()))?;

    let timestamp = chrono::Local::now().format("%Y%m%d-%H%M%S").to_string();
    let path = dir.join(export_file_name(mode, &timestamp));
    let json = figure.to_plotly_json()?;

    tokio::fs::write(&path, json)
        .await
        .wrap_err_with(|| format!("failed to write {}", path.display()))?;

    tracing::info!(path = %path.display(), traces = figure.traces.len(), "exported figure");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::DatasetConfig;
    use crate::figure::build_figure;
    use crate::view::Dashboard;

    #[test]
    fn test_export_file_name() {
        assert_eq!(
            export_file_name(ViewMode::Incubator, "20260101-120000"),
            "radar-incubator-20260101-120000.json"
        );
    }

    #[tokio::test]
    async fn test_export_writes_plotly_json() -> Result<(), Box<dyn std::error::Error>> {
        let dashboard = Dashboard::new(DatasetConfig::builtin()?);
        let figure = build_figure(dashboard.view(ViewMode::Cluster), &["Venture-Driven"])?;
        let dir = std::env::temp_dir().join(format!("competitor-radar-export-{}", std::process::id()));

        let path = export_figure(&figure, ViewMode::Cluster, &dir).await?;
        let written = tokio::fs::read_to_string(&path).await?;
        tokio::fs::remove_dir_all(&dir).await?;

        let json: serde_json::Value = serde_json::from_str(&written)?;
        assert_eq!(json["data"][0]["name"], "Venture-Driven");
        assert!(path
            .file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| name.starts_with("radar-cluster-")));
        Ok(())
    }
}
