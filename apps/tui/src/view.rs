//! The two dashboard views and what each one carries.

use crate::data::{Dataset, DatasetConfig};
use crate::domain::ViewMode;

pub const FALLBACK_COLOR: &str = "#17becf";

/// How a trace gets its line colour.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Palette {
    /// Fixed colour per entity name, with a fallback for unlisted names.
    Keyed {
        colors: Vec<(String, String)>,
        fallback: String,
    },
    /// Colour by position in the current selection.
    Cycle(Vec<String>),
}

impl Palette {
    pub fn color_for(&self, name: &str, position: usize) -> &str {
        match self {
            Self::Keyed { colors, fallback } => colors
                .iter()
                .find(|(key, _)| key == name)
                .map_or(fallback.as_str(), |(_, color)| color.as_str()),
            Self::Cycle(colors) => {
                if colors.is_empty() {
                    return FALLBACK_COLOR;
                }
                colors[position % colors.len()].as_str()
            }
        }
    }

    fn cluster() -> Self {
        let colors = [
            ("Corporate-Backed", "#1f77b4"),
            ("Public/Academic-Funded", "#ff7f0e"),
            ("Science/Tech Parks", "#2ca02c"),
            ("Private Co-Working", "#d62728"),
            ("Venture-Driven", "#9467bd"),
            ("Non-Profit Aggregators", "#8c564b"),
        ];
        Self::Keyed {
            colors: colors
                .iter()
                .map(|(name, color)| ((*name).to_string(), (*color).to_string()))
                .collect(),
            fallback: FALLBACK_COLOR.to_string(),
        }
    }

    fn incubator() -> Self {
        Self::Cycle(
            ["red", "blue", "green", "purple", "orange", "cyan"]
                .iter()
                .map(ToString::to_string)
                .collect(),
        )
    }
}

/// Sidebar text shown below the selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewInfo {
    pub summary: &'static str,
    pub link_title: &'static str,
    pub link_url: &'static str,
    pub link_note: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct View {
    pub mode: ViewMode,
    pub dataset: Dataset,
    pub palette: Palette,
    pub info: ViewInfo,
    default_count: usize,
}

impl View {
    /// Names selected when the view is first shown.
    pub fn default_selection(&self) -> Vec<String> {
        self.dataset
            .names()
            .into_iter()
            .take(self.default_count)
            .map(str::to_string)
            .collect()
    }

    pub fn categories(&self) -> &[String] {
        self.dataset.categories()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Dashboard {
    cluster: View,
    incubator: View,
}

impl Dashboard {
    pub fn new(config: DatasetConfig) -> Self {
        Self {
            cluster: View {
                mode: ViewMode::Cluster,
                dataset: config.clusters,
                palette: Palette::cluster(),
                info: ViewInfo {
                    summary: "High-level competitor groups were created based on secondary research, \
                              clustered using K-Means and Semantic analysis of group notes and \
                              competitor website material.",
                    link_title: "Competitor Clusters Document",
                    link_url: "https://docs.google.com/document/d/1-oHKxNdkiebwOsY7FGmFCQzZrLf8G1pDUBTlOwcM4cA/edit?usp=sharing",
                    link_note: "for details on the original 30 competitors included.",
                },
                default_count: 2,
            },
            incubator: View {
                mode: ViewMode::Incubator,
                dataset: config.incubators,
                palette: Palette::incubator(),
                info: ViewInfo {
                    summary: "Companies displayed are within the grouping of competitors similar \
                              to Bayer Co.Lab in existing value proposition.",
                    link_title: "Final Close Competition Report",
                    link_url: "https://docs.google.com/document/d/1Hq2kWrcM_S5EvwDvBpE26Sr_NizTrHhqAgf0tBfFOV4/edit?usp=sharing",
                    link_note: "for details on the companies displayed here and their likely \
                                strengths and weaknesses within the Wave 2 Value Proposition \
                                categories.",
                },
                default_count: 1,
            },
        }
    }

    pub const fn view(&self, mode: ViewMode) -> &View {
        match mode {
            ViewMode::Cluster => &self.cluster,
            ViewMode::Incubator => &self.incubator,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dashboard() -> Result<Dashboard, Box<dyn std::error::Error>> {
        Ok(Dashboard::new(DatasetConfig::builtin()?))
    }

    #[test]
    fn test_views_carry_their_own_categories() -> Result<(), Box<dyn std::error::Error>> {
        let dashboard = dashboard()?;
        assert_eq!(dashboard.view(ViewMode::Cluster).categories().len(), 6);
        assert_eq!(dashboard.view(ViewMode::Incubator).categories().len(), 8);
        assert_eq!(dashboard.view(ViewMode::Incubator).mode, ViewMode::Incubator);
        Ok(())
    }

    #[test]
    fn test_default_selections() -> Result<(), Box<dyn std::error::Error>> {
        let dashboard = dashboard()?;
        assert_eq!(
            dashboard.view(ViewMode::Cluster).default_selection(),
            vec!["Corporate-Backed", "Public/Academic-Funded"]
        );
        assert_eq!(
            dashboard.view(ViewMode::Incubator).default_selection(),
            vec!["Bayer Co.Lab"]
        );
        Ok(())
    }

    #[test]
    fn test_cluster_palette_falls_back_for_unlisted_names() {
        let palette = Palette::cluster();
        assert_eq!(palette.color_for("Venture-Driven", 5), "#9467bd");
        assert_eq!(palette.color_for("Bayer Co.Lab Berlin", 0), FALLBACK_COLOR);
    }

    #[test]
    fn test_incubator_palette_cycles_by_position() {
        let palette = Palette::incubator();
        assert_eq!(palette.color_for("anything", 0), "red");
        assert_eq!(palette.color_for("anything", 5), "cyan");
        assert_eq!(palette.color_for("anything", 6), "red");
        assert_eq!(Palette::Cycle(Vec::new()).color_for("x", 3), FALLBACK_COLOR);
    }
}
