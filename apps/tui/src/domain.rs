#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewMode {
    Cluster,
    Incubator,
}

impl ViewMode {
    pub const ALL: [Self; 2] = [Self::Cluster, Self::Incubator];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Cluster => "cluster",
            Self::Incubator => "incubator",
        }
    }

    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::Cluster),
            1 => Some(Self::Incubator),
            _ => None,
        }
    }

    pub const fn index(self) -> usize {
        match self {
            Self::Cluster => 0,
            Self::Incubator => 1,
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "cluster" | "clusters" => Some(Self::Cluster),
            "incubator" | "incubators" => Some(Self::Incubator),
            _ => None,
        }
    }

    /// Text of the view selector option.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Cluster => "View comparison of higher-level competitor groups",
            Self::Incubator => "Compare Bayer within its cluster of similar competitors",
        }
    }

    pub const fn short_label(self) -> &'static str {
        match self {
            Self::Cluster => "Competitor groups",
            Self::Incubator => "Bayer's cluster",
        }
    }

    pub const fn selector_title(self) -> &'static str {
        match self {
            Self::Cluster => "Select clusters to compare",
            Self::Incubator => "Select incubators to display",
        }
    }

    pub const fn next(self) -> Self {
        match self {
            Self::Cluster => Self::Incubator,
            Self::Incubator => Self::Cluster,
        }
    }
}

impl std::fmt::Display for ViewMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
