use crate::config::{DATA_VAR, EXPORT_DIR_VAR};
use crate::domain::ViewMode;
use clap::{CommandFactory, Parser};

#[derive(Debug, Parser)]
#[command(
    name = "competitor-radar",
    version,
    about = "Incubator/Accelerator competitive analysis radar charts"
)]
pub struct CliArgs {
    /// Print the chart traces and exit
    #[arg(long)]
    pub headless: bool,

    /// Print headless output as Plotly figure JSON
    #[arg(long)]
    pub json: bool,

    /// View to show: cluster or incubator
    #[arg(long, value_parser = parse_mode, default_value = "cluster")]
    pub mode: ViewMode,

    /// Entity to plot (repeatable); defaults to the view's default selection
    #[arg(long = "select", value_name = "NAME")]
    pub select: Vec<String>,

    /// Dataset JSON replacing the built-in tables
    #[arg(long, value_name = "PATH")]
    pub data: Option<String>,

    /// Override figure export directory
    #[arg(long = "export-dir", value_name = "PATH")]
    pub export_dir: Option<String>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

fn parse_mode(value: &str) -> Result<ViewMode, String> {
    ViewMode::parse(value).ok_or_else(|| format!("unknown mode `{value}` (cluster, incubator)"))
}

impl CliArgs {
    pub fn apply_env_overrides(&self) {
        if let Some(data) = &self.data {
            std::env::set_var(DATA_VAR, data);
        }
        if let Some(dir) = &self.export_dir {
            std::env::set_var(EXPORT_DIR_VAR, dir);
        }
    }

    pub fn help_text() -> String {
        let mut command = Self::command();
        let mut buffer = Vec::new();
        command.write_help(&mut buffer).ok();
        String::from_utf8_lossy(&buffer).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() -> Result<(), clap::Error> {
        let args = CliArgs::try_parse_from(["competitor-radar"])?;
        assert!(!args.headless);
        assert_eq!(args.mode, ViewMode::Cluster);
        assert!(args.select.is_empty());
        assert_eq!(args.verbose, 0);
        Ok(())
    }

    #[test]
    fn test_headless_selection() -> Result<(), clap::Error> {
        let args = CliArgs::try_parse_from([
            "competitor-radar",
            "--headless",
            "--json",
            "--mode",
            "incubators",
            "--select",
            "J Labs",
            "--select",
            "BioLabs",
            "-vv",
        ])?;
        assert!(args.headless && args.json);
        assert_eq!(args.mode, ViewMode::Incubator);
        assert_eq!(args.select, vec!["J Labs", "BioLabs"]);
        assert_eq!(args.verbose, 2);
        Ok(())
    }

    #[test]
    fn test_rejects_unknown_mode() {
        assert!(CliArgs::try_parse_from(["competitor-radar", "--mode", "portfolio"]).is_err());
    }

    #[test]
    fn test_help_mentions_flags() {
        let help = CliArgs::help_text();
        assert!(help.contains("--headless"));
        assert!(help.contains("--select"));
    }
}
