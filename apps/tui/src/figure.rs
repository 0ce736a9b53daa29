//! Traces for the current selection plus the options they are drawn with.

use crate::error::RadarResult;
use crate::trace::{build_trace, select_entities, Trace};
use crate::view::View;
use serde::Serialize;
use std::f64::consts::TAU;

pub const LINE_WIDTH: f64 = 3.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Legend {
    pub orientation: &'static str,
    pub x: f64,
    pub y: f64,
    pub xanchor: &'static str,
    pub yanchor: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Margin {
    pub l: u16,
    pub r: u16,
    pub t: u16,
    pub b: u16,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartOptions {
    pub radial_range: (f64, f64),
    pub show_legend: bool,
    pub legend: Legend,
    pub width: u16,
    pub height: u16,
    pub margin: Margin,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            radial_range: (0.0, 10.0),
            show_legend: true,
            legend: Legend {
                orientation: "h",
                x: 0.5,
                y: 1.1,
                xanchor: "center",
                yanchor: "bottom",
            },
            width: 1200,
            height: 800,
            margin: Margin {
                l: 80,
                r: 80,
                t: 100,
                b: 80,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StyledTrace {
    pub trace: Trace,
    pub color: String,
    pub line_width: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Figure {
    pub traces: Vec<StyledTrace>,
    pub options: ChartOptions,
}

/// Builds one trace per requested entity known to `view`, in request order.
pub fn build_figure<S: AsRef<str>>(view: &View, requested: &[S]) -> RadarResult<Figure> {
    let known = view.dataset.name_set();
    let selected = select_entities(&known, requested);
    let categories = view.categories();

    let traces = selected
        .iter()
        .enumerate()
        .map(|(position, name)| {
            let scores = view.dataset.scores(name).unwrap_or_default();
            let trace = build_trace(name, scores, categories)?;
            Ok(StyledTrace {
                color: view.palette.color_for(name, position).to_string(),
                line_width: LINE_WIDTH,
                trace,
            })
        })
        .collect::<RadarResult<Vec<_>>>()?;

    tracing::debug!(
        mode = %view.mode,
        requested = requested.len(),
        traces = traces.len(),
        "built figure"
    );

    Ok(Figure {
        traces,
        options: ChartOptions::default(),
    })
}

/// Angle of axis `index` out of `count`, counter-clockwise from east.
pub fn axis_angle(index: usize, count: usize) -> f64 {
    if count == 0 {
        return 0.0;
    }
    TAU * index as f64 / count as f64
}

/// Maps a trace onto the unit disc, clamping values to `range`.
pub fn polar_points(trace: &Trace, range: (f64, f64)) -> Vec<(f64, f64)> {
    let count = trace.axis_count();
    let (low, high) = range;
    let span = high - low;

    trace
        .values
        .iter()
        .enumerate()
        .map(|(index, value)| {
            let radius = if span > 0.0 {
                ((value - low) / span).clamp(0.0, 1.0)
            } else {
                0.0
            };
            let angle = axis_angle(index, count);
            (radius * angle.cos(), radius * angle.sin())
        })
        .collect()
}

#[derive(Serialize)]
struct PlotlyLine<'a> {
    color: &'a str,
    width: f64,
}

#[derive(Serialize)]
struct PlotlyTrace<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    r: &'a [f64],
    theta: &'a [String],
    fill: &'static str,
    name: &'a str,
    line: PlotlyLine<'a>,
}

#[derive(Serialize)]
struct RadialAxis {
    visible: bool,
    range: [f64; 2],
}

#[derive(Serialize)]
struct Polar {
    radialaxis: RadialAxis,
}

#[derive(Serialize)]
struct PlotlyLayout {
    polar: Polar,
    showlegend: bool,
    legend: Legend,
    width: u16,
    height: u16,
    margin: Margin,
}

#[derive(Serialize)]
struct PlotlyFigure<'a> {
    data: Vec<PlotlyTrace<'a>>,
    layout: PlotlyLayout,
}

impl Figure {
    pub fn is_empty(&self) -> bool {
        self.traces.is_empty()
    }

    /// Plotly figure JSON (`scatterpolar` traces plus layout).
    pub fn to_plotly_json(&self) -> serde_json::Result<String> {
        let options = &self.options;
        let figure = PlotlyFigure {
            data: self
                .traces
                .iter()
                .map(|styled| PlotlyTrace {
                    kind: "scatterpolar",
                    r: &styled.trace.values,
                    theta: &styled.trace.labels,
                    fill: "toself",
                    name: &styled.trace.name,
                    line: PlotlyLine {
                        color: &styled.color,
                        width: styled.line_width,
                    },
                })
                .collect(),
            layout: PlotlyLayout {
                polar: Polar {
                    radialaxis: RadialAxis {
                        visible: true,
                        range: [options.radial_range.0, options.radial_range.1],
                    },
                },
                showlegend: options.show_legend,
                legend: options.legend,
                width: options.width,
                height: options.height,
                margin: options.margin,
            },
        };
        serde_json::to_string_pretty(&figure)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::DatasetConfig;
    use crate::domain::ViewMode;
    use crate::view::Dashboard;

    fn dashboard() -> Result<Dashboard, Box<dyn std::error::Error>> {
        Ok(Dashboard::new(DatasetConfig::builtin()?))
    }

    #[test]
    fn test_build_figure_keeps_request_order_and_drops_unknown(
    ) -> Result<(), Box<dyn std::error::Error>> {
        let dashboard = dashboard()?;
        let view = dashboard.view(ViewMode::Cluster);
        let figure = build_figure(view, &["Venture-Driven", "Nope", "Bayer Co.Lab Berlin"])?;

        let names: Vec<_> = figure.traces.iter().map(|t| t.trace.name.as_str()).collect();
        assert_eq!(names, vec!["Venture-Driven", "Bayer Co.Lab Berlin"]);
        assert_eq!(figure.traces[0].color, "#9467bd");
        assert_eq!(figure.traces[1].color, "#17becf");
        assert_eq!(
            figure.traces[1].trace.values,
            vec![10.0, 9.0, 8.0, 5.0, 8.0, 6.0, 10.0]
        );
        Ok(())
    }

    #[test]
    fn test_incubator_colors_follow_selection_position() -> Result<(), Box<dyn std::error::Error>> {
        let dashboard = dashboard()?;
        let view = dashboard.view(ViewMode::Incubator);
        let figure = build_figure(view, &["BioLabs", "J Labs"])?;

        assert_eq!(figure.traces[0].color, "red");
        assert_eq!(figure.traces[1].color, "blue");
        assert_eq!(figure.traces[0].trace.labels.len(), 9);
        Ok(())
    }

    #[test]
    fn test_repeated_name_gives_one_trace_per_request() -> Result<(), Box<dyn std::error::Error>> {
        let dashboard = dashboard()?;
        let view = dashboard.view(ViewMode::Incubator);
        let figure = build_figure(view, &["J Labs", "J Labs"])?;

        assert_eq!(figure.traces.len(), 2);
        assert_eq!(figure.traces[0].trace, figure.traces[1].trace);
        assert_eq!(figure.traces[0].color, "red");
        assert_eq!(figure.traces[1].color, "blue");
        Ok(())
    }

    #[test]
    fn test_empty_selection_gives_empty_figure() -> Result<(), Box<dyn std::error::Error>> {
        let dashboard = dashboard()?;
        let requested: [&str; 0] = [];
        let figure = build_figure(dashboard.view(ViewMode::Cluster), &requested)?;
        assert!(figure.is_empty());
        assert_eq!(figure.options, ChartOptions::default());
        Ok(())
    }

    #[test]
    fn test_plotly_json_shape() -> Result<(), Box<dyn std::error::Error>> {
        let dashboard = dashboard()?;
        let figure = build_figure(dashboard.view(ViewMode::Incubator), &["BioMedX"])?;
        let json: serde_json::Value = serde_json::from_str(&figure.to_plotly_json()?)?;

        let trace = &json["data"][0];
        assert_eq!(trace["type"], "scatterpolar");
        assert_eq!(trace["fill"], "toself");
        assert_eq!(trace["name"], "BioMedX");
        assert_eq!(trace["line"]["width"], 3.0);
        assert_eq!(trace["line"]["color"], "red");
        assert_eq!(trace["r"][0], trace["r"][8]);
        assert_eq!(trace["theta"][8], "Funding Support");

        let layout = &json["layout"];
        assert_eq!(layout["polar"]["radialaxis"]["range"][1], 10.0);
        assert_eq!(layout["legend"]["orientation"], "h");
        assert_eq!(layout["width"], 1200);
        assert_eq!(layout["margin"]["t"], 100);
        Ok(())
    }

    #[test]
    fn test_polar_points_close_and_clamp() -> Result<(), Box<dyn std::error::Error>> {
        let trace = build_trace("p", &[10.0, 5.0, 20.0, -1.0], &["N", "E", "S", "W"])?;
        let points = polar_points(&trace, (0.0, 10.0));

        assert_eq!(points.len(), 5);
        let (first, last) = (points[0], points[4]);
        assert!((first.0 - last.0).abs() < 1e-9 && (first.1 - last.1).abs() < 1e-9);
        assert!((first.0 - 1.0).abs() < 1e-9);
        assert!((points[1].1 - 0.5).abs() < 1e-9);
        assert!((points[2].0 + 1.0).abs() < 1e-9);
        assert!(points[3].0.abs() < 1e-9 && points[3].1.abs() < 1e-9);
        Ok(())
    }
}
