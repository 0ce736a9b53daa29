use crate::figure::{axis_angle, polar_points, Figure};
use crate::ui::widgets::trace_color;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Style};
use ratatui::symbols::Marker;
use ratatui::text::Line as TextLine;
use ratatui::widgets::canvas::{Canvas, Circle, Line as CanvasLine, Points};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

const GRID_STEPS: u8 = 5;
const LABEL_RADIUS: f64 = 1.1;
const BOUND: f64 = 1.45;

/// Largest area with a 2:1 cell ratio, so circles stay round in the terminal.
fn square_cells(area: Rect) -> Rect {
    let width = area.width.min(area.height.saturating_mul(2));
    let height = (width / 2).min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Where a category label starts so it reads away from the chart.
fn label_anchor(angle: f64, label_len: usize, units_per_cell: f64) -> (f64, f64) {
    let x = angle.cos() * LABEL_RADIUS;
    let y = angle.sin() * LABEL_RADIUS;
    let width = label_len as f64 * units_per_cell;

    let x = if angle.cos() < -0.2 {
        x - width
    } else if angle.cos().abs() <= 0.2 {
        x - width / 2.0
    } else {
        x
    };
    (x, y)
}

pub fn render_mini_radar(f: &mut Frame<'_>, area: Rect, animation: f64) {
    if area.width < 4 || area.height < 2 {
        return;
    }

    let square = square_cells(area);

    f.render_widget(
        Canvas::default()
            .marker(Marker::Braille)
            .paint(|ctx| {
                for i in 1..=3 {
                    ctx.draw(&Circle {
                        x: 0.0,
                        y: 0.0,
                        radius: f64::from(i) / 3.0 * 0.9,
                        color: Color::DarkGray,
                    });
                }

                let sweep_x = animation.cos() * 0.9;
                let sweep_y = animation.sin() * 0.9;
                ctx.draw(&CanvasLine {
                    x1: 0.0,
                    y1: 0.0,
                    x2: sweep_x,
                    y2: sweep_y,
                    color: Color::Cyan,
                });
            })
            .x_bounds([-1.0, 1.0])
            .y_bounds([-1.0, 1.0]),
        square,
    );
}

/// Draws every trace of `figure` as a closed polygon over a polar grid.
pub fn render_radar_chart(
    figure: &Figure,
    categories: &[String],
    f: &mut Frame<'_>,
    area: Rect,
    animation: f64,
) {
    let block = Block::default()
        .title(" Radar ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    f.render_widget(block, area);

    if inner.width < 12 || inner.height < 6 {
        return;
    }

    if figure.is_empty() {
        let paragraph = Paragraph::new("Select at least one entity to plot")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Gray));
        f.render_widget(paragraph, inner);
        return;
    }

    let square = square_cells(inner);
    let units_per_cell = 2.0 * BOUND / f64::from(square.width.max(1));
    let count = categories.len();
    let (low, high) = figure.options.radial_range;
    let polygons: Vec<(Color, Vec<(f64, f64)>)> = figure
        .traces
        .iter()
        .map(|styled| {
            (
                trace_color(&styled.color),
                polar_points(&styled.trace, figure.options.radial_range),
            )
        })
        .collect();

    f.render_widget(
        Canvas::default()
            .marker(Marker::Braille)
            .paint(|ctx| {
                for step in 1..=GRID_STEPS {
                    ctx.draw(&Circle {
                        x: 0.0,
                        y: 0.0,
                        radius: f64::from(step) / f64::from(GRID_STEPS),
                        color: Color::DarkGray,
                    });
                }

                for index in 0..count {
                    let angle = axis_angle(index, count);
                    ctx.draw(&CanvasLine {
                        x1: 0.0,
                        y1: 0.0,
                        x2: angle.cos(),
                        y2: angle.sin(),
                        color: Color::DarkGray,
                    });
                }

                let sweep = animation * 0.7;
                ctx.draw(&CanvasLine {
                    x1: 0.0,
                    y1: 0.0,
                    x2: sweep.cos(),
                    y2: sweep.sin(),
                    color: Color::Rgb(40, 60, 70),
                });

                ctx.layer();

                for (color, points) in &polygons {
                    for pair in points.windows(2) {
                        ctx.draw(&CanvasLine {
                            x1: pair[0].0,
                            y1: pair[0].1,
                            x2: pair[1].0,
                            y2: pair[1].1,
                            color: *color,
                        });
                    }
                    ctx.draw(&Points {
                        coords: points,
                        color: *color,
                    });
                }

                ctx.layer();

                // Radial tick labels sit between the first and last axis.
                let tick_angle = -axis_angle(1, count.max(1)) / 2.0;
                for step in 1..=GRID_STEPS {
                    let fraction = f64::from(step) / f64::from(GRID_STEPS);
                    let value = (high - low).mul_add(fraction, low);
                    ctx.print(
                        tick_angle.cos() * fraction,
                        tick_angle.sin() * fraction,
                        TextLine::styled(format!("{value:.0}"), Style::default().fg(Color::DarkGray)),
                    );
                }

                for (index, category) in categories.iter().enumerate() {
                    let angle = axis_angle(index, count);
                    let (x, y) = label_anchor(angle, category.chars().count(), units_per_cell);
                    ctx.print(
                        x,
                        y,
                        TextLine::styled(category.clone(), Style::default().fg(Color::Gray)),
                    );
                }
            })
            .x_bounds([-BOUND, BOUND])
            .y_bounds([-BOUND, BOUND]),
        square,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_cells_keeps_two_to_one_ratio() {
        let area = Rect::new(0, 0, 100, 20);
        let square = square_cells(area);
        assert_eq!(square.width, 40);
        assert_eq!(square.height, 20);
        assert_eq!(square.x, 30);

        let narrow = square_cells(Rect::new(0, 0, 20, 30));
        assert_eq!(narrow.width, 20);
        assert_eq!(narrow.height, 10);
        assert_eq!(narrow.y, 10);
    }

    #[test]
    fn test_label_anchor_shifts_left_side_labels() {
        let (east_x, _) = label_anchor(0.0, 10, 0.1);
        assert!((east_x - LABEL_RADIUS).abs() < 1e-9);

        let (west_x, _) = label_anchor(std::f64::consts::PI, 10, 0.1);
        assert!((west_x - (-LABEL_RADIUS - 1.0)).abs() < 1e-9);

        let (north_x, north_y) = label_anchor(std::f64::consts::FRAC_PI_2, 10, 0.1);
        assert!((north_x + 0.5).abs() < 1e-9);
        assert!((north_y - LABEL_RADIUS).abs() < 1e-9);
    }
}
