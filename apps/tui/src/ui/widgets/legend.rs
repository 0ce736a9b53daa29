use crate::figure::Figure;
use crate::ui::widgets::trace_color;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

/// One horizontal row of swatches, centered above the chart.
pub fn legend_line(figure: &Figure) -> TextLine<'_> {
    let mut spans = Vec::with_capacity(figure.traces.len() * 2);
    for (index, styled) in figure.traces.iter().enumerate() {
        if index > 0 {
            spans.push(Span::raw("   "));
        }
        spans.push(Span::styled(
            "■ ",
            Style::default().fg(trace_color(&styled.color)),
        ));
        spans.push(Span::styled(
            styled.trace.name.as_str(),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ));
    }
    TextLine::from(spans)
}

pub fn render_legend(figure: &Figure, f: &mut Frame<'_>, area: Rect) {
    if !figure.options.show_legend {
        return;
    }

    let paragraph = Paragraph::new(legend_line(figure))
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}
