use crate::app::App;
use crate::domain::ViewMode;
use crate::ui::widgets::legend::render_legend;
use crate::ui::widgets::popup::centered_rect;
use crate::ui::widgets::radar::{render_mini_radar, render_radar_chart};
use crate::ui::widgets::tables::scroll_offset;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Margin, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Tabs, Wrap};
use ratatui::Frame;

pub fn render_main(app: &App, f: &mut Frame<'_>) {
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Title area
            Constraint::Min(10),   // Sidebar and chart
            Constraint::Length(3), // Status area
            Constraint::Length(1), // Shortcuts hint
        ])
        .split(f.area().inner(Margin::new(1, 0)));

    render_title_section(app, f, main_layout[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(34), Constraint::Percentage(66)])
        .split(main_layout[1]);

    render_sidebar(app, f, body[0]);
    render_chart_section(app, f, body[1]);
    render_status_section(app, f, main_layout[2]);
    render_shortcuts(f, main_layout[3]);

    if app.show_help {
        render_help_popup(f);
    }
}

fn render_title_section(app: &App, f: &mut Frame<'_>, area: Rect) {
    let title_block = Block::default()
        .title("== Incubator/Accelerator Competitive Analysis ==")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = title_block.inner(area);
    f.render_widget(title_block, area);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(10), Constraint::Length(8)])
        .split(inner);

    let view = app.view();
    let title = Paragraph::new(Text::from(vec![
        TextLine::from(vec![
            Span::styled(
                "Competitor Radar ",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                view.mode.label(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        TextLine::from(Span::styled(
            format!(
                "{} categories · {} of {} plotted",
                view.categories().len(),
                app.selection().len(),
                view.dataset.entities().len()
            ),
            Style::default().fg(Color::Gray),
        )),
    ]));
    f.render_widget(title, chunks[0]);

    render_mini_radar(f, chunks[1], app.animation_counter);
}

fn render_sidebar(app: &App, f: &mut Frame<'_>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Min(6),
            Constraint::Length(10),
        ])
        .split(area);

    render_mode_selector(app, f, chunks[0]);
    render_entity_list(app, f, chunks[1]);
    render_info_panel(app, f, chunks[2]);
}

fn render_mode_selector(app: &App, f: &mut Frame<'_>, area: Rect) {
    let titles = ViewMode::ALL
        .iter()
        .map(|mode| TextLine::from(mode.short_label()))
        .collect::<Vec<_>>();

    let tabs = Tabs::new(titles)
        .select(app.mode.index())
        .block(
            Block::default()
                .title(" Select an analysis to view ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Green)),
        )
        .style(Style::default().fg(Color::Gray))
        .highlight_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .divider(Span::raw("|"));

    f.render_widget(tabs, area);
}

fn render_entity_list(app: &App, f: &mut Frame<'_>, area: Rect) {
    let view = app.view();
    let block = Block::default()
        .title(format!(" {} ", view.mode.selector_title()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let mut lines = Vec::new();
    if app.search_active || app.is_filtered() {
        let cursor = if app.search_active { "_" } else { "" };
        lines.push(TextLine::from(vec![
            Span::styled("Filter: ", Style::default().fg(Color::Gray)),
            Span::styled(
                format!("{}{cursor}", app.search_query),
                Style::default().fg(Color::Yellow),
            ),
        ]));
    }

    let names = app.visible_names();
    if names.is_empty() {
        lines.push(TextLine::from(Span::styled(
            "No matching entries",
            Style::default().fg(Color::Gray),
        )));
    }

    let max_rows = usize::from(inner.height).saturating_sub(lines.len()).max(1);
    let offset = scroll_offset(names.len(), max_rows, app.cursor());

    for (row, name) in names.iter().enumerate().skip(offset).take(max_rows) {
        let selected = app.is_selected(name);
        let marker = if selected { "[x] " } else { "[ ] " };
        let style = if row == app.cursor() {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else if selected {
            Style::default().fg(Color::White)
        } else {
            Style::default().fg(Color::Gray)
        };
        lines.push(TextLine::from(Span::styled(format!("{marker}{name}"), style)));
    }

    f.render_widget(Paragraph::new(Text::from(lines)), inner);
}

fn render_info_panel(app: &App, f: &mut Frame<'_>, area: Rect) {
    let info = &app.view().info;
    let text = Text::from(vec![
        TextLine::from(Span::styled(info.summary, Style::default().fg(Color::Gray))),
        TextLine::from(""),
        TextLine::from(vec![
            Span::raw("See our "),
            Span::styled(
                info.link_title,
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" "),
            Span::raw(info.link_note),
        ]),
        TextLine::from(Span::styled(
            info.link_url,
            Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::UNDERLINED),
        )),
    ]);

    let paragraph = Paragraph::new(text)
        .block(
            Block::default()
                .title(" More Information ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}

fn render_chart_section(app: &App, f: &mut Frame<'_>, area: Rect) {
    let figure = match app.figure() {
        Ok(figure) => figure,
        Err(e) => {
            let paragraph = Paragraph::new(format!("Cannot plot selection: {e}"))
                .block(
                    Block::default()
                        .title(" Radar ")
                        .borders(Borders::ALL)
                        .border_style(Style::default().fg(Color::Red)),
                )
                .style(Style::default().fg(Color::Red))
                .wrap(Wrap { trim: true });
            f.render_widget(paragraph, area);
            return;
        }
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(8)])
        .split(area);

    render_legend(&figure, f, chunks[0]);
    render_radar_chart(
        &figure,
        app.view().categories(),
        f,
        chunks[1],
        app.animation_counter,
    );
}

fn render_status_section(app: &App, f: &mut Frame<'_>, area: Rect) {
    let status_style = if app.status_message.starts_with("Error") {
        Style::default().fg(Color::Red)
    } else {
        Style::default().fg(Color::Yellow)
    };

    let paragraph = Paragraph::new(app.status_message.as_str())
        .style(status_style)
        .block(
            Block::default()
                .title(" Status ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
    f.render_widget(paragraph, area);
}

fn render_shortcuts(f: &mut Frame<'_>, area: Rect) {
    let hint = Paragraph::new(
        "Tab: view | ↑↓: move | Space: toggle | /: filter | e: export | F1: help | q: quit",
    )
    .style(Style::default().fg(Color::DarkGray))
    .alignment(Alignment::Center);
    f.render_widget(hint, area);
}

fn help_lines() -> Vec<TextLine<'static>> {
    let key_style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);

    let entries = [
        ("Tab / m", "Switch between the two analyses"),
        ("1 / 2", "Jump to competitor groups / Bayer's cluster"),
        ("↑ ↓ Home End", "Move through the list"),
        ("Space / Enter", "Add or remove the entry under the cursor"),
        ("a / c / d", "Select all / clear / restore defaults"),
        ("/", "Filter the list (Enter keeps, Esc clears)"),
        ("e", "Export the chart as Plotly JSON"),
        ("p", "Pause the radar sweep"),
        ("F1 / ?", "Toggle this help"),
        ("q / Esc", "Quit"),
    ];

    let mut lines = entries
        .iter()
        .map(|(key, description)| {
            TextLine::from(vec![
                Span::styled(format!("{key:<16}"), key_style),
                Span::raw(*description),
            ])
        })
        .collect::<Vec<_>>();

    lines.push(TextLine::from(""));
    lines.push(TextLine::from(vec![Span::styled(
        "CLI Options:",
        Style::default().add_modifier(Modifier::BOLD),
    )]));

    let help_text = crate::cli::CliArgs::help_text();
    for line in help_text.lines() {
        if line.starts_with("Usage") || line.starts_with("Options") || line.trim().is_empty() {
            continue;
        }
        lines.push(TextLine::from(line.to_string()));
    }

    lines
}

fn render_help_popup(f: &mut Frame<'_>) {
    let area = centered_rect(60, 80, f.area());
    let lines = help_lines();

    let paragraph = Paragraph::new(Text::from(lines))
        .block(
            Block::default()
                .title(" Help ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(Clear, area);
    f.render_widget(paragraph, area);
}
