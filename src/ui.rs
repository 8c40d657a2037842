use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use easymotion_core::{Region, View, JUMP_MATCH_REGIONS};

use crate::app::App;

/// Map a highlight scope to a terminal colour by its first segment.
pub fn scope_color(scope: &str) -> Color {
    match scope.split('.').next().unwrap_or_default() {
        "string" => Color::Green,
        "comment" => Color::DarkGray,
        "keyword" | "storage" => Color::Magenta,
        "constant" => Color::Cyan,
        "entity" | "support" => Color::Yellow,
        "invalid" => Color::Red,
        _ => Color::LightYellow,
    }
}

/// Render text area and status bar
pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(frame.area());

    let lines = text_lines(app);
    frame.render_widget(Paragraph::new(lines), chunks[0]);

    let status = status_line(app);
    frame.render_widget(
        Paragraph::new(status).style(Style::default().bg(Color::DarkGray).fg(Color::White)),
        chunks[1],
    );
}

fn text_lines(app: &App) -> Vec<Line<'static>> {
    let view = &app.view;
    let visible = view.visible_region();
    let (first_line, _) = view.char_to_line_col(visible.begin());
    let height = view.viewport().height.unwrap_or_else(|| view.line_count());

    let highlight = view.highlight(JUMP_MATCH_REGIONS);
    let label_style = highlight
        .map(|h| {
            Style::default()
                .fg(scope_color(&h.scope))
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        })
        .unwrap_or_default();
    let labels: &[Region] = highlight.map(|h| h.regions.as_slice()).unwrap_or_default();

    let selection = view.primary_selection().unwrap_or_default();
    let cursor = view.cursor();

    let mut lines = Vec::new();
    for line_idx in (first_line..).take(height) {
        let Some(text) = view.line(line_idx) else {
            break;
        };
        let start = view.line_to_char(line_idx);
        let mut spans = Vec::new();
        let mut offset = start;

        for ch in text.chars() {
            let mut style = Style::default();
            if !selection.is_empty() && selection.contains(Region::new(offset, offset + 1)) {
                style = style.bg(Color::Blue);
            }
            if labels.iter().any(|r| r.begin() == offset) {
                style = style.patch(label_style);
            }
            if offset == cursor && !app.easy_motion.is_active() {
                style = style.add_modifier(Modifier::REVERSED);
            }
            spans.push(Span::styled(ch.to_string(), style));
            offset += 1;
        }

        // Caret past the end of the line
        if offset == cursor && !app.easy_motion.is_active() {
            spans.push(Span::styled(
                " ",
                Style::default().add_modifier(Modifier::REVERSED),
            ));
        }

        lines.push(Line::from(spans));
    }
    lines
}

fn status_line(app: &App) -> Line<'static> {
    let (line, column) = app.view.char_to_line_col(app.view.cursor());
    let message = app.status().unwrap_or(app.hint()).to_string();

    Line::from(vec![
        Span::styled(
            format!(" {} ", app.title),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!("{}:{} ", line + 1, column + 1)),
        Span::raw(message),
    ])
}
