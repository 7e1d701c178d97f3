//! Browse screen layout: title, three query inputs, results, status bar.

use products_hr::{
    LoadStatus, QueryField,
    render::{self, LineKind, RenderLine},
};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::{state::BrowseState, theme};

pub fn render(f: &mut Frame, state: &BrowseState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // name
            Constraint::Length(3), // designation
            Constraint::Length(3), // skills
            Constraint::Min(3),    // results
            Constraint::Length(1), // status bar
        ])
        .split(f.size());

    for (field, area) in QueryField::ALL.into_iter().zip(chunks.iter().copied()) {
        render_input(f, state, field, area);
    }
    render_results(f, state, chunks[3]);
    render_status_bar(f, state, chunks[4]);
}

fn render_input(f: &mut Frame, state: &BrowseState, field: QueryField, area: Rect) {
    let focused = state.focus == field;
    let border = if focused {
        theme::PANEL_BORDER_ACTIVE
    } else {
        theme::PANEL_BORDER
    };
    let query = state.view.query(field);
    let input = Paragraph::new(query).style(Style::default().fg(theme::TEXT)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border))
            .title(field.label()),
    );
    f.render_widget(input, area);

    if focused {
        let width = u16::try_from(query.chars().count()).unwrap_or(u16::MAX);
        let x = area
            .x
            .saturating_add(1)
            .saturating_add(width)
            .min(area.right().saturating_sub(2));
        f.set_cursor(x, area.y + 1);
    }
}

fn render_results(f: &mut Frame, state: &BrowseState, area: Rect) {
    let text: Vec<Line> = state.result_lines().iter().map(styled_line).collect();
    let results = Paragraph::new(text).scroll((state.scroll, 0)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::PANEL_BORDER))
            .title(render::TITLE),
    );
    f.render_widget(results, area);
}

fn styled_line(line: &RenderLine) -> Line<'static> {
    let style = match line.kind {
        LineKind::Title | LineKind::Employee => Style::default()
            .fg(theme::BLUE)
            .add_modifier(Modifier::BOLD),
        LineKind::Status => Style::default().fg(theme::RED),
        LineKind::NoResults => Style::default()
            .fg(theme::SUBTEXT0)
            .add_modifier(Modifier::ITALIC),
        LineKind::Section => Style::default().fg(theme::PEACH),
        LineKind::Project => Style::default().fg(theme::TEAL),
        LineKind::Field => Style::default().fg(theme::TEXT),
    };
    Line::from(vec![
        Span::raw(" ".repeat(line.depth * 2)),
        Span::styled(line.text.clone(), style),
    ])
}

fn render_status_bar(f: &mut Frame, state: &BrowseState, area: Rect) {
    let (label, style) = match state.view.status() {
        LoadStatus::Loading => (
            format!(" {} Loading directory ", state.spinner_icon()),
            Style::default().fg(theme::BASE).bg(theme::YELLOW),
        ),
        LoadStatus::Ready => (
            format!(
                " {} of {} developers ",
                state.view.visible_len(),
                state.view.directory().len()
            ),
            Style::default().fg(theme::BASE).bg(theme::GREEN),
        ),
        LoadStatus::Failed(_) => (
            " Directory unavailable ".to_string(),
            Style::default().fg(theme::BASE).bg(theme::RED),
        ),
    };
    let bar = Line::from(vec![
        Span::styled(label, style),
        Span::styled(
            " Tab/Shift-Tab field · Enter apply · ↑/↓ scroll · Esc quit",
            Style::default().fg(theme::SUBTEXT0).bg(theme::SURFACE0),
        ),
    ]);
    f.render_widget(Paragraph::new(bar), area);
}
