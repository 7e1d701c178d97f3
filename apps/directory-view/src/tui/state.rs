use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use products_hr::{
    DirectoryView, FilterCriteria, LoadStatus, QueryField,
    render::{self, LineKind, RenderLine},
};

const SPINNER: [&str; 4] = ["|", "/", "-", "\\"];
const PAGE: u16 = 10;

/// Everything the browse screen needs between frames.
#[derive(Debug)]
pub struct BrowseState {
    pub view: DirectoryView,
    pub focus: QueryField,
    pub scroll: u16,
    pub should_quit: bool,
    ticks: usize,
    seen_revision: u64,
}

impl BrowseState {
    pub fn new(criteria: FilterCriteria) -> Self {
        let mut view = DirectoryView::new();
        view.set_criteria(criteria);
        let seen_revision = view.revision();
        Self {
            view,
            focus: QueryField::Name,
            scroll: 0,
            should_quit: false,
            ticks: 0,
            seen_revision,
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        match (key.code, key.modifiers) {
            (KeyCode::Esc, _) => self.should_quit = true,
            (KeyCode::Char('c'), m) if m.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true
            }
            (KeyCode::Tab, _) => self.focus = next_field(self.focus),
            (KeyCode::BackTab, _) => self.focus = previous_field(self.focus),
            (KeyCode::Enter, _) => self.view.commit(),
            (KeyCode::Backspace, _) => {
                let mut query = self.view.query(self.focus).to_string();
                query.pop();
                self.view.set_query(self.focus, query);
            }
            (KeyCode::Up, _) => self.scroll = self.scroll.saturating_sub(1),
            (KeyCode::Down, _) => self.scroll_down(1),
            (KeyCode::PageUp, _) => self.scroll = self.scroll.saturating_sub(PAGE),
            (KeyCode::PageDown, _) => self.scroll_down(PAGE),
            (KeyCode::Char(c), m) if !m.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {
                let mut query = self.view.query(self.focus).to_string();
                query.push(c);
                self.view.set_query(self.focus, query);
            }
            _ => {}
        }
        self.sync_scroll();
    }

    /// Lines shown in the results panel. The panel title already reads
    /// "Developers", so the title line is dropped.
    pub fn result_lines(&self) -> Vec<RenderLine> {
        let mut lines = render::lines(&self.view);
        if lines.first().is_some_and(|line| line.kind == LineKind::Title) {
            lines.remove(0);
        }
        lines
    }

    /// Scrolling stops with the last result line at the top of the panel.
    fn scroll_down(&mut self, by: u16) {
        let last = u16::try_from(self.result_lines().len().saturating_sub(1)).unwrap_or(u16::MAX);
        self.scroll = self.scroll.saturating_add(by).min(last);
    }

    /// A new filtered view starts at the top.
    fn sync_scroll(&mut self) {
        if self.view.revision() != self.seen_revision {
            self.seen_revision = self.view.revision();
            self.scroll = 0;
        }
    }

    pub fn tick(&mut self) {
        self.ticks = self.ticks.wrapping_add(1);
        self.sync_scroll();
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.view.status(), LoadStatus::Loading)
    }

    pub fn spinner_icon(&self) -> &'static str {
        SPINNER[self.ticks % SPINNER.len()]
    }
}

fn next_field(field: QueryField) -> QueryField {
    match field {
        QueryField::Name => QueryField::Designation,
        QueryField::Designation => QueryField::Skills,
        QueryField::Skills => QueryField::Name,
    }
}

fn previous_field(field: QueryField) -> QueryField {
    match field {
        QueryField::Name => QueryField::Skills,
        QueryField::Designation => QueryField::Name,
        QueryField::Skills => QueryField::Designation,
    }
}
