//! Schedule table view.
//!
//! Renders the loaded table with its caption, a header row carrying the sort
//! indicator, and the rows that pass the search term. On a narrow viewport
//! only column 0 and the current column are drawn, and a navigation line
//! offers the previous/next controls.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Constraint, Layout, Position, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell as TableCell, Paragraph, Row as TableRow, Table, TableState},
    Frame,
};
use tracing::{debug, trace};

use crate::api::types::{Cell, Table as ScheduleTable};
use crate::events::KeyContext;
use crate::schedule::ScheduleState;
use crate::ui::components::{highlight_text, SearchBar};
use crate::ui::theme::Theme;

/// Actions the schedule view asks the application to perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduleAction {
    /// Fetch the table again.
    Reload,
}

/// Screen position of one rendered header cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct HeaderHitbox {
    area: Rect,
    column: usize,
}

/// The schedule table view.
pub struct ScheduleView {
    /// Table data and view state.
    state: ScheduleState,
    /// Search bar focus.
    search: SearchBar,
    /// Row selection and scroll offset.
    table_state: TableState,
    /// Colors.
    theme: Theme,
    /// Widths below this are narrow.
    narrow_width: u16,
    /// Whether the last known viewport was narrow.
    narrow: bool,
    /// Header cell positions from the last render, for mouse hits.
    header_hitboxes: Vec<HeaderHitbox>,
}

impl ScheduleView {
    /// Create a view with an empty table.
    pub fn new(narrow_width: u16) -> Self {
        Self {
            state: ScheduleState::new(),
            search: SearchBar::new(),
            table_state: TableState::default(),
            theme: Theme::default(),
            narrow_width,
            narrow: false,
            header_hitboxes: Vec::new(),
        }
    }

    /// Get the view state.
    pub fn state(&self) -> &ScheduleState {
        &self.state
    }

    /// Get the view state mutably.
    pub fn state_mut(&mut self) -> &mut ScheduleState {
        &mut self.state
    }

    /// Get the search bar.
    pub fn search(&self) -> &SearchBar {
        &self.search
    }

    /// Replace the table and reset the row selection.
    pub fn set_table(&mut self, table: ScheduleTable) {
        self.state.set_table(table);
        self.table_state = TableState::default();
        self.clamp_selection();
    }

    /// Record the viewport width.
    pub fn set_viewport_width(&mut self, width: u16) {
        let narrow = width < self.narrow_width;
        if narrow != self.narrow {
            debug!(width, narrow, "Viewport class changed");
        }
        self.narrow = narrow;
    }

    /// Whether the viewport is narrow.
    pub fn is_narrow(&self) -> bool {
        self.narrow
    }

    /// Get the selected row index within the visible rows.
    pub fn selected_index(&self) -> Option<usize> {
        self.table_state.selected()
    }

    /// Key context for the footer hints.
    pub fn key_context(&self) -> KeyContext {
        if self.search.is_active() {
            KeyContext::Search
        } else if self.narrow {
            KeyContext::TableNarrow
        } else {
            KeyContext::Table
        }
    }

    /// Status text for the footer.
    pub fn status_text(&self) -> String {
        let visible = self.state.visible_rows().len();
        let total = self.state.rows().len();
        let mut status = format!("{}/{} rows", visible, total);

        if self.narrow && self.state.header().len() > 1 {
            let window = self.state.window();
            status.push_str(&format!(
                "  col {}/{}",
                window.current(),
                window.column_count() - 1
            ));
        }
        status
    }

    /// Area of a rendered header cell, if the column was drawn last frame.
    pub fn header_hitbox(&self, column: usize) -> Option<Rect> {
        self.header_hitboxes
            .iter()
            .find(|h| h.column == column)
            .map(|h| h.area)
    }

    /// Handle a key press.
    pub fn handle_input(&mut self, key: KeyEvent) -> Option<ScheduleAction> {
        if self.search.is_active() {
            if self.search.handle_input(key, &mut self.state) {
                self.clamp_selection();
            }
            return None;
        }

        match (key.code, key.modifiers) {
            (KeyCode::Char('/'), _) => {
                trace!("Search focused");
                self.search.activate();
            }
            (KeyCode::Char(c @ '1'..='9'), KeyModifiers::NONE) => {
                self.sort_by_column(c as usize - '1' as usize);
            }
            (KeyCode::Char('h'), KeyModifiers::NONE)
            | (KeyCode::Char('['), _)
            | (KeyCode::Left, _) => self.state.previous_column(),
            (KeyCode::Char('l'), KeyModifiers::NONE)
            | (KeyCode::Char(']'), _)
            | (KeyCode::Right, _) => self.state.next_column(),
            (KeyCode::Char('j'), KeyModifiers::NONE) | (KeyCode::Down, _) => self.select_next(),
            (KeyCode::Char('k'), KeyModifiers::NONE) | (KeyCode::Up, _) => self.select_previous(),
            (KeyCode::Char('g'), KeyModifiers::NONE) | (KeyCode::Home, _) => self.select_first(),
            (KeyCode::Char('G'), _) | (KeyCode::End, _) => self.select_last(),
            (KeyCode::Char('r'), KeyModifiers::NONE) => return Some(ScheduleAction::Reload),
            _ => {}
        }
        None
    }

    /// Handle a mouse event. A left click on a header cell sorts by it.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }

        let position = Position::new(mouse.column, mouse.row);
        if let Some(hit) = self
            .header_hitboxes
            .iter()
            .find(|h| h.area.contains(position))
            .copied()
        {
            debug!(column = hit.column, "Header clicked");
            self.sort_by_column(hit.column);
        }
    }

    /// Sort by `column` and move the selection back to the first row.
    fn sort_by_column(&mut self, column: usize) {
        if column >= self.state.header().len() {
            return;
        }
        self.state.activate_column(column);
        self.table_state = TableState::default();
        self.clamp_selection();
    }

    fn visible_len(&self) -> usize {
        self.state.visible_rows().len()
    }

    /// Keep the selection inside the visible rows.
    fn clamp_selection(&mut self) {
        let len = self.visible_len();
        match self.table_state.selected() {
            _ if len == 0 => self.table_state.select(None),
            Some(i) if i >= len => self.table_state.select(Some(len - 1)),
            None => self.table_state.select(Some(0)),
            _ => {}
        }
    }

    fn select_next(&mut self) {
        let len = self.visible_len();
        if len == 0 {
            return;
        }
        let next = self.table_state.selected().map_or(0, |i| (i + 1).min(len - 1));
        self.table_state.select(Some(next));
    }

    fn select_previous(&mut self) {
        if self.visible_len() == 0 {
            return;
        }
        let previous = self.table_state.selected().map_or(0, |i| i.saturating_sub(1));
        self.table_state.select(Some(previous));
    }

    fn select_first(&mut self) {
        if self.visible_len() > 0 {
            self.table_state.select(Some(0));
        }
    }

    fn select_last(&mut self) {
        let len = self.visible_len();
        if len > 0 {
            self.table_state.select(Some(len - 1));
        }
    }

    /// Render the view.
    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        self.set_viewport_width(area.width);

        let nav_height = if self.narrow { 1 } else { 0 };
        let [search_area, table_area, nav_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(nav_height),
        ])
        .areas(area);

        let visible = self.state.visible_rows().len();
        self.search
            .render(frame, search_area, self.state.search_term(), visible);
        self.render_table(frame, table_area);
        if self.narrow {
            self.render_column_nav(frame, nav_area);
        }
    }

    fn render_table(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.border))
            .title(Span::styled(
                format!(" {} ", self.state.caption()),
                self.theme.caption,
            ));
        let inner = block.inner(area);

        self.header_hitboxes.clear();
        let columns = self.state.display_columns(self.narrow);
        if columns.is_empty() {
            let empty = Paragraph::new("No columns to display")
                .style(Style::default().fg(Color::DarkGray))
                .block(block);
            frame.render_widget(empty, area);
            return;
        }

        let column_areas = Layout::horizontal(columns.iter().map(|_| Constraint::Fill(1)))
            .spacing(1)
            .split(inner);
        let widths: Vec<Constraint> = column_areas
            .iter()
            .map(|r| Constraint::Length(r.width))
            .collect();

        for (&column, column_area) in columns.iter().zip(column_areas.iter()) {
            self.header_hitboxes.push(HeaderHitbox {
                area: Rect::new(column_area.x, inner.y, column_area.width, 1),
                column,
            });
        }

        let header_cells = columns.iter().map(|&column| {
            let title = self
                .state
                .header()
                .get(column)
                .map(String::as_str)
                .unwrap_or_default();
            TableCell::from(format!("{}{}", title, self.state.sort().indicator(column)))
        });
        let header = TableRow::new(header_cells).style(self.theme.header);

        let term = self.state.search_term();
        let rows: Vec<TableRow> = self
            .state
            .visible_rows()
            .into_iter()
            .map(|row| {
                TableRow::new(columns.iter().map(|&column| {
                    let line = match row.get(column) {
                        Some(Cell::Text(text)) => highlight_text(text, term, &self.theme),
                        Some(cell) => Line::from(cell.to_string()),
                        None => Line::default(),
                    };
                    TableCell::from(line)
                }))
            })
            .collect();

        let table = Table::new(rows, widths)
            .header(header)
            .block(block)
            .column_spacing(1)
            .highlight_style(self.theme.selected_row);

        frame.render_stateful_widget(table, area, &mut self.table_state);
    }

    /// Render the previous/next controls shown on narrow viewports.
    fn render_column_nav(&self, frame: &mut Frame, area: Rect) {
        let window = self.state.window();
        let enabled = Style::default().fg(Color::Cyan);
        let disabled = Style::default().fg(Color::DarkGray);

        let current_title = self
            .state
            .header()
            .get(window.current())
            .cloned()
            .unwrap_or_default();

        let line = Line::from(vec![
            Span::styled(
                "◀ [h] previous",
                if window.has_previous() { enabled } else { disabled },
            ),
            Span::raw("   "),
            Span::styled(current_title, Style::default().fg(Color::Yellow)),
            Span::raw("   "),
            Span::styled(
                "[l] next ▶",
                if window.has_next() { enabled } else { disabled },
            ),
        ]);

        frame.render_widget(Paragraph::new(line), area);
    }
}
