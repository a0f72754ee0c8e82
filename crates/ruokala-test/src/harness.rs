//! Headless harness for the restaurant board.
//!
//! Executes [`Command`]s against an in-memory [`Page`] instead of the DOM, so
//! full click-fetch-dialog flows run in plain `cargo test`.

use crate::fixture::FakeSource;
use futures::executor::block_on;
use ruokala_core::{
    load_board, load_menu, BoardMessage, BoardState, Command, Coordinates, DialogTarget,
    MenuKind, MenuRequest, RequestError, State,
};
use std::collections::VecDeque;

/// A rendered table row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRow {
    /// Restaurant id from the row's data attribute
    pub id: String,
    /// Restaurant name cell
    pub name: String,
    /// `highlight` class present
    pub highlighted: bool,
    /// Star icon filled
    pub favorite: bool,
}

/// What the page currently shows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Page {
    /// Table body rows in DOM order
    pub rows: Vec<PageRow>,
    /// Detail dialog markup
    pub detail_html: String,
    /// Detail dialog shown
    pub detail_open: bool,
    /// Error dialog markup
    pub error_html: String,
    /// Error dialog shown
    pub error_open: bool,
    /// How many times the table body was rebuilt
    pub table_renders: usize,
}

/// Test harness driving a [`BoardState`] against a [`FakeSource`].
pub struct Harness {
    board: BoardState,
    source: FakeSource,
    page: Page,
    deferred: bool,
    in_flight: VecDeque<MenuRequest>,
}

impl Harness {
    /// Load the restaurant list around `observer` and render the table.
    pub fn load(source: FakeSource, observer: Coordinates) -> Result<Self, RequestError> {
        let board = block_on(load_board(&source, observer))?;
        let mut harness = Self {
            board,
            source,
            page: Page::default(),
            deferred: false,
            in_flight: VecDeque::new(),
        };
        harness.execute(Command::RenderTable);
        Ok(harness)
    }

    /// Hold menu fetches until [`Harness::resolve`] is called.
    #[must_use]
    pub fn deferred(mut self) -> Self {
        self.deferred = true;
        self
    }

    // === Event Simulation ===

    /// Click a row (outside its star) by position in the table.
    pub fn click_row(&mut self, index: usize) -> &mut Self {
        let id = self.row_id(index);
        self.dispatch(BoardMessage::RowClicked(id))
    }

    /// Click a row's favorite star.
    pub fn click_favorite(&mut self, index: usize) -> &mut Self {
        let id = self.row_id(index);
        self.dispatch(BoardMessage::FavoriteClicked(id))
    }

    /// Select a company filter radio by value.
    pub fn select_filter(&mut self, value: &str) -> &mut Self {
        self.dispatch(BoardMessage::FilterSelected(value.to_string()))
    }

    /// Pick the daily or weekly radio in the detail dialog.
    pub fn select_menu_kind(&mut self, kind: MenuKind) -> &mut Self {
        self.dispatch(BoardMessage::MenuKindSelected(kind))
    }

    /// Close the topmost open dialog, the error dialog first.
    pub fn close_dialog(&mut self) -> &mut Self {
        if self.page.error_open {
            self.close_error()
        } else {
            self.close_detail()
        }
    }

    /// Close the detail dialog only.
    pub fn close_detail(&mut self) -> &mut Self {
        self.page.detail_open = false;
        self.dispatch(BoardMessage::DialogClosed(DialogTarget::Detail))
    }

    /// Close the error dialog only.
    pub fn close_error(&mut self) -> &mut Self {
        self.page.error_open = false;
        self.dispatch(BoardMessage::DialogClosed(DialogTarget::Error))
    }

    /// Complete the in-flight fetch at `position` (0 = oldest).
    pub fn resolve(&mut self, position: usize) -> &mut Self {
        if let Some(request) = self.in_flight.remove(position) {
            self.complete(&request);
        }
        self
    }

    /// Send a message to the board and run the resulting commands.
    pub fn dispatch(&mut self, msg: BoardMessage) -> &mut Self {
        let cmd = self.board.update(msg);
        self.execute(cmd);
        self
    }

    // === Queries ===

    /// The board under test.
    pub fn board(&self) -> &BoardState {
        &self.board
    }

    /// The data source under test.
    pub fn source(&self) -> &FakeSource {
        &self.source
    }

    /// The page as rendered.
    pub fn page(&self) -> &Page {
        &self.page
    }

    /// Row ids in table order.
    pub fn row_ids(&self) -> Vec<&str> {
        self.page.rows.iter().map(|row| row.id.as_str()).collect()
    }

    /// Ids of highlighted rows.
    pub fn highlighted_rows(&self) -> Vec<&str> {
        self.page
            .rows
            .iter()
            .filter(|row| row.highlighted)
            .map(|row| row.id.as_str())
            .collect()
    }

    /// Ids of favorite rows.
    pub fn favorite_rows(&self) -> Vec<&str> {
        self.page
            .rows
            .iter()
            .filter(|row| row.favorite)
            .map(|row| row.id.as_str())
            .collect()
    }

    /// Number of fetches started but not yet resolved.
    pub fn in_flight(&self) -> usize {
        self.in_flight.len()
    }

    // === Assertions ===

    /// Assert that the detail dialog is shown and contains `text`.
    ///
    /// # Panics
    ///
    /// Panics if the dialog is closed or lacks the text.
    pub fn assert_detail_contains(&self, text: &str) -> &Self {
        assert!(self.page.detail_open, "Expected detail dialog to be open");
        assert!(
            self.page.detail_html.contains(text),
            "Expected detail dialog to contain '{text}', got: {}",
            self.page.detail_html
        );
        self
    }

    /// Assert that the error dialog is shown and contains `text`.
    ///
    /// # Panics
    ///
    /// Panics if the dialog is closed or lacks the text.
    pub fn assert_error_contains(&self, text: &str) -> &Self {
        assert!(self.page.error_open, "Expected error dialog to be open");
        assert!(
            self.page.error_html.contains(text),
            "Expected error dialog to contain '{text}', got: {}",
            self.page.error_html
        );
        self
    }

    /// Assert that the detail dialog shows `kind`'s radio as checked.
    ///
    /// # Panics
    ///
    /// Panics if another radio is checked.
    pub fn assert_menu_kind_checked(&self, kind: MenuKind) -> &Self {
        let checked = format!("value=\"{}\" checked", kind.radio_value());
        assert!(
            self.page.detail_html.contains(&checked),
            "Expected {kind} radio to be checked, got: {}",
            self.page.detail_html
        );
        self
    }

    /// Assert that no dialog is shown.
    ///
    /// # Panics
    ///
    /// Panics if either dialog is open.
    pub fn assert_no_dialog(&self) -> &Self {
        assert!(!self.page.detail_open, "Expected detail dialog to be closed");
        assert!(!self.page.error_open, "Expected error dialog to be closed");
        self
    }

    // === Internals ===

    fn row_id(&self, index: usize) -> String {
        self.page
            .rows
            .get(index)
            .map(|row| row.id.clone())
            .unwrap_or_else(|| panic!("no row at index {index}"))
    }

    fn complete(&mut self, request: &MenuRequest) {
        let result = block_on(load_menu(&self.source, request));
        self.dispatch(BoardMessage::MenuLoaded {
            token: request.token,
            result,
        });
    }

    fn execute(&mut self, cmd: Command) {
        for leaf in cmd.flatten() {
            match leaf {
                Command::None | Command::Batch(_) => {}
                Command::RenderTable => self.render_table(),
                Command::SyncRows => self.sync_rows(),
                Command::FetchMenu(request) => {
                    if self.deferred {
                        self.in_flight.push_back(request);
                    } else {
                        self.complete(&request);
                    }
                }
                Command::ShowDialog { target, html } => match target {
                    DialogTarget::Detail => {
                        self.page.detail_html = html;
                        self.page.detail_open = true;
                    }
                    DialogTarget::Error => {
                        self.page.error_html = html;
                        self.page.error_open = true;
                    }
                },
            }
        }
    }

    fn render_table(&mut self) {
        self.page.rows = self
            .board
            .table_rows()
            .into_iter()
            .map(|row| PageRow {
                id: row.restaurant.id.clone(),
                name: row.restaurant.name.clone(),
                highlighted: row.state.highlighted,
                favorite: row.state.favorite,
            })
            .collect();
        self.page.table_renders += 1;
    }

    fn sync_rows(&mut self) {
        for row in &mut self.page.rows {
            let state = self.board.row_state(&row.id);
            row.highlighted = state.highlighted;
            row.favorite = state.favorite;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixture::restaurant;

    fn harness() -> Harness {
        let source = FakeSource::new(vec![
            restaurant("a", "Alfa", "Sodexo", 3.0, 0.0),
            restaurant("b", "Beta", "Compass Group", 1.0, 0.0),
        ]);
        Harness::load(source, Coordinates::new(0.0, 0.0)).unwrap()
    }

    #[test]
    fn test_load_renders_ranked_rows() {
        let h = harness();
        assert_eq!(h.row_ids(), ["b", "a"]);
        assert_eq!(h.page().table_renders, 1);
        h.assert_no_dialog();
    }

    #[test]
    fn test_click_row_opens_detail() {
        let mut h = harness();
        h.click_row(1);
        h.assert_detail_contains("Alfa");
        assert_eq!(h.highlighted_rows(), ["a"]);
    }

    #[test]
    fn test_close_dialog_clears_highlight() {
        let mut h = harness();
        h.click_row(0).close_dialog();
        h.assert_no_dialog();
        assert!(h.highlighted_rows().is_empty());
    }

    #[test]
    fn test_close_dialog_closes_error_first() {
        let source = FakeSource::new(vec![restaurant("a", "Alfa", "Sodexo", 3.0, 0.0)])
            .with_weekly_failure(
                "a",
                RequestError::Transport {
                    url: "u".to_string(),
                    message: "boom".to_string(),
                },
            );
        let mut h = Harness::load(source, Coordinates::new(0.0, 0.0)).unwrap();
        h.click_row(0).select_menu_kind(MenuKind::Weekly);
        assert!(h.page().error_open);

        h.close_dialog();
        assert!(!h.page().error_open);
        h.assert_detail_contains("Alfa");
    }

    #[test]
    fn test_deferred_fetches_queue() {
        let mut h = harness().deferred();
        h.click_row(0).click_row(1);
        assert_eq!(h.in_flight(), 2);
        h.resolve(0);
        h.assert_no_dialog();
        h.resolve(0);
        h.assert_detail_contains("Alfa");
    }
}
