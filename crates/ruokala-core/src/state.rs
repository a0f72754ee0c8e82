//! UI state for the restaurant board.
//!
//! This module follows the Elm Architecture: `State + Message → Command`.
//! [`BoardState`] holds everything the page shows; the browser runtime feeds
//! it [`BoardMessage`]s and executes the [`Command`]s it returns.
//!
//! # Examples
//!
//! ```
//! use ruokala_core::{BoardMessage, BoardState, Command, Location, Restaurant, State};
//!
//! let restaurant = Restaurant {
//!     id: "r1".into(),
//!     company_id: None,
//!     name: "Myyrmäki".into(),
//!     address: "Leiritie 1".into(),
//!     postal_code: "01600".into(),
//!     city: "Vantaa".into(),
//!     phone: String::new(),
//!     company: "Sodexo".into(),
//!     location: Location::new(60.26, 24.84),
//! };
//!
//! let mut board = BoardState::new(vec![restaurant]);
//! let cmd = board.update(BoardMessage::RowClicked("r1".into()));
//! assert_eq!(board.highlighted(), Some("r1"));
//! assert!(cmd.fetch_requests().next().is_some());
//! ```

use crate::error::RequestError;
use crate::filter::CompanyFilter;
use crate::model::{Menu, MenuKind, Restaurant};
use crate::view;

/// Application state trait.
///
/// Implements the Elm Architecture: State + Message → (State, Command)
pub trait State {
    /// Message type for state updates
    type Message;

    /// Update state in response to a message.
    ///
    /// Returns a command describing the side effects the runtime must perform.
    fn update(&mut self, msg: Self::Message) -> Command;
}

/// Which dialog element a command targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogTarget {
    /// Restaurant details and menu
    Detail,
    /// Error message
    Error,
}

/// A menu fetch the runtime should perform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuRequest {
    /// Monotonic token; only the latest one is applied
    pub token: u64,
    /// Restaurant to fetch for
    pub restaurant_id: String,
    /// Daily or weekly
    pub kind: MenuKind,
}

/// Side effects requested by a state update.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Command {
    /// No command
    #[default]
    None,
    /// Execute multiple commands in order
    Batch(Vec<Command>),
    /// Rebuild the table body from [`BoardState::table_rows`]
    RenderTable,
    /// Refresh highlight and favorite classes on existing rows
    SyncRows,
    /// Fetch a menu and answer with [`BoardMessage::MenuLoaded`]
    FetchMenu(MenuRequest),
    /// Fill a dialog with markup and show it
    ShowDialog {
        /// Dialog to populate
        target: DialogTarget,
        /// Body markup, already escaped
        html: String,
    },
}

impl Command {
    /// Create a batch of commands.
    pub fn batch(commands: impl IntoIterator<Item = Self>) -> Self {
        Self::Batch(commands.into_iter().collect())
    }

    /// Check if this is the none command.
    #[must_use]
    pub const fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    /// Flatten batches into a list of leaf commands.
    #[must_use]
    pub fn flatten(self) -> Vec<Self> {
        match self {
            Self::None => Vec::new(),
            Self::Batch(cmds) => cmds.into_iter().flat_map(Self::flatten).collect(),
            other => vec![other],
        }
    }

    /// Every fetch this command asks for.
    pub fn fetch_requests(&self) -> Box<dyn Iterator<Item = &MenuRequest> + '_> {
        match self {
            Self::FetchMenu(request) => Box::new(std::iter::once(request)),
            Self::Batch(cmds) => Box::new(cmds.iter().flat_map(Self::fetch_requests)),
            _ => Box::new(std::iter::empty()),
        }
    }
}

/// Messages that drive the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardMessage {
    /// A row was clicked outside its favorite icon
    RowClicked(String),
    /// The favorite icon of a row was clicked
    FavoriteClicked(String),
    /// A company filter radio was selected; carries the radio value
    FilterSelected(String),
    /// A dialog closed, for any reason
    DialogClosed(DialogTarget),
    /// The daily/weekly radio in the detail dialog changed
    MenuKindSelected(MenuKind),
    /// A menu fetch finished
    MenuLoaded {
        /// Token of the request that finished
        token: u64,
        /// Fetched menu or the failure
        result: Result<Menu, RequestError>,
    },
}

/// Per-row visual flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RowState {
    /// Row whose detail dialog is open or loading
    pub highlighted: bool,
    /// The user's favorite
    pub favorite: bool,
}

/// One visible table row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TableRow<'a> {
    /// The restaurant on this row
    pub restaurant: &'a Restaurant,
    /// Visual flags
    pub state: RowState,
}

/// A map marker with its popup.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerSpec {
    /// Restaurant id
    pub restaurant_id: String,
    /// `[longitude, latitude]`
    pub lng_lat: [f64; 2],
    /// Popup body markup, already escaped
    pub popup_html: String,
}

/// The detail dialog currently shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenDialog {
    /// Restaurant shown
    pub restaurant_id: String,
    /// Menu kind shown
    pub kind: MenuKind,
}

/// State of the restaurant list, table, and detail dialog.
#[derive(Debug, Clone, Default)]
pub struct BoardState {
    restaurants: Vec<Restaurant>,
    filter: CompanyFilter,
    highlighted: Option<String>,
    favorite: Option<String>,
    open: Option<OpenDialog>,
    shown: Option<Menu>,
    pending: Option<MenuRequest>,
    next_token: u64,
}

impl BoardState {
    /// Create a board over an already ranked list.
    #[must_use]
    pub fn new(restaurants: Vec<Restaurant>) -> Self {
        Self {
            restaurants,
            ..Self::default()
        }
    }

    /// The full, unfiltered list in ranked order.
    #[must_use]
    pub fn restaurants(&self) -> &[Restaurant] {
        &self.restaurants
    }

    /// Look up a restaurant by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Restaurant> {
        self.restaurants.iter().find(|r| r.id == id)
    }

    /// Active company filter.
    #[must_use]
    pub const fn filter(&self) -> CompanyFilter {
        self.filter
    }

    /// Id of the highlighted row.
    #[must_use]
    pub fn highlighted(&self) -> Option<&str> {
        self.highlighted.as_deref()
    }

    /// Id of the favorite row.
    #[must_use]
    pub fn favorite(&self) -> Option<&str> {
        self.favorite.as_deref()
    }

    /// The detail dialog currently shown.
    #[must_use]
    pub const fn open_dialog(&self) -> Option<&OpenDialog> {
        self.open.as_ref()
    }

    /// The in-flight menu request whose answer will be shown.
    #[must_use]
    pub const fn pending(&self) -> Option<&MenuRequest> {
        self.pending.as_ref()
    }

    /// Flags for a single row.
    #[must_use]
    pub fn row_state(&self, id: &str) -> RowState {
        RowState {
            highlighted: self.highlighted.as_deref() == Some(id),
            favorite: self.favorite.as_deref() == Some(id),
        }
    }

    /// Visible rows in ranked order.
    #[must_use]
    pub fn table_rows(&self) -> Vec<TableRow<'_>> {
        self.filter
            .apply(&self.restaurants)
            .into_iter()
            .map(|restaurant| TableRow {
                restaurant,
                state: self.row_state(&restaurant.id),
            })
            .collect()
    }

    /// One marker per restaurant, ignoring the filter.
    #[must_use]
    pub fn markers(&self) -> Vec<MarkerSpec> {
        self.restaurants
            .iter()
            .map(|r| MarkerSpec {
                restaurant_id: r.id.clone(),
                lng_lat: r.location.lng_lat(),
                popup_html: view::map_popup(r),
            })
            .collect()
    }

    fn is_visible(&self, id: &str) -> bool {
        self.get(id).is_some_and(|r| self.filter.matches(r))
    }

    fn request(&mut self, restaurant_id: String, kind: MenuKind) -> Command {
        self.next_token += 1;
        let request = MenuRequest {
            token: self.next_token,
            restaurant_id,
            kind,
        };
        tracing::debug!(
            token = request.token,
            restaurant = %request.restaurant_id,
            %kind,
            "requesting menu"
        );
        self.pending = Some(request.clone());
        Command::FetchMenu(request)
    }

    fn menu_loaded(&mut self, token: u64, result: Result<Menu, RequestError>) -> Command {
        let request = match self.pending.take() {
            Some(request) if request.token == token => request,
            other => {
                tracing::debug!(token, "discarding stale menu response");
                self.pending = other;
                return Command::None;
            }
        };

        match result {
            Ok(menu) => {
                let Some(restaurant) = self.get(&request.restaurant_id) else {
                    return Command::None;
                };
                let html = view::restaurant_dialog(restaurant, &menu);
                self.open = Some(OpenDialog {
                    restaurant_id: request.restaurant_id,
                    kind: menu.kind(),
                });
                self.shown = Some(menu);
                Command::ShowDialog {
                    target: DialogTarget::Detail,
                    html,
                }
            }
            Err(err) => {
                tracing::error!(restaurant = %request.restaurant_id, error = %err, "menu fetch failed");
                let error = Command::ShowDialog {
                    target: DialogTarget::Error,
                    html: view::error_dialog(&err.to_string()),
                };
                // The menu radio already moved; put it back on the shown kind.
                match self.redraw_detail() {
                    Some(detail) => Command::batch([detail, error]),
                    None => error,
                }
            }
        }
    }

    fn redraw_detail(&self) -> Option<Command> {
        let open = self.open.as_ref()?;
        let menu = self.shown.as_ref()?;
        let restaurant = self.get(&open.restaurant_id)?;
        Some(Command::ShowDialog {
            target: DialogTarget::Detail,
            html: view::restaurant_dialog(restaurant, menu),
        })
    }

    fn kind_selected(&mut self, kind: MenuKind) -> Command {
        let Some(open) = &self.open else {
            return Command::None;
        };
        let restaurant_id = open.restaurant_id.clone();
        let shown_kind = open.kind;
        let in_flight = self
            .pending
            .as_ref()
            .filter(|request| request.restaurant_id == restaurant_id)
            .map(|request| request.kind);

        if kind == shown_kind {
            if in_flight.is_some() {
                tracing::debug!(%kind, "back to the shown menu, dropping pending switch");
                self.pending = None;
            }
            Command::None
        } else if in_flight == Some(kind) {
            Command::None
        } else {
            self.request(restaurant_id, kind)
        }
    }
}

impl State for BoardState {
    type Message = BoardMessage;

    fn update(&mut self, msg: Self::Message) -> Command {
        match msg {
            BoardMessage::RowClicked(id) => {
                if !self.is_visible(&id) {
                    tracing::warn!(restaurant = %id, "click on unknown row");
                    return Command::None;
                }
                self.highlighted = Some(id.clone());
                let fetch = self.request(id, MenuKind::Daily);
                Command::batch([Command::SyncRows, fetch])
            }
            BoardMessage::FavoriteClicked(id) => {
                if !self.is_visible(&id) {
                    return Command::None;
                }
                self.favorite = if self.favorite.as_deref() == Some(id.as_str()) {
                    None
                } else {
                    Some(id)
                };
                Command::SyncRows
            }
            BoardMessage::FilterSelected(value) => {
                self.filter = CompanyFilter::from_radio_value(&value);
                tracing::debug!(filter = %self.filter, "filter selected");
                // Rows are rebuilt, so their flags go with them.
                self.highlighted = None;
                self.favorite = None;
                Command::RenderTable
            }
            BoardMessage::DialogClosed(DialogTarget::Detail) => {
                self.highlighted = None;
                self.open = None;
                self.shown = None;
                self.pending = None;
                Command::SyncRows
            }
            BoardMessage::DialogClosed(DialogTarget::Error) => {
                // A detail dialog underneath keeps its row and menu.
                if self.open.is_some() {
                    return Command::None;
                }
                self.highlighted = None;
                self.pending = None;
                Command::SyncRows
            }
            BoardMessage::MenuKindSelected(kind) => self.kind_selected(kind),
            BoardMessage::MenuLoaded { token, result } => self.menu_loaded(token, result),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Course, DailyMenu, Location, WeeklyMenu};

    fn restaurant(id: &str, company: &str) -> Restaurant {
        Restaurant {
            id: id.to_string(),
            company_id: None,
            name: format!("Ravintola {id}"),
            address: String::new(),
            postal_code: String::new(),
            city: String::new(),
            phone: String::new(),
            company: company.to_string(),
            location: Location::new(60.0, 24.0),
        }
    }

    fn board() -> BoardState {
        BoardState::new(vec![
            restaurant("a", "Sodexo"),
            restaurant("b", "Compass Group"),
            restaurant("c", "Sodexo"),
        ])
    }

    fn daily(name: &str) -> Menu {
        Menu::Daily(DailyMenu {
            courses: vec![Course::new(name)],
        })
    }

    fn single_fetch(cmd: &Command) -> MenuRequest {
        let requests: Vec<_> = cmd.fetch_requests().cloned().collect();
        assert_eq!(requests.len(), 1, "expected exactly one fetch in {cmd:?}");
        requests.into_iter().next().unwrap()
    }

    #[test]
    fn test_initial_state() {
        let b = board();
        assert_eq!(b.highlighted(), None);
        assert_eq!(b.favorite(), None);
        assert_eq!(b.filter(), CompanyFilter::All);
        assert!(b.open_dialog().is_none());
        assert_eq!(b.table_rows().len(), 3);
    }

    #[test]
    fn test_row_click_highlights_and_fetches() {
        let mut b = board();
        let cmd = b.update(BoardMessage::RowClicked("b".to_string()));
        assert_eq!(b.highlighted(), Some("b"));
        let request = single_fetch(&cmd);
        assert_eq!(request.restaurant_id, "b");
        assert_eq!(request.kind, MenuKind::Daily);
        assert_eq!(cmd.clone().flatten()[0], Command::SyncRows);
    }

    #[test]
    fn test_only_one_row_highlighted() {
        let mut b = board();
        b.update(BoardMessage::RowClicked("a".to_string()));
        b.update(BoardMessage::RowClicked("c".to_string()));
        let highlighted: Vec<_> = b
            .table_rows()
            .iter()
            .filter(|row| row.state.highlighted)
            .map(|row| row.restaurant.id.clone())
            .collect();
        assert_eq!(highlighted, ["c"]);
    }

    #[test]
    fn test_unknown_row_is_ignored() {
        let mut b = board();
        assert!(b.update(BoardMessage::RowClicked("zzz".to_string())).is_none());
        assert_eq!(b.highlighted(), None);
    }

    #[test]
    fn test_favorite_never_fetches() {
        let mut b = board();
        let cmd = b.update(BoardMessage::FavoriteClicked("a".to_string()));
        assert_eq!(cmd, Command::SyncRows);
        assert_eq!(cmd.fetch_requests().count(), 0);
        assert_eq!(b.highlighted(), None);
    }

    #[test]
    fn test_favorite_exclusive() {
        let mut b = board();
        b.update(BoardMessage::FavoriteClicked("a".to_string()));
        b.update(BoardMessage::FavoriteClicked("b".to_string()));
        assert_eq!(b.favorite(), Some("b"));
        assert!(!b.row_state("a").favorite);
        assert!(b.row_state("b").favorite);

        b.update(BoardMessage::FavoriteClicked("a".to_string()));
        assert_eq!(b.favorite(), Some("a"));
        assert!(!b.row_state("b").favorite);
    }

    #[test]
    fn test_favorite_toggles_off() {
        let mut b = board();
        b.update(BoardMessage::FavoriteClicked("a".to_string()));
        b.update(BoardMessage::FavoriteClicked("a".to_string()));
        assert_eq!(b.favorite(), None);
    }

    #[test]
    fn test_favorite_and_highlight_independent() {
        let mut b = board();
        b.update(BoardMessage::FavoriteClicked("a".to_string()));
        b.update(BoardMessage::RowClicked("b".to_string()));
        assert_eq!(b.row_state("a"), RowState { highlighted: false, favorite: true });
        assert_eq!(b.row_state("b"), RowState { highlighted: true, favorite: false });
    }

    #[test]
    fn test_menu_loaded_opens_detail() {
        let mut b = board();
        let request = single_fetch(&b.update(BoardMessage::RowClicked("a".to_string())));
        let cmd = b.update(BoardMessage::MenuLoaded {
            token: request.token,
            result: Ok(daily("Pyttipannu")),
        });
        match cmd {
            Command::ShowDialog { target, html } => {
                assert_eq!(target, DialogTarget::Detail);
                assert!(html.contains("Ravintola a"));
                assert!(html.contains("Pyttipannu"));
            }
            other => panic!("expected dialog, got {other:?}"),
        }
        assert_eq!(
            b.open_dialog(),
            Some(&OpenDialog {
                restaurant_id: "a".to_string(),
                kind: MenuKind::Daily
            })
        );
        assert!(b.pending().is_none());
    }

    #[test]
    fn test_menu_failure_opens_error() {
        let mut b = board();
        let request = single_fetch(&b.update(BoardMessage::RowClicked("a".to_string())));
        let cmd = b.update(BoardMessage::MenuLoaded {
            token: request.token,
            result: Err(RequestError::Transport {
                url: "u".to_string(),
                message: "boom".to_string(),
            }),
        });
        match cmd {
            Command::ShowDialog { target, html } => {
                assert_eq!(target, DialogTarget::Error);
                assert!(html.contains("boom"));
            }
            other => panic!("expected error dialog, got {other:?}"),
        }
        assert!(b.open_dialog().is_none());
        assert_eq!(b.highlighted(), Some("a"));
    }

    #[test]
    fn test_latest_click_wins() {
        let mut b = board();
        let first = single_fetch(&b.update(BoardMessage::RowClicked("a".to_string())));
        let second = single_fetch(&b.update(BoardMessage::RowClicked("b".to_string())));
        assert!(second.token > first.token);

        let late = b.update(BoardMessage::MenuLoaded {
            token: first.token,
            result: Ok(daily("old")),
        });
        assert!(late.is_none());
        assert_eq!(b.pending(), Some(&second));

        let cmd = b.update(BoardMessage::MenuLoaded {
            token: second.token,
            result: Ok(daily("new")),
        });
        assert!(matches!(cmd, Command::ShowDialog { ref html, .. } if html.contains("Ravintola b")));
    }

    #[test]
    fn test_dialog_close_clears_highlight_and_pending() {
        let mut b = board();
        let request = single_fetch(&b.update(BoardMessage::RowClicked("a".to_string())));
        b.update(BoardMessage::FavoriteClicked("c".to_string()));
        assert_eq!(
            b.update(BoardMessage::DialogClosed(DialogTarget::Detail)),
            Command::SyncRows
        );
        assert_eq!(b.highlighted(), None);
        assert_eq!(b.favorite(), Some("c"));
        assert!(b.pending().is_none());

        let late = b.update(BoardMessage::MenuLoaded {
            token: request.token,
            result: Ok(daily("late")),
        });
        assert!(late.is_none());
    }

    #[test]
    fn test_filter_rebuilds_and_resets_flags() {
        let mut b = board();
        b.update(BoardMessage::RowClicked("a".to_string()));
        b.update(BoardMessage::FavoriteClicked("c".to_string()));
        let cmd = b.update(BoardMessage::FilterSelected("sodexo".to_string()));
        assert_eq!(cmd, Command::RenderTable);
        assert_eq!(b.highlighted(), None);
        assert_eq!(b.favorite(), None);
        let ids: Vec<_> = b.table_rows().iter().map(|r| r.restaurant.id.clone()).collect();
        assert_eq!(ids, ["a", "c"]);
        assert_eq!(b.restaurants().len(), 3);
    }

    #[test]
    fn test_hidden_row_click_ignored() {
        let mut b = board();
        b.update(BoardMessage::FilterSelected("compass-group".to_string()));
        assert!(b.update(BoardMessage::RowClicked("a".to_string())).is_none());
    }

    #[test]
    fn test_markers_ignore_filter() {
        let mut b = board();
        b.update(BoardMessage::FilterSelected("compass-group".to_string()));
        let markers = b.markers();
        assert_eq!(markers.len(), 3);
        assert_eq!(markers[0].lng_lat, [24.0, 60.0]);
        assert!(markers[0].popup_html.contains("Ravintola a"));
    }

    #[test]
    fn test_menu_kind_switch_fetches_weekly() {
        let mut b = board();
        let request = single_fetch(&b.update(BoardMessage::RowClicked("b".to_string())));
        b.update(BoardMessage::MenuLoaded {
            token: request.token,
            result: Ok(daily("x")),
        });

        let weekly = single_fetch(&b.update(BoardMessage::MenuKindSelected(MenuKind::Weekly)));
        assert_eq!(weekly.restaurant_id, "b");
        assert_eq!(weekly.kind, MenuKind::Weekly);

        let cmd = b.update(BoardMessage::MenuLoaded {
            token: weekly.token,
            result: Ok(Menu::Weekly(WeeklyMenu::default())),
        });
        assert!(matches!(cmd, Command::ShowDialog { target: DialogTarget::Detail, .. }));
        assert_eq!(b.open_dialog().map(|o| o.kind), Some(MenuKind::Weekly));
    }

    #[test]
    fn test_menu_kind_without_dialog_is_noop() {
        let mut b = board();
        assert!(b.update(BoardMessage::MenuKindSelected(MenuKind::Weekly)).is_none());
    }

    #[test]
    fn test_menu_kind_same_kind_is_noop() {
        let mut b = board();
        let request = single_fetch(&b.update(BoardMessage::RowClicked("b".to_string())));
        b.update(BoardMessage::MenuLoaded {
            token: request.token,
            result: Ok(daily("x")),
        });
        assert!(b.update(BoardMessage::MenuKindSelected(MenuKind::Daily)).is_none());
    }

    fn open_daily(b: &mut BoardState, id: &str) {
        let request = single_fetch(&b.update(BoardMessage::RowClicked(id.to_string())));
        b.update(BoardMessage::MenuLoaded {
            token: request.token,
            result: Ok(daily("x")),
        });
    }

    fn boom() -> RequestError {
        RequestError::Transport {
            url: "u".to_string(),
            message: "boom".to_string(),
        }
    }

    #[test]
    fn test_switch_back_before_response_keeps_shown_kind() {
        let mut b = board();
        open_daily(&mut b, "b");

        let weekly = single_fetch(&b.update(BoardMessage::MenuKindSelected(MenuKind::Weekly)));
        assert!(b.update(BoardMessage::MenuKindSelected(MenuKind::Daily)).is_none());
        assert!(b.pending().is_none());

        let late = b.update(BoardMessage::MenuLoaded {
            token: weekly.token,
            result: Ok(Menu::Weekly(WeeklyMenu::default())),
        });
        assert!(late.is_none());
        assert_eq!(b.open_dialog().map(|o| o.kind), Some(MenuKind::Daily));
    }

    #[test]
    fn test_repeated_kind_selection_fetches_once() {
        let mut b = board();
        open_daily(&mut b, "b");
        single_fetch(&b.update(BoardMessage::MenuKindSelected(MenuKind::Weekly)));
        assert!(b.update(BoardMessage::MenuKindSelected(MenuKind::Weekly)).is_none());
    }

    #[test]
    fn test_switch_there_and_back_and_there_again() {
        let mut b = board();
        open_daily(&mut b, "b");
        let first = single_fetch(&b.update(BoardMessage::MenuKindSelected(MenuKind::Weekly)));
        b.update(BoardMessage::MenuKindSelected(MenuKind::Daily));
        let second = single_fetch(&b.update(BoardMessage::MenuKindSelected(MenuKind::Weekly)));
        assert!(second.token > first.token);

        assert!(b
            .update(BoardMessage::MenuLoaded {
                token: first.token,
                result: Ok(Menu::Weekly(WeeklyMenu::default())),
            })
            .is_none());
        let cmd = b.update(BoardMessage::MenuLoaded {
            token: second.token,
            result: Ok(Menu::Weekly(WeeklyMenu::default())),
        });
        assert!(matches!(cmd, Command::ShowDialog { target: DialogTarget::Detail, .. }));
    }

    #[test]
    fn test_failed_switch_redraws_detail_then_error() {
        let mut b = board();
        open_daily(&mut b, "b");
        let weekly = single_fetch(&b.update(BoardMessage::MenuKindSelected(MenuKind::Weekly)));
        let cmds = b
            .update(BoardMessage::MenuLoaded {
                token: weekly.token,
                result: Err(boom()),
            })
            .flatten();

        assert_eq!(cmds.len(), 2);
        match &cmds[0] {
            Command::ShowDialog { target, html } => {
                assert_eq!(*target, DialogTarget::Detail);
                assert!(html.contains("value=\"daily-menu\" checked"));
                assert!(!html.contains("value=\"weekly-menu\" checked"));
            }
            other => panic!("expected detail redraw, got {other:?}"),
        }
        assert!(
            matches!(&cmds[1], Command::ShowDialog { target: DialogTarget::Error, html } if html.contains("boom"))
        );
    }

    #[test]
    fn test_error_close_keeps_detail_state() {
        let mut b = board();
        open_daily(&mut b, "b");
        let weekly = single_fetch(&b.update(BoardMessage::MenuKindSelected(MenuKind::Weekly)));
        b.update(BoardMessage::MenuLoaded {
            token: weekly.token,
            result: Err(boom()),
        });

        assert!(b.update(BoardMessage::DialogClosed(DialogTarget::Error)).is_none());
        assert_eq!(b.highlighted(), Some("b"));
        assert_eq!(b.open_dialog().map(|o| o.kind), Some(MenuKind::Daily));

        let retry = single_fetch(&b.update(BoardMessage::MenuKindSelected(MenuKind::Weekly)));
        assert_eq!(retry.restaurant_id, "b");
        assert_eq!(retry.kind, MenuKind::Weekly);
    }

    #[test]
    fn test_error_close_without_detail_clears_highlight() {
        let mut b = board();
        let request = single_fetch(&b.update(BoardMessage::RowClicked("a".to_string())));
        b.update(BoardMessage::MenuLoaded {
            token: request.token,
            result: Err(boom()),
        });
        assert_eq!(
            b.update(BoardMessage::DialogClosed(DialogTarget::Error)),
            Command::SyncRows
        );
        assert_eq!(b.highlighted(), None);
    }

    #[test]
    fn test_command_flatten() {
        let cmd = Command::batch([
            Command::None,
            Command::batch([Command::SyncRows, Command::RenderTable]),
        ]);
        assert_eq!(cmd.flatten(), vec![Command::SyncRows, Command::RenderTable]);
    }
}
