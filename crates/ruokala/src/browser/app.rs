//! WASM application entry point.

use super::handles::ViewHandles;
use super::http::HttpClient;
use super::{geolocation, map, table, DARK_MODE_CLASS, MENU_OPEN_CLASS};
use ruokala_core::view::{self, CLOSE_BUTTON_CLASS, MENU_TYPE_INPUT_NAME};
use ruokala_core::{
    load_board, load_menu, AppConfig, BoardMessage, BoardState, Command, DialogTarget, MenuKind,
    MenuRequest, State,
};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, Event, EventTarget, HtmlDialogElement, HtmlInputElement, Node};

type Listener = Closure<dyn FnMut(Event)>;

/// Page controller.
///
/// Lives for the whole page: listeners hold an `Rc<App>` and the app holds
/// the listeners.
pub struct App {
    config: AppConfig,
    handles: ViewHandles,
    client: HttpClient,
    board: RefCell<BoardState>,
    listeners: RefCell<Vec<Listener>>,
}

impl App {
    /// Create a controller with an empty board.
    #[must_use]
    pub fn new(config: AppConfig, handles: ViewHandles) -> Rc<Self> {
        let client = HttpClient::new(config.endpoints());
        Rc::new(Self {
            config,
            handles,
            client,
            board: RefCell::new(BoardState::default()),
            listeners: RefCell::new(Vec::new()),
        })
    }

    fn listen(
        self: &Rc<Self>,
        target: &EventTarget,
        event: &str,
        handler: impl Fn(&Rc<Self>, Event) + 'static,
    ) -> Result<(), JsValue> {
        let app = Rc::clone(self);
        let listener = Closure::<dyn FnMut(Event)>::new(move |e: Event| handler(&app, e));
        target.add_event_listener_with_callback(event, listener.as_ref().unchecked_ref())?;
        self.listeners.borrow_mut().push(listener);
        Ok(())
    }

    /// Attach every page listener.
    ///
    /// # Errors
    ///
    /// Fails when the browser refuses a listener.
    pub fn attach(self: &Rc<Self>) -> Result<(), JsValue> {
        let h = &self.handles;

        self.listen(&h.table, "click", |app, e| {
            if let Some(msg) = table::row_message(&e) {
                app.dispatch(msg);
            }
        })?;

        for input in &h.filter_inputs {
            self.listen(input, "change", |app, e| {
                if let Some(input) = event_input(&e) {
                    app.dispatch(BoardMessage::FilterSelected(input.value()));
                }
            })?;
        }

        for (dialog, target) in [
            (&h.detail_dialog, DialogTarget::Detail),
            (&h.error_dialog, DialogTarget::Error),
        ] {
            self.listen(dialog, "click", |_, e| close_on_dismiss(&e))?;
            self.listen(dialog, "close", move |app, _| {
                app.dispatch(BoardMessage::DialogClosed(target));
            })?;
        }

        self.listen(&h.detail_dialog, "change", |app, e| {
            let Some(input) = event_input(&e) else {
                return;
            };
            if input.name() == MENU_TYPE_INPUT_NAME {
                app.dispatch(BoardMessage::MenuKindSelected(MenuKind::from_radio_value(
                    &input.value(),
                )));
            }
        })?;

        self.listen(&h.menu_toggle, "click", |app, _| {
            let _ = app.handles.body.class_list().toggle(MENU_OPEN_CLASS);
        })?;

        self.listen(&h.dark_mode_toggle, "change", |app, _| {
            let h = &app.handles;
            let _ = h
                .body
                .class_list()
                .toggle_with_force(DARK_MODE_CLASS, h.dark_mode_toggle.checked());
        })?;

        Ok(())
    }

    /// Feed a message to the board and carry out the resulting command.
    pub fn dispatch(self: &Rc<Self>, msg: BoardMessage) {
        let command = self.board.borrow_mut().update(msg);
        self.execute(command);
    }

    fn execute(self: &Rc<Self>, command: Command) {
        for command in command.flatten() {
            let result = match command {
                Command::None | Command::Batch(_) => Ok(()),
                Command::RenderTable => self.render_table(),
                Command::SyncRows => table::sync_rows(&self.handles.table, &self.board.borrow()),
                Command::FetchMenu(request) => {
                    self.fetch_menu(request);
                    Ok(())
                }
                Command::ShowDialog { target, html } => self.show_dialog(target, &html),
            };
            if let Err(e) = result {
                tracing::error!(error = ?e, "command failed");
            }
        }
    }

    fn render_table(&self) -> Result<(), JsValue> {
        table::create_table(
            &self.handles.document,
            &self.handles.table,
            &self.board.borrow(),
        )
    }

    fn fetch_menu(self: &Rc<Self>, request: MenuRequest) {
        let app = Rc::clone(self);
        spawn_local(async move {
            let result = load_menu(&app.client, &request).await;
            app.dispatch(BoardMessage::MenuLoaded {
                token: request.token,
                result,
            });
        });
    }

    fn dialog(&self, target: DialogTarget) -> &HtmlDialogElement {
        match target {
            DialogTarget::Detail => &self.handles.detail_dialog,
            DialogTarget::Error => &self.handles.error_dialog,
        }
    }

    fn show_dialog(&self, target: DialogTarget, html: &str) -> Result<(), JsValue> {
        let dialog = self.dialog(target);
        dialog.set_inner_html(html);
        if !dialog.open() {
            dialog.show_modal()?;
        }
        Ok(())
    }

    fn show_error(&self, message: &str) {
        if let Err(e) = self.show_dialog(DialogTarget::Error, &view::error_dialog(message)) {
            tracing::error!(error = ?e, "could not show error dialog");
        }
    }

    /// Locate the user, load the table and place the markers.
    pub async fn run(self: Rc<Self>) {
        let position = match geolocation::current_position(&self.config.geolocation.options()).await
        {
            Ok(position) => position,
            Err(err) => {
                tracing::warn!(code = err.code, kind = ?err.kind(), "{err}");
                return;
            }
        };
        tracing::debug!(
            latitude = position.latitude,
            longitude = position.longitude,
            "position acquired"
        );

        match load_board(&self.client, position).await {
            Ok(board) => *self.board.borrow_mut() = board,
            Err(err) => {
                tracing::error!(error = %err, "restaurant list failed");
                self.show_error(&err.to_string());
                return;
            }
        }
        if let Err(e) = self.render_table() {
            tracing::error!(error = ?e, "table render failed");
        }

        let Some(token) = map::access_token(&self.config.map, &self.handles.document) else {
            tracing::warn!("no Mapbox access token, map skipped");
            return;
        };
        let markers = self.board.borrow().markers();
        if let Err(e) = map::show_markers(&self.config.map, &token, &markers) {
            tracing::error!(error = ?e, "map failed");
            self.show_error("Kartan lataus epäonnistui");
        }
    }
}

fn event_input(event: &Event) -> Option<HtmlInputElement> {
    event.target()?.dyn_into::<HtmlInputElement>().ok()
}

/// Close a dialog on a backdrop click or a close button click.
///
/// Clicks on the dialog's own content, such as the menu radios, are ignored.
fn close_on_dismiss(event: &Event) {
    let Some(dialog) = event
        .current_target()
        .and_then(|t| t.dyn_into::<HtmlDialogElement>().ok())
    else {
        return;
    };
    let Some(target) = event.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
        return;
    };
    let target_node: &Node = &target;
    let on_backdrop = dialog.is_same_node(Some(target_node));
    let on_close_button = target
        .closest(&format!(".{CLOSE_BUTTON_CLASS}"))
        .ok()
        .flatten()
        .is_some();
    if on_backdrop || on_close_button {
        dialog.close();
    }
}

fn log_level(name: &str) -> tracing::Level {
    name.parse().unwrap_or(tracing::Level::INFO)
}

/// Module start: bind the page and begin loading.
///
/// # Errors
///
/// Fails when the configuration is invalid or a required element is missing.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    let config = crate::embedded_config().map_err(|e| JsValue::from_str(&e.to_string()))?;
    tracing_wasm::set_as_global_default_with_config(
        tracing_wasm::WASMLayerConfigBuilder::new()
            .set_max_level(log_level(&config.log_level))
            .build(),
    );

    let handles = ViewHandles::from_window(&config.selectors, &config.map.container)
        .map_err(|e| {
            tracing::error!(error = %e, "page setup failed");
            JsValue::from_str(&e.to_string())
        })?;

    let app = App::new(config, handles);
    app.attach()?;
    spawn_local(app.run());
    Ok(())
}
