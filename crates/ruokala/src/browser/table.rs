//! Restaurant table rendering.

use super::HIGHLIGHT_CLASS;
use ruokala_core::view::{self, FAVORITE_ICON_CLASS, ROW_ID_ATTRIBUTE};
use ruokala_core::{BoardMessage, BoardState, RowState};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlElement, HtmlTableElement};

/// The table body rows live in, created if the markup has none.
fn body(table: &HtmlTableElement) -> Result<HtmlElement, JsValue> {
    match table.t_bodies().item(0) {
        Some(body) => body.dyn_into::<HtmlElement>().map_err(JsValue::from),
        None => Ok(table.create_t_body()),
    }
}

/// Rebuild the table body from the board's visible rows.
///
/// The header is left alone; every body row is recreated.
pub fn create_table(
    document: &Document,
    table: &HtmlTableElement,
    board: &BoardState,
) -> Result<(), JsValue> {
    let body = body(table)?;
    body.set_inner_html("");
    let rows = board.table_rows();
    for row in &rows {
        let tr = document.create_element("tr")?;
        tr.set_attribute(ROW_ID_ATTRIBUTE, &row.restaurant.id)?;
        tr.set_inner_html(&view::restaurant_cells(row.restaurant));
        apply_row_state(&tr, row.state)?;
        body.append_child(&tr)?;
    }
    tracing::debug!(rows = rows.len(), "table rendered");
    Ok(())
}

/// Refresh highlight and favorite classes on the rendered rows.
pub fn sync_rows(table: &HtmlTableElement, board: &BoardState) -> Result<(), JsValue> {
    let rows = table.query_selector_all(&format!("tr[{ROW_ID_ATTRIBUTE}]"))?;
    for i in 0..rows.length() {
        let Some(tr) = rows.item(i).and_then(|node| node.dyn_into::<Element>().ok()) else {
            continue;
        };
        if let Some(id) = tr.get_attribute(ROW_ID_ATTRIBUTE) {
            apply_row_state(&tr, board.row_state(&id))?;
        }
    }
    Ok(())
}

fn apply_row_state(tr: &Element, state: RowState) -> Result<(), JsValue> {
    tr.class_list()
        .toggle_with_force(HIGHLIGHT_CLASS, state.highlighted)?;
    if let Some(icon) = tr.query_selector(&format!(".{FAVORITE_ICON_CLASS}"))? {
        let classes = icon.class_list();
        classes.toggle_with_force("fa-solid", state.favorite)?;
        classes.toggle_with_force("fa-regular", !state.favorite)?;
    }
    Ok(())
}

/// Translate a click inside the table into a board message.
///
/// Clicks on a row's star become [`BoardMessage::FavoriteClicked`] and never
/// reach the fetch path; other clicks on a row become
/// [`BoardMessage::RowClicked`].
pub fn row_message(event: &Event) -> Option<BoardMessage> {
    let target = event.target()?.dyn_into::<Element>().ok()?;
    let row = target
        .closest(&format!("tr[{ROW_ID_ATTRIBUTE}]"))
        .ok()
        .flatten()?;
    let id = row.get_attribute(ROW_ID_ATTRIBUTE)?;
    let on_star = target
        .closest(&format!(".{FAVORITE_ICON_CLASS}"))
        .ok()
        .flatten()
        .is_some();
    if on_star {
        event.stop_propagation();
        Some(BoardMessage::FavoriteClicked(id))
    } else {
        Some(BoardMessage::RowClicked(id))
    }
}
