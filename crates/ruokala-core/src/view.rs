//! Markup fragments for the table, dialogs and map popups.
//!
//! Every function is pure. All interpolated text goes through
//! [`escape_html`], so API data can never inject markup.

use crate::model::{Course, Menu, MenuKind, Restaurant, WeeklyMenu};
use std::borrow::Cow;
use std::fmt::Write;

/// Data attribute carrying the restaurant id on each table row.
pub const ROW_ID_ATTRIBUTE: &str = "data-restaurant-id";

/// Class of the star icon inside the favorite cell.
pub const FAVORITE_ICON_CLASS: &str = "favorite-icon";

/// Class of the dialog close button.
pub const CLOSE_BUTTON_CLASS: &str = "hide-dialog";

/// Name shared by the daily/weekly radio inputs.
pub const MENU_TYPE_INPUT_NAME: &str = "menu-type";

/// Placeholder for a missing diet label or price.
const MISSING: &str = " - ";

/// Escape text for use in element content and quoted attribute values.
#[must_use]
pub fn escape_html(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(text);
    }
    let mut out = String::with_capacity(text.len() + 16);
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    Cow::Owned(out)
}

/// Inner cells of a table row.
///
/// The `<tr>` itself is built by the caller so it can carry the id attribute
/// and listeners; [`restaurant_row`] wraps these cells for static rendering.
#[must_use]
pub fn restaurant_cells(restaurant: &Restaurant) -> String {
    format!(
        "<td class=\"favorite-cell\"><i class=\"fa-regular fa-star {FAVORITE_ICON_CLASS}\"></i></td>\
         <td>{}</td><td>{}</td><td>{}</td>",
        escape_html(&restaurant.name),
        escape_html(&restaurant.address),
        escape_html(&restaurant.company),
    )
}

/// A complete table row carrying the restaurant id.
#[must_use]
pub fn restaurant_row(restaurant: &Restaurant) -> String {
    format!(
        "<tr {ROW_ID_ATTRIBUTE}=\"{}\">{}</tr>",
        escape_html(&restaurant.id),
        restaurant_cells(restaurant)
    )
}

/// Table of courses with name, diet and price columns.
#[must_use]
pub fn daily_menu_table(courses: &[Course]) -> String {
    let mut html = String::from(
        "<table class=\"menu-table\"><thead><tr>\
         <th>Ruoka</th><th>Ruokavalio</th><th>Hinta</th>\
         </tr></thead><tbody>",
    );
    for course in courses {
        let _ = write!(
            html,
            "<tr><td>{}</td><td>{}</td><td>{}</td></tr>",
            escape_html(&course.name),
            escape_html(course.diets.as_deref().unwrap_or(MISSING)),
            escape_html(course.price.as_deref().unwrap_or(MISSING)),
        );
    }
    html.push_str("</tbody></table>");
    html
}

/// One heading plus course table per day.
#[must_use]
pub fn weekly_menu_section(menu: &WeeklyMenu) -> String {
    let mut html = String::new();
    for day in &menu.days {
        let _ = write!(html, "<h4>{}</h4>", escape_html(&day.date));
        html.push_str(&daily_menu_table(&day.courses));
    }
    html
}

fn close_button() -> String {
    format!(
        "<button type=\"button\" class=\"{CLOSE_BUTTON_CLASS}\" aria-label=\"Piilota modaali\">\
         <i class=\"fa-solid fa-xmark\"></i></button>"
    )
}

fn menu_type_radio(kind: MenuKind, id: &str, label: &str, shown: MenuKind) -> String {
    let checked = if kind == shown { " checked" } else { "" };
    format!(
        "<input type=\"radio\" id=\"{id}\" name=\"{MENU_TYPE_INPUT_NAME}\" value=\"{}\"{checked} />\
         <label for=\"{id}\">{label}</label><br />",
        kind.radio_value()
    )
}

/// Detail dialog body: restaurant info, menu kind choice and the menu.
#[must_use]
pub fn restaurant_dialog(restaurant: &Restaurant, menu: &Menu) -> String {
    let shown = menu.kind();
    let mut html = close_button();
    let _ = write!(
        html,
        "<h3>{}</h3><p>{}</p><p>{} {} {}</p><p>{}</p>",
        escape_html(&restaurant.name),
        escape_html(&restaurant.company),
        escape_html(&restaurant.address),
        escape_html(&restaurant.postal_code),
        escape_html(&restaurant.city),
        escape_html(&restaurant.phone),
    );
    let _ = write!(
        html,
        "<form id=\"menu-type-form\" method=\"dialog\"><fieldset><legend>Ruokalista</legend>{}{}</fieldset></form>",
        menu_type_radio(MenuKind::Daily, "daily", "Päivän", shown),
        menu_type_radio(MenuKind::Weekly, "weekly", "Viikon", shown),
    );
    let body = match menu {
        Menu::Daily(daily) => daily_menu_table(&daily.courses),
        Menu::Weekly(weekly) => weekly_menu_section(weekly),
    };
    let _ = write!(html, "<section id=\"restaurant-menu\">{body}</section>");
    html
}

/// Error dialog body showing `message`.
#[must_use]
pub fn error_dialog(message: &str) -> String {
    format!(
        "{}<h3>Error</h3><p>{}</p>",
        close_button(),
        escape_html(message)
    )
}

/// Map popup content for one restaurant.
#[must_use]
pub fn map_popup(restaurant: &Restaurant) -> String {
    format!(
        "<h3>{}</h3><p>{}</p><p>{}</p><p>{}</p>",
        escape_html(&restaurant.name),
        escape_html(&restaurant.address),
        escape_html(&restaurant.postal_code),
        escape_html(&restaurant.city),
    )
}
