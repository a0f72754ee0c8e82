//! Page elements the controller needs, bound once at startup.

use ruokala_core::{Selectors, SetupError};
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, HtmlDialogElement, HtmlElement, HtmlInputElement, HtmlTableElement,
};

/// Every element the page must provide.
///
/// Built by [`ViewHandles::resolve`], which fails with a distinct
/// [`SetupError`] for each missing element.
#[derive(Debug, Clone)]
pub struct ViewHandles {
    /// Owning document
    pub document: Document,
    /// `<body>`, target of the menu and dark mode classes
    pub body: HtmlElement,
    /// Restaurant table
    pub table: HtmlTableElement,
    /// Restaurant detail dialog
    pub detail_dialog: HtmlDialogElement,
    /// Error dialog
    pub error_dialog: HtmlDialogElement,
    /// Company filter radios
    pub filter_inputs: Vec<HtmlInputElement>,
    /// Navigation menu button
    pub menu_toggle: HtmlElement,
    /// Dark mode checkbox
    pub dark_mode_toggle: HtmlInputElement,
    /// Element the map renders into
    pub map_container: HtmlElement,
}

impl ViewHandles {
    /// Resolve against the global document.
    pub fn from_window(selectors: &Selectors, map_container: &str) -> Result<Self, SetupError> {
        let document = web_sys::window()
            .ok_or(SetupError::NoWindow)?
            .document()
            .ok_or(SetupError::NoDocument)?;
        Self::resolve(&document, selectors, map_container)
    }

    /// Resolve every handle in `document`.
    pub fn resolve(
        document: &Document,
        selectors: &Selectors,
        map_container: &str,
    ) -> Result<Self, SetupError> {
        let body = document.body().ok_or(SetupError::NoDocument)?;

        let table = cast(
            query(document, &selectors.table, SetupError::MissingTable)?,
            &selectors.table,
            "table",
        )?;
        let detail_dialog = cast(
            query(document, &selectors.detail_dialog, SetupError::MissingDetailDialog)?,
            &selectors.detail_dialog,
            "dialog",
        )?;
        let error_dialog = cast(
            query(document, &selectors.error_dialog, SetupError::MissingErrorDialog)?,
            &selectors.error_dialog,
            "dialog",
        )?;
        let filter_inputs = query_inputs(document, &selectors.filter_inputs)?;
        let menu_toggle = cast(
            query(document, &selectors.menu_toggle, SetupError::MissingMenuToggle)?,
            &selectors.menu_toggle,
            "HTML element",
        )?;
        let dark_mode_toggle = cast(
            query(document, &selectors.dark_mode_toggle, SetupError::MissingDarkModeToggle)?,
            &selectors.dark_mode_toggle,
            "input",
        )?;
        let map_container = document
            .get_element_by_id(map_container)
            .ok_or_else(|| SetupError::MissingMapContainer(map_container.to_string()))
            .and_then(|el| cast(el, map_container, "HTML element"))?;

        Ok(Self {
            document: document.clone(),
            body,
            table,
            detail_dialog,
            error_dialog,
            filter_inputs,
            menu_toggle,
            dark_mode_toggle,
            map_container,
        })
    }
}

fn query(
    document: &Document,
    selector: &str,
    missing: fn(String) -> SetupError,
) -> Result<Element, SetupError> {
    document
        .query_selector(selector)
        .map_err(|_| SetupError::InvalidSelector(selector.to_string()))?
        .ok_or_else(|| missing(selector.to_string()))
}

fn query_inputs(document: &Document, selector: &str) -> Result<Vec<HtmlInputElement>, SetupError> {
    let nodes = document
        .query_selector_all(selector)
        .map_err(|_| SetupError::InvalidSelector(selector.to_string()))?;
    let mut inputs = Vec::with_capacity(nodes.length() as usize);
    for i in 0..nodes.length() {
        if let Some(node) = nodes.item(i) {
            let input = node
                .dyn_into::<HtmlInputElement>()
                .map_err(|_| SetupError::WrongElementType {
                    selector: selector.to_string(),
                    expected: "input",
                })?;
            inputs.push(input);
        }
    }
    if inputs.is_empty() {
        return Err(SetupError::MissingFilterInputs(selector.to_string()));
    }
    Ok(inputs)
}

fn cast<T: JsCast>(element: Element, selector: &str, expected: &'static str) -> Result<T, SetupError> {
    element
        .dyn_into::<T>()
        .map_err(|_| SetupError::WrongElementType {
            selector: selector.to_string(),
            expected,
        })
}
