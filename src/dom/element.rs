// ============================================================================
// ELEMENT HELPERS - Funciones básicas para manipular DOM
// ============================================================================

use wasm_bindgen::JsCast;
use web_sys::{
    CssStyleDeclaration, Document, DomStringMap, Element, HtmlCollection, HtmlElement, NodeList, SvgElement, Window,
};

use crate::error::{JfastError, Result};

/// Obtener window global
pub fn window() -> Result<Window> {
    web_sys::window().ok_or(JfastError::NoWindow)
}

/// Obtener document
pub fn document() -> Result<Document> {
    window()?.document().ok_or(JfastError::NoDocument)
}

/// Ver el elemento como HtmlElement (necesario para offsetHeight)
pub fn as_html_element(element: &Element) -> Result<&HtmlElement> {
    element
        .dyn_ref::<HtmlElement>()
        .ok_or(JfastError::NotHtmlElement)
}

/// Estilo inline del elemento (HTML o SVG)
pub fn style_of(element: &Element) -> Result<CssStyleDeclaration> {
    if let Some(html) = element.dyn_ref::<HtmlElement>() {
        return Ok(html.style());
    }
    element
        .dyn_ref::<SvgElement>()
        .map(SvgElement::style)
        .ok_or(JfastError::NoInlineStyle)
}

/// `dataset` del elemento (HTML o SVG)
pub fn dataset_of(element: &Element) -> Result<DomStringMap> {
    if let Some(html) = element.dyn_ref::<HtmlElement>() {
        return Ok(html.dataset());
    }
    element
        .dyn_ref::<SvgElement>()
        .map(SvgElement::dataset)
        .ok_or(JfastError::NoInlineStyle)
}

/// Establecer una propiedad de estilo inline (acepta camelCase o kebab-case)
pub fn set_style(element: &Element, property: &str, value: &str) -> Result<()> {
    style_of(element)?
        .set_property(&css_property_name(property), value)
        .map_err(JfastError::from)
}

/// Leer una propiedad de estilo inline ("" si no está definida)
pub fn get_style(element: &Element, property: &str) -> Result<String> {
    style_of(element)?
        .get_property_value(&css_property_name(property))
        .map_err(JfastError::from)
}

/// Query selector all sobre el document completo
pub fn query_selector_all(selector: &str) -> Result<Vec<Element>> {
    let list = document()?
        .query_selector_all(selector)
        .map_err(|e| JfastError::selector(selector, e))?;
    Ok(node_list_to_vec(&list))
}

/// Query selector all limitado a los descendientes de `root`
pub fn query_selector_all_in(root: &Element, selector: &str) -> Result<Vec<Element>> {
    let list = root
        .query_selector_all(selector)
        .map_err(|e| JfastError::selector(selector, e))?;
    Ok(node_list_to_vec(&list))
}

/// Convertir NodeList a Vec<Element> (descarta nodos que no son elementos)
pub fn node_list_to_vec(list: &NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Convertir HtmlCollection a Vec<Element>
pub fn html_collection_to_vec(collection: &HtmlCollection) -> Vec<Element> {
    (0..collection.length())
        .filter_map(|i| collection.item(i))
        .collect()
}

/// Nombre CSS de una propiedad escrita en camelCase.
///
/// `backgroundColor` -> `background-color`, `WebkitTransform` y
/// `webkitTransform` -> `-webkit-transform`, `msTransform` -> `-ms-transform`,
/// `cssFloat` -> `float`. Los nombres en kebab-case y las custom properties
/// (`--main-color`) se devuelven tal cual.
pub fn css_property_name(property: &str) -> String {
    if property == "cssFloat" {
        return "float".to_string();
    }
    if property.starts_with("--") || !property.chars().any(|c| c.is_ascii_uppercase()) {
        return property.to_string();
    }

    let mut name = String::with_capacity(property.len() + 4);
    if has_lowercase_vendor_prefix(property) {
        name.push('-');
    }
    for c in property.chars() {
        if c.is_ascii_uppercase() {
            name.push('-');
            name.push(c.to_ascii_lowercase());
        } else {
            name.push(c);
        }
    }
    name
}

const VENDOR_PREFIXES: [&str; 3] = ["webkit", "moz", "ms"];

/// `webkitX`, `mozX`, `msX`: prefijo en minúscula seguido de mayúscula
fn has_lowercase_vendor_prefix(property: &str) -> bool {
    VENDOR_PREFIXES.iter().any(|prefix| {
        property
            .strip_prefix(prefix)
            .and_then(|rest| rest.chars().next())
            .is_some_and(|c| c.is_ascii_uppercase())
    })
}
