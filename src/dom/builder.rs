// ============================================================================
// ELEMENT BUILDER - Builder pattern para crear elementos fácilmente
// ============================================================================
// Pensado para `append`/`prepend` con un nodo en vez de markup:
//
//     let badge = ElementBuilder::new("span")?.class("badge").text("3").build();
//     select("#inbox")?.append(&badge)?;
// ============================================================================

use web_sys::Element;

use crate::dom::element::document;
use crate::dom::selection::Selection;
use crate::error::{JfastError, Result};

pub struct ElementBuilder {
    element: Element,
}

impl ElementBuilder {
    /// Crear nuevo builder para un elemento
    pub fn new(tag: &str) -> Result<Self> {
        let element = document()?.create_element(tag)?;
        Ok(Self { element })
    }

    /// Establecer class name (reemplaza todas las clases)
    pub fn class(self, class: &str) -> Self {
        self.element.set_class_name(class);
        self
    }

    /// Establecer ID
    pub fn id(self, id: &str) -> Self {
        self.element.set_id(id);
        self
    }

    /// Establecer text content
    pub fn text(self, text: &str) -> Self {
        self.element.set_text_content(Some(text));
        self
    }

    /// Establecer inner HTML
    pub fn html(self, html: &str) -> Self {
        self.element.set_inner_html(html);
        self
    }

    /// Establecer atributo
    pub fn attr(self, name: &str, value: &str) -> Result<Self> {
        self.element.set_attribute(name, value)?;
        Ok(self)
    }

    /// Agregar hijo
    pub fn child(self, child: Element) -> Result<Self> {
        self.element.append_child(&child).map_err(JfastError::from)?;
        Ok(self)
    }

    /// Construir y retornar elemento
    pub fn build(self) -> Element {
        self.element
    }

    /// Construir y envolver en una Selection de un elemento
    pub fn into_selection(self) -> Selection {
        Selection::from_element(self.element)
    }
}
