// ============================================================================
// SELECTION - Wrapper encadenable sobre un conjunto ordenado de elementos
// ============================================================================
// `select(".item")` hace querySelectorAll sobre el document y guarda los
// elementos en orden de documento (el "working set").
//
// Convenciones de encadenamiento:
// - Operaciones que actúan sobre todos los elementos consumen `self` y
//   devuelven `Self` (o `Result<Self>` si el navegador puede rechazarlas).
// - Operaciones de traversal reemplazan el working set.
// - Getters (`get_attr`, `get_text`...) leen SOLO el primer elemento y
//   devuelven `None` si la selección está vacía.
// ============================================================================

use web_sys::Element;

use crate::dom::element::query_selector_all;
use crate::error::Result;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Selection {
    pub(crate) elements: Vec<Element>,
}

/// Seleccionar todos los elementos del document que coinciden con `selector`
pub fn select(selector: &str) -> Result<Selection> {
    let elements = query_selector_all(selector)?;
    log::debug!("🔍 [SELECT] '{}' -> {} elementos", selector, elements.len());
    Ok(Selection { elements })
}

impl Selection {
    /// Selección vacía
    pub fn new() -> Self {
        Self::default()
    }

    /// Selección con un único elemento existente
    pub fn from_element(element: Element) -> Self {
        Self {
            elements: vec![element],
        }
    }

    /// Selección a partir de elementos existentes (se respeta el orden dado)
    pub fn from_elements(elements: Vec<Element>) -> Self {
        Self { elements }
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Primer elemento del working set (el que leen los getters)
    pub fn first(&self) -> Option<&Element> {
        self.elements.first()
    }

    pub fn get(&self, index: usize) -> Option<&Element> {
        self.elements.get(index)
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn into_elements(self) -> Vec<Element> {
        self.elements
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Element> {
        self.elements.iter()
    }

    /// Recorrer el working set en orden de documento con (índice, elemento)
    pub fn each<F>(self, mut callback: F) -> Self
    where
        F: FnMut(usize, &Element),
    {
        for (index, element) in self.elements.iter().enumerate() {
            callback(index, element);
        }
        self
    }

    /// Igual que `each` pero cortando en el primer error
    pub(crate) fn try_each<F>(self, mut callback: F) -> Result<Self>
    where
        F: FnMut(&Element) -> Result<()>,
    {
        for element in &self.elements {
            callback(element)?;
        }
        Ok(self)
    }

    /// Reemplazar el working set (usado por traversal)
    pub(crate) fn replace(mut self, elements: Vec<Element>) -> Self {
        self.elements = elements;
        self
    }
}

impl From<Element> for Selection {
    fn from(element: Element) -> Self {
        Selection::from_element(element)
    }
}

impl From<Vec<Element>> for Selection {
    fn from(elements: Vec<Element>) -> Self {
        Selection::from_elements(elements)
    }
}

impl IntoIterator for Selection {
    type Item = Element;
    type IntoIter = std::vec::IntoIter<Element>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

impl<'a> IntoIterator for &'a Selection {
    type Item = &'a Element;
    type IntoIter = std::slice::Iter<'a, Element>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}
