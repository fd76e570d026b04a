// ============================================================================
// MANIPULATION - Clases, atributos, contenido, estilos, dataset y árbol
// ============================================================================
// Setters: se aplican a TODOS los elementos y devuelven la selección.
// Getters: leen el PRIMER elemento; `None` si la selección está vacía.
// ============================================================================

use web_sys::Element;

use crate::dom::element::{dataset_of, get_style, set_style};
use crate::dom::selection::Selection;
use crate::error::{JfastError, Result};

/// Contenido para append/prepend: markup (se parsea) o un nodo existente
#[derive(Debug, Clone, Copy)]
pub enum Content<'a> {
    Html(&'a str),
    Element(&'a Element),
}

impl<'a> From<&'a str> for Content<'a> {
    fn from(html: &'a str) -> Self {
        Content::Html(html)
    }
}

impl<'a> From<&'a String> for Content<'a> {
    fn from(html: &'a String) -> Self {
        Content::Html(html.as_str())
    }
}

impl<'a> From<&'a Element> for Content<'a> {
    fn from(element: &'a Element) -> Self {
        Content::Element(element)
    }
}

impl Selection {
    // ------------------------------------------------------------------------
    // Clases
    // ------------------------------------------------------------------------

    /// Agregar clase a todos los elementos
    pub fn add_class(self, class: &str) -> Result<Self> {
        self.try_each(|element| element.class_list().add_1(class).map_err(JfastError::from))
    }

    /// Remover clase de todos los elementos
    pub fn remove_class(self, class: &str) -> Result<Self> {
        self.try_each(|element| element.class_list().remove_1(class).map_err(JfastError::from))
    }

    /// Alternar clase en cada elemento (cada uno según su propio estado)
    pub fn toggle_class(self, class: &str) -> Result<Self> {
        self.try_each(|element| {
            element
                .class_list()
                .toggle(class)
                .map(|_| ())
                .map_err(JfastError::from)
        })
    }

    /// true si ALGÚN elemento tiene la clase
    pub fn has_class(&self, class: &str) -> bool {
        self.iter().any(|element| element.class_list().contains(class))
    }

    // ------------------------------------------------------------------------
    // Atributos
    // ------------------------------------------------------------------------

    pub fn get_attr(&self, name: &str) -> Option<String> {
        self.first()?.get_attribute(name)
    }

    pub fn set_attr(self, name: &str, value: &str) -> Result<Self> {
        self.try_each(|element| element.set_attribute(name, value).map_err(JfastError::from))
    }

    pub fn remove_attr(self, name: &str) -> Result<Self> {
        self.try_each(|element| element.remove_attribute(name).map_err(JfastError::from))
    }

    // ------------------------------------------------------------------------
    // Contenido
    // ------------------------------------------------------------------------

    pub fn get_text(&self) -> Option<String> {
        self.first().map(|element| element.text_content().unwrap_or_default())
    }

    pub fn set_text(self, text: &str) -> Self {
        for element in self.iter() {
            element.set_text_content(Some(text));
        }
        self
    }

    pub fn get_html(&self) -> Option<String> {
        self.first().map(|element| element.inner_html())
    }

    pub fn set_html(self, html: &str) -> Self {
        for element in self.iter() {
            element.set_inner_html(html);
        }
        self
    }

    // ------------------------------------------------------------------------
    // Estilos inline
    // ------------------------------------------------------------------------

    /// Establecer estilo inline (`backgroundColor` o `background-color`)
    pub fn css(self, property: &str, value: &str) -> Result<Self> {
        self.try_each(|element| set_style(element, property, value))
    }

    /// Valor inline del primer elemento ("" si no está definido)
    pub fn get_css(&self, property: &str) -> Result<Option<String>> {
        match self.first() {
            Some(element) => get_style(element, property).map(Some),
            None => Ok(None),
        }
    }

    // ------------------------------------------------------------------------
    // Dataset (data-*)
    // ------------------------------------------------------------------------

    /// Leer `dataset[key]` del primer elemento (key en camelCase: `userId` -> `data-user-id`)
    pub fn get_data(&self, key: &str) -> Option<String> {
        let element = self.first()?;
        dataset_of(element).ok()?.get(key)
    }

    pub fn set_data(self, key: &str, value: &str) -> Result<Self> {
        self.try_each(|element| {
            dataset_of(element)?
                .set(key, value)
                .map_err(JfastError::from)
        })
    }

    // ------------------------------------------------------------------------
    // Árbol
    // ------------------------------------------------------------------------

    /// Insertar al final de cada elemento.
    ///
    /// Un `Content::Element` NO se clona: con varios destinos el nodo acaba en el último.
    pub fn append<'a>(self, content: impl Into<Content<'a>>) -> Result<Self> {
        let content = content.into();
        self.try_each(|element| match content {
            Content::Html(html) => element
                .insert_adjacent_html("beforeend", html)
                .map_err(JfastError::from),
            Content::Element(child) => element
                .append_child(child)
                .map(|_| ())
                .map_err(JfastError::from),
        })
    }

    /// Insertar al principio de cada elemento (mismas reglas que `append`)
    pub fn prepend<'a>(self, content: impl Into<Content<'a>>) -> Result<Self> {
        let content = content.into();
        self.try_each(|element| match content {
            Content::Html(html) => element
                .insert_adjacent_html("afterbegin", html)
                .map_err(JfastError::from),
            Content::Element(child) => element
                .insert_before(child, element.first_child().as_ref())
                .map(|_| ())
                .map_err(JfastError::from),
        })
    }

    /// Separar cada elemento de su padre (los que no tienen padre se ignoran)
    pub fn remove(self) -> Result<Self> {
        self.try_each(|element| {
            if let Some(parent) = element.parent_node() {
                parent.remove_child(element).map_err(JfastError::from)?;
            }
            Ok(())
        })
    }

    /// Vaciar el contenido de cada elemento
    pub fn empty(self) -> Self {
        self.set_html("")
    }
}
