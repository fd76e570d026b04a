// ============================================================================
// TRAVERSAL - Recalcular el working set a partir de relaciones del árbol
// ============================================================================
// Una sola pasada por elemento, resultados concatenados en el orden del
// working set. NO se eliminan duplicados: `parents()` de dos hermanos repite
// los ancestros comunes, `siblings()` de dos hermanos se incluyen mutuamente
// y `find()` sobre subárboles solapados repite los descendientes.
// ============================================================================

use web_sys::Element;

use crate::dom::element::{html_collection_to_vec, node_list_to_vec, query_selector_all_in};
use crate::dom::selection::Selection;
use crate::error::{JfastError, Result};

impl Selection {
    /// Descendientes de cada elemento que coinciden con `selector`
    pub fn find(self, selector: &str) -> Result<Self> {
        let mut found = Vec::new();
        for element in self.iter() {
            found.extend(query_selector_all_in(element, selector)?);
        }
        Ok(self.replace(found))
    }

    /// Padre inmediato de cada elemento (se omiten los que no tienen)
    pub fn parent(self) -> Self {
        let parents: Vec<Element> = self.iter().filter_map(|e| e.parent_element()).collect();
        self.replace(parents)
    }

    /// Cadena completa de ancestros de cada elemento
    pub fn parents(self) -> Self {
        let mut ancestors = Vec::new();
        for element in self.iter() {
            let mut current = element.parent_element();
            while let Some(parent) = current {
                current = parent.parent_element();
                ancestors.push(parent);
            }
        }
        self.replace(ancestors)
    }

    /// Hijos (solo elementos) de cada elemento
    pub fn children(self) -> Self {
        let mut children = Vec::new();
        for element in self.iter() {
            children.extend(html_collection_to_vec(&element.children()));
        }
        self.replace(children)
    }

    /// Siguiente hermano elemento
    pub fn next(self) -> Self {
        let next: Vec<Element> = self.iter().filter_map(|e| e.next_element_sibling()).collect();
        self.replace(next)
    }

    /// Hermano elemento anterior
    pub fn prev(self) -> Self {
        let prev: Vec<Element> = self
            .iter()
            .filter_map(|e| e.previous_element_sibling())
            .collect();
        self.replace(prev)
    }

    /// Todos los nodos elemento bajo el mismo padre excepto el propio elemento
    pub fn siblings(self) -> Self {
        let mut siblings = Vec::new();
        for element in self.iter() {
            let Some(parent) = element.parent_node() else {
                continue;
            };
            siblings.extend(
                node_list_to_vec(&parent.child_nodes())
                    .into_iter()
                    .filter(|sibling| sibling != element),
            );
        }
        self.replace(siblings)
    }

    /// Mantener solo los elementos que cumplen `selector`
    pub fn filter(self, selector: &str) -> Result<Self> {
        let mut kept = Vec::new();
        for element in self.iter() {
            if element
                .matches(selector)
                .map_err(|e| JfastError::selector(selector, e))?
            {
                kept.push(element.clone());
            }
        }
        Ok(self.replace(kept))
    }
}
