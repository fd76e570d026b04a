// ============================================================================
// COLLECTION HELPERS - Utilidades estáticas (independientes de Selection)
// ============================================================================
// Los callbacks reciben (item, índice) en el orden de la colección.
// ============================================================================

/// Recorrer una colección
pub fn each<I, F>(collection: I, mut callback: F)
where
    I: IntoIterator,
    F: FnMut(I::Item, usize),
{
    for (index, item) in collection.into_iter().enumerate() {
        callback(item, index);
    }
}

/// Mapear una colección a un Vec nuevo
pub fn map<I, F, R>(collection: I, mut callback: F) -> Vec<R>
where
    I: IntoIterator,
    F: FnMut(I::Item, usize) -> R,
{
    collection
        .into_iter()
        .enumerate()
        .map(|(index, item)| callback(item, index))
        .collect()
}

/// Filtrar una colección (los items para los que el callback devuelve true)
pub fn grep<I, F>(collection: I, mut callback: F) -> Vec<I::Item>
where
    I: IntoIterator,
    F: FnMut(&I::Item, usize) -> bool,
{
    collection
        .into_iter()
        .enumerate()
        .filter(|(index, item)| callback(item, *index))
        .map(|(_, item)| item)
        .collect()
}

/// Verificar si el item está en el slice
pub fn in_array<T: PartialEq>(item: &T, array: &[T]) -> bool {
    array.contains(item)
}
