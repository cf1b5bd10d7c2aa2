//! Client-held mirror of one collection, changed only by server responses.

use crate::entity::Entity;
use crate::entity::EntityId;

/// One authoritative change to apply to a list.
#[derive(Debug, Clone, PartialEq)]
pub enum Change<T, K> {
    /// A newly created item; goes to the front.
    Created(T),
    /// New canonical version of an existing item.
    Updated(T),
    /// The item with this key no longer exists.
    Removed(K),
}

/// Applies `change` to `items`, matching entries through `key_of`.
///
/// Keeps keys unique: a `Created` whose key is already present replaces the
/// old entry before being prepended, and `Updated` for an unknown key is
/// dropped so a late response cannot resurrect a removed item.
///
/// Returns whether `items` changed.
pub fn reconcile<T, K, F>(items: &mut Vec<T>, change: Change<T, K>, key_of: F) -> bool
where
    K: PartialEq,
    F: Fn(&T) -> K,
{
    match change {
        Change::Created(item) => {
            let key = key_of(&item);
            items.retain(|existing| key_of(existing) != key);
            items.insert(0, item);
            true
        }
        Change::Updated(item) => {
            let key = key_of(&item);
            match items.iter_mut().find(|existing| key_of(existing) == key) {
                Some(slot) => {
                    *slot = item;
                    true
                }
                None => false,
            }
        }
        Change::Removed(key) => {
            let before = items.len();
            items.retain(|existing| key_of(existing) != key);
            items.len() != before
        }
    }
}

/// Ordered collection of one entity type, newest created first.
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceStore<T: Entity> {
    items: Vec<T>,
}

impl<T: Entity> Default for ResourceStore<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: Entity> ResourceStore<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the whole collection with a fresh server listing.
    pub fn replace_all(&mut self, items: Vec<T>) {
        let mut unique: Vec<T> = Vec::with_capacity(items.len());
        for item in items {
            if unique.iter().any(|u| u.id() == item.id()) {
                dioxus_logger::tracing::warn!("{} listing repeats id {}", T::RESOURCE, item.id());
                continue;
            }
            unique.push(item);
        }
        self.items = unique;
    }

    pub fn apply_created(&mut self, entity: T) {
        dioxus_logger::tracing::debug!("{} {} created", T::RESOURCE, entity.id());
        reconcile(&mut self.items, Change::Created(entity), T::id);
    }

    /// Returns `false` when no entry matched, in which case nothing changed.
    pub fn apply_updated(&mut self, entity: T) -> bool {
        let id = entity.id();
        let applied = reconcile(&mut self.items, Change::Updated(entity), T::id);
        if !applied {
            dioxus_logger::tracing::debug!("{} {} updated but not in store", T::RESOURCE, id);
        }
        applied
    }

    pub fn apply_removed(&mut self, id: EntityId) -> bool {
        reconcile(&mut self.items, Change::Removed(id), T::id)
    }

    pub fn get(&self, id: EntityId) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }

    pub fn contains(&self, id: EntityId) -> bool {
        self.get(id).is_some()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<'a, T: Entity> IntoIterator for &'a ResourceStore<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::Speaker;

    fn speaker(id: i64, name: &str) -> Speaker {
        Speaker {
            id: EntityId(id),
            name: name.into(),
            ktaname: None,
            labo: None,
            picture_file: None,
        }
    }

    #[test]
    fn reconcile_works_on_plain_tuples() {
        let mut v = vec![(1, "a"), (2, "b")];
        assert!(reconcile(&mut v, Change::Updated((2, "B")), |t| t.0));
        assert!(!reconcile(&mut v, Change::Removed(9), |t| t.0));
        assert!(reconcile(&mut v, Change::Created((3, "c")), |t| t.0));
        assert_eq!(v, vec![(3, "c"), (1, "a"), (2, "B")]);
    }

    #[test]
    fn created_is_prepended_once() {
        let mut s = ResourceStore::new();
        s.replace_all(vec![speaker(1, "a"), speaker(2, "b")]);
        s.apply_created(speaker(3, "c"));
        s.apply_created(speaker(3, "c again"));
        let ids: Vec<_> = s.iter().map(|x| x.id.0).collect();
        assert_eq!(ids, vec![3, 1, 2]);
        assert_eq!(s.get(EntityId(3)).map(|x| x.name.as_str()), Some("c again"));
    }

    #[test]
    fn update_of_unknown_id_is_ignored() {
        let mut s = ResourceStore::new();
        s.replace_all(vec![speaker(1, "a")]);
        assert!(!s.apply_updated(speaker(2, "ghost")));
        assert_eq!(s.len(), 1);
    }

    #[test]
    fn update_keeps_position() {
        let mut s = ResourceStore::new();
        s.replace_all(vec![speaker(1, "a"), speaker(2, "b"), speaker(3, "c")]);
        assert!(s.apply_updated(speaker(2, "bee")));
        let names: Vec<_> = s.iter().map(|x| x.name.as_str()).collect();
        assert_eq!(names, vec!["a", "bee", "c"]);
    }

    #[test]
    fn listing_with_repeated_ids_keeps_first() {
        let mut s = ResourceStore::new();
        s.replace_all(vec![speaker(1, "a"), speaker(1, "dup"), speaker(2, "b")]);
        assert_eq!(s.len(), 2);
        assert_eq!(s.get(EntityId(1)).map(|x| x.name.as_str()), Some("a"));
    }

    #[test]
    fn remove_reports_whether_anything_went() {
        let mut s = ResourceStore::new();
        s.replace_all(vec![speaker(1, "a")]);
        assert!(s.apply_removed(EntityId(1)));
        assert!(!s.apply_removed(EntityId(1)));
        assert!(s.is_empty());
    }
}
