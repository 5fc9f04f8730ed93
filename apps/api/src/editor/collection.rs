//! Generic add / remove / reorder / replace over an ordered collection of entries.
//!
//! Entries are addressed by their stable [`EntryId`] for removal and replacement and by
//! position only for reordering. No operation here ever assigns a new id to an existing
//! entry, and none of them can fail: out-of-range input is a no-op.

use crate::content::{Entry, EntryId};

/// Appends `entry` and returns its id.
pub fn add_entry<T: Entry>(items: &mut Vec<T>, entry: T) -> EntryId {
    let id = entry.id();
    items.push(entry);
    id
}

/// Drops the entry with `id`. Returns false when no entry matched.
pub fn remove_entry<T: Entry>(items: &mut Vec<T>, id: EntryId) -> bool {
    let before = items.len();
    items.retain(|item| item.id() != id);
    items.len() != before
}

/// Moves the entry at `from` to `to`, keeping every other entry in relative order.
///
/// `to` is interpreted against the list after removal and clamped to its bounds.
/// Returns false when `from` is out of range or the move leaves the order unchanged.
pub fn reorder<T>(items: &mut Vec<T>, from: usize, to: usize) -> bool {
    if from >= items.len() {
        return false;
    }
    let moved = items.remove(from);
    let to = to.min(items.len());
    items.insert(to, moved);
    from != to
}

/// Swaps in `entry` for the existing entry with the same id, in place.
pub fn replace_entry<T: Entry>(items: &mut [T], entry: T) -> bool {
    match items.iter_mut().find(|item| item.id() == entry.id()) {
        Some(slot) => {
            *slot = entry;
            true
        }
        None => false,
    }
}

pub fn find_entry_mut<T: Entry>(items: &mut [T], id: EntryId) -> Option<&mut T> {
    items.iter_mut().find(|item| item.id() == id)
}
