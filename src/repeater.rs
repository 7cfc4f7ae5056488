//! Generic ordered-list editor.
//!
//! Every admin panel that manages a variable-length list — slides, about
//! points, features, projects, stats — goes through a [`Repeater`]: an
//! ordered in-memory list plus an item template invoked for brand-new
//! entries. Items have no identity beyond their position; labels and field
//! ids are derived from it, 1-based.
//!
//! After any structural change, [`RepeaterItem::relabel`] runs for every
//! item whose position changed, so position-derived labels never go stale.
//! Moves touch exactly the two swapped items and stay O(1); removal
//! relabels the shifted suffix.
//!
//! Moving the first item up or the last item down is a no-op — never a
//! panic, never a wrap-around. There is no upper bound on length, no
//! confirmation on removal, and no placeholder when the list empties; the
//! surrounding UI owns the empty state.

/// An item whose labels derive from its (1-based) list position.
pub trait RepeaterItem {
    fn relabel(&mut self, position: usize);
}

/// Ordered list of items with add/remove/reorder operations.
pub struct Repeater<T: RepeaterItem> {
    items: Vec<T>,
    template: fn(usize) -> T,
}

impl<T: RepeaterItem> Repeater<T> {
    /// Empty repeater with an item template for new entries.
    pub fn new(template: fn(usize) -> T) -> Self {
        Repeater {
            items: Vec::new(),
            template,
        }
    }

    /// Repeater seeded from existing items (e.g. the loaded document).
    /// Items are relabeled to their seeded positions.
    pub fn from_items(mut items: Vec<T>, template: fn(usize) -> T) -> Self {
        for (index, item) in items.iter_mut().enumerate() {
            item.relabel(index + 1);
        }
        Repeater { items, template }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.items.get_mut(index)
    }

    /// Append a new item built from the template at position `len + 1`.
    pub fn add(&mut self) -> &T {
        let item = (self.template)(self.items.len() + 1);
        self.items.push(item);
        self.items.last().expect("just pushed")
    }

    /// Remove the item at `index`, relabeling the items that shifted down.
    /// Out-of-range indices return `None`.
    pub fn remove(&mut self, index: usize) -> Option<T> {
        if index >= self.items.len() {
            return None;
        }
        let removed = self.items.remove(index);
        for (offset, item) in self.items[index..].iter_mut().enumerate() {
            item.relabel(index + offset + 1);
        }
        Some(removed)
    }

    /// Swap the item at `index` with its predecessor. No-op at the first
    /// position or out of range; returns whether a swap happened.
    pub fn move_up(&mut self, index: usize) -> bool {
        if index == 0 || index >= self.items.len() {
            return false;
        }
        self.items.swap(index - 1, index);
        self.items[index - 1].relabel(index);
        self.items[index].relabel(index + 1);
        true
    }

    /// Swap the item at `index` with its successor. No-op at the last
    /// position or out of range; returns whether a swap happened.
    pub fn move_down(&mut self, index: usize) -> bool {
        if index + 1 >= self.items.len() {
            return false;
        }
        self.items.swap(index, index + 1);
        self.items[index].relabel(index + 1);
        self.items[index + 1].relabel(index + 2);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Labeled {
        name: String,
        label: usize,
    }

    impl RepeaterItem for Labeled {
        fn relabel(&mut self, position: usize) {
            self.label = position;
        }
    }

    fn template(position: usize) -> Labeled {
        Labeled {
            name: format!("new-{position}"),
            label: position,
        }
    }

    fn seeded(names: &[&str]) -> Repeater<Labeled> {
        Repeater::from_items(
            names
                .iter()
                .map(|n| Labeled {
                    name: n.to_string(),
                    label: 0,
                })
                .collect(),
            template,
        )
    }

    fn names(rep: &Repeater<Labeled>) -> Vec<&str> {
        rep.items().iter().map(|i| i.name.as_str()).collect()
    }

    #[test]
    fn add_appends_and_preserves_order() {
        let mut rep = seeded(&["a", "b", "c"]);
        rep.add();
        assert_eq!(rep.len(), 4);
        assert_eq!(names(&rep), vec!["a", "b", "c", "new-4"]);
    }

    #[test]
    fn add_uses_one_based_position() {
        let mut rep = Repeater::new(template);
        assert_eq!(rep.add().name, "new-1");
        assert_eq!(rep.add().name, "new-2");
    }

    #[test]
    fn remove_preserves_relative_order() {
        let mut rep = seeded(&["a", "b", "c", "d"]);
        let removed = rep.remove(1).unwrap();
        assert_eq!(removed.name, "b");
        assert_eq!(names(&rep), vec!["a", "c", "d"]);
    }

    #[test]
    fn remove_relabels_shifted_suffix() {
        let mut rep = seeded(&["a", "b", "c", "d"]);
        rep.remove(1);
        let labels: Vec<usize> = rep.items().iter().map(|i| i.label).collect();
        assert_eq!(labels, vec![1, 2, 3]);
    }

    #[test]
    fn remove_out_of_range_is_none() {
        let mut rep = seeded(&["a"]);
        assert!(rep.remove(5).is_none());
        assert_eq!(rep.len(), 1);
    }

    #[test]
    fn remove_to_empty_inserts_no_placeholder() {
        let mut rep = seeded(&["only"]);
        rep.remove(0);
        assert!(rep.is_empty());
    }

    #[test]
    fn move_up_swaps_adjacent() {
        let mut rep = seeded(&["a", "b", "c"]);
        assert!(rep.move_up(2));
        assert_eq!(names(&rep), vec!["a", "c", "b"]);
    }

    #[test]
    fn move_up_first_is_noop() {
        let mut rep = seeded(&["a", "b"]);
        assert!(!rep.move_up(0));
        assert_eq!(names(&rep), vec!["a", "b"]);
    }

    #[test]
    fn move_down_last_is_noop() {
        let mut rep = seeded(&["a", "b"]);
        assert!(!rep.move_down(1));
        assert_eq!(names(&rep), vec!["a", "b"]);
    }

    #[test]
    fn move_relabels_both_swapped_items() {
        let mut rep = seeded(&["a", "b", "c"]);
        rep.move_down(0);
        let labels: Vec<usize> = rep.items().iter().map(|i| i.label).collect();
        assert_eq!(labels, vec![1, 2, 3]);
        assert_eq!(names(&rep), vec!["b", "a", "c"]);
    }

    #[test]
    fn move_out_of_range_never_panics() {
        let mut rep = seeded(&["a"]);
        assert!(!rep.move_up(7));
        assert!(!rep.move_down(7));
    }

    #[test]
    fn seeded_items_are_relabeled() {
        let rep = seeded(&["a", "b"]);
        assert_eq!(rep.get(0).unwrap().label, 1);
        assert_eq!(rep.get(1).unwrap().label, 2);
    }
}
