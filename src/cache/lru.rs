//! LRU Recency List Module
//!
//! Arena-backed doubly linked list ordering cache entries by recency of use.

/// Null link marker for `prev`/`next`/`head`/`tail`.
const NIL: usize = usize::MAX;

// == Handle ==
/// Stable, copyable, non-owning reference to a node in a [`RecencyList`].
///
/// A handle stays valid until its node is removed; after that the slot may be
/// reused by a later insertion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct Handle(usize);

#[derive(Debug)]
struct Node<T> {
    item: Option<T>,
    prev: usize,
    next: usize,
}

// == Recency List ==
/// Ordering of items by recency of use.
///
/// - Front = Most recently used
/// - Back = Least recently used
///
/// All operations are O(1). Removed slots go onto a free list and are
/// recycled, so the arena never grows past the peak number of live items.
#[derive(Debug)]
pub(crate) struct RecencyList<T> {
    nodes: Vec<Node<T>>,
    head: usize,
    tail: usize,
    free: usize,
    len: usize,
}

impl<T> RecencyList<T> {
    // == Constructor ==
    /// Creates an empty list with room for `capacity` items before reallocating.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
            head: NIL,
            tail: NIL,
            free: NIL,
            len: 0,
        }
    }

    // == Push Front ==
    /// Inserts an item as the most recently used and returns its handle.
    pub fn push_front(&mut self, item: T) -> Handle {
        let idx = if self.free != NIL {
            let idx = self.free;
            self.free = self.nodes[idx].next;
            self.nodes[idx] = Node {
                item: Some(item),
                prev: NIL,
                next: NIL,
            };
            idx
        } else {
            self.nodes.push(Node {
                item: Some(item),
                prev: NIL,
                next: NIL,
            });
            self.nodes.len() - 1
        };

        self.link_front(idx);
        self.len += 1;
        Handle(idx)
    }

    // == Move To Front ==
    /// Marks an item as most recently used. A removed handle is ignored.
    pub fn move_to_front(&mut self, handle: Handle) {
        let idx = handle.0;
        if self.head == idx || self.get(handle).is_none() {
            return;
        }
        self.unlink(idx);
        self.link_front(idx);
    }

    // == Remove ==
    /// Removes an item and returns it. The handle must not be used afterwards.
    pub fn remove(&mut self, handle: Handle) -> Option<T> {
        let idx = handle.0;
        let item = self.nodes.get_mut(idx)?.item.take()?;

        self.unlink(idx);
        self.nodes[idx].next = self.free;
        self.free = idx;
        self.len -= 1;
        Some(item)
    }

    // == Back ==
    /// Returns the handle of the least recently used item.
    pub fn back(&self) -> Option<Handle> {
        (self.tail != NIL).then_some(Handle(self.tail))
    }

    /// Removes and returns the least recently used item.
    pub fn pop_back(&mut self) -> Option<T> {
        let handle = self.back()?;
        self.remove(handle)
    }

    // == Access ==
    /// Returns the item behind a handle.
    pub fn get(&self, handle: Handle) -> Option<&T> {
        self.nodes.get(handle.0)?.item.as_ref()
    }

    /// Returns the item behind a handle mutably. Recency is left unchanged.
    pub fn get_mut(&mut self, handle: Handle) -> Option<&mut T> {
        self.nodes.get_mut(handle.0)?.item.as_mut()
    }

    // == Length ==
    /// Returns the number of items in the list.
    pub fn len(&self) -> usize {
        self.len
    }

    // == Iter ==
    /// Iterates from most to least recently used.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            cursor: self.head,
        }
    }

    fn link_front(&mut self, idx: usize) {
        self.nodes[idx].prev = NIL;
        self.nodes[idx].next = self.head;
        if self.head != NIL {
            self.nodes[self.head].prev = idx;
        } else {
            self.tail = idx;
        }
        self.head = idx;
    }

    fn unlink(&mut self, idx: usize) {
        let (prev, next) = (self.nodes[idx].prev, self.nodes[idx].next);

        if prev != NIL {
            self.nodes[prev].next = next;
        } else {
            self.head = next;
        }
        if next != NIL {
            self.nodes[next].prev = prev;
        } else {
            self.tail = prev;
        }

        self.nodes[idx].prev = NIL;
        self.nodes[idx].next = NIL;
    }
}

/// Front-to-back iterator over a [`RecencyList`].
pub(crate) struct Iter<'a, T> {
    list: &'a RecencyList<T>,
    cursor: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.cursor == NIL {
            return None;
        }
        let node = &self.list.nodes[self.cursor];
        self.cursor = node.next;
        node.item.as_ref()
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    fn order(list: &RecencyList<&'static str>) -> Vec<&'static str> {
        list.iter().copied().collect()
    }

    #[test]
    fn test_list_new() {
        let list: RecencyList<u32> = RecencyList::with_capacity(4);
        assert_eq!(list.len(), 0);
        assert_eq!(list.back(), None);
    }

    #[test]
    fn test_push_front_order() {
        let mut list = RecencyList::with_capacity(4);

        list.push_front("key1");
        list.push_front("key2");
        list.push_front("key3");

        assert_eq!(list.len(), 3);
        assert_eq!(order(&list), vec!["key3", "key2", "key1"]);
        // key1 is oldest (added first)
        let back = list.back().unwrap();
        assert_eq!(list.get(back), Some(&"key1"));
    }

    #[test]
    fn test_move_to_front() {
        let mut list = RecencyList::with_capacity(4);

        let a = list.push_front("a");
        list.push_front("b");
        list.push_front("c");

        list.move_to_front(a);

        assert_eq!(order(&list), vec!["a", "c", "b"]);
        assert_eq!(list.pop_back(), Some("b"));
    }

    #[test]
    fn test_move_middle_and_head() {
        let mut list = RecencyList::with_capacity(4);

        list.push_front("a");
        let b = list.push_front("b");
        let c = list.push_front("c");

        list.move_to_front(b);
        assert_eq!(order(&list), vec!["b", "c", "a"]);

        // Moving the head is a no-op
        list.move_to_front(b);
        assert_eq!(order(&list), vec!["b", "c", "a"]);

        list.move_to_front(c);
        assert_eq!(order(&list), vec!["c", "b", "a"]);
    }

    #[test]
    fn test_pop_back_drains_in_lru_order() {
        let mut list = RecencyList::with_capacity(4);

        list.push_front("a");
        list.push_front("b");
        list.push_front("c");

        assert_eq!(list.pop_back(), Some("a"));
        assert_eq!(list.pop_back(), Some("b"));
        assert_eq!(list.pop_back(), Some("c"));
        assert_eq!(list.pop_back(), None);
        assert_eq!(list.len(), 0);
    }

    #[test]
    fn test_remove_middle() {
        let mut list = RecencyList::with_capacity(4);

        list.push_front("key1");
        let key2 = list.push_front("key2");
        list.push_front("key3");

        assert_eq!(list.remove(key2), Some("key2"));
        assert_eq!(list.len(), 2);
        assert_eq!(order(&list), vec!["key3", "key1"]);
        assert_eq!(list.get(key2), None);
    }

    #[test]
    fn test_remove_twice_is_none() {
        let mut list = RecencyList::with_capacity(4);
        let a = list.push_front("a");

        assert_eq!(list.remove(a), Some("a"));
        assert_eq!(list.remove(a), None);
        assert_eq!(list.len(), 0);
    }

    #[test]
    fn test_freed_slots_are_reused() {
        let mut list = RecencyList::with_capacity(2);

        let a = list.push_front("a");
        list.push_front("b");
        list.remove(a);
        let c = list.push_front("c");

        assert_eq!(c, a);
        assert_eq!(list.nodes.len(), 2);
        assert_eq!(order(&list), vec!["c", "b"]);
    }

    #[test]
    fn test_single_item_list() {
        let mut list = RecencyList::with_capacity(4);
        let only = list.push_front(7);

        assert_eq!(list.back(), Some(only));
        list.move_to_front(only);
        assert_eq!(list.remove(only), Some(7));
        assert_eq!(list.back(), None);
        assert_eq!(list.iter().count(), 0);
    }

    #[test]
    fn test_move_removed_handle_is_ignored() {
        let mut list = RecencyList::with_capacity(4);

        list.push_front("a");
        let b = list.push_front("b");
        list.push_front("c");
        list.remove(b);

        // b's slot now sits on the free list
        list.move_to_front(b);

        assert_eq!(list.len(), 2);
        assert_eq!(order(&list), vec!["c", "a"]);
        assert_eq!(list.pop_back(), Some("a"));
        assert_eq!(list.pop_back(), Some("c"));
        assert_eq!(list.pop_back(), None);
    }

    #[test]
    fn test_get_mut_keeps_order() {
        let mut list = RecencyList::with_capacity(4);
        let a = list.push_front(1);
        list.push_front(2);

        *list.get_mut(a).unwrap() = 10;

        assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![2, 10]);
    }
}
