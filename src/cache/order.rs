//! Insertion Order Module
//!
//! Tracks the order in which keys entered the cache so the oldest one can be
//! evicted in O(1).

use std::collections::HashMap;

#[derive(Debug)]
struct Node {
    key: String,
    prev: Option<usize>,
    next: Option<usize>,
}

// == Insertion Order ==
/// Doubly linked list of keys stored in a slab, plus a hash index from key
/// to slot.
///
/// - Head = oldest insertion (next eviction candidate)
/// - Tail = newest insertion
///
/// Re-pushing a key that is already tracked leaves its position unchanged,
/// so overwriting a cached value does not make it "younger".
#[derive(Debug, Default)]
pub struct InsertionOrder {
    slots: Vec<Option<Node>>,
    free: Vec<usize>,
    index: HashMap<String, usize>,
    head: Option<usize>,
    tail: Option<usize>,
}

impl InsertionOrder {
    // == Constructor ==
    /// Creates a new empty tracker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a tracker with room for `capacity` keys before reallocating.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            index: HashMap::with_capacity(capacity),
            ..Self::default()
        }
    }

    // == Push Newest ==
    /// Appends `key` as the newest insertion.
    ///
    /// Returns `false` (and keeps the existing position) if the key is
    /// already tracked.
    pub fn push_newest(&mut self, key: &str) -> bool {
        if self.index.contains_key(key) {
            return false;
        }

        let node = Node {
            key: key.to_string(),
            prev: self.tail,
            next: None,
        };
        let slot = match self.free.pop() {
            Some(slot) => {
                self.slots[slot] = Some(node);
                slot
            }
            None => {
                self.slots.push(Some(node));
                self.slots.len() - 1
            }
        };

        match self.tail {
            Some(tail) => {
                if let Some(tail_node) = self.slots[tail].as_mut() {
                    tail_node.next = Some(slot);
                }
            }
            None => self.head = Some(slot),
        }
        self.tail = Some(slot);
        self.index.insert(key.to_string(), slot);
        true
    }

    // == Remove ==
    /// Unlinks `key`. Returns `true` if it was tracked.
    pub fn remove(&mut self, key: &str) -> bool {
        match self.index.remove(key) {
            Some(slot) => {
                self.unlink(slot);
                true
            }
            None => false,
        }
    }

    // == Pop Oldest ==
    /// Removes and returns the oldest key, or `None` if empty.
    pub fn pop_oldest(&mut self) -> Option<String> {
        let slot = self.head?;
        let node = self.unlink(slot)?;
        self.index.remove(&node.key);
        Some(node.key)
    }

    // == Peek Oldest ==
    /// Returns the oldest key without removing it.
    pub fn peek_oldest(&self) -> Option<&str> {
        self.head
            .and_then(|slot| self.slots[slot].as_ref())
            .map(|node| node.key.as_str())
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    // == Clear ==
    /// Drops every tracked key and releases the slab.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
        self.index.clear();
        self.head = None;
        self.tail = None;
    }

    // == Iter ==
    /// Iterates keys from oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        let mut cursor = self.head;
        std::iter::from_fn(move || {
            let node = self.slots[cursor?].as_ref()?;
            cursor = node.next;
            Some(node.key.as_str())
        })
    }

    // Detaches the node in `slot` from its neighbours and frees the slot.
    // The caller is responsible for the index.
    fn unlink(&mut self, slot: usize) -> Option<Node> {
        let node = self.slots[slot].take()?;

        match node.prev {
            Some(prev) => {
                if let Some(prev_node) = self.slots[prev].as_mut() {
                    prev_node.next = node.next;
                }
            }
            None => self.head = node.next,
        }
        match node.next {
            Some(next) => {
                if let Some(next_node) = self.slots[next].as_mut() {
                    next_node.prev = node.prev;
                }
            }
            None => self.tail = node.prev,
        }

        self.free.push(slot);
        Some(node)
    }
}
