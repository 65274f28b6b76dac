//! Ordered, searchable index over catalog items.

use crate::item::Item;
use crate::types::ItemId;

/// One node of the title-ordered tree.
#[derive(Debug, Clone)]
struct Node {
    item: Item,
    left: Option<Box<Node>>,
    right: Option<Box<Node>>,
}

impl Node {
    fn new(item: Item) -> Self {
        Self {
            item,
            left: None,
            right: None,
        }
    }
}

/// A binary search tree of items keyed by title.
///
/// Ties on title go right (non-strict right bias), so multiple copies of
/// the same title coexist and are distinguished only by identifier. The
/// tree is deliberately unbalanced; pathological insert orders degrade
/// to linear depth, which is acceptable for small catalogs.
///
/// The tree has exactly ONE ordering key: the title. All
/// identifier-keyed operations (`get`, `get_mut`, `remove`) are full
/// scans, which keeps deletion correct under duplicate titles at the
/// cost of O(n) lookup.
///
/// `ItemIndex` also owns identifier assignment for its namespace:
/// inserting an item with identifier n guarantees the next assigned
/// identifier is at least n + 1, so reloading a snapshot recomputes the
/// counter as max(existing) + 1.
#[derive(Debug, Clone, Default)]
pub struct ItemIndex {
    root: Option<Box<Node>>,
    next_id: u64,
    len: usize,
}

impl ItemIndex {
    /// Creates an empty index.
    #[must_use]
    pub fn new() -> Self {
        Self {
            root: None,
            next_id: 1,
            len: 0,
        }
    }

    /// Returns the number of items in the index.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the index holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the identifier the next [`ItemIndex::add`] will assign.
    #[must_use]
    pub fn next_id(&self) -> ItemId {
        ItemId::new(self.next_id.max(1))
    }

    /// Creates an item with the next sequential identifier and inserts it.
    pub fn add(&mut self, title: impl Into<String>, author: impl Into<String>) -> ItemId {
        let id = self.next_id();
        self.insert(Item::new(id, title, author));
        id
    }

    /// Inserts an existing item, advancing the identifier counter past it.
    pub fn insert(&mut self, item: Item) {
        self.next_id = self.next_id.max(item.id().as_u64() + 1);
        self.len += 1;
        Self::insert_node(&mut self.root, item);
    }

    fn insert_node(slot: &mut Option<Box<Node>>, item: Item) {
        match slot {
            None => *slot = Some(Box::new(Node::new(item))),
            Some(node) => {
                if item.title() < node.item.title() {
                    Self::insert_node(&mut node.left, item);
                } else {
                    Self::insert_node(&mut node.right, item);
                }
            }
        }
    }

    /// Finds items whose title contains `query`, case-insensitively.
    ///
    /// At each node whose title contains the query, the node matches and
    /// both subtrees are searched; otherwise one subtree is pruned by
    /// lexicographic comparison. Results come back in the structural
    /// order this produces: matching node first, then matches from its
    /// left subtree, then from its right. Callers relying on "the first
    /// match" (waitlist admission) get that order.
    ///
    /// Pruning is a heuristic, not exhaustive: a non-matching node
    /// descends into exactly one subtree, so a title containing the
    /// query is skipped when it lies in the pruned subtree (a short
    /// needle that sorts away from its match never reaches it). Only
    /// matches along the visited path are returned. Accepted
    /// limitation; querying a longer prefix of the title reaches it.
    ///
    /// An empty query matches every title. A miss yields an empty vec,
    /// never an error.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<&Item> {
        let needle = query.to_lowercase();
        let mut matches = Vec::new();
        Self::search_node(self.root.as_deref(), &needle, &mut matches);
        matches
    }

    fn search_node<'a>(node: Option<&'a Node>, needle: &str, out: &mut Vec<&'a Item>) {
        let Some(node) = node else { return };
        let title = node.item.title().to_lowercase();
        if title.contains(needle) {
            out.push(&node.item);
            Self::search_node(node.left.as_deref(), needle, out);
            Self::search_node(node.right.as_deref(), needle, out);
        } else if needle < title.as_str() {
            Self::search_node(node.left.as_deref(), needle, out);
        } else {
            Self::search_node(node.right.as_deref(), needle, out);
        }
    }

    /// Returns every item in ascending title order.
    #[must_use]
    pub fn in_order(&self) -> Vec<&Item> {
        let mut items = Vec::with_capacity(self.len);
        Self::in_order_node(self.root.as_deref(), &mut items);
        items
    }

    fn in_order_node<'a>(node: Option<&'a Node>, out: &mut Vec<&'a Item>) {
        if let Some(node) = node {
            Self::in_order_node(node.left.as_deref(), out);
            out.push(&node.item);
            Self::in_order_node(node.right.as_deref(), out);
        }
    }

    /// Looks up an item by identifier.
    #[must_use]
    pub fn get(&self, id: ItemId) -> Option<&Item> {
        Self::find(self.root.as_deref(), id)
    }

    fn find(node: Option<&Node>, id: ItemId) -> Option<&Item> {
        let node = node?;
        if node.item.id() == id {
            return Some(&node.item);
        }
        Self::find(node.left.as_deref(), id).or_else(|| Self::find(node.right.as_deref(), id))
    }

    /// Looks up an item by identifier for mutation.
    pub fn get_mut(&mut self, id: ItemId) -> Option<&mut Item> {
        Self::find_mut(self.root.as_deref_mut(), id)
    }

    fn find_mut(node: Option<&mut Node>, id: ItemId) -> Option<&mut Item> {
        let node = node?;
        if node.item.id() == id {
            Some(&mut node.item)
        } else if Self::contains(node.left.as_deref(), id) {
            Self::find_mut(node.left.as_deref_mut(), id)
        } else {
            Self::find_mut(node.right.as_deref_mut(), id)
        }
    }

    fn contains(node: Option<&Node>, id: ItemId) -> bool {
        Self::find(node, id).is_some()
    }

    /// Removes an item by identifier.
    ///
    /// The node is located by scanning (the tree is ordered by title,
    /// not identifier) and spliced out with standard BST deletion: a
    /// two-child node is replaced by its in-order successor, which keeps
    /// the title ordering intact.
    pub fn remove(&mut self, id: ItemId) -> Option<Item> {
        let mut removed = None;
        let root = self.root.take();
        self.root = Self::remove_node(root, id, &mut removed);
        if removed.is_some() {
            self.len -= 1;
        }
        removed
    }

    fn remove_node(
        node: Option<Box<Node>>,
        id: ItemId,
        removed: &mut Option<Item>,
    ) -> Option<Box<Node>> {
        let mut node = node?;
        if node.item.id() == id {
            return match (node.left.take(), node.right.take()) {
                (None, right) => {
                    *removed = Some(node.item);
                    right
                }
                (left, None) => {
                    *removed = Some(node.item);
                    left
                }
                (left, Some(right)) => {
                    let (rest, successor) = Self::detach_min(right);
                    *removed = Some(std::mem::replace(&mut node.item, successor));
                    node.left = left;
                    node.right = rest;
                    Some(node)
                }
            };
        }

        node.left = Self::remove_node(node.left.take(), id, removed);
        if removed.is_none() {
            node.right = Self::remove_node(node.right.take(), id, removed);
        }
        Some(node)
    }

    /// Detaches the minimum node of a subtree, returning the remaining
    /// subtree and the detached item.
    fn detach_min(mut node: Box<Node>) -> (Option<Box<Node>>, Item) {
        match node.left.take() {
            Some(left) => {
                let (rest, min) = Self::detach_min(left);
                node.left = rest;
                (Some(node), min)
            }
            None => (node.right.take(), node.item),
        }
    }
}
