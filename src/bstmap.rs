use std::cmp::Ordering;
use std::collections::VecDeque;
use std::mem;

use crate::entry::{Entry, OccupiedEntry, VacantEntry};
use crate::index::{DefaultIx, IndexType, NodeIndex};
use crate::iter::{IntoIter, Iter, Values};
use crate::node::{Link, Node, Slot};

/// An ordered map backed by an unbalanced binary search tree.
///
/// Nodes are stored in a vector of slots and refer to their children by index.
/// Slots vacated by removals are chained into a free list and reused.
#[derive(Debug)]
pub struct BstMap<K, V, Ix = DefaultIx> {
    /// Vector that stores nodes
    pub(crate) slots: Vec<Slot<K, V, Ix>>,
    /// Root of the tree, `None` when the map is empty
    pub(crate) root: Option<NodeIndex<Ix>>,
    /// Head of the free list
    pub(crate) free: Option<NodeIndex<Ix>>,
    /// Number of elements in the map
    pub(crate) len: usize,
}

impl<K, V, Ix> BstMap<K, V, Ix>
where
    K: Ord,
    Ix: IndexType,
{
    /// Creates a new `BstMap` with estimated capacity.
    #[inline]
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        BstMap {
            slots: Vec::with_capacity(capacity),
            root: None,
            free: None,
            len: 0,
        }
    }

    /// Insert a key-value pair into the map.
    /// If the key exists, overwrite and return the previous value.
    ///
    /// No rebalancing takes place, so inserting keys in sorted order builds a
    /// tree whose height equals its length.
    ///
    /// # Panics
    ///
    /// This method panics when the tree is at the maximum number of nodes for its index
    ///
    /// # Example
    /// ```rust
    /// use invoice_store::BstMap;
    ///
    /// let mut map = BstMap::new();
    /// assert_eq!(map.insert(3, "a"), None);
    /// assert_eq!(map.insert(3, "b"), Some("a"));
    /// assert_eq!(map.get(&3), Some(&"b"));
    /// ```
    #[inline]
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        match self.locate(&key) {
            (_, Some(x)) => Some(self.node_mut(x, Node::set_value(value))),
            (link, None) => {
                let _ignore = self.attach(link, Node::new(key, value));
                None
            }
        }
    }

    /// Remove a key from the map, returning the value at the key if the key exists
    ///
    /// # Example
    /// ```rust
    /// use invoice_store::BstMap;
    ///
    /// let mut map = BstMap::new();
    /// map.insert(2, 'b');
    /// map.insert(1, 'a');
    /// map.insert(3, 'c');
    /// assert_eq!(map.remove(&5), None);
    /// assert_eq!(map.remove(&2), Some('b'));
    /// assert_eq!(map.iter().map(|(k, _)| *k).collect::<Vec<_>>(), vec![1, 3]);
    /// ```
    #[inline]
    pub fn remove(&mut self, key: &K) -> Option<V> {
        match self.locate(key) {
            (link, Some(z)) => Some(self.remove_at(link, z)),
            (_, None) => None,
        }
    }

    /// Return reference to the value corresponding to the key.
    #[inline]
    pub fn get(&self, key: &K) -> Option<&V> {
        self.locate(key).1.map(|x| self.node_ref(x, Node::value))
    }

    /// Return a mutable reference to the value corresponding to the key.
    ///
    /// # Example
    /// ```rust
    /// use invoice_store::BstMap;
    ///
    /// let mut map = BstMap::new();
    /// map.insert(3, 0);
    /// if let Some(v) = map.get_mut(&3) {
    ///     *v += 1;
    /// }
    /// assert_eq!(map.get(&3), Some(&1));
    /// ```
    #[inline]
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        let x = self.locate(key).1?;
        Some(self.node_mut(x, Node::value_mut))
    }

    /// Return `true` if the map holds the key.
    #[inline]
    pub fn contains_key(&self, key: &K) -> bool {
        self.locate(key).1.is_some()
    }

    /// Get an iterator over the entries of the map, sorted by key.
    #[inline]
    #[must_use]
    pub fn iter(&self) -> Iter<'_, K, V, Ix> {
        Iter::new(self)
    }

    /// Get an iterator over the values of the map, sorted by key.
    #[inline]
    #[must_use]
    pub fn values(&self) -> Values<'_, K, V, Ix> {
        Values { inner: self.iter() }
    }

    /// Get the given key's corresponding entry in the map for in-place manipulation.
    ///
    /// # Example
    /// ```rust
    /// use invoice_store::{BstMap, Entry};
    ///
    /// let mut map = BstMap::new();
    ///
    /// assert!(matches!(map.entry(1), Entry::Vacant(_)));
    /// map.entry(1).or_insert(0);
    /// assert!(matches!(map.entry(1), Entry::Occupied(_)));
    /// map.entry(1).and_modify(|v| *v += 1);
    /// assert_eq!(map.get(&1), Some(&1));
    /// ```
    #[inline]
    pub fn entry(&mut self, key: K) -> Entry<'_, K, V, Ix> {
        match self.locate(&key) {
            (link, Some(node)) => Entry::Occupied(OccupiedEntry {
                map_ref: self,
                link,
                node,
            }),
            (link, None) => Entry::Vacant(VacantEntry {
                map_ref: self,
                link,
                key,
            }),
        }
    }

    /// Number of levels on the longest path from the root to a leaf.
    ///
    /// An empty map has height 0 and a single element has height 1.
    #[must_use]
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut queue = VecDeque::new();
        queue.extend(self.root.map(|r| (r, 1)));
        while let Some((x, depth)) = queue.pop_front() {
            height = height.max(depth);
            let (left, right) = self.node_ref(x, |xn| (xn.left, xn.right));
            queue.extend(left.map(|l| (l, depth + 1)));
            queue.extend(right.map(|r| (r, depth + 1)));
        }
        height
    }

    /// Remove all elements from the map
    #[inline]
    pub fn clear(&mut self) {
        self.slots.clear();
        self.root = None;
        self.free = None;
        self.len = 0;
    }

    /// Return the number of elements in the map.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Return `true` if the map contains no elements.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<K, V> BstMap<K, V>
where
    K: Ord,
{
    /// Create an empty `BstMap`
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(0)
    }
}

impl<K, V, Ix> Default for BstMap<K, V, Ix>
where
    K: Ord,
    Ix: IndexType,
{
    #[inline]
    fn default() -> Self {
        Self::with_capacity(0)
    }
}

impl<K, V, Ix> BstMap<K, V, Ix>
where
    K: Ord,
    Ix: IndexType,
{
    /// Descend from the root towards `key`.
    ///
    /// Returns the link that refers (or would refer) to the key's node,
    /// together with the node when the key is present.
    fn locate(&self, key: &K) -> (Link<Ix>, Option<NodeIndex<Ix>>) {
        let mut link = Link::Root;
        let mut x = self.root;
        while let Some(cur) = x {
            match key.cmp(self.node_ref(cur, Node::key)) {
                Ordering::Equal => return (link, Some(cur)),
                Ordering::Less => {
                    link = Link::Left(cur);
                    x = self.node_ref(cur, Node::left);
                }
                Ordering::Greater => {
                    link = Link::Right(cur);
                    x = self.node_ref(cur, Node::right);
                }
            }
        }
        (link, None)
    }

    /// Store a fresh leaf and hang it on `link`.
    pub(crate) fn attach(&mut self, link: Link<Ix>, node: Node<K, V, Ix>) -> NodeIndex<Ix> {
        let z = self.alloc(node);
        self.relink(link, Some(z));
        self.len = self.len.wrapping_add(1);
        z
    }

    /// Unlink node `z`, which is referred to by `link`, and return its value.
    pub(crate) fn remove_at(&mut self, link: Link<Ix>, z: NodeIndex<Ix>) -> V {
        let (left, right) = self.node_ref(z, |zn| (zn.left, zn.right));
        let value = match (left, right) {
            (None, _) => {
                self.relink(link, right);
                self.release(z).value
            }
            (_, None) => {
                self.relink(link, left);
                self.release(z).value
            }
            (Some(_), Some(right)) => {
                // The successor has no left child, so splicing it out only
                // lifts its right subtree. Its entry then takes z's place.
                let (succ_link, y) = self.tree_minimum(Link::Right(z), right);
                let y_right = self.node_ref(y, Node::right);
                self.relink(succ_link, y_right);
                let successor = self.release(y);
                let (_key, value) =
                    self.node_mut(z, Node::set_entry(successor.key, successor.value));
                value
            }
        };
        self.len = self.len.wrapping_sub(1);
        value
    }

    /// Find the node with the minimum key in the subtree rooted at `x`.
    fn tree_minimum(
        &self,
        mut link: Link<Ix>,
        mut x: NodeIndex<Ix>,
    ) -> (Link<Ix>, NodeIndex<Ix>) {
        while let Some(left) = self.node_ref(x, Node::left) {
            link = Link::Left(x);
            x = left;
        }
        (link, x)
    }
}

impl<K, V, Ix> BstMap<K, V, Ix>
where
    Ix: IndexType,
{
    /// Point `link` at `child`.
    fn relink(&mut self, link: Link<Ix>, child: Option<NodeIndex<Ix>>) {
        match link {
            Link::Root => self.root = child,
            Link::Left(p) => self.node_mut(p, Node::set_left(child)),
            Link::Right(p) => self.node_mut(p, Node::set_right(child)),
        }
    }

    /// Place a node into a free slot, reusing vacated slots first.
    fn alloc(&mut self, node: Node<K, V, Ix>) -> NodeIndex<Ix> {
        if let Some(idx) = self.free {
            match mem::replace(&mut self.slots[idx.index()], Slot::Occupied(node)) {
                Slot::Vacant { next } => self.free = next,
                Slot::Occupied(_) => unreachable!("free list refers to occupied {:?}", idx),
            }
            return idx;
        }
        let Some(idx) = NodeIndex::try_new(self.slots.len()) else {
            panic!("Reached maximum number of nodes");
        };
        self.slots.push(Slot::Occupied(node));
        idx
    }

    /// Vacate a slot and push it onto the free list.
    pub(crate) fn release(&mut self, idx: NodeIndex<Ix>) -> Node<K, V, Ix> {
        let vacant = Slot::Vacant { next: self.free };
        match mem::replace(&mut self.slots[idx.index()], vacant) {
            Slot::Occupied(node) => {
                self.free = Some(idx);
                node
            }
            Slot::Vacant { .. } => unreachable!("{:?} released twice", idx),
        }
    }
}

// Convenient methods for reference or mutate a node
impl<'a, K, V, Ix> BstMap<K, V, Ix>
where
    Ix: IndexType,
{
    pub(crate) fn node_ref<F, R>(&'a self, node: NodeIndex<Ix>, op: F) -> R
    where
        R: 'a,
        F: FnOnce(&'a Node<K, V, Ix>) -> R,
    {
        match &self.slots[node.index()] {
            Slot::Occupied(n) => op(n),
            Slot::Vacant { .. } => unreachable!("link to vacant {:?}", node),
        }
    }

    pub(crate) fn node_mut<F, R>(&'a mut self, node: NodeIndex<Ix>, op: F) -> R
    where
        R: 'a,
        F: FnOnce(&'a mut Node<K, V, Ix>) -> R,
    {
        match &mut self.slots[node.index()] {
            Slot::Occupied(n) => op(n),
            Slot::Vacant { .. } => unreachable!("link to vacant {:?}", node),
        }
    }
}

impl<'a, K, V, Ix> IntoIterator for &'a BstMap<K, V, Ix>
where
    K: Ord,
    Ix: IndexType,
{
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V, Ix>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K, V, Ix> IntoIterator for BstMap<K, V, Ix>
where
    K: Ord,
    Ix: IndexType,
{
    type Item = (K, V);
    type IntoIter = IntoIter<K, V, Ix>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self)
    }
}

impl<K, V, Ix> Extend<(K, V)> for BstMap<K, V, Ix>
where
    K: Ord,
    Ix: IndexType,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (k, v) in iter {
            let _ignore = self.insert(k, v);
        }
    }
}

impl<K, V, Ix> FromIterator<(K, V)> for BstMap<K, V, Ix>
where
    K: Ord,
    Ix: IndexType,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::default();
        map.extend(iter);
        map
    }
}
