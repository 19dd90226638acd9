use std::iter::FusedIterator;

use crate::bstmap::BstMap;
use crate::index::{DefaultIx, IndexType, NodeIndex};
use crate::node::Node;

/// Pushes a link of nodes on the left to stack.
fn left_link<K, V, Ix>(
    map_ref: &BstMap<K, V, Ix>,
    stack: &mut Vec<NodeIndex<Ix>>,
    mut x: Option<NodeIndex<Ix>>,
) where
    Ix: IndexType,
{
    while let Some(cur) = x {
        stack.push(cur);
        x = map_ref.node_ref(cur, Node::left);
    }
}

/// An iterator over the entries of a `BstMap`, in ascending key order.
#[derive(Debug)]
pub struct Iter<'a, K, V, Ix = DefaultIx> {
    /// Reference to the map
    map_ref: &'a BstMap<K, V, Ix>,
    /// Stack for iteration
    stack: Vec<NodeIndex<Ix>>,
    /// Entries not yet yielded
    remaining: usize,
}

impl<'a, K, V, Ix> Iter<'a, K, V, Ix>
where
    Ix: IndexType,
{
    pub(crate) fn new(map_ref: &'a BstMap<K, V, Ix>) -> Self {
        let mut stack = Vec::new();
        left_link(map_ref, &mut stack, map_ref.root);
        Iter {
            map_ref,
            stack,
            remaining: map_ref.len,
        }
    }
}

impl<'a, K, V, Ix> Iterator for Iter<'a, K, V, Ix>
where
    Ix: IndexType,
{
    type Item = (&'a K, &'a V);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let x = self.stack.pop()?;
        left_link(
            self.map_ref,
            &mut self.stack,
            self.map_ref.node_ref(x, Node::right),
        );
        self.remaining -= 1;
        Some(self.map_ref.node_ref(x, Node::entry))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V, Ix: IndexType> ExactSizeIterator for Iter<'_, K, V, Ix> {}

impl<K, V, Ix: IndexType> FusedIterator for Iter<'_, K, V, Ix> {}

impl<K, V, Ix: IndexType> Clone for Iter<'_, K, V, Ix> {
    fn clone(&self) -> Self {
        Iter {
            map_ref: self.map_ref,
            stack: self.stack.clone(),
            remaining: self.remaining,
        }
    }
}

/// An iterator over the values of a `BstMap`, in ascending key order.
#[derive(Debug)]
pub struct Values<'a, K, V, Ix = DefaultIx> {
    pub(crate) inner: Iter<'a, K, V, Ix>,
}

impl<K, V, Ix: IndexType> Clone for Values<'_, K, V, Ix> {
    fn clone(&self) -> Self {
        Values {
            inner: self.inner.clone(),
        }
    }
}

impl<'a, K, V, Ix> Iterator for Values<'a, K, V, Ix>
where
    Ix: IndexType,
{
    type Item = &'a V;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(_, v)| v)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V, Ix: IndexType> ExactSizeIterator for Values<'_, K, V, Ix> {}

impl<K, V, Ix: IndexType> FusedIterator for Values<'_, K, V, Ix> {}

/// An owning iterator over the entries of a `BstMap`, in ascending key order.
#[derive(Debug)]
pub struct IntoIter<K, V, Ix = DefaultIx> {
    map: BstMap<K, V, Ix>,
    /// Stack for iteration
    stack: Vec<NodeIndex<Ix>>,
}

impl<K, V, Ix> IntoIter<K, V, Ix>
where
    Ix: IndexType,
{
    pub(crate) fn new(map: BstMap<K, V, Ix>) -> Self {
        let mut stack = Vec::new();
        left_link(&map, &mut stack, map.root);
        IntoIter { map, stack }
    }
}

impl<K, V, Ix> Iterator for IntoIter<K, V, Ix>
where
    Ix: IndexType,
{
    type Item = (K, V);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let x = self.stack.pop()?;
        // children of x are still occupied, only x leaves the arena
        let node = self.map.release(x);
        left_link(&self.map, &mut self.stack, node.right);
        self.map.len -= 1;
        Some((node.key, node.value))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.map.len, Some(self.map.len))
    }
}

impl<K, V, Ix: IndexType> ExactSizeIterator for IntoIter<K, V, Ix> {}

impl<K, V, Ix: IndexType> FusedIterator for IntoIter<K, V, Ix> {}
