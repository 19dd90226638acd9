use std::mem;

use crate::index::{IndexType, NodeIndex};

/// Node of the search tree
#[derive(Debug)]
pub struct Node<K, V, Ix> {
    /// Left children
    pub left: Option<NodeIndex<Ix>>,
    /// Right children
    pub right: Option<NodeIndex<Ix>>,
    /// Key of the node
    pub key: K,
    /// Value of the node
    pub value: V,
}

// Convenient getter/setter methods
impl<K, V, Ix> Node<K, V, Ix>
where
    Ix: IndexType,
{
    pub fn new(key: K, value: V) -> Self {
        Node {
            left: None,
            right: None,
            key,
            value,
        }
    }

    pub fn key(&self) -> &K {
        &self.key
    }

    pub fn value(&self) -> &V {
        &self.value
    }

    pub fn value_mut(&mut self) -> &mut V {
        &mut self.value
    }

    pub fn left(&self) -> Option<NodeIndex<Ix>> {
        self.left
    }

    pub fn right(&self) -> Option<NodeIndex<Ix>> {
        self.right
    }

    pub fn entry(&self) -> (&K, &V) {
        (&self.key, &self.value)
    }

    pub fn set_value(value: V) -> impl FnOnce(&mut Node<K, V, Ix>) -> V {
        move |node: &mut Node<K, V, Ix>| mem::replace(&mut node.value, value)
    }

    /// Overwrites key and value, keeping the children.
    pub fn set_entry(key: K, value: V) -> impl FnOnce(&mut Node<K, V, Ix>) -> (K, V) {
        move |node: &mut Node<K, V, Ix>| {
            let old_key = mem::replace(&mut node.key, key);
            let old_value = mem::replace(&mut node.value, value);
            (old_key, old_value)
        }
    }

    pub fn set_left(left: Option<NodeIndex<Ix>>) -> impl FnOnce(&mut Node<K, V, Ix>) {
        move |node: &mut Node<K, V, Ix>| {
            node.left = left;
        }
    }

    pub fn set_right(right: Option<NodeIndex<Ix>>) -> impl FnOnce(&mut Node<K, V, Ix>) {
        move |node: &mut Node<K, V, Ix>| {
            node.right = right;
        }
    }
}

/// A cell of the node arena
#[derive(Debug)]
pub enum Slot<K, V, Ix> {
    /// Holds a live node
    Occupied(Node<K, V, Ix>),
    /// Free cell, chained to the next free one
    Vacant { next: Option<NodeIndex<Ix>> },
}

/// The place that refers to a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Link<Ix> {
    /// The root of the tree
    Root,
    /// Left child of the given parent
    Left(NodeIndex<Ix>),
    /// Right child of the given parent
    Right(NodeIndex<Ix>),
}
