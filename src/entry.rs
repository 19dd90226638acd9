use crate::bstmap::BstMap;
use crate::index::{IndexType, NodeIndex};
use crate::node::{Link, Node};

/// A view into a single entry in a map, which may either be vacant or occupied.
#[derive(Debug)]
pub enum Entry<'a, K, V, Ix>
where
    K: Ord,
{
    /// An occupied entry.
    Occupied(OccupiedEntry<'a, K, V, Ix>),
    /// A vacant entry.
    Vacant(VacantEntry<'a, K, V, Ix>),
}

/// A view into an occupied entry in a `BstMap`.
/// It is part of the [`Entry`] enum.
#[derive(Debug)]
pub struct OccupiedEntry<'a, K, V, Ix>
where
    K: Ord,
{
    /// Reference to the map
    pub(crate) map_ref: &'a mut BstMap<K, V, Ix>,
    /// The link that refers to the entry node
    pub(crate) link: Link<Ix>,
    /// The entry node
    pub(crate) node: NodeIndex<Ix>,
}

/// A view into a vacant entry in a `BstMap`.
/// It is part of the [`Entry`] enum.
#[derive(Debug)]
pub struct VacantEntry<'a, K, V, Ix>
where
    K: Ord,
{
    /// Mutable reference to the map
    pub(crate) map_ref: &'a mut BstMap<K, V, Ix>,
    /// Where the new node will hang
    pub(crate) link: Link<Ix>,
    /// The key of this entry
    pub(crate) key: K,
}

impl<'a, K, V, Ix> Entry<'a, K, V, Ix>
where
    K: Ord,
    Ix: IndexType,
{
    /// Returns a reference to this entry's key.
    #[inline]
    pub fn key(&self) -> &K {
        match self {
            Entry::Occupied(entry) => entry.key(),
            Entry::Vacant(entry) => entry.key(),
        }
    }

    /// Ensures a value is in the entry by inserting the default if empty, and returns
    /// a mutable reference to the value in the entry.
    ///
    /// # Example
    /// ```rust
    /// use invoice_store::{BstMap, Entry};
    ///
    /// let mut map = BstMap::new();
    /// assert!(matches!(map.entry(1), Entry::Vacant(_)));
    /// map.entry(1).or_insert(3);
    /// assert!(matches!(map.entry(1), Entry::Occupied(_)));
    /// assert_eq!(map.get(&1), Some(&3));
    /// ```
    #[inline]
    pub fn or_insert(self, default: V) -> &'a mut V {
        match self {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => entry.insert(default),
        }
    }

    /// Like [`Entry::or_insert`], computing the default only when the entry is vacant.
    #[inline]
    pub fn or_insert_with<F: FnOnce() -> V>(self, default: F) -> &'a mut V {
        match self {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => entry.insert(default()),
        }
    }

    /// Provides in-place mutable access to an occupied entry before any
    /// potential inserts into the map.
    ///
    /// # Example
    /// ```rust
    /// use invoice_store::{BstMap, Entry};
    ///
    /// let mut map = BstMap::new();
    ///
    /// map.insert(6, 3);
    /// assert!(matches!(map.entry(6), Entry::Occupied(_)));
    /// map.entry(6).and_modify(|v| *v += 1);
    /// assert_eq!(map.get(&6), Some(&4));
    /// ```
    #[inline]
    #[must_use]
    pub fn and_modify<F>(self, f: F) -> Self
    where
        F: FnOnce(&mut V),
    {
        match self {
            Entry::Occupied(mut entry) => {
                f(entry.get_mut());
                Self::Occupied(entry)
            }
            Entry::Vacant(entry) => Self::Vacant(entry),
        }
    }
}

impl<'a, K, V, Ix> OccupiedEntry<'a, K, V, Ix>
where
    K: Ord,
    Ix: IndexType,
{
    #[inline]
    pub fn key(&self) -> &K {
        self.map_ref.node_ref(self.node, Node::key)
    }

    #[inline]
    pub fn get(&self) -> &V {
        self.map_ref.node_ref(self.node, Node::value)
    }

    #[inline]
    pub fn get_mut(&mut self) -> &mut V {
        self.map_ref.node_mut(self.node, Node::value_mut)
    }

    /// Converts the entry into a mutable reference bound to the map's lifetime.
    #[inline]
    pub fn into_mut(self) -> &'a mut V {
        let map_ref = self.map_ref;
        map_ref.node_mut(self.node, Node::value_mut)
    }

    /// Sets the value of the entry and returns the old one.
    #[inline]
    pub fn insert(&mut self, value: V) -> V {
        self.map_ref.node_mut(self.node, Node::set_value(value))
    }

    /// Takes the value out of the map.
    #[inline]
    pub fn remove(self) -> V {
        self.map_ref.remove_at(self.link, self.node)
    }
}

impl<'a, K, V, Ix> VacantEntry<'a, K, V, Ix>
where
    K: Ord,
    Ix: IndexType,
{
    #[inline]
    pub fn key(&self) -> &K {
        &self.key
    }

    #[inline]
    pub fn into_key(self) -> K {
        self.key
    }

    /// Inserts the value where the search for the key ended, and returns a
    /// mutable reference to it.
    #[inline]
    pub fn insert(self, value: V) -> &'a mut V {
        let VacantEntry { map_ref, link, key } = self;
        let node = map_ref.attach(link, Node::new(key, value));
        map_ref.node_mut(node, Node::value_mut)
    }
}
