//! Arena addressing.
//!
//! A [`BstMap`](crate::BstMap) stores its nodes in a `Vec` and links them by
//! position. Positions are kept in a narrow integer (`u32` unless another
//! [`IndexType`] is chosen) so a node with two children costs two small words
//! instead of two pointers.

use std::fmt;
use std::hash::Hash;

/// Index width used by [`BstMap`](crate::BstMap) when none is given.
pub type DefaultIx = u32;

/// Unsigned integer that names a slot of the node arena.
///
/// # Safety
///
/// For every `slot` where `from_slot(slot)` is `Some(ix)`, `ix.slot()` must
/// equal `slot`. The map indexes its arena with the returned value without
/// further checks on the link structure.
pub unsafe trait IndexType: Copy + Default + Hash + Ord + fmt::Debug + 'static {
    /// Narrow `slot`, or `None` if it does not fit.
    fn from_slot(slot: usize) -> Option<Self>;

    /// Widen back to an arena position.
    fn slot(self) -> usize;
}

macro_rules! impl_index_type {
    ($($t:ty),*) => {
        $(
            unsafe impl IndexType for $t {
                #[inline(always)]
                fn from_slot(slot: usize) -> Option<Self> {
                    <$t>::try_from(slot).ok()
                }

                #[inline(always)]
                fn slot(self) -> usize {
                    // only values produced by `from_slot` reach here
                    self as usize
                }
            }
        )*
    };
}

impl_index_type!(u16, u32, u64, usize);

/// Position of a node in the arena.
#[derive(Copy, Clone, Default, PartialEq, PartialOrd, Eq, Ord, Hash)]
pub struct NodeIndex<Ix = DefaultIx>(Ix);

impl<Ix: IndexType> NodeIndex<Ix> {
    /// Address slot `slot`, or `None` once the arena has outgrown `Ix`.
    #[inline]
    pub fn try_new(slot: usize) -> Option<Self> {
        Ix::from_slot(slot).map(NodeIndex)
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0.slot()
    }
}

impl<Ix: fmt::Debug> fmt::Debug for NodeIndex<Ix> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "NodeIndex({:?})", self.0)
    }
}
