use core::fmt;

use super::SkipList;
use crate::{arena::NodeId, node::Direction};

/// A handle to one node of a [`SkipList`].
///
/// The handle borrows the list, so it can not outlive a mutation of it.
pub struct Entry<'a, T> {
  list: &'a SkipList<T>,
  id: NodeId,
}

impl<T> Clone for Entry<'_, T> {
  #[inline]
  fn clone(&self) -> Self {
    *self
  }
}

impl<T> Copy for Entry<'_, T> {}

impl<T: fmt::Debug> fmt::Debug for Entry<'_, T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Entry")
      .field("value", self.value())
      .field("height", &self.height())
      .finish()
  }
}

impl<'a, T> Entry<'a, T> {
  #[inline]
  pub(super) const fn new(list: &'a SkipList<T>, id: NodeId) -> Self {
    Self { list, id }
  }

  /// Returns the element stored in the node.
  #[inline]
  pub fn value(&self) -> &'a T {
    self.list.arena()[self.id].value()
  }

  /// Returns the number of levels the node takes part in.
  #[inline]
  pub fn height(&self) -> usize {
    self.list.arena()[self.id].height()
  }

  /// Returns the next entry in ascending order.
  #[inline]
  pub fn next(&self) -> Option<Self> {
    self.next_at(0)
  }

  /// Returns the previous entry in ascending order.
  #[inline]
  pub fn prev(&self) -> Option<Self> {
    self.prev_at(0)
  }

  /// Returns the nearest following entry which is taller than `level`.
  ///
  /// `None` if there is no such entry, or `level` is not below [`height`](Self::height).
  #[inline]
  pub fn next_at(&self, level: usize) -> Option<Self> {
    self.link(level, Direction::Forward)
  }

  /// Returns the nearest preceding entry which is taller than `level`.
  ///
  /// `None` if there is no such entry, or `level` is not below [`height`](Self::height).
  #[inline]
  pub fn prev_at(&self, level: usize) -> Option<Self> {
    self.link(level, Direction::Backward)
  }

  #[inline]
  pub(crate) fn link(&self, level: usize, dir: Direction) -> Option<Self> {
    self.list.arena()[self.id]
      .link(level, dir)
      .map(|id| Self::new(self.list, id))
  }
}
