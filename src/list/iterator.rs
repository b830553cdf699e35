use core::iter::FusedIterator;

use super::SkipList;
use crate::arena::{Arena, NodeId};

/// An iterator over the elements of a [`SkipList`] in ascending order.
///
/// Follows the level 0 links starting at the head.
pub struct Iter<'a, T> {
  arena: &'a Arena<T>,
  next: Option<NodeId>,
  remaining: usize,
}

impl<T> Clone for Iter<'_, T> {
  #[inline]
  fn clone(&self) -> Self {
    Self {
      arena: self.arena,
      next: self.next,
      remaining: self.remaining,
    }
  }
}

impl<'a, T> Iter<'a, T> {
  #[inline]
  pub(super) fn new(list: &'a SkipList<T>) -> Self {
    Self {
      arena: list.arena(),
      next: list.head(),
      remaining: list.len(),
    }
  }
}

impl<'a, T> Iterator for Iter<'a, T> {
  type Item = &'a T;

  fn next(&mut self) -> Option<Self::Item> {
    let arena = self.arena;
    let node = &arena[self.next?];
    self.next = node.next();
    self.remaining -= 1;
    Some(node.value())
  }

  #[inline]
  fn size_hint(&self) -> (usize, Option<usize>) {
    (self.remaining, Some(self.remaining))
  }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}
