use core::ops::{Index, IndexMut};
use std::vec::Vec;

use crate::node::Node;

/// A non-owning reference to a node allocated in an [`Arena`].
///
/// Ids are only meaningful for the arena which allocated them, and a freed id may be
/// handed out again by a later allocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct NodeId(usize);

/// Slot arena owning every node of a skiplist.
///
/// Freed slots are pushed onto the freelist and reused by later allocations, so a list
/// with a steady insert/remove workload does not grow its storage.
#[derive(Debug, Clone)]
pub(crate) struct Arena<T> {
  slots: Vec<Option<Node<T>>>,
  freelist: Vec<NodeId>,
}

impl<T> Default for Arena<T> {
  #[inline]
  fn default() -> Self {
    Self::new()
  }
}

impl<T> Arena<T> {
  #[inline]
  pub(crate) const fn new() -> Self {
    Self {
      slots: Vec::new(),
      freelist: Vec::new(),
    }
  }

  /// Returns the number of live nodes.
  #[inline]
  pub(crate) fn len(&self) -> usize {
    self.slots.len() - self.freelist.len()
  }

  /// Returns the number of slots, live or free.
  #[cfg(test)]
  #[inline]
  pub(crate) fn capacity(&self) -> usize {
    self.slots.len()
  }

  pub(crate) fn alloc(&mut self, node: Node<T>) -> NodeId {
    match self.freelist.pop() {
      Some(id) => {
        self.slots[id.0] = Some(node);
        id
      }
      None => {
        self.slots.push(Some(node));
        NodeId(self.slots.len() - 1)
      }
    }
  }

  /// Frees the slot of `id` and returns the node it held.
  ///
  /// The node must already be detached from every level, nothing may refer to `id` afterwards.
  pub(crate) fn dealloc(&mut self, id: NodeId) -> Node<T> {
    match self.slots.get_mut(id.0).and_then(Option::take) {
      Some(node) => {
        self.freelist.push(id);
        node
      }
      None => panic!("double free of node {}", id.0),
    }
  }

  #[inline]
  pub(crate) fn get(&self, id: NodeId) -> Option<&Node<T>> {
    self.slots.get(id.0).and_then(Option::as_ref)
  }

  #[inline]
  pub(crate) fn clear(&mut self) {
    self.slots.clear();
    self.freelist.clear();
  }
}

impl<T> Index<NodeId> for Arena<T> {
  type Output = Node<T>;

  #[inline]
  fn index(&self, id: NodeId) -> &Node<T> {
    match self.get(id) {
      Some(node) => node,
      None => panic!("dangling node id {}", id.0),
    }
  }
}

impl<T> IndexMut<NodeId> for Arena<T> {
  #[inline]
  fn index_mut(&mut self, id: NodeId) -> &mut Node<T> {
    match self.slots.get_mut(id.0).and_then(Option::as_mut) {
      Some(node) => node,
      None => panic!("dangling node id {}", id.0),
    }
  }
}
