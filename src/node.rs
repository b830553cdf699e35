use core::borrow::Borrow;
use std::{boxed::Box, vec};

use crate::{
  arena::{Arena, NodeId},
  types::Height,
};

/// The direction a link points to, or a walk moves in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Direction {
  /// Towards larger elements.
  Forward,
  /// Towards smaller elements.
  Backward,
}

impl Direction {
  #[inline]
  pub(crate) const fn reverse(self) -> Self {
    match self {
      Self::Forward => Self::Backward,
      Self::Backward => Self::Forward,
    }
  }
}

/// One level of a tower.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct Link {
  pub(crate) next: Option<NodeId>,
  pub(crate) prev: Option<NodeId>,
}

impl Link {
  pub(crate) const NULL: Self = Self {
    next: None,
    prev: None,
  };

  #[inline]
  pub(crate) const fn get(&self, dir: Direction) -> Option<NodeId> {
    match dir {
      Direction::Forward => self.next,
      Direction::Backward => self.prev,
    }
  }

  #[inline]
  pub(crate) fn set(&mut self, dir: Direction, target: Option<NodeId>) {
    match dir {
      Direction::Forward => self.next = target,
      Direction::Backward => self.prev = target,
    }
  }
}

#[derive(Debug, Clone)]
pub(crate) struct Node<T> {
  value: T,
  // Immutable length, level `i` holds the nearest nodes of height > `i` on both sides.
  tower: Box<[Link]>,
}

impl<T> Node<T> {
  pub(crate) fn new(value: T, height: Height) -> Self {
    Self {
      value,
      tower: vec![Link::NULL; height.to_usize()].into_boxed_slice(),
    }
  }

  #[inline]
  pub(crate) const fn value(&self) -> &T {
    &self.value
  }

  #[inline]
  pub(crate) fn into_value(self) -> T {
    self.value
  }

  #[inline]
  pub(crate) fn height(&self) -> usize {
    self.tower.len()
  }

  #[cfg(test)]
  #[inline]
  pub(crate) fn tower(&self) -> &[Link] {
    &self.tower
  }

  /// Returns the neighbour at `level` in `dir`, `None` if there is none or the
  /// tower is not that tall.
  #[inline]
  pub(crate) fn link(&self, level: usize, dir: Direction) -> Option<NodeId> {
    self.tower.get(level).and_then(|link| link.get(dir))
  }

  #[inline]
  pub(crate) fn next(&self) -> Option<NodeId> {
    self.tower[0].next
  }

  #[inline]
  pub(crate) fn prev(&self) -> Option<NodeId> {
    self.tower[0].prev
  }
}

impl<T> Arena<T> {
  /// Single hop greedy walk: scans the tower of `from` from its highest level down to
  /// level 0 and returns the first neighbour in `dir` accepted by `accept`.
  fn scan(&self, from: NodeId, dir: Direction, mut accept: impl FnMut(&T) -> bool) -> Option<NodeId> {
    self[from]
      .tower
      .iter()
      .rev()
      .filter_map(|link| link.get(dir))
      .find(|&id| accept(&self[id].value))
  }

  /// Makes the longest possible jump from `from` in `dir`.
  #[inline]
  pub(crate) fn longest_jump(&self, from: NodeId, dir: Direction) -> Option<NodeId> {
    self.scan(from, dir, |_| true)
  }

  /// Jumps as far as possible from `from` in `dir` without passing `bound`.
  ///
  /// Forward jumps accept neighbours `<= bound`, backward jumps neighbours `>= bound`.
  #[inline]
  pub(crate) fn greedy_jump<Q>(&self, from: NodeId, dir: Direction, bound: &Q) -> Option<NodeId>
  where
    T: Borrow<Q>,
    Q: ?Sized + Ord,
  {
    self.scan(from, dir, |value| match dir {
      Direction::Forward => value.borrow() <= bound,
      Direction::Backward => value.borrow() >= bound,
    })
  }

  /// Makes `to` the neighbour of `from` at `level` in `dir`, and `from` the neighbour of
  /// `to` in the reverse direction.
  #[inline]
  fn link(&mut self, from: NodeId, to: NodeId, dir: Direction, level: usize) {
    self[from].tower[level].set(dir, Some(to));
    self[to].tower[level].set(dir.reverse(), Some(from));
  }

  /// Rebuilds every `dir` link of `this`, treating `reference` as its new direct
  /// neighbour at level 0.
  ///
  /// Levels `reference` is tall enough for link to it directly. Higher levels keep walking
  /// from `reference` in `dir` with [`longest_jump`](Self::longest_jump) until a tall
  /// enough node shows up. Levels left over once the walk runs off the end of the list
  /// are cleared.
  pub(crate) fn rebuild_tower(&mut self, this: NodeId, dir: Direction, reference: Option<NodeId>) {
    let height = self[this].height();
    let mut level = 0;
    let mut anchor = reference;

    while level < height {
      let Some(candidate) = anchor else {
        break;
      };

      if self[candidate].height() > level {
        self.link(this, candidate, dir, level);
        level += 1;
      } else {
        anchor = self.longest_jump(candidate, dir);
      }
    }

    for link in &mut self[this].tower[level..] {
      link.set(dir, None);
    }
  }

  /// Splices a freshly allocated node in between `prev` and `next`, its level 0
  /// neighbours. Either side may be `None` at the list boundaries.
  pub(crate) fn attach(&mut self, this: NodeId, prev: Option<NodeId>, next: Option<NodeId>) {
    self.rebuild_tower(this, Direction::Backward, prev);
    self.rebuild_tower(this, Direction::Forward, next);
  }

  /// Splices `this` out of every level it takes part in.
  ///
  /// Its level 0 neighbours rebuild their towers towards each other first. Levels taller
  /// than both of them still point at `this` and are handed over to its own level
  /// neighbours, so nothing refers to `this` afterwards.
  pub(crate) fn detach(&mut self, this: NodeId) {
    let prev = self[this].prev();
    let next = self[this].next();

    if let Some(prev) = prev {
      self.rebuild_tower(prev, Direction::Forward, next);
    }
    if let Some(next) = next {
      self.rebuild_tower(next, Direction::Backward, prev);
    }

    for level in 0..self[this].height() {
      let Link { next, prev } = self[this].tower[level];
      if let Some(prev) = prev {
        let link = &mut self[prev].tower[level];
        if link.next == Some(this) {
          link.next = next;
        }
      }
      if let Some(next) = next {
        let link = &mut self[next].tower[level];
        if link.prev == Some(this) {
          link.prev = prev;
        }
      }
    }

    self[this].tower.fill(Link::NULL);
  }
}
