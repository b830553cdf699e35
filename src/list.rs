use core::{borrow::Borrow, cmp, fmt};

use crate::{
  arena::{Arena, NodeId},
  error::Error,
  height::HeightGenerator,
  node::{Direction, Node},
  options::Options,
  types::Height,
};

mod entry;
pub use entry::Entry;

mod iterator;
pub use iterator::Iter;

#[cfg(test)]
mod tests;

/// An ordered collection based on a skiplist.
///
/// Every element lives in a node with a tower of `1..=max_height` levels. Level 0 links all
/// nodes in ascending order in both directions, each higher level links the subset of nodes
/// tall enough for it, which lets searches skip over most of the list.
///
/// Equal elements are kept individually, a new element is placed after the elements equal
/// to it.
pub struct SkipList<T> {
  arena: Arena<T>,
  head: Option<NodeId>,
  len: usize,
  generator: HeightGenerator,
}

impl<T> SkipList<T> {
  /// Creates a new empty skiplist with the default [`Options`].
  ///
  /// ## Example
  ///
  /// ```rust
  /// use skiptower::SkipList;
  ///
  /// let list = SkipList::<u32>::new();
  /// assert!(list.is_empty());
  /// ```
  #[inline]
  pub fn new() -> Self {
    Self::with_height_generator(HeightGenerator::new(Height::new(), None))
  }

  /// Creates a new empty skiplist with the given [`Options`].
  ///
  /// Fails with [`Error::InvalidConfiguration`] if the max height is not in `[1, 31]`.
  ///
  /// ## Example
  ///
  /// ```rust
  /// use skiptower::{Options, SkipList};
  ///
  /// let list = SkipList::<u32>::with_options(Options::new().with_max_height(8).with_seed(1)).unwrap();
  /// assert_eq!(list.max_height(), 8);
  ///
  /// assert!(SkipList::<u32>::with_options(Options::new().with_max_height(0)).is_err());
  /// ```
  pub fn with_options(opts: Options) -> Result<Self, Error> {
    let max_height = Height::try_from(opts.max_height)?;

    #[cfg(feature = "tracing")]
    tracing::debug!(
      max_height = max_height.to_usize(),
      seeded = opts.seed.is_some(),
      "created skiplist"
    );

    Ok(Self::with_height_generator(HeightGenerator::new(
      max_height, opts.seed,
    )))
  }

  /// Creates a new empty skiplist which draws tower heights from `generator`.
  #[inline]
  pub fn with_height_generator(generator: HeightGenerator) -> Self {
    Self {
      arena: Arena::new(),
      head: None,
      len: 0,
      generator,
    }
  }

  /// Returns the number of elements in the skiplist.
  #[inline]
  pub const fn len(&self) -> usize {
    self.len
  }

  /// Returns `true` if the skiplist contains no elements.
  #[inline]
  pub const fn is_empty(&self) -> bool {
    self.len == 0
  }

  /// Returns the maximum tower height of the skiplist.
  #[inline]
  pub fn max_height(&self) -> usize {
    self.generator.max_height().to_usize()
  }

  /// Returns the smallest element, or `None` if the skiplist is empty.
  #[inline]
  pub fn first(&self) -> Option<&T> {
    self.head.map(|id| self.arena[id].value())
  }

  /// Returns the largest element, or `None` if the skiplist is empty.
  ///
  /// The last node is reached by repeatedly taking the longest available jump.
  pub fn last(&self) -> Option<&T> {
    let mut cur = self.head?;
    while let Some(next) = self.arena.longest_jump(cur, Direction::Forward) {
      cur = next;
    }
    Some(self.arena[cur].value())
  }

  /// Returns the entry of the smallest element, or `None` if the skiplist is empty.
  #[inline]
  pub fn first_entry(&self) -> Option<Entry<'_, T>> {
    self.head.map(|id| Entry::new(self, id))
  }

  /// Returns an iterator over the elements in ascending order.
  ///
  /// ## Example
  ///
  /// ```rust
  /// use skiptower::SkipList;
  ///
  /// let list: SkipList<u32> = [3, 1, 2].into_iter().collect();
  /// assert!(list.iter().copied().eq([1, 2, 3]));
  /// ```
  #[inline]
  pub fn iter(&self) -> Iter<'_, T> {
    Iter::new(self)
  }

  /// Returns an iterator over the entries in ascending order.
  #[inline]
  pub fn entries(&self) -> impl Iterator<Item = Entry<'_, T>> + '_ {
    core::iter::successors(self.first_entry(), |entry| entry.next())
  }

  /// Removes all elements. Heights already drawn from the generator are not replayed.
  pub fn clear(&mut self) {
    self.arena.clear();
    self.head = None;
    self.len = 0;

    #[cfg(feature = "tracing")]
    tracing::trace!("cleared skiplist");
  }

  /// Returns a value which renders every node with its height and link targets.
  ///
  /// The format is meant for debugging and is not stable.
  #[inline]
  pub fn towers(&self) -> Towers<'_, T> {
    Towers { list: self }
  }

  #[inline]
  pub(crate) fn arena(&self) -> &Arena<T> {
    &self.arena
  }

  #[inline]
  pub(crate) const fn head(&self) -> Option<NodeId> {
    self.head
  }
}

impl<T: Ord> SkipList<T> {
  /// Inserts an element.
  ///
  /// Elements equal to existing ones are kept, the new element is placed after them.
  ///
  /// ## Example
  ///
  /// ```rust
  /// use skiptower::SkipList;
  ///
  /// let mut list = SkipList::new();
  /// list.insert(5);
  /// list.insert(5);
  /// assert_eq!(list.len(), 2);
  /// ```
  pub fn insert(&mut self, value: T) {
    let height = self.generator.generate();
    let prev = self.find_anchor(&value);
    let next = match prev {
      Some(prev) => self.arena[prev].next(),
      None => self.head,
    };

    let id = self.arena.alloc(Node::new(value, height));
    self.arena.attach(id, prev, next);

    // no anchor means the list was empty or the value is below the current head
    if prev.is_none() {
      self.head = Some(id);
    }
    self.len += 1;
    debug_assert_eq!(self.arena.len(), self.len);

    #[cfg(feature = "tracing")]
    tracing::trace!(height = height.to_usize(), len = self.len, "inserted element");
  }

  /// Removes one element equal to `value` and returns it.
  ///
  /// Removing an element which is not in the skiplist is a no-op and returns `None`.
  ///
  /// ## Example
  ///
  /// ```rust
  /// use skiptower::SkipList;
  ///
  /// let mut list: SkipList<u32> = (1..=3).collect();
  /// assert_eq!(list.remove(&2), Some(2));
  /// assert_eq!(list.remove(&42), None);
  /// assert_eq!(list.len(), 2);
  /// ```
  pub fn remove<Q>(&mut self, value: &Q) -> Option<T>
  where
    T: Borrow<Q>,
    Q: ?Sized + Ord,
  {
    let Some(id) = self.find_node(value) else {
      #[cfg(feature = "tracing")]
      tracing::trace!(len = self.len, "element to remove not found");
      return None;
    };

    let node = &self.arena[id];
    if node.prev().is_none() {
      self.head = node.next();
    }
    self.arena.detach(id);
    self.len -= 1;
    debug_assert_eq!(self.arena.len(), self.len + 1);

    #[cfg(feature = "tracing")]
    tracing::trace!(len = self.len, "removed element");

    Some(self.arena.dealloc(id).into_value())
  }

  /// Like [`remove`](Self::remove), but fails with [`Error::ElementNotFound`] if there is
  /// no element equal to `value`.
  #[inline]
  pub fn try_remove<Q>(&mut self, value: &Q) -> Result<T, Error>
  where
    T: Borrow<Q>,
    Q: ?Sized + Ord,
  {
    self.remove(value).ok_or(Error::ElementNotFound)
  }

  /// Returns `true` if the skiplist contains an element equal to `value`.
  #[inline]
  pub fn contains<Q>(&self, value: &Q) -> bool
  where
    T: Borrow<Q>,
    Q: ?Sized + Ord,
  {
    self.find_node(value).is_some()
  }

  /// Returns a reference to an element equal to `value`.
  #[inline]
  pub fn get<Q>(&self, value: &Q) -> Option<&T>
  where
    T: Borrow<Q>,
    Q: ?Sized + Ord,
  {
    self.find_node(value).map(|id| self.arena[id].value())
  }

  /// Returns the entry of an element equal to `value`.
  ///
  /// When several elements are equal to `value`, any one of them may be returned.
  ///
  /// ## Example
  ///
  /// ```rust
  /// use skiptower::SkipList;
  ///
  /// let list: SkipList<u32> = (1..=3).collect();
  /// let entry = list.find(&2).unwrap();
  /// assert_eq!(entry.next().map(|e| *e.value()), Some(3));
  /// assert_eq!(entry.prev().map(|e| *e.value()), Some(1));
  /// ```
  #[inline]
  pub fn find<Q>(&self, value: &Q) -> Option<Entry<'_, T>>
  where
    T: Borrow<Q>,
    Q: ?Sized + Ord,
  {
    self.find_node(value).map(|id| Entry::new(self, id))
  }

  /// Greedy walk from the head towards `value`, stopping at the first equal node.
  fn find_node<Q>(&self, value: &Q) -> Option<NodeId>
  where
    T: Borrow<Q>,
    Q: ?Sized + Ord,
  {
    let mut cur = self.head;
    while let Some(id) = cur {
      match self.arena[id].value().borrow().cmp(value) {
        cmp::Ordering::Equal => return Some(id),
        // only the head can be larger, every jump stays <= value
        cmp::Ordering::Greater => return None,
        cmp::Ordering::Less => cur = self.arena.greedy_jump(id, Direction::Forward, value),
      }
    }
    None
  }

  /// Returns the last node `<= value`, the node a new `value` is inserted after.
  ///
  /// `None` if the skiplist is empty or its head is already larger than `value`.
  fn find_anchor<Q>(&self, value: &Q) -> Option<NodeId>
  where
    T: Borrow<Q>,
    Q: ?Sized + Ord,
  {
    let mut cur = self
      .head
      .filter(|&head| self.arena[head].value().borrow() <= value)?;
    while let Some(next) = self.arena.greedy_jump(cur, Direction::Forward, value) {
      cur = next;
    }
    Some(cur)
  }
}

impl<T> Default for SkipList<T> {
  #[inline]
  fn default() -> Self {
    Self::new()
  }
}

impl<T: Ord> Extend<T> for SkipList<T> {
  fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
    for value in iter {
      self.insert(value);
    }
  }
}

impl<T: Ord> FromIterator<T> for SkipList<T> {
  fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
    let mut list = Self::new();
    list.extend(iter);
    list
  }
}

impl<'a, T> IntoIterator for &'a SkipList<T> {
  type Item = &'a T;
  type IntoIter = Iter<'a, T>;

  #[inline]
  fn into_iter(self) -> Self::IntoIter {
    self.iter()
  }
}

impl<T: fmt::Debug> fmt::Debug for SkipList<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_set().entries(self.iter()).finish()
  }
}

/// Diagnostic rendering of a [`SkipList`], returned by [`SkipList::towers`].
pub struct Towers<'a, T> {
  list: &'a SkipList<T>,
}

impl<T: fmt::Debug> fmt::Display for Towers<'_, T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let list = self.list;
    writeln!(f, "max height: {}, len: {}", list.max_height(), list.len())?;

    for entry in list.entries() {
      writeln!(f, "{:?} (height {})", entry.value(), entry.height())?;
      for (dir, label) in [(Direction::Forward, "forward"), (Direction::Backward, "backward")] {
        write!(f, "  {label}:")?;
        for level in 0..entry.height() {
          match entry.link(level, dir) {
            Some(target) => write!(f, " {:?} (height {})", target.value(), target.height())?,
            None => write!(f, " -")?,
          }
        }
        writeln!(f)?;
      }
    }
    Ok(())
  }
}
