use crate::{error::Error, options::Options, SkipList};

/// The builder to build [`SkipList`]s.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Builder {
  opts: Options,
}

impl Builder {
  /// Create a new `Builder` with default values.
  #[inline]
  pub const fn new() -> Self {
    Self {
      opts: Options::new(),
    }
  }

  /// Returns a new builder with the new [`Options`].
  ///
  /// ## Example
  ///
  /// ```rust
  /// use skiptower::{Builder, Options};
  ///
  /// let builder = Builder::new().with_options(Options::new().with_max_height(8));
  /// ```
  #[inline]
  pub const fn with_options(mut self, opts: Options) -> Self {
    self.opts = opts;
    self
  }

  /// Set the maximum tower height, see [`Options::with_max_height`].
  #[inline]
  pub const fn with_max_height(mut self, max_height: usize) -> Self {
    self.opts = self.opts.with_max_height(max_height);
    self
  }

  /// Set the seed of the tower height generator, see [`Options::with_seed`].
  #[inline]
  pub const fn with_seed(mut self, seed: u64) -> Self {
    self.opts = self.opts.with_seed(seed);
    self
  }

  /// Returns the options of the builder.
  #[inline]
  pub const fn options(&self) -> &Options {
    &self.opts
  }

  /// Builds an empty [`SkipList`].
  ///
  /// ## Example
  ///
  /// ```rust
  /// use skiptower::Builder;
  ///
  /// let list = Builder::new().with_max_height(4).build::<u64>().unwrap();
  /// assert_eq!(list.max_height(), 4);
  /// ```
  #[inline]
  pub fn build<T>(self) -> Result<SkipList<T>, Error> {
    SkipList::with_options(self.opts)
  }

  /// Builds a [`SkipList`] and inserts every element of `elements` in iteration order.
  ///
  /// ## Example
  ///
  /// ```rust
  /// use skiptower::Builder;
  ///
  /// let list = Builder::new().with_seed(7).build_from((1..=100).rev()).unwrap();
  /// assert_eq!(list.len(), 100);
  /// assert_eq!(list.first(), Some(&1));
  /// ```
  pub fn build_from<T, I>(self, elements: I) -> Result<SkipList<T>, Error>
  where
    T: Ord,
    I: IntoIterator<Item = T>,
  {
    let mut list = self.build()?;
    list.extend(elements);
    Ok(list)
  }
}
