use crate::DEFAULT_MAX_HEIGHT;

/// Options for [`SkipList`](crate::SkipList).
#[viewit::viewit(vis_all = "pub(super)", getters(skip), setters(skip))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Options {
  max_height: usize,
  seed: Option<u64>,
}

impl Default for Options {
  #[inline]
  fn default() -> Options {
    Options::new()
  }
}

impl Options {
  /// Creates a new set of options with the default values.
  #[inline]
  pub const fn new() -> Self {
    Self {
      max_height: DEFAULT_MAX_HEIGHT,
      seed: None,
    }
  }

  /// Set the maximum tower height of the [`SkipList`](crate::SkipList).
  ///
  /// Every node gets a tower of `1..=max_height` levels. The value is validated
  /// when the list is constructed, it must be in range `[1, 31]`.
  ///
  /// The default max height is `16`.
  ///
  /// ## Example
  ///
  /// ```rust
  /// use skiptower::Options;
  ///
  /// let opts = Options::new().with_max_height(8);
  /// ```
  #[inline]
  pub const fn with_max_height(mut self, max_height: usize) -> Self {
    self.max_height = max_height;
    self
  }

  /// Set the seed of the tower height generator.
  ///
  /// With a seed, the sequence of generated tower heights is reproducible, so two lists
  /// built from the same options and the same operations have identical shapes.
  /// Without a seed, the generator is seeded from the operating system.
  ///
  /// The default seed is `None`.
  ///
  /// ## Example
  ///
  /// ```rust
  /// use skiptower::Options;
  ///
  /// let opts = Options::new().with_seed(42);
  /// ```
  #[inline]
  pub const fn with_seed(mut self, seed: u64) -> Self {
    self.seed = Some(seed);
    self
  }

  /// Returns the configured maximum tower height.
  ///
  /// ## Example
  ///
  /// ```rust
  /// use skiptower::Options;
  ///
  /// let opts = Options::new().with_max_height(8);
  /// assert_eq!(opts.max_height(), 8);
  /// ```
  #[inline]
  pub const fn max_height(&self) -> usize {
    self.max_height
  }

  /// Returns the configured seed, if any.
  #[inline]
  pub const fn seed(&self) -> Option<u64> {
    self.seed
  }
}
