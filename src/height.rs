use rand::{rngs::SmallRng, Rng, SeedableRng};

use crate::types::Height;

/// Upon the insertion of a new node in the list, the node gets a tower whose
/// height is drawn from a `HeightGenerator`.
///
/// A uniform integer `r` is drawn from `[0, 2^max)`, the height is the largest `h`
/// such that `r < 2^(max - h)`, falling back to `1`. Short towers are favoured
/// geometrically, so the expected number of levels a search has to descend
/// stays logarithmic.
#[derive(Debug, Clone)]
pub struct HeightGenerator {
  max_height: Height,
  rng: SmallRng,
}

impl HeightGenerator {
  /// Creates a new generator which produces heights in `[1, max_height]`.
  ///
  /// With `Some(seed)` the produced sequence is reproducible, with `None` the
  /// generator is seeded from the operating system.
  ///
  /// ## Example
  ///
  /// ```rust
  /// use skiptower::{Height, HeightGenerator};
  ///
  /// let max = Height::try_from(8u8).unwrap();
  /// let mut a = HeightGenerator::new(max, Some(7));
  /// let mut b = HeightGenerator::new(max, Some(7));
  /// assert_eq!(a.generate(), b.generate());
  /// ```
  pub fn new(max_height: Height, seed: Option<u64>) -> Self {
    let rng = match seed {
      Some(seed) => SmallRng::seed_from_u64(seed),
      None => SmallRng::from_os_rng(),
    };
    Self { max_height, rng }
  }

  /// Returns the maximum height this generator can produce.
  #[inline]
  pub const fn max_height(&self) -> Height {
    self.max_height
  }

  /// Generates the tower height for a new node.
  ///
  /// This never returns a height greater than [`max_height`](Self::max_height).
  pub fn generate(&mut self) -> Height {
    let max = self.max_height.to_u32();
    let r = self.rng.random_range(0..(1u64 << max));
    for i in 0..max {
      if r < (1u64 << i) {
        return Height::from_u8_unchecked((max - i) as u8);
      }
    }
    Height::MIN
  }
}
