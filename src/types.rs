use core::fmt;

use arbitrary_int::{u5, Number};

use crate::{error::Error, DEFAULT_MAX_HEIGHT};

macro_rules! impl_try_from_for_height {
  ($($target:ident),+ $(,)?) => {
    $(
      paste::paste! {
        impl TryFrom<$target> for Height {
          type Error = Error;

          #[inline]
          fn try_from(val: $target) -> Result<Self, Self::Error> {
            Self::[< try_from_ $target >](val)
          }
        }

        impl Height {
          #[doc = "Try to create a Height from the given `" $target "`."]
          ///
          /// Fails with [`Error::InvalidConfiguration`] when the value is not in `[1, 31]`.
          #[inline]
          pub fn [< try_from_ $target >](val: $target) -> Result<Self, Error> {
            match u8::try_from(val) {
              Ok(h) if h >= Self::MIN.to_u8() && h <= Self::MAX.to_u8() => Ok(Self(u5::new(h))),
              _ => Err(Error::InvalidConfiguration {
                requested: val as i128,
              }),
            }
          }
        }
      }
    )*
  };
}

macro_rules! impl_into_for_height {
  ($($target:ident),+ $(,)?) => {
    $(
      paste::paste! {
        impl From<Height> for $target {
          #[inline]
          fn from(height: Height) -> Self {
            height.[< to_ $target >]()
          }
        }

        impl Height {
          #[doc = "Converts the Height to a `" $target "`."]
          #[inline]
          pub const fn [< to_ $target >](&self) -> $target {
            self.0.value() as $target
          }
        }
      }
    )*
  };
}

/// Height which is used to configure the maximum tower height of a skiplist, it is a 5-bit unsigned integer
/// with a minimum of `1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Height(u5);

impl Height {
  /// The maximum value of the Height.
  pub const MAX: Self = Self(u5::MAX);

  /// The minimum value of the Height.
  pub const MIN: Self = Self(u5::new(1));

  /// Creates a new Height with the default value ([`DEFAULT_MAX_HEIGHT`]).
  #[inline]
  pub const fn new() -> Self {
    Self(u5::new(DEFAULT_MAX_HEIGHT as u8))
  }

  /// Creates a Height from a level count already known to be in `[1, 31]`.
  ///
  /// # Panics
  /// - If the given value is greater than `31`.
  #[inline]
  pub(crate) const fn from_u8_unchecked(val: u8) -> Self {
    Self(u5::new(val))
  }
}

impl Default for Height {
  #[inline]
  fn default() -> Self {
    Self::new()
  }
}

impl fmt::Display for Height {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.0.value())
  }
}

impl_try_from_for_height!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);
impl_into_for_height!(u8, u16, u32, u64, usize);

impl PartialEq<usize> for Height {
  #[inline]
  fn eq(&self, other: &usize) -> bool {
    self.to_usize().eq(other)
  }
}

impl PartialOrd<usize> for Height {
  #[inline]
  fn partial_cmp(&self, other: &usize) -> Option<core::cmp::Ordering> {
    self.to_usize().partial_cmp(other)
  }
}
