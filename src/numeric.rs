use zerocopy::{FromBytes, Immutable, IntoBytes};

mod sealed {
    pub trait Sealed {}
}

/// A fixed-width value that is encoded using its in-memory byte representation.
///
/// This is implemented for the unsigned and signed integers of 8, 16, 32 and 64 bits and for
/// `f32` and `f64`. Floating-point values are never converted; their IEEE-754 bit pattern is
/// moved around byte-for-byte, so NaN payloads and subnormals survive a round trip unchanged.
///
/// This trait is sealed.
pub trait Numeric: FromBytes + IntoBytes + Immutable + Copy + sealed::Sealed {}

/// An unsigned integer type that can be used as the length prefix of a byte string.
///
/// This trait is sealed.
pub trait SizePrefix: Numeric {
    /// Converts a payload length to a prefix value, or `None` if it does not fit.
    fn from_len(len: usize) -> Option<Self>;

    /// Converts a prefix value to a payload length, or `None` if it does not fit in `usize`.
    fn to_len(self) -> Option<usize>;
}

macro_rules! numeric {
    ($($t:ty),*) => {
        $(
            impl sealed::Sealed for $t {}
            impl Numeric for $t {}
        )*
    };
}

numeric!(u8, u16, u32, u64, i8, i16, i32, i64, f32, f64);

macro_rules! size_prefix {
    ($($t:ty),*) => {
        $(
            impl SizePrefix for $t {
                #[inline(always)]
                fn from_len(len: usize) -> Option<Self> {
                    Self::try_from(len).ok()
                }

                #[inline(always)]
                fn to_len(self) -> Option<usize> {
                    usize::try_from(self).ok()
                }
            }
        )*
    };
}

size_prefix!(u8, u16, u32, u64);

#[cfg(test)]
mod tests {
    use super::SizePrefix;

    #[test]
    fn prefix_from_len() {
        assert_eq!(u8::from_len(255), Some(255));
        assert_eq!(u8::from_len(256), None);
        assert_eq!(u16::from_len(70_000), None);
        assert_eq!(u32::from_len(70_000), Some(70_000));
        assert_eq!(u64::from_len(usize::MAX), Some(usize::MAX as u64));
    }

    #[test]
    fn prefix_to_len() {
        assert_eq!(0xffu8.to_len(), Some(0xff));
        assert_eq!(0xffffu16.to_len(), Some(0xffff));
        #[cfg(target_pointer_width = "64")]
        assert_eq!(u64::MAX.to_len(), Some(usize::MAX));
        #[cfg(target_pointer_width = "32")]
        assert_eq!(u64::MAX.to_len(), None);
    }
}
