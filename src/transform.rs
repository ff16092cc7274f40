use alloc::borrow::Cow;
use alloc::vec::Vec;

/// Converts the payload of a string before it is written, or after it is read.
///
/// A writer uses its transform as an encoder and a reader uses its transform as a decoder. The
/// two are independent, so a buffer can only be decoded by a reader whose decoder inverts the
/// writer's encoder. Transforms should be pure functions of their input.
///
/// Any `Fn(&[u8]) -> Vec<u8>` is a transform, which covers both closures and plain functions:
///
/// ```
/// use endian_binary_io::BinaryWriter;
///
/// let mut w = BinaryWriter::new().encoder(|s: &[u8]| s.to_ascii_uppercase());
/// w.write_string(b"abc");
/// assert_eq!(w.get_buffer(), b"ABC");
/// ```
pub trait StringTransform {
    /// Transforms `bytes`. Returning `Cow::Borrowed` avoids copying when the input can be used
    /// as it is.
    fn transform<'a>(&self, bytes: &'a [u8]) -> Cow<'a, [u8]>;
}

/// The default transform. It returns its input unchanged, without copying it.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Default)]
pub struct Identity;

impl StringTransform for Identity {
    #[inline(always)]
    fn transform<'a>(&self, bytes: &'a [u8]) -> Cow<'a, [u8]> {
        Cow::Borrowed(bytes)
    }
}

impl<F> StringTransform for F
where
    F: Fn(&[u8]) -> Vec<u8>,
{
    fn transform<'a>(&self, bytes: &'a [u8]) -> Cow<'a, [u8]> {
        Cow::Owned(self(bytes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reversed(bytes: &[u8]) -> Vec<u8> {
        bytes.iter().rev().copied().collect()
    }

    #[test]
    fn identity_borrows() {
        let input = b"abc".as_slice();
        assert!(matches!(Identity.transform(input), Cow::Borrowed(b) if b == input));
    }

    #[test]
    fn function_transform() {
        assert_eq!(reversed.transform(b"abc").as_ref(), b"cba");
        assert_eq!(reversed.transform(b"").as_ref(), b"");
    }
}
