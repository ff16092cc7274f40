use alloc::borrow::Cow;
use alloc::vec::Vec;


use crate::{Endian, Identity, Numeric, SizePrefix, StringTransform};

pub(crate) type Result<T> = core::result::Result<T, WriterError>;

/// Encodes binary values into a growable buffer.
///
/// Fixed-width values are written using their in-memory byte representation, in the byte order
/// given by [`Endian`]. Strings are passed through the writer's encoder before they are
/// appended. Nothing that has been written is ever rewritten or removed.
pub struct BinaryWriter<E = Identity> {
    out: Vec<u8>,
    endian: Endian,
    encoder: E,
}

impl BinaryWriter {
    /// Creates a new `BinaryWriter` that uses little-endian byte order and does not transform
    /// strings.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates a new `BinaryWriter` whose buffer has the given capacity.
    pub fn with_capacity(len: usize) -> Self {
        Self {
            out: Vec::with_capacity(len),
            endian: Endian::Little,
            encoder: Identity,
        }
    }
}

impl Default for BinaryWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> BinaryWriter<E> {
    /// Sets the byte order used for numeric values.
    pub fn endian(self, endian: Endian) -> Self {
        Self { endian, ..self }
    }

    /// Sets the transform applied to strings before they are written.
    pub fn encoder<T: StringTransform>(self, encoder: T) -> BinaryWriter<T> {
        BinaryWriter {
            out: self.out,
            endian: self.endian,
            encoder,
        }
    }

    /// The byte order used for numeric values.
    pub fn endianness(&self) -> Endian {
        self.endian
    }

    /// The bytes written so far.
    pub fn get_buffer(&self) -> &[u8] {
        &self.out
    }

    /// Extracts the inner buffer
    pub fn into_inner(self) -> Vec<u8> {
        self.out
    }

    /// The number of bytes written so far.
    pub fn len(&self) -> usize {
        self.out.len()
    }

    /// Returns `true` if nothing has been written.
    pub fn is_empty(&self) -> bool {
        self.out.is_empty()
    }

    /// Writes `bytes` to the output, without a length prefix and without encoding them.
    pub fn write_bytes(&mut self, bytes: &[u8]) {
        self.out.extend_from_slice(bytes);
    }

    /// Writes a fixed-width value, reversing its bytes if the configured byte order is not the
    /// platform's.
    pub fn write_numeric<T: Numeric>(&mut self, value: T) {
        let bytes = value.as_bytes();
        if self.endian.is_native() {
            self.out.extend_from_slice(bytes);
        } else {
            self.out.extend(bytes.iter().rev());
        }
    }

    /// Writes the length of `bytes` as an `S`, followed by `bytes`. The bytes are not encoded.
    ///
    /// Fails without writing anything if the length does not fit in `S`.
    pub fn write_size_and_bytes<S: SizePrefix>(&mut self, bytes: &[u8]) -> Result<()> {
        let Some(len) = S::from_len(bytes.len()) else {
            tracing::debug!(
                len = bytes.len(),
                prefix_size = core::mem::size_of::<S>(),
                "length does not fit in the size prefix"
            );
            return Err(WriterError::LengthOverflow);
        };
        self.out.reserve(core::mem::size_of::<S>() + bytes.len());
        self.write_numeric(len);
        self.write_bytes(bytes);
        Ok(())
    }
}

impl<E: StringTransform> BinaryWriter<E> {
    /// Runs the encoder over `bytes`, without writing anything.
    pub fn encode_string<'a>(&self, bytes: &'a [u8]) -> Cow<'a, [u8]> {
        self.encoder.transform(bytes)
    }

    /// Encodes `bytes` and writes the result, without a length prefix.
    pub fn write_string(&mut self, bytes: &[u8]) {
        let encoded = self.encoder.transform(bytes);
        self.out.extend_from_slice(&encoded);
    }

    /// Encodes `bytes`, then writes the encoded length as an `S`, followed by the encoded
    /// bytes.
    ///
    /// Fails without writing anything if the encoded length does not fit in `S`.
    pub fn write_size_and_string<S: SizePrefix>(&mut self, bytes: &[u8]) -> Result<()> {
        let encoded = self.encoder.transform(bytes);
        self.write_size_and_bytes::<S>(&encoded)
    }
}

/// A value that knows how to write itself to a [`BinaryWriter`].
///
/// Implementations should only append to the writer. They are generic over the encoder so the
/// same value can be written with any string transform.
pub trait Serialise {
    /// Appends the encoded form of `self` to `w`.
    fn serialise<E: StringTransform>(&self, w: &mut BinaryWriter<E>) -> Result<()>;
}

/// Writes `obj` with a default [`BinaryWriter`] (little-endian, no string transform) and
/// returns the bytes.
pub fn serialise<T: Serialise + ?Sized>(obj: &T) -> Result<Vec<u8>> {
    let mut w = BinaryWriter::new();
    obj.serialise(&mut w)?;
    Ok(w.into_inner())
}

/// Error type for the size-prefixed `write_*` functions of `BinaryWriter`.
#[derive(Copy, Clone, Eq, PartialEq, Debug, thiserror::Error)]
pub enum WriterError {
    /// The length of a byte string cannot be represented by the chosen size prefix type.
    #[error("the length does not fit in the size prefix")]
    LengthOverflow,
}
