use alloc::borrow::Cow;
use core::borrow::BorrowMut;
use core::mem::size_of;


use crate::{Endian, Identity, Numeric, SizePrefix, StringTransform};

pub(crate) type Result<T> = core::result::Result<T, ReaderError>;

/// Reads values from a slice of bytes.
///
/// Fixed-width values are decoded from their in-memory byte representation, in the byte order
/// given by [`Endian`]. Strings are either read with a caller-supplied length or with a length
/// prefix of a caller-chosen width, and are passed through the reader's decoder.
///
/// The reader never copies or modifies its input. It tracks a position into the input, which
/// it either owns (see [`BinaryReader::new`]) or borrows from the caller (see
/// [`BinaryReader::with_position`]). Borrowing the position lets several readers take turns
/// consuming one buffer, and lets the caller see how far decoding got after the reader is gone.
///
/// Every `read_*` method checks the remaining length before consuming anything. If there is
/// not enough data, the method returns [`ReaderError::OutOfRange`] without moving the
/// position. The one exception is documented on [`BinaryReader::read_size_and_bytes`].
pub struct BinaryReader<'a, P = usize, D = Identity> {
    data: &'a [u8],
    position: P,
    endian: Endian,
    decoder: D,
}

impl<'a> BinaryReader<'a> {
    /// Constructor. The reader starts at the beginning of `data`, uses native byte order and
    /// does not transform strings.
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            position: 0,
            endian: Endian::Native,
            decoder: Identity,
        }
    }
}

impl<'a, 'p> BinaryReader<'a, &'p mut usize> {
    /// Creates a reader that starts at `*position` and updates it as values are read.
    ///
    /// `*position` may point past the end of `data`; every read will fail in that case.
    pub fn with_position(data: &'a [u8], position: &'p mut usize) -> Self {
        Self {
            data,
            position,
            endian: Endian::Native,
            decoder: Identity,
        }
    }
}

impl<'a, P: BorrowMut<usize>, D> BinaryReader<'a, P, D> {
    /// Sets the byte order used for numeric values.
    pub fn endian(self, endian: Endian) -> Self {
        Self { endian, ..self }
    }

    /// Sets the transform applied to string payloads after they are read.
    pub fn decoder<T: StringTransform>(self, decoder: T) -> BinaryReader<'a, P, T> {
        BinaryReader {
            data: self.data,
            position: self.position,
            endian: self.endian,
            decoder,
        }
    }

    /// The byte order used for numeric values.
    pub fn endianness(&self) -> Endian {
        self.endian
    }

    /// The whole input, including the data that has already been read.
    pub fn data(&self) -> &'a [u8] {
        self.data
    }

    /// The offset of the next byte to read.
    #[inline(always)]
    pub fn get_position(&self) -> usize {
        *self.position.borrow()
    }

    /// Returns `true` if the position is before the end of the input.
    #[inline(always)]
    pub fn has_more_data(&self) -> bool {
        self.get_position() < self.data.len()
    }

    /// The number of bytes between the position and the end of the input.
    #[inline(always)]
    pub fn remaining(&self) -> usize {
        self.data.len().saturating_sub(self.get_position())
    }

    /// Returns the next `len` bytes without consuming them.
    fn peek(&self, len: usize) -> Result<&'a [u8]> {
        let position = self.get_position();
        match self.data.get(position..) {
            Some(rest) if rest.len() >= len => Ok(&rest[..len]),
            _ => {
                tracing::trace!(
                    position,
                    len,
                    remaining = self.remaining(),
                    "read past the end of the buffer"
                );
                Err(ReaderError::OutOfRange)
            }
        }
    }

    #[inline(always)]
    fn advance(&mut self, len: usize) {
        *self.position.borrow_mut() += len;
    }

    /// Reads a slice of bytes whose length is `len`. This function returns a slice reference
    /// to the bytes; it does not copy them, and it does not apply the decoder.
    pub fn read_bytes(&mut self, len: usize) -> Result<&'a [u8]> {
        let bytes = self.peek(len)?;
        self.advance(len);
        Ok(bytes)
    }

    /// Reads a fixed-width value, reversing its bytes first if the configured byte order is not
    /// the platform's.
    pub fn read_numeric<T: Numeric>(&mut self) -> Result<T> {
        let len = size_of::<T>();
        let bytes = self.peek(len)?;
        let mut value = T::read_from_bytes(bytes).map_err(|_| ReaderError::OutOfRange)?;
        if !self.endian.is_native() {
            value.as_mut_bytes().reverse();
        }
        self.advance(len);
        Ok(value)
    }

    /// Reads a fixed-width value into `out`. If this fails, `out` is left untouched.
    pub fn read_numeric_into<T: Numeric>(&mut self, out: &mut T) -> Result<()> {
        *out = self.read_numeric()?;
        Ok(())
    }

    /// Reads a length prefix of type `S`, then that many bytes. The bytes are not copied and
    /// the decoder is not applied.
    ///
    /// If the prefix cannot be read, the position does not move. If the prefix is read but the
    /// payload is longer than the remaining data, this returns [`ReaderError::OutOfRange`]
    /// with the position left just past the prefix.
    pub fn read_size_and_bytes<S: SizePrefix>(&mut self) -> Result<&'a [u8]> {
        let len = self.read_numeric::<S>()?;
        // A length that does not fit in memory cannot fit in the input either.
        let len = len.to_len().ok_or(ReaderError::OutOfRange)?;
        self.read_bytes(len)
    }

    /// Reads a length-prefixed byte string and returns it as `&bstr::BStr`, without applying
    /// the decoder. The prefix behaves as in [`BinaryReader::read_size_and_bytes`].
    #[cfg(feature = "bstr")]
    pub fn read_size_and_bstr<S: SizePrefix>(&mut self) -> Result<&'a bstr::BStr> {
        Ok(bstr::BStr::new(self.read_size_and_bytes::<S>()?))
    }
}

impl<'a, P: BorrowMut<usize>, D: StringTransform> BinaryReader<'a, P, D> {
    /// Runs the decoder over `bytes`, without reading anything.
    pub fn decode_string<'b>(&self, bytes: &'b [u8]) -> Cow<'b, [u8]> {
        self.decoder.transform(bytes)
    }

    /// Reads `len` bytes and decodes them. The position advances by `len`, however long the
    /// decoded string is.
    pub fn read_string(&mut self, len: usize) -> Result<Cow<'a, [u8]>> {
        let bytes = self.read_bytes(len)?;
        Ok(self.decoder.transform(bytes))
    }

    /// Reads a length prefix of type `S`, then that many bytes, and decodes them.
    ///
    /// The prefix counts the encoded bytes. On failure the position moves exactly as it does
    /// for [`BinaryReader::read_size_and_bytes`].
    pub fn read_size_and_string<S: SizePrefix>(&mut self) -> Result<Cow<'a, [u8]>> {
        let bytes = self.read_size_and_bytes::<S>()?;
        Ok(self.decoder.transform(bytes))
    }
}

/// Error type for `BinaryReader`
#[derive(Copy, Clone, Eq, PartialEq, Debug, thiserror::Error)]
pub enum ReaderError {
    /// A `read_*` method needed more bytes than remained in the input. Either the input is
    /// truncated or it does not have the layout the caller expected.
    #[error("not enough bytes remain in the buffer")]
    OutOfRange,
}
