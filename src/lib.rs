//! Reads and writes in-memory buffers of fixed-width numbers and length-prefixed byte strings.
//!
//! [`BinaryWriter`] appends values to a growable buffer and [`BinaryReader`] consumes them from
//! a borrowed slice. Both sides are configured with an [`Endian`] byte order and a
//! [`StringTransform`] that is applied to string payloads (the writer encodes before appending,
//! the reader decodes after extracting). The encoded stream is not self-describing: a reader
//! can only make sense of a buffer if it is configured the same way as the writer that produced
//! it.
//!
//! ```
//! use endian_binary_io::{BinaryReader, BinaryWriter, Endian};
//!
//! let mut w = BinaryWriter::new().endian(Endian::Big);
//! w.write_numeric::<u16>(0x0102);
//! w.write_size_and_bytes::<u32>(b"hi").unwrap();
//! assert_eq!(w.get_buffer(), [1, 2, 0, 0, 0, 2, b'h', b'i']);
//!
//! let mut r = BinaryReader::new(w.get_buffer()).endian(Endian::Big);
//! assert_eq!(r.read_numeric::<u16>(), Ok(0x0102));
//! assert_eq!(r.read_size_and_bytes::<u32>(), Ok(b"hi".as_slice()));
//! assert!(!r.has_more_data());
//! ```

#![cfg_attr(not(any(feature = "std", test)), no_std)]
#![forbid(unsafe_code)]
#![forbid(unused_must_use)]
#![warn(missing_docs)]

extern crate alloc;

mod endian;
mod numeric;
mod reader;
mod transform;
mod writer;


pub use endian::Endian;
pub use numeric::{Numeric, SizePrefix};
pub use reader::{BinaryReader, ReaderError};
pub use transform::{Identity, StringTransform};
pub use writer::{serialise, BinaryWriter, Serialise, WriterError};
