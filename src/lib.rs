//! Byte-range access logging for seekable binary sources
//!
//! `bytelog` wraps any seekable byte source and records which byte ranges
//! every read and write touched, so a decoder can prove it consumed a whole
//! file — or see exactly which parts of a format it never looked at.
//!
//! # Modules
//!
//! - [`stream`] - [`LogStream`], the region-tracking wrapper itself
//! - [`source`] - [`ByteSource`], the minimal seekable read/write abstraction
//! - [`region`] - [`Region`], a named half-open byte range
//! - [`coverage`] - merging touched ranges and computing the untouched gaps
//! - [`journal`] - the per-direction access record with group collapsing
//! - [`endian`] - explicit byte-order integer conversions
//! - [`reader`] - thin typed read/write helpers over any source
//!
//! # Example
//!
//! ```
//! use std::io::Cursor;
//! use bytelog::{ByteSource, Endianness, LogStream, ReadExt};
//!
//! let data = vec![0x42, 0x4C, 0x4F, 0x47, 0x01, 0x00, 0x00, 0x00, 0xFF, 0xFF];
//! let mut stream = LogStream::new(Cursor::new(data));
//!
//! stream.begin_read_group(Some("header"))?;
//! let magic = stream.read_u32(Endianness::Big)?;
//! let version = stream.read_u32(Endianness::Little)?;
//! stream.end_read_group()?;
//!
//! assert_eq!(magic, 0x424C_4F47);
//! assert_eq!(version, 1);
//!
//! // the two reads report as one named region, and two bytes went unread
//! assert_eq!(stream.regions_read().len(), 1);
//! let unread = stream.unread_regions()?;
//! assert_eq!((unread[0].position, unread[0].length), (8, 2));
//! # Ok::<(), bytelog::Error>(())
//! ```

pub mod coverage;
pub mod endian;
pub mod error;
pub mod journal;
pub mod reader;
pub mod region;
pub mod source;
pub mod stream;

pub use endian::Endianness;
pub use error::{Error, Result};
pub use journal::Journal;
pub use reader::{ReadExt, WriteExt};
pub use region::Region;
pub use source::ByteSource;
pub use stream::LogStream;
