//! Typed read and write helpers over any [`ByteSource`].
//!
//! A deliberately thin table of operations: exact-count reads, fixed-width
//! integers with explicit byte order, POD struct marshaling via `bytemuck`,
//! and ASCII strings. Everything here is straight-line data transformation;
//! the interesting machinery lives in [`crate::stream`].

use bytemuck::Pod;

use crate::endian::Endianness;
use crate::error::{Error, Result};
use crate::source::ByteSource;

macro_rules! read_int {
    ($($name:ident: $ty:ty => $decode:ident),+ $(,)?) => {
        $(
            /// Reads a fixed-width integer in the given byte order.
            fn $name(&mut self, endianness: Endianness) -> Result<$ty> {
                let mut bytes = [0u8; size_of::<$ty>()];
                self.read_exact_buf(&mut bytes)?;
                Ok(endianness.$decode(bytes))
            }
        )+
    };
}

macro_rules! write_int {
    ($($name:ident: $ty:ty => $encode:ident),+ $(,)?) => {
        $(
            /// Writes a fixed-width integer in the given byte order.
            fn $name(&mut self, value: $ty, endianness: Endianness) -> Result<()> {
                self.write_all_buf(&endianness.$encode(value))
            }
        )+
    };
}

/// Typed reads over a byte source. Blanket-implemented for every
/// [`ByteSource`].
pub trait ReadExt: ByteSource {
    /// Fills `buf` completely, erroring with [`Error::UnexpectedEof`] if the
    /// source ends first.
    fn read_exact_buf(&mut self, buf: &mut [u8]) -> Result<()> {
        let needed = buf.len();
        let mut filled = 0;
        while filled < needed {
            match self.read(&mut buf[filled..])? {
                0 => return Err(Error::UnexpectedEof { needed, got: filled }),
                n => filled += n,
            }
        }
        Ok(())
    }

    /// Reads a single byte.
    fn read_u8(&mut self) -> Result<u8> {
        let mut byte = [0u8; 1];
        self.read_exact_buf(&mut byte)?;
        Ok(byte[0])
    }

    read_int! {
        read_u16: u16 => read_u16,
        read_u32: u32 => read_u32,
        read_u64: u64 => read_u64,
        read_i16: i16 => read_i16,
        read_i32: i32 => read_i32,
        read_i64: i64 => read_i64,
    }

    /// Reads a plain-old-data struct from its in-memory byte layout.
    fn read_pod<T: Pod>(&mut self) -> Result<T>
    where
        Self: Sized,
    {
        let mut value = T::zeroed();
        self.read_exact_buf(bytemuck::bytes_of_mut(&mut value))?;
        Ok(value)
    }

    /// Reads `len` bytes as an ASCII string, trimming trailing NUL padding.
    fn read_ascii_string(&mut self, len: usize) -> Result<String> {
        let mut bytes = vec![0u8; len];
        self.read_exact_buf(&mut bytes)?;

        let end = bytes.iter().rposition(|&b| b != 0).map_or(0, |i| i + 1);
        let content = &bytes[..end];
        if !content.is_ascii() {
            return Err(Error::InvalidArgument("non-ASCII byte in string"));
        }
        Ok(std::str::from_utf8(content)
            .map_err(|_| Error::InvalidArgument("non-ASCII byte in string"))?
            .to_owned())
    }

    /// Runs `f` and restores the cursor position afterwards, success or not.
    fn peek<T>(&mut self, f: impl FnOnce(&mut Self) -> Result<T>) -> Result<T>
    where
        Self: Sized,
    {
        let position = self.position()?;
        let result = f(self);
        self.set_position(position)?;
        result
    }
}

impl<S: ByteSource + ?Sized> ReadExt for S {}

/// Typed writes over a byte source. Blanket-implemented for every
/// [`ByteSource`].
pub trait WriteExt: ByteSource {
    /// Writes all of `buf`, erroring with [`Error::UnexpectedEof`] if the
    /// source stops accepting bytes.
    fn write_all_buf(&mut self, buf: &[u8]) -> Result<()> {
        let needed = buf.len();
        let mut written = 0;
        while written < needed {
            match self.write(&buf[written..])? {
                0 => {
                    return Err(Error::UnexpectedEof {
                        needed,
                        got: written,
                    });
                }
                n => written += n,
            }
        }
        Ok(())
    }

    /// Writes a single byte.
    fn write_u8(&mut self, value: u8) -> Result<()> {
        self.write_all_buf(&[value])
    }

    write_int! {
        write_u16: u16 => write_u16,
        write_u32: u32 => write_u32,
        write_u64: u64 => write_u64,
        write_i16: i16 => write_i16,
        write_i32: i32 => write_i32,
        write_i64: i64 => write_i64,
    }

    /// Writes a plain-old-data struct as its in-memory byte layout.
    fn write_pod<T: Pod>(&mut self, value: &T) -> Result<()>
    where
        Self: Sized,
    {
        self.write_all_buf(bytemuck::bytes_of(value))
    }
}

impl<S: ByteSource + ?Sized> WriteExt for S {}
