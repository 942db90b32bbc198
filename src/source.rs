//! Byte-source abstraction.
//!
//! [`ByteSource`] is the minimal seekable read/write surface the log stream
//! wraps and re-exposes: in-memory buffers, files, or anything else that can
//! report a cursor position. Implementations are provided for
//! `Cursor<Vec<u8>>`, `File`, and for `&mut T` / `Box<T>` so a source can be
//! borrowed (leaving it open after the wrapper is dropped) or boxed behind a
//! trait object.

use std::fs::File;
use std::io::{self, Read, Seek, SeekFrom, Write};

/// A seekable, byte-addressable source with explicit position and length.
///
/// All position changes on a wrapped source must go through this interface;
/// tracked access spans are computed from position deltas, so mutating the
/// underlying cursor behind the wrapper's back invalidates tracking.
pub trait ByteSource {
    /// Reads up to `buf.len()` bytes at the current position, returning the
    /// count actually read. Zero means end of source.
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize>;

    /// Writes up to `buf.len()` bytes at the current position, returning the
    /// count actually written.
    fn write(&mut self, buf: &[u8]) -> io::Result<usize>;

    /// Moves the cursor, returning the new absolute position.
    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64>;

    /// Flushes buffered writes through to the source.
    fn flush(&mut self) -> io::Result<()>;

    /// Total length of the source in bytes.
    fn len(&mut self) -> io::Result<u64>;

    /// Resizes the source, truncating or extending with zeroes.
    fn set_len(&mut self, len: u64) -> io::Result<()>;

    /// Current cursor position.
    fn position(&mut self) -> io::Result<u64> {
        self.seek(SeekFrom::Current(0))
    }

    /// Moves the cursor to an absolute position, returning it.
    fn set_position(&mut self, pos: u64) -> io::Result<u64> {
        self.seek(SeekFrom::Start(pos))
    }

    /// Whether the source currently holds zero bytes.
    fn is_empty(&mut self) -> io::Result<bool> {
        Ok(self.len()? == 0)
    }
}

impl ByteSource for io::Cursor<Vec<u8>> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        Read::read(self, buf)
    }

    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        Write::write(self, buf)
    }

    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        Seek::seek(self, pos)
    }

    fn flush(&mut self) -> io::Result<()> {
        Write::flush(self)
    }

    fn len(&mut self) -> io::Result<u64> {
        Ok(self.get_ref().len() as u64)
    }

    fn set_len(&mut self, len: u64) -> io::Result<()> {
        let len = usize::try_from(len)
            .map_err(|_| io::Error::new(io::ErrorKind::InvalidInput, "length exceeds usize"))?;
        self.get_mut().resize(len, 0);
        Ok(())
    }

    fn position(&mut self) -> io::Result<u64> {
        Ok(io::Cursor::position(self))
    }
}

impl ByteSource for File {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        Read::read(self, buf)
    }

    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        Write::write(self, buf)
    }

    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        Seek::seek(self, pos)
    }

    fn flush(&mut self) -> io::Result<()> {
        Write::flush(self)
    }

    fn len(&mut self) -> io::Result<u64> {
        Ok(self.metadata()?.len())
    }

    fn set_len(&mut self, len: u64) -> io::Result<()> {
        File::set_len(self, len)
    }
}

impl<T: ByteSource + ?Sized> ByteSource for &mut T {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        (**self).read(buf)
    }

    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        (**self).write(buf)
    }

    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        (**self).seek(pos)
    }

    fn flush(&mut self) -> io::Result<()> {
        (**self).flush()
    }

    fn len(&mut self) -> io::Result<u64> {
        (**self).len()
    }

    fn set_len(&mut self, len: u64) -> io::Result<()> {
        (**self).set_len(len)
    }

    fn position(&mut self) -> io::Result<u64> {
        (**self).position()
    }

    fn set_position(&mut self, pos: u64) -> io::Result<u64> {
        (**self).set_position(pos)
    }
}

impl<T: ByteSource + ?Sized> ByteSource for Box<T> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        (**self).read(buf)
    }

    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        (**self).write(buf)
    }

    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        (**self).seek(pos)
    }

    fn flush(&mut self) -> io::Result<()> {
        (**self).flush()
    }

    fn len(&mut self) -> io::Result<u64> {
        (**self).len()
    }

    fn set_len(&mut self, len: u64) -> io::Result<()> {
        (**self).set_len(len)
    }

    fn position(&mut self) -> io::Result<u64> {
        (**self).position()
    }

    fn set_position(&mut self, pos: u64) -> io::Result<u64> {
        (**self).set_position(pos)
    }
}
