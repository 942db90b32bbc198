//! End-to-end tests for the region-tracking log stream.
//!
//! Covers the coverage-report contract (full consumption leaves no unread
//! gap), the group protocol, order independence of reporting, and the
//! partial/failed-read recording policy.

use std::io::{self, Cursor, SeekFrom, Write};

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use bytelog::{ByteSource, Error, LogStream, Region};

fn random_buffer(len: usize) -> Vec<u8> {
    let mut rng = Pcg32::seed_from_u64(0);
    let mut buffer = vec![0u8; len];
    rng.fill(buffer.as_mut_slice());
    buffer
}

fn read_to_end<S: ByteSource>(stream: &mut S) -> io::Result<Vec<u8>> {
    let mut out = Vec::new();
    let mut chunk = [0u8; 256];
    loop {
        match stream.read(&mut chunk)? {
            0 => return Ok(out),
            n => out.extend_from_slice(&chunk[..n]),
        }
    }
}

#[test]
fn fully_read_stream_has_no_unread_regions() {
    let buffer = random_buffer(1000);
    let mut stream = LogStream::new(Cursor::new(buffer.clone()));

    let contents = read_to_end(&mut stream).unwrap();
    assert_eq!(contents, buffer);
    assert!(stream.unread_regions().unwrap().is_empty());
}

#[test]
fn untouched_stream_reports_one_full_gap() {
    let mut stream = LogStream::new(Cursor::new(vec![0u8; 1000]));
    assert_eq!(stream.unread_regions().unwrap(), vec![Region::new(0, 1000)]);
}

#[test]
fn chunking_does_not_change_merged_coverage() {
    // one 100-byte read
    let mut coarse = LogStream::new(Cursor::new(vec![0u8; 100]));
    let mut buf = [0u8; 100];
    coarse.read(&mut buf).unwrap();

    // ten 10-byte reads over the same range, issued back to front
    let mut fine = LogStream::new(Cursor::new(vec![0u8; 100]));
    let mut buf = [0u8; 10];
    for i in (0..10).rev() {
        fine.set_position(i * 10).unwrap();
        fine.read(&mut buf).unwrap();
    }

    let merged_coarse = bytelog::coverage::merge(coarse.regions_read());
    let merged_fine = bytelog::coverage::merge(fine.regions_read());
    assert_eq!(merged_coarse, merged_fine);
    assert_eq!(merged_coarse, vec![Region::new(0, 100)]);
}

#[test]
fn contiguous_reads_inside_group_collapse_to_one_region() {
    let mut stream = LogStream::new(Cursor::new(vec![0u8; 16]));
    let mut buf = [0u8; 4];

    stream.begin_read_group(Some("field")).unwrap();
    stream.read(&mut buf).unwrap();
    stream.read(&mut buf).unwrap();
    stream.end_read_group().unwrap();

    assert_eq!(stream.regions_read(), &[Region::named(0, 8, "field")]);
}

#[test]
fn gap_inside_group_is_rejected() {
    let mut stream = LogStream::new(Cursor::new(vec![0u8; 32]));
    let mut buf = [0u8; 4];

    stream.begin_read_group(None).unwrap();
    stream.read(&mut buf).unwrap();
    stream.seek(SeekFrom::Current(10)).unwrap();
    stream.read(&mut buf).unwrap();

    assert!(matches!(
        stream.end_read_group(),
        Err(Error::NonContiguous { offset: 14 })
    ));
}

#[test]
fn nested_read_group_is_rejected() {
    let mut stream = LogStream::new(Cursor::new(vec![0u8; 8]));
    stream.begin_read_group(None).unwrap();
    assert!(matches!(
        stream.begin_read_group(None),
        Err(Error::GroupActive)
    ));
}

#[test]
fn group_with_no_progress_is_rejected() {
    let mut stream = LogStream::new(Cursor::new(vec![0u8; 8]));
    stream.begin_read_group(None).unwrap();
    assert!(matches!(stream.end_read_group(), Err(Error::EmptyGroup)));
}

#[test]
fn write_group_mirrors_read_group() {
    let mut stream = LogStream::new(Cursor::new(vec![0u8; 16]));

    stream.begin_write_group(Some("patch")).unwrap();
    stream.write(&[1, 2, 3, 4]).unwrap();
    stream.write(&[5, 6, 7, 8]).unwrap();
    stream.end_write_group().unwrap();

    assert_eq!(stream.regions_written(), &[Region::named(0, 8, "patch")]);
    assert_eq!(
        stream.unwritten_regions().unwrap(),
        vec![Region::named(8, 8, "patch")]
    );
}

#[test]
fn unread_gap_between_named_groups_carries_preceding_name() {
    let mut stream = LogStream::new(Cursor::new(vec![0u8; 30]));
    let mut buf = [0u8; 10];

    stream.begin_read_group(Some("header")).unwrap();
    stream.read(&mut buf).unwrap();
    stream.end_read_group().unwrap();

    stream.set_position(20).unwrap();
    stream.begin_read_group(Some("footer")).unwrap();
    stream.read(&mut buf).unwrap();
    stream.end_read_group().unwrap();

    assert_eq!(
        stream.unread_regions().unwrap(),
        vec![Region::named(10, 10, "header")]
    );
}

/// A source whose reads always fail, for the recording-policy regression.
struct FailingSource {
    inner: Cursor<Vec<u8>>,
}

impl ByteSource for FailingSource {
    fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
        Err(io::Error::other("injected read failure"))
    }

    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        Write::write(&mut self.inner, buf)
    }

    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        io::Seek::seek(&mut self.inner, pos)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }

    fn len(&mut self) -> io::Result<u64> {
        Ok(self.inner.get_ref().len() as u64)
    }

    fn set_len(&mut self, _len: u64) -> io::Result<()> {
        Err(io::Error::other("unsupported"))
    }
}

#[test]
fn failed_read_records_nothing() {
    let source = FailingSource {
        inner: Cursor::new(vec![0u8; 16]),
    };
    let mut stream = LogStream::new(source);

    let mut buf = [0u8; 4];
    assert!(stream.read(&mut buf).is_err());
    assert!(stream.regions_read().is_empty());
    assert_eq!(stream.unread_regions().unwrap(), vec![Region::new(0, 16)]);
}

#[test]
fn partial_read_records_transferred_range() {
    // 6-byte source, 16-byte request: only the 6 transferred bytes may be
    // recorded
    let mut stream = LogStream::new(Cursor::new(vec![0u8; 6]));
    let mut buf = [0u8; 16];
    assert_eq!(stream.read(&mut buf).unwrap(), 6);
    assert_eq!(stream.regions_read(), &[Region::new(0, 6)]);
}

#[test]
fn log_stream_can_wrap_a_borrowed_source() {
    // wrapping &mut source is the "leave open" construction: the cursor
    // survives the wrapper
    let mut source = Cursor::new(vec![0u8; 8]);
    {
        let mut stream = LogStream::new(&mut source);
        let mut buf = [0u8; 8];
        stream.read(&mut buf).unwrap();
        assert!(stream.unread_regions().unwrap().is_empty());
    }
    assert_eq!(ByteSource::position(&mut source).unwrap(), 8);
}

#[test]
fn log_stream_can_wrap_another_log_stream() {
    let inner = LogStream::new(Cursor::new(vec![0u8; 8]));
    let mut outer = LogStream::new(inner);

    let mut buf = [0u8; 4];
    outer.read(&mut buf).unwrap();

    assert_eq!(outer.regions_read(), &[Region::new(0, 4)]);
    assert_eq!(outer.get_ref().regions_read(), &[Region::new(0, 4)]);
}

#[test]
fn file_backed_source_is_tracked() {
    let mut file = tempfile::tempfile().unwrap();
    file.write_all(&random_buffer(64)).unwrap();
    io::Seek::seek(&mut file, SeekFrom::Start(0)).unwrap();

    let mut stream = LogStream::new(file);
    let mut buf = [0u8; 32];
    stream.read(&mut buf).unwrap();

    assert_eq!(stream.regions_read(), &[Region::new(0, 32)]);
    assert_eq!(stream.unread_regions().unwrap(), vec![Region::new(32, 32)]);
}
