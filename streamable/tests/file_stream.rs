//! Tests for the file-backed stream against real temporary files

use std::fs;
use std::io::Read as _;
use std::path::{Path, PathBuf};

use anyhow::Result;
use streamable::{FileStream, Stream, StreamError, Whence};
use tempfile::TempDir;

fn fixture(contents: &[u8]) -> Result<(TempDir, PathBuf)> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("fixture.bin");
    fs::write(&path, contents)?;
    Ok((dir, path))
}

fn read_back(path: &Path) -> Vec<u8> {
    fs::read(path).unwrap()
}

#[test]
fn test_materialize_reads_whole_file() -> Result<()> {
    let (_dir, path) = fixture(b"hello world")?;
    let mut stream = FileStream::open(&path, "r")?;

    stream.seek(6, Whence::Set)?;
    assert_eq!(stream.materialize(), b"hello world");
    assert!(stream.eof());
    Ok(())
}

#[test]
fn test_materialize_write_only_is_empty() -> Result<()> {
    let (_dir, path) = fixture(b"hello")?;
    let mut stream = FileStream::open(&path, "c")?;
    assert!(stream.materialize().is_empty());
    Ok(())
}

#[test]
fn test_read_and_tell() -> Result<()> {
    let (_dir, path) = fixture(b"123456")?;
    let mut stream = FileStream::open(&path, "rb")?;

    assert_eq!(stream.read(2)?, b"12");
    assert_eq!(stream.tell()?, 2);
    assert_eq!(stream.read(100)?, b"3456");
    assert_eq!(stream.tell()?, 6);
    assert!(stream.read(1)?.is_empty());
    assert!(stream.eof());
    Ok(())
}

#[test]
fn test_seek_whence() -> Result<()> {
    let (_dir, path) = fixture(b"123456")?;
    let mut stream = FileStream::open(&path, "r")?;

    stream.seek(1, Whence::Set)?;
    stream.seek(2, Whence::Cur)?;
    assert_eq!(stream.tell()?, 3);

    stream.seek(-1, Whence::End)?;
    assert_eq!(stream.tell()?, 5);
    assert_eq!(stream.read(1)?, b"6");

    stream.rewind()?;
    assert_eq!(stream.tell()?, 0);

    stream.seek_raw(4, 0)?;
    assert_eq!(stream.tell()?, 4);
    assert!(matches!(
        stream.seek_raw(0, 9),
        Err(StreamError::InvalidArgument(_))
    ));
    Ok(())
}

#[test]
fn test_seek_before_start_is_io_error() -> Result<()> {
    let (_dir, path) = fixture(b"123")?;
    let mut stream = FileStream::open(&path, "r")?;
    assert!(matches!(stream.seek(-5, Whence::Cur), Err(StreamError::Io(_))));
    Ok(())
}

#[test]
fn test_write_in_place() -> Result<()> {
    let (_dir, path) = fixture(b"1235")?;
    let mut stream = FileStream::open(&path, "r+")?;

    stream.seek(3, Whence::Set)?;
    assert_eq!(stream.write(b"456")?, 3);
    assert_eq!(stream.tell()?, 6);
    stream.close()?;

    assert_eq!(read_back(&path), b"123456");
    Ok(())
}

#[test]
fn test_write_truncating_mode() -> Result<()> {
    let (_dir, path) = fixture(b"old contents")?;
    let mut stream = FileStream::open(&path, "w+")?;

    assert_eq!(stream.size(), Some(0));
    stream.write(b"new")?;
    assert_eq!(stream.materialize(), b"new");
    Ok(())
}

#[test]
fn test_append_mode() -> Result<()> {
    let (_dir, path) = fixture(b"abc")?;
    let mut stream = FileStream::open(&path, "a")?;
    stream.write(b"def")?;
    stream.close()?;

    assert_eq!(read_back(&path), b"abcdef");
    Ok(())
}

#[test]
fn test_exclusive_create_fails_on_existing_file() -> Result<()> {
    let (_dir, path) = fixture(b"abc")?;
    match FileStream::open(&path, "x") {
        Err(StreamError::Io(e)) => assert_eq!(e.kind(), std::io::ErrorKind::AlreadyExists),
        other => panic!("Expected Io error, got {other:?}"),
    }
    Ok(())
}

#[test]
fn test_exclusive_create_new_file() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("fresh.bin");

    let mut stream = FileStream::open(&path, "x+")?;
    stream.write(b"fresh")?;
    stream.rewind()?;
    assert_eq!(stream.get_contents()?, b"fresh");
    Ok(())
}

#[test]
fn test_read_only_rejects_write() -> Result<()> {
    let (_dir, path) = fixture(b"abc")?;
    let mut stream = FileStream::open(&path, "r")?;
    assert!(matches!(stream.write(b"x"), Err(StreamError::IllegalState(_))));
    assert_eq!(read_back(&path), b"abc");
    Ok(())
}

#[test]
fn test_write_only_rejects_read() -> Result<()> {
    let (_dir, path) = fixture(b"abc")?;
    let mut stream = FileStream::open(&path, "a")?;
    assert!(matches!(stream.read(1), Err(StreamError::IllegalState(_))));
    assert!(matches!(stream.get_contents(), Err(StreamError::IllegalState(_))));
    Ok(())
}

#[test]
fn test_get_contents_reads_remainder() -> Result<()> {
    let (_dir, path) = fixture(b"123456")?;
    let mut stream = FileStream::open(&path, "r")?;
    stream.seek(2, Whence::Set)?;
    assert_eq!(stream.get_contents()?, b"3456");
    assert!(stream.get_contents()?.is_empty());
    Ok(())
}

#[test]
fn test_detach_hands_back_the_file() -> Result<()> {
    let (_dir, path) = fixture(b"123456")?;
    let mut stream = FileStream::open(&path, "r")?;
    stream.seek(4, Whence::Set)?;

    let mut file = stream.detach().expect("first detach returns the handle");
    let mut rest = String::new();
    file.read_to_string(&mut rest)?;
    assert_eq!(rest, "56");

    assert!(stream.detach().is_none());
    assert!(stream.state().is_detached());
    Ok(())
}

#[test]
fn test_detached_stream_is_inert() -> Result<()> {
    let (_dir, path) = fixture(b"123456")?;
    let mut stream = FileStream::open(&path, "r+")?;
    stream.detach();

    assert!(matches!(stream.tell(), Err(StreamError::IllegalState(_))));
    assert!(matches!(stream.seek(0, Whence::Set), Err(StreamError::IllegalState(_))));
    assert!(matches!(stream.rewind(), Err(StreamError::IllegalState(_))));
    assert!(matches!(stream.read(1), Err(StreamError::IllegalState(_))));
    assert!(matches!(stream.write(b"x"), Err(StreamError::IllegalState(_))));
    assert!(matches!(stream.seek_raw(0, 42), Err(StreamError::IllegalState(_))));
    assert!(matches!(stream.get_contents(), Err(StreamError::IllegalState(_))));
    assert_eq!(stream.size(), None);
    assert!(stream.materialize().is_empty());
    assert!(stream.metadata(None).is_none());
    assert!(!stream.is_readable());
    assert!(!stream.is_writable());
    assert!(!stream.is_seekable());
    assert!(stream.eof());

    stream.close()?;
    Ok(())
}

#[test]
fn test_close_is_idempotent() -> Result<()> {
    let (_dir, path) = fixture(b"abc")?;
    let mut stream = FileStream::open(&path, "r")?;
    stream.close()?;
    stream.close()?;
    assert!(stream.detach().is_none());
    Ok(())
}
