//! Command definitions and execution for the `streamable` CLI
//!
//! Every command is written against the `Stream` contract, so it runs
//! unchanged on a file stream or, with `--memory`, on a buffer stream
//! loaded from the same file.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use log::debug;
use streamable::{AccessKind, BufferStream, Capabilities, FileStream, OpenMode, Stream, Whence};

#[derive(Debug, Parser)]
#[command(name = "streamable", version, about = "Inspect, read and splice files through seekable streams")]
pub struct Cli {
    /// Load the file into memory and operate on a buffer stream
    #[arg(long, global = true)]
    pub memory: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print the whole stream
    Cat {
        path: PathBuf,
    },
    /// Seek, then print bytes from the cursor
    Read {
        path: PathBuf,
        /// Seek offset
        #[arg(long, allow_hyphen_values = true)]
        offset: Option<i64>,
        /// Seek reference point: set, cur or end
        #[arg(long, default_value = "set")]
        whence: Whence,
        /// Number of bytes to read (default: the remainder)
        #[arg(long)]
        length: Option<usize>,
    },
    /// Seek, then write data at the cursor
    Write {
        path: PathBuf,
        data: String,
        /// Seek offset
        #[arg(long, allow_hyphen_values = true)]
        offset: Option<i64>,
        /// Seek reference point: set, cur or end
        #[arg(long, default_value = "set")]
        whence: Whence,
        /// Open mode for the file stream (only r and r+ with --memory)
        #[arg(long, default_value = "r+")]
        mode: String,
    },
    /// Show size, position, capabilities and metadata
    Stat {
        path: PathBuf,
    },
}

/// The stream a command runs against.
enum Backend {
    Memory(BufferStream),
    File(FileStream),
}

macro_rules! with_stream {
    ($backend:expr, $stream:ident => $body:expr) => {
        match $backend {
            Backend::Memory($stream) => $body,
            Backend::File($stream) => $body,
        }
    };
}

impl Backend {
    fn open(path: &Path, mode: &str, memory: bool) -> Result<Self> {
        if memory {
            let bytes = fs::read(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            // A buffer only splices, so modes that truncate, append or create
            // would diverge from the file stream
            let mode: OpenMode = mode.parse()?;
            if mode.kind() != AccessKind::Read {
                bail!("mode `{}` is not supported with --memory; use r or r+", mode);
            }
            let capabilities = Capabilities::new(mode.is_readable(), mode.is_writable(), true);
            debug!("loaded {} bytes from {} into memory", bytes.len(), path.display());
            Ok(Backend::Memory(BufferStream::with_capabilities(bytes, capabilities)))
        } else {
            let stream = FileStream::open(path, mode)
                .with_context(|| format!("Failed to open {}", path.display()))?;
            Ok(Backend::File(stream))
        }
    }
}

pub fn run(cli: Cli) -> Result<()> {
    let mut out = std::io::stdout().lock();

    match cli.command {
        Commands::Cat { path } => {
            let mut backend = Backend::open(&path, "r", cli.memory)?;
            with_stream!(&mut backend, s => cat(s, &mut out))
        }
        Commands::Read {
            path,
            offset,
            whence,
            length,
        } => {
            let mut backend = Backend::open(&path, "r", cli.memory)?;
            with_stream!(&mut backend, s => read(s, offset, whence, length, &mut out))
        }
        Commands::Write {
            path,
            data,
            offset,
            whence,
            mode,
        } => {
            let mut backend = Backend::open(&path, &mode, cli.memory)?;
            let n = with_stream!(&mut backend, s => write(s, offset, whence, data.as_bytes()))?;
            match backend {
                Backend::Memory(stream) => fs::write(&path, stream.into_inner())
                    .with_context(|| format!("Failed to write back {}", path.display()))?,
                Backend::File(mut stream) => stream.close()?,
            }
            writeln!(out, "wrote {} bytes", n)?;
            Ok(())
        }
        Commands::Stat { path } => {
            let mut backend = Backend::open(&path, "r", cli.memory)?;
            with_stream!(&mut backend, s => stat(s, &mut out))
        }
    }
}

fn seek_if_requested<S: Stream>(stream: &mut S, offset: Option<i64>, whence: Whence) -> Result<()> {
    if let Some(offset) = offset {
        stream
            .seek(offset, whence)
            .with_context(|| format!("Failed to seek to {} from {}", offset, whence))?;
    }
    Ok(())
}

pub fn cat<S: Stream>(stream: &mut S, out: &mut impl Write) -> Result<()> {
    out.write_all(&stream.materialize())?;
    Ok(())
}

pub fn read<S: Stream>(
    stream: &mut S,
    offset: Option<i64>,
    whence: Whence,
    length: Option<usize>,
    out: &mut impl Write,
) -> Result<()> {
    seek_if_requested(stream, offset, whence)?;
    let bytes = stream
        .read(length.unwrap_or(usize::MAX))
        .context("Failed to read")?;
    out.write_all(&bytes)?;
    Ok(())
}

pub fn write<S: Stream>(
    stream: &mut S,
    offset: Option<i64>,
    whence: Whence,
    data: &[u8],
) -> Result<usize> {
    seek_if_requested(stream, offset, whence)?;
    let n = stream.write(data).context("Failed to write")?;
    Ok(n)
}

pub fn stat<S: Stream>(stream: &mut S, out: &mut impl Write) -> Result<()> {
    match stream.size() {
        Some(size) => writeln!(out, "size: {}", size)?,
        None => writeln!(out, "size: unknown")?,
    }
    writeln!(out, "position: {}", stream.tell()?)?;
    writeln!(out, "eof: {}", stream.eof())?;
    writeln!(out, "readable: {}", stream.is_readable())?;
    writeln!(out, "writable: {}", stream.is_writable())?;
    writeln!(out, "seekable: {}", stream.is_seekable())?;
    if let Some(meta) = stream.metadata(None) {
        for (key, value) in meta.iter() {
            writeln!(out, "meta.{}: {}", key, value)?;
        }
    }
    Ok(())
}
