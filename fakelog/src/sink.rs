use crate::args::SinkKind;
use flate2::{Compression, write::GzEncoder};
use std::fs::File;
use std::io::{self, Stdout, Write};
use std::path::Path;

/// Destination for generated lines. Owned by the generation loop, one at a time.
pub enum Sink {
    Stdout(Stdout),
    File(File),
    Gz(GzEncoder<File>),
}

impl Sink {
    /// Open `path` for the given kind, truncating any existing file.
    pub fn open(kind: SinkKind, path: &Path) -> io::Result<Self> {
        Ok(match kind {
            SinkKind::Stdout => Sink::Stdout(io::stdout()),
            SinkKind::Log => Sink::File(File::create(path)?),
            SinkKind::Gz => Sink::Gz(GzEncoder::new(File::create(path)?, Compression::default())),
        })
    }

    /// Flush and release the sink. The gzip trailer is written before the file is closed.
    pub fn close(self) -> io::Result<()> {
        match self {
            Sink::Stdout(mut out) => out.flush(),
            Sink::File(mut file) => file.flush(),
            Sink::Gz(encoder) => encoder.finish()?.flush(),
        }
    }
}

impl Write for Sink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Sink::Stdout(out) => out.write(buf),
            Sink::File(file) => file.write(buf),
            Sink::Gz(encoder) => encoder.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Sink::Stdout(out) => out.flush(),
            Sink::File(file) => file.flush(),
            Sink::Gz(encoder) => encoder.flush(),
        }
    }
}
