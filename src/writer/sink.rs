use std::fs::File;
use std::io::{self, BufWriter, Write};

/// An output destination that can be appended to and explicitly released
pub trait Sink: Write {
    /// Flush outstanding bytes and release the underlying resource
    fn close(self) -> io::Result<()>
    where
        Self: Sized;
}

impl Sink for File {
    fn close(mut self) -> io::Result<()> {
        self.flush()?;
        self.sync_all()
    }
}

impl<S: Sink> Sink for BufWriter<S> {
    fn close(self) -> io::Result<()> {
        let inner = self.into_inner().map_err(|e| e.into_error())?;
        inner.close()
    }
}

impl Sink for Vec<u8> {
    fn close(self) -> io::Result<()> {
        Ok(())
    }
}

impl<S: Sink + ?Sized> Sink for &mut S {
    fn close(self) -> io::Result<()> {
        self.flush()
    }
}
