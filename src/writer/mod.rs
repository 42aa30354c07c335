//! Writers that persist decoded catalog records
//!
//! Every storage backend implements [`Writer`]. The only backend shipped
//! here is [`JsonWriter`], which streams records into a single JSON array
//! document without holding the serialized output in memory.

pub mod error;
pub mod json;
pub mod sink;

pub use error::{Result, WriteError};
pub use json::{FileJsonWriter, JsonWriter};
pub use sink::Sink;

use crate::model::{Artist, Label, Master, Record, RecordBatch, Release};
use log::debug;

/// Writing options, fixed when a writer is constructed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Options {
    /// Drop image metadata from every record before it is written.
    /// The dumps carry image tags whose values are mostly empty.
    pub exclude_images: bool,
}

impl Options {
    pub fn with_exclude_images(mut self, exclude_images: bool) -> Self {
        self.exclude_images = exclude_images;
        self
    }
}

/// Capabilities every storage backend provides
pub trait Writer {
    /// Write one artist as a standalone value
    fn write_artist(&mut self, artist: &Artist) -> Result<()>;
    /// Write artists as one document, stopping at the first failure
    fn write_artists(&mut self, artists: &[Artist]) -> Result<()>;
    /// Write one label as a standalone value
    fn write_label(&mut self, label: &Label) -> Result<()>;
    /// Write labels as one document, stopping at the first failure
    fn write_labels(&mut self, labels: &[Label]) -> Result<()>;
    /// Write one master as a standalone value
    fn write_master(&mut self, master: &Master) -> Result<()>;
    /// Write masters as one document, stopping at the first failure
    fn write_masters(&mut self, masters: &[Master]) -> Result<()>;
    /// Write one release as a standalone value
    fn write_release(&mut self, release: &Release) -> Result<()>;
    /// Write releases as one document, stopping at the first failure
    fn write_releases(&mut self, releases: &[Release]) -> Result<()>;

    /// Options the writer was constructed with
    fn options(&self) -> Options;

    /// Discard staged structural state without touching the sink
    fn reset(&mut self) -> Result<()>;

    /// Release the sink. Closing twice is an error.
    fn close(&mut self) -> Result<()>;

    /// Write one record of any kind
    fn write(&mut self, record: &Record) -> Result<()> {
        debug!("writing single {} record", record.kind());
        match record {
            Record::Artist(a) => self.write_artist(a),
            Record::Label(l) => self.write_label(l),
            Record::Master(m) => self.write_master(m),
            Record::Release(r) => self.write_release(r),
        }
    }

    /// Write a homogeneous batch of any kind
    fn write_batch(&mut self, batch: &RecordBatch) -> Result<()> {
        debug!("writing {} batch", batch.kind());
        match batch {
            RecordBatch::Artists(a) => self.write_artists(a),
            RecordBatch::Labels(l) => self.write_labels(l),
            RecordBatch::Masters(m) => self.write_masters(m),
            RecordBatch::Releases(r) => self.write_releases(r),
        }
    }
}
