//! # discogs-write - persisting decoded Discogs dump records
//!
//! Takes the artists, labels, masters and releases produced by a dump
//! decoder and writes them out, one record or one homogeneous batch at a
//! time.
//!
//! ## Modules
//!
//! - **model**: the four record kinds and the [`CatalogRecord`] trait
//! - **writer**: the [`Writer`] contract and the streaming [`JsonWriter`]
//! - **source**: a newline-delimited JSON record source
//!
//! ## Quick Start
//!
//! ```rust
//! use discogs_write::{Artist, Image, JsonWriter, Options, Writer};
//!
//! # fn main() -> anyhow::Result<()> {
//! let artists = vec![
//!     Artist { name: "A".into(), images: vec![Image::new("x.jpg")], ..Default::default() },
//!     Artist { name: "B".into(), images: vec![Image::new("y.jpg")], ..Default::default() },
//! ];
//!
//! let options = Options::default().with_exclude_images(true);
//! let mut writer = JsonWriter::from_sink(Vec::new(), options);
//! writer.write_artists(&artists)?;
//!
//! assert_eq!(writer.get_ref().unwrap().as_slice(), br#"[{"Name":"A"},{"Name":"B"}]"#);
//! # Ok(())
//! # }
//! ```

use anyhow::{Context, Result};
use std::io::BufRead;

pub mod model;
pub mod source;
pub mod writer;

// Re-export commonly used types for convenience
pub use model::{
    Artist, CatalogRecord, Image, Label, Master, Record, RecordBatch, RecordKind, Release,
    ReleaseArtist, Track,
};
pub use source::NdjsonSource;
pub use writer::{FileJsonWriter, JsonWriter, Options, Sink, WriteError, Writer};

/// Main entry point: stream NDJSON records of one kind into a JSON array
///
/// Returns the number of records written. A line that fails to parse
/// aborts the array like any other write failure: the output is left
/// without its closing bracket and the writer is poisoned.
pub fn write_ndjson<T, R, W>(reader: R, writer: &mut JsonWriter<W>) -> Result<usize>
where
    T: CatalogRecord + serde::de::DeserializeOwned,
    R: BufRead,
    W: Sink,
{
    let records = NdjsonSource::<R, T>::new(reader);

    writer
        .try_write_stream::<T, _, _, _>(records)
        .with_context(|| format!("Failed to write {} records", T::KIND))
}
