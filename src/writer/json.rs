use super::{Options, Result, Sink, WriteError, Writer};
use crate::model::{Artist, CatalogRecord, Label, Master, Release};
use log::{debug, warn};
use std::borrow::{Borrow, Cow};
use std::convert::Infallible;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// JSON writer backed by a buffered file
pub type FileJsonWriter = JsonWriter<BufWriter<File>>;

/// Streams records into a sink as JSON
///
/// A batch becomes one array document: `[`, then each record, separated by
/// `,`, then `]`. Structural punctuation is staged in a small buffer and
/// pushed to the sink ahead of each record payload, so the sink always sees
/// the bytes in document order. Payloads are encoded one record at a time
/// and written straight through.
///
/// The first failure poisons the writer. The sink keeps whatever was written
/// up to that point (no closing bracket is appended) and every later write
/// returns [`WriteError::Poisoned`].
pub struct JsonWriter<W: Sink> {
    options: Options,
    sink: Option<W>,
    /// Array punctuation only, never payload bytes
    staging: Vec<u8>,
    /// Reused per record for the encoded payload
    payload: Vec<u8>,
    /// Open failure deferred until first use
    pending: Option<WriteError>,
    poisoned: Option<String>,
}

impl JsonWriter<BufWriter<File>> {
    /// Create or truncate `path` and fail straight away if that is not possible
    pub fn create<P: AsRef<Path>>(path: P, options: Options) -> Result<Self> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|source| WriteError::SinkOpen {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("opened json sink {}", path.display());

        Ok(Self::from_sink(BufWriter::new(file), options))
    }

    /// Create or truncate `path`, deferring an open failure to the first
    /// write or close
    pub fn new<P: AsRef<Path>>(path: P, options: Options) -> Self {
        match Self::create(path, options) {
            Ok(writer) => writer,
            Err(err) => {
                warn!("deferring sink open failure: {}", err);
                JsonWriter {
                    options,
                    sink: None,
                    staging: Vec::new(),
                    payload: Vec::new(),
                    pending: Some(err),
                    poisoned: None,
                }
            }
        }
    }
}

impl<W: Sink> JsonWriter<W> {
    pub fn from_sink(sink: W, options: Options) -> Self {
        JsonWriter {
            options,
            sink: Some(sink),
            staging: Vec::with_capacity(2),
            payload: Vec::new(),
            pending: None,
            poisoned: None,
        }
    }

    /// The sink, unless it was never opened or has been closed
    pub fn get_ref(&self) -> Option<&W> {
        self.sink.as_ref()
    }

    pub fn is_poisoned(&self) -> bool {
        self.poisoned.is_some()
    }

    /// Punctuation staged but not yet pushed to the sink
    pub fn staged(&self) -> &[u8] {
        &self.staging
    }

    /// Write one record as a bare JSON value
    pub fn write_one<R: CatalogRecord>(&mut self, record: &R) -> Result<()> {
        self.ensure_writable()?;

        let result = self
            .write_record(record)
            .and_then(|_| self.flush_staged())
            .and_then(|_| self.flush_sink());
        self.staging.clear();

        self.settle(result)
    }

    /// Write a slice of records as one JSON array
    pub fn write_many<R: CatalogRecord>(&mut self, records: &[R]) -> Result<()> {
        self.write_stream::<R, _>(records.iter())
    }

    /// Write records as one JSON array as they are pulled from `records`
    ///
    /// Stops at the first record that fails to encode or write.
    pub fn write_stream<R, I>(&mut self, records: I) -> Result<()>
    where
        R: CatalogRecord,
        I: IntoIterator,
        I::Item: Borrow<R>,
    {
        self.try_write_stream::<R, _, Infallible, _>(records.into_iter().map(Ok))
            .map(|_| ())
    }

    /// Like [`write_stream`](Self::write_stream) for a source that can fail
    ///
    /// A source error aborts the array like any other failure: no closing
    /// bracket is written and the writer is poisoned. Returns the number of
    /// records written.
    pub fn try_write_stream<R, T, E, I>(&mut self, records: I) -> Result<usize>
    where
        R: CatalogRecord,
        T: Borrow<R>,
        E: Into<Box<dyn std::error::Error + Send + Sync>>,
        I: IntoIterator<Item = std::result::Result<T, E>>,
    {
        self.ensure_writable()?;

        match self.stream_array::<R, T, E, I>(records) {
            Ok(count) => {
                self.staging.clear();
                debug!("wrote array of {} {} records", count, R::KIND);
                Ok(count)
            }
            Err(err) => self.settle(Err(err)),
        }
    }

    fn stream_array<R, T, E, I>(&mut self, records: I) -> Result<usize>
    where
        R: CatalogRecord,
        T: Borrow<R>,
        E: Into<Box<dyn std::error::Error + Send + Sync>>,
        I: IntoIterator<Item = std::result::Result<T, E>>,
    {
        self.staging.push(b'[');

        let mut count = 0;
        for record in records {
            let record = record.map_err(|e| WriteError::Source(e.into()))?;
            if count > 0 {
                self.staging.push(b',');
            }
            self.write_record::<R>(record.borrow())?;
            count += 1;
        }

        self.staging.push(b']');
        self.flush_staged()?;
        self.flush_sink()?;

        Ok(count)
    }

    /// Encode a record, then push staged punctuation followed by the payload
    fn write_record<R: CatalogRecord>(&mut self, record: &R) -> Result<()> {
        let record: Cow<'_, R> = if self.options.exclude_images && !record.images().is_empty() {
            let mut owned = record.clone();
            owned.clear_images();
            Cow::Owned(owned)
        } else {
            Cow::Borrowed(record)
        };

        self.payload.clear();
        serde_json::to_writer(&mut self.payload, &*record)?;

        self.flush_staged()?;
        let sink = self.sink.as_mut().ok_or(WriteError::Closed)?;
        sink.write_all(&self.payload)?;

        Ok(())
    }

    fn flush_staged(&mut self) -> Result<()> {
        if self.staging.is_empty() {
            return Ok(());
        }

        let sink = self.sink.as_mut().ok_or(WriteError::Closed)?;
        sink.write_all(&self.staging)?;
        self.staging.clear();

        Ok(())
    }

    fn flush_sink(&mut self) -> Result<()> {
        let sink = self.sink.as_mut().ok_or(WriteError::Closed)?;
        sink.flush()?;
        Ok(())
    }

    fn ensure_writable(&mut self) -> Result<()> {
        if let Some(err) = self.pending.take() {
            self.poison(&err);
            return Err(err);
        }
        if self.sink.is_none() {
            return Err(WriteError::Closed);
        }

        match &self.poisoned {
            Some(reason) => Err(WriteError::Poisoned(reason.clone())),
            None => Ok(()),
        }
    }

    fn settle<T>(&mut self, result: Result<T>) -> Result<T> {
        if let Err(err) = &result {
            self.poison(err);
        }
        result
    }

    fn poison(&mut self, err: &WriteError) {
        warn!("json writer poisoned: {}", err);
        self.poisoned = Some(err.to_string());
    }
}

impl<W: Sink> Writer for JsonWriter<W> {
    fn write_artist(&mut self, artist: &Artist) -> Result<()> {
        self.write_one(artist)
    }

    fn write_artists(&mut self, artists: &[Artist]) -> Result<()> {
        self.write_many(artists)
    }

    fn write_label(&mut self, label: &Label) -> Result<()> {
        self.write_one(label)
    }

    fn write_labels(&mut self, labels: &[Label]) -> Result<()> {
        self.write_many(labels)
    }

    fn write_master(&mut self, master: &Master) -> Result<()> {
        self.write_one(master)
    }

    fn write_masters(&mut self, masters: &[Master]) -> Result<()> {
        self.write_many(masters)
    }

    fn write_release(&mut self, release: &Release) -> Result<()> {
        self.write_one(release)
    }

    fn write_releases(&mut self, releases: &[Release]) -> Result<()> {
        self.write_many(releases)
    }

    fn options(&self) -> Options {
        self.options
    }

    fn reset(&mut self) -> Result<()> {
        self.staging.clear();
        Ok(())
    }

    fn close(&mut self) -> Result<()> {
        self.staging.clear();

        match self.sink.take() {
            Some(sink) => {
                sink.close()?;
                debug!("closed json sink");
                Ok(())
            }
            None => Err(self.pending.take().unwrap_or(WriteError::Closed)),
        }
    }
}
