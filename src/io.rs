//! CSV input of raw addresses and batched CSV output of records

use crate::error::Result;
use crate::record::{AddressRecord, HEADERS};
use log::{debug, info};
use std::fs::File;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

/// Rows buffered before each flush
pub const DEFAULT_BATCH_SIZE: usize = 100;

/// Reads the first field of every CSV row
///
/// Rows may have any number of fields; a row without fields yields an empty
/// address.
pub fn read_addresses<R: Read>(reader: R, has_headers: bool) -> Result<Vec<String>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(has_headers)
        .flexible(true)
        .from_reader(reader);
    let mut addresses = Vec::new();
    for result in rdr.records() {
        let record = result?;
        addresses.push(record.get(0).unwrap_or_default().to_string());
    }
    Ok(addresses)
}

/// Reads addresses from a CSV file
pub fn read_addresses_from_path<P: AsRef<Path>>(path: P, has_headers: bool) -> Result<Vec<String>> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let addresses = read_addresses(file, has_headers)?;
    info!("Read {} addresses from {}", addresses.len(), path.display());
    Ok(addresses)
}

/// `dir/<prefix>-<unix seconds>.csv`
pub fn default_output_path<P: AsRef<Path>>(dir: P, prefix: &str) -> PathBuf {
    let secs = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default();
    dir.as_ref().join(format!("{}-{}.csv", prefix, secs))
}

/// CSV writer emitting [`HEADERS`] once, then records in bounded batches
pub struct RecordWriter<W: Write> {
    writer: csv::Writer<W>,
    batch_size: usize,
    pending: usize,
    written: usize,
}

impl RecordWriter<File> {
    /// Creates (or truncates) the output file
    pub fn create<P: AsRef<Path>>(path: P, batch_size: usize) -> Result<Self> {
        let path = path.as_ref();
        let file = File::create(path)?;
        info!("Writing records to {}", path.display());
        Self::new(file, batch_size)
    }
}

impl<W: Write> RecordWriter<W> {
    /// Wraps `inner` and writes the header row; a batch size of 0 is treated as 1
    pub fn new(inner: W, batch_size: usize) -> Result<Self> {
        let mut writer = csv::Writer::from_writer(inner);
        writer.write_record(HEADERS)?;
        Ok(Self {
            writer,
            batch_size: batch_size.max(1),
            pending: 0,
            written: 0,
        })
    }

    /// Appends one record, flushing when the batch is full
    pub fn write(&mut self, record: &AddressRecord) -> Result<()> {
        self.writer.write_record(record.to_row())?;
        self.pending += 1;
        self.written += 1;
        if self.pending >= self.batch_size {
            self.flush()?;
        }
        Ok(())
    }

    /// Appends every record
    pub fn write_all<'a, I>(&mut self, records: I) -> Result<()>
    where
        I: IntoIterator<Item = &'a AddressRecord>,
    {
        for record in records {
            self.write(record)?;
        }
        Ok(())
    }

    /// Flushes buffered rows
    pub fn flush(&mut self) -> Result<()> {
        if self.pending > 0 {
            debug!("flushing batch of {} rows", self.pending);
        }
        self.writer.flush()?;
        self.pending = 0;
        Ok(())
    }

    /// Records written so far
    pub fn written(&self) -> usize {
        self.written
    }

    /// Flushes and returns the underlying writer
    pub fn finish(mut self) -> Result<W> {
        self.flush()?;
        let written = self.written;
        let inner = self
            .writer
            .into_inner()
            .map_err(|e| std::io::Error::new(e.error().kind(), e.error().to_string()))?;
        info!("Wrote {} records", written);
        Ok(inner)
    }
}
