//! Newline-delimited JSON record source
//!
//! Stands in for the dump decoder: each non-blank line holds one already
//! decoded record.

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use std::io::BufRead;
use std::marker::PhantomData;

pub struct NdjsonSource<R, T> {
    reader: R,
    line: String,
    line_number: usize,
    _record: PhantomData<fn() -> T>,
}

impl<R: BufRead, T: DeserializeOwned> NdjsonSource<R, T> {
    pub fn new(reader: R) -> Self {
        NdjsonSource {
            reader,
            line: String::new(),
            line_number: 0,
            _record: PhantomData,
        }
    }
}

impl<R: BufRead, T: DeserializeOwned> Iterator for NdjsonSource<R, T> {
    type Item = Result<T>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            self.line.clear();
            self.line_number += 1;

            match self.reader.read_line(&mut self.line) {
                Ok(0) => return None,
                Ok(_) => {}
                Err(e) => {
                    let err = anyhow::Error::new(e)
                        .context(format!("Failed to read line {}", self.line_number));
                    return Some(Err(err));
                }
            }

            let line = self.line.trim();
            if line.is_empty() {
                continue;
            }

            return Some(
                serde_json::from_str(line)
                    .context(format!("Failed to parse record on line {}", self.line_number)),
            );
        }
    }
}
