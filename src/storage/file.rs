//! Roster file
//!
//! Whole-file load and rewrite of the backing flat file.

use std::collections::HashSet;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use crate::error::Result;
use crate::record::{EmployeeId, EmployeeRecord};

use super::{decode_line, encode_line};

/// Loads and rewrites the backing file
pub struct RosterFile;

/// Result of a load
#[derive(Debug, Default, PartialEq)]
pub struct LoadResult {
    /// Number of records loaded
    pub records_loaded: usize,

    /// Number of non-empty lines that were malformed and skipped
    pub lines_skipped: usize,

    /// Number of lines skipped because their id was already loaded
    pub duplicates_skipped: usize,

    /// Number of lines holding invalid UTF-8, decoded with replacement
    pub lines_decoded_lossily: usize,

    /// Whether the file existed at all
    pub file_found: bool,
}

impl RosterFile {
    /// Read every well-formed record from `path`, in file order
    ///
    /// A missing file is not an error and yields no records. Malformed lines
    /// are skipped; a second line with an already-seen id is skipped too so
    /// ids stay unique. Bytes that are not valid UTF-8 are replaced with
    /// U+FFFD rather than failing the line. Any other read failure is
    /// returned as `Io`.
    pub fn load(path: &Path) -> Result<(Vec<EmployeeRecord>, LoadResult)> {
        let file = match File::open(path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Ok((Vec::new(), LoadResult::default()));
            }
            Err(e) => return Err(e.into()),
        };

        let mut result = LoadResult {
            file_found: true,
            ..LoadResult::default()
        };
        let mut records = Vec::new();
        let mut seen: HashSet<EmployeeId> = HashSet::new();

        for (index, raw) in BufReader::new(file).split(b'\n').enumerate() {
            let mut raw = raw?;
            if raw.last() == Some(&b'\r') {
                raw.pop();
            }

            let line = match String::from_utf8(raw) {
                Ok(line) => line,
                Err(e) => {
                    tracing::warn!(line = index + 1, "Replacing invalid UTF-8 bytes");
                    result.lines_decoded_lossily += 1;
                    String::from_utf8_lossy(e.as_bytes()).into_owned()
                }
            };
            if line.trim().is_empty() {
                continue;
            }

            match decode_line(&line) {
                Some(record) if !seen.insert(record.id) => {
                    tracing::warn!(line = index + 1, id = record.id, "Skipping duplicate id");
                    result.duplicates_skipped += 1;
                }
                Some(record) => records.push(record),
                None => {
                    tracing::warn!(line = index + 1, "Skipping malformed line");
                    result.lines_skipped += 1;
                }
            }
        }

        result.records_loaded = records.len();
        Ok((records, result))
    }

    /// Rewrite `path` from scratch with the given records
    pub fn save<'a, I>(path: &Path, records: I) -> Result<usize>
    where
        I: IntoIterator<Item = &'a EmployeeRecord>,
    {
        let mut writer = BufWriter::new(File::create(path)?);
        let mut written = 0;

        for record in records {
            writeln!(writer, "{}", encode_line(record))?;
            written += 1;
        }
        writer.flush()?;

        tracing::debug!(path = %path.display(), records = written, "Rewrote roster file");
        Ok(written)
    }
}
