//! Fixed-record store: one [`Credit`] per file, no header, no framing.
//!
//! File handles live only for the duration of a call and are closed on drop,
//! including on every error path.
use crate::error::{StoreError, StoreResult};
use crate::record::{Credit, RECORD_SIZE};
use std::fs::{File, OpenOptions};
use std::io::{self, BufReader, BufWriter, ErrorKind, Read, Write};
use std::path::Path;
use tracing::debug;

/// Write the encoded record to `w`. A writer that stops accepting bytes
/// part way through yields `WriteFailed`.
pub fn write_to<W: Write>(w: &mut W, credit: &Credit) -> StoreResult<()> {
    let bytes = credit.encode()?;
    w.write_all(&bytes).map_err(StoreError::WriteFailed)
}

/// Read exactly one record from `r`. Anything after the first
/// [`RECORD_SIZE`] bytes is left unread.
pub fn read_from<R: Read>(r: &mut R) -> StoreResult<Credit> {
    let mut buf = [0u8; RECORD_SIZE];
    let n = fill(r, &mut buf).map_err(StoreError::ReadFailed)?;
    if n < RECORD_SIZE {
        return Err(StoreError::ShortRead { expected: RECORD_SIZE, actual: n });
    }
    Credit::decode(&buf)
}

/// Create or truncate `path` and write one record to it.
pub fn write<P: AsRef<Path>>(path: P, credit: &Credit) -> StoreResult<()> {
    let path = path.as_ref();
    let file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(path)
        .map_err(StoreError::OpenFailed)?;
    let mut w = BufWriter::new(file);
    write_to(&mut w, credit)?;
    w.flush().map_err(StoreError::WriteFailed)?;
    debug!(path = %path.display(), bytes = RECORD_SIZE, account = credit.account_number, "wrote record");
    Ok(())
}

/// Read the first record stored at `path`.
pub fn read<P: AsRef<Path>>(path: P) -> StoreResult<Credit> {
    let path = path.as_ref();
    let file = File::open(path).map_err(StoreError::OpenFailed)?;
    let mut r = BufReader::new(file);
    let credit = read_from(&mut r)?;
    debug!(path = %path.display(), bytes = RECORD_SIZE, account = credit.account_number, "read record");
    Ok(credit)
}

// Like read_exact, but reports how many bytes arrived before EOF.
fn fill<R: Read>(r: &mut R, buf: &mut [u8]) -> io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match r.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}
