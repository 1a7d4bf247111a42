//! Prime list I/O.
//!
//! [`write_primes`] persists a prime sequence as one decimal value per line.
//! [`read_primes`] loads any whitespace-separated list of decimal values, which
//! covers both that format and the multi-column layout of published prime
//! tables.

use std::io::{BufRead, BufReader, BufWriter, Read, Write};

use crate::sieve_error::SieveError;

/// Write each prime on its own line; returns how many were written.
pub fn write_primes<I, W>(primes: I, writer: W) -> Result<usize, SieveError>
where
    I: IntoIterator<Item = u64>,
    W: Write,
{
    let mut w = BufWriter::new(writer);
    let mut n = 0usize;
    for p in primes {
        writeln!(w, "{p}")?;
        n += 1;
    }
    w.flush()?;
    log::debug!("wrote {n} primes");
    Ok(n)
}

/// Parse whitespace-separated unsigned integers in reading order.
pub fn read_primes<R: Read>(reader: R) -> Result<Vec<u64>, SieveError> {
    let mut out = Vec::new();
    for (lineno, line) in BufReader::new(reader).lines().enumerate() {
        let line = line?;
        for token in line.split_whitespace() {
            let v = token.parse::<u64>().map_err(|_| SieveError::Parse {
                line: lineno + 1,
                token: token.to_string(),
            })?;
            out.push(v);
        }
    }
    Ok(out)
}
