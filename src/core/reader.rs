//! Integer token reader + range validator.
//!
//! The source is treated as one stream of whitespace separated integers.
//! Line breaks only matter for diagnostics. Each token yields its leading
//! `i32` (`7x` reads as `7`, `12.5` as `12`); the first byte that cannot
//! continue an integer ends the pass quietly, keeping whatever was read.

use std::{
    fs::File,
    io::{BufRead, BufReader, Read},
};

use crate::core::{
    config::Scale,
    error::ChartError,
    reading::{Halt, ReadReport, Rejected},
};

const BUF_CAP: usize = 64 * 1024;

// --- Helpers ---
/// Rewrite U+2212 MINUS SIGN (`E2 88 92`) to ASCII `-` in place.
#[inline]
pub fn normalize_unicode_minus(buf: &mut Vec<u8>) {
    let (mut r, mut w) = (0, 0);
    while r < buf.len() {
        if buf[r..].starts_with(&[0xE2, 0x88, 0x92]) {
            buf[w] = b'-';
            r += 3;
        } else {
            buf[w] = buf[r];
            r += 1;
        }
        w += 1;
    }
    buf.truncate(w);
}

#[inline]
fn halt(line: usize, rest: &[u8]) -> Halt {
    Halt {
        line,
        token: String::from_utf8_lossy(rest).into_owned(),
    }
}

#[inline]
fn tokens(line: &[u8]) -> impl Iterator<Item = &[u8]> {
    line.split(u8::is_ascii_whitespace).filter(|t| !t.is_empty())
}

/// Read every integer token from `src`, keeping those `scale` accepts.
///
/// Only I/O failures are errors. An empty result is *not* an error here;
/// callers decide what "no data" means (see [`ChartError::EmptyResult`]).
pub fn read_temperatures<R: Read>(src: R, scale: &Scale) -> Result<ReadReport, ChartError> {
    let mut rdr = BufReader::with_capacity(BUF_CAP, src);
    let mut buf = Vec::<u8>::with_capacity(256);
    let mut report = ReadReport::default();
    let mut line_no = 0usize;

    loop {
        buf.clear();
        if rdr.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        line_no += 1;
        normalize_unicode_minus(&mut buf);

        for tok in tokens(&buf) {
            // Like a stream extraction: take the leading integer, stop at
            // the first byte that cannot continue it.
            let (value, used) = match lexical_core::parse_partial::<i32>(tok) {
                Ok((value, used)) if used > 0 => (value, used),
                _ => {
                    report.halted = Some(halt(line_no, tok));
                    return Ok(report);
                }
            };
            report.tokens += 1;
            if scale.contains(value) {
                report.accept(value);
            } else {
                report.rejected.push(Rejected {
                    ordinal: report.tokens,
                    line: line_no,
                    value,
                });
            }
            if used < tok.len() {
                report.halted = Some(halt(line_no, &tok[used..]));
                return Ok(report);
            }
        }
    }
    Ok(report)
}

/// Open `path` (or stdin for `-`) and run [`read_temperatures`] over it.
///
/// The file handle is dropped before this returns, on every path.
pub fn read_temperatures_from_path(path: &str, scale: &Scale) -> Result<ReadReport, ChartError> {
    read_temperatures_from_source(path, std::io::stdin(), scale)
}

/// [`read_temperatures_from_path`] with the reader to use for `-` supplied
/// by the caller, so a stdin lock already held (e.g. by a prompt) is reused
/// instead of taken twice.
pub fn read_temperatures_from_source<R: Read>(
    path: &str,
    stdin: R,
    scale: &Scale,
) -> Result<ReadReport, ChartError> {
    if path == "-" {
        return read_temperatures(stdin, scale);
    }
    let file = File::open(path).map_err(|source| ChartError::SourceUnavailable {
        path: path.to_owned(),
        source,
    })?;
    read_temperatures(file, scale)
}
