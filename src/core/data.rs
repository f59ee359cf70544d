//! Single-column loader for delimited text with zero-allocation float parsing.
//!
//! * The first record fixes the field count; later records must match.
//! * Double-quoted fields with `""` escapes are understood.
//! * A target field that is not a finite number is skipped, never fatal.

use std::{
    error::Error,
    fmt::{self, Display},
    io::{BufRead, BufReader, Read},
};

/// Values pulled from one column, in file order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Column {
    pub values: Vec<f64>,
    /// Non-blank records seen.
    pub rows: usize,
    /// Records whose target field did not parse.
    pub skipped: usize,
}

/// Where to find the values.
#[derive(Debug, Clone, Copy)]
pub struct ColumnSpec {
    pub index: usize,
    pub delimiter: u8,
}

// --- Error Handling ---
#[derive(Debug)]
pub struct ParseCsvError {
    pub line: usize,
    pub kind: ParseErrorKind,
}

#[derive(Debug)]
pub enum ParseErrorKind {
    Io(std::io::Error),
    BadColumnCount { expected: usize, got: usize },
    MissingColumn { column: usize, fields: usize },
    UnterminatedQuote,
    BareQuote,
}

impl Display for ParseCsvError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ParseErrorKind::Io(e) => write!(f, "I/O error on line {}: {}", self.line, e),
            ParseErrorKind::BadColumnCount { expected, got } => write!(
                f,
                "line {}: expected {expected} fields, got {got}",
                self.line
            ),
            ParseErrorKind::MissingColumn { column, fields } => write!(
                f,
                "line {}: no column {column} in a record of {fields} fields",
                self.line
            ),
            ParseErrorKind::UnterminatedQuote => {
                write!(f, "line {}: unterminated quoted field", self.line)
            }
            ParseErrorKind::BareQuote => {
                write!(f, "line {}: stray '\"' in field", self.line)
            }
        }
    }
}
impl Error for ParseCsvError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match &self.kind {
            ParseErrorKind::Io(e) => Some(e),
            _ => None,
        }
    }
}

// --- Helpers ---
#[inline]
fn trim(mut b: &[u8]) -> &[u8] {
    while !b.is_empty() && b[0].is_ascii_whitespace() {
        b = &b[1..];
    }
    while !b.is_empty() && b[b.len() - 1].is_ascii_whitespace() {
        b = &b[..b.len() - 1];
    }
    b
}

#[inline]
pub fn normalize_unicode_minus(buf: &mut Vec<u8>) {
    let (mut r, mut w) = (0, 0);
    while r < buf.len() {
        if r + 2 < buf.len() && buf[r] == 0xE2 && buf[r + 1] == 0x88 && buf[r + 2] == 0x92 {
            buf[w] = b'-';
            r += 3;
            w += 1;
        } else {
            if r != w {
                buf[w] = buf[r];
            }
            r += 1;
            w += 1;
        }
    }
    buf.truncate(w);
}

/// Finite float or nothing.
#[inline]
fn parse_value(bytes: &[u8]) -> Option<f64> {
    lexical_core::parse::<f64>(trim(bytes))
        .ok()
        .filter(|v| v.is_finite())
}

/// Walk one record, copying field `column` (unquoted) into `target`.
/// Returns the field count.
fn scan_record(
    line: &[u8],
    delim: u8,
    column: usize,
    target: &mut Vec<u8>,
) -> Result<usize, ParseErrorKind> {
    target.clear();
    let mut count = 0usize;
    let mut pos = 0usize;

    loop {
        let capture = count == column;

        if line.get(pos) == Some(&b'"') {
            pos += 1;
            loop {
                let Some(q) = line[pos..].iter().position(|&b| b == b'"') else {
                    return Err(ParseErrorKind::UnterminatedQuote);
                };
                if capture {
                    target.extend_from_slice(&line[pos..pos + q]);
                }
                pos += q + 1;
                // "" is an escaped quote
                if line.get(pos) == Some(&b'"') {
                    if capture {
                        target.push(b'"');
                    }
                    pos += 1;
                } else {
                    break;
                }
            }
            count += 1;
            match line.get(pos) {
                None => break,
                Some(&b) if b == delim => pos += 1,
                Some(_) => return Err(ParseErrorKind::BareQuote),
            }
        } else {
            let end = line[pos..]
                .iter()
                .position(|&b| b == delim)
                .map_or(line.len(), |p| pos + p);
            let field = &line[pos..end];
            if field.contains(&b'"') {
                return Err(ParseErrorKind::BareQuote);
            }
            if capture {
                target.extend_from_slice(field);
            }
            count += 1;
            if end == line.len() {
                break;
            }
            pos = end + 1;
        }
    }
    Ok(count)
}

// --- Ingest ---
const BUF_CAP: usize = 1 << 20; // 1 MiB

/// Read every record of `src` and collect column `spec.index`.
///
/// # Errors
/// I/O failure, inconsistent field counts, a first record without the
/// target column, or malformed quoting. Unparseable values are not errors.
pub fn read_column<R: Read>(src: R, spec: ColumnSpec) -> Result<Column, ParseCsvError> {
    let mut rdr = BufReader::with_capacity(BUF_CAP, src);
    let mut buf = Vec::<u8>::with_capacity(256);
    let mut field = Vec::<u8>::with_capacity(32);
    let mut out = Column::default();
    let mut expected: Option<usize> = None;
    let mut line_no = 0usize;

    loop {
        buf.clear();
        let n = rdr.read_until(b'\n', &mut buf).map_err(|e| ParseCsvError {
            line: line_no,
            kind: ParseErrorKind::Io(e),
        })?;
        if n == 0 {
            break;
        }
        line_no += 1;

        if buf.ends_with(b"\n") {
            buf.pop();
        }
        if buf.ends_with(b"\r") {
            buf.pop();
        }

        normalize_unicode_minus(&mut buf);
        if buf.is_empty() {
            continue;
        }

        let fields = scan_record(&buf, spec.delimiter, spec.index, &mut field).map_err(|kind| {
            ParseCsvError {
                line: line_no,
                kind,
            }
        })?;

        match expected {
            None => {
                if fields <= spec.index {
                    return Err(ParseCsvError {
                        line: line_no,
                        kind: ParseErrorKind::MissingColumn {
                            column: spec.index,
                            fields,
                        },
                    });
                }
                expected = Some(fields);
            }
            Some(want) if want != fields => {
                return Err(ParseCsvError {
                    line: line_no,
                    kind: ParseErrorKind::BadColumnCount {
                        expected: want,
                        got: fields,
                    },
                });
            }
            Some(_) => {}
        }

        out.rows += 1;
        match parse_value(&field) {
            Some(v) => out.values.push(v),
            None => out.skipped += 1,
        }
    }
    Ok(out)
}

/// `-` reads standard input.
///
/// # Errors
/// File-open failure plus everything [`read_column`] reports.
pub fn read_column_from_path(path: &str, spec: ColumnSpec) -> Result<Column, ParseCsvError> {
    if path == "-" {
        read_column(std::io::stdin().lock(), spec)
    } else {
        use std::fs::File;
        read_column(
            File::open(path).map_err(|e| ParseCsvError {
                line: 0,
                kind: ParseErrorKind::Io(e),
            })?,
            spec,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CSV: ColumnSpec = ColumnSpec {
        index: 1,
        delimiter: b',',
    };

    fn load(text: &str) -> Result<Column, ParseCsvError> {
        read_column(text.as_bytes(), CSV)
    }

    #[test]
    fn takes_the_second_field() {
        let col = load("a,1.5,x\nb,2,y\nc,-3e2,z\n").unwrap();
        assert_eq!(col.values, vec![1.5, 2.0, -300.0]);
        assert_eq!(col.rows, 3);
        assert_eq!(col.skipped, 0);
    }

    #[test]
    fn unparseable_rows_are_skipped() {
        let col = load("name,value\nx,1\ny,oops\nz,\nw,NaN\nv,inf\nu, 4 \n").unwrap();
        assert_eq!(col.values, vec![1.0, 4.0]);
        assert_eq!(col.rows, 7);
        assert_eq!(col.skipped, 5);
    }

    #[test]
    fn crlf_blank_lines_and_unicode_minus() {
        let col = load("a,1\r\n\r\n\nb,\u{2212}2.5\r\n").unwrap();
        assert_eq!(col.values, vec![1.0, -2.5]);
        assert_eq!(col.rows, 2);
    }

    #[test]
    fn quoted_fields() {
        let col = load("\"a,b\",\"7\"\n\"say \"\"hi\"\"\",8\nq,\"1,5\"\n").unwrap();
        assert_eq!(col.values, vec![7.0, 8.0]);
        assert_eq!(col.skipped, 1);
    }

    #[test]
    fn other_delimiter_and_column() {
        let spec = ColumnSpec {
            index: 0,
            delimiter: b'\t',
        };
        let col = read_column("3\tx\n4\ty\n".as_bytes(), spec).unwrap();
        assert_eq!(col.values, vec![3.0, 4.0]);
    }

    #[test]
    fn trailing_delimiter_is_an_empty_field() {
        let mut f = Vec::new();
        assert_eq!(scan_record(b"a,", b',', 1, &mut f).unwrap(), 2);
        assert!(f.is_empty());
    }

    #[test]
    fn inconsistent_field_count_is_fatal() {
        let err = load("a,1\nb,2,3\n").unwrap_err();
        assert_eq!(err.line, 2);
        assert!(matches!(
            err.kind,
            ParseErrorKind::BadColumnCount {
                expected: 2,
                got: 3
            }
        ));
    }

    #[test]
    fn missing_column_is_fatal() {
        let err = load("1\n2\n").unwrap_err();
        assert!(matches!(
            err.kind,
            ParseErrorKind::MissingColumn {
                column: 1,
                fields: 1
            }
        ));
    }

    #[test]
    fn bad_quoting_is_fatal() {
        assert!(matches!(
            load("a,\"1\n").unwrap_err().kind,
            ParseErrorKind::UnterminatedQuote
        ));
        assert!(matches!(
            load("a,1\"2\n").unwrap_err().kind,
            ParseErrorKind::BareQuote
        ));
        assert!(matches!(
            load("a,\"1\"2\n").unwrap_err().kind,
            ParseErrorKind::BareQuote
        ));
    }

    #[test]
    fn empty_input_is_not_an_error() {
        assert_eq!(load("").unwrap(), Column::default());
    }

    #[test]
    fn missing_file_reports_io() {
        let err = read_column_from_path("/definitely/not/here.csv", CSV).unwrap_err();
        assert!(matches!(err.kind, ParseErrorKind::Io(_)));
    }
}
