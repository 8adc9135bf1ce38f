//! Coordinate-format matrix input parsing.
//!
//! Graph instances arrive as sparse coordinate files: one `row col [value]`
//! triple per line, with `%`-prefixed comment lines. Two dialects are
//! accepted:
//!
//! - **Matrix Market**: a `%%MatrixMarket` banner, comments, a
//!   `rows cols nnz` size line, then 1-indexed triples.
//! - **Bare coordinate lists**: no banner, every non-comment line is a
//!   0-indexed triple; the matrix dimension is inferred from the largest
//!   index seen.
//!
//! Entry values are ignored — only the topology matters, pheromone is
//! initialized separately.

use nom::branch::alt;
use nom::bytes::complete::tag;
use nom::character::complete::{digit1, line_ending, not_line_ending, space0, space1};
use nom::combinator::{eof, map_res, opt};
use nom::number::complete::double;
use nom::sequence::preceded;
use nom::IResult;

use crate::error::{Error, Result};

/// A parsed coordinate matrix: square dimension plus zero-indexed entries.
///
/// Entries are returned exactly as listed (duplicates, mirrored pairs and
/// diagonal entries included); deduplication is the graph's concern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoordinateMatrix {
    /// Matrix dimension (`N` for an `N x N` shape).
    pub dim: usize,
    /// Zero-indexed `(row, col)` entries in file order.
    pub entries: Vec<(usize, usize)>,
}

/// Parses a coordinate-format matrix from a string.
pub fn parse(input: &str) -> Result<CoordinateMatrix> {
    let cleaned = input.replace('\r', "");
    let bannered = cleaned.starts_with("%%");
    let mut rest = cleaned.as_str();

    rest = skip_filler(rest);

    let declared_dim = if bannered {
        let (r, (rows, cols, _nnz)) = size_line(rest)
            .map_err(|_| Error::Parse(format!("missing size line near {:?}", head_of(rest))))?;
        rest = r;
        Some(rows.max(cols))
    } else {
        None
    };

    let mut raw = Vec::new();
    loop {
        rest = skip_filler(rest);
        if rest.is_empty() {
            break;
        }
        match entry_line(rest) {
            Ok((r, entry)) => {
                raw.push(entry);
                rest = r;
            }
            Err(_) => {
                return Err(Error::Parse(format!("bad entry line {:?}", head_of(rest))));
            }
        }
    }

    match declared_dim {
        Some(dim) => {
            // Matrix Market triples are 1-indexed.
            let mut entries = Vec::with_capacity(raw.len());
            for (a, b) in raw {
                if a == 0 || b == 0 {
                    return Err(Error::Parse(format!(
                        "entry ({a}, {b}) is 0-indexed in a Matrix Market file"
                    )));
                }
                if a > dim || b > dim {
                    return Err(Error::Parse(format!(
                        "entry ({a}, {b}) outside declared {dim}x{dim} shape"
                    )));
                }
                entries.push((a - 1, b - 1));
            }
            Ok(CoordinateMatrix { dim, entries })
        }
        None => {
            let dim = raw
                .iter()
                .map(|&(a, b)| a.max(b) + 1)
                .max()
                .unwrap_or(0);
            Ok(CoordinateMatrix { dim, entries: raw })
        }
    }
}

/// First line of the remaining input, for error messages.
fn head_of(s: &str) -> &str {
    s.lines().next().unwrap_or("")
}

/// Consumes any run of comment and blank lines.
fn skip_filler(mut s: &str) -> &str {
    loop {
        match alt((comment_line, blank_line))(s) {
            Ok((r, _)) => s = r,
            Err(_) => return s,
        }
    }
}

/// A `%`-prefixed line (the `%%MatrixMarket` banner included).
fn comment_line(s: &str) -> IResult<&str, ()> {
    let (s, _) = tag("%")(s)?;
    let (s, _) = not_line_ending(s)?;
    let (s, _) = opt(line_ending)(s)?;
    Ok((s, ()))
}

fn blank_line(s: &str) -> IResult<&str, ()> {
    let (s, _) = space0(s)?;
    let (s, _) = line_ending(s)?;
    Ok((s, ()))
}

fn integer(s: &str) -> IResult<&str, usize> {
    map_res(digit1, str::parse)(s)
}

fn end_of_line(s: &str) -> IResult<&str, &str> {
    alt((line_ending, eof))(s)
}

/// `rows cols nnz`
fn size_line(s: &str) -> IResult<&str, (usize, usize, usize)> {
    let (s, _) = space0(s)?;
    let (s, rows) = integer(s)?;
    let (s, _) = space1(s)?;
    let (s, cols) = integer(s)?;
    let (s, _) = space1(s)?;
    let (s, nnz) = integer(s)?;
    let (s, _) = space0(s)?;
    let (s, _) = end_of_line(s)?;
    Ok((s, (rows, cols, nnz)))
}

/// `row col [value]` — the value, when present, is parsed and discarded.
fn entry_line(s: &str) -> IResult<&str, (usize, usize)> {
    let (s, _) = space0(s)?;
    let (s, a) = integer(s)?;
    let (s, _) = space1(s)?;
    let (s, b) = integer(s)?;
    let (s, _) = opt(preceded(space1, double))(s)?;
    let (s, _) = space0(s)?;
    let (s, _) = end_of_line(s)?;
    Ok((s, (a, b)))
}

#[cfg(test)]
mod tests {
    use super::*;

    const K3_MM: &str = "%%MatrixMarket matrix coordinate pattern symmetric\n\
                         % a triangle\n\
                         3 3 3\n\
                         2 1\n\
                         3 1\n\
                         3 2\n";

    #[test]
    fn test_parse_matrix_market() {
        let m = parse(K3_MM).unwrap();
        assert_eq!(m.dim, 3);
        assert_eq!(m.entries, vec![(1, 0), (2, 0), (2, 1)]);
    }

    #[test]
    fn test_parse_matrix_market_with_values() {
        let input = "%%MatrixMarket matrix coordinate real symmetric\n\
                     2 2 1\n\
                     2 1 3.5e-1\n";
        let m = parse(input).unwrap();
        assert_eq!(m.dim, 2);
        assert_eq!(m.entries, vec![(1, 0)]);
    }

    #[test]
    fn test_parse_bare_triples_are_zero_indexed() {
        let input = "0 1\n1 2\n0 2 1.0\n";
        let m = parse(input).unwrap();
        assert_eq!(m.dim, 3);
        assert_eq!(m.entries, vec![(0, 1), (1, 2), (0, 2)]);
    }

    #[test]
    fn test_parse_skips_comments_and_blank_lines() {
        let input = "% header comment\n\n0 1\n\n% between\n1 2\n";
        let m = parse(input).unwrap();
        assert_eq!(m.entries, vec![(0, 1), (1, 2)]);
    }

    #[test]
    fn test_parse_handles_crlf() {
        let input = "%%MatrixMarket matrix coordinate pattern symmetric\r\n2 2 1\r\n2 1\r\n";
        let m = parse(input).unwrap();
        assert_eq!(m.entries, vec![(1, 0)]);
    }

    #[test]
    fn test_parse_empty_input() {
        let m = parse("").unwrap();
        assert_eq!(m.dim, 0);
        assert!(m.entries.is_empty());
    }

    #[test]
    fn test_parse_rejects_malformed_line() {
        let err = parse("0 1\nnot numbers\n").unwrap_err();
        assert!(err.to_string().contains("not numbers"));
    }

    #[test]
    fn test_parse_rejects_zero_index_in_matrix_market() {
        let input = "%%MatrixMarket matrix coordinate pattern symmetric\n2 2 1\n0 1\n";
        assert!(parse(input).is_err());
    }

    #[test]
    fn test_parse_rejects_entry_outside_shape() {
        let input = "%%MatrixMarket matrix coordinate pattern symmetric\n2 2 1\n3 1\n";
        assert!(parse(input).is_err());
    }

    #[test]
    fn test_parse_missing_size_line() {
        let input = "%%MatrixMarket matrix coordinate pattern symmetric\n";
        assert!(parse(input).is_err());
    }
}
