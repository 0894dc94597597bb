//! Line-level grammar for the SVMlight / libSVM text format.
//!
//! One call to [`parse_line`] handles exactly one line, already stripped of
//! its terminator. The grammar, informally:
//!
//! ```text
//! <label> (qid:<uint>)? (<index>:<value>)* (# <comment>)?
//! ```
//!
//! - `label` is any token that parses as `f64`.
//! - A `qid:` annotation is recognized only as the second token; it is
//!   parsed and carried on the record, never as a feature.
//! - Feature tokens are `<u32>:<f64>` pairs, kept in file order with no
//!   sorting and no duplicate merging.
//! - Everything after the first `#` is comment text; one leading space is
//!   dropped so `# note` carries `note`.
//! - A line whose first character is `#` is a comment-only line and yields
//!   no record at all.
//!
//! One inherited quirk is kept on purpose: a record must have a second
//! token, so a bare label such as `1.0` is rejected with the historical
//! "missing qid label" message even though no qid was ever involved.

use crate::error::SyntaxError;

/// Outcome of parsing one line: either a skippable comment-only line or a
/// data record.
#[derive(Debug, Clone, PartialEq)]
pub enum ParsedLine {
    /// The line started with `#`; it contributes nothing to the dataset.
    Comment,
    /// A data record.
    Record(Record),
}

/// One parsed data line.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    /// Target value (class or regression target).
    pub label: f64,
    /// Query id, when the second token was a `qid:` annotation.
    pub qid: Option<u64>,
    /// `(index, value)` pairs exactly as they appeared on the line.
    pub features: Vec<(u32, f64)>,
    /// Inline comment payload, `None` when absent or empty.
    pub comment: Option<String>,
}

/// Parses one line of SVMlight / libSVM text.
///
/// Indices are taken as written; no index-base shift happens here. Callers
/// that want zero-based output from one-based files rebase after the whole
/// dataset is built (see [`crate::LoadOptions::index_base`]).
///
/// # Errors
///
/// - [`SyntaxError::EmptyLine`] for a zero-length line.
/// - [`SyntaxError::BadLabel`] when the first token is missing or does not
///   parse as `f64`.
/// - [`SyntaxError::MissingQid`] when the line ends after the label.
/// - [`SyntaxError::ExpectedColon`] for a malformed feature token; the
///   message carries the bad separator when index and value were otherwise
///   well formed, or the whole token when they were not.
pub fn parse_line(line: &str) -> Result<ParsedLine, SyntaxError> {
    if line.is_empty() {
        return Err(SyntaxError::EmptyLine);
    }
    if line.starts_with('#') {
        return Ok(ParsedLine::Comment);
    }

    let (data, comment) = split_comment(line);
    let mut tokens = data.split_whitespace();

    let label: f64 = tokens
        .next()
        .and_then(|tok| tok.parse().ok())
        .ok_or(SyntaxError::BadLabel)?;

    // Second token is mandatory, qid or first feature.
    let Some(second) = tokens.next() else {
        return Err(SyntaxError::MissingQid);
    };

    let mut qid = None;
    let mut features = Vec::new();
    if let Some(rest) = second.strip_prefix("qid:")
        && let Ok(q) = rest.parse::<u64>()
    {
        qid = Some(q);
    } else {
        features.push(parse_feature(second)?);
    }
    for tok in tokens {
        features.push(parse_feature(tok)?);
    }

    let comment = comment.filter(|text| !text.is_empty()).map(str::to_owned);
    Ok(ParsedLine::Record(Record {
        label,
        qid,
        features,
        comment,
    }))
}

/// Splits the data part from the comment payload at the first `#`. At most
/// one space after the `#` is dropped.
fn split_comment(line: &str) -> (&str, Option<&str>) {
    match line.find('#') {
        Some(pos) => {
            let payload = &line[pos + 1..];
            let payload = payload.strip_prefix(' ').unwrap_or(payload);
            (&line[..pos], Some(payload))
        }
        None => (line, None),
    }
}

/// Parses one `<index>:<value>` token.
///
/// Mirrors a `"%u%c%lf"` scan: leading digits, one separator character,
/// then the value. When all three pieces scan but the separator is not
/// `:`, the error names the separator; otherwise it names the whole token.
fn parse_feature(tok: &str) -> Result<(u32, f64), SyntaxError> {
    let split_at = tok
        .find(|c: char| !c.is_ascii_digit())
        .filter(|&pos| pos > 0);
    let Some(pos) = split_at else {
        return Err(SyntaxError::expected_colon(tok));
    };

    let (index_text, rest) = tok.split_at(pos);
    let Some(sep) = rest.chars().next() else {
        return Err(SyntaxError::expected_colon(tok));
    };
    let value_text = &rest[sep.len_utf8()..];

    let index: u32 = index_text
        .parse()
        .map_err(|_| SyntaxError::expected_colon(tok))?;
    let value: f64 = value_text
        .parse()
        .map_err(|_| SyntaxError::expected_colon(tok))?;
    if sep != ':' {
        return Err(SyntaxError::expected_colon(sep.to_string()));
    }
    Ok((index, value))
}
