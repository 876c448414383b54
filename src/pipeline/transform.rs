//! Line transformation: numbering, uppercasing and word counting
//!
//! Every input line `i` becomes `Line {i}: {UPPER} [Words: {n}]`, where
//! `UPPER` is the line with trailing whitespace stripped and uppercased and
//! `n` is its number of whitespace-separated words.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use super::error::{Access, ProcessError};
use super::output::write_replacing;

/// One transformed line, derived from the input line at the same position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransformedLine {
    /// 1-based line number
    pub index: usize,
    /// Stripped and uppercased text
    pub text: String,
    /// Number of whitespace-separated words
    pub words: usize,
}

impl fmt::Display for TransformedLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Line {}: {} [Words: {}]", self.index, self.text, self.words)
    }
}

/// Result of a successful transform
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransformOutcome {
    pub input: PathBuf,
    pub output: PathBuf,
    /// Number of lines processed (equal in input and output)
    pub lines: usize,
    /// Sum of the word counts of all lines
    pub words: usize,
}

/// Whitespace as understood by the word count: Unicode whitespace plus the
/// information separators U+001C..=U+001F.
fn is_separator(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

/// Count maximal runs of non-whitespace characters
pub fn count_words(line: &str) -> usize {
    line.split(is_separator).filter(|word| !word.is_empty()).count()
}

/// Transform a single line given its 1-based index
pub fn transform_line(index: usize, line: &str) -> TransformedLine {
    let stripped = line.trim_end_matches(is_separator);
    TransformedLine {
        index,
        text: stripped.to_uppercase(),
        words: count_words(stripped),
    }
}

/// Split `text` into lines ending at `\r\n`, `\n` or a lone `\r`.
///
/// The terminators are not part of the lines. Empty text has no lines; a
/// final line without a terminator still counts.
pub fn split_lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut rest = text;
    while !rest.is_empty() {
        match rest.find(['\n', '\r']) {
            Some(pos) => {
                lines.push(&rest[..pos]);
                let terminator = if rest[pos..].starts_with("\r\n") { 2 } else { 1 };
                rest = &rest[pos + terminator..];
            }
            None => {
                lines.push(rest);
                break;
            }
        }
    }
    lines
}

/// Transform every line of `text`, in order.
///
/// Lines are split by `split_lines`. Empty text yields no lines.
pub fn transform_text(text: &str) -> Vec<TransformedLine> {
    split_lines(text)
        .into_iter()
        .enumerate()
        .map(|(i, line)| transform_line(i + 1, line))
        .collect()
}

/// Render transformed lines as newline-terminated output text
pub fn render(lines: &[TransformedLine]) -> String {
    let mut out = String::new();
    for line in lines {
        out.push_str(&line.to_string());
        out.push('\n');
    }
    out
}

/// Read `input`, transform all of its lines and write them to `output`.
///
/// Nothing is written when the input is empty or unreadable. The output file
/// is replaced only after its full content has been written.
pub fn transform(input: &Path, output: &Path) -> Result<TransformOutcome, ProcessError> {
    debug!(input = %input.display(), output = %output.display(), "transform started");

    let text =
        fs::read_to_string(input).map_err(|err| ProcessError::from_io(err, input, Access::Read))?;

    let lines = transform_text(&text);
    if lines.is_empty() {
        return Err(ProcessError::EmptyInput {
            path: input.to_path_buf(),
        });
    }

    write_replacing(output, &render(&lines))?;

    let outcome = TransformOutcome {
        input: input.to_path_buf(),
        output: output.to_path_buf(),
        lines: lines.len(),
        words: lines.iter().map(|l| l.words).sum(),
    };
    info!(lines = outcome.lines, words = outcome.words, "transform finished");
    Ok(outcome)
}
