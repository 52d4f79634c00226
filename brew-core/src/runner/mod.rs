pub mod trace;

pub mod prelude {
    pub use super::trace::*;
    pub use super::{
        run_file, run_source, run_source_with, LineError, LineOutcome, LineRecord, RunReport,
        COMMENT_MARKER, MULTILINE_COMMENT_CLOSE, MULTILINE_COMMENT_OPEN,
    };
}


use std::path::PathBuf;

use crate::{
    eval::prelude::{eval, RuntimeError, Session, Value},
    lexer::prelude::{Lexer, Spanned},
    parser::prelude::{Expression, ParseError, Parser},
    utils::prelude::Error,
};
use trace::TraceRecord;

pub const COMMENT_MARKER: char = '$';
pub const MULTILINE_COMMENT_OPEN: &str = "$$$";
/// Note the closer starts with the opener's characters; only the
/// comment-state flag disambiguates the two.
pub const MULTILINE_COMMENT_CLOSE: &str = "$$${";

#[derive(Debug, Clone, PartialEq)]
pub enum LineError {
    Parse(ParseError),
    Runtime(RuntimeError),
}

impl LineError {
    pub fn details(&self) -> (&'static str, Vec<String>) {
        match self {
            Self::Parse(error) => error.details(),
            Self::Runtime(error) => error.details(),
        }
    }

    pub fn into_error(self, path: PathBuf, src: String) -> Error {
        match self {
            Self::Parse(error) => Error::Parse { path, src, error },
            Self::Runtime(error) => Error::Runtime { path, src, error },
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum LineOutcome {
    /// Comment line, or a line inside an open multi-line comment.
    Skipped,
    /// No tokens, or a lone `order` keyword.
    Empty,
    Evaluated(Value),
    Failed(LineError),
}

/// Everything the pipeline derived from one line, kept for
/// diagnostics and the trace output.
#[derive(Debug, Clone, PartialEq)]
pub struct LineRecord {
    /// 1-based line number.
    pub number: usize,
    pub source: String,
    pub tokens: Vec<Spanned>,
    pub expression: Option<Expression>,
    pub accumulator: String,
    pub outcome: LineOutcome,
}

impl LineRecord {
    fn skipped(number: usize, source: &str) -> Self {
        Self {
            number,
            source: source.to_string(),
            tokens: vec![],
            expression: None,
            accumulator: String::new(),
            outcome: LineOutcome::Skipped,
        }
    }
}

/// The explicit result object of a run. Callers decide what to do
/// with it; there is no ambient output buffer anywhere.
#[derive(Debug, Clone, PartialEq)]
pub struct RunReport {
    pub src: String,
    pub lines: Vec<LineRecord>,
}

impl RunReport {
    pub fn values(&self) -> impl Iterator<Item = (usize, &Value)> {
        self.lines.iter().filter_map(|line| match &line.outcome {
            LineOutcome::Evaluated(value) => Some((line.number, value)),
            _ => None,
        })
    }

    pub fn failures(&self) -> impl Iterator<Item = (usize, &LineError)> {
        self.lines.iter().filter_map(|line| match &line.outcome {
            LineOutcome::Failed(error) => Some((line.number, error)),
            _ => None,
        })
    }

    pub fn has_failures(&self) -> bool {
        self.failures().next().is_some()
    }

    /// Per-line diagnostic records, one INPUT/TOKENS/AST/RESULT
    /// quartet per non-skipped line.
    pub fn to_trace(&self) -> Vec<TraceRecord> {
        let mut records = vec![];

        for line in &self.lines {
            if line.outcome == LineOutcome::Skipped {
                continue;
            }

            records.push(TraceRecord::new("INPUT", line.source.clone()));
            records.push(TraceRecord::new(
                "TOKENS",
                line.tokens
                    .iter()
                    .map(|(_, token, _)| token.to_string())
                    .collect::<Vec<String>>()
                    .join("; "),
            ));
            records.push(TraceRecord::new(
                "AST",
                match &line.expression {
                    Some(expression) => format!("{expression}"),
                    None => String::new(),
                },
            ));
            records.push(TraceRecord::new(
                "RESULT",
                match &line.outcome {
                    LineOutcome::Evaluated(value) => format!("{value}"),
                    LineOutcome::Failed(error) => {
                        let (message, _) = error.details();
                        format!("error: {message}")
                    }
                    LineOutcome::Empty | LineOutcome::Skipped => String::new(),
                },
            ));
        }

        records
    }
}

pub fn run_source(src: &str) -> RunReport {
    run_source_with(src, false)
}

/// Feeds each evaluable line through tokenizer, parser and evaluator,
/// in order, one at a time. A single flag tracks multi-line comment
/// state across lines; everything else is per-line. A failed line is
/// recorded and the run continues with the next line.
pub fn run_source_with(src: &str, with_legs: bool) -> RunReport {
    let mut lines = vec![];
    let mut in_comment = false;
    let mut offset = 0u32;

    for (idx, line) in src.split('\n').enumerate() {
        let number = idx + 1;

        let record = if in_comment {
            if line.contains(MULTILINE_COMMENT_CLOSE) {
                in_comment = false;
            }

            LineRecord::skipped(number, line)
        } else if line.trim_start().starts_with(COMMENT_MARKER) {
            if line.trim_start().starts_with(MULTILINE_COMMENT_OPEN) {
                in_comment = true;
            }

            LineRecord::skipped(number, line)
        } else {
            run_line(line, offset, number, with_legs)
        };

        lines.push(record);
        offset += line.len() as u32 + 1;
    }

    RunReport {
        src: src.to_string(),
        lines,
    }
}

fn run_line(line: &str, base: u32, number: usize, with_legs: bool) -> LineRecord {
    let tokens = Lexer::new(line, base).tokenize();

    let mut record = LineRecord {
        number,
        source: line.to_string(),
        tokens: tokens.clone(),
        expression: None,
        accumulator: String::new(),
        outcome: LineOutcome::Empty,
    };

    let expression = match Parser::new(tokens).parse() {
        Ok(Some(expression)) => expression,
        Ok(None) => return record,
        Err(error) => {
            record.outcome = LineOutcome::Failed(LineError::Parse(error));
            return record;
        }
    };

    // fresh session per line: no state crosses line boundaries
    let mut session = if with_legs {
        Session::with_legs()
    } else {
        Session::new()
    };

    record.outcome = match eval(&expression, &mut session) {
        Ok(value) => LineOutcome::Evaluated(value),
        Err(error) => LineOutcome::Failed(LineError::Runtime(error)),
    };
    record.expression = Some(expression);
    record.accumulator = session.accumulator;

    record
}

/// Reads and runs a whole source file. An unreadable file is an
/// error, never an empty run.
pub fn run_file(path: PathBuf, with_legs: bool) -> Result<RunReport, Error> {
    let src = std::fs::read_to_string(&path).map_err(|err| Error::StdIo { err: err.kind() })?;

    Ok(run_source_with(&src, with_legs))
}
