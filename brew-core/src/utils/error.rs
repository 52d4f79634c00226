use std::path::PathBuf;

use termcolor::Buffer;
use thiserror::Error;

use crate::{eval::prelude::RuntimeError, parser::prelude::ParseError};
use super::diagnostic::{Diagnostic, Label, Level, Location};

#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    #[error("failed to parse source line")]
    Parse {
        path: PathBuf,
        src: String,
        error: ParseError,
    },
    #[error("evaluation failed")]
    Runtime {
        path: PathBuf,
        src: String,
        error: RuntimeError,
    },
    #[error("IO operation failed")]
    StdIo { err: std::io::ErrorKind },
}

impl Error {
    pub fn pretty(&self, buf: &mut Buffer) {
        use std::io::Write;

        for diagnostic in self.to_diagnostics() {
            diagnostic.write(buf);
            writeln!(buf).expect("write new line diagnostic");
        }
    }

    pub fn to_diagnostics(&self) -> Vec<Diagnostic> {
        match self {
            Error::Parse { path, src, error } => {
                let (label, extra) = error.details();
                let text = extra.join("\n");

                vec![Diagnostic {
                    title: "Syntax error".into(),
                    text,
                    level: Level::Error,
                    location: Some(Location {
                        src,
                        path: path.clone(),
                        label: Label {
                            text: Some(label.to_string()),
                            span: error.span,
                        },
                    }),
                }]
            }
            Error::Runtime { path, src, error } => {
                let (label, extra) = error.details();
                let text = extra.join("\n");

                vec![Diagnostic {
                    title: "Evaluation error".into(),
                    text,
                    level: Level::Error,
                    location: Some(Location {
                        src,
                        path: path.clone(),
                        label: Label {
                            text: Some(label.to_string()),
                            span: error.location,
                        },
                    }),
                }]
            }
            Error::StdIo { err } => {
                vec![Diagnostic {
                    title: "Standard IO error".into(),
                    text: format!("{err}"),
                    level: Level::Error,
                    location: None,
                }]
            }
        }
    }
}
