//! Error types and diagnostic reporting

use codespan_reporting::diagnostic::{Diagnostic, Label};
use codespan_reporting::files::SimpleFiles;
use codespan_reporting::term;
use codespan_reporting::term::termcolor::{ColorChoice, StandardStream, WriteColor};
use thiserror::Error;

/// Byte range in a script
pub type Span = std::ops::Range<usize>;

/// Host error, with a source location for script errors
#[derive(Error, Debug)]
pub enum HostError {
    #[error("Script error at {span:?}: {message}")]
    Script { message: String, span: Span },

    #[error("Invalid option: {message}")]
    Config { message: String },

    #[error("Report formatting failed")]
    Format(#[from] std::fmt::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl HostError {
    pub fn script(message: impl Into<String>, span: Span) -> Self {
        Self::Script {
            message: message.into(),
            span,
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    pub fn span(&self) -> Option<&Span> {
        match self {
            Self::Script { span, .. } => Some(span),
            _ => None,
        }
    }
}

pub type HostResult<T> = Result<T, HostError>;

/// Diagnostic reporter for pretty error output
pub struct DiagnosticReporter {
    files: SimpleFiles<String, String>,
    config: term::Config,
}

impl DiagnosticReporter {
    pub fn new() -> Self {
        Self {
            files: SimpleFiles::new(),
            config: term::Config::default(),
        }
    }

    pub fn add_file(&mut self, name: impl Into<String>, source: impl Into<String>) -> usize {
        self.files.add(name.into(), source.into())
    }

    pub fn diagnostic(&self, file_id: usize, error: &HostError) -> Diagnostic<usize> {
        match error {
            HostError::Script { message, span } => Diagnostic::error()
                .with_message("Script error")
                .with_labels(vec![Label::primary(file_id, span.clone()).with_message(message)]),

            HostError::Config { message } => {
                Diagnostic::error().with_message(format!("Invalid option: {message}"))
            }

            HostError::Format(err) => {
                Diagnostic::error().with_message(format!("Formatting error: {err}"))
            }

            HostError::Io(err) => Diagnostic::error().with_message(format!("IO error: {err}")),
        }
    }

    /// Render the diagnostic for `error` to `writer`
    pub fn emit(&self, writer: &mut dyn WriteColor, file_id: usize, error: &HostError) {
        let diagnostic = self.diagnostic(file_id, error);
        if let Err(err) = term::emit(writer, &self.config, &self.files, &diagnostic) {
            log::warn!("could not render diagnostic: {err}");
        }
    }

    /// Render the diagnostic for `error` to stderr
    pub fn report_error(&self, file_id: usize, error: &HostError) {
        let writer = StandardStream::stderr(ColorChoice::Auto);
        self.emit(&mut writer.lock(), file_id, error);
    }
}

impl Default for DiagnosticReporter {
    fn default() -> Self {
        Self::new()
    }
}
