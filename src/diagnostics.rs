use crate::runtime::error::MemoryError;
use miette::{Diagnostic, NamedSource, Report, SourceSpan};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
#[error("{error}")]
pub struct MemoryDiagnostic {
    #[source_code]
    src: NamedSource<String>,
    #[label("{label}")]
    span: Option<SourceSpan>,
    #[help]
    help: Option<String>,
    error: MemoryError,
    label: String,
}

impl MemoryDiagnostic {
    pub fn from_error(src: NamedSource<String>, error: MemoryError) -> Self {
        let label = match &error {
            MemoryError::UndeclaredVariable { .. } => "not declared".to_string(),
            MemoryError::UnpopulatedRead { .. } => "read before assignment".to_string(),
            MemoryError::TypeMismatch { expected, .. } => format!("expects a `{expected}` value"),
            MemoryError::CorruptHeapIndex { .. } => String::new(),
        };
        Self {
            src,
            span: error.span().map(SourceSpan::from),
            help: error.help().map(|help| help.to_string()),
            error,
            label,
        }
    }

    pub fn error(&self) -> &MemoryError {
        &self.error
    }
}

pub fn report_memory_error(path: &Path, source: &str, error: &MemoryError) {
    if error.is_fatal() {
        eprintln!("Internal interpreter error: {}", error);
        return;
    }
    let src = NamedSource::new(path.display().to_string(), source.to_string());
    let diagnostic = MemoryDiagnostic::from_error(src, error.clone());
    eprintln!("{:?}", Report::new(diagnostic));
}
