//! Non-fatal findings collected while building the statement tree.
//!
//! Extraction never logs on its own; every pass hands its diagnostics back
//! next to the value it produced and the caller decides what to do with them.

use std::fmt;

use super::{resolver::ContextTag, types::Bucket};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiagnosticKind {
    /// The qualified name is neither a primitive nor in a declared namespace.
    UnresolvedType {
        reference: String,
        context: ContextTag,
    },

    /// No `type`, `element` or `message` attribute to resolve at all.
    MissingTypeReference { context: ContextTag },

    /// A statement with the same name already exists in the bucket.
    DuplicateDeclaration { bucket: Bucket },

    /// The service has no port with an address.
    MissingDefaultBinding,

    /// The document declares no `service`, so no client type is exported.
    MissingService,

    /// A declared name cannot be emitted as a TypeScript identifier.
    /// `bucket` is `None` for the exported client type.
    InvalidIdentifier { bucket: Option<Bucket> },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Name of the statement being built when the diagnostic was raised.
    pub subject: String,
    pub kind: DiagnosticKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extracted<T> {
    pub value: T,
    pub diagnostics: Vec<Diagnostic>,
}

impl Diagnostic {
    pub fn new(subject: impl Into<String>, kind: DiagnosticKind) -> Self {
        Self {
            subject: subject.into(),
            kind,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            DiagnosticKind::UnresolvedType { reference, context } => write!(
                f,
                "Unknown type {} in <{}> {}",
                reference,
                context.as_str(),
                self.subject
            ),
            DiagnosticKind::MissingTypeReference { context } => write!(
                f,
                "No type reference in <{}> {}",
                context.as_str(),
                self.subject
            ),
            DiagnosticKind::DuplicateDeclaration { bucket } => write!(
                f,
                "Duplicate declaration of {}.{} ignored",
                bucket.as_str(),
                self.subject
            ),
            DiagnosticKind::MissingDefaultBinding => {
                write!(f, "Service {} has no addressed port", self.subject)
            }
            DiagnosticKind::MissingService => {
                write!(f, "No <service> in {}, client type not exported", self.subject)
            }
            DiagnosticKind::InvalidIdentifier { bucket: Some(bucket) } => write!(
                f,
                "{}.{} is not a valid TypeScript identifier",
                bucket.as_str(),
                self.subject
            ),
            DiagnosticKind::InvalidIdentifier { bucket: None } => {
                write!(f, "{} is not a valid TypeScript identifier", self.subject)
            }
        }
    }
}

impl<T> Extracted<T> {
    pub fn new(value: T, diagnostics: Vec<Diagnostic>) -> Self {
        Self { value, diagnostics }
    }

    /// Moves the diagnostics into `sink` and returns the value.
    pub fn report(self, sink: &mut Vec<Diagnostic>) -> T {
        sink.extend(self.diagnostics);
        self.value
    }
}
