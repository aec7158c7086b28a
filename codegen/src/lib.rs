use wsdl2ts_wsdl::{self as wsdl, types::Document, LoadOptions};

mod assembler;
mod messages;
mod operations;
mod schema;
mod service;

pub mod diagnostics;
pub mod error;
pub mod resolver;
pub mod types;
pub mod writer;

use diagnostics::Extracted;
use resolver::TypeResolver;
use types::SourceFile;

/// Fetches, parses and converts a WSDL from a path or URL.
pub fn from_source<S: AsRef<str>>(
    source: S,
    options: &LoadOptions,
) -> Result<Extracted<SourceFile>, error::Error> {
    let document = wsdl::parse(source, options)?;
    from_document(&document)
}

pub fn from_str(xml: &str) -> Result<Extracted<SourceFile>, error::Error> {
    let document = wsdl::parse_str(xml)?;
    from_document(&document)
}

pub fn from_document(document: &Document) -> Result<Extracted<SourceFile>, error::Error> {
    let resolver = TypeResolver::new(&document.namespaces);
    let mut diagnostics = Vec::new();

    let schema = schema::extract_schema_types(&document.schema, &resolver)?.report(&mut diagnostics);
    let messages = messages::extract_messages(&document.messages, &resolver).report(&mut diagnostics);
    let operations =
        operations::extract_operations(&document.port_types, &resolver).report(&mut diagnostics);
    let service = service::resolve_service(document, &resolver).report(&mut diagnostics);

    tracing::debug!(
        complex_types = schema.complex_types.len(),
        elements = schema.elements.len(),
        messages = messages.len(),
        operations = operations.len(),
        diagnostics = diagnostics.len(),
        "assembled statements"
    );

    Ok(Extracted::new(
        assembler::assemble(schema, messages, operations, service.as_ref()),
        diagnostics,
    ))
}
