use wsdl2ts_wsdl::{split_qualified_name, types::Document};

use super::{
    diagnostics::{Diagnostic, DiagnosticKind, Extracted},
    resolver::{ContextTag, TypeResolver},
    types::{is_identifier, ServiceBinding, TypeReference},
};

/// Finds the exported client name and the port type behind the service's addressed port.
///
/// Without a `service` element there is no client to export; that is reported,
/// not treated as malformed input.
pub fn resolve_service(
    document: &Document,
    resolver: &TypeResolver<'_>,
) -> Extracted<Option<ServiceBinding>> {
    let service = match document.services.first() {
        Some(service) => service,
        None => {
            return Extracted::new(
                None,
                vec![Diagnostic::new("definitions", DiagnosticKind::MissingService)],
            )
        }
    };

    let mut diagnostics = Vec::new();

    if !is_identifier(&service.name) {
        diagnostics.push(Diagnostic::new(
            &service.name,
            DiagnosticKind::InvalidIdentifier { bucket: None },
        ));
    }

    let default_binding = match service.ports.iter().find(|port| port.addressed) {
        Some(port) => {
            let binding = port.binding.as_deref().map(|binding| {
                let (_, local_name) = split_qualified_name(binding);

                document
                    .binding(local_name)
                    .and_then(|binding| binding.port_type.as_deref())
                    .unwrap_or(binding)
            });

            resolver.resolve_reported(binding, ContextTag::Port, &service.name, &mut diagnostics)
        }

        None => {
            diagnostics.push(Diagnostic::new(
                &service.name,
                DiagnosticKind::MissingDefaultBinding,
            ));
            TypeReference::Unresolved
        }
    };

    Extracted::new(
        Some(ServiceBinding {
            service_name: service.name.clone(),
            default_binding,
        }),
        diagnostics,
    )
}
