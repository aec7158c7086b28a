use wsdl2ts_wsdl::types::PortTypeDef;

use super::{
    diagnostics::Extracted,
    resolver::{ContextTag, TypeResolver},
    types::{Bucket, MethodStyle, NamespaceBucket, OperationMethod, OperationNamespace},
};

/// One namespace per port type, each operation as a callback and a promise method.
pub fn extract_operations(
    port_types: &[PortTypeDef],
    resolver: &TypeResolver<'_>,
) -> Extracted<NamespaceBucket<OperationNamespace>> {
    let mut bucket = NamespaceBucket::new(Bucket::Operations);
    let mut diagnostics = Vec::new();

    for port_type in port_types {
        let mut methods = Vec::with_capacity(port_type.operations.len() * 2);

        for operation in &port_type.operations {
            let input = resolver.resolve_reported(
                operation.input.as_deref(),
                ContextTag::Input,
                &operation.name,
                &mut diagnostics,
            );
            let output = resolver.resolve_reported(
                operation.output.as_deref(),
                ContextTag::Output,
                &operation.name,
                &mut diagnostics,
            );

            for style in [MethodStyle::Callback, MethodStyle::Promise] {
                methods.push(OperationMethod {
                    operation: operation.name.clone(),
                    input: input.clone(),
                    output: output.clone(),
                    style,
                });
            }
        }

        diagnostics.extend(bucket.insert(OperationNamespace {
            name: port_type.name.clone(),
            methods,
        }));
    }

    Extracted::new(bucket, diagnostics)
}
