use wsdl2ts_wsdl::types::{PropertyDef, SchemaItem};

use super::{
    diagnostics::Extracted,
    error,
    resolver::{is_reserved_name, ContextTag, TypeResolver},
    types::{Bucket, NamespaceBucket, Shape, TypeStatement},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaTypes {
    pub complex_types: NamespaceBucket<TypeStatement>,
    pub elements: NamespaceBucket<TypeStatement>,
}

fn fields(properties: &[PropertyDef]) -> impl Iterator<Item = (&str, Option<&str>)> {
    properties
        .iter()
        .map(|property| (property.name.as_str(), property.type_name.as_deref()))
}

/// Splits the schema items under `types` into complex types and top-level elements.
pub fn extract_schema_types(
    schema: &[SchemaItem],
    resolver: &TypeResolver<'_>,
) -> Result<Extracted<SchemaTypes>, error::Error> {
    let mut complex_types = NamespaceBucket::new(Bucket::ComplexTypes);
    let mut elements = NamespaceBucket::new(Bucket::Elements);
    let mut diagnostics = Vec::new();

    for item in schema {
        if let Some(name) = item.name().filter(|name| is_reserved_name(name)) {
            tracing::debug!(name, "skipping schema item named like a primitive");
            continue;
        }

        match item {
            SchemaItem::Element(element) => {
                let shape = match element.type_name.as_deref() {
                    Some(type_name) => Shape::Alias(resolver.resolve_reported(
                        Some(type_name),
                        ContextTag::Element,
                        &element.name,
                        &mut diagnostics,
                    )),
                    None => resolver.object_shape(
                        fields(&element.properties),
                        ContextTag::Element,
                        &mut diagnostics,
                    ),
                };

                diagnostics.extend(elements.insert(TypeStatement {
                    name: element.name.clone(),
                    shape,
                }));
            }

            SchemaItem::ComplexType(complex_type) => {
                let shape = resolver.object_shape(
                    fields(&complex_type.properties),
                    ContextTag::ComplexType,
                    &mut diagnostics,
                );

                diagnostics.extend(complex_types.insert(TypeStatement {
                    name: complex_type.name.clone(),
                    shape,
                }));
            }

            SchemaItem::Unknown { tag } => {
                return Err(error::Error::UnknownDefinitionTag(tag.clone()))
            }
        }
    }

    Ok(Extracted::new(
        SchemaTypes {
            complex_types,
            elements,
        },
        diagnostics,
    ))
}
