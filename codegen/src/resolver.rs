use wsdl2ts_wsdl::{split_qualified_name, types::Namespaces};

use super::{
    diagnostics::{Diagnostic, DiagnosticKind},
    types::{Bucket, Primitive, PropertyDecl, Shape, TypeReference},
};

/// The kind of WSDL element a reference was found on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContextTag {
    ComplexType,
    Element,
    Message,
    Part,
    Operation,
    Input,
    Output,
    Port,
}

const PRIMITIVES: [(&str, Primitive); 5] = [
    ("string", Primitive::String),
    ("int", Primitive::Number),
    ("decimal", Primitive::Number),
    ("boolean", Primitive::Boolean),
    ("dateTime", Primitive::Date),
];

const CONTEXT_BUCKETS: [(ContextTag, Bucket); 8] = [
    (ContextTag::ComplexType, Bucket::ComplexTypes),
    (ContextTag::Element, Bucket::ComplexTypes),
    (ContextTag::Message, Bucket::Elements),
    (ContextTag::Part, Bucket::Elements),
    (ContextTag::Operation, Bucket::Messages),
    (ContextTag::Input, Bucket::Messages),
    (ContextTag::Output, Bucket::Messages),
    (ContextTag::Port, Bucket::Operations),
];

impl ContextTag {
    pub fn as_str(self) -> &'static str {
        match self {
            ContextTag::ComplexType => "complexType",
            ContextTag::Element => "element",
            ContextTag::Message => "message",
            ContextTag::Part => "part",
            ContextTag::Operation => "operation",
            ContextTag::Input => "input",
            ContextTag::Output => "output",
            ContextTag::Port => "port",
        }
    }

    pub fn bucket(self) -> Option<Bucket> {
        CONTEXT_BUCKETS
            .iter()
            .find(|(tag, _)| *tag == self)
            .map(|(_, bucket)| *bucket)
    }
}

pub fn primitive(local_name: &str) -> Option<Primitive> {
    PRIMITIVES
        .iter()
        .find(|(name, _)| *name == local_name)
        .map(|(_, primitive)| *primitive)
}

/// Schema item names that would shadow a primitive in the generated output.
pub fn is_reserved_name(name: &str) -> bool {
    primitive(name).is_some()
        || PRIMITIVES
            .iter()
            .any(|(_, primitive)| primitive.as_str() == name)
}

pub struct TypeResolver<'a> {
    namespaces: &'a Namespaces,
}

impl<'a> TypeResolver<'a> {
    pub fn new(namespaces: &'a Namespaces) -> Self {
        Self { namespaces }
    }

    /// Primitive first, then a declared namespace prefix, otherwise unresolved.
    pub fn resolve(&self, qualified_name: &str, context: ContextTag) -> TypeReference {
        let (prefix, local_name) = split_qualified_name(qualified_name);

        if let Some(primitive) = primitive(local_name) {
            return TypeReference::Primitive(primitive);
        }

        match (prefix, context.bucket()) {
            (Some(prefix), Some(bucket)) if self.namespaces.contains(prefix) => {
                TypeReference::qualified(bucket, local_name)
            }

            _ => TypeReference::Unresolved,
        }
    }

    /// Like [`resolve`](Self::resolve), recording why a reference stayed unresolved.
    pub fn resolve_reported(
        &self,
        qualified_name: Option<&str>,
        context: ContextTag,
        subject: &str,
        diagnostics: &mut Vec<Diagnostic>,
    ) -> TypeReference {
        let qualified_name = match qualified_name {
            Some(qualified_name) => qualified_name,
            None => {
                diagnostics.push(Diagnostic::new(
                    subject,
                    DiagnosticKind::MissingTypeReference { context },
                ));
                return TypeReference::Unresolved;
            }
        };

        let resolved = self.resolve(qualified_name, context);

        if !resolved.is_resolved() {
            diagnostics.push(Diagnostic::new(
                subject,
                DiagnosticKind::UnresolvedType {
                    reference: qualified_name.to_owned(),
                    context,
                },
            ));
        }

        resolved
    }

    pub fn object_shape<'f>(
        &self,
        fields: impl IntoIterator<Item = (&'f str, Option<&'f str>)>,
        context: ContextTag,
        diagnostics: &mut Vec<Diagnostic>,
    ) -> Shape {
        Shape::Object(
            fields
                .into_iter()
                .map(|(name, type_name)| PropertyDecl {
                    name: name.to_owned(),
                    ty: self.resolve_reported(type_name, context, name, diagnostics),
                })
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn namespaces() -> Namespaces {
        ["tns", "wsdl"].into_iter().collect()
    }

    #[test]
    fn resolves_primitive_table_exactly() {
        let namespaces = namespaces();
        let resolver = TypeResolver::new(&namespaces);

        let resolved: Vec<_> = ["s:string", "s:int", "s:decimal", "s:boolean", "s:dateTime"]
            .iter()
            .map(|name| resolver.resolve(name, ContextTag::Element))
            .collect();

        assert_eq!(
            resolved,
            vec![
                TypeReference::Primitive(Primitive::String),
                TypeReference::Primitive(Primitive::Number),
                TypeReference::Primitive(Primitive::Number),
                TypeReference::Primitive(Primitive::Boolean),
                TypeReference::Primitive(Primitive::Date),
            ]
        );
    }

    #[test]
    fn primitives_ignore_prefix() {
        let namespaces = namespaces();
        let resolver = TypeResolver::new(&namespaces);

        assert_eq!(
            resolver.resolve("tns:string", ContextTag::Part),
            TypeReference::Primitive(Primitive::String)
        );
        assert_eq!(
            resolver.resolve("xsd:int", ContextTag::Part),
            TypeReference::Primitive(Primitive::Number)
        );
    }

    #[test]
    fn primitive_names_are_case_sensitive() {
        let namespaces = namespaces();
        let resolver = TypeResolver::new(&namespaces);

        assert_eq!(
            resolver.resolve("s:String", ContextTag::Element),
            TypeReference::Unresolved
        );
        assert_eq!(
            resolver.resolve("tns:DateTime", ContextTag::Element),
            TypeReference::qualified(Bucket::ComplexTypes, "DateTime")
        );
    }

    #[test]
    fn other_builtins_are_not_guessed() {
        let namespaces = namespaces();
        let resolver = TypeResolver::new(&namespaces);

        for name in ["s:long", "s:float", "s:base64Binary", "s:date"] {
            assert_eq!(
                resolver.resolve(name, ContextTag::Element),
                TypeReference::Unresolved
            );
        }
    }

    #[test]
    fn context_selects_bucket() {
        let namespaces = namespaces();
        let resolver = TypeResolver::new(&namespaces);

        let cases = [
            (ContextTag::ComplexType, Bucket::ComplexTypes),
            (ContextTag::Element, Bucket::ComplexTypes),
            (ContextTag::Message, Bucket::Elements),
            (ContextTag::Part, Bucket::Elements),
            (ContextTag::Operation, Bucket::Messages),
            (ContextTag::Input, Bucket::Messages),
            (ContextTag::Output, Bucket::Messages),
            (ContextTag::Port, Bucket::Operations),
        ];

        for (context, bucket) in cases {
            assert_eq!(
                resolver.resolve("tns:Thing", context),
                TypeReference::qualified(bucket, "Thing")
            );
        }
    }

    #[test]
    fn unknown_prefix_and_bare_names_are_unresolved() {
        let namespaces = namespaces();
        let resolver = TypeResolver::new(&namespaces);

        assert_eq!(
            resolver.resolve("other:Thing", ContextTag::Element),
            TypeReference::Unresolved
        );
        assert_eq!(
            resolver.resolve("Thing", ContextTag::Element),
            TypeReference::Unresolved
        );
    }

    #[test]
    fn resolve_is_deterministic() {
        let namespaces = namespaces();
        let resolver = TypeResolver::new(&namespaces);

        assert_eq!(
            resolver.resolve("tns:Operation", ContextTag::Part),
            resolver.resolve("tns:Operation", ContextTag::Part)
        );
    }

    #[test]
    fn reports_unresolved_and_missing_references() {
        let namespaces = namespaces();
        let resolver = TypeResolver::new(&namespaces);
        let mut diagnostics = Vec::new();

        let resolved =
            resolver.resolve_reported(Some("x:Foo"), ContextTag::Part, "body", &mut diagnostics);
        let missing = resolver.resolve_reported(None, ContextTag::Input, "Add", &mut diagnostics);
        let fine = resolver.resolve_reported(
            Some("tns:Foo"),
            ContextTag::Part,
            "body",
            &mut diagnostics,
        );

        assert_eq!(resolved, TypeReference::Unresolved);
        assert_eq!(missing, TypeReference::Unresolved);
        assert!(fine.is_resolved());
        assert_eq!(
            diagnostics,
            vec![
                Diagnostic::new(
                    "body",
                    DiagnosticKind::UnresolvedType {
                        reference: "x:Foo".into(),
                        context: ContextTag::Part,
                    }
                ),
                Diagnostic::new(
                    "Add",
                    DiagnosticKind::MissingTypeReference {
                        context: ContextTag::Input
                    }
                ),
            ]
        );
    }

    #[test]
    fn reserved_names_cover_both_vocabularies() {
        for name in ["string", "int", "decimal", "boolean", "dateTime", "number", "Date"] {
            assert!(is_reserved_name(name), "{}", name);
        }

        assert!(!is_reserved_name("Operation"));
        assert!(!is_reserved_name("long"));
    }
}
