use std::fmt;

use super::diagnostics::{Diagnostic, DiagnosticKind};

/// Names imported from the SOAP client library by every generated file.
pub const BASE_CLIENT: &str = "Client";
pub const SECURITY_OPTIONS: &str = "ISecurity";
pub const CLIENT_MODULE: &str = "soap";

/// Whether `name` can be emitted as-is in a TypeScript declaration.
pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();

    matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Primitive {
    String,
    Number,
    Boolean,
    Date,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bucket {
    ComplexTypes,
    Elements,
    Messages,
    Operations,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeReference {
    Primitive(Primitive),
    Qualified { bucket: Bucket, name: String },
    Unresolved,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyDecl {
    pub name: String,
    pub ty: TypeReference,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Shape {
    Alias(TypeReference),
    Object(Vec<PropertyDecl>),
}

/// A named type alias inside the `ComplexTypes`, `Elements` or `Messages` namespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeStatement {
    pub name: String,
    pub shape: Shape,
}

pub type MessageStatement = TypeStatement;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MethodStyle {
    Callback,
    Promise,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationMethod {
    pub operation: String,
    pub input: TypeReference,
    pub output: TypeReference,
    pub style: MethodStyle,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationNamespace {
    pub name: String,
    pub methods: Vec<OperationMethod>,
}

pub trait Named {
    fn name(&self) -> &str;
}

/// Append-only, document ordered statements of one namespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamespaceBucket<T> {
    bucket: Bucket,
    statements: Vec<T>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceBinding {
    pub service_name: String,
    pub default_binding: TypeReference,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntersectionMember {
    /// `{ <property>: <exported type> }`
    SelfObject { property: String },
    Binding(TypeReference),
    Base(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedType {
    pub name: String,
    pub members: Vec<IntersectionMember>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Import {
    pub names: Vec<String>,
    pub module: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Namespace {
    Types(NamespaceBucket<TypeStatement>),
    Operations(NamespaceBucket<OperationNamespace>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    Import(Import),
    Namespace(Namespace),
    TypeAlias(ExportedType),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    pub statements: Vec<Statement>,
}

impl Primitive {
    pub fn as_str(self) -> &'static str {
        match self {
            Primitive::String => "string",
            Primitive::Number => "number",
            Primitive::Boolean => "boolean",
            Primitive::Date => "Date",
        }
    }
}

impl Bucket {
    pub const ALL: [Bucket; 4] = [
        Bucket::ComplexTypes,
        Bucket::Elements,
        Bucket::Messages,
        Bucket::Operations,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Bucket::ComplexTypes => "ComplexTypes",
            Bucket::Elements => "Elements",
            Bucket::Messages => "Messages",
            Bucket::Operations => "Operations",
        }
    }
}

impl TypeReference {
    pub fn qualified(bucket: Bucket, name: impl Into<String>) -> Self {
        TypeReference::Qualified {
            bucket,
            name: name.into(),
        }
    }

    pub fn is_resolved(&self) -> bool {
        !matches!(self, TypeReference::Unresolved)
    }
}

impl fmt::Display for TypeReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeReference::Primitive(primitive) => f.write_str(primitive.as_str()),
            TypeReference::Qualified { bucket, name } => write!(f, "{}.{}", bucket.as_str(), name),
            TypeReference::Unresolved => f.write_str("unknown"),
        }
    }
}

impl OperationMethod {
    pub fn name(&self) -> String {
        match self.style {
            MethodStyle::Callback => self.operation.clone(),
            MethodStyle::Promise => format!("{}Async", self.operation),
        }
    }
}

impl Named for TypeStatement {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Named for OperationNamespace {
    fn name(&self) -> &str {
        &self.name
    }
}

impl<T: Named> NamespaceBucket<T> {
    pub fn new(bucket: Bucket) -> Self {
        Self {
            bucket,
            statements: Vec::new(),
        }
    }

    pub fn bucket(&self) -> Bucket {
        self.bucket
    }

    pub fn statements(&self) -> &[T] {
        &self.statements
    }

    pub fn get(&self, name: &str) -> Option<&T> {
        self.statements.iter().find(|statement| statement.name() == name)
    }

    pub fn names(&self) -> Vec<&str> {
        self.statements.iter().map(Named::name).collect()
    }

    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    /// Appends `statement` unless its name is already taken; the first declaration wins.
    ///
    /// A name that is not a TypeScript identifier is still declared, but reported.
    pub fn insert(&mut self, statement: T) -> Option<Diagnostic> {
        if self.get(statement.name()).is_some() {
            return Some(Diagnostic::new(
                statement.name(),
                DiagnosticKind::DuplicateDeclaration {
                    bucket: self.bucket,
                },
            ));
        }

        let diagnostic = (!is_identifier(statement.name())).then(|| {
            Diagnostic::new(
                statement.name(),
                DiagnosticKind::InvalidIdentifier {
                    bucket: Some(self.bucket),
                },
            )
        });

        self.statements.push(statement);
        diagnostic
    }
}

impl ServiceBinding {
    pub fn exported_type(&self) -> ExportedType {
        ExportedType {
            name: self.service_name.clone(),
            members: vec![
                IntersectionMember::SelfObject {
                    property: self.service_name.clone(),
                },
                IntersectionMember::Binding(self.default_binding.clone()),
                IntersectionMember::Base(BASE_CLIENT.to_owned()),
            ],
        }
    }
}

impl Namespace {
    pub fn bucket(&self) -> Bucket {
        match self {
            Namespace::Types(statements) => statements.bucket(),
            Namespace::Operations(statements) => statements.bucket(),
        }
    }

    pub fn names(&self) -> Vec<&str> {
        match self {
            Namespace::Types(statements) => statements.names(),
            Namespace::Operations(statements) => statements.names(),
        }
    }
}

impl SourceFile {
    pub fn namespace(&self, bucket: Bucket) -> Option<&Namespace> {
        self.statements.iter().find_map(|statement| match statement {
            Statement::Namespace(namespace) if namespace.bucket() == bucket => Some(namespace),
            _ => None,
        })
    }

    pub fn types(&self, bucket: Bucket) -> Option<&NamespaceBucket<TypeStatement>> {
        match self.namespace(bucket)? {
            Namespace::Types(statements) => Some(statements),
            Namespace::Operations(_) => None,
        }
    }

    pub fn operations(&self) -> Option<&NamespaceBucket<OperationNamespace>> {
        match self.namespace(Bucket::Operations)? {
            Namespace::Operations(statements) => Some(statements),
            Namespace::Types(_) => None,
        }
    }

    pub fn exported_type(&self) -> Option<&ExportedType> {
        self.statements.iter().find_map(|statement| match statement {
            Statement::TypeAlias(exported) => Some(exported),
            _ => None,
        })
    }
}
