use super::{
    schema::SchemaTypes,
    types::{
        Import, MessageStatement, Namespace, NamespaceBucket, OperationNamespace, ServiceBinding,
        SourceFile, Statement, BASE_CLIENT, CLIENT_MODULE, SECURITY_OPTIONS,
    },
};

/// Import, the four declared namespaces, then the exported client type if there is a service.
pub fn assemble(
    schema: SchemaTypes,
    messages: NamespaceBucket<MessageStatement>,
    operations: NamespaceBucket<OperationNamespace>,
    service: Option<&ServiceBinding>,
) -> SourceFile {
    let mut statements = vec![
        Statement::Import(Import {
            names: vec![BASE_CLIENT.to_owned(), SECURITY_OPTIONS.to_owned()],
            module: CLIENT_MODULE.to_owned(),
        }),
        Statement::Namespace(Namespace::Types(schema.complex_types)),
        Statement::Namespace(Namespace::Types(schema.elements)),
        Statement::Namespace(Namespace::Types(messages)),
        Statement::Namespace(Namespace::Operations(operations)),
    ];

    statements.extend(service.map(|service| Statement::TypeAlias(service.exported_type())));

    SourceFile { statements }
}
