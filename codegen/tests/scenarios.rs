//! End-to-end conversions of small WSDL documents into statement trees.

use pretty_assertions::assert_eq;

use wsdl2ts_codegen::{
    error::Error,
    from_str,
    types::{
        Bucket, IntersectionMember, MethodStyle, Primitive, PropertyDecl, Shape, SourceFile,
        Statement, TypeReference,
    },
};

const MESSAGES_AND_SERVICE: &str = r#"
  <wsdl:message name="OperationIn">
    <wsdl:part name="parameters" PART_IN />
  </wsdl:message>
  <wsdl:message name="OperationOut">
    <wsdl:part name="parameters" PART_OUT />
  </wsdl:message>
  <wsdl:portType name="SomeBinding">
    <wsdl:operation name="Operation1">
      <wsdl:input message="tns:OperationIn" />
      <wsdl:output message="tns:OperationOut" />
    </wsdl:operation>
  </wsdl:portType>
  <wsdl:service name="Spec">
    <wsdl:port binding="tns:SomeBinding">
      <soap:address/>
    </wsdl:port>
  </wsdl:service>
"#;

fn document(types: &str, part_in: &str, part_out: &str) -> String {
    format!(
        r#"<wsdl:definitions xmlns:tns="https://my.api">{}{}</wsdl:definitions>"#,
        types,
        MESSAGES_AND_SERVICE
            .replace("PART_IN", part_in)
            .replace("PART_OUT", part_out)
    )
}

fn names(source: &SourceFile, bucket: Bucket) -> Vec<&str> {
    source.namespace(bucket).unwrap().names()
}

fn assert_common_tail(source: &SourceFile) {
    assert_eq!(names(source, Bucket::Messages), ["OperationIn", "OperationOut"]);
    assert_eq!(names(source, Bucket::Operations), ["SomeBinding"]);

    let operations = source.operations().unwrap();
    let methods = &operations.get("SomeBinding").unwrap().methods;
    assert_eq!(methods.len(), 2);
    assert_eq!(methods[0].name(), "Operation1");
    assert_eq!(methods[0].style, MethodStyle::Callback);
    assert_eq!(methods[1].name(), "Operation1Async");
    assert_eq!(methods[1].style, MethodStyle::Promise);
    assert_eq!(
        methods[0].input,
        TypeReference::qualified(Bucket::Messages, "OperationIn")
    );
    assert_eq!(
        methods[1].output,
        TypeReference::qualified(Bucket::Messages, "OperationOut")
    );

    let exported = source.exported_type().unwrap();
    assert_eq!(exported.name, "Spec");
    assert_eq!(
        exported.members,
        vec![
            IntersectionMember::SelfObject {
                property: "Spec".into()
            },
            IntersectionMember::Binding(TypeReference::qualified(
                Bucket::Operations,
                "SomeBinding"
            )),
            IntersectionMember::Base("Client".into()),
        ]
    );
}

#[test]
fn document_without_types() {
    let xml = document("", r#"type="s:string""#, r#"type="s:string""#);
    let extracted = from_str(&xml).unwrap();
    let source = &extracted.value;

    assert!(matches!(&source.statements[0], Statement::Import(_)));
    assert!(names(source, Bucket::ComplexTypes).is_empty());
    assert!(names(source, Bucket::Elements).is_empty());
    assert_common_tail(source);

    let messages = source.types(Bucket::Messages).unwrap();
    for name in ["OperationIn", "OperationOut"] {
        assert_eq!(
            messages.get(name).unwrap().shape,
            Shape::Alias(TypeReference::Primitive(Primitive::String))
        );
    }

    assert!(extracted.diagnostics.is_empty());
}

#[test]
fn document_with_elements() {
    let xml = document(
        r#"<wsdl:types>
    <s:schema>
      <s:element name="Operation" type="s:string"/>
      <s:element name="OperationResponse" type="s:string"/>
    </s:schema>
  </wsdl:types>"#,
        r#"element="tns:Operation""#,
        r#"element="tns:OperationResponse""#,
    );
    let extracted = from_str(&xml).unwrap();
    let source = &extracted.value;

    assert!(names(source, Bucket::ComplexTypes).is_empty());
    assert_eq!(
        names(source, Bucket::Elements),
        ["Operation", "OperationResponse"]
    );
    assert_common_tail(source);

    let messages = source.types(Bucket::Messages).unwrap();
    assert_eq!(
        messages.get("OperationIn").unwrap().shape,
        Shape::Alias(TypeReference::qualified(Bucket::Elements, "Operation"))
    );
    assert_eq!(
        messages.get("OperationOut").unwrap().shape,
        Shape::Alias(TypeReference::qualified(
            Bucket::Elements,
            "OperationResponse"
        ))
    );

    assert!(extracted.diagnostics.is_empty());
}

#[test]
fn document_with_complex_types() {
    let xml = document(
        r#"<wsdl:types>
    <s:schema>
      <s:complexType name="Operation">
        <s:sequence>
          <s:element name="specs" type="s:string" />
        </s:sequence>
      </s:complexType>
      <s:element name="OperationResponse" type="s:string"/>
    </s:schema>
  </wsdl:types>"#,
        r#"element="tns:Operation""#,
        r#"element="tns:OperationResponse""#,
    );
    let source = from_str(&xml).unwrap().value;

    assert_eq!(names(&source, Bucket::ComplexTypes), ["Operation"]);
    assert_eq!(names(&source, Bucket::Elements), ["OperationResponse"]);
    assert_common_tail(&source);

    assert_eq!(
        source
            .types(Bucket::ComplexTypes)
            .unwrap()
            .get("Operation")
            .unwrap()
            .shape,
        Shape::Object(vec![PropertyDecl {
            name: "specs".into(),
            ty: TypeReference::Primitive(Primitive::String),
        }])
    );
}

#[test]
fn unknown_schema_tag_aborts_conversion() {
    let xml = document(
        r#"<wsdl:types>
    <s:schema>
      <s:element name="Operation" type="s:string"/>
      <s:attributeGroup name="Attributes" />
    </s:schema>
  </wsdl:types>"#,
        r#"element="tns:Operation""#,
        r#"element="tns:Operation""#,
    );

    assert!(matches!(
        from_str(&xml),
        Err(Error::UnknownDefinitionTag(tag)) if tag == "s:attributeGroup"
    ));
}

#[test]
fn malformed_xml_aborts_conversion() {
    assert!(matches!(
        from_str("<wsdl:definitions><wsdl:message name=\"A\"></wsdl:definitions>"),
        Err(Error::WsdlError(_))
    ));
}

#[test]
fn unresolved_references_keep_their_statements() {
    let xml = document("", r#"element="x:Operation""#, r#"type="s:long""#);
    let extracted = from_str(&xml).unwrap();

    let messages = extracted.value.types(Bucket::Messages).unwrap();
    assert_eq!(messages.names(), ["OperationIn", "OperationOut"]);
    assert_eq!(
        messages.get("OperationIn").unwrap().shape,
        Shape::Alias(TypeReference::Unresolved)
    );

    let rendered: Vec<_> = extracted
        .diagnostics
        .iter()
        .map(ToString::to_string)
        .collect();
    assert_eq!(
        rendered,
        [
            "Unknown type x:Operation in <message> OperationIn",
            "Unknown type s:long in <message> OperationOut",
        ]
    );
}

#[test]
fn buckets_preserve_document_order() {
    let xml = r#"<definitions xmlns:tns="urn:t">
  <types><schema>
    <complexType name="Zeta" />
    <element name="Beta" type="s:int" />
    <complexType name="Alpha" />
    <element name="Alpha" type="s:int" />
  </schema></types>
  <message name="M2" /><message name="M1" />
  <portType name="P2" /><portType name="P1" />
  <service name="S" />
</definitions>"#;

    let source = from_str(xml).unwrap().value;

    assert_eq!(names(&source, Bucket::ComplexTypes), ["Zeta", "Alpha"]);
    assert_eq!(names(&source, Bucket::Elements), ["Beta", "Alpha"]);
    assert_eq!(names(&source, Bucket::Messages), ["M2", "M1"]);
    assert_eq!(names(&source, Bucket::Operations), ["P2", "P1"]);
}

#[test]
fn document_without_service_still_converts() {
    let xml = r#"<wsdl:definitions xmlns:tns="https://my.api">
  <wsdl:message name="OperationIn"><wsdl:part name="parameters" type="s:string" /></wsdl:message>
</wsdl:definitions>"#;

    let extracted = from_str(xml).unwrap();

    assert_eq!(names(&extracted.value, Bucket::Messages), ["OperationIn"]);
    assert!(extracted.value.exported_type().is_none());
    assert!(!extracted
        .value
        .statements
        .iter()
        .any(|statement| matches!(statement, Statement::TypeAlias(_))));

    let rendered: Vec<_> = extracted
        .diagnostics
        .iter()
        .map(ToString::to_string)
        .collect();
    assert_eq!(
        rendered,
        ["No <service> in definitions, client type not exported"]
    );
}

#[test]
fn names_that_are_not_identifiers_are_reported() {
    let xml = document(
        r#"<wsdl:types>
    <s:schema>
      <s:element name="Order-Line" type="s:string"/>
    </s:schema>
  </wsdl:types>"#,
        r#"type="s:string""#,
        r#"type="s:string""#,
    );
    let extracted = from_str(&xml).unwrap();

    assert_eq!(names(&extracted.value, Bucket::Elements), ["Order-Line"]);

    let rendered: Vec<_> = extracted
        .diagnostics
        .iter()
        .map(ToString::to_string)
        .collect();
    assert_eq!(
        rendered,
        ["Elements.Order-Line is not a valid TypeScript identifier"]
    );
}
