use wsdl2ts_wsdl::types::MessageDef;

use super::{
    diagnostics::Extracted,
    resolver::{ContextTag, TypeResolver},
    types::{Bucket, MessageStatement, NamespaceBucket, Shape},
};

const PARAMETERS_PART: &str = "parameters";

pub fn extract_messages(
    messages: &[MessageDef],
    resolver: &TypeResolver<'_>,
) -> Extracted<NamespaceBucket<MessageStatement>> {
    let mut bucket = NamespaceBucket::new(Bucket::Messages);
    let mut diagnostics = Vec::new();

    for message in messages {
        let shape = match message.parts.as_slice() {
            [part] if part.name == PARAMETERS_PART => Shape::Alias(resolver.resolve_reported(
                part.type_name.as_deref(),
                ContextTag::Message,
                &message.name,
                &mut diagnostics,
            )),

            parts => resolver.object_shape(
                parts
                    .iter()
                    .map(|part| (part.name.as_str(), part.type_name.as_deref())),
                ContextTag::Part,
                &mut diagnostics,
            ),
        };

        diagnostics.extend(bucket.insert(MessageStatement {
            name: message.name.clone(),
            shape,
        }));
    }

    Extracted::new(bucket, diagnostics)
}
