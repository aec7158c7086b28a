use quick_xml::{
    events::{attributes::Attributes, BytesStart, Event},
    Reader,
};
use std::io::BufRead;

use super::{
    error,
    types::{
        BindingDef, ComplexTypeDef, Document, ElementDef, MessageDef, OperationDef, PartDef,
        PortDef, PortTypeDef, PropertyDef, SchemaItem, ServiceDef,
    },
};

fn get_attributes<B: BufRead, const N: usize>(
    reader: &Reader<B>,
    attributes: Attributes<'_>,
    names: [&'static str; N],
) -> Result<[Option<String>; N], error::Error> {
    const INIT: Option<String> = None;
    let mut result = [INIT; N];

    for attribute in attributes {
        let attribute = attribute?;
        let key = reader.decode(attribute.key)?;

        for (index, name) in names.iter().enumerate() {
            if key == *name {
                result[index] = Some(attribute.unescape_and_decode_value(reader)?);
                break;
            }
        }
    }

    Ok(result)
}

fn required(
    value: Option<String>,
    element: &'static str,
    attribute: &'static str,
) -> Result<String, error::Error> {
    value.ok_or(error::Error::MissingAttribute { element, attribute })
}

/// Only SOAP 1.1 addresses mark a port as a candidate default binding.
const SOAP_ADDRESS: &str = "soap:address";

pub fn split_qualified_name(qualified_name: &str) -> (Option<&str>, &str) {
    match qualified_name.split_once(':') {
        Some((prefix, local_name)) => (Some(prefix), local_name),
        None => (None, qualified_name),
    }
}

#[derive(Debug)]
enum ParseState {
    Definitions,

    Types,
    Schema,
    Element {
        name: String,
        type_name: Option<String>,
        properties: Vec<PropertyDef>,
    },
    ComplexType {
        name: String,
        properties: Vec<PropertyDef>,
    },
    Group(Vec<PropertyDef>),
    Property(PropertyDef),

    Message {
        name: String,
        parts: Vec<PartDef>,
    },
    Part(PartDef),

    PortType {
        name: String,
        operations: Vec<OperationDef>,
    },
    Operation(OperationDef),

    Binding(BindingDef),

    Service {
        name: String,
        ports: Vec<PortDef>,
    },
    Port(PortDef),

    Other(String),
}

impl ParseState {
    fn element_name(&self) -> &str {
        match self {
            ParseState::Definitions => "definitions",
            ParseState::Types => "types",
            ParseState::Schema => "schema",
            ParseState::Element { .. } | ParseState::Property(_) => "element",
            ParseState::ComplexType { .. } => "complexType",
            ParseState::Group(_) => "sequence",
            ParseState::Message { .. } => "message",
            ParseState::Part(_) => "part",
            ParseState::PortType { .. } => "portType",
            ParseState::Operation(_) => "operation",
            ParseState::Binding(_) => "binding",
            ParseState::Service { .. } => "service",
            ParseState::Port(_) => "port",
            ParseState::Other(name) => name,
        }
    }

    fn properties_mut(&mut self) -> Option<&mut Vec<PropertyDef>> {
        match self {
            ParseState::Element { properties, .. }
            | ParseState::ComplexType { properties, .. }
            | ParseState::Group(properties) => Some(properties),
            _ => None,
        }
    }
}

#[derive(Default)]
struct Parser {
    document: Document,
    seen_root: bool,
}

impl Parser {
    fn parse<B: BufRead>(mut self, reader: &mut Reader<B>) -> Result<Document, error::Error> {
        let mut stack = Vec::new();
        let mut buffer = Vec::new();

        loop {
            match reader.read_event(&mut buffer)? {
                Event::Start(start) => self.handle_start(&mut stack, reader, &start)?,
                Event::End(..) => self.handle_end(&mut stack),

                Event::Empty(start) => {
                    self.handle_start(&mut stack, reader, &start)?;
                    self.handle_end(&mut stack);
                }

                Event::Eof => break,

                _ => (),
            }

            buffer.clear();
        }

        if let Some(state) = stack.last() {
            return Err(error::Error::UnexpectedEof(state.element_name().to_owned()));
        }

        if !self.seen_root {
            return Err(error::Error::MissingElement("definitions"));
        }

        Ok(self.document)
    }

    fn handle_start<B: BufRead>(
        &mut self,
        stack: &mut Vec<ParseState>,
        reader: &Reader<B>,
        start: &BytesStart<'_>,
    ) -> Result<(), error::Error> {
        let qualified_name = reader.decode(start.name())?;
        let (_, local_name) = split_qualified_name(qualified_name);

        let mut state = stack.pop();
        let mut new_state = ParseState::Other(local_name.to_owned());

        match &mut state {
            None if self.seen_root => {
                tracing::debug!(element = qualified_name, "ignoring element after document root")
            }

            None => {
                if local_name != "definitions" {
                    return Err(error::Error::MissingElement("definitions"));
                }

                for attribute in start.attributes() {
                    let attribute = attribute?;
                    let key = reader.decode(attribute.key)?;

                    if let (Some("xmlns"), prefix) = split_qualified_name(key) {
                        self.document.namespaces.add(prefix);
                    }
                }

                self.seen_root = true;
                new_state = ParseState::Definitions;
            }

            Some(ParseState::Definitions) => match local_name {
                "types" => new_state = ParseState::Types,

                "message" => {
                    let [name] = get_attributes(reader, start.attributes(), ["name"])?;

                    new_state = ParseState::Message {
                        name: required(name, "message", "name")?,
                        parts: Vec::new(),
                    };
                }

                "portType" => {
                    let [name] = get_attributes(reader, start.attributes(), ["name"])?;

                    new_state = ParseState::PortType {
                        name: required(name, "portType", "name")?,
                        operations: Vec::new(),
                    };
                }

                "binding" => {
                    let [name, port_type] =
                        get_attributes(reader, start.attributes(), ["name", "type"])?;

                    new_state = ParseState::Binding(BindingDef {
                        name: required(name, "binding", "name")?,
                        port_type,
                    });
                }

                "service" => {
                    let [name] = get_attributes(reader, start.attributes(), ["name"])?;

                    new_state = ParseState::Service {
                        name: required(name, "service", "name")?,
                        ports: Vec::new(),
                    };
                }

                _ => tracing::debug!(element = qualified_name, "skipping definitions child"),
            },

            Some(ParseState::Types) => new_state = ParseState::Schema,

            Some(ParseState::Schema) => match local_name {
                "element" => {
                    let [name, type_name] =
                        get_attributes(reader, start.attributes(), ["name", "type"])?;

                    new_state = ParseState::Element {
                        name: required(name, "element", "name")?,
                        type_name,
                        properties: Vec::new(),
                    };
                }

                "complexType" => {
                    let [name] = get_attributes(reader, start.attributes(), ["name"])?;

                    new_state = ParseState::ComplexType {
                        name: required(name, "complexType", "name")?,
                        properties: Vec::new(),
                    };
                }

                _ => self.document.schema.push(SchemaItem::Unknown {
                    tag: qualified_name.to_owned(),
                }),
            },

            Some(
                ParseState::Element { .. } | ParseState::ComplexType { .. } | ParseState::Group(_),
            ) => match local_name {
                "element" => {
                    let [name, element, type_name] =
                        get_attributes(reader, start.attributes(), ["name", "element", "type"])?;

                    new_state = ParseState::Property(PropertyDef {
                        name: required(name, "element", "name")?,
                        type_name: element.or(type_name),
                    });
                }

                _ => new_state = ParseState::Group(Vec::new()),
            },

            Some(ParseState::Message { .. }) => match local_name {
                "part" => {
                    let [name, element, type_name] =
                        get_attributes(reader, start.attributes(), ["name", "element", "type"])?;

                    new_state = ParseState::Part(PartDef {
                        name: required(name, "part", "name")?,
                        type_name: element.or(type_name),
                    });
                }

                _ => tracing::debug!(element = qualified_name, "skipping message child"),
            },

            Some(ParseState::PortType { .. }) => match local_name {
                "operation" => {
                    let [name] = get_attributes(reader, start.attributes(), ["name"])?;

                    new_state = ParseState::Operation(OperationDef {
                        name: required(name, "operation", "name")?,
                        input: None,
                        output: None,
                    });
                }

                _ => tracing::debug!(element = qualified_name, "skipping portType child"),
            },

            Some(ParseState::Operation(operation)) => match local_name {
                "input" => {
                    let [message] = get_attributes(reader, start.attributes(), ["message"])?;
                    operation.input = message;
                }

                "output" => {
                    let [message] = get_attributes(reader, start.attributes(), ["message"])?;
                    operation.output = message;
                }

                _ => tracing::debug!(element = qualified_name, "skipping operation child"),
            },

            Some(ParseState::Service { .. }) => match local_name {
                "port" => {
                    let [name, binding] =
                        get_attributes(reader, start.attributes(), ["name", "binding"])?;

                    new_state = ParseState::Port(PortDef {
                        name,
                        binding,
                        addressed: false,
                    });
                }

                _ => tracing::debug!(element = qualified_name, "skipping service child"),
            },

            Some(ParseState::Port(port)) => {
                if qualified_name == SOAP_ADDRESS {
                    port.addressed = true;
                }
            }

            Some(
                ParseState::Property(_)
                | ParseState::Part(_)
                | ParseState::Binding(_)
                | ParseState::Other(_),
            ) => (),
        }

        stack.extend(state);
        stack.push(new_state);

        Ok(())
    }

    fn handle_end(&mut self, stack: &mut Vec<ParseState>) {
        let finished_state = stack.pop();
        let mut next_state = stack.pop();

        match finished_state {
            Some(ParseState::Element {
                name,
                type_name,
                properties,
            }) => self.document.schema.push(SchemaItem::Element(ElementDef {
                name,
                type_name,
                properties,
            })),

            Some(ParseState::ComplexType { name, properties }) => self
                .document
                .schema
                .push(SchemaItem::ComplexType(ComplexTypeDef { name, properties })),

            Some(ParseState::Group(fields)) => {
                if let Some(properties) = next_state.as_mut().and_then(ParseState::properties_mut) {
                    properties.extend(fields);
                }
            }

            Some(ParseState::Property(property)) => {
                if let Some(properties) = next_state.as_mut().and_then(ParseState::properties_mut) {
                    properties.push(property);
                }
            }

            Some(ParseState::Message { name, parts }) => {
                self.document.messages.push(MessageDef { name, parts })
            }

            Some(ParseState::Part(part)) => {
                if let Some(ParseState::Message { ref mut parts, .. }) = next_state {
                    parts.push(part);
                }
            }

            Some(ParseState::PortType { name, operations }) => self
                .document
                .port_types
                .push(PortTypeDef { name, operations }),

            Some(ParseState::Operation(operation)) => {
                if let Some(ParseState::PortType {
                    ref mut operations, ..
                }) = next_state
                {
                    operations.push(operation);
                }
            }

            Some(ParseState::Binding(binding)) => self.document.bindings.push(binding),

            Some(ParseState::Service { name, ports }) => {
                self.document.services.push(ServiceDef { name, ports })
            }

            Some(ParseState::Port(port)) => {
                if let Some(ParseState::Service { ref mut ports, .. }) = next_state {
                    ports.push(port);
                }
            }

            _ => (),
        }

        stack.extend(next_state);
    }
}

pub fn parse_str(xml: &str) -> Result<Document, error::Error> {
    let mut reader = Reader::from_str(xml);
    reader.trim_text(true);

    Parser::default().parse(&mut reader)
}
