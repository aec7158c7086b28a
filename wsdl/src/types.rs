/// Namespace prefixes declared with `xmlns:<prefix>` on the root element.
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct Namespaces(Vec<String>);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyDef {
    pub name: String,
    pub type_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementDef {
    pub name: String,
    pub type_name: Option<String>,
    pub properties: Vec<PropertyDef>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComplexTypeDef {
    pub name: String,
    pub properties: Vec<PropertyDef>,
}

/// A direct child of a schema container inside `types`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaItem {
    Element(ElementDef),
    ComplexType(ComplexTypeDef),
    Unknown { tag: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartDef {
    pub name: String,
    pub type_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageDef {
    pub name: String,
    pub parts: Vec<PartDef>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationDef {
    pub name: String,
    pub input: Option<String>,
    pub output: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortTypeDef {
    pub name: String,
    pub operations: Vec<OperationDef>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BindingDef {
    pub name: String,
    pub port_type: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortDef {
    pub name: Option<String>,
    pub binding: Option<String>,
    pub addressed: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceDef {
    pub name: String,
    pub ports: Vec<PortDef>,
}

/// Everything the generator needs from one WSDL file, in document order.
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub namespaces: Namespaces,
    pub schema: Vec<SchemaItem>,
    pub messages: Vec<MessageDef>,
    pub port_types: Vec<PortTypeDef>,
    pub bindings: Vec<BindingDef>,
    pub services: Vec<ServiceDef>,
}

impl Namespaces {
    pub fn prefixes(&self) -> &[String] {
        &self.0
    }

    pub fn contains(&self, prefix: &str) -> bool {
        self.index_of(prefix).is_some()
    }

    pub fn add(&mut self, prefix: &str) {
        if self.index_of(prefix).is_none() {
            self.0.push(prefix.to_owned());
        }
    }

    fn index_of(&self, prefix: &str) -> Option<usize> {
        self.0.iter().position(|value| value == prefix)
    }
}

impl<S: AsRef<str>> FromIterator<S> for Namespaces {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut namespaces = Self::default();

        for prefix in iter {
            namespaces.add(prefix.as_ref());
        }

        namespaces
    }
}

impl SchemaItem {
    pub fn name(&self) -> Option<&str> {
        match self {
            SchemaItem::Element(element) => Some(&element.name),
            SchemaItem::ComplexType(complex_type) => Some(&complex_type.name),
            SchemaItem::Unknown { .. } => None,
        }
    }
}

impl Document {
    pub fn binding(&self, name: &str) -> Option<&BindingDef> {
        self.bindings.iter().find(|binding| binding.name == name)
    }
}
