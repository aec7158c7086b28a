//! TypeScript declaration output for an assembled [`SourceFile`].

use std::{borrow::Cow, fs, path::Path};

use super::{
    error,
    types::{
        is_identifier, ExportedType, Import, IntersectionMember, MethodStyle, Namespace,
        OperationMethod, OperationNamespace, Shape, SourceFile, Statement, TypeStatement,
        SECURITY_OPTIONS,
    },
};

const INDENT: &str = "  ";

#[derive(Default)]
pub struct Printer {
    output: String,
    depth: usize,
}

pub trait Codegen {
    fn codegen(&self, printer: &mut Printer);
}

impl Printer {
    fn line<S: AsRef<str>>(&mut self, text: S) {
        for _ in 0..self.depth {
            self.output.push_str(INDENT);
        }

        self.output.push_str(text.as_ref());
        self.output.push('\n');
    }

    fn blank(&mut self) {
        self.output.push('\n');
    }

    fn indented<F: FnOnce(&mut Self)>(&mut self, f: F) {
        self.depth += 1;
        f(self);
        self.depth -= 1;
    }

    pub fn finish(self) -> String {
        self.output
    }
}

fn codegen_all(all: &[impl Codegen], printer: &mut Printer) {
    for item in all {
        item.codegen(printer);
    }
}

fn property_key(name: &str) -> Cow<'_, str> {
    if is_identifier(name) {
        Cow::Borrowed(name)
    } else {
        Cow::Owned(format!("'{}'", name.replace('\\', "\\\\").replace('\'', "\\'")))
    }
}

impl Codegen for Import {
    fn codegen(&self, printer: &mut Printer) {
        printer.line(format!(
            "import {{ {} }} from '{}';",
            self.names.join(", "),
            self.module
        ));
    }
}

impl Codegen for TypeStatement {
    fn codegen(&self, printer: &mut Printer) {
        match &self.shape {
            Shape::Alias(ty) => printer.line(format!("export type {} = {};", self.name, ty)),

            Shape::Object(properties) if properties.is_empty() => {
                printer.line(format!("export type {} = {{}};", self.name))
            }

            Shape::Object(properties) => {
                printer.line(format!("export type {} = {{", self.name));
                printer.indented(|printer| {
                    for property in properties {
                        printer.line(format!("{}: {};", property_key(&property.name), property.ty));
                    }
                });
                printer.line("};");
            }
        }
    }
}

impl Codegen for OperationMethod {
    fn codegen(&self, printer: &mut Printer) {
        match self.style {
            MethodStyle::Callback => printer.line(format!(
                "{}(data: {}, cb: (error: Error, result: {}) => void, options?: {}): void;",
                property_key(&self.name()),
                self.input,
                self.output,
                SECURITY_OPTIONS
            )),

            MethodStyle::Promise => printer.line(format!(
                "{}(data: {}, options?: {}): Promise<{}>;",
                property_key(&self.name()),
                self.input,
                SECURITY_OPTIONS,
                self.output
            )),
        }
    }
}

impl Codegen for OperationNamespace {
    fn codegen(&self, printer: &mut Printer) {
        if self.methods.is_empty() {
            printer.line(format!("export type {} = {{}};", self.name));
            return;
        }

        printer.line(format!("export type {} = {{", self.name));
        printer.indented(|printer| codegen_all(&self.methods, printer));
        printer.line("};");
    }
}

impl Codegen for Namespace {
    fn codegen(&self, printer: &mut Printer) {
        printer.line(format!(
            "export declare namespace {} {{",
            self.bucket().as_str()
        ));
        printer.indented(|printer| match self {
            Namespace::Types(bucket) => codegen_all(bucket.statements(), printer),
            Namespace::Operations(bucket) => codegen_all(bucket.statements(), printer),
        });
        printer.line("}");
    }
}

impl Codegen for ExportedType {
    fn codegen(&self, printer: &mut Printer) {
        let members = self
            .members
            .iter()
            .map(|member| match member {
                IntersectionMember::SelfObject { property } => format!(
                    "{{\n{}{}: {};\n}}",
                    INDENT,
                    property_key(property),
                    self.name
                ),
                IntersectionMember::Binding(ty) => ty.to_string(),
                IntersectionMember::Base(name) => name.clone(),
            })
            .collect::<Vec<_>>()
            .join(" & ");

        let declaration = format!("export type {} = {};", self.name, members);

        for line in declaration.lines() {
            printer.line(line);
        }
    }
}

impl Codegen for Statement {
    fn codegen(&self, printer: &mut Printer) {
        match self {
            Statement::Import(import) => import.codegen(printer),
            Statement::Namespace(namespace) => namespace.codegen(printer),
            Statement::TypeAlias(exported) => exported.codegen(printer),
        }
    }
}

impl Codegen for SourceFile {
    fn codegen(&self, printer: &mut Printer) {
        for (index, statement) in self.statements.iter().enumerate() {
            if index > 0 {
                printer.blank();
            }

            statement.codegen(printer);
        }
    }
}

pub fn render(source: &SourceFile) -> String {
    let mut printer = Printer::default();
    source.codegen(&mut printer);
    printer.finish()
}

/// Renders `source` and writes it to `path`, creating parent directories as needed.
pub fn write_file<P: AsRef<Path>>(path: P, source: &SourceFile) -> Result<(), error::Error> {
    let path = path.as_ref();

    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    fs::write(path, render(source))?;
    tracing::info!(path = %path.display(), "wrote type declarations");

    Ok(())
}
