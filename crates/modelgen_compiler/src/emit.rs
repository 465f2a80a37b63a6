//! Rendering of declaration trees to text.
//!
//! The tree itself is syntax-agnostic; an [`Emit`] implementation decides how
//! it is spelled. [`TypeScriptEmitter`] produces ambient `.d.ts` source.
//!
//! # Example
//!
//! ```
//! use modelgen_compiler::ast::{Declaration, SourceFile, TypeAliasDecl, TypeExpr};
//! use modelgen_compiler::emit::{Emit, TypeScriptEmitter};
//!
//! let file = SourceFile {
//!     declarations: vec![Declaration::TypeAlias(TypeAliasDecl {
//!         name: "Id".to_string(),
//!         type_params: Vec::new(),
//!         ty: TypeExpr::string(),
//!         exported: true,
//!         doc: None,
//!     })],
//! };
//! assert_eq!(TypeScriptEmitter::default().emit(&file), "export type Id = string;\n");
//! ```

use std::fmt::Write;

use crate::ast::{
    Conditional, Declaration, FunctionDecl, FunctionType, ImportDecl, IndexSignature,
    InterfaceDecl, Keyword, Member, ModuleDecl, Param, Property, SourceFile, TypeAliasDecl,
    TypeExpr, TypeParam, TypeRef, VariableDecl,
};
use crate::config::EmitConfig;

/// Renders a declaration tree to source text.
pub trait Emit {
    /// Renders `file`.
    fn emit(&self, file: &SourceFile) -> String;
}

/// Emits TypeScript declaration source.
#[derive(Clone, Debug, Default)]
pub struct TypeScriptEmitter {
    config: EmitConfig,
}

impl TypeScriptEmitter {
    /// Creates an emitter with the given configuration.
    #[must_use]
    pub const fn new(config: EmitConfig) -> Self {
        Self { config }
    }

    /// Renders a single type expression.
    #[must_use]
    pub fn emit_type(&self, ty: &TypeExpr) -> String {
        let mut printer = Printer::new(&self.config);
        printer.print_type(ty);
        printer.output
    }
}

impl Emit for TypeScriptEmitter {
    fn emit(&self, file: &SourceFile) -> String {
        let mut printer = Printer::new(&self.config);
        printer.print_declarations(&file.declarations);
        printer.output
    }
}

/// Renders `file` with the default TypeScript configuration.
#[must_use]
pub fn emit_typescript(file: &SourceFile) -> String {
    TypeScriptEmitter::default().emit(file)
}

/// Returns true if `name` can be written as a bare property key.
#[must_use]
pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_' || c == '$')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

/// Writes `s` as a double-quoted string literal.
pub fn write_string_literal(out: &mut String, s: &str) {
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => {
                let _ = write!(out, "\\u{:04X}", u32::from(c));
            }
            c => out.push(c),
        }
    }
    out.push('"');
}

/// Printer state.
struct Printer<'a> {
    config: &'a EmitConfig,
    output: String,
    indent_level: usize,
    /// Inside a `declare module` block, where declarations are already ambient.
    ambient: bool,
}

impl<'a> Printer<'a> {
    const fn new(config: &'a EmitConfig) -> Self {
        Self {
            config,
            output: String::new(),
            indent_level: 0,
            ambient: false,
        }
    }

    fn indent(&mut self) {
        let width = self.indent_level * self.config.indent_width;
        self.output.extend(std::iter::repeat_n(' ', width));
    }

    fn push_indent(&mut self) {
        self.indent_level += 1;
    }

    fn pop_indent(&mut self) {
        self.indent_level = self.indent_level.saturating_sub(1);
    }

    // =========================================================================
    // Declarations
    // =========================================================================

    fn print_declarations(&mut self, declarations: &[Declaration]) {
        let mut previous: Option<&Declaration> = None;
        for decl in declarations {
            if let Some(prev) = previous {
                let both_imports =
                    matches!(prev, Declaration::Import(_)) && matches!(decl, Declaration::Import(_));
                if !both_imports {
                    self.output.push('\n');
                }
            }
            self.print_declaration(decl);
            previous = Some(decl);
        }
    }

    fn print_declaration(&mut self, decl: &Declaration) {
        match decl {
            Declaration::Import(import) => self.print_import(import),
            Declaration::Interface(iface) => self.print_interface(iface),
            Declaration::TypeAlias(alias) => self.print_type_alias(alias),
            Declaration::Variable(var) => self.print_variable(var),
            Declaration::Function(func) => self.print_function(func),
            Declaration::Module(module) => self.print_module(module),
        }
    }

    fn print_doc(&mut self, doc: Option<&str>) {
        let Some(doc) = doc else { return };
        self.indent();
        self.output.push_str("/**\n");
        for line in doc.lines() {
            self.indent();
            if line.is_empty() {
                self.output.push_str(" *\n");
            } else {
                // A `*/` inside the text would close the comment early.
                let _ = writeln!(self.output, " * {}", line.replace("*/", "*\\/"));
            }
        }
        self.indent();
        self.output.push_str(" */\n");
    }

    fn print_import(&mut self, import: &ImportDecl) {
        self.indent();
        self.output.push_str("import ");
        if import.type_only {
            self.output.push_str("type ");
        }
        let _ = write!(self.output, "{{ {} }} from ", import.names.join(", "));
        write_string_literal(&mut self.output, &import.module);
        self.output.push_str(";\n");
    }

    fn print_interface(&mut self, iface: &InterfaceDecl) {
        self.print_doc(iface.doc.as_deref());
        self.indent();
        let _ = write!(self.output, "interface {}", iface.name);
        self.print_type_params(&iface.type_params);
        if !iface.extends.is_empty() {
            self.output.push_str(" extends ");
            for (i, base) in iface.extends.iter().enumerate() {
                if i > 0 {
                    self.output.push_str(", ");
                }
                self.print_type_ref(base);
            }
        }
        self.output.push(' ');
        self.print_members(&iface.members);
        self.output.push('\n');
    }

    fn print_type_alias(&mut self, alias: &TypeAliasDecl) {
        self.print_doc(alias.doc.as_deref());
        self.indent();
        if alias.exported {
            self.output.push_str("export ");
        }
        let _ = write!(self.output, "type {}", alias.name);
        self.print_type_params(&alias.type_params);
        self.output.push_str(" = ");
        self.print_type(&alias.ty);
        self.output.push_str(";\n");
    }

    fn print_variable(&mut self, var: &VariableDecl) {
        self.indent();
        if !self.ambient {
            self.output.push_str("declare ");
        }
        let _ = write!(self.output, "const {}: ", var.name);
        self.print_type(&var.ty);
        self.output.push_str(";\n");
    }

    fn print_function(&mut self, func: &FunctionDecl) {
        self.indent();
        if func.default_export {
            self.output.push_str("export default ");
        } else if !self.ambient {
            self.output.push_str("declare ");
        }
        self.output.push_str("function ");
        if let Some(name) = &func.name {
            self.output.push_str(name);
        }
        self.print_params(&func.params);
        self.output.push_str(": ");
        self.print_type(&func.ret);
        self.output.push_str(";\n");
    }

    fn print_module(&mut self, module: &ModuleDecl) {
        self.indent();
        self.output.push_str("declare module ");
        write_string_literal(&mut self.output, &module.name);
        self.output.push_str(" {\n");

        let was_ambient = self.ambient;
        self.ambient = true;
        self.push_indent();
        self.print_declarations(&module.body);
        self.pop_indent();
        self.ambient = was_ambient;

        self.indent();
        self.output.push_str("}\n");
    }

    fn print_type_params(&mut self, params: &[TypeParam]) {
        if params.is_empty() {
            return;
        }
        self.output.push('<');
        for (i, param) in params.iter().enumerate() {
            if i > 0 {
                self.output.push_str(", ");
            }
            self.output.push_str(&param.name);
            if let Some(constraint) = &param.constraint {
                self.output.push_str(" extends ");
                self.print_type(constraint);
            }
            if let Some(default) = &param.default {
                self.output.push_str(" = ");
                self.print_type(default);
            }
        }
        self.output.push('>');
    }

    fn print_params(&mut self, params: &[Param]) {
        self.output.push('(');
        for (i, param) in params.iter().enumerate() {
            if i > 0 {
                self.output.push_str(", ");
            }
            let _ = write!(self.output, "{}: ", param.name);
            self.print_type(&param.ty);
        }
        self.output.push(')');
    }

    // =========================================================================
    // Members
    // =========================================================================

    /// Prints `{}` or a braced, indented member block without a trailing newline.
    fn print_members(&mut self, members: &[Member]) {
        if members.is_empty() {
            self.output.push_str("{}");
            return;
        }
        self.output.push_str("{\n");
        self.push_indent();
        for member in members {
            match member {
                Member::Property(property) => self.print_property(property),
                Member::Index(index) => self.print_index_signature(index),
            }
        }
        self.pop_indent();
        self.indent();
        self.output.push('}');
    }

    fn print_property(&mut self, property: &Property) {
        self.print_doc(property.doc.as_deref());
        self.indent();
        if is_identifier(&property.name) {
            self.output.push_str(&property.name);
        } else {
            write_string_literal(&mut self.output, &property.name);
        }
        if property.optional {
            self.output.push('?');
        }
        self.output.push_str(": ");
        self.print_type(&property.ty);
        self.output.push_str(";\n");
    }

    fn print_index_signature(&mut self, index: &IndexSignature) {
        self.indent();
        let _ = write!(self.output, "[{}: ", index.key_name);
        self.print_type(&index.key);
        self.output.push_str("]: ");
        self.print_type(&index.value);
        self.output.push_str(";\n");
    }

    // =========================================================================
    // Types
    // =========================================================================

    fn print_type(&mut self, ty: &TypeExpr) {
        match ty {
            TypeExpr::Keyword(keyword) => self.output.push_str(keyword_str(*keyword)),
            TypeExpr::Reference(reference) => self.print_type_ref(reference),
            TypeExpr::StringLiteral(value) => write_string_literal(&mut self.output, value),
            TypeExpr::Union(members) => self.print_joined(members, " | ", needs_parens_in_union),
            TypeExpr::Intersection(members) => {
                self.print_joined(members, " & ", needs_parens_in_intersection);
            }
            TypeExpr::Object(members) => self.print_members(members),
            TypeExpr::Tuple(elements) => {
                self.output.push('[');
                self.print_joined(elements, ", ", |_| false);
                self.output.push(']');
            }
            TypeExpr::IndexedAccess(object, index) => {
                self.print_operand(object, needs_parens_as_operand(object));
                self.output.push('[');
                self.print_type(index);
                self.output.push(']');
            }
            TypeExpr::KeyOf(inner) => {
                self.output.push_str("keyof ");
                self.print_operand(inner, needs_parens_as_operand(inner));
            }
            TypeExpr::TypeQuery(name) => {
                let _ = write!(self.output, "typeof {name}");
            }
            TypeExpr::Conditional(conditional) => self.print_conditional(conditional),
            TypeExpr::Function(function) => self.print_function_type(function),
        }
    }

    fn print_type_ref(&mut self, reference: &TypeRef) {
        self.output.push_str(&reference.name);
        if !reference.args.is_empty() {
            self.output.push('<');
            self.print_joined(&reference.args, ", ", |_| false);
            self.output.push('>');
        }
    }

    fn print_joined(&mut self, types: &[TypeExpr], separator: &str, parens: fn(&TypeExpr) -> bool) {
        for (i, ty) in types.iter().enumerate() {
            if i > 0 {
                self.output.push_str(separator);
            }
            self.print_operand(ty, parens(ty));
        }
    }

    fn print_operand(&mut self, ty: &TypeExpr, parens: bool) {
        if parens {
            self.output.push('(');
            self.print_type(ty);
            self.output.push(')');
        } else {
            self.print_type(ty);
        }
    }

    fn print_conditional(&mut self, conditional: &Conditional) {
        let check_parens = matches!(
            conditional.check,
            TypeExpr::Conditional(_) | TypeExpr::Function(_)
        );
        self.print_operand(&conditional.check, check_parens);
        self.output.push_str(" extends ");
        let extends_parens = matches!(
            conditional.extends,
            TypeExpr::Conditional(_) | TypeExpr::Function(_)
        );
        self.print_operand(&conditional.extends, extends_parens);
        self.output.push_str(" ? ");
        self.print_type(&conditional.then);
        self.output.push_str(" : ");
        self.print_type(&conditional.otherwise);
    }

    fn print_function_type(&mut self, function: &FunctionType) {
        self.print_params(&function.params);
        self.output.push_str(" => ");
        self.print_type(&function.ret);
    }
}

const fn keyword_str(keyword: Keyword) -> &'static str {
    match keyword {
        Keyword::String => "string",
        Keyword::Number => "number",
        Keyword::Boolean => "boolean",
        Keyword::Unknown => "unknown",
        Keyword::Null => "null",
    }
}

fn needs_parens_in_union(ty: &TypeExpr) -> bool {
    matches!(
        ty,
        TypeExpr::Union(_) | TypeExpr::Function(_) | TypeExpr::Conditional(_)
    )
}

fn needs_parens_in_intersection(ty: &TypeExpr) -> bool {
    matches!(
        ty,
        TypeExpr::Union(_)
            | TypeExpr::Intersection(_)
            | TypeExpr::Function(_)
            | TypeExpr::Conditional(_)
    )
}

fn needs_parens_as_operand(ty: &TypeExpr) -> bool {
    matches!(
        ty,
        TypeExpr::Union(_)
            | TypeExpr::Intersection(_)
            | TypeExpr::KeyOf(_)
            | TypeExpr::Function(_)
            | TypeExpr::Conditional(_)
    )
}
