//! Declaration tree produced by the compiler.
//!
//! The tree is plain data: every synthesizer builds nodes from these types and
//! an [`Emit`](crate::emit::Emit) implementation renders them to text. Nothing
//! here knows about any particular output syntax.

/// Built-in keyword types.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Keyword {
    /// `string`
    String,
    /// `number`
    Number,
    /// `boolean`
    Boolean,
    /// `unknown`
    Unknown,
    /// `null`
    Null,
}

/// A type expression.
#[derive(Clone, Debug, PartialEq)]
pub enum TypeExpr {
    /// A keyword type like `string` or `null`.
    Keyword(Keyword),
    /// A named type, optionally applied to type arguments: `Array<Account>`.
    Reference(TypeRef),
    /// A string literal type: `"author"`.
    StringLiteral(String),
    /// `A | B`
    Union(Vec<TypeExpr>),
    /// `A & B`
    Intersection(Vec<TypeExpr>),
    /// An inline object shape: `{ moreBefore?: string }`.
    Object(Vec<Member>),
    /// A tuple type: `[]`, `[A, B]`.
    Tuple(Vec<TypeExpr>),
    /// `Object[Index]`
    IndexedAccess(Box<TypeExpr>, Box<TypeExpr>),
    /// `keyof T`
    KeyOf(Box<TypeExpr>),
    /// `typeof name`
    TypeQuery(String),
    /// `Check extends Extends ? Then : Otherwise`
    Conditional(Box<Conditional>),
    /// `(params) => ret`
    Function(Box<FunctionType>),
}

impl TypeExpr {
    /// `string`
    #[must_use]
    pub const fn string() -> Self {
        Self::Keyword(Keyword::String)
    }

    /// `number`
    #[must_use]
    pub const fn number() -> Self {
        Self::Keyword(Keyword::Number)
    }

    /// `boolean`
    #[must_use]
    pub const fn boolean() -> Self {
        Self::Keyword(Keyword::Boolean)
    }

    /// `unknown`
    #[must_use]
    pub const fn unknown() -> Self {
        Self::Keyword(Keyword::Unknown)
    }

    /// `null`
    #[must_use]
    pub const fn null() -> Self {
        Self::Keyword(Keyword::Null)
    }

    /// A reference to a named type without arguments.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self::Reference(TypeRef::new(name))
    }

    /// A reference to a generic type applied to `args`.
    #[must_use]
    pub fn generic(name: impl Into<String>, args: Vec<Self>) -> Self {
        Self::Reference(TypeRef::with_args(name, args))
    }

    /// `Array<element>`
    #[must_use]
    pub fn array(element: Self) -> Self {
        Self::generic("Array", vec![element])
    }

    /// A string literal type.
    #[must_use]
    pub fn literal(value: impl Into<String>) -> Self {
        Self::StringLiteral(value.into())
    }

    /// A union of `members`, collapsed when there is only one.
    #[must_use]
    pub fn union(mut members: Vec<Self>) -> Self {
        if members.len() == 1 {
            members.remove(0)
        } else {
            Self::Union(members)
        }
    }

    /// An intersection of `members`, collapsed when there is only one.
    #[must_use]
    pub fn intersection(mut members: Vec<Self>) -> Self {
        if members.len() == 1 {
            members.remove(0)
        } else {
            Self::Intersection(members)
        }
    }

    /// `object[index]`
    #[must_use]
    pub fn indexed(object: Self, index: Self) -> Self {
        Self::IndexedAccess(Box::new(object), Box::new(index))
    }

    /// `keyof inner`
    #[must_use]
    pub fn key_of(inner: Self) -> Self {
        Self::KeyOf(Box::new(inner))
    }

    /// `check extends extends ? then : otherwise`
    #[must_use]
    pub fn conditional(check: Self, extends: Self, then: Self, otherwise: Self) -> Self {
        Self::Conditional(Box::new(Conditional {
            check,
            extends,
            then,
            otherwise,
        }))
    }

    /// `(params) => ret`
    #[must_use]
    pub fn function(params: Vec<Param>, ret: Self) -> Self {
        Self::Function(Box::new(FunctionType { params, ret }))
    }

    /// Returns true if `null` is one of the alternatives of this type.
    #[must_use]
    pub fn is_nullable(&self) -> bool {
        match self {
            Self::Keyword(Keyword::Null) => true,
            Self::Union(members) => members.iter().any(Self::is_nullable),
            _ => false,
        }
    }
}

/// A named type with optional type arguments.
#[derive(Clone, Debug, PartialEq)]
pub struct TypeRef {
    /// Type name, possibly qualified (`RONIN.IAdder`).
    pub name: String,
    /// Type arguments.
    pub args: Vec<TypeExpr>,
}

impl TypeRef {
    /// Creates a reference without type arguments.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            args: Vec::new(),
        }
    }

    /// Creates a reference applied to `args`.
    #[must_use]
    pub fn with_args(name: impl Into<String>, args: Vec<TypeExpr>) -> Self {
        Self {
            name: name.into(),
            args,
        }
    }
}

/// A conditional type.
#[derive(Clone, Debug, PartialEq)]
pub struct Conditional {
    /// The checked type.
    pub check: TypeExpr,
    /// The type it is tested against.
    pub extends: TypeExpr,
    /// Result when the test holds.
    pub then: TypeExpr,
    /// Result otherwise.
    pub otherwise: TypeExpr,
}

/// A function type.
#[derive(Clone, Debug, PartialEq)]
pub struct FunctionType {
    /// Parameters.
    pub params: Vec<Param>,
    /// Return type.
    pub ret: TypeExpr,
}

/// A function parameter.
#[derive(Clone, Debug, PartialEq)]
pub struct Param {
    /// Parameter name.
    pub name: String,
    /// Parameter type.
    pub ty: TypeExpr,
}

impl Param {
    /// Creates a parameter.
    #[must_use]
    pub fn new(name: impl Into<String>, ty: TypeExpr) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }
}

/// A member of an object shape or interface body.
#[derive(Clone, Debug, PartialEq)]
pub enum Member {
    /// A named property.
    Property(Property),
    /// `[key: string]: value`
    Index(IndexSignature),
}

/// A named property.
#[derive(Clone, Debug, PartialEq)]
pub struct Property {
    /// Property key as written in the schema (quoted on output if needed).
    pub name: String,
    /// Whether the property may be omitted (`name?:`).
    pub optional: bool,
    /// Property type.
    pub ty: TypeExpr,
    /// Attached documentation.
    pub doc: Option<String>,
}

impl Property {
    /// Creates a required property.
    #[must_use]
    pub fn new(name: impl Into<String>, ty: TypeExpr) -> Self {
        Self {
            name: name.into(),
            optional: false,
            ty,
            doc: None,
        }
    }

    /// Marks the property as optional.
    #[must_use]
    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    /// Attaches documentation.
    #[must_use]
    pub fn with_doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }
}

impl From<Property> for Member {
    fn from(property: Property) -> Self {
        Self::Property(property)
    }
}

/// An index signature.
#[derive(Clone, Debug, PartialEq)]
pub struct IndexSignature {
    /// Name of the key binding.
    pub key_name: String,
    /// Key type.
    pub key: TypeExpr,
    /// Value type.
    pub value: TypeExpr,
}

/// A generic type parameter.
#[derive(Clone, Debug, PartialEq)]
pub struct TypeParam {
    /// Parameter name.
    pub name: String,
    /// `extends` constraint.
    pub constraint: Option<TypeExpr>,
    /// Default type.
    pub default: Option<TypeExpr>,
}

impl TypeParam {
    /// Creates an unconstrained parameter.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            constraint: None,
            default: None,
        }
    }

    /// Sets the constraint.
    #[must_use]
    pub fn extends(mut self, constraint: TypeExpr) -> Self {
        self.constraint = Some(constraint);
        self
    }

    /// Sets the default.
    #[must_use]
    pub fn with_default(mut self, default: TypeExpr) -> Self {
        self.default = Some(default);
        self
    }
}

/// `interface Name<Params> extends Bases { members }`
#[derive(Clone, Debug, PartialEq)]
pub struct InterfaceDecl {
    /// Interface name.
    pub name: String,
    /// Generic parameters.
    pub type_params: Vec<TypeParam>,
    /// Inherited interfaces.
    pub extends: Vec<TypeRef>,
    /// Body members.
    pub members: Vec<Member>,
    /// Attached documentation.
    pub doc: Option<String>,
}

impl InterfaceDecl {
    /// Creates an empty interface.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_params: Vec::new(),
            extends: Vec::new(),
            members: Vec::new(),
            doc: None,
        }
    }

    /// Returns the property with the given name.
    #[must_use]
    pub fn property(&self, name: &str) -> Option<&Property> {
        self.members.iter().find_map(|member| match member {
            Member::Property(p) if p.name == name => Some(p),
            _ => None,
        })
    }
}

/// `type Name<Params> = ty;`
#[derive(Clone, Debug, PartialEq)]
pub struct TypeAliasDecl {
    /// Alias name.
    pub name: String,
    /// Generic parameters.
    pub type_params: Vec<TypeParam>,
    /// Aliased type.
    pub ty: TypeExpr,
    /// Whether the alias is exported.
    pub exported: bool,
    /// Attached documentation.
    pub doc: Option<String>,
}

/// `const name: ty;` (ambient)
#[derive(Clone, Debug, PartialEq)]
pub struct VariableDecl {
    /// Variable name.
    pub name: String,
    /// Variable type.
    pub ty: TypeExpr,
}

/// `export default function (params): ret;`
#[derive(Clone, Debug, PartialEq)]
pub struct FunctionDecl {
    /// Function name; `None` for an anonymous default export.
    pub name: Option<String>,
    /// Parameters.
    pub params: Vec<Param>,
    /// Return type.
    pub ret: TypeExpr,
    /// Whether this is the module's default export.
    pub default_export: bool,
}

/// `import type { A, B } from "module";`
#[derive(Clone, Debug, PartialEq)]
pub struct ImportDecl {
    /// Imported names.
    pub names: Vec<String>,
    /// Module specifier.
    pub module: String,
    /// Whether this is a type-only import.
    pub type_only: bool,
}

impl ImportDecl {
    /// Creates a type-only import.
    #[must_use]
    pub fn types<I, S>(names: I, module: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
            module: module.into(),
            type_only: true,
        }
    }
}

/// `declare module "name" { body }`
#[derive(Clone, Debug, PartialEq)]
pub struct ModuleDecl {
    /// Augmented module specifier.
    pub name: String,
    /// Statements inside the module block.
    pub body: Vec<Declaration>,
}

/// Any top-level or module-level declaration.
#[derive(Clone, Debug, PartialEq)]
pub enum Declaration {
    /// An import statement.
    Import(ImportDecl),
    /// An interface declaration.
    Interface(InterfaceDecl),
    /// A type alias.
    TypeAlias(TypeAliasDecl),
    /// An ambient constant.
    Variable(VariableDecl),
    /// An ambient function.
    Function(FunctionDecl),
    /// A module augmentation.
    Module(ModuleDecl),
}

impl Declaration {
    /// The declared name, if the declaration introduces one.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Interface(d) => Some(&d.name),
            Self::TypeAlias(d) => Some(&d.name),
            Self::Variable(d) => Some(&d.name),
            Self::Function(d) => d.name.as_deref(),
            Self::Module(d) => Some(&d.name),
            Self::Import(_) => None,
        }
    }
}

/// An ordered unit of declarations, rendered as one output file.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct SourceFile {
    /// Declarations in output order.
    pub declarations: Vec<Declaration>,
}

impl SourceFile {
    /// Returns the first module augmentation in this file.
    #[must_use]
    pub fn module(&self) -> Option<&ModuleDecl> {
        self.declarations.iter().find_map(|d| match d {
            Declaration::Module(m) => Some(m),
            _ => None,
        })
    }

    /// Returns true if a top-level declaration with the given name exists.
    #[must_use]
    pub fn declares(&self, name: &str) -> bool {
        self.declarations.iter().any(|d| d.name() == Some(name))
    }
}
