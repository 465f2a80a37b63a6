//! Names of the external types, modules, and generics referenced by generated code.
//!
//! An [`Identifiers`] table is built once (usually through
//! [`CodegenConfig`](crate::config::CodegenConfig)) and handed to every
//! synthesizer by reference.

use std::fmt;

/// The record operations every model exposes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum QueryKind {
    /// Create a record.
    Add,
    /// Count records.
    Count,
    /// Read records.
    Get,
    /// Delete records.
    Remove,
    /// Update records.
    Set,
}

impl QueryKind {
    /// All operations, in output order.
    pub const ALL: [Self; 5] = [Self::Add, Self::Count, Self::Get, Self::Remove, Self::Set];

    /// Name of the entry-point variable (`get`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Count => "count",
            Self::Get => "get",
            Self::Remove => "remove",
            Self::Set => "set",
        }
    }

    /// Verb used in generated documentation (`Get`).
    #[must_use]
    pub const fn readable(self) -> &'static str {
        match self {
            Self::Add => "Add",
            Self::Count => "Count",
            Self::Get => "Get",
            Self::Remove => "Remove",
            Self::Set => "Set",
        }
    }

    /// Query type imported from the compiler package (`GetQuery`).
    #[must_use]
    pub const fn query_type(self) -> &'static str {
        match self {
            Self::Add => "AddQuery",
            Self::Count => "CountQuery",
            Self::Get => "GetQuery",
            Self::Remove => "RemoveQuery",
            Self::Set => "SetQuery",
        }
    }

    /// Suffix of per-model accessor interfaces (`AccountGetter`).
    #[must_use]
    pub const fn accessor_suffix(self) -> &'static str {
        match self {
            Self::Add => "Adder",
            Self::Count => "Counter",
            Self::Get => "Getter",
            Self::Remove => "Remover",
            Self::Set => "Setter",
        }
    }

    /// Generic base interface that accessor interfaces extend.
    ///
    /// Only getters distinguish between singular and plural access.
    #[must_use]
    pub const fn accessor_base(self, plural: bool) -> &'static str {
        match (self, plural) {
            (Self::Add, _) => "IAdder",
            (Self::Count, _) => "ICounter",
            (Self::Get, false) => "IGetterSingular",
            (Self::Get, true) => "IGetterPlural",
            (Self::Remove, _) => "IRemover",
            (Self::Set, _) => "ISetter",
        }
    }

    /// Name of the interface grouping every model's accessor (`Getters`).
    #[must_use]
    pub const fn group_name(self) -> &'static str {
        match self {
            Self::Add => "Adders",
            Self::Count => "Counters",
            Self::Get => "Getters",
            Self::Remove => "Removers",
            Self::Set => "Setters",
        }
    }
}

impl fmt::Display for QueryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Operations exposed by the syntax factory besides the per-model ones.
pub const AUXILIARY_OPERATIONS: [&str; 6] = ["alter", "batch", "create", "drop", "sql", "sqlBatch"];

/// Generic parameter names.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenericNames {
    /// Resolved target shape.
    pub schema: String,
    /// Selected link fields.
    pub using: String,
    /// Key of the link field being resolved.
    pub key: String,
}

impl Default for GenericNames {
    fn default() -> Self {
        Self {
            schema: "TSchema".to_string(),
            using: "TUsing".to_string(),
            key: "TKey".to_string(),
        }
    }
}

/// Names of every external module and type the generated code refers to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Identifiers {
    /// Module being augmented.
    pub module: String,
    /// Package exporting the query types and `Model`.
    pub compiler_module: String,
    /// Package exporting `DeepCallable` and `ResultRecord`.
    pub syntax_module: String,
    /// Package exporting `QueryHandlerOptions`.
    pub types_module: String,
    /// Namespace holding the accessor base interfaces.
    pub namespace: String,
    /// Callable wrapper binding a query to its result.
    pub deep_callable: String,
    /// Base shape every record extends.
    pub result_record: String,
    /// Type of blob fields.
    pub stored_object: String,
    /// Model definition type returned when listing models.
    pub model: String,
    /// Query type used when listing models.
    pub list_query: String,
    /// Options accepted by the syntax factory.
    pub query_handler_options: String,
    /// Name of the syntax factory constant.
    pub create_syntax_factory: String,
    /// Name of the field-selection helper type.
    pub resolve_schema: String,
    /// Name of the JSON value helper type.
    pub json_value: String,
    /// Sentinel selecting every link field.
    pub all_sentinel: String,
    /// Property listing every model.
    pub list_models_property: String,
    /// Generic parameter names.
    pub generics: GenericNames,
}

impl Default for Identifiers {
    fn default() -> Self {
        Self {
            module: "ronin".to_string(),
            compiler_module: "@ronin/compiler".to_string(),
            syntax_module: "@ronin/syntax/queries".to_string(),
            types_module: "ronin/types".to_string(),
            namespace: "RONIN".to_string(),
            deep_callable: "DeepCallable".to_string(),
            result_record: "ResultRecord".to_string(),
            stored_object: "StoredObject".to_string(),
            model: "Model".to_string(),
            list_query: "ListQuery".to_string(),
            query_handler_options: "QueryHandlerOptions".to_string(),
            create_syntax_factory: "createSyntaxFactory".to_string(),
            resolve_schema: "ResolveSchema".to_string(),
            json_value: "JsonValue".to_string(),
            all_sentinel: "all".to_string(),
            list_models_property: "models".to_string(),
            generics: GenericNames::default(),
        }
    }
}

impl Identifiers {
    /// Qualifies `name` with the accessor namespace (`RONIN.IAdder`).
    #[must_use]
    pub fn qualified(&self, name: &str) -> String {
        format!("{}.{name}", self.namespace)
    }
}
