use serde::{Deserialize, Serialize};

/// Runtime type names and the language alias each one is written as.
pub const TYPE_ALIASES: &[(&str, &str)] = &[
    ("Boolean", "bool"),
    ("Byte", "byte"),
    ("SByte", "sbyte"),
    ("Char", "char"),
    ("Decimal", "decimal"),
    ("Double", "double"),
    ("Single", "float"),
    ("Int16", "short"),
    ("UInt16", "ushort"),
    ("Int32", "int"),
    ("UInt32", "uint"),
    ("Int64", "long"),
    ("UInt64", "ulong"),
    ("Object", "object"),
    ("String", "string"),
    ("Void", "void"),
];

/// A reference to a type as the host runtime names it.
///
/// `name` may be namespace-qualified (`System.Collections.Generic.List`1`);
/// generic arguments and array rank are kept separately so that the
/// friendly rendering can be rebuilt without parsing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TypeRef {
    pub name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub args: Vec<TypeRef>,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub array_rank: u32,
}

fn is_zero(rank: &u32) -> bool {
    *rank == 0
}

impl TypeRef {
    pub fn named(name: impl Into<String>) -> Self {
        Self { name: name.into(), args: Vec::new(), array_rank: 0 }
    }

    pub fn generic(name: impl Into<String>, args: Vec<TypeRef>) -> Self {
        Self { name: name.into(), args, array_rank: 0 }
    }

    /// This type as the element of a single-dimension array.
    pub fn array_of(element: TypeRef) -> Self {
        Self { array_rank: 1, ..element }
    }

    pub fn void() -> Self {
        Self::named("System.Void")
    }

    pub fn object() -> Self {
        Self::named("System.Object")
    }

    pub fn string() -> Self {
        Self::named("System.String")
    }

    pub fn int() -> Self {
        Self::named("System.Int32")
    }

    pub fn long() -> Self {
        Self::named("System.Int64")
    }

    pub fn bool() -> Self {
        Self::named("System.Boolean")
    }

    pub fn exception() -> Self {
        Self::named("System.Exception")
    }

    /// The unqualified name without the generic arity suffix, alias-mapped.
    fn base_name(&self) -> &str {
        let simple = self.name.rsplit('.').next().unwrap_or(&self.name);
        let simple = simple.split('`').next().unwrap_or(simple);
        alias_for(simple).unwrap_or(simple)
    }

    /// The type as it would be written in source: `int`, `List<string>`,
    /// `int?`, `string[]`, `int[,]`.
    pub fn friendly_name(&self) -> String {
        let base = self.base_name();
        let mut out = if base == "Nullable" && self.args.len() == 1 {
            format!("{}?", self.args[0].friendly_name())
        } else if self.args.is_empty() {
            base.replace('+', ".")
        } else {
            let args: Vec<String> = self.args.iter().map(TypeRef::friendly_name).collect();
            format!("{}<{}>", base.replace('+', "."), args.join(", "))
        };
        if self.array_rank > 0 {
            out.push('[');
            for _ in 1..self.array_rank {
                out.push(',');
            }
            out.push(']');
        }
        out
    }

    pub fn is_void(&self) -> bool {
        self.array_rank == 0 && self.base_name() == "void"
    }

    pub fn is_object(&self) -> bool {
        self.array_rank == 0 && self.base_name() == "object"
    }

    pub fn is_string(&self) -> bool {
        self.array_rank == 0 && self.base_name() == "string"
    }

    /// Whether two references name the same type once namespaces and
    /// aliases are ignored.
    pub fn same_as(&self, other: &TypeRef) -> bool {
        self.friendly_name() == other.friendly_name()
    }
}

fn alias_for(runtime_name: &str) -> Option<&'static str> {
    TYPE_ALIASES
        .iter()
        .find(|(name, _)| *name == runtime_name)
        .map(|(_, alias)| *alias)
}
