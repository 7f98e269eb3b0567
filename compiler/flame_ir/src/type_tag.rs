//! Named type tags.

use std::borrow::Cow;
use std::fmt;

/// An open-ended type tag, compared by name.
///
/// Five tags are predefined. Any other name can be constructed (a function
/// parameter may declare `string x`, say) but the runtime attaches no meaning
/// to it.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct TypeTag(Cow<'static, str>);

impl TypeTag {
    pub const BOOL: TypeTag = TypeTag(Cow::Borrowed("bool"));
    pub const INT: TypeTag = TypeTag(Cow::Borrowed("int"));
    pub const FUNCTION: TypeTag = TypeTag(Cow::Borrowed("function"));
    pub const EXTERN: TypeTag = TypeTag(Cow::Borrowed("extern"));
    pub const VOID: TypeTag = TypeTag(Cow::Borrowed("void"));

    /// Construct a tag from its name.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        match name.as_str() {
            "bool" => TypeTag::BOOL,
            "int" => TypeTag::INT,
            "function" => TypeTag::FUNCTION,
            "extern" => TypeTag::EXTERN,
            "void" => TypeTag::VOID,
            _ => TypeTag(Cow::Owned(name)),
        }
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
