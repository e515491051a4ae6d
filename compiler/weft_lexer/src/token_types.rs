//! Per-language table of named token types.

use rustc_hash::FxHashMap;
use weft_lexer_core::TokenTypeId;

/// Name of the fixed error type, always [`TokenTypeId::ERROR`].
pub const ERROR_TYPE_NAME: &str = "error";

/// Ordered, de-duplicated set of token type names.
///
/// Ids are assigned in first-declaration order starting after the error
/// type. Declaring a name twice returns the original id.
#[derive(Clone, Debug)]
pub struct TokenTypeTable {
    names: Vec<String>,
    ids: FxHashMap<String, TokenTypeId>,
}

impl TokenTypeTable {
    /// A table holding only the error type.
    pub fn new() -> Self {
        let mut table = Self {
            names: Vec::new(),
            ids: FxHashMap::default(),
        };
        table.names.push(ERROR_TYPE_NAME.to_owned());
        table
            .ids
            .insert(ERROR_TYPE_NAME.to_owned(), TokenTypeId::ERROR);
        table
    }

    /// Declare `name`, returning its id. Existing names keep their id.
    ///
    /// Returns `None` once the table is full (more than `u16::MAX` types).
    pub fn declare(&mut self, name: &str) -> Option<TokenTypeId> {
        if let Some(&id) = self.ids.get(name) {
            return Some(id);
        }
        let id = TokenTypeId::new(u16::try_from(self.names.len()).ok()?);
        self.names.push(name.to_owned());
        self.ids.insert(name.to_owned(), id);
        Some(id)
    }

    /// Look up a declared name.
    pub fn id(&self, name: &str) -> Option<TokenTypeId> {
        self.ids.get(name).copied()
    }

    /// Name of `id`, or `None` if it is not from this table.
    pub fn name(&self, id: TokenTypeId) -> Option<&str> {
        self.names.get(id.index()).map(String::as_str)
    }

    /// Number of types including the error type.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Always `false`: the error type is always present.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Names in id order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

impl Default for TokenTypeTable {
    fn default() -> Self {
        Self::new()
    }
}
