//! Token type identifier shared by the scanner and the engine.

/// Index into a language's token-type table.
///
/// Ids are dense and assigned in declaration order by the table that owns
/// them. Id `0` is reserved for the error type in every table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TokenTypeId(u16);

impl TokenTypeId {
    /// The fixed error type present in every token table.
    pub const ERROR: TokenTypeId = TokenTypeId(0);

    /// Create an id from its raw table index.
    #[inline]
    pub const fn new(raw: u16) -> Self {
        TokenTypeId(raw)
    }

    /// Raw table index.
    #[inline]
    pub const fn raw(self) -> u16 {
        self.0
    }

    /// Table index as `usize`, for slice access.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

const _: () = assert!(std::mem::size_of::<TokenTypeId>() == 2);
