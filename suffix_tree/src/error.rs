use thiserror::Error;

/// Problems a loader can detect before handing a text to a builder.
/// The builders themselves never produce these.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TextError {
    #[error("text is empty, it needs at least a sentinel byte")]
    Empty,

    #[error("sentinel `{sentinel}` also occurs at position {position}")]
    DuplicateSentinel { sentinel: char, position: usize },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown construction strategy `{0}`, expected one of: naive, mccreight, ukkonen")]
pub struct ParseStrategyError(pub String);
