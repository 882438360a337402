use alloy::primitives::Selector;

/// The ways a signature string can fail to parse.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The signature was empty after trimming.
    #[error("signature is empty")]
    Empty,
    /// The signature has no parameter list, e.g. `transfer`.
    #[error("signature '{0}' has no parameter list")]
    MissingParameters(String),
    /// The function name is not a valid identifier.
    #[error("invalid function name '{0}'")]
    InvalidName(String),
    /// Parentheses or brackets do not pair up.
    #[error("unbalanced parentheses or brackets in '{0}'")]
    Unbalanced(String),
    /// A type token is not part of the ABI type grammar.
    #[error("unrecognized ABI type '{0}'")]
    UnknownType(String),
    /// The label precedes the type, e.g. `amount uint256`.
    #[error("parameter '{0}' has its label before its type")]
    Misordered(String),
    /// A parameter could be split into a type, but what follows is not a single label.
    #[error("malformed parameter '{param}': {reason}")]
    MalformedParam {
        /// The parameter text as written.
        param: String,
        /// What is wrong with it.
        reason: String,
    },
    /// A parameter slot is empty, e.g. `f(uint256,,bool)`.
    #[error("empty parameter at position {0}")]
    EmptyParam(usize),
    /// Two parameters of the same list share a label, e.g. `f(uint256 a, uint256 a)`.
    #[error("duplicate parameter label '{0}'")]
    DuplicateLabel(String),
    /// Input remains after the output clause.
    #[error("unexpected trailing input '{0}'")]
    TrailingInput(String),
}

/// The ways a byte buffer can fail to decode.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    /// The buffer is shorter than the declared types require.
    #[error("calldata is too short: expected at least {expected} bytes, got {actual}")]
    Truncated {
        /// Minimum number of bytes required.
        expected: usize,
        /// Number of bytes available.
        actual: usize,
    },
    /// The leading four bytes do not match the signature's selector.
    #[error("selector mismatch: signature has {expected}, calldata starts with {actual}")]
    SelectorMismatch {
        /// Selector of the parsed signature.
        expected: Selector,
        /// Selector found in the calldata.
        actual: Selector,
    },
    /// The calldata string is not valid hex.
    #[error("invalid hex: {0}")]
    InvalidHex(String),
    /// The buffer is long enough but its offsets or lengths are inconsistent.
    #[error("malformed calldata: {0}")]
    Malformed(String),
}

/// Errors surfaced by the signature parser and the calldata framer.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The signature string is malformed.
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),
    /// The number of values does not match the number of inputs.
    #[error("Arity error: expected {expected} argument(s), got {actual}")]
    Arity {
        /// Number of inputs declared by the signature.
        expected: usize,
        /// Number of values supplied.
        actual: usize,
    },
    /// A value does not fit its declared type.
    #[error("Type error: argument '{param}' of type {ty} cannot hold '{value}': {reason}")]
    Type {
        /// Label of the parameter, or its position if unlabeled.
        param: String,
        /// Canonical type of the parameter.
        ty: String,
        /// The offending value.
        value: String,
        /// Why the value was rejected.
        reason: String,
    },
    /// The byte buffer is truncated or malformed.
    #[error("Decode error: {0}")]
    Decode(#[from] DecodeError),
}
