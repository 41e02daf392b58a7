use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    #[error("invalid color `{0}`: expected `#rgb`, `#rrggbb` or `r, g, b`")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParamError {
    #[error("unknown parameter `{0}`: expected `speed` or `amplitude`")]
    Unknown(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StyleError {
    #[error("unknown wave style `{0}`: expected `banded` or `organic`")]
    Unknown(String),
}
