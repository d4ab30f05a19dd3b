use thiserror::Error;

/// Tree construction errors. These are fatal at build time; there is no
/// valid empty or malformed node, and evaluation never starts on a tree
/// that failed to construct.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TreeError {
    #[error("{node} needs at least one child")]
    EmptyComposite { node: &'static str },
}
