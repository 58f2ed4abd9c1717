use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum FlattenError {
    #[error("Recursion limit exceeded: call stack exhausted during recursive flatten")]
    RecursionLimitExceeded,
}

pub type FlattenResult<T> = Result<T, FlattenError>;
