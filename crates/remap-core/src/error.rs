use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Failure modes of a remapping pass.
///
/// Absence is never an error: a missing key, an out-of-range index or an
/// unmatched predicate all resolve to "no value". Errors are reserved for
/// type misuse, i.e. asking a scalar to behave like a container.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("cannot read key `{key}` out of a non-object value")]
    KeyOnNonObject { key: String },
    #[error("cannot index `{base}`: value is not an array")]
    IndexOnNonArray { base: String },
    #[error("an empty target path merges into the result root and requires an object value")]
    RootMergeExpectsObject,
    #[error("expected the resolved value to be an array of structures")]
    ExpectedArray,
}
