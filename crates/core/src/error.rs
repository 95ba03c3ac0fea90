/// Validation failures for visitor input.
///
/// The display strings are returned to the caller verbatim.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoreError {
    /// One of `name`, `email` or `message` was absent or empty.
    #[error("Missing required fields")]
    MissingFields,

    /// The email did not look like `local@domain.tld`.
    #[error("Invalid email address")]
    InvalidEmail,
}
