/// All errors a SheetSource implementation can return.
///
/// These are infrastructure errors, never user errors: a malformed
/// coordinate or a failed backend read means the caller's table
/// assumptions are broken, and the command layer lets them propagate.
#[derive(Debug, thiserror::Error)]
pub enum SheetError {
    /// A coordinate string was not valid A1 notation.
    #[error("malformed A1 coordinate: {a1}")]
    BadCoordinate { a1: String },

    /// A fixture could not be deserialized into a sheet.
    #[error("malformed sheet fixture: {0}")]
    BadFixture(String),

    /// A backend-specific error (network, quota, auth, ...).
    #[error("sheet backend error: {0}")]
    Backend(String),
}
