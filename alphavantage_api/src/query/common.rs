//! Shared query infrastructure: the [`Query`] trait implemented by every
//! operation.

use url::Url;

use crate::Error;

/// Trait implemented by all operation queries. A query knows its wire
/// `function` identifier, how to validate its arguments, and how to
/// serialize itself onto the request URL.
pub trait Query {
    /// Wire value of the `function` query parameter.
    fn function(&self) -> String;

    /// Checks every argument. Runs before any network I/O, so a failed
    /// request is never sent.
    fn validate(&self) -> Result<(), Error>;

    /// Appends this query's parameters to the given URL, returning the
    /// modified URL. The `function` pair comes first; the client appends
    /// `apikey` afterwards.
    fn add_to_url(&self, url: &Url) -> Url;
}
