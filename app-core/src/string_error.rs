//! Small helper to turn arbitrary errors into diagnostic strings, for code
//! paths where the caller only logs or displays the failure.

use std::fmt::Display;

pub trait ErrorStringExt<T> {
    /// Map the error into `"<msg>: <error>"`.
    fn err_to_string(self, msg: &str) -> Result<T, String>;
}

impl<T, E: Display> ErrorStringExt<T> for Result<T, E> {
    fn err_to_string(self, msg: &str) -> Result<T, String> {
        self.map_err(|err| format!("{msg}: {err}"))
    }
}
