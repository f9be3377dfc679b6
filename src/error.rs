// SPDX-License-Identifier: MPL-2.0
use crate::backend::EditError;
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    /// Localization resources could not be used as expected.
    I18n(String),
    /// The edit backend rejected or failed a request.
    Edit(EditError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::I18n(e) => write!(f, "Localization Error: {}", e),
            Error::Edit(e) => write!(f, "Edit Error: {}", e),
        }
    }
}

impl From<EditError> for Error {
    fn from(err: EditError) -> Self {
        Error::Edit(err)
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_i18n_error() {
        let err = Error::I18n("missing bundle".to_string());
        assert_eq!(format!("{}", err), "Localization Error: missing bundle");
    }

    #[test]
    fn from_edit_error_produces_edit_variant() {
        let err: Error = EditError::Unknown("boom".to_string()).into();
        match err {
            Error::Edit(inner) => assert!(format!("{}", inner).contains("boom")),
            _ => panic!("expected Edit variant"),
        }
    }
}
