use super::LocalPathError;

/// `(valid, reason)` form of a destination check; `reason` is empty when
/// the path is usable.
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalPathReport {
    pub valid: bool,
    pub reason: String,
}

impl LocalPathReport {
    pub fn ok() -> Self {
        Self {
            valid: true,
            reason: String::new(),
        }
    }

    pub fn into_pair(self) -> (bool, String) {
        (self.valid, self.reason)
    }
}

impl From<Result<(), LocalPathError>> for LocalPathReport {
    fn from(result: Result<(), LocalPathError>) -> Self {
        match result {
            Ok(()) => Self::ok(),
            Err(err) => Self {
                valid: false,
                reason: err.to_string(),
            },
        }
    }
}
