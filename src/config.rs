use std::ffi::OsString;
use std::path::{Path, PathBuf};

#[cfg(feature = "with-serde")]
use serde::{Deserialize, Serialize};

/// Environment variable holding the base directory for relative `local:` destinations.
pub const LOCAL_STORAGE_PATH_ENV: &str = "LOCAL_STORAGE_PATH";

/// Storage settings consulted by [`crate::get_local_path`].
#[cfg_attr(feature = "with-serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "with-serde", serde(default))]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StorageConfig {
    pub local_storage_path: PathBuf,
}

impl StorageConfig {
    pub fn new(local_storage_path: impl Into<PathBuf>) -> Self {
        Self {
            local_storage_path: local_storage_path.into(),
        }
    }

    /// Read `LOCAL_STORAGE_PATH` from the process environment. An unset
    /// variable yields an empty setting; non-UTF-8 values are kept as is.
    pub fn from_env() -> Self {
        Self::from_env_value(std::env::var_os(LOCAL_STORAGE_PATH_ENV))
    }

    pub(crate) fn from_env_value(value: Option<OsString>) -> Self {
        Self::new(value.unwrap_or_default())
    }

    /// Base directory with surrounding whitespace removed, `None` when blank.
    /// Only UTF-8 values are trimmed.
    pub fn base_dir(&self) -> Option<&Path> {
        match self.local_storage_path.to_str() {
            Some(s) => {
                let trimmed = s.trim();
                (!trimmed.is_empty()).then(|| Path::new(trimmed))
            }
            None => Some(self.local_storage_path.as_path()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_setting_has_no_base() {
        assert_eq!(StorageConfig::default().base_dir(), None);
        assert_eq!(StorageConfig::new("   \t").base_dir(), None);
        assert_eq!(StorageConfig::from_env_value(None).base_dir(), None);
    }

    #[test]
    fn base_is_trimmed() {
        let cfg = StorageConfig::new("  /srv/downloads \n");
        assert_eq!(cfg.base_dir(), Some(Path::new("/srv/downloads")));
    }

    #[cfg(unix)]
    #[test]
    fn non_utf8_base_is_kept() {
        use std::os::unix::ffi::OsStringExt;

        let raw = OsString::from_vec(b"/srv/t\xe9l\xe9chargements".to_vec());
        let cfg = StorageConfig::from_env_value(Some(raw.clone()));
        assert_eq!(cfg.base_dir(), Some(Path::new(&raw)));

        let resolved = crate::get_local_path("local:films", &cfg).expect("resolved");
        assert_eq!(resolved, PathBuf::from(raw).join("films"));
    }
}
