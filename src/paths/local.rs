use std::path::{Component, Path, PathBuf};

use crate::config::StorageConfig;

pub const LOCAL_PREFIX: &str = "local:";

/// `local:` prefix, case-sensitive: `Local:` or `LOCAL:` are not local
/// destinations.
pub fn is_local_path(path: &str) -> bool {
    path.starts_with(LOCAL_PREFIX)
}

/// Resolve a `local:` destination to a filesystem path.
///
/// - absolute paths are returned unchanged;
/// - relative paths are joined to the configured base directory, if any;
/// - otherwise they are resolved against the current working directory.
///
/// Returns `None` for non-`local:` destinations, for an empty path after the
/// prefix, and when the current directory cannot be determined. Existence is
/// not checked.
pub fn get_local_path(destination: &str, config: &StorageConfig) -> Option<PathBuf> {
    let local_path = destination.strip_prefix(LOCAL_PREFIX)?;
    if local_path.is_empty() {
        return None;
    }

    let path = Path::new(local_path);
    if path.is_absolute() {
        return Some(path.to_path_buf());
    }

    if let Some(base) = config.base_dir() {
        return Some(base.join(path));
    }

    // pas de base configurée: comportement historique (relatif au cwd)
    match std::env::current_dir() {
        Ok(cwd) => Some(normalize_lexically(&cwd.join(path))),
        Err(_err) => {
            #[cfg(feature = "with-tracing")]
            tracing::debug!(error = %_err, destination, "current directory unavailable");
            None
        }
    }
}

/// Collapse `.` and `..` components without touching the filesystem.
/// `..` never climbs above the root.
pub(crate) fn normalize_lexically(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::Prefix(_) | Component::RootDir => out.push(component.as_os_str()),
            Component::CurDir => {}
            Component::ParentDir => {
                let climbs_out = matches!(
                    out.components().next_back(),
                    None | Some(Component::ParentDir)
                );
                if climbs_out && !out.has_root() {
                    out.push("..");
                } else {
                    out.pop();
                }
            }
            Component::Normal(part) => out.push(part),
        }
    }
    if out.as_os_str().is_empty() {
        out.push(".");
    }
    out
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn local_prefix_is_case_sensitive() {
        assert!(is_local_path("local:/x"));
        assert!(is_local_path("local:"));
        assert!(!is_local_path("Local:/x"));
        assert!(!is_local_path("LOCAL:/x"));
        assert!(!is_local_path(" local:/x"));
    }

    #[test]
    fn absolute_destination_ignores_config() {
        let expected = Some(PathBuf::from("/abs/dir"));
        assert_eq!(get_local_path("local:/abs/dir", &StorageConfig::default()), expected);
        assert_eq!(get_local_path("local:/abs/dir", &StorageConfig::new("/base")), expected);
    }

    #[test]
    fn relative_destination_uses_base() {
        let cfg = StorageConfig::new("/base");
        assert_eq!(
            get_local_path("local:rel/dir", &cfg),
            Some(PathBuf::from("/base/rel/dir"))
        );
        let padded = StorageConfig::new("  /base  ");
        assert_eq!(
            get_local_path("local:rel/dir", &padded),
            Some(PathBuf::from("/base/rel/dir"))
        );
    }

    #[test]
    fn relative_destination_without_base_uses_cwd() {
        let cwd = std::env::current_dir().expect("cwd");
        let resolved = get_local_path("local:rel/dir", &StorageConfig::new("   "))
            .expect("resolved");
        assert!(resolved.is_absolute());
        assert_eq!(resolved, normalize_lexically(&cwd.join("rel/dir")));

        let dotted = get_local_path("local:./rel/../rel/dir", &StorageConfig::default())
            .expect("resolved");
        assert_eq!(dotted, resolved);
    }

    #[test]
    fn not_local_or_empty() {
        let cfg = StorageConfig::new("/base");
        assert_eq!(get_local_path("not-local", &cfg), None);
        assert_eq!(get_local_path("Local:/x", &cfg), None);
        assert_eq!(get_local_path("local:", &cfg), None);
    }

    #[test]
    fn lexical_normalization() {
        assert_eq!(normalize_lexically(Path::new("/a/./b/../c")), PathBuf::from("/a/c"));
        assert_eq!(normalize_lexically(Path::new("/../..")), PathBuf::from("/"));
        assert_eq!(normalize_lexically(Path::new("a/../../b")), PathBuf::from("../b"));
        assert_eq!(normalize_lexically(Path::new("./")), PathBuf::from("."));
    }

    proptest! {
        #[test]
        fn non_local_destinations_never_resolve(s in "\\PC*") {
            prop_assume!(!s.starts_with(LOCAL_PREFIX));
            prop_assert_eq!(get_local_path(&s, &StorageConfig::new("/base")), None);
        }
    }
}
