use super::local::LOCAL_PREFIX;

const USER_REMOTE_PREFIX: &str = "mrcc:";
const DEFAULT_REMOTE: &str = "rcl";

/// Prefixes owned by other schemes; they never name an rclone remote.
const RESERVED_PREFIXES: [&str; 4] = ["magnet:", "mtp:", "sa:", "tp:"];

/// `remote:path`, `mrcc:remote:path`, the `rcl` alias or `local:/absolute`.
pub fn is_rclone_path(path: &str) -> bool {
    if path == DEFAULT_REMOTE {
        return true;
    }
    if let Some(rest) = path.strip_prefix(LOCAL_PREFIX) {
        if rest.starts_with('/') && !rest.contains('\n') {
            return true;
        }
    }
    // `mrcc:` est optionnel: si la forme utilisateur échoue, "mrcc" peut
    // encore servir de nom de remote.
    path.strip_prefix(USER_REMOTE_PREFIX)
        .is_some_and(is_remote_path)
        || is_remote_path(path)
}

fn is_remote_path(s: &str) -> bool {
    if RESERVED_PREFIXES.iter().any(|p| s.starts_with(p)) {
        return false;
    }
    let Some((remote, rest)) = s.split_once(':') else {
        return false;
    };
    is_remote_name(remote) && !rest.contains('\n') && !rest.contains("//")
}

/// Letters, digits, `_`, `.`, space and `-`; no leading `-`/space, no
/// trailing space.
fn is_remote_name(name: &str) -> bool {
    if name.is_empty() || name.starts_with(['-', ' ']) || name.ends_with(' ') {
        return false;
    }
    name.chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | ' ' | '-'))
}
