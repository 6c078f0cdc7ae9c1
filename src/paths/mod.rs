//! Destination paths: rclone remotes, `local:` destinations and local
//! directory checks.
//!
//! [`is_rclone_path`] and [`is_local_path`] are pure predicates.
//! [`get_local_path`] reads the current directory when no base directory is
//! configured, and [`validate_local_path`] inspects the filesystem without
//! ever touching it.

mod error;
mod local;
mod rclone;
mod types;
mod validate;

pub use error::LocalPathError;
pub use local::{LOCAL_PREFIX, get_local_path, is_local_path};
pub use rclone::is_rclone_path;
pub use types::LocalPathReport;
pub use validate::{local_path_report, validate_local_path};
