#![forbid(unsafe_code)]
//! linkcheck_lib — reconnaissance des liens de téléchargement et des destinations locales

pub mod config;
pub mod links;
pub mod paths;
pub mod scheme;

pub use config::{LOCAL_STORAGE_PATH_ENV, StorageConfig};
pub use links::{
    is_gdrive_id, is_gdrive_link, is_magnet, is_share_link, is_telegram_link, is_url,
};
pub use paths::{
    LocalPathError, LocalPathReport, get_local_path, is_local_path, is_rclone_path,
    local_path_report, validate_local_path,
};
pub use scheme::{SchemeKind, SchemeReport, classify};
