// src/utils/io.rs
use std::path::PathBuf;

/// Get the application data directory. It is not created here; writers create
/// it on first use.
pub fn get_app_data_dir() -> Option<PathBuf> {
    match directories::ProjectDirs::from("com", "passgen", "passgen") {
        Some(proj_dirs) => Some(proj_dirs.data_dir().to_path_buf()),
        None => {
            log::warn!("Could not determine data directory");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn looking_up_the_data_dir_does_not_create_it() {
        if let Some(dir) = get_app_data_dir() {
            let existed = dir.exists();
            let again = get_app_data_dir();
            assert_eq!(again.as_ref(), Some(&dir));
            assert_eq!(dir.exists(), existed);
        }
    }
}
