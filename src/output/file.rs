use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

use super::{ensure_not_empty, Result};

/// Appends the password as a single line, creating the file (and its parent
/// directory) when missing.
pub fn save_to_file(path: &Path, password: &str) -> Result<()> {
    save_all_to_file(path, &[password])
}

/// Appends each password on its own line with a single write. Nothing is
/// written when any password is empty.
pub fn save_all_to_file<S: AsRef<str>>(path: &Path, passwords: &[S]) -> Result<()> {
    for password in passwords {
        ensure_not_empty(password.as_ref(), "save")?;
    }
    if passwords.is_empty() {
        return Ok(());
    }

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }

    let mut buffer = String::new();
    for password in passwords {
        buffer.push_str(password.as_ref());
        buffer.push('\n');
    }

    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    file.write_all(buffer.as_bytes())?;

    log::info!("{} password(s) appended to {}", passwords.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::OutputError;

    #[test]
    fn appends_one_line_per_save() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("passwords.txt");

        save_to_file(&path, "first").unwrap();
        save_to_file(&path, "second").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "first\nsecond\n");
    }

    #[test]
    fn saves_a_batch_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("passwords.txt");

        save_to_file(&path, "zero").unwrap();
        save_all_to_file(&path, &["one", "two", "three"]).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "zero\none\ntwo\nthree\n");
    }

    #[test]
    fn batch_with_an_empty_password_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("passwords.txt");

        let err = save_all_to_file(&path, &["one", "", "three"]).unwrap_err();
        assert!(matches!(err, OutputError::EmptyPassword("save")));
        assert!(!path.exists());
    }

    #[test]
    fn creates_missing_parent_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("deeper").join("out.txt");
        save_to_file(&path, "abc").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "abc\n");
    }

    #[test]
    fn empty_password_is_not_saved() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("passwords.txt");
        let err = save_to_file(&path, "").unwrap_err();
        assert!(matches!(err, OutputError::EmptyPassword("save")));
        assert!(!path.exists());
    }
}
