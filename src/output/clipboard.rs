use std::time::Duration;

use super::{ensure_not_empty, OutputError, Result};

/// An open handle on the system clipboard.
///
/// On X11 and Wayland the copied text is served by this process, so it stays
/// pasteable only while the session (or a clipboard manager) is alive.
pub struct ClipboardSession {
    #[cfg(feature = "clipboard")]
    inner: arboard::Clipboard,
}

#[cfg(not(feature = "clipboard"))]
fn unsupported() -> OutputError {
    OutputError::Clipboard("clipboard support requires the 'clipboard' feature".to_string())
}

impl ClipboardSession {
    pub fn open() -> Result<Self> {
        #[cfg(feature = "clipboard")]
        {
            let inner = arboard::Clipboard::new()
                .map_err(|e| OutputError::Clipboard(e.to_string()))?;
            Ok(Self { inner })
        }

        #[cfg(not(feature = "clipboard"))]
        {
            Err(unsupported())
        }
    }

    /// Places the password on the clipboard; it remains there while this
    /// session is open.
    pub fn copy(&mut self, password: &str) -> Result<()> {
        ensure_not_empty(password, "copy")?;

        #[cfg(feature = "clipboard")]
        {
            self.inner
                .set_text(password.to_string())
                .map_err(|e| OutputError::Clipboard(e.to_string()))?;
            log::info!("Password copied to clipboard");
            Ok(())
        }

        #[cfg(not(feature = "clipboard"))]
        {
            Err(unsupported())
        }
    }

    /// Copies the password and, on Linux, blocks until `hold` has elapsed or
    /// another application takes over the clipboard.
    pub fn copy_and_hold(&mut self, password: &str, hold: Duration) -> Result<()> {
        ensure_not_empty(password, "copy")?;

        #[cfg(all(feature = "clipboard", target_os = "linux"))]
        {
            if !hold.is_zero() {
                use arboard::SetExtLinux;

                self.inner
                    .set()
                    .wait_until(std::time::Instant::now() + hold)
                    .text(password.to_string())
                    .map_err(|e| OutputError::Clipboard(e.to_string()))?;
                log::info!("Password copied to clipboard, held for {:?}", hold);
                return Ok(());
            }
        }

        #[cfg(not(all(feature = "clipboard", target_os = "linux")))]
        let _ = hold;

        self.copy(password)
    }
}

/// One-shot copy for a process that exits right afterwards.
pub fn copy_to_clipboard(password: &str, hold: Duration) -> Result<()> {
    ensure_not_empty(password, "copy")?;
    ClipboardSession::open()?.copy_and_hold(password, hold)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_password_is_not_copied() {
        let err = copy_to_clipboard("", Duration::from_secs(10)).unwrap_err();
        assert!(matches!(err, OutputError::EmptyPassword("copy")));
    }
}
