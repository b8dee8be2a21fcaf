// terminal.rs - Cursor visibility and console setup

use std::io::Write;

use tracing::warn;

use crate::error::Result;
use crate::render::{HIDE_CURSOR, SHOW_CURSOR};

/// Hides the cursor for as long as it is alive.
///
/// The cursor is shown again when the guard drops, which also happens while
/// unwinding from a panic or returning early with an error.
pub struct CursorGuard<W: Write> {
    out: W,
}

impl<W: Write> CursorGuard<W> {
    pub fn hide(mut out: W) -> Result<Self> {
        out.write_all(HIDE_CURSOR.as_bytes())?;
        out.flush()?;
        Ok(Self { out })
    }
}

impl<W: Write> Drop for CursorGuard<W> {
    fn drop(&mut self) {
        let restored = self
            .out
            .write_all(SHOW_CURSOR.as_bytes())
            .and_then(|()| self.out.flush());
        if let Err(err) = restored {
            warn!(%err, "could not make cursor visible again");
        }
    }
}

/// Turns on escape-sequence handling for the Windows console.
#[cfg(target_os = "windows")]
pub fn enable_ansi() -> Result<()> {
    use std::io;
    use winapi::shared::minwindef::DWORD;
    use winapi::um::consoleapi::{GetConsoleMode, SetConsoleMode};
    use winapi::um::handleapi::INVALID_HANDLE_VALUE;
    use winapi::um::processenv::GetStdHandle;
    use winapi::um::winbase::STD_OUTPUT_HANDLE;
    use winapi::um::wincon::ENABLE_VIRTUAL_TERMINAL_PROCESSING;

    // SAFETY: the handle comes straight from GetStdHandle and `mode` outlives
    // both console calls.
    unsafe {
        let handle = GetStdHandle(STD_OUTPUT_HANDLE);
        if handle.is_null() || handle == INVALID_HANDLE_VALUE {
            return Err(io::Error::last_os_error().into());
        }
        let mut mode: DWORD = 0;
        if GetConsoleMode(handle, &mut mode) == 0 {
            return Err(io::Error::last_os_error().into());
        }
        if SetConsoleMode(handle, mode | ENABLE_VIRTUAL_TERMINAL_PROCESSING) == 0 {
            return Err(io::Error::last_os_error().into());
        }
    }
    Ok(())
}

/// Unix terminals understand the escapes already.
#[cfg(not(target_os = "windows"))]
pub fn enable_ansi() -> Result<()> {
    Ok(())
}
