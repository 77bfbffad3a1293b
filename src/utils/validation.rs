//! Centralized validation helpers.

use crate::core::document::{Window, WindowError};

/// Maximum size of a text file the CLI will tokenize (DOS protection)
pub const MAX_INPUT_BYTES: u64 = 16 * 1024 * 1024;

/// Check that `window` lies inside a document of `len` tokens.
///
/// # Examples
///
/// ```
/// use license_scorer::core::document::Window;
/// use license_scorer::utils::validation::validate_window;
///
/// assert!(validate_window(Window { start: 0, end: 5 }, 5).is_ok());
/// assert!(validate_window(Window { start: 0, end: 6 }, 5).is_err());
/// ```
///
/// # Errors
///
/// Returns [`WindowError::Inverted`] if `start > end` and
/// [`WindowError::OutOfBounds`] if `end > len`.
pub fn validate_window(window: Window, len: usize) -> Result<Window, WindowError> {
    let window = Window::new(window.start, window.end)?;
    if window.end > len {
        return Err(WindowError::OutOfBounds {
            end: window.end,
            len,
        });
    }
    Ok(window)
}

/// Build a window from optional CLI bounds, defaulting to the whole document.
///
/// # Errors
///
/// Same as [`validate_window`].
pub fn resolve_window(
    start: Option<usize>,
    end: Option<usize>,
    len: usize,
) -> Result<Window, WindowError> {
    validate_window(
        Window {
            start: start.unwrap_or(0),
            end: end.unwrap_or(len),
        },
        len,
    )
}
