//! Error types for the sdlpp crate

use std::ffi::{CStr, CString};
use std::os::raw::c_int;

use thiserror::Error;

/// Result type alias for sdlpp operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for sdlpp operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// SDL reported a failure; carries the text of `SDL_GetError`
    #[error("SDL error: {0}")]
    Sdl(String),

    /// Invalid argument passed to a function
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// SDL returned a NULL handle without setting an error message
    #[error("SDL returned a null {0}")]
    NullHandle(&'static str),

    /// SDL returned an enumeration value this crate does not know
    #[error("Unknown {kind} value: {value}")]
    UnknownValue { kind: &'static str, value: i64 },
}

impl Error {
    /// Build an error from the library's last error message
    pub fn last() -> Self {
        Error::Sdl(get_error().unwrap_or_else(|| "unknown error".to_string()))
    }

    /// Build the error for a constructor that got NULL back
    pub(crate) fn null(what: &'static str) -> Self {
        match get_error() {
            Some(message) => Error::Sdl(message),
            None => Error::NullHandle(what),
        }
    }
}

/// Run a native constructor, turning a NULL result into an error
///
/// The error message is cleared first, so a NULL returned without a new
/// message becomes `NullHandle` instead of repeating an older failure.
pub(crate) fn create<T>(what: &'static str, f: impl FnOnce() -> *mut T) -> Result<*mut T> {
    clear_error();
    let ptr = f();
    if ptr.is_null() {
        Err(Error::null(what))
    } else {
        Ok(ptr)
    }
}

/// Check a native return code and convert to Result
///
/// SDL reports failure with a negative return value.
pub fn check(code: c_int) -> Result<()> {
    if code < 0 {
        Err(Error::last())
    } else {
        Ok(())
    }
}

/// Convert a Rust string to a C string, rejecting interior NULs
pub(crate) fn to_cstring(value: &str) -> Result<CString> {
    CString::new(value).map_err(|_| Error::InvalidArgument(format!("interior NUL in {:?}", value)))
}

/// Convert a length to the `int` count the C API expects
pub(crate) fn to_count(len: usize) -> Result<c_int> {
    c_int::try_from(len).map_err(|_| Error::InvalidArgument(format!("count {} exceeds int range", len)))
}

/// Copy a C string owned by SDL into a Rust string
pub(crate) fn from_cstr(ptr: *const std::os::raw::c_char) -> Option<String> {
    if ptr.is_null() {
        None
    } else {
        Some(unsafe { CStr::from_ptr(ptr).to_string_lossy().into_owned() })
    }
}

/// Get the last error message that was set
///
/// SDL API functions may set an error message and then succeed, so the
/// message is only meaningful right after a failing call. Returns `None`
/// when no message is set.
pub fn get_error() -> Option<String> {
    let message = from_cstr(unsafe { sdlpp_sys::SDL_GetError() })?;
    if message.is_empty() {
        None
    } else {
        Some(message)
    }
}

/// Set the error message for the current thread
pub fn set_error(message: &str) -> Result<()> {
    let c_message = to_cstring(message)?;
    // Always goes through "%s" so the message is never treated as a format string
    unsafe { sdlpp_sys::SDL_SetError(b"%s\0".as_ptr().cast(), c_message.as_ptr()) };
    Ok(())
}

/// Clear the error message for the current thread
pub fn clear_error() {
    unsafe { sdlpp_sys::SDL_ClearError() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_clear_error() {
        set_error("widget exploded: 100%").unwrap();
        assert_eq!(get_error().as_deref(), Some("widget exploded: 100%"));

        clear_error();
        assert_eq!(get_error(), None);
    }

    #[test]
    fn test_check_maps_negative_codes() {
        assert!(check(0).is_ok());
        assert!(check(3).is_ok());

        set_error("bad thing").unwrap();
        assert_eq!(check(-1), Err(Error::Sdl("bad thing".into())));
    }

    #[test]
    fn test_null_without_message() {
        clear_error();
        assert_eq!(Error::null("window"), Error::NullHandle("window"));
    }

    #[test]
    fn test_create_ignores_stale_message() {
        set_error("earlier failure").unwrap();
        let result = create("texture", std::ptr::null_mut::<u8>);
        assert_eq!(result, Err(Error::NullHandle("texture")));

        let mut value = 7u8;
        let ptr: *mut u8 = &mut value;
        assert_eq!(create("texture", || ptr), Ok(ptr));
    }

    #[test]
    fn test_interior_nul_is_rejected() {
        assert!(matches!(to_cstring("a\0b"), Err(Error::InvalidArgument(_))));
        assert!(set_error("nul\0inside").is_err());
    }
}
