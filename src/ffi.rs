//! FFI bindings for WBGT Analytics
//!
//! This module provides C-compatible functions for calling the analytics
//! engine from other languages. All functions use C strings
//! (null-terminated) and return allocated memory that must be freed by the
//! caller using `wbgt_free_string`.

use std::cell::RefCell;
use std::ffi::{CStr, CString};
use std::os::raw::c_char;
use std::ptr;

use crate::pipeline::{comparison_report, forecast_report};

// Thread-local storage for the last error message
thread_local! {
    static LAST_ERROR: RefCell<Option<CString>> = const { RefCell::new(None) };
}

/// Set the last error message
fn set_last_error(msg: &str) {
    LAST_ERROR.with(|e| {
        *e.borrow_mut() = CString::new(msg).ok();
    });
}

/// Clear the last error message
fn clear_last_error() {
    LAST_ERROR.with(|e| {
        *e.borrow_mut() = None;
    });
}

/// Helper to convert C string to Rust string
unsafe fn cstr_to_string(ptr: *const c_char) -> Option<String> {
    if ptr.is_null() {
        return None;
    }
    CStr::from_ptr(ptr).to_str().ok().map(|s| s.to_string())
}

/// Helper to convert Rust string to C string (caller must free)
fn string_to_cstr(s: &str) -> *mut c_char {
    match CString::new(s) {
        Ok(cstr) => cstr.into_raw(),
        Err(_) => ptr::null_mut(),
    }
}

/// Produce a forecast analytics report from raw feed JSON.
///
/// # Safety
/// - `json` must be a valid null-terminated C string.
/// - Returns a newly allocated string that must be freed with
///   `wbgt_free_string`.
/// - Returns NULL on error; call `wbgt_last_error` for the message.
#[no_mangle]
pub unsafe extern "C" fn wbgt_forecast_report(json: *const c_char) -> *mut c_char {
    clear_last_error();

    let json_str = match cstr_to_string(json) {
        Some(s) => s,
        None => {
            set_last_error("Invalid JSON string pointer");
            return ptr::null_mut();
        }
    };

    match forecast_report(&json_str) {
        Ok(report) => string_to_cstr(&report),
        Err(e) => {
            set_last_error(&e.to_string());
            ptr::null_mut()
        }
    }
}

/// Produce a two-day comparison report from two raw feed JSON payloads.
///
/// # Safety
/// - `day_a_json` and `day_b_json` must be valid null-terminated C strings.
/// - Returns a newly allocated string that must be freed with
///   `wbgt_free_string`.
/// - Returns NULL on error; call `wbgt_last_error` for the message.
#[no_mangle]
pub unsafe extern "C" fn wbgt_comparison_report(
    day_a_json: *const c_char,
    day_b_json: *const c_char,
) -> *mut c_char {
    clear_last_error();

    let day_a = match cstr_to_string(day_a_json) {
        Some(s) => s,
        None => {
            set_last_error("Invalid day A JSON string pointer");
            return ptr::null_mut();
        }
    };

    let day_b = match cstr_to_string(day_b_json) {
        Some(s) => s,
        None => {
            set_last_error("Invalid day B JSON string pointer");
            return ptr::null_mut();
        }
    };

    match comparison_report(&day_a, &day_b) {
        Ok(report) => string_to_cstr(&report),
        Err(e) => {
            set_last_error(&e.to_string());
            ptr::null_mut()
        }
    }
}

/// Get the last error message, or NULL if the last call succeeded.
///
/// # Safety
/// The returned pointer is owned by the library and valid until the next
/// analytics call on this thread; do not free it.
#[no_mangle]
pub unsafe extern "C" fn wbgt_last_error() -> *const c_char {
    LAST_ERROR.with(|e| match &*e.borrow() {
        Some(msg) => msg.as_ptr(),
        None => ptr::null(),
    })
}

/// Free a string returned by this library.
///
/// # Safety
/// `ptr` must be a pointer previously returned by a `wbgt_*` function, or
/// NULL (a no-op).
#[no_mangle]
pub unsafe extern "C" fn wbgt_free_string(ptr: *mut c_char) {
    if !ptr.is_null() {
        drop(CString::from_raw(ptr));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_feed() -> CString {
        CString::new(
            r#"{"data": [
                {"timestamp": "2024-07-06T08:00:00Z", "temperature": 20.0,
                 "humidity": 60.0, "dew_point": 14.0, "wind_speed_ms": 3.0,
                 "solar_radiation": 400.0, "cloud_cover": 20.0, "uv_index": 3.0,
                 "wbgt": 19.0, "esi": 18.0, "apparent_temp": 21.0, "rain_chance": 10.0},
                {"timestamp": "2024-07-06T09:00:00Z", "temperature": 22.0,
                 "humidity": 60.0, "dew_point": 14.0, "wind_speed_ms": 3.0,
                 "solar_radiation": 500.0, "cloud_cover": 20.0, "uv_index": 4.0,
                 "wbgt": 21.0, "esi": 20.0, "apparent_temp": 23.0, "rain_chance": 10.0}
            ]}"#,
        )
        .unwrap()
    }

    #[test]
    fn test_forecast_report_roundtrip() {
        let feed = sample_feed();
        let out = unsafe { wbgt_forecast_report(feed.as_ptr()) };
        assert!(!out.is_null());

        let json = unsafe { CStr::from_ptr(out) }.to_str().unwrap();
        let value: serde_json::Value = serde_json::from_str(json).unwrap();
        assert_eq!(value["producer"]["name"], "wbgt-analytics");

        unsafe { wbgt_free_string(out) };
    }

    #[test]
    fn test_error_path_sets_last_error() {
        let bad = CString::new("not valid json").unwrap();
        let out = unsafe { wbgt_forecast_report(bad.as_ptr()) };
        assert!(out.is_null());

        let err = unsafe { wbgt_last_error() };
        assert!(!err.is_null());
        let msg = unsafe { CStr::from_ptr(err) }.to_str().unwrap();
        assert!(msg.contains("JSON"));
    }

    #[test]
    fn test_null_pointer_is_rejected() {
        let out = unsafe { wbgt_forecast_report(ptr::null()) };
        assert!(out.is_null());
    }

    #[test]
    fn test_comparison_roundtrip() {
        let feed = sample_feed();
        let out = unsafe { wbgt_comparison_report(feed.as_ptr(), feed.as_ptr()) };
        assert!(!out.is_null());

        let json = unsafe { CStr::from_ptr(out) }.to_str().unwrap();
        let value: serde_json::Value = serde_json::from_str(json).unwrap();
        assert_eq!(value["comparison"]["preferred"], "equal");

        unsafe { wbgt_free_string(out) };
    }
}
