// C API for embedding the engine. Uses raw pointers and catch_unwind so
// panics never cross the FFI boundary.
use crate::AnalysisEngine;
use libc::c_char;
use std::ffi::{CStr, CString};
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::path::{Path, PathBuf};
use std::ptr;

static mut ANALYSIS_ENGINE: *mut AnalysisEngine = ptr::null_mut();

fn get_cache_path() -> PathBuf {
    let mut path = dirs::data_local_dir()
        .or_else(dirs::home_dir)
        .expect("Could not find a valid home/data directory");
    path.push("english-ipa-transcriber");
    path.push("dictionary.bin");
    path
}

#[no_mangle]
pub extern "C" fn ipa_engine_init() {
    let result = catch_unwind(|| {
        unsafe {
            if !ANALYSIS_ENGINE.is_null() {
                return;
            }
            let cache_path = get_cache_path();
            if let Some(parent) = cache_path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            let engine = AnalysisEngine::from_file_or_new(cache_path.to_str().unwrap_or(""));
            ANALYSIS_ENGINE = Box::into_raw(Box::new(engine));
            eprintln!("[Rust] IPA transcriber engine initialized.");
        }
    });
    if result.is_err() {
        eprintln!("[Rust FATAL] A panic occurred during engine initialization.");
        unsafe { ANALYSIS_ENGINE = ptr::null_mut(); }
    }
}

#[no_mangle]
pub extern "C" fn ipa_engine_destroy() {
    unsafe {
        if ANALYSIS_ENGINE.is_null() {
            return;
        }
        let engine = Box::from_raw(ANALYSIS_ENGINE);
        if let Err(e) = engine.save_dictionary() {
            eprintln!("[Rust ERR] Failed to save dictionary cache: {}", e);
        }
        ANALYSIS_ENGINE = ptr::null_mut();
    }
}

unsafe fn get_engine_mut<'a>() -> Option<&'a mut AnalysisEngine> { ANALYSIS_ENGINE.as_mut() }
unsafe fn get_engine<'a>() -> Option<&'a AnalysisEngine> { ANALYSIS_ENGINE.as_ref() }

/// Analyzes NUL-terminated UTF-8 text and returns a JSON object string
/// (word -> record or "No entry found"). Free with
/// `ipa_engine_free_string`.
#[no_mangle]
pub extern "C" fn ipa_engine_analyze(text: *const c_char) -> *mut c_char {
    let c_str = unsafe { CStr::from_ptr(text) };
    let input = c_str.to_str().unwrap_or("");
    let result = catch_unwind(AssertUnwindSafe(|| {
        unsafe {
            if let Some(engine) = get_engine() {
                let analysis = engine.analyze(input);
                return serde_json::to_string(&analysis).unwrap_or_else(|_| "{}".to_string());
            }
        }
        "{}".to_string()
    }));
    let json_string = result.unwrap_or_else(|_| {
        eprintln!("[Rust FATAL] Panic in analyze.");
        "{}".to_string()
    });
    CString::new(json_string).unwrap().into_raw()
}

/// Merges a cmudict-format text file into the engine's dictionary.
/// Returns the number of entries added, or -1 on failure.
#[no_mangle]
pub extern "C" fn ipa_engine_load_dictionary(path: *const c_char) -> i64 {
    let path_str = unsafe { CStr::from_ptr(path) }.to_str().unwrap_or("");
    if path_str.is_empty() {
        return -1;
    }
    let result = catch_unwind(AssertUnwindSafe(|| {
        unsafe {
            if let Some(engine) = get_engine_mut() {
                return match engine.load_dictionary_file(Path::new(path_str)) {
                    Ok(added) => added as i64,
                    Err(e) => {
                        eprintln!("[Rust ERR] Failed to load '{}': {}", path_str, e);
                        -1
                    }
                };
            }
        }
        -1
    }));
    result.unwrap_or(-1)
}

#[no_mangle]
pub extern "C" fn ipa_engine_free_string(s: *mut c_char) {
    if !s.is_null() { unsafe { let _ = CString::from_raw(s); } }
}
