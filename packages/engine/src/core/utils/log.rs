//! Console logging
//!
//! On wasm32 messages go straight to the browser console through `web_sys`.
//! Native builds (unit tests, integration tests) format the arguments and drop them.
//!
//! Usage:
//! ```rust
//! use pangrid_engine::console_log;
//!
//! let placed = 3;
//! console_log!("placed {} rectangles", placed);
//! ```

/// Log an informational line to the browser console.
#[macro_export]
macro_rules! console_log {
    ($($arg:tt)*) => {{
        #[cfg(target_arch = "wasm32")]
        {
            ::web_sys::console::log_1(&format!($($arg)*).into());
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = format_args!($($arg)*);
        }
    }};
}

/// Log a warning to the browser console.
#[macro_export]
macro_rules! console_warn {
    ($($arg:tt)*) => {{
        #[cfg(target_arch = "wasm32")]
        {
            ::web_sys::console::warn_1(&format!($($arg)*).into());
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = format_args!($($arg)*);
        }
    }};
}
