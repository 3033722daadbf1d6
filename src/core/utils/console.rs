//! Browser console logging
//!
//! On wasm32 these forward to `console.log` / `console.warn` through web-sys.
//! Native builds (tests, benches) have no console to talk to, so the macros
//! compile the message but never format it.

/// `console.log` with `format!` syntax.
#[macro_export]
macro_rules! console_log {
    ($($arg:tt)*) => {{
        #[cfg(target_arch = "wasm32")]
        {
            web_sys::console::log_1(&format!($($arg)*).into());
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = || format!($($arg)*);
        }
    }};
}

/// `console.warn` with `format!` syntax.
#[macro_export]
macro_rules! console_warn {
    ($($arg:tt)*) => {{
        #[cfg(target_arch = "wasm32")]
        {
            web_sys::console::warn_1(&format!($($arg)*).into());
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = || format!($($arg)*);
        }
    }};
}
