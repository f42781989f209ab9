//! Console logging
//!
//! In the browser messages go to the devtools console; native builds
//! (tests, benches) print to stderr instead.

pub fn info(msg: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::console::log_1(&msg.into());
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        eprintln!("[info] {msg}");
    }
}

pub fn warn(msg: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::console::warn_1(&msg.into());
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        eprintln!("[warn] {msg}");
    }
}
