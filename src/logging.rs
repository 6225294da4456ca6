//! Log output
//!
//! Native builds send `log` records to stderr through fern. On WASM no
//! logger is installed and the macros compile to nothing observable.

#[cfg(not(target_arch = "wasm32"))]
pub fn init() {
    let level = if cfg!(debug_assertions) {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    let result = fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!("[{} {}] {}", record.level(), record.target(), message))
        })
        .level(level)
        // macroquad's GL backend is chatty at debug level
        .level_for("miniquad", log::LevelFilter::Warn)
        .chain(std::io::stderr())
        .apply();

    if let Err(e) = result {
        eprintln!("Logging already initialized: {}", e);
    }
}

#[cfg(target_arch = "wasm32")]
pub fn init() {}
