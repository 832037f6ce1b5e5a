// Library surface for headless/integration tests and reuse.
// Everything here is terminal-free; rendering lives in the binary.
pub mod app_dirs;
pub mod config;
pub mod error;
pub mod format;
pub mod logging;
pub mod runtime;
pub mod session;
pub mod timer;
pub mod words;
