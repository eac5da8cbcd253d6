pub mod config;
pub mod emitter;
pub mod loader;
pub mod template;
pub mod utils;
pub mod writer;
