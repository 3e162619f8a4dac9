// localctx - local prompt context manager
// Library exports

pub mod cli;
pub mod config;
pub mod context;
pub mod errors;
pub mod logging;
pub mod message;
