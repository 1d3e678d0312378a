//! Observability for `phishdrill`.

pub mod logging;

pub use logging::{LogFormat, init_logging};
