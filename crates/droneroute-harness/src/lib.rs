pub mod logging;
pub mod options;
