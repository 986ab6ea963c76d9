mod algorithm;
mod error;
mod point;
mod route;
mod sink;

pub use algorithm::Algorithm;
pub use error::{Result, SolveError};
pub use point::Point;
pub use route::{is_complete_route, route_length, Route};
pub use sink::{FrameSink, NullSink};
