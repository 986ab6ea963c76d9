/// Consumer of intermediate route frames during an animated solve.
///
/// Solvers call [`FrameSink::emit`] at each suspension point. A `false`
/// return means the consumer detached; the solver must abandon the search
/// and return without emitting further frames.
pub trait FrameSink {
    fn emit(&mut self, route: &[usize]) -> bool;
}

/// Sink for synchronous solves: discards frames, never cancels.
pub struct NullSink;

impl FrameSink for NullSink {
    #[inline]
    fn emit(&mut self, _route: &[usize]) -> bool {
        true
    }
}
