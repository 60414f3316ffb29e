/// Configuration for [`compile`](crate::compile).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Runs the variable, constraint and objective emitters concurrently on
    /// the rayon pool. When `false` they run in sequence on the calling thread.
    ///
    /// The compiled model is identical either way.
    pub parallel: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self { parallel: true }
    }
}

impl Config {
    /// Returns a config that runs every emitter on the calling thread.
    #[must_use]
    pub fn sequential() -> Self {
        Self { parallel: false }
    }
}
