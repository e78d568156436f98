use crate::minimax::transposition_table::DEFAULT_CAPACITY;

/// Configuration of a [`MinimaxSearch`](crate::minimax::MinimaxSearch).
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MinimaxConfig {
    /// Depth cap. `None` searches until the result is exact; with
    /// `iterative_deepening` off that is a single unbounded-depth run.
    pub depth_limit: Option<u8>,
    /// Prune with alpha-beta windows. Off: plain minimax.
    pub alpha_beta: bool,
    pub use_transposition_table: bool,
    /// Table slots; one entry per slot.
    pub table_capacity: usize,
    /// Widen the depth limit from zero until the result is exact.
    pub iterative_deepening: bool,
    /// Print per-iteration driver progress.
    pub debug: bool,
}

impl Default for MinimaxConfig {
    fn default() -> Self {
        Self {
            depth_limit: None,
            alpha_beta: true,
            use_transposition_table: true,
            table_capacity: DEFAULT_CAPACITY,
            iterative_deepening: true,
            debug: false,
        }
    }
}
