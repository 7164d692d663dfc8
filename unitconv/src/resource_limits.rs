/// Optional limits a transport layer can place on the engine
///
/// The engine itself is unbounded; these exist so a server can refuse oversized
/// batches before doing any work.
#[derive(Debug, Clone, Default)]
pub struct ResourceLimits {
    /// Maximum number of values in one batch conversion.
    /// `None` means no limit.
    pub max_batch_values: Option<usize>,
}

impl ResourceLimits {
    /// Create a new ResourceLimits with default values
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_batch_values(mut self, max: usize) -> Self {
        self.max_batch_values = Some(max);
        self
    }
}
