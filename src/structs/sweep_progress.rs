use crate::structs::sweep_item_result::SweepItemResult;

/// Notification sent after each item is appended to a running sweep.
#[derive(Debug, Clone)]
pub struct SweepProgress {
    /// Zero-based position of `item` in the final result.
    pub index: usize,
    pub total: usize,
    pub item: SweepItemResult,
}

impl SweepProgress {
    pub fn is_last(&self) -> bool {
        self.index + 1 == self.total
    }
}
