use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use crate::structs::sweep_item_result::SweepItemResult;

/// Ordered results of one sweep, one item per attempted combination.
///
/// Built up by the executor and handed back complete; callers only read it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SweepResult {
    pub id: Uuid,
    pub started_at: DateTime<Utc>,
    pub finished_at: Option<DateTime<Utc>>,
    /// Set when the sweep stopped early on a cancellation request.
    pub cancelled: bool,
    items: Vec<SweepItemResult>,
}

impl SweepResult {
    pub(crate) fn begin(expected: usize) -> Self {
        Self {
            id: Uuid::new_v4(),
            started_at: Utc::now(),
            finished_at: None,
            cancelled: false,
            items: Vec::with_capacity(expected),
        }
    }

    pub(crate) fn push(&mut self, item: SweepItemResult) {
        self.items.push(item);
    }

    pub(crate) fn finish(mut self, cancelled: bool) -> Self {
        self.cancelled = cancelled;
        self.finished_at = Some(Utc::now());
        self
    }

    pub fn items(&self) -> &[SweepItemResult] {
        &self.items
    }

    pub fn into_items(self) -> Vec<SweepItemResult> {
        self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SweepItemResult> {
        self.items.iter()
    }

    pub fn responses(&self) -> impl Iterator<Item = &SweepItemResult> {
        self.items.iter().filter(|item| item.is_success())
    }

    pub fn errors(&self) -> impl Iterator<Item = &SweepItemResult> {
        self.items.iter().filter(|item| !item.is_success())
    }

    pub fn success_count(&self) -> usize {
        self.responses().count()
    }

    pub fn failure_count(&self) -> usize {
        self.errors().count()
    }

    pub fn elapsed_secs(&self) -> Option<f64> {
        self.finished_at
            .map(|end| (end - self.started_at).num_milliseconds() as f64 / 1000.0)
    }
}

impl<'a> IntoIterator for &'a SweepResult {
    type Item = &'a SweepItemResult;
    type IntoIter = std::slice::Iter<'a, SweepItemResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
