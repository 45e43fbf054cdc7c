use tokio::sync::mpsc::UnboundedSender;
use crate::structs::sweep_item_result::SweepItemResult;
use crate::structs::sweep_progress::SweepProgress;

/// Receives each sweep item right after it is appended to the result.
pub trait SweepObserver: Send + Sync {
    fn on_item(&self, index: usize, total: usize, item: &SweepItemResult);
}

impl<F> SweepObserver for F
where
    F: Fn(usize, usize, &SweepItemResult) + Send + Sync,
{
    fn on_item(&self, index: usize, total: usize, item: &SweepItemResult) {
        self(index, total, item)
    }
}

pub struct NoopObserver;

impl SweepObserver for NoopObserver {
    fn on_item(&self, _index: usize, _total: usize, _item: &SweepItemResult) {}
}

/// Forwards progress over a channel so another task can render it.
pub struct ChannelObserver {
    sender: UnboundedSender<SweepProgress>,
}

impl ChannelObserver {
    pub fn new(sender: UnboundedSender<SweepProgress>) -> Self {
        Self { sender }
    }
}

impl SweepObserver for ChannelObserver {
    fn on_item(&self, index: usize, total: usize, item: &SweepItemResult) {
        let progress = SweepProgress {
            index,
            total,
            item: item.clone(),
        };

        // A dropped receiver only means nobody is watching any more.
        if self.sender.send(progress).is_err() {
            log::debug!("Progress receiver dropped; item {} not forwarded", index);
        }
    }
}
