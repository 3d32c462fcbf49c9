//! Delayed deliveries for simulated replies.
//!
//! Each scheduled item carries its own deadline. The owning loop awaits
//! [`PendingQueue::next_due`] inside `tokio::select!`; items are never
//! cancelled, and equal deadlines come out in scheduling order.

use std::time::Duration;

use tokio::time::{Instant, sleep_until};

pub struct PendingQueue<T> {
    items: Vec<(Instant, u64, T)>,
    seq: u64,
}

impl<T> Default for PendingQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> PendingQueue<T> {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            seq: 0,
        }
    }

    /// Queue `item` for delivery `delay` from now.
    pub fn schedule(&mut self, delay: Duration, item: T) {
        self.items.push((Instant::now() + delay, self.seq, item));
        self.seq += 1;
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Wait for the earliest deadline and pop that item.
    ///
    /// Returns `None` at once when nothing is queued. Cancel-safe: dropping
    /// the future before it completes leaves the queue unchanged.
    pub async fn next_due(&mut self) -> Option<T> {
        let (idx, deadline) = self
            .items
            .iter()
            .enumerate()
            .min_by_key(|(_, (deadline, seq, _))| (*deadline, *seq))
            .map(|(i, (deadline, _, _))| (i, *deadline))?;
        sleep_until(deadline).await;
        Some(self.items.remove(idx).2)
    }

    /// Wait for every queued item, in delivery order.
    pub async fn drain(&mut self) -> Vec<T> {
        let mut out = Vec::with_capacity(self.items.len());
        while let Some(item) = self.next_due().await {
            out.push(item);
        }
        out
    }
}
