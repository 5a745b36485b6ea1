use crate::store::StoreMessage;
use std::time::Duration;

/// The status line and a counter bumped on every change
///
/// A clear timer remembers the generation it was started for, so it only
/// removes the message it was meant for, even if an equal message replaced it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusBoard {
    message: Option<StoreMessage>,
    generation: u64,
}

impl StatusBoard {
    pub fn message(&self) -> Option<&StoreMessage> {
        self.message.as_ref()
    }

    /// Show `next`; returns the generation to expire if it is transient
    pub fn show(&mut self, next: StoreMessage) -> Option<u64> {
        self.generation += 1;
        let transient = next.is_transient();
        self.message = Some(next);
        transient.then_some(self.generation)
    }

    /// Clear the message if it is still the one shown as `generation`
    pub fn expire(&mut self, generation: u64) -> bool {
        if self.generation != generation || self.message.is_none() {
            return false;
        }
        self.message = None;
        true
    }
}

/// Shared handle to a [`StatusBoard`] (a UI signal, or a mutex in tests)
pub trait StatusLine {
    fn update<R>(&mut self, f: impl FnOnce(&mut StatusBoard) -> R) -> R;
}

/// Show `next` on `line`; returns the generation to expire if it is transient
pub fn show<S: StatusLine>(line: &mut S, next: StoreMessage) -> Option<u64> {
    line.update(|board| board.show(next))
}

/// Wait out `ttl`, then clear the message shown as `generation` if nothing replaced it
pub async fn clear_after<S: StatusLine>(mut line: S, generation: u64, ttl: Duration) {
    tokio::time::sleep(ttl).await;
    line.update(|board| board.expire(generation));
}
