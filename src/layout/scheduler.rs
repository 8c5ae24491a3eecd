use serde::{Deserialize, Serialize};

/// Identifier of one requested frame callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FrameHandle(pub u64);

/// Host primitive that runs work before the next paint.
///
/// The host calls back into [`super::ContainerFitController::on_frame`] with
/// the returned handle once the frame fires. Cancelling a handle that
/// already fired must be a no-op.
pub trait FrameScheduler {
    fn request_frame(&mut self) -> FrameHandle;
    fn cancel_frame(&mut self, handle: FrameHandle);
}

/// Scheduler for headless hosts: frames fire only when drained.
#[derive(Debug, Default)]
pub struct ManualFrameScheduler {
    next_id: u64,
    queued: Vec<FrameHandle>,
    cancelled_count: usize,
}

impl ManualFrameScheduler {
    /// Takes every frame still queued, in request order.
    pub fn drain(&mut self) -> Vec<FrameHandle> {
        std::mem::take(&mut self.queued)
    }

    #[must_use]
    pub fn queued_len(&self) -> usize {
        self.queued.len()
    }

    #[must_use]
    pub fn cancelled_count(&self) -> usize {
        self.cancelled_count
    }
}

impl FrameScheduler for ManualFrameScheduler {
    fn request_frame(&mut self) -> FrameHandle {
        self.next_id += 1;
        let handle = FrameHandle(self.next_id);
        self.queued.push(handle);
        handle
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        if let Some(index) = self.queued.iter().position(|queued| *queued == handle) {
            self.queued.remove(index);
            self.cancelled_count += 1;
        }
    }
}
