use async_trait::async_trait;
use linkace_core::archive::Result;
use linkace_core::{ArchiveError, ArchiveJob, ArchiveSubmitter};
use tokio::sync::mpsc;
use tracing::trace;

/// An [`ArchiveSubmitter`] that pushes jobs onto a bounded channel.
///
/// The receiving half, [`ArchiveQueue`], belongs to whatever worker performs
/// the actual archiving. When the queue is full, submission waits for room.
#[derive(Debug, Clone)]
pub struct ChannelSubmitter {
    sender: mpsc::Sender<ArchiveJob>,
}

/// Receiving half of a [`ChannelSubmitter`].
#[derive(Debug)]
pub struct ArchiveQueue {
    receiver: mpsc::Receiver<ArchiveJob>,
}

impl ChannelSubmitter {
    /// Creates a submitter and its queue holding at most `capacity` pending jobs.
    pub fn new(capacity: usize) -> (Self, ArchiveQueue) {
        let (sender, receiver) = mpsc::channel(capacity);
        (Self { sender }, ArchiveQueue { receiver })
    }
}

#[async_trait]
impl ArchiveSubmitter for ChannelSubmitter {
    async fn submit(&self, job: ArchiveJob) -> Result<()> {
        trace!(link_id = %job.link_id, "enqueueing archive job");
        self.sender
            .send(job)
            .await
            .map_err(|_| ArchiveError::QueueClosed)
    }
}

impl ArchiveQueue {
    /// Waits for the next job. Returns `None` once every submitter is dropped
    /// and the queue is drained.
    pub async fn recv(&mut self) -> Option<ArchiveJob> {
        self.receiver.recv().await
    }

    /// Takes the next job if one is ready.
    pub fn try_recv(&mut self) -> Option<ArchiveJob> {
        self.receiver.try_recv().ok()
    }

    pub fn close(&mut self) {
        self.receiver.close();
    }
}
