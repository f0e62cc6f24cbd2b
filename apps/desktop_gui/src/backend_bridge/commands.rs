//! Backend commands queued from UI to backend worker.

use shared::domain::UserId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendCommand {
    FetchUsers,
    FetchPosts { user_id: UserId, seq: u64 },
}
