//! UI/backend events and error labeling for the desktop controller.

use shared::domain::{Post, User, UserId};

/// Events posted by the backend worker and drained by the UI each frame.
/// Post completions carry the request sequence they were issued with so the
/// reducer can discard responses that a later selection already superseded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    Info(String),
    UsersLoaded(Vec<User>),
    UsersFailed(String),
    PostsLoaded {
        user_id: UserId,
        seq: u64,
        posts: Vec<Post>,
    },
    PostsFailed {
        user_id: UserId,
        seq: u64,
        message: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchContext {
    Users,
    Posts,
}

/// User-visible failure label. Network failures, HTTP error statuses, and
/// malformed payloads all collapse into this one format.
pub fn fetch_failure_label(context: FetchContext, message: &str) -> String {
    match context {
        FetchContext::Users => format!("Gagal memuat data users: {message}"),
        FetchContext::Posts => format!("Gagal memuat data posts: {message}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_distinguish_the_failing_operation() {
        assert_eq!(
            fetch_failure_label(FetchContext::Users, "server returned 500"),
            "Gagal memuat data users: server returned 500"
        );
        assert_eq!(
            fetch_failure_label(FetchContext::Posts, "request failed: timeout"),
            "Gagal memuat data posts: request failed: timeout"
        );
    }
}
