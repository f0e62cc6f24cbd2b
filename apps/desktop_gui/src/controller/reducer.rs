//! Reducer-style screen state: one record per concern, one update entry
//! point per concern, drained backend events folded in between frames.

use shared::domain::{Post, User, UserId};
use tracing::debug;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;

/// Lifecycle of one fetched section. Render priority is
/// loading > failed > ready; contradictory states (loading and failed at
/// once) are unrepresentable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchPhase<T> {
    Loading,
    Failed(String),
    Ready(T),
}

impl<T> FetchPhase<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, FetchPhase::Loading)
    }
}

/// The full user collection, fetched once at startup and never re-triggered
/// by later state changes.
#[derive(Debug)]
pub struct UserDirectory {
    pub phase: FetchPhase<Vec<User>>,
}

impl UserDirectory {
    fn new() -> Self {
        Self {
            phase: FetchPhase::Loading,
        }
    }

    pub fn users(&self) -> &[User] {
        match &self.phase {
            FetchPhase::Ready(users) => users,
            _ => &[],
        }
    }

    /// Case-insensitive substring match on name or email. An empty term
    /// matches everything; fetch order is preserved.
    pub fn filtered(&self, term: &str) -> Vec<&User> {
        let needle = term.to_lowercase();
        self.users()
            .iter()
            .filter(|user| {
                needle.is_empty()
                    || user.name.to_lowercase().contains(&needle)
                    || user.email.to_lowercase().contains(&needle)
            })
            .collect()
    }

    pub fn user_name(&self, user_id: UserId) -> Option<&str> {
        self.users()
            .iter()
            .find(|user| user.id == user_id)
            .map(|user| user.name.as_str())
    }
}

/// Posts for the currently selected user. `phase` is `None` while nothing is
/// selected. `seq` identifies the most recently issued fetch; completions
/// carrying any other value are stale and must not be applied.
#[derive(Debug)]
pub struct PostsQuery {
    phase: Option<FetchPhase<Vec<Post>>>,
    seq: u64,
}

impl PostsQuery {
    fn new() -> Self {
        Self {
            phase: None,
            seq: 0,
        }
    }

    pub fn phase(&self) -> Option<&FetchPhase<Vec<Post>>> {
        self.phase.as_ref()
    }

    pub fn posts(&self) -> &[Post] {
        match &self.phase {
            Some(FetchPhase::Ready(posts)) => posts,
            _ => &[],
        }
    }

    pub fn is_loading(&self) -> bool {
        self.phase.as_ref().is_some_and(FetchPhase::is_loading)
    }

    fn begin(&mut self) -> u64 {
        self.seq += 1;
        self.phase = Some(FetchPhase::Loading);
        self.seq
    }

    fn clear(&mut self) {
        // Bumping the sequence here fences out any fetch still in flight.
        self.seq += 1;
        self.phase = None;
    }

    fn accepts(&self, seq: u64) -> bool {
        self.phase.is_some() && seq == self.seq
    }
}

/// Which user is selected and what the search box holds. Both are cleared
/// together by [`AppState::reset`].
#[derive(Debug, Default)]
pub struct Selection {
    pub selected: Option<UserId>,
    pub search_term: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DirectoryStats {
    pub total_users: usize,
    pub filtered_users: usize,
    pub selected_posts: usize,
    pub selection_active: bool,
}

pub struct AppState {
    pub directory: UserDirectory,
    pub posts: PostsQuery,
    pub selection: Selection,
    /// Most recent fetch failure, whichever operation it came from. Last
    /// write wins; there is no error history.
    pub last_error: Option<String>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            directory: UserDirectory::new(),
            posts: PostsQuery::new(),
            selection: Selection::default(),
            last_error: None,
        }
    }

    /// Folds one backend completion into the state. The single entry point
    /// for everything the worker reports back.
    pub fn apply(&mut self, event: UiEvent) {
        match event {
            UiEvent::Info(_) => {}
            UiEvent::UsersLoaded(users) => {
                self.directory.phase = FetchPhase::Ready(users);
                self.last_error = None;
            }
            UiEvent::UsersFailed(message) => {
                self.directory.phase = FetchPhase::Failed(message.clone());
                self.last_error = Some(message);
            }
            UiEvent::PostsLoaded { user_id, seq, posts } => {
                if self.posts.accepts(seq) {
                    self.posts.phase = Some(FetchPhase::Ready(posts));
                } else {
                    debug!(user_id = user_id.0, seq, "discarding stale posts response");
                }
            }
            UiEvent::PostsFailed { user_id, seq, message } => {
                if self.posts.accepts(seq) {
                    self.posts.phase = Some(FetchPhase::Failed(message.clone()));
                    self.last_error = Some(message);
                } else {
                    debug!(user_id = user_id.0, seq, "discarding stale posts failure");
                }
            }
        }
    }

    /// Selects a user and returns the dependent fetch to queue. Re-selecting
    /// the already-selected user is a no-op; only a transition to a new
    /// value triggers a fetch.
    pub fn select_user(&mut self, user_id: UserId) -> Option<BackendCommand> {
        if self.selection.selected == Some(user_id) {
            return None;
        }

        self.selection.selected = Some(user_id);
        self.last_error = None;
        let seq = self.posts.begin();
        Some(BackendCommand::FetchPosts { user_id, seq })
    }

    /// Clears selection, posts, and search term in one transition.
    pub fn reset(&mut self) {
        self.selection.selected = None;
        self.selection.search_term.clear();
        self.posts.clear();
    }

    pub fn stats(&self) -> DirectoryStats {
        DirectoryStats {
            total_users: self.directory.users().len(),
            filtered_users: self.directory.filtered(&self.selection.search_term).len(),
            selected_posts: self.posts.posts().len(),
            selection_active: self.selection.selected.is_some(),
        }
    }
}
