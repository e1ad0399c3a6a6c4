//! Per-controller fetch state and user-visible notices.

use std::borrow::Borrow;

use larder_client::{FallbackReason, Fetched};
use larder_core::{DomainError, Entity};

pub const FALLBACK_MESSAGE: &str = "Could not connect to the server. Showing fallback data instead.";

/// `Idle -> Loading -> {Ready, Failed}`; both end states re-enter `Loading`
/// on refresh.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    Loading,
    Ready,
    /// Holding fallback data.
    Failed,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Success,
    Error,
}

/// One-line message for the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub title: String,
    pub message: String,
}

impl Notice {
    pub fn new(level: NoticeLevel, title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            level,
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn info(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Info, title, message)
    }

    pub fn success(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Success, title, message)
    }

    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Error, title, message)
    }

    /// Shown whenever a view holds fallback data, whatever the cause.
    pub fn fallback() -> Self {
        Self::error("Connection error", FALLBACK_MESSAGE)
    }

    pub fn missing_information() -> Self {
        Self::error("Missing information", "Please fill in all required fields")
    }

    pub fn invalid(err: &DomainError) -> Self {
        match err {
            DomainError::MissingFields(_) => Self::missing_information(),
            other => Self::error("Invalid information", other.to_string()),
        }
    }
}

/// What a controller shows for one collection.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState<T> {
    phase: Phase,
    data: T,
    banner: Option<Notice>,
    reason: Option<FallbackReason>,
}

/// Phase and banner as they were before a refresh began.
pub(crate) struct Checkpoint {
    phase: Phase,
    banner: Option<Notice>,
    reason: Option<FallbackReason>,
}

impl<T: Default> Default for ViewState<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: Entity> ViewState<Vec<T>> {
    /// Locate a row of the current collection by identity.
    pub fn find<Q>(&self, id: &Q) -> Option<&T>
    where
        T::Id: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        self.data.iter().find(|row| Borrow::<Q>::borrow(row.id()) == id)
    }

    /// Drop a row locally. Returns whether anything was removed.
    pub(crate) fn remove<Q>(&mut self, id: &Q) -> bool
    where
        T::Id: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        let before = self.data.len();
        self.data.retain(|row| Borrow::<Q>::borrow(row.id()) != id);
        self.data.len() != before
    }
}

impl<T> ViewState<T> {
    pub fn new(data: T) -> Self {
        Self {
            phase: Phase::Idle,
            data,
            banner: None,
            reason: None,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn data(&self) -> &T {
        &self.data
    }

    /// The fallback notice, present exactly when the phase is `Failed`.
    pub fn banner(&self) -> Option<&Notice> {
        self.banner.as_ref()
    }

    pub fn reason(&self) -> Option<&FallbackReason> {
        self.reason.as_ref()
    }

    pub fn is_fallback(&self) -> bool {
        self.phase == Phase::Failed
    }

    /// Enter `Loading`, clearing any previous error.
    pub(crate) fn begin(&mut self) -> Checkpoint {
        Checkpoint {
            phase: std::mem::replace(&mut self.phase, Phase::Loading),
            banner: self.banner.take(),
            reason: self.reason.take(),
        }
    }

    pub(crate) fn restore(&mut self, checkpoint: Checkpoint) {
        self.phase = checkpoint.phase;
        self.banner = checkpoint.banner;
        self.reason = checkpoint.reason;
    }

    pub(crate) fn apply(&mut self, fetched: Fetched<T>) {
        let (data, reason) = fetched.into_parts();
        self.data = data;
        match reason {
            None => {
                self.phase = Phase::Ready;
            }
            Some(reason) => {
                self.phase = Phase::Failed;
                self.banner = Some(Notice::fallback());
                self.reason = Some(reason);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn live_result_is_ready_without_banner() {
        let mut state = ViewState::new(Vec::<u32>::new());
        state.begin();
        assert_eq!(state.phase(), Phase::Loading);

        state.apply(Fetched::Live(vec![1, 2]));

        assert_eq!(state.phase(), Phase::Ready);
        assert_eq!(state.data(), &vec![1, 2]);
        assert!(state.banner().is_none());
    }

    #[test]
    fn fallback_always_says_could_not_connect() {
        let mut state = ViewState::new(0u32);
        state.begin();
        state.apply(Fetched::fallback(7, FallbackReason::BackendUnavailable));

        assert_eq!(state.phase(), Phase::Failed);
        assert_eq!(state.banner().map(|n| n.message.as_str()), Some(FALLBACK_MESSAGE));

        state.begin();
        assert!(state.banner().is_none(), "loading clears the previous error");
    }

    #[test]
    fn restore_undoes_begin() {
        let mut state = ViewState::new(1u8);
        state.apply(Fetched::fallback(2, FallbackReason::BackendUnavailable));

        let checkpoint = state.begin();
        state.restore(checkpoint);

        assert_eq!(state.phase(), Phase::Failed);
        assert!(state.banner().is_some());
        assert_eq!(*state.data(), 2);
    }

    #[test]
    fn missing_fields_map_to_missing_information() {
        let notice = Notice::invalid(&DomainError::MissingFields(vec!["name"]));
        assert_eq!(notice.title, "Missing information");
        let notice = Notice::invalid(&DomainError::validation("quantity is not a number"));
        assert_eq!(notice.title, "Invalid information");
    }

    #[test]
    fn rows_are_found_by_identity() {
        let mut state = ViewState::new(larder_core::fallback::orders());
        let id = state.data()[1].id.clone();

        assert_eq!(state.find(&id).map(|o| &o.id), Some(&id));
        assert!(state.remove(&id));
        assert!(state.find(&id).is_none());
        assert!(!state.remove(&id));
    }
}
