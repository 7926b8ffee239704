//! Typestate for async data loads.
//!
//! A single enum instead of separate `is_loading` / `error` / `data` signals,
//! so a page can never observe a half-updated combination (loaded *and*
//! erroring, for example). The profile route keeps its fetched user record in
//! one of these.

#[derive(Debug, Clone, PartialEq)]
pub enum DataState<T> {
    /// No load started yet
    Pending,

    /// Fetch in flight
    Loading,

    /// Fetch finished with data
    Loaded(T),

    /// Fetch failed with an error message
    Error(String),
}

impl<T> DataState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, DataState::Pending | DataState::Loading)
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, DataState::Loaded(_))
    }

    /// The data if loaded, `None` otherwise
    pub fn data(&self) -> Option<&T> {
        match self {
            DataState::Loaded(data) => Some(data),
            _ => None,
        }
    }

    /// The error message if the load failed, `None` otherwise
    pub fn error(&self) -> Option<&str> {
        match self {
            DataState::Error(msg) => Some(msg),
            _ => None,
        }
    }
}

impl<T> Default for DataState<T> {
    fn default() -> Self {
        DataState::Pending
    }
}

impl<T, E: std::fmt::Display> From<Result<T, E>> for DataState<T> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(data) => DataState::Loaded(data),
            Err(err) => DataState::Error(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        let state: DataState<i32> = DataState::Pending;
        assert!(state.is_loading());
        assert!(!state.is_loaded());

        let state = DataState::Loaded(42);
        assert!(state.is_loaded());
        assert_eq!(state.data(), Some(&42));
        assert_eq!(state.error(), None);

        let state: DataState<i32> = DataState::Error("boom".to_string());
        assert_eq!(state.error(), Some("boom"));
        assert_eq!(state.data(), None);
    }

    #[test]
    fn test_from_result() {
        let ok: Result<i32, String> = Ok(7);
        assert_eq!(DataState::from(ok).data(), Some(&7));

        let err: Result<i32, String> = Err("nope".to_string());
        assert!(DataState::from(err).error().is_some());
    }
}
