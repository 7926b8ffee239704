use dioxus::prelude::*;

use crate::stores::users::{self, User};
use crate::utils::DataState;

/// Hook to load a user record by id.
///
/// Goes through the user store's two-tier lookup (cache, then API) and
/// reports progress through a single [`DataState`] signal the page can match
/// on. Re-runs when `id` changes.
pub fn use_user(id: i64) -> Signal<DataState<User>> {
    let mut state = use_signal(|| DataState::<User>::Pending);

    use_effect(use_reactive(&id, move |id| {
        state.set(DataState::Loading);

        spawn(async move {
            match users::get_or_fetch_user(id).await {
                Ok(user) => state.set(DataState::Loaded(user)),
                Err(e) => {
                    log::error!("Failed to load user {}: {}", id, e);
                    state.set(DataState::Error(e));
                }
            }
        });
    }));

    state
}
