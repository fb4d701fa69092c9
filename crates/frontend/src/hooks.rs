//! Data hooks for the authenticated views

use crate::session::use_session;
use warden_core::User;
use warden_session::SessionError;
use yew::prelude::*;
use yew_router::prelude::*;

/// Which protected endpoint a view reads
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Account {
    Profile,
    Admin,
}

#[derive(Debug, Clone, PartialEq)]
pub enum AccountState {
    Loading,
    Ready(User),
    Failed(SessionError),
}

/// Load the signed-in user from `account`, refreshing the session first if
/// needed
///
/// When the session cannot be revived the expired notice is raised and the
/// user is sent back to the login page.
#[hook]
pub fn use_account(account: Account) -> AccountState {
    let session = use_session();
    let navigator = use_navigator();
    let state = use_state(|| AccountState::Loading);

    {
        let state = state.clone();
        use_effect_with(account, move |&account| {
            wasm_bindgen_futures::spawn_local(async move {
                let result = match account {
                    Account::Profile => session.manager.fetch_profile().await,
                    Account::Admin => session.manager.fetch_admin().await,
                };

                match result {
                    Ok(user) => state.set(AccountState::Ready(user)),
                    Err(err) => {
                        tracing::debug!(error = %err, ?account, "account fetch failed");
                        if err.requires_reauthentication() {
                            if let Some(navigator) = navigator.as_ref() {
                                session.expire(navigator);
                            }
                        }
                        state.set(AccountState::Failed(err));
                    }
                }
            });
        });
    }

    (*state).clone()
}
