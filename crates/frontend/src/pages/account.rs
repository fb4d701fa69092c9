//! Profile and admin views

use super::error_box;
use crate::app::AppRoute;
use crate::components::{Busy, UserCard};
use crate::hooks::{Account, AccountState, use_account};
use crate::session::use_session;
use warden_session::SessionError;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq)]
struct AccountViewProps {
    account: Account,
    title: AttrValue,
}

#[function_component(AccountView)]
fn account_view(props: &AccountViewProps) -> Html {
    let session = use_session();
    let state = use_account(props.account);

    let on_logout = Callback::from(move |_: MouseEvent| session.manager.logout());

    match state {
        AccountState::Loading => html! {
            <Busy label="Loading account..." />
        },
        AccountState::Ready(user) => html! {
            <UserCard title={props.title.clone()} {user} {on_logout} />
        },
        AccountState::Failed(SessionError::Forbidden) => html! {
            <div class="max-w-md mx-auto mt-10 space-y-4">
                {error_box(&SessionError::Forbidden.user_message())}
                <p class="text-center text-sm">
                    <Link<AppRoute> to={AppRoute::Profile} classes="text-blue-600 dark:text-blue-400 hover:underline">
                        {"Back to profile"}
                    </Link<AppRoute>>
                </p>
            </div>
        },
        AccountState::Failed(err) => html! {
            <div class="max-w-md mx-auto mt-10">
                {error_box(&err.user_message())}
            </div>
        },
    }
}

#[function_component(ProfilePage)]
pub fn profile_page() -> Html {
    html! { <AccountView account={Account::Profile} title="Profile" /> }
}

#[function_component(AdminPage)]
pub fn admin_page() -> Html {
    html! { <AccountView account={Account::Admin} title="Admin" /> }
}
