mod account;
mod login;
mod register;

pub use account::{AdminPage, ProfilePage};
pub use login::LoginPage;
pub use register::RegisterPage;

use yew::prelude::*;

/// Inline error box used under forms and in place of page content
pub(crate) fn error_box(message: &str) -> Html {
    html! {
        <div class="bg-red-50 dark:bg-red-900/20 border border-red-200 dark:border-red-800 rounded-lg p-4 text-center">
            <p class="text-red-700 dark:text-red-300 text-sm">{message.to_string()}</p>
        </div>
    }
}

pub(crate) fn notice_box(message: &str) -> Html {
    html! {
        <div class="bg-amber-50 dark:bg-amber-900/20 border border-amber-200 dark:border-amber-800 rounded-lg p-4 text-center">
            <p class="text-amber-700 dark:text-amber-300 text-sm">{message.to_string()}</p>
        </div>
    }
}
