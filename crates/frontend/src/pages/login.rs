use super::{error_box, notice_box};
use crate::app::AppRoute;
use crate::components::{Busy, TextField};
use crate::session::use_session;
use warden_session::{AuthOutcome, SessionError};
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(LoginPage)]
pub fn login_page() -> Html {
    let session = use_session();
    let navigator = use_navigator();

    let email = use_state(String::new);
    let password = use_state(String::new);
    let error = use_state(|| None::<String>);
    let submitting = use_state(|| false);

    let on_email = {
        let email = email.clone();
        Callback::from(move |value: String| email.set(value))
    };
    let on_password = {
        let password = password.clone();
        Callback::from(move |value: String| password.set(value))
    };

    let onsubmit = {
        let session = session.clone();
        let email = email.clone();
        let password = password.clone();
        let error = error.clone();
        let submitting = submitting.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *submitting {
                return;
            }
            submitting.set(true);
            error.set(None);
            session.clear_notice();

            let session = session.clone();
            let navigator = navigator.clone();
            let error = error.clone();
            let submitting = submitting.clone();
            let email = (*email).clone();
            let password = (*password).clone();

            wasm_bindgen_futures::spawn_local(async move {
                let outcome = AuthOutcome::from(session.manager.login(&email, &password).await);
                submitting.set(false);

                match outcome {
                    AuthOutcome::Authenticated(current) => {
                        if let Some(navigator) = navigator {
                            navigator.push(&AppRoute::from(current.landing_route()));
                        }
                    }
                    AuthOutcome::InvalidCredentials => {
                        error.set(Some(SessionError::InvalidCredentials.user_message()));
                    }
                    AuthOutcome::ExpiredRefresh => {
                        error.set(Some(SessionError::ExpiredRefresh.user_message()));
                    }
                    AuthOutcome::Unavailable(reason) => {
                        tracing::warn!(%reason, "login unavailable");
                        error.set(Some(
                            SessionError::Transport(reason).user_message(),
                        ));
                    }
                }
            });
        })
    };

    html! {
        <div class="max-w-md mx-auto mt-10 bg-white dark:bg-gray-800 rounded-lg shadow-lg p-8 space-y-6">
            <h2 class="text-2xl font-bold text-center text-gray-900 dark:text-gray-100">{"Login"}</h2>
            if let Some(notice) = session.notice() {
                {notice_box(&notice)}
            }
            <form class="space-y-4" {onsubmit}>
                <TextField label="Email" kind="email" value={(*email).clone()} oninput={on_email} />
                <TextField label="Password" kind="password" value={(*password).clone()} oninput={on_password} />
                if let Some(message) = (*error).as_ref() {
                    {error_box(message)}
                }
                if *submitting {
                    <Busy label="Signing in..." inline={true} />
                } else {
                    <button
                        type="submit"
                        class="w-full px-4 py-3 bg-gradient-to-r from-blue-500 to-purple-600 hover:from-blue-600 hover:to-purple-700 text-white rounded-lg font-medium transition-all"
                    >
                        {"Login"}
                    </button>
                }
            </form>
            <p class="text-center text-sm text-gray-600 dark:text-gray-400">
                {"No account yet? "}
                <Link<AppRoute> to={AppRoute::Register} classes="text-blue-600 dark:text-blue-400 hover:underline">
                    {"Register"}
                </Link<AppRoute>>
            </p>
        </div>
    }
}
