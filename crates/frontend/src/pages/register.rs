use super::{error_box, notice_box};
use crate::app::AppRoute;
use crate::components::{Busy, TextField};
use crate::session::use_session;
use warden_core::RegisterRequest;
use yew::prelude::*;
use yew_router::prelude::*;

const REGISTERED: &str = "Registration successful! You can now log in.";

#[function_component(RegisterPage)]
pub fn register_page() -> Html {
    let session = use_session();
    let navigator = use_navigator();

    let form = use_state(RegisterRequest::default);
    let error = use_state(|| None::<String>);
    let success = use_state(|| None::<String>);
    let submitting = use_state(|| false);

    // One callback per field, each writing into a copy of the form
    let field = |update: fn(&mut RegisterRequest, String)| {
        let form = form.clone();
        Callback::from(move |value: String| {
            let mut next = (*form).clone();
            update(&mut next, value);
            form.set(next);
        })
    };
    let on_first_name = field(|f, v| f.first_name = v);
    let on_last_name = field(|f, v| f.last_name = v);
    let on_email = field(|f, v| f.email = v);
    let on_password = field(|f, v| f.password = v);

    let onsubmit = {
        let form = form.clone();
        let error = error.clone();
        let success = success.clone();
        let submitting = submitting.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *submitting || success.is_some() {
                return;
            }
            submitting.set(true);
            error.set(None);

            let session = session.clone();
            let navigator = navigator.clone();
            let request = (*form).clone();
            let error = error.clone();
            let success = success.clone();
            let submitting = submitting.clone();

            wasm_bindgen_futures::spawn_local(async move {
                let result = session.manager.register(&request).await;
                submitting.set(false);

                match result {
                    Ok(_) => {
                        success.set(Some(REGISTERED.to_string()));
                        if let Some(navigator) = navigator.as_ref() {
                            session.redirect_later(navigator, AppRoute::Login);
                        }
                    }
                    Err(err) => error.set(Some(err.user_message())),
                }
            });
        })
    };

    html! {
        <div class="max-w-md mx-auto mt-10 bg-white dark:bg-gray-800 rounded-lg shadow-lg p-8 space-y-6">
            <h2 class="text-2xl font-bold text-center text-gray-900 dark:text-gray-100">{"Register"}</h2>
            <form class="space-y-4" {onsubmit}>
                <TextField label="First Name" value={form.first_name.clone()} oninput={on_first_name} />
                <TextField label="Last Name" value={form.last_name.clone()} oninput={on_last_name} />
                <TextField label="Email" kind="email" value={form.email.clone()} oninput={on_email} />
                <TextField label="Password" kind="password" value={form.password.clone()} oninput={on_password} />
                if let Some(message) = (*error).as_ref() {
                    {error_box(message)}
                }
                if let Some(message) = (*success).as_ref() {
                    {notice_box(message)}
                } else if *submitting {
                    <Busy label="Creating account..." inline={true} />
                } else {
                    <button
                        type="submit"
                        class="w-full px-4 py-3 bg-gradient-to-r from-blue-500 to-purple-600 hover:from-blue-600 hover:to-purple-700 text-white rounded-lg font-medium transition-all"
                    >
                        {"Register"}
                    </button>
                }
            </form>
            <p class="text-center text-sm text-gray-600 dark:text-gray-400">
                {"Already registered? "}
                <Link<AppRoute> to={AppRoute::Login} classes="text-blue-600 dark:text-blue-400 hover:underline">
                    {"Login"}
                </Link<AppRoute>>
            </p>
        </div>
    }
}
