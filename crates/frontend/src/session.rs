//! Tab-wide session context and provider

use crate::app::AppRoute;
use crate::config::AppConfig;
use gloo::timers::callback::Timeout;
use std::cell::RefCell;
use std::rc::Rc;
use warden_http::PublicClient;
use warden_session::{BrowserSessionManager, LogoutReason, SessionError};
use yew::prelude::*;
use yew_router::prelude::*;

/// What every view gets from [`SessionProvider`]
#[derive(Clone)]
pub struct SessionContext {
    pub manager: BrowserSessionManager,
    notice: UseStateHandle<Option<String>>,
    notice_ms: u32,
    redirect: Rc<RefCell<Option<Timeout>>>,
}

impl PartialEq for SessionContext {
    fn eq(&self, other: &Self) -> bool {
        self.manager == other.manager && *self.notice == *other.notice
    }
}

impl SessionContext {
    /// Banner shown on the login page, e.g. after expiry
    pub fn notice(&self) -> Option<String> {
        (*self.notice).clone()
    }

    pub fn clear_notice(&self) {
        self.notice.set(None);
    }

    /// Show the expired notice, then return to the login page
    pub fn expire(&self, navigator: &Navigator) {
        self.notice
            .set(Some(SessionError::ExpiredRefresh.user_message()));
        self.redirect_later(navigator, AppRoute::Login);
    }

    /// Navigate to `route` once the notice delay has passed
    ///
    /// A later call replaces a redirect that has not fired yet.
    pub fn redirect_later(&self, navigator: &Navigator, route: AppRoute) {
        let navigator = navigator.clone();
        let timeout = Timeout::new(self.notice_ms, move || navigator.push(&route));
        *self.redirect.borrow_mut() = Some(timeout);
    }
}

fn build_manager(config: &AppConfig) -> Result<BrowserSessionManager, String> {
    let client = PublicClient::new(config.api_base_url.clone()).map_err(|e| e.to_string())?;
    tracing::info!(api = %config.api_base_url, "session manager ready");
    Ok(BrowserSessionManager::browser(client, config.session.clone()))
}

#[derive(Properties, PartialEq)]
pub struct SessionProviderProps {
    pub children: Children,
}

/// Owns the tab's [`BrowserSessionManager`]; must sit inside the router
#[function_component(SessionProvider)]
pub fn session_provider(props: &SessionProviderProps) -> Html {
    let config = use_memo((), |_| AppConfig::load());
    let built = use_memo((), {
        let config = config.clone();
        move |_| build_manager(&config)
    });
    let notice = use_state(|| None::<String>);
    let redirect = use_mut_ref(|| None::<Timeout>);
    let navigator = use_navigator();

    let context = (*built).as_ref().ok().map(|manager| SessionContext {
        manager: manager.clone(),
        notice: notice.clone(),
        notice_ms: config.session.expired_notice_ms,
        redirect: redirect.clone(),
    });

    // Follow the session out of the app when it ends
    {
        let context = context.clone();
        use_effect_with(built.clone(), move |_| {
            let registration = context.zip(navigator).map(|(context, navigator)| {
                let listener_context = context.clone();
                let id = context.manager.on_logged_out(move |reason| match reason {
                    LogoutReason::Expired => listener_context.expire(&navigator),
                    LogoutReason::Explicit => navigator.push(&AppRoute::Login),
                });
                (context.manager, id)
            });

            // Dropping the listener also breaks the manager -> listener -> context cycle
            move || {
                if let Some((manager, id)) = registration {
                    manager.remove_listener(id);
                }
            }
        });
    }

    match (context, &*built) {
        (Some(context), _) => html! {
            <ContextProvider<SessionContext> context={context}>
                {props.children.clone()}
            </ContextProvider<SessionContext>>
        },
        (None, Err(message)) => html! {
            <div class="max-w-md mx-auto mt-16 p-6 bg-red-50 dark:bg-red-900/20 border border-red-200 dark:border-red-800 rounded-lg text-red-700 dark:text-red-300">
                {format!("Failed to initialise the session: {message}")}
            </div>
        },
        (None, Ok(_)) => Html::default(),
    }
}

/// Hook to use the session context
#[hook]
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>()
        .expect("SessionContext not found. Make sure to wrap your component with SessionProvider")
}
