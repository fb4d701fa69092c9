use crate::pages::{AdminPage, LoginPage, ProfilePage, RegisterPage};
use crate::session::SessionProvider;
use warden_session::LandingRoute;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, Routable)]
pub enum AppRoute {
    #[at("/")]
    Home,
    #[at("/login")]
    Login,
    #[at("/register")]
    Register,
    #[at("/profile")]
    Profile,
    #[at("/admin")]
    Admin,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl From<LandingRoute> for AppRoute {
    fn from(route: LandingRoute) -> Self {
        match route {
            LandingRoute::Profile => Self::Profile,
            LandingRoute::Admin => Self::Admin,
        }
    }
}

fn switch(route: AppRoute) -> Html {
    match route {
        AppRoute::Login => html! { <LoginPage /> },
        AppRoute::Register => html! { <RegisterPage /> },
        AppRoute::Profile => html! { <ProfilePage /> },
        AppRoute::Admin => html! { <AdminPage /> },
        AppRoute::Home | AppRoute::NotFound => html! { <Redirect<AppRoute> to={AppRoute::Login} /> },
    }
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <SessionProvider>
                <div class="min-h-screen bg-gradient-to-br from-gray-50 to-gray-100 dark:from-gray-900 dark:to-gray-800 px-4">
                    <div class="text-center pt-12">
                        <h1 class="text-3xl font-bold bg-gradient-to-r from-blue-600 to-purple-600 bg-clip-text text-transparent">
                            {"Warden"}
                        </h1>
                    </div>
                    <Switch<AppRoute> render={switch} />
                </div>
            </SessionProvider>
        </BrowserRouter>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use warden_session::ENTRY_ROUTE;

    #[test]
    fn test_routes_match_session_paths() {
        assert_eq!(AppRoute::Login.to_path(), ENTRY_ROUTE);
        for landing in [LandingRoute::Profile, LandingRoute::Admin] {
            assert_eq!(AppRoute::from(landing).to_path(), landing.path());
        }
    }
}
