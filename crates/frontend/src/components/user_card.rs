use warden_core::User;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct UserCardProps {
    pub title: AttrValue,
    pub user: User,
    pub on_logout: Callback<MouseEvent>,
}

#[function_component(UserCard)]
pub fn user_card(props: &UserCardProps) -> Html {
    let user = &props.user;
    let field = |label: &'static str, value: Option<&str>| {
        html! {
            <div class="flex justify-between py-2 border-b border-gray-100 dark:border-gray-700">
                <span class="font-medium text-gray-600 dark:text-gray-400">{label}</span>
                <span class="text-gray-900 dark:text-gray-100">{value.unwrap_or("-").to_string()}</span>
            </div>
        }
    };

    html! {
        <div class="max-w-md mx-auto mt-10 bg-white dark:bg-gray-800 rounded-lg shadow-lg p-8">
            <h2 class="text-2xl font-bold mb-6 text-gray-900 dark:text-gray-100">{props.title.clone()}</h2>
            <div class="space-y-1">
                {field("Email", user.email.as_deref())}
                {field("First Name", user.first_name.as_deref())}
                {field("Last Name", user.last_name.as_deref())}
                {field("Role", Some(user.role.as_str()))}
            </div>
            <button
                class="mt-6 w-full px-4 py-2 bg-white/10 hover:bg-gray-100 dark:hover:bg-gray-700 text-gray-700 dark:text-gray-300 rounded-lg font-medium transition-all border border-gray-300 dark:border-gray-600"
                onclick={props.on_logout.clone()}
            >
                {"Log out"}
            </button>
        </div>
    }
}
