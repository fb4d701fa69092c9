//! Busy indicator shown while the session manager waits on the auth service

use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct BusyProps {
    /// Read out to screen readers as well as shown
    pub label: AttrValue,
    /// Sit in place of a form's submit button instead of filling the page
    #[prop_or_default]
    pub inline: bool,
}

#[function_component(Busy)]
pub fn busy(props: &BusyProps) -> Html {
    let (wrapper, ring) = if props.inline {
        (
            "flex items-center justify-center gap-3 w-full px-4 py-3 rounded-lg bg-gray-100 dark:bg-gray-800",
            "w-5 h-5 border-2",
        )
    } else {
        ("flex flex-col items-center gap-4 mt-16", "w-10 h-10 border-4")
    };

    html! {
        <div class={wrapper} role="status" aria-live="polite">
            <span class={classes!(ring, "border-blue-200", "border-t-purple-600", "rounded-full", "animate-spin")}></span>
            <span class="text-sm text-gray-600 dark:text-gray-400">{props.label.clone()}</span>
        </div>
    }
}
