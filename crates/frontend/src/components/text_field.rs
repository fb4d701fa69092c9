use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct TextFieldProps {
    pub label: AttrValue,
    pub value: AttrValue,
    pub oninput: Callback<String>,
    /// `type` attribute of the input
    #[prop_or(AttrValue::Static("text"))]
    pub kind: AttrValue,
    #[prop_or(true)]
    pub required: bool,
}

/// Labelled form input reporting its value on every keystroke
#[function_component(TextField)]
pub fn text_field(props: &TextFieldProps) -> Html {
    let oninput = {
        let callback = props.oninput.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            callback.emit(input.value());
        })
    };

    html! {
        <label class="block">
            <span class="block mb-2 text-sm font-medium text-gray-700 dark:text-gray-300">{props.label.clone()}</span>
            <input
                type={props.kind.clone()}
                class="w-full px-4 py-2 bg-white dark:bg-gray-900 border border-gray-300 dark:border-gray-600 rounded-lg text-gray-900 dark:text-gray-100 focus:outline-none focus:ring-2 focus:ring-blue-500 transition-all"
                value={props.value.clone()}
                required={props.required}
                {oninput}
            />
        </label>
    }
}
