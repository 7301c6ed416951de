use leptos::ev;
use leptos::prelude::*;

pub const SELECT_CLASS: &str = "w-full bg-zinc-800 border border-zinc-700 rounded p-3 text-white focus:outline-none focus:ring-2 focus:ring-purple-500/50 focus:border-purple-500";
pub const OPTION_CLASS: &str = "bg-zinc-800 text-white";

/// A styled select dropdown whose value follows a signal
#[component]
pub fn Select(
    /// Current selected value
    #[prop(into)]
    value: Signal<String>,
    /// Change handler
    #[prop(into, optional)]
    on_change: Option<Callback<String>>,
    #[prop(into, optional)]
    id: String,
    /// Additional CSS classes
    #[prop(into, optional)]
    class: String,
    /// Select options
    children: Children,
) -> impl IntoView {
    let full_class = format!("{SELECT_CLASS} {class}");

    let handle_change = move |evt: ev::Event| {
        if let Some(callback) = on_change {
            let target = event_target::<web_sys::HtmlSelectElement>(&evt);
            callback.run(target.value());
        }
    };

    view! {
        <select
            id=id
            class=full_class
            on:change=handle_change
            prop:value=move || value.get()
        >
            {children()}
        </select>
    }
}

/// An option that marks itself selected when it matches `current`
#[component]
pub fn SelectOption(
    #[prop(into)]
    value: String,
    #[prop(into)]
    current: Signal<String>,
    children: Children,
) -> impl IntoView {
    let selected = {
        let value = value.clone();
        move || current.get() == value
    };

    view! {
        <option class=OPTION_CLASS value=value selected=selected>
            {children()}
        </option>
    }
}
