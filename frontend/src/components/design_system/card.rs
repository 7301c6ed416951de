use leptos::prelude::*;

/// A styled card container component
#[component]
pub fn Card(
    /// Additional CSS classes
    #[prop(into, optional)]
    class: String,
    /// Card content
    children: Children,
) -> impl IntoView {
    let base_class = "bg-gray-800 border border-gray-700 rounded-lg shadow-md overflow-hidden";
    let full_class = format!("{base_class} {class}");

    view! {
        <div class=full_class>
            {children()}
        </div>
    }
}

/// Card header section with distinct background
#[component]
pub fn CardHeader(
    #[prop(into, optional)]
    class: String,
    children: Children,
) -> impl IntoView {
    let base_class = "px-4 py-3 bg-gray-800/50 border-b border-gray-700";
    let full_class = format!("{base_class} {class}");

    view! {
        <div class=full_class>
            {children()}
        </div>
    }
}

#[component]
pub fn CardTitle(
    #[prop(into, optional)]
    class: String,
    children: Children,
) -> impl IntoView {
    let full_class = format!("text-lg font-semibold text-white {class}");

    view! {
        <h3 class=full_class>
            {children()}
        </h3>
    }
}

/// Card body section with padding
#[component]
pub fn CardBody(
    #[prop(into, optional)]
    class: String,
    children: Children,
) -> impl IntoView {
    let full_class = format!("p-4 {class}");

    view! {
        <div class=full_class>
            {children()}
        </div>
    }
}
