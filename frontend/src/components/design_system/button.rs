use leptos::ev;
use leptos::prelude::*;

/// Button variant styles
#[derive(Default, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Ghost,
}

impl ButtonVariant {
    pub fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => {
                "bg-blue-600 hover:bg-blue-500 text-white shadow-lg shadow-blue-900/50 border border-transparent"
            }
            ButtonVariant::Secondary => {
                "bg-gray-700 hover:bg-gray-600 text-gray-200 border border-gray-600"
            }
            ButtonVariant::Ghost => {
                "bg-transparent hover:bg-white/10 text-gray-400 hover:text-white border border-transparent"
            }
        }
    }

    /// `Primary` when `active`, `fallback` otherwise.
    pub fn active_or(active: bool, fallback: ButtonVariant) -> ButtonVariant {
        if active {
            ButtonVariant::Primary
        } else {
            fallback
        }
    }
}

#[derive(Default, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ButtonSize {
    Small,
    #[default]
    Medium,
}

impl ButtonSize {
    pub fn class(&self) -> &'static str {
        match self {
            ButtonSize::Small => "px-2 py-1 text-sm",
            ButtonSize::Medium => "px-4 py-2",
        }
    }
}

/// A styled button whose variant and disabled state may be reactive
#[component]
pub fn Button(
    /// The visual variant of the button
    #[prop(into, default = ButtonVariant::Primary.into())]
    variant: Signal<ButtonVariant>,
    #[prop(optional)]
    size: ButtonSize,
    /// Click handler, not called while disabled
    #[prop(into, optional)]
    on_click: Option<Callback<ev::MouseEvent>>,
    /// Whether the button is disabled
    #[prop(into, default = false.into())]
    disabled: Signal<bool>,
    /// Marks the button as the current choice for assistive tech
    #[prop(into, default = false.into())]
    pressed: Signal<bool>,
    /// Additional CSS classes
    #[prop(into, optional)]
    class: String,
    /// Title/tooltip text
    #[prop(into, optional)]
    title: String,
    /// Button content
    children: Children,
) -> impl IntoView {
    let base_class = "rounded transition-all duration-200 flex items-center justify-center gap-2 font-medium focus:outline-none focus:ring-2 focus:ring-offset-2 focus:ring-offset-gray-900 focus:ring-blue-500";
    let size_class = size.class();

    let state_class = move || {
        if disabled.get() {
            "opacity-50 cursor-not-allowed transform-none"
        } else {
            "cursor-pointer active:scale-95"
        }
    };

    let full_class = move || {
        format!(
            "{base_class} {size_class} {} {} {class}",
            variant.get().class(),
            state_class()
        )
    };

    let handle_click = move |evt: ev::MouseEvent| {
        if !disabled.get_untracked() {
            if let Some(callback) = on_click {
                callback.run(evt);
            }
        }
    };

    view! {
        <button
            class=full_class
            on:click=handle_click
            disabled=move || disabled.get()
            aria-pressed=move || pressed.get().to_string()
            title=title
        >
            {children()}
        </button>
    }
}
