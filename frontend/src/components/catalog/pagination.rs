use leptos::ev;
use leptos::prelude::*;

use movie_catalog::core::{Action, PaginationControls};

use crate::components::design_system::{Button, ButtonSize, ButtonVariant};
use crate::services::catalog_state::use_catalog_state;

/// Previous, one button per page, Next.
#[component]
pub fn Pagination() -> impl IntoView {
    let state = use_catalog_state();
    let controls = Memo::new(move |_| PaginationControls::from_result(&state.result.get()));

    let go_prev = move |_: ev::MouseEvent| {
        if let Some(page) = controls.get_untracked().prev_page() {
            state.dispatch(Action::GoToPage(page));
        }
    };
    let go_next = move |_: ev::MouseEvent| {
        if let Some(page) = controls.get_untracked().next_page() {
            state.dispatch(Action::GoToPage(page));
        }
    };

    view! {
        <nav class="pagination flex items-center gap-2" aria-label="Pagination">
            <Button
                variant=ButtonVariant::Secondary
                size=ButtonSize::Small
                disabled=Signal::derive(move || !controls.get().prev_enabled)
                on_click=go_prev
            >
                "‹ Previous"
            </Button>
            {move || {
                controls
                    .get()
                    .pages
                    .into_iter()
                    .map(|n| {
                        let current = Signal::derive(move || state.page.get() == n);
                        let variant = Signal::derive(move || {
                            ButtonVariant::active_or(current.get(), ButtonVariant::Ghost)
                        });
                        view! {
                            <Button
                                variant=variant
                                size=ButtonSize::Small
                                pressed=current
                                on_click=move |_: ev::MouseEvent| state.dispatch(Action::GoToPage(n))
                            >
                                {n}
                            </Button>
                        }
                    })
                    .collect_view()
            }}
            <Button
                variant=ButtonVariant::Secondary
                size=ButtonSize::Small
                disabled=Signal::derive(move || !controls.get().next_enabled)
                on_click=go_next
            >
                "Next ›"
            </Button>
        </nav>
    }
}
