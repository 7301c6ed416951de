use leptos::ev;
use leptos::prelude::*;

use movie_catalog::core::{Action, SortMode};

use crate::components::design_system::{Button, ButtonSize, ButtonVariant, Select, SelectOption};
use crate::services::catalog_state::use_catalog_state;

/// Value of the "all years" option in the year select.
pub const ALL_YEARS: &str = "";

/// Uppercase the first character for display, e.g. `sci-fi` -> `Sci-fi`.
pub fn capitalize(label: &str) -> String {
    let mut chars = label.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn parse_year(value: &str) -> Option<i32> {
    value.trim().parse().ok()
}

#[component]
pub fn FacetPanel() -> impl IntoView {
    view! {
        <aside class="w-64 flex flex-col gap-6">
            <GenreFacet />
            <YearFacet />
            <SortFacet />
        </aside>
    }
}

#[component]
fn GenreFacet() -> impl IntoView {
    let state = use_catalog_state();
    let genres = state.facets().genres;

    view! {
        <fieldset class="flex flex-col gap-2">
            <legend class="text-sm font-semibold uppercase text-gray-400 mb-2">"Genres"</legend>
            {genres
                .into_iter()
                .map(|genre| {
                    let checked = {
                        let genre = genre.clone();
                        move || state.genres.with(|g| g.contains(&genre))
                    };
                    let toggle = {
                        let genre = genre.clone();
                        move |_| state.dispatch(Action::ToggleGenre(genre.clone()))
                    };
                    view! {
                        <label class="flex items-center gap-2 cursor-pointer">
                            <input
                                type="checkbox"
                                class="accent-blue-500"
                                prop:checked=checked
                                on:change=toggle
                            />
                            <span>{capitalize(&genre)}</span>
                        </label>
                    }
                })
                .collect_view()}
        </fieldset>
    }
}

#[component]
fn YearFacet() -> impl IntoView {
    let state = use_catalog_state();
    let years = state.facets().years;

    let current = Signal::derive(move || {
        state
            .year
            .get()
            .map(|y| y.to_string())
            .unwrap_or_else(|| ALL_YEARS.to_string())
    });
    let on_change = Callback::new(move |value: String| {
        state.dispatch(Action::SetYear(parse_year(&value)));
    });

    view! {
        <div class="flex flex-col gap-2">
            <label for="year-select" class="text-sm font-semibold uppercase text-gray-400">
                "Release Year"
            </label>
            <Select id="year-select" value=current on_change=on_change>
                <SelectOption value=ALL_YEARS current=current>"All years"</SelectOption>
                {years
                    .into_iter()
                    .map(|year| {
                        view! {
                            <SelectOption value=year.to_string() current=current>
                                {year}
                            </SelectOption>
                        }
                    })
                    .collect_view()}
            </Select>
        </div>
    }
}

#[component]
fn SortFacet() -> impl IntoView {
    let state = use_catalog_state();

    view! {
        <div class="flex flex-col gap-2">
            <span class="text-sm font-semibold uppercase text-gray-400">"Sort"</span>
            <div class="flex gap-2">
                {SortMode::ALL
                    .into_iter()
                    .map(|mode| {
                        let active = Signal::derive(move || state.sort.get() == mode);
                        let variant = Signal::derive(move || {
                            ButtonVariant::active_or(active.get(), ButtonVariant::Secondary)
                        });
                        view! {
                            <Button
                                variant=variant
                                size=ButtonSize::Small
                                pressed=active
                                on_click=move |_: ev::MouseEvent| state.dispatch(Action::SetSort(mode))
                            >
                                {mode.label()}
                            </Button>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
