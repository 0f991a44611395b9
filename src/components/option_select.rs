//! Option Select Component
//!
//! Labelled `<select>` for one of the board display options.

use leptos::prelude::*;

/// Labelled dropdown; `options` are `(value, label)` pairs
#[component]
pub fn OptionSelect(
    id: &'static str,
    label: &'static str,
    options: Vec<(&'static str, &'static str)>,
    #[prop(into)] value: Signal<&'static str>,
    on_change: impl Fn(String) + Copy + 'static,
) -> impl IntoView {
    view! {
        <label for=id>{label}</label>
        <select
            id=id
            prop:value=move || value.get()
            on:change=move |ev| on_change(event_target_value(&ev))
        >
            {options.into_iter().map(|(val, text)| {
                let is_selected = move || value.get() == val;
                view! {
                    <option value=val selected=is_selected>{text}</option>
                }
            }).collect_view()}
        </select>
    }
}
