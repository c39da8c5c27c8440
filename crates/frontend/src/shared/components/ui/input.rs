use leptos::prelude::*;
use web_sys::HtmlInputElement;

/// Labelled text input (or textarea when `multiline`)
#[component]
pub fn Input(
    /// Element id, also used by the label
    id: &'static str,
    label: &'static str,
    #[prop(into)]
    value: Signal<String>,
    on_input: Callback<String>,
    /// Input type: "text" (default), "date", "tel", ...
    #[prop(optional)]
    input_type: &'static str,
    #[prop(optional)]
    placeholder: &'static str,
    #[prop(optional)]
    required: bool,
    #[prop(optional)]
    multiline: bool,
) -> impl IntoView {
    let input_t = if input_type.is_empty() { "text" } else { input_type };

    let control = if multiline {
        view! {
            <textarea
                id=id
                class="form-control"
                rows="3"
                placeholder=placeholder
                required=required
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
        }
        .into_any()
    } else {
        view! {
            <input
                id=id
                class="form-control"
                type=input_t
                placeholder=placeholder
                required=required
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
        }
        .into_any()
    };

    view! {
        <div class="form-group">
            <label for=id>{label}</label>
            {control}
        </div>
    }
}

/// Money input guarded by a mask
///
/// `on_input` returns whether the text was accepted; a rejected keystroke is
/// reverted in the DOM so the field keeps showing the stored value.
#[component]
pub fn AmountInput(
    id: &'static str,
    label: &'static str,
    #[prop(into)]
    value: Signal<String>,
    on_input: Callback<String, bool>,
    /// Validation hint shown under the field
    #[prop(into)]
    hint: Signal<Option<String>>,
) -> impl IntoView {
    view! {
        <div class="form-group">
            <label for=id>{label}</label>
            <input
                id=id
                class="form-control"
                class:is-invalid=move || hint.get().is_some()
                type="text"
                inputmode="decimal"
                placeholder="0.00"
                prop:value=move || value.get()
                on:input=move |ev| {
                    let input = event_target::<HtmlInputElement>(&ev);
                    if !on_input.run(input.value()) {
                        input.set_value(&value.get_untracked());
                    }
                }
            />
            {move || hint.get().map(|h| view! { <div class="form-feedback-item">{h}</div> })}
        </div>
    }
}
