use leptos::prelude::*;

/// Labelled select with an empty placeholder option
#[component]
pub fn Select(
    id: &'static str,
    label: &'static str,
    /// Currently selected value
    #[prop(into)]
    value: Signal<String>,
    on_change: Callback<String>,
    /// Options: Vec of (value, label) tuples
    #[prop(into)]
    options: Signal<Vec<(String, String)>>,
    /// Text of the empty option
    placeholder: &'static str,
    /// Load error scoped to this field
    #[prop(into)]
    error: Signal<Option<String>>,
    #[prop(optional)]
    required: bool,
) -> impl IntoView {
    view! {
        <div class="form-group">
            <label for=id>{label}</label>
            <select
                id=id
                class="form-control"
                required=required
                on:change=move |ev| on_change.run(event_target_value(&ev))
            >
                <option value="" selected=move || value.get().is_empty()>
                    {placeholder}
                </option>
                <For
                    each=move || options.get()
                    key=|(val, _)| val.clone()
                    children=move |(val, label)| {
                        let val_clone = val.clone();
                        let is_selected = move || value.get() == val_clone;
                        view! {
                            <option value=val selected=is_selected>
                                {label}
                            </option>
                        }
                    }
                />
            </select>
            {move || error.get().map(|e| view! { <div class="form-feedback-item">{e}</div> })}
        </div>
    }
}
