use leptos::prelude::*;

/// Button with variants ("primary", "secondary", "success")
#[component]
pub fn Button(
    /// Button variant: "primary" (default), "secondary" or "success"
    #[prop(optional)]
    variant: &'static str,
    /// Button type attribute, "button" unless set
    #[prop(optional)]
    button_type: &'static str,
    /// Disabled state (reactive)
    #[prop(into)]
    disabled: Signal<bool>,
    /// Click event handler
    #[prop(optional)]
    on_click: Option<Callback<leptos::ev::MouseEvent>>,
    children: Children,
) -> impl IntoView {
    let variant_class = match variant {
        "secondary" => "btn btn-secondary",
        "success" => "btn btn-success",
        _ => "btn btn-primary",
    };
    let btn_type = if button_type.is_empty() { "button" } else { button_type };

    view! {
        <button
            type=btn_type
            class=variant_class
            disabled=move || disabled.get()
            on:click=move |ev| {
                if let Some(handler) = on_click {
                    handler.run(ev);
                }
            }
        >
            {children()}
        </button>
    }
}
