use leptos::prelude::*;

/// Generic form field component with label and input
#[component]
pub fn FormField(
    /// Input id, also the `for` of the label
    id: &'static str,
    /// Field label text
    label: String,
    /// Whether field is required
    #[prop(default = true)]
    required: bool,
    /// Input type (text, email, tel, etc.)
    #[prop(default = "text")]
    input_type: &'static str,
    /// Current value signal
    value: Signal<String>,
    /// Input event callback
    on_input: Callback<String>,
    /// Whether field is disabled
    #[prop(into)]
    disabled: Signal<bool>,
) -> impl IntoView {
    view! {
        <div>
            <label for=id class="form-label">{label}</label>
            <input
                id=id
                name=id
                type=input_type
                class="form-input mt-2"
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
                required=required
                disabled=move || disabled.get()
            />
        </div>
    }
}

/// Select/dropdown form field component
#[component]
pub fn SelectField(
    /// Select id, also the `for` of the label
    id: &'static str,
    /// Field label text
    label: String,
    /// Current value signal
    value: Signal<String>,
    /// Change event callback
    on_change: Callback<String>,
    /// Options as (value, display_text) pairs; an empty value acts as placeholder
    options: Vec<(String, String)>,
    /// Whether field is disabled
    #[prop(into)]
    disabled: Signal<bool>,
) -> impl IntoView {
    view! {
        <div>
            <label for=id class="form-label">{label}</label>
            <select
                id=id
                name=id
                class="form-input mt-2"
                prop:value=move || value.get()
                on:change=move |ev| {
                    let val = event_target_value(&ev);
                    on_change.run(val);
                }
                required=true
                disabled=move || disabled.get()
            >
                {options.into_iter().map(|(val, text)| {
                    let is_placeholder = val.is_empty();
                    view! {
                        <option value=val disabled=is_placeholder>{text}</option>
                    }
                }).collect_view()}
            </select>
        </div>
    }
}
