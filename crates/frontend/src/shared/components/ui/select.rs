use leptos::prelude::*;

/// Select component with label and placeholder support
#[component]
pub fn Select(
    /// Label text (optional)
    #[prop(optional, into)]
    label: MaybeProp<String>,
    /// Current value
    #[prop(into)]
    value: Signal<String>,
    /// Change event handler; receives (value, label) of the chosen option.
    /// The label is resolved from the current options list, so the
    /// placeholder row reports an empty label.
    #[prop(optional)]
    on_change: Option<Callback<(String, String)>>,
    /// Options: Vec of (value, label) tuples
    #[prop(into)]
    options: Signal<Vec<(String, String)>>,
    /// Placeholder text for the empty first option
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    /// Disabled state (reactive: dependent selects toggle at runtime)
    #[prop(optional, into)]
    disabled: Signal<bool>,
    /// ID for the select element
    #[prop(optional, into)]
    id: MaybeProp<String>,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
) -> impl IntoView {
    let select_id = move || id.get().unwrap_or_default();
    let additional_class = move || class.get().unwrap_or_default();

    view! {
        <div class="form__group">
            {move || label.get().map(|l| view! {
                <label class="form__label" for=select_id>
                    {l}
                </label>
            })}
            <select
                id=select_id
                class=move || format!("form__select {}", additional_class())
                disabled=move || disabled.get()
                on:change=move |ev| {
                    if let Some(handler) = on_change {
                        let chosen = event_target_value(&ev);
                        let text = options
                            .get()
                            .iter()
                            .find(|(val, _)| *val == chosen)
                            .map(|(_, label)| label.clone())
                            .unwrap_or_default();
                        handler.run((chosen, text));
                    }
                }
            >
                <option value="" selected=move || value.get().is_empty()>
                    {move || placeholder.get().unwrap_or_default()}
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
        </div>
    }
}
