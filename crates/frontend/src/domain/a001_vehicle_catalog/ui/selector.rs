use crate::domain::a001_vehicle_catalog::data::CATALOG;
use crate::shared::components::ui::{Badge, Select};
use contracts::domain::a001_vehicle_catalog::selection::{CompletedSelection, VehicleSelection};
use leptos::logging::log;
use leptos::prelude::*;

/// Каскадный выбор автомобиля: модель → год выпуска → поколение.
///
/// Год доступен только после выбора модели, поколение — после выбора года.
/// Любая смена верхнего уровня сбрасывает всё ниже (это делает машина
/// состояний в `contracts`, компонент только хранит её в сигнале).
///
/// Контракт уведомлений: `on_selection_change` вызывается после каждого
/// перехода, пока тройка остаётся полной, а не один раз на тройку —
/// не «оптимизировать» в одноразовое срабатывание.
#[component]
pub fn VehicleSelector(
    /// Вызывается при каждом полном выборе
    on_selection_change: Callback<CompletedSelection>,
) -> impl IntoView {
    let (selection, set_selection) = signal(VehicleSelection::new());

    let notify = move |completed: Option<CompletedSelection>| {
        if let Some(payload) = completed {
            log!(
                "Выбор завершён: {}/{}/{}, активаций: {}",
                payload.model,
                payload.year,
                payload.generation,
                payload.activations.len()
            );
            on_selection_change.run(payload);
        }
    };

    let on_model_change = Callback::new(move |(value, text): (String, String)| {
        let mut next = selection.get_untracked();
        let completed = next.select_model(&CATALOG, &value, &text);
        set_selection.set(next);
        notify(completed);
    });

    let on_year_change = Callback::new(move |(value, text): (String, String)| {
        let mut next = selection.get_untracked();
        let completed = next.select_year(&CATALOG, &value, &text);
        set_selection.set(next);
        notify(completed);
    });

    let on_generation_change = Callback::new(move |(value, text): (String, String)| {
        let mut next = selection.get_untracked();
        let completed = next.select_generation(&CATALOG, &value, &text);
        set_selection.set(next);
        notify(completed);
    });

    let model_options = Signal::derive(move || {
        CATALOG
            .models
            .iter()
            .map(|o| (o.value.clone(), o.text.clone()))
            .collect::<Vec<_>>()
    });
    let year_options = Signal::derive(move || {
        selection.with(|s| {
            s.available_years
                .iter()
                .map(|o| (o.value.clone(), o.text.clone()))
                .collect::<Vec<_>>()
        })
    });
    let generation_options = Signal::derive(move || {
        selection.with(|s| {
            s.available_generations
                .iter()
                .map(|o| (o.value.clone(), o.text.clone()))
                .collect::<Vec<_>>()
        })
    });

    let model_value = Signal::derive(move || selection.with(|s| s.model.clone()));
    let year_value = Signal::derive(move || selection.with(|s| s.year.clone()));
    let generation_value = Signal::derive(move || selection.with(|s| s.generation.clone()));

    let year_disabled = Signal::derive(move || selection.with(|s| s.model.is_empty()));
    let generation_disabled = Signal::derive(move || selection.with(|s| s.year.is_empty()));

    view! {
        <div class="vehicle-selector">
            <h2 class="vehicle-selector__title">"Выберите автомобиль"</h2>

            <div class="vehicle-selector__grid">
                <Select
                    id="model-select"
                    label="Модель"
                    placeholder="Выберите модель"
                    value=model_value
                    options=model_options
                    on_change=on_model_change
                />
                <Select
                    id="year-select"
                    label="Год выпуска"
                    placeholder="Выберите год"
                    value=year_value
                    options=year_options
                    disabled=year_disabled
                    on_change=on_year_change
                />
                <Select
                    id="generation-select"
                    label="Поколение"
                    placeholder="Выберите поколение"
                    value=generation_value
                    options=generation_options
                    disabled=generation_disabled
                    on_change=on_generation_change
                />
            </div>

            {move || {
                let count = selection.with(|s| s.available_activations.len());
                if count > 0 {
                    view! {
                        <div class="vehicle-selector__footer">
                            <Badge variant="primary">
                                {format!("Доступно активаций: {count}")}
                            </Badge>
                        </div>
                    }
                    .into_any()
                } else {
                    view! { <></> }.into_any()
                }
            }}
        </div>
    }
}
