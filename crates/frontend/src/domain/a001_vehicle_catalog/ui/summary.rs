use contracts::domain::a001_vehicle_catalog::selection::CompletedSelection;
use leptos::prelude::*;

/// Итог выбора: подписи выбранной тройки и карточки доступных активаций
#[component]
pub fn SelectionSummary(selection: CompletedSelection) -> impl IntoView {
    let header = format!(
        "{} · {} · {}",
        selection.model_name, selection.year_text, selection.generation_text
    );

    view! {
        <section class="selection-summary">
            <h3 class="selection-summary__title">{header}</h3>

            {if selection.activations.is_empty() {
                view! {
                    <p class="selection-summary__empty">
                        "Для этой комбинации активации пока недоступны"
                    </p>
                }
                .into_any()
            } else {
                view! {
                    <div class="selection-summary__list">
                        {selection
                            .activations
                            .into_iter()
                            .map(|activation| {
                                view! {
                                    <div class="activation-card">
                                        <div class="activation-card__header">
                                            <span class="activation-card__title">
                                                {activation.title}
                                            </span>
                                            <span class="activation-card__category">
                                                {activation.category}
                                            </span>
                                        </div>
                                        <p class="activation-card__description">
                                            {activation.description}
                                        </p>
                                        {activation.price.map(|price| view! {
                                            <span class="activation-card__price">{price}</span>
                                        })}
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                }
                .into_any()
            }}
        </section>
    }
}
