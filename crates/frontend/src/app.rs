use crate::domain::a001_vehicle_catalog::ui::{SelectionSummary, VehicleSelector};
use contracts::domain::a001_vehicle_catalog::selection::CompletedSelection;
use leptos::prelude::*;

/// Страница магазина активаций: каскадный выбор автомобиля сверху,
/// итог последнего полного выбора под ним
#[component]
pub fn App() -> impl IntoView {
    let (completed, set_completed) = signal::<Option<CompletedSelection>>(None);

    view! {
        <main class="page">
            <VehicleSelector on_selection_change=Callback::new(move |payload| {
                set_completed.set(Some(payload));
            }) />

            {move || completed.get().map(|selection| view! {
                <SelectionSummary selection=selection />
            })}
        </main>
    }
}
