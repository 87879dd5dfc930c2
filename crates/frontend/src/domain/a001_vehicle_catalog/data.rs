use contracts::domain::a001_vehicle_catalog::aggregate::VehicleCatalog;
use once_cell::sync::Lazy;

const MODELS_JSON: &str = include_str!("../../../data/vehicle_models.json");
const YEARS_GENERATIONS_JSON: &str =
    include_str!("../../../data/vehicle_years_generations.json");
const ACTIVATIONS_JSON: &str = include_str!("../../../data/vehicle_activations.json");

/// Статический каталог, встроенный в бинарник и разобранный один раз при
/// первом обращении. Данные читаются до первого использования компонента
/// и дальше не меняются.
pub static CATALOG: Lazy<VehicleCatalog> = Lazy::new(|| {
    match VehicleCatalog::from_json_parts(MODELS_JSON, YEARS_GENERATIONS_JSON, ACTIVATIONS_JSON) {
        Ok(catalog) => catalog,
        Err(e) => {
            // Политика fail-empty: битый встроенный каталог ведёт себя как
            // «ничего не доступно», а не как падение приложения
            log::error!("Не удалось разобрать встроенный каталог: {e}");
            VehicleCatalog::default()
        }
    }
});
