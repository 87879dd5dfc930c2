use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// ============================================================================
// Option / dataset types
// ============================================================================

/// Элемент выпадающего списка: стабильный идентификатор + отображаемый текст
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    pub value: String,
    pub text: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            text: text.into(),
        }
    }
}

/// Год выпуска с доступными для него поколениями
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearEntry {
    pub value: String,
    pub text: String,
    pub generations: Vec<SelectOption>,
}

/// Запись дерева «модель → годы → поколения»
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelYears {
    pub years: Vec<YearEntry>,
}

/// Активация — включаемая функция для конкретной комбинации
/// модель/год/поколение. Цена хранится как отображаемая строка.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activation {
    pub title: String,
    pub description: String,
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
}

/// Запись таблицы активаций: точная тройка идентификаторов + её активации
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivationRecord {
    pub model: String,
    pub year: String,
    pub generation: String,
    pub activations: Vec<Activation>,
}

// ============================================================================
// Catalog
// ============================================================================

/// Три статических набора данных (каталог моделей, дерево годов/поколений,
/// таблица активаций) плюс чистые функции каскадного поиска.
///
/// Политика «fail-empty»: поиск никогда не возвращает ошибку — неизвестный
/// или пустой идентификатор даёт пустой список. Сравнение идентификаторов
/// строгое (точное строковое равенство); при дубликатах в таблице активаций
/// выигрывает первая запись в порядке набора данных.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VehicleCatalog {
    pub models: Vec<SelectOption>,
    pub tree: HashMap<String, ModelYears>,
    pub activations: Vec<ActivationRecord>,
}

impl VehicleCatalog {
    /// Собрать каталог из трёх JSON-документов (формат файлов данных:
    /// массив моделей, объект «модель → годы», массив записей активаций)
    pub fn from_json_parts(
        models: &str,
        tree: &str,
        activations: &str,
    ) -> Result<Self, serde_json::Error> {
        Ok(Self {
            models: serde_json::from_str(models)?,
            tree: serde_json::from_str(tree)?,
            activations: serde_json::from_str(activations)?,
        })
    }

    /// Годы выпуска для модели; пусто, если модель не задана или
    /// отсутствует в дереве
    pub fn years_for(&self, model_id: &str) -> Vec<SelectOption> {
        if model_id.is_empty() {
            return Vec::new();
        }
        self.tree
            .get(model_id)
            .map(|entry| {
                entry
                    .years
                    .iter()
                    .map(|y| SelectOption::new(y.value.clone(), y.text.clone()))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Поколения для пары (модель, год); пусто, если пара не найдена
    pub fn generations_for(&self, model_id: &str, year_id: &str) -> Vec<SelectOption> {
        if model_id.is_empty() || year_id.is_empty() {
            return Vec::new();
        }
        self.tree
            .get(model_id)
            .and_then(|entry| entry.years.iter().find(|y| y.value == year_id))
            .map(|y| y.generations.clone())
            .unwrap_or_default()
    }

    /// Активации для точной тройки (модель, год, поколение); пусто, если
    /// совпадения нет или любой из входов пуст
    pub fn activations_for(
        &self,
        model_id: &str,
        year_id: &str,
        generation_id: &str,
    ) -> Vec<Activation> {
        if model_id.is_empty() || year_id.is_empty() || generation_id.is_empty() {
            return Vec::new();
        }
        self.activations
            .iter()
            .find(|r| r.model == model_id && r.year == year_id && r.generation == generation_id)
            .map(|r| r.activations.clone())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn activation(title: &str) -> Activation {
        Activation {
            title: title.to_string(),
            description: format!("Описание {title}"),
            category: "comfort".to_string(),
            price: Some("49 $".to_string()),
        }
    }

    fn catalog() -> VehicleCatalog {
        let mut tree = HashMap::new();
        tree.insert(
            "X3".to_string(),
            ModelYears {
                years: vec![
                    YearEntry {
                        value: "2020".to_string(),
                        text: "2020".to_string(),
                        generations: vec![SelectOption::new("G01", "G01 (2017–2021)")],
                    },
                    YearEntry {
                        value: "2022".to_string(),
                        text: "2022".to_string(),
                        generations: vec![SelectOption::new("G01-LCI", "G01 LCI (2021–2024)")],
                    },
                ],
            },
        );
        VehicleCatalog {
            models: vec![
                SelectOption::new("X3", "BMW X3"),
                SelectOption::new("X5", "BMW X5"),
            ],
            tree,
            activations: vec![
                ActivationRecord {
                    model: "X3".to_string(),
                    year: "2020".to_string(),
                    generation: "G01".to_string(),
                    activations: vec![activation("Apple CarPlay"), activation("Видео в движении")],
                },
                ActivationRecord {
                    model: "X3".to_string(),
                    year: "2020".to_string(),
                    generation: "G01".to_string(),
                    activations: vec![activation("Дубликат")],
                },
            ],
        }
    }

    #[test]
    fn years_for_unknown_or_empty_model_is_empty() {
        let c = catalog();
        assert!(c.years_for("X7").is_empty());
        assert!(c.years_for("").is_empty());
    }

    #[test]
    fn years_for_known_model_preserves_dataset_order() {
        let c = catalog();
        let years = c.years_for("X3");
        assert_eq!(
            years.iter().map(|y| y.value.as_str()).collect::<Vec<_>>(),
            vec!["2020", "2022"]
        );
    }

    #[test]
    fn generations_for_unknown_year_is_empty() {
        let c = catalog();
        assert!(c.generations_for("X3", "1999").is_empty());
        assert!(c.generations_for("X3", "").is_empty());
        assert!(c.generations_for("", "2020").is_empty());
    }

    #[test]
    fn generations_for_known_pair() {
        let c = catalog();
        let gens = c.generations_for("X3", "2020");
        assert_eq!(gens, vec![SelectOption::new("G01", "G01 (2017–2021)")]);
    }

    #[test]
    fn activations_for_unmatched_triple_is_empty() {
        let c = catalog();
        assert!(c.activations_for("X3", "2020", "G02").is_empty());
        assert!(c.activations_for("X5", "2020", "G01").is_empty());
        assert!(c.activations_for("X3", "", "G01").is_empty());
    }

    #[test]
    fn activations_for_duplicate_records_first_match_wins() {
        let c = catalog();
        let list = c.activations_for("X3", "2020", "G01");
        assert_eq!(list.len(), 2);
        assert_eq!(list[0].title, "Apple CarPlay");
    }

    #[test]
    fn catalog_parses_from_json_parts() {
        let models = r#"[{ "value": "X3", "text": "BMW X3" }]"#;
        let tree = r#"{
            "X3": {
                "years": [
                    {
                        "value": "2020",
                        "text": "2020",
                        "generations": [{ "value": "G01", "text": "G01 (2017–2021)" }]
                    }
                ]
            }
        }"#;
        let activations = r#"[
            {
                "model": "X3",
                "year": "2020",
                "generation": "G01",
                "activations": [
                    {
                        "title": "Apple CarPlay",
                        "description": "Полноэкранный CarPlay",
                        "category": "multimedia",
                        "price": "49 $"
                    },
                    {
                        "title": "BMW M Sound",
                        "description": "Спортивный звук двигателя",
                        "category": "sound"
                    }
                ]
            }
        ]"#;

        let c = VehicleCatalog::from_json_parts(models, tree, activations)
            .expect("catalog json must parse");
        assert_eq!(c.models.len(), 1);
        assert_eq!(c.years_for("X3").len(), 1);
        let list = c.activations_for("X3", "2020", "G01");
        assert_eq!(list.len(), 2);
        assert_eq!(list[0].price.as_deref(), Some("49 $"));
        assert_eq!(list[1].price, None);
    }
}
