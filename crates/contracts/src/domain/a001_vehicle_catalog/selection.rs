use serde::{Deserialize, Serialize};

use super::aggregate::{Activation, SelectOption, VehicleCatalog};

// ============================================================================
// Completion payload (DTO)
// ============================================================================

/// DTO завершённого выбора — передаётся хостящему приложению всякий раз,
/// когда тройка (модель, год, поколение) полностью заполнена
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletedSelection {
    pub model: String,
    #[serde(rename = "modelName")]
    pub model_name: String,
    pub year: String,
    #[serde(rename = "yearText")]
    pub year_text: String,
    pub generation: String,
    #[serde(rename = "generationText")]
    pub generation_text: String,
    pub activations: Vec<Activation>,
}

// ============================================================================
// Selection state machine
// ============================================================================

/// Явная фаза каскада. Вычисляется из полей `VehicleSelection`,
/// используется для логирования и включения/выключения контролов.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionPhase {
    Empty,
    ModelChosen,
    YearChosen,
    Complete,
}

/// Состояние каскадного выбора: шесть скалярных полей (идентификатор +
/// отображаемый текст на каждый уровень) и три производных списка.
/// Пустая строка означает «не выбрано».
///
/// Инвариант: поля нижних уровней имеют смысл только при заполненных
/// верхних; любая смена верхнего уровня безусловно сбрасывает всё ниже.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VehicleSelection {
    pub model: String,
    pub model_name: String,
    pub year: String,
    pub year_text: String,
    pub generation: String,
    pub generation_text: String,
    pub available_years: Vec<SelectOption>,
    pub available_generations: Vec<SelectOption>,
    pub available_activations: Vec<Activation>,
}

impl VehicleSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> SelectionPhase {
        if self.model.is_empty() {
            SelectionPhase::Empty
        } else if self.year.is_empty() {
            SelectionPhase::ModelChosen
        } else if self.generation.is_empty() {
            SelectionPhase::YearChosen
        } else {
            SelectionPhase::Complete
        }
    }

    /// Смена модели: пересчитать доступные годы (пусто, если модели нет в
    /// дереве) и безусловно сбросить выбор года, поколения и оба
    /// производных списка ниже
    pub fn select_model(
        &mut self,
        catalog: &VehicleCatalog,
        value: &str,
        label: &str,
    ) -> Option<CompletedSelection> {
        self.model = value.to_string();
        self.model_name = label.to_string();
        self.available_years = catalog.years_for(&self.model);
        self.year.clear();
        self.year_text.clear();
        self.generation.clear();
        self.generation_text.clear();
        self.available_generations.clear();
        self.available_activations.clear();
        self.completed()
    }

    /// Смена года: пересчитать доступные поколения (пусто, если модель не
    /// выбрана или пара не найдена) и сбросить выбор поколения и список
    /// активаций
    pub fn select_year(
        &mut self,
        catalog: &VehicleCatalog,
        value: &str,
        label: &str,
    ) -> Option<CompletedSelection> {
        self.year = value.to_string();
        self.year_text = label.to_string();
        self.available_generations = catalog.generations_for(&self.model, &self.year);
        self.generation.clear();
        self.generation_text.clear();
        self.available_activations.clear();
        self.completed()
    }

    /// Смена поколения: пересчитать список активаций (пусто, если модель
    /// или год не выбраны либо тройка не найдена)
    pub fn select_generation(
        &mut self,
        catalog: &VehicleCatalog,
        value: &str,
        label: &str,
    ) -> Option<CompletedSelection> {
        self.generation = value.to_string();
        self.generation_text = label.to_string();
        self.available_activations =
            catalog.activations_for(&self.model, &self.year, &self.generation);
        self.completed()
    }

    /// Полезная нагрузка уведомления: `Some` тогда и только тогда, когда
    /// модель, год и поколение непусты.
    ///
    /// Контракт: нагрузка формируется заново на каждом переходе, пока
    /// тройка остаётся полной, — повторная отправка при пересчёте
    /// является документированным поведением, а не разовым событием.
    pub fn completed(&self) -> Option<CompletedSelection> {
        if self.model.is_empty() || self.year.is_empty() || self.generation.is_empty() {
            return None;
        }
        Some(CompletedSelection {
            model: self.model.clone(),
            model_name: self.model_name.clone(),
            year: self.year.clone(),
            year_text: self.year_text.clone(),
            generation: self.generation.clone(),
            generation_text: self.generation_text.clone(),
            activations: self.available_activations.clone(),
        })
    }
}
