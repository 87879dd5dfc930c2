pub mod selector;
pub mod summary;

pub use selector::VehicleSelector;
pub use summary::SelectionSummary;
