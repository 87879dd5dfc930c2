pub mod aggregate;
pub mod selection;
