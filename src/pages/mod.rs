pub mod analysis;
pub mod comparison;
pub mod history;
