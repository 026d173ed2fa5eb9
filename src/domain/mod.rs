pub mod category;
pub mod generation;
pub mod history;
pub mod types;
