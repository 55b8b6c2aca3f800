pub mod editor;
pub mod quiz;
pub mod summary;
pub mod welcome;
