pub mod assessments;
pub mod health;
pub mod instruments;
