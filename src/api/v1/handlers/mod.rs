pub mod health;
pub mod ids;
pub mod templates;
