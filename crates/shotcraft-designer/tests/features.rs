#[path = "features/export.rs"]
mod export;
#[path = "features/generator.rs"]
mod generator;
#[path = "features/templates.rs"]
mod templates;
