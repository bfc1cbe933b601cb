//! Domain layer: the category aggregate, its validation rules and the value
//! objects shared with the persistence and service layers.

pub mod category;
pub mod pagination;
pub mod types;
pub mod validation;
