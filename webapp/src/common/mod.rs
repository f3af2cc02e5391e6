pub mod dom;
pub mod style;
