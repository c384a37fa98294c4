pub mod catalog;
pub mod design_system;
