pub mod action;
pub mod catalog;
pub mod catalogs;
pub mod render;
