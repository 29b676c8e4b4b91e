pub mod catalog;
pub mod encode;
