pub mod demo;
pub mod menu;
