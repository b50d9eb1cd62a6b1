pub mod formatters;
pub mod renderers;
pub mod view_models;
