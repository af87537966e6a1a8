pub mod commands;
pub mod documents;
