pub mod commands;
pub mod manifest;
pub mod platform;
pub mod runtime;
pub mod version_file;
