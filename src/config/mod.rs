//! Configuration and path management

pub mod paths;
pub mod settings;

pub use paths::FoyerPaths;
pub use settings::Settings;
