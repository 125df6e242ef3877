pub mod file;
pub mod ini;
pub mod ini_reader;

// Re-export common utilities
pub use ini::{qualified_key, IniContainer, Properties};
pub use ini_reader::{parse, read};
