//! Reader for INI configuration text and a lookup container for the result.
//!
//! ```
//! use rapid_ini::IniContainer;
//!
//! let container = IniContainer::from(rapid_ini::parse("[Database]\nHost=localhost\n"));
//! assert_eq!(container.get_section_value("Database", "Host").unwrap(), "localhost");
//! assert_eq!(container.get_value_or("Database.Port", "5432"), "5432");
//! ```

pub mod error;
pub mod utils;

// Re-export the reader and container for easier access
pub use error::{IniError, Result};
pub use utils::ini::{qualified_key, IniContainer, Properties};
pub use utils::ini_reader::{parse, read};
