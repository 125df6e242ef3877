use std::path::Path;

use log::debug;

use crate::error::{IniError, Result};
use crate::utils::ini::Properties;
use crate::utils::ini_reader::parse;

/// Checks if a file exists at the given path
pub fn file_exists<P: AsRef<Path>>(path: P) -> bool {
    path.as_ref().exists()
}

/// Read the whole file into a string
pub fn read_file<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();
    if !file_exists(path) {
        return Err(IniError::NotExist(path.display().to_string()));
    }

    let content = std::fs::read_to_string(path)?;
    debug!("Loaded {} bytes from {}", content.len(), path.display());
    Ok(content)
}

/// Read an INI file and parse its contents
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Properties> {
    let content = read_file(path)?;
    Ok(parse(&content))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file() {
        let path = std::env::temp_dir().join("rapid-ini-does-not-exist.ini");
        assert!(!file_exists(&path));
        assert!(matches!(read_file(&path), Err(IniError::NotExist(_))));
    }

    #[test]
    fn test_parse_file() {
        let path = std::env::temp_dir().join("rapid-ini-parse-file-test.ini");
        std::fs::write(&path, "[Net]\r\nPort=80\r\n").unwrap();
        let properties = parse_file(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(properties.get("Net.Port").map(String::as_str), Some("80"));
    }
}
