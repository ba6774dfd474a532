pub mod export;
pub mod sort;
pub mod stats;

use std::path::Path;

/// Directory the side files of a database are written to
pub fn database_dir(database: &Path) -> &Path {
    database
        .parent()
        .filter(|dir| !dir.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_database_dir() {
        assert_eq!(database_dir(Path::new("sample.db")), Path::new("."));
        assert_eq!(database_dir(Path::new("/tmp/run/sample.db")), Path::new("/tmp/run"));
    }
}
