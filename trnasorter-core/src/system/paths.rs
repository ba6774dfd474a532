use crate::{SorterError, SorterResult};
use std::path::{Path, PathBuf};

/// Check that an explicit output database path ends in `.{extension}`
pub fn validate_output_path(path: &Path, extension: &str) -> SorterResult<PathBuf> {
    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) if ext == extension => Ok(path.to_path_buf()),
        _ => Err(SorterError::Configuration(format!(
            "given output file {} is not a .{} file",
            path.display(),
            extension
        ))),
    }
}

/// Resolve where the sorted database goes.
/// An explicit path must pass [`validate_output_path`]; otherwise `<sample>.<extension>`.
pub fn output_database_path(
    sample_name: &str,
    output: Option<&Path>,
    extension: &str,
) -> SorterResult<PathBuf> {
    if sample_name.trim().is_empty() {
        return Err(SorterError::InvalidInput("sample name is empty".to_string()));
    }
    match output {
        Some(path) => validate_output_path(path, extension),
        None => Ok(PathBuf::from(format!("{}.{}", sample_name, extension))),
    }
}

/// `<sample><suffix>` placed in `dir`, e.g. `sample_SORTER_STATS.txt`
pub fn sample_file(dir: &Path, sample_name: &str, suffix: &str) -> PathBuf {
    dir.join(format!("{}{}", sample_name, suffix))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_database_path() {
        let path = output_database_path("liver", None, "db").unwrap();
        assert_eq!(path, PathBuf::from("liver.db"));
    }

    #[test]
    fn test_explicit_database_path() {
        let path = output_database_path("liver", Some(Path::new("/tmp/out/run.db")), "db").unwrap();
        assert_eq!(path, PathBuf::from("/tmp/out/run.db"));
    }

    #[test]
    fn test_wrong_extension_rejected() {
        let result = output_database_path("liver", Some(Path::new("run.sqlite")), "db");
        assert!(matches!(result, Err(SorterError::Configuration(_))));

        let result = validate_output_path(Path::new("run"), "db");
        assert!(matches!(result, Err(SorterError::Configuration(_))));
    }

    #[test]
    fn test_empty_sample_rejected() {
        let result = output_database_path("  ", None, "db");
        assert!(matches!(result, Err(SorterError::InvalidInput(_))));
    }

    #[test]
    fn test_sample_file() {
        let path = sample_file(Path::new("out"), "liver", "_SORTER_STATS.txt");
        assert_eq!(path, PathBuf::from("out/liver_SORTER_STATS.txt"));
    }
}
