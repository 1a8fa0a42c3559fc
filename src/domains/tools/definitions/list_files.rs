//! List files tool definition.
//!
//! Lists the entry names of a directory. Failures are reported in-band: the
//! tool answers with a single `"Error: ..."` string instead of failing the
//! call, which is what existing editor-extension callers expect.

use schemars::JsonSchema;
use serde::Deserialize;
use std::fs;
use std::io;
use std::path::Path;
use tracing::{info, instrument, warn};

use crate::domains::tools::handlers::ToolDefinition;

/// Prefix of the in-band error entry.
pub const ERROR_PREFIX: &str = "Error: ";

/// Parameters for the list files tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ListFilesParams {
    /// The directory path
    pub directory: String,
}

/// List files tool - lists the entries of a directory.
pub struct ListFilesTool;

impl ToolDefinition for ListFilesTool {
    const NAME: &'static str = "list_files";
    const DESCRIPTION: &'static str = "List files in a directory. Returns a list of filenames.";

    type Params = ListFilesParams;
    type Output = Vec<String>;

    #[instrument(skip_all, fields(directory = %params.directory))]
    fn execute(params: ListFilesParams) -> Vec<String> {
        info!("List files tool called");
        list_files(&params.directory)
    }
}

/// Entry names of `directory`, in the order the OS returns them.
///
/// On any I/O failure the result is `["Error: <message>"]`.
pub fn list_files(directory: impl AsRef<Path>) -> Vec<String> {
    let directory = directory.as_ref();

    match read_entry_names(directory) {
        Ok(names) => {
            info!("Listed {} entries in {}", names.len(), directory.display());
            names
        }
        Err(e) => {
            warn!("Failed to list {}: {}", directory.display(), e);
            vec![format!(
                "{}{}: '{}'",
                ERROR_PREFIX,
                e,
                directory.display()
            )]
        }
    }
}

fn read_entry_names(directory: &Path) -> io::Result<Vec<String>> {
    fs::read_dir(directory)?
        .map(|entry| entry.map(|e| e.file_name().to_string_lossy().into_owned()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::handlers::ToolDescriptor;
    use std::collections::HashSet;
    use tempfile::TempDir;

    #[test]
    fn test_list_files_returns_entries() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("a.txt"), "a").unwrap();
        fs::write(temp_dir.path().join("b.txt"), "b").unwrap();

        let names: HashSet<String> = list_files(temp_dir.path()).into_iter().collect();
        let expected: HashSet<String> = ["a.txt", "b.txt"].map(String::from).into();
        assert_eq!(names, expected);
    }

    #[test]
    fn test_list_files_includes_dirs_and_hidden() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir(temp_dir.path().join("subdir")).unwrap();
        fs::write(temp_dir.path().join(".hidden"), "").unwrap();

        let names = list_files(temp_dir.path());
        assert_eq!(names.len(), 2);
        assert!(names.contains(&"subdir".to_string()));
        assert!(names.contains(&".hidden".to_string()));
    }

    #[test]
    fn test_list_files_empty_directory() {
        let temp_dir = TempDir::new().unwrap();
        assert!(list_files(temp_dir.path()).is_empty());
    }

    #[test]
    fn test_list_files_nonexistent() {
        let names = list_files("/nonexistent/path/12345");
        assert_eq!(names.len(), 1);
        assert!(names[0].starts_with("Error: "));
        assert!(names[0].contains("/nonexistent/path/12345"));
    }

    #[test]
    fn test_list_files_on_regular_file() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("plain.txt");
        fs::write(&file, "content").unwrap();

        let names = list_files(&file);
        assert_eq!(names.len(), 1);
        assert!(names[0].starts_with(ERROR_PREFIX));
    }

    #[test]
    fn test_error_is_not_a_tool_failure() {
        let args = serde_json::json!({ "directory": "/nonexistent/path/12345" });
        let result = ToolDescriptor::of::<ListFilesTool>()
            .invoke(args.as_object().cloned().unwrap())
            .unwrap();

        assert_eq!(result.is_error, Some(false));
        let entries = result.structured_content.unwrap()["result"].clone();
        assert_eq!(entries.as_array().unwrap().len(), 1);
        assert!(entries[0].as_str().unwrap().starts_with(ERROR_PREFIX));
    }

    #[test]
    fn test_missing_directory_argument() {
        let result = ToolDescriptor::of::<ListFilesTool>().invoke(Default::default());
        assert!(result.is_err());
    }
}
