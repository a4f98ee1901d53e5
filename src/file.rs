use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// A source file loaded into one of the inputs
#[derive(Debug, Clone)]
pub struct FileData {
    pub path: PathBuf,
    pub content: String,
}

impl FileData {
    pub fn load(path: &Path) -> io::Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(Self {
            path: path.to_path_buf(),
            content,
        })
    }

    /// File name for labels, falling back to the full path
    pub fn display_name(&self) -> String {
        self.path
            .file_name()
            .and_then(|n| n.to_str())
            .map(str::to_string)
            .unwrap_or_else(|| self.path.to_string_lossy().into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn test_load_text_file() {
        let test_dir = std::env::temp_dir().join(format!("test_file_{}", Uuid::new_v4()));
        fs::create_dir_all(&test_dir).unwrap();
        let path = test_dir.join("main.rs");
        fs::write(&path, "fn main() {}\n").unwrap();

        let data = FileData::load(&path).unwrap();
        assert_eq!(data.content, "fn main() {}\n");
        assert_eq!(data.display_name(), "main.rs");

        let _ = fs::remove_dir_all(&test_dir);
    }

    #[test]
    fn test_load_missing_file() {
        let path = std::env::temp_dir().join(format!("missing_{}.rs", Uuid::new_v4()));
        assert!(FileData::load(&path).is_err());
    }
}
