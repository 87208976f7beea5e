use crate::core::Storage;
use crate::utils::error::Result;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: String,
}

impl LocalStorage {
    pub fn new(base_path: String) -> Self {
        Self { base_path }
    }
}

impl Storage for LocalStorage {
    async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
        let full_path = Path::new(&self.base_path).join(path);
        let data = fs::read(full_path)?;
        Ok(data)
    }

    async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        let full_path = Path::new(&self.base_path).join(path);

        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent)?;
        }

        // 每次執行都整個覆寫
        fs::write(full_path, data)?;
        Ok(())
    }

    fn location(&self, path: &str) -> String {
        Path::new(&self.base_path).join(path).display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_overwrites_existing_file() {
        let dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(dir.path().to_str().unwrap().to_string());

        tokio_test::block_on(storage.write_file("news.txt", b"first run, longer text\n")).unwrap();
        tokio_test::block_on(storage.write_file("news.txt", b"second\n")).unwrap();

        let data = tokio_test::block_on(storage.read_file("news.txt")).unwrap();
        assert_eq!(data, b"second\n");
    }

    #[test]
    fn test_write_creates_missing_directories() {
        let dir = TempDir::new().unwrap();
        let base = dir.path().join("nested").join("out");
        let storage = LocalStorage::new(base.to_str().unwrap().to_string());

        tokio_test::block_on(storage.write_file("news.txt", "Gold:\n".as_bytes())).unwrap();
        assert!(base.join("news.txt").exists());
        assert_eq!(
            storage.location("news.txt"),
            base.join("news.txt").display().to_string()
        );
    }

    #[test]
    fn test_read_missing_file_is_io_error() {
        let dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(dir.path().to_str().unwrap().to_string());
        let err = tokio_test::block_on(storage.read_file("missing.txt")).unwrap_err();
        assert!(matches!(err, crate::utils::error::EtlError::IoError(_)));
    }
}
