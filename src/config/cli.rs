use crate::core::Storage;
use crate::utils::error::Result;
use crate::utils::validation::validate_relative_file_name;
use std::path::{Path, PathBuf};
use tokio::io::AsyncWriteExt;

#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: String,
}

impl LocalStorage {
    pub fn new(base_path: String) -> Self {
        Self { base_path }
    }

    async fn prepare(&self, path: &str) -> Result<PathBuf> {
        validate_relative_file_name("file_name", path)?;
        let full_path = Path::new(&self.base_path).join(path);

        if let Some(parent) = full_path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        Ok(full_path)
    }
}

impl Storage for LocalStorage {
    async fn write_file(&self, path: &str, data: &[u8]) -> Result<String> {
        let full_path = self.prepare(path).await?;

        tokio::fs::write(&full_path, data).await?;
        Ok(full_path.display().to_string())
    }

    async fn create_file(&self, path: &str, data: &[u8]) -> Result<String> {
        let full_path = self.prepare(path).await?;

        let mut file = tokio::fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&full_path)
            .await?;
        file.write_all(data).await?;
        file.flush().await?;
        Ok(full_path.display().to_string())
    }
}
