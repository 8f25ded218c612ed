use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::utils::logging::*;
use crate::utils::{AppError, AppResult};

/// Conteúdo do arquivo de credenciais
///
/// ```json
/// { "openai_api_key": "sk-...", "updated_at": "2025-01-01T00:00:00Z" }
/// ```
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
struct StoredCredentials {
    #[serde(default)]
    openai_api_key: Option<String>,
    #[serde(default)]
    updated_at: Option<DateTime<Utc>>,
}

/// API key persistida localmente
///
/// Único estado mutável compartilhado do serviço. O classificador e o
/// template nunca o leem; o enriquecimento remoto recebe a key como valor.
#[derive(Debug)]
pub struct CredentialStore {
    path: PathBuf,
    data: StoredCredentials,
}

impl CredentialStore {
    /// Lê o arquivo; se ainda não existir, começa vazio
    pub fn load<P: Into<PathBuf>>(path: P) -> AppResult<Self> {
        let path = path.into();

        let data = if path.exists() {
            let contents = fs::read_to_string(&path)?;
            serde_json::from_str(&contents).map_err(|e| {
                AppError::StorageError(format!(
                    "Invalid credentials file {}: {}",
                    path.display(),
                    e
                ))
            })?
        } else {
            StoredCredentials::default()
        };

        Ok(Self { path, data })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn api_key(&self) -> Option<&str> {
        self.data.openai_api_key.as_deref()
    }

    pub fn is_configured(&self) -> bool {
        self.api_key().is_some()
    }

    pub fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.data.updated_at
    }

    /// Grava uma nova key e persiste no arquivo
    ///
    /// O estado em memória só muda depois que o arquivo foi escrito.
    pub fn set_api_key(&mut self, api_key: &str) -> AppResult<()> {
        let api_key = api_key.trim();
        if api_key.is_empty() {
            return Err(AppError::ValidationError("API key must not be empty".to_string()));
        }

        let data = StoredCredentials {
            openai_api_key: Some(api_key.to_string()),
            updated_at: Some(Utc::now()),
        };
        self.persist(&data)?;
        self.data = data;

        log_credential_updated(&self.path.display().to_string());
        Ok(())
    }

    /// Usa uma key só em memória (ex.: `OPENAI_API_KEY`), sem persistir
    pub fn seed_in_memory(&mut self, api_key: String) {
        let api_key = api_key.trim().to_string();
        if !api_key.is_empty() {
            self.data.openai_api_key = Some(api_key);
        }
    }

    pub fn clear(&mut self) -> AppResult<()> {
        let data = StoredCredentials::default();
        self.persist(&data)?;
        self.data = data;

        log_credential_cleared(&self.path.display().to_string());
        Ok(())
    }

    fn persist(&self, data: &StoredCredentials) -> AppResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let json = serde_json::to_string_pretty(data).map_err(|e| {
            AppError::StorageError(format!("Failed to serialize credentials: {}", e))
        })?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path() -> PathBuf {
        std::env::temp_dir()
            .join(format!("promptcraft-test-{}", uuid::Uuid::new_v4()))
            .join("credentials.json")
    }

    #[test]
    fn test_missing_file_starts_empty() {
        let store = CredentialStore::load(temp_path()).unwrap();
        assert!(!store.is_configured());
        assert!(store.updated_at().is_none());
    }

    #[test]
    fn test_key_survives_reload() {
        let path = temp_path();

        let mut store = CredentialStore::load(&path).unwrap();
        store.set_api_key("  sk-persisted  ").unwrap();

        let reloaded = CredentialStore::load(&path).unwrap();
        assert_eq!(reloaded.api_key(), Some("sk-persisted"));
        assert!(reloaded.updated_at().is_some());

        let raw = fs::read_to_string(&path).unwrap();
        assert!(raw.contains("\"openai_api_key\""));

        let _ = fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_empty_key_is_rejected() {
        let path = temp_path();
        let mut store = CredentialStore::load(&path).unwrap();

        let err = store.set_api_key("   ").unwrap_err();
        assert!(matches!(err, AppError::ValidationError(_)));
        assert!(!path.exists());
    }

    #[test]
    fn test_clear_removes_key() {
        let path = temp_path();
        let mut store = CredentialStore::load(&path).unwrap();
        store.set_api_key("sk-1").unwrap();
        store.clear().unwrap();

        assert!(!CredentialStore::load(&path).unwrap().is_configured());

        let _ = fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_seed_in_memory_does_not_write() {
        let path = temp_path();
        let mut store = CredentialStore::load(&path).unwrap();
        store.seed_in_memory("sk-env".to_string());

        assert_eq!(store.api_key(), Some("sk-env"));
        assert!(!path.exists());
    }

    /// Diretório pai é um arquivo comum: `create_dir_all` falha
    fn unwritable_path() -> PathBuf {
        let dir = std::env::temp_dir().join(format!("promptcraft-test-{}", uuid::Uuid::new_v4()));
        fs::create_dir_all(&dir).unwrap();
        let blocker = dir.join("blocker");
        fs::write(&blocker, "not a directory").unwrap();
        blocker.join("credentials.json")
    }

    #[test]
    fn test_failed_write_keeps_previous_key() {
        let path = unwritable_path();
        let mut store = CredentialStore::load(&path).unwrap();
        store.seed_in_memory("sk-old".to_string());

        let err = store.set_api_key("sk-new").unwrap_err();
        assert!(matches!(err, AppError::StorageError(_)));
        assert_eq!(store.api_key(), Some("sk-old"));
        assert!(store.updated_at().is_none());

        let _ = fs::remove_dir_all(path.parent().unwrap().parent().unwrap());
    }

    #[test]
    fn test_failed_clear_keeps_key() {
        let path = unwritable_path();
        let mut store = CredentialStore::load(&path).unwrap();
        store.seed_in_memory("sk-old".to_string());

        assert!(store.clear().is_err());
        assert_eq!(store.api_key(), Some("sk-old"));

        let _ = fs::remove_dir_all(path.parent().unwrap().parent().unwrap());
    }

    #[test]
    fn test_invalid_file_is_storage_error() {
        let path = temp_path();
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "not json").unwrap();

        let err = CredentialStore::load(&path).unwrap_err();
        assert!(matches!(err, AppError::StorageError(_)));

        let _ = fs::remove_dir_all(path.parent().unwrap());
    }
}
