use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::ffi::OsString;
use std::io::ErrorKind;
use std::net::IpAddr;
use std::path::{Path, PathBuf};
use tabledns_application::ports::{NameTable, NameTableWriter};
use tabledns_domain::{DomainError, NameEntry};
use tokio::sync::Mutex;
use tracing::{debug, warn};

/// On-disk shape of one entry. Capitalized keys are accepted on read, since
/// older tables were written with `Name`/`Address`; writes always use
/// lowercase.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NameModel {
    #[serde(alias = "Name")]
    pub name: String,
    #[serde(alias = "Address")]
    pub address: String,
}

impl From<&NameEntry> for NameModel {
    fn from(entry: &NameEntry) -> Self {
        Self {
            name: entry.name.clone(),
            address: entry.address.to_string(),
        }
    }
}

/// Name table stored as a JSON array in a single file.
///
/// Reads go to disk every time. Writes are serialized through `write_lock`
/// and land via write-to-temp then rename, so a reader sees either the old
/// or the new file, never a torn one.
pub struct JsonNameTable {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonNameTable {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_models(&self) -> Result<Vec<NameModel>, DomainError> {
        let data = tokio::fs::read(&self.path).await.map_err(|e| {
            DomainError::StoreUnavailable(format!("{}: {}", self.path.display(), e))
        })?;
        parse_models(&data, &self.path)
    }

    async fn write_models(&self, models: &[NameModel]) -> Result<(), DomainError> {
        let data = render_models(models)?;
        let tmp = temp_path(&self.path);

        tokio::fs::write(&tmp, &data)
            .await
            .map_err(|e| DomainError::IoError(format!("{}: {}", tmp.display(), e)))?;
        tokio::fs::rename(&tmp, &self.path)
            .await
            .map_err(|e| DomainError::IoError(format!("{}: {}", self.path.display(), e)))
    }
}

#[async_trait]
impl NameTable for JsonNameTable {
    async fn get_names(&self) -> Result<Vec<NameEntry>, DomainError> {
        let models = self.read_models().await?;

        let entries = models
            .into_iter()
            .filter_map(|model| match model.address.trim().parse::<IpAddr>() {
                Ok(address) => Some(NameEntry::new(model.name, address)),
                Err(_) => {
                    warn!(
                        name = %model.name,
                        address = %model.address,
                        "Skipping name table entry with unparseable address"
                    );
                    None
                }
            })
            .collect();

        Ok(entries)
    }
}

#[async_trait]
impl NameTableWriter for JsonNameTable {
    async fn upsert(&self, entry: NameEntry) -> Result<(), DomainError> {
        let _guard = self.write_lock.lock().await;

        let mut models = match tokio::fs::read(&self.path).await {
            Ok(data) => parse_models(&data, &self.path)?,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "Name table file missing, starting a new one");
                Vec::new()
            }
            Err(e) => {
                return Err(DomainError::IoError(format!(
                    "{}: {}",
                    self.path.display(),
                    e
                )))
            }
        };

        let model = NameModel::from(&entry);
        match models.iter_mut().find(|m| m.name == model.name) {
            Some(existing) => existing.address = model.address,
            None => models.push(model),
        }

        self.write_models(&models).await
    }
}

fn parse_models(data: &[u8], path: &Path) -> Result<Vec<NameModel>, DomainError> {
    serde_json::from_slice(data).map_err(|e| {
        DomainError::StoreUnavailable(format!("{}: invalid JSON: {}", path.display(), e))
    })
}

fn render_models(models: &[NameModel]) -> Result<Vec<u8>, DomainError> {
    let mut out = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut out, formatter);
    models
        .serialize(&mut serializer)
        .map_err(|e| DomainError::IoError(format!("Failed to serialize name table: {}", e)))?;
    Ok(out)
}

fn temp_path(path: &Path) -> PathBuf {
    let mut tmp: OsString = path.as_os_str().to_owned();
    tmp.push(".tmp");
    PathBuf::from(tmp)
}
