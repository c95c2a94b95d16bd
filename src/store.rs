use std::fs;
use std::io::ErrorKind;
use std::marker::PhantomData;
use std::path::PathBuf;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::ApiResult;

/// Storage seam for one entity type. Every call re-reads or fully
/// rewrites the backing array; there is no caching.
pub trait Store<T>: Send + Sync {
    fn load(&self) -> ApiResult<Vec<T>>;
    fn save(&self, items: &[T]) -> ApiResult<()>;
}

/// One pretty-printed JSON array per file. A missing file is created
/// (with its parent directories) holding `[]`; any other I/O or parse
/// failure propagates.
pub struct JsonFileStore<T> {
    path: PathBuf,
    _marker: PhantomData<fn() -> T>,
}

impl<T> JsonFileStore<T> {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonFileStore {
            path: path.into(),
            _marker: PhantomData,
        }
    }
}

impl<T> Store<T> for JsonFileStore<T>
where
    T: Serialize + DeserializeOwned,
{
    fn load(&self) -> ApiResult<Vec<T>> {
        match fs::read_to_string(&self.path) {
            Ok(data) if data.trim().is_empty() => Ok(Vec::new()),
            Ok(data) => Ok(serde_json::from_str(&data)?),
            Err(err) if err.kind() == ErrorKind::NotFound => {
                if let Some(parent) = self.path.parent() {
                    fs::create_dir_all(parent)?;
                }
                fs::write(&self.path, "[]")?;
                Ok(Vec::new())
            }
            Err(err) => Err(err.into()),
        }
    }

    fn save(&self, items: &[T]) -> ApiResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, serde_json::to_string_pretty(items)?)?;
        Ok(())
    }
}

#[cfg(test)]
pub struct MemStore<T> {
    items: std::sync::Mutex<Vec<T>>,
}

#[cfg(test)]
impl<T> MemStore<T> {
    pub fn new() -> Self {
        MemStore {
            items: std::sync::Mutex::new(Vec::new()),
        }
    }
}

#[cfg(test)]
impl<T: Clone + Send + Sync> Store<T> for MemStore<T> {
    fn load(&self) -> ApiResult<Vec<T>> {
        Ok(self.items.lock().unwrap().clone())
    }

    fn save(&self, items: &[T]) -> ApiResult<()> {
        *self.items.lock().unwrap() = items.to_vec();
        Ok(())
    }
}
