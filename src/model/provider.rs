//! Load-once model cache
//!
//! The provider is constructed once at startup and handed to whatever
//! runs predictions. The first successful `get` reads the artifact from
//! disk; every later call returns the same instance. There is no
//! invalidation: a new artifact requires a process restart.

use std::path::PathBuf;
use std::sync::{Arc, Mutex, PoisonError};

use crate::model::{OnnxModel, PriceModel};
use crate::{ModelSettings, Result};

/// Shared handle to a loaded model
pub type SharedModel = Arc<dyn PriceModel>;

type Loader = Box<dyn Fn() -> Result<SharedModel> + Send + Sync>;

/// Loads the model on first use and hands out the same instance afterwards
pub struct ModelProvider {
    loader: Loader,
    cache: Mutex<Option<SharedModel>>,
}

impl ModelProvider {
    /// Provider backed by an ONNX artifact on disk
    pub fn from_file(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        Self::with_loader(move || {
            log::info!("Loading price model from {}", path.display());
            let model = OnnxModel::load(&path)?;
            Ok(Arc::new(model) as SharedModel)
        })
    }

    /// Provider configured from the `[model]` section of the config file
    pub fn from_config(settings: &ModelSettings) -> Self {
        let path = PathBuf::from(&settings.path);
        let input_name = settings.input_name.clone();
        Self::with_loader(move || {
            log::info!("Loading price model from {}", path.display());
            let model = OnnxModel::load_with_input(&path, input_name.as_deref())?;
            Ok(Arc::new(model) as SharedModel)
        })
    }

    /// Provider with custom load behavior
    pub fn with_loader(loader: impl Fn() -> Result<SharedModel> + Send + Sync + 'static) -> Self {
        ModelProvider {
            loader: Box::new(loader),
            cache: Mutex::new(None),
        }
    }

    /// Provider that serves an already-constructed model
    pub fn preloaded(model: SharedModel) -> Self {
        Self::with_loader(move || Ok(model.clone()))
    }

    /// Get the cached model, loading it on first call.
    ///
    /// The lock is the single initialization barrier: concurrent first
    /// calls cannot double-load or observe a partially constructed model.
    /// A failed load caches nothing, so a later call retries from scratch.
    pub fn get(&self) -> Result<SharedModel> {
        let mut cache = self.cache.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(model) = cache.as_ref() {
            return Ok(model.clone());
        }

        let model = (self.loader)()?;
        *cache = Some(model.clone());
        Ok(model)
    }
}
