use thiserror::Error;

/// Raised when the knowledge base is queried with a name outside its key set.
///
/// Every crop the recommender can return has a profile, so this only surfaces
/// for names supplied from outside the engine (e.g. the `/api/crops/:name` route).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown crop: {name}")]
pub struct UnknownCropError {
    pub name: String,
}

impl UnknownCropError {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}
