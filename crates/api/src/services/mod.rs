//! Business services sitting between the handlers and the asset store.

pub mod assets;

pub use assets::AssetService;
