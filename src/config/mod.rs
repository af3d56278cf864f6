//! Configuration loading and settings structures

mod settings;

pub use settings::{
    BackendSettings, GeneralSettings, SearchSettings, ServerSettings, Settings,
};
