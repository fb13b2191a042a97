pub mod app;
pub mod config;
pub mod error;
pub mod hn_client;
pub mod logging;
pub mod models;
pub mod state;
pub mod ui;

pub use app::SearchApp;
pub use config::SearchConfig;
pub use error::FetchFailure;
pub use hn_client::{HnSearchClient, SearchApi};
pub use models::{Hit, ResultsCache, SearchResultPage};
pub use state::AppState;
