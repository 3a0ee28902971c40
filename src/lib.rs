pub mod adapters;
#[cfg(feature = "cli")]
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::{Cli, Command, SearchArgs};

pub use crate::adapters::{http::HttpClient, storage::LocalStorage};
pub use crate::core::{
    bot::Bot, catalog::ShowCatalog, engine::ScrapeEngine, pipeline::ScrapePipeline,
};
pub use crate::domain::model::{
    DateRange, DateWindow, ScrapeRequest, ShowEntry, TableData, TicketRecord,
};
pub use crate::utils::error::{Result, ScrapeError};
