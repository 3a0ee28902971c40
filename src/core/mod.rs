pub mod bot;
pub mod catalog;
pub mod engine;
pub mod export;
pub mod parser;
pub mod pipeline;

pub use crate::domain::model::{
    DateRange, DateWindow, ScrapeRequest, ShowEntry, TableData, TicketRecord,
};
pub use crate::domain::ports::{ConfigProvider, FetchPage, Pipeline, Storage};
pub use crate::utils::error::Result;
