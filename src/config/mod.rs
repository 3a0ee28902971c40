use crate::adapters::http::DEFAULT_BASE_URL;
use crate::domain::model::{
    DateWindow, ScrapeRequest, COMPACT_DATE_FORMAT, DEFAULT_QUANTITY,
};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "seatwatch")]
#[command(about = "Scrape theatre ticket availability into CSV")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Base URL of the ticketing site
    #[arg(long, global = true, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Pin an explicit Host header on every request
    #[arg(long, global = true)]
    pub host_header: Option<String>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List the shows advertised on the site
    Shows,
    /// Scrape seat availability for a show across a date range
    Search(SearchArgs),
}

#[derive(Debug, Clone, Args)]
pub struct SearchArgs {
    /// CSV file to write tickets data to
    pub outfile: String,

    /// Show name or four-digit show id
    pub show: String,

    /// Number of tickets per booking
    #[arg(long, default_value_t = DEFAULT_QUANTITY)]
    pub quantity: u32,

    /// First date to query, YYYYMMDD (defaults to today)
    #[arg(long, value_parser = parse_compact_date)]
    pub from: Option<NaiveDate>,

    /// Day after the last date to query, YYYYMMDD (defaults to 90 days
    /// after the first)
    #[arg(long, value_parser = parse_compact_date)]
    pub until: Option<NaiveDate>,
}

impl SearchArgs {
    pub fn scrape_request(&self, show_id: String, today: NaiveDate) -> ScrapeRequest {
        let window = DateWindow::resolve(self.from, self.until, today);
        ScrapeRequest::new(show_id, self.quantity, window)
    }
}

impl ConfigProvider for SearchArgs {
    fn output_path(&self) -> &str {
        &self.outfile
    }
}

fn parse_compact_date(value: &str) -> std::result::Result<NaiveDate, String> {
    NaiveDate::parse_from_str(value, COMPACT_DATE_FORMAT)
        .map_err(|e| format!("expected YYYYMMDD: {}", e))
}

impl Validate for Cli {
    fn validate(&self) -> Result<()> {
        validation::validate_url("base_url", &self.base_url)?;
        if let Command::Search(args) = &self.command {
            args.validate()?;
        }
        Ok(())
    }
}

impl Validate for SearchArgs {
    fn validate(&self) -> Result<()> {
        validation::validate_path("outfile", &self.outfile)?;
        validation::validate_non_empty_string("show", &self.show)?;
        validation::validate_positive_number("quantity", self.quantity as usize, 1)?;
        Ok(())
    }
}
