use crate::domain::model::ShowEntry;
use crate::domain::ports::FetchPage;
use crate::utils::error::{Result, ScrapeError};
use regex::Regex;
use scraper::{Html, Selector};
use std::collections::BTreeMap;
use std::sync::LazyLock;

/// The show selection control on the site's root listing page.
pub const SHOW_SELECT_SELECTOR: &str = r#"select[data-id="show-selector"]"#;

/// Show ids are exactly four ASCII digits; anything else in an option value
/// is navigation chrome, not a show.
static SHOW_ID_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{4}$").expect("failed to parse regex"));

pub fn is_show_id(value: &str) -> bool {
    SHOW_ID_SHAPE.is_match(value)
}

/// Mapping from show name to show id, as advertised on the listing page.
/// Duplicate names keep the last id in document order.
#[derive(Debug, Clone, Default)]
pub struct ShowCatalog {
    shows: BTreeMap<String, String>,
}

impl ShowCatalog {
    pub async fn fetch<F: FetchPage>(fetcher: &F) -> Result<Self> {
        let markup = fetcher.listing_page().await?;
        Ok(Self::parse(&markup))
    }

    pub fn parse(markup: &str) -> Self {
        let document = Html::parse_document(markup);
        let select_selector =
            Selector::parse(SHOW_SELECT_SELECTOR).expect("failed to parse selector");
        let option_selector = Selector::parse("option").expect("failed to parse selector");

        let control = match document.select(&select_selector).next() {
            Some(control) => control,
            None => {
                tracing::debug!("no show selector on listing page");
                return Self::default();
            }
        };

        let mut shows = BTreeMap::new();
        for option in control.select(&option_selector) {
            let id = option.value().attr("value").unwrap_or("");
            let name = option.text().collect::<String>().trim().to_string();
            if !is_show_id(id) {
                tracing::debug!(id, "discarding show option with malformed id");
                continue;
            }
            shows.insert(name, id.to_string());
        }

        Self { shows }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.shows.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.shows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shows.is_empty()
    }

    pub fn entries(&self) -> impl Iterator<Item = ShowEntry> + '_ {
        self.shows.iter().map(|(name, id)| ShowEntry {
            name: name.clone(),
            id: id.clone(),
        })
    }
}

/// Turns CLI input into a show id. Four-digit input is taken as an id and
/// passes through without touching the network; anything else is looked up
/// on the listing page, and a miss fails before any availability fetching.
pub async fn resolve_show<F: FetchPage>(fetcher: &F, input: &str) -> Result<String> {
    if is_show_id(input) {
        return Ok(input.to_string());
    }

    let catalog = ShowCatalog::fetch(fetcher).await?;
    tracing::debug!("listing page advertises {} shows", catalog.len());
    catalog
        .get(input)
        .map(str::to_string)
        .ok_or_else(|| ScrapeError::UnknownShow {
            name: input.to_string(),
        })
}
