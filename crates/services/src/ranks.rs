use reqwest::Client;
use scraper::{Html, Selector};
use storage::{RankOrigin, RankTable, StateDirectory};

use crate::error::RankFetchError;

/// Page the live population ranks are scraped from.
pub const DEFAULT_POPULATION_URL: &str =
    "https://en.wikipedia.org/wiki/List_of_states_and_territories_of_the_United_States_by_population";

/// Fetches state population ranks from the population page.
///
/// The page carries several tables; the ranking one is the first with a
/// caption. Each body row lists the state name followed by its rank. Any
/// failure along the way is absorbed by [`RankService::load`], which hands
/// back the built-in table instead, so callers past the bootstrap never see
/// a network error.
#[derive(Clone)]
pub struct RankService {
    client: Client,
    url: String,
}

impl RankService {
    #[must_use]
    pub fn new() -> Self {
        Self::with_url(DEFAULT_POPULATION_URL)
    }

    #[must_use]
    pub fn with_url(url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            url: url.into(),
        }
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Fetch and parse the live rank table.
    ///
    /// # Errors
    ///
    /// Returns `RankFetchError` if the request fails, the page has no
    /// captioned table, a state row carries an unreadable rank, the page
    /// does not cover every state, or the collected ranks fail validation.
    pub async fn fetch(&self, directory: &StateDirectory) -> Result<RankTable, RankFetchError> {
        let response = self.client.get(&self.url).send().await?;
        if !response.status().is_success() {
            return Err(RankFetchError::HttpStatus(response.status()));
        }
        let body = response.text().await?;

        collect_rank_table(&body, directory)
    }

    /// Fetch the live table, falling back to the built-in one on any error.
    pub async fn load(&self, directory: &StateDirectory) -> RankTable {
        match self.fetch(directory).await {
            Ok(table) => {
                log::info!("loaded {} population ranks from {}", table.len(), self.url);
                table
            }
            Err(err) => {
                log::warn!("population rank fetch failed, using built-in table: {err}");
                RankTable::fallback()
            }
        }
    }
}

impl Default for RankService {
    fn default() -> Self {
        Self::new()
    }
}

/// Scrape the page and build a validated live table.
///
/// A page that only lists some of the directory's states is rejected here,
/// so the caller's fallback kicks in instead of a later catalog failure on
/// the missing ones.
fn collect_rank_table(
    html: &str,
    directory: &StateDirectory,
) -> Result<RankTable, RankFetchError> {
    let entries = parse_rank_entries(html, directory)?;
    if entries.len() != directory.len() {
        return Err(RankFetchError::Incomplete {
            found: entries.len(),
            expected: directory.len(),
        });
    }
    Ok(RankTable::from_entries(entries, RankOrigin::Live)?)
}

/// Pull `(state, rank)` pairs out of the page HTML.
///
/// Rows whose first cell is not one of the directory's states are skipped;
/// that covers header rows, territories, and summary lines alike.
fn parse_rank_entries(
    html: &str,
    directory: &StateDirectory,
) -> Result<Vec<(String, u8)>, RankFetchError> {
    let tables = Selector::parse("table").expect("static selector");
    let captions = Selector::parse("caption").expect("static selector");
    let rows = Selector::parse("tr").expect("static selector");
    let cells = Selector::parse("td").expect("static selector");

    let document = Html::parse_document(html);
    let table = document
        .select(&tables)
        .find(|table| table.select(&captions).next().is_some())
        .ok_or(RankFetchError::TableNotFound)?;

    let mut entries = Vec::new();
    for row in table.select(&rows) {
        let mut columns = row.select(&cells);
        let Some(first) = columns.next() else {
            continue;
        };
        let state = first.text().collect::<String>().trim().to_string();
        if !directory.contains_state(&state) {
            continue;
        }

        let rank_cell = columns
            .next()
            .map(|cell| cell.text().collect::<String>().trim().to_string())
            .ok_or_else(|| RankFetchError::MalformedRow {
                state: state.clone(),
                cell: String::new(),
            })?;
        let rank: u8 = rank_cell
            .parse()
            .map_err(|_| RankFetchError::MalformedRow {
                state: state.clone(),
                cell: rank_cell.clone(),
            })?;

        entries.push((state, rank));
    }

    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(table_body: &str) -> String {
        format!(
            r#"<html><body>
            <table><tr><td>navigation box, no caption</td></tr></table>
            <table><caption>Population of the states</caption>{table_body}</table>
            </body></html>"#
        )
    }

    #[test]
    fn parses_state_rows_from_the_captioned_table() {
        let html = page(
            "<tr><th>State</th><th>Rank</th></tr>\
             <tr><td>California</td><td>1</td></tr>\
             <tr><td> Texas </td><td> 2 </td></tr>\
             <tr><td>Puerto Rico</td><td>31</td></tr>",
        );

        let entries = parse_rank_entries(&html, &StateDirectory::bundled()).unwrap();
        assert_eq!(
            entries,
            vec![("California".to_string(), 1), ("Texas".to_string(), 2)]
        );
    }

    #[test]
    fn missing_caption_is_an_error() {
        let html = "<html><body><table><tr><td>California</td><td>1</td></tr></table></body></html>";
        let err = parse_rank_entries(html, &StateDirectory::bundled()).unwrap_err();
        assert!(matches!(err, RankFetchError::TableNotFound));
    }

    #[test]
    fn unreadable_rank_is_an_error() {
        let html = page("<tr><td>California</td><td>first</td></tr>");
        let err = parse_rank_entries(&html, &StateDirectory::bundled()).unwrap_err();
        assert!(matches!(
            err,
            RankFetchError::MalformedRow { state, cell } if state == "California" && cell == "first"
        ));
    }

    #[test]
    fn state_row_without_a_rank_cell_is_an_error() {
        let html = page("<tr><td>California</td></tr>");
        let err = parse_rank_entries(&html, &StateDirectory::bundled()).unwrap_err();
        assert!(matches!(
            err,
            RankFetchError::MalformedRow { state, .. } if state == "California"
        ));
    }

    #[test]
    fn a_full_page_builds_a_live_table() {
        let directory = StateDirectory::bundled();
        let fallback = RankTable::fallback();

        let mut body = String::new();
        for state in directory.state_names() {
            let rank = fallback.rank_of(state).unwrap();
            body.push_str(&format!("<tr><td>{state}</td><td>{rank}</td></tr>"));
        }

        let table = collect_rank_table(&page(&body), &directory).unwrap();
        assert!(!table.is_fallback());
        assert_eq!(table.rank_of("California"), Some(1));
        assert_eq!(table.rank_of("Wyoming"), Some(50));
    }

    #[test]
    fn a_partial_page_is_rejected() {
        let html = page("<tr><td>California</td><td>1</td></tr>");
        let err = collect_rank_table(&html, &StateDirectory::bundled()).unwrap_err();
        assert!(matches!(
            err,
            RankFetchError::Incomplete {
                found: 1,
                expected: 50
            }
        ));
    }

    #[test]
    fn nested_markup_inside_cells_is_flattened() {
        let html = page(
            "<tr><td><a href=\"/wiki/California\">California</a></td><td><b>1</b></td></tr>",
        );
        let entries = parse_rank_entries(&html, &StateDirectory::bundled()).unwrap();
        assert_eq!(entries, vec![("California".to_string(), 1)]);
    }
}
