use crate::domain::model::{field, TicketRecord};
use crate::utils::error::{Result, ScrapeError};
use scraper::{ElementRef, Html, Selector};

/// The availability table the site tags with a stable data attribute.
pub const SEATS_TABLE_SELECTOR: &str = r#"table[data-id="seats-table"]"#;

const EXPECTED_CELLS: usize = 4;

/// Extracts ticket rows from one availability page. A page without the seats
/// table means no tickets are on sale for that date and yields an empty list;
/// a data row with fewer than four cells aborts with `MalformedPage`.
///
/// The returned records carry `time`, `area`, `seats` and `price` in document
/// order; the caller attaches `date` and `showId`.
pub fn parse_availability(markup: &str) -> Result<Vec<TicketRecord>> {
    let document = Html::parse_document(markup);
    let table_selector = selector(SEATS_TABLE_SELECTOR);
    let row_selector = selector("tbody tr");
    let cell_selector = selector("td");
    let area_selector = selector("div");
    let seats_selector = selector("span");

    let table = match document.select(&table_selector).next() {
        Some(table) => table,
        None => {
            tracing::debug!("no seats table in page, tickets available?");
            return Ok(Vec::new());
        }
    };

    let mut tickets = Vec::new();
    for row in table.select(&row_selector) {
        let cells: Vec<ElementRef> = row.select(&cell_selector).collect();
        if cells.is_empty() {
            // Header rows carry th cells only.
            continue;
        }
        if cells.len() < EXPECTED_CELLS {
            return Err(ScrapeError::MalformedPage {
                expected: EXPECTED_CELLS,
                found: cells.len(),
            });
        }

        let mut ticket = TicketRecord::new();
        ticket.set(field::TIME, full_text(&cells[0]));
        ticket.set(field::AREA, nested_text(&cells[1], &area_selector));
        ticket.set(field::SEATS, nested_text(&cells[2], &seats_selector));
        ticket.set(field::PRICE, direct_text(&cells[3]));
        tickets.push(ticket);
    }

    Ok(tickets)
}

fn selector(css: &str) -> Selector {
    Selector::parse(css).expect("failed to parse selector")
}

/// All text under the element, nested or not.
fn full_text(element: &ElementRef) -> String {
    element.text().collect::<String>().trim().to_string()
}

/// Text of the first matching child container, or empty when absent.
fn nested_text(element: &ElementRef, inner: &Selector) -> String {
    element
        .select(inner)
        .next()
        .map(|child| full_text(&child))
        .unwrap_or_default()
}

/// Direct text children only. Distinguishes a bare price string from the
/// decorated markup the site nests next to it.
fn direct_text(element: &ElementRef) -> String {
    let mut content = String::new();
    for node in element.children() {
        if let Some(text) = node.value().as_text() {
            content.push_str(text);
        }
    }
    content.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(table_body: &str) -> String {
        format!(
            r#"<html><body><div class="content">
            <table data-id="seats-table"><tbody>{}</tbody></table>
            </div></body></html>"#,
            table_body
        )
    }

    fn ticket_row(time: &str, area: &str, seats: &str, price: &str) -> String {
        format!(
            "<tr><td>{}</td><td><div>{}</div></td>\
             <td><span>{}</span></td><td>{}<span>per ticket</span></td></tr>",
            time, area, seats, price
        )
    }

    #[test]
    fn test_no_table_yields_empty() {
        let markup = "<html><body><p>Sorry, nothing on sale today.</p></body></html>";
        let tickets = parse_availability(markup).unwrap();
        assert!(tickets.is_empty());
    }

    #[test]
    fn test_other_tables_are_ignored() {
        let markup = r#"<html><body>
            <table id="nav"><tbody><tr><td>Home</td></tr></tbody></table>
            </body></html>"#;
        assert!(parse_availability(markup).unwrap().is_empty());
    }

    #[test]
    fn test_rows_extracted_in_document_order() {
        let markup = page(&format!(
            "{}{}",
            ticket_row("14:30", "Stalls", "A12", "£45.00"),
            ticket_row("19:30", "Dress Circle", "B3, B4", "£62.50"),
        ));
        let tickets = parse_availability(&markup).unwrap();
        assert_eq!(tickets.len(), 2);

        assert_eq!(tickets[0].get(field::TIME), Some("14:30"));
        assert_eq!(tickets[0].get(field::AREA), Some("Stalls"));
        assert_eq!(tickets[0].get(field::SEATS), Some("A12"));
        assert_eq!(tickets[0].get(field::PRICE), Some("£45.00"));

        assert_eq!(tickets[1].get(field::TIME), Some("19:30"));
        assert_eq!(tickets[1].get(field::SEATS), Some("B3, B4"));
    }

    #[test]
    fn test_price_excludes_nested_markup() {
        let markup = page(
            "<tr><td>19:30</td><td><div>Stalls</div></td><td><span>A1</span></td>\
             <td> £45 <span>was £60</span> </td></tr>",
        );
        let tickets = parse_availability(&markup).unwrap();
        assert_eq!(tickets[0].get(field::PRICE), Some("£45"));
    }

    #[test]
    fn test_missing_inner_containers_become_empty() {
        let markup = page("<tr><td>19:30</td><td>Stalls</td><td>A1</td><td>£45</td></tr>");
        let tickets = parse_availability(&markup).unwrap();
        assert_eq!(tickets[0].get(field::TIME), Some("19:30"));
        assert_eq!(tickets[0].get(field::AREA), Some(""));
        assert_eq!(tickets[0].get(field::SEATS), Some(""));
        assert_eq!(tickets[0].get(field::PRICE), Some("£45"));
    }

    #[test]
    fn test_header_row_is_skipped() {
        let markup = page(&format!(
            "<tr><th>Time</th><th>Area</th><th>Seats</th><th>Price</th></tr>{}",
            ticket_row("19:30", "Stalls", "A12", "£45"),
        ));
        let tickets = parse_availability(&markup).unwrap();
        assert_eq!(tickets.len(), 1);
    }

    #[test]
    fn test_short_row_is_malformed() {
        let markup = page("<tr><td>19:30</td><td><div>Stalls</div></td><td>£45</td></tr>");
        let err = parse_availability(&markup).unwrap_err();
        match err {
            ScrapeError::MalformedPage { expected, found } => {
                assert_eq!(expected, 4);
                assert_eq!(found, 3);
            }
            other => panic!("expected MalformedPage, got {:?}", other),
        }
    }
}
