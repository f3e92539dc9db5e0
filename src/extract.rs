use crate::quote::Quote;
use lazy_static::lazy_static;
use scraper::{Html, Selector};

const E: &str = "Invalid selector";
lazy_static! {
    static ref QUOTE: Selector = Selector::parse(".quote").expect(E);
    static ref TEXT: Selector = Selector::parse(".text").expect(E);
    static ref AUTHOR: Selector = Selector::parse(".author").expect(E);
    static ref TAG: Selector = Selector::parse(".tags .tag").expect(E);
    static ref NEXT: Selector = Selector::parse(".next > a").expect(E);
}

/// Pure extraction over an already parsed page. Performs no I/O and never
/// fails; absent sub-elements just leave their field empty.
#[derive(Debug, Default)]
pub struct QuoteScraper;

impl QuoteScraper {
    /// Every `.quote` container on the page, in document order.
    pub fn extract(&self, doc: &Html) -> Vec<Quote> {
        doc.select(&QUOTE)
            .map(|container| {
                let text = container
                    .select(&TEXT)
                    .next()
                    .map(|el| el.text().collect::<String>().trim().to_string())
                    .unwrap_or_default();

                let author = container
                    .select(&AUTHOR)
                    .next()
                    .map(|el| el.text().collect::<String>().trim().to_string())
                    .unwrap_or_default();

                let tags = container
                    .select(&TAG)
                    .map(|el| el.text().collect::<String>().trim().to_string())
                    .collect();

                Quote { text, author, tags }
            })
            .collect()
    }

    /// The `href` of the pagination next-link, if the page has one.
    /// `None` is the crawl's normal termination signal, not an error.
    pub fn next_page_href(&self, doc: &Html) -> Option<String> {
        doc.select(&NEXT)
            .next()
            .and_then(|a| a.value().attr("href"))
            .map(str::trim)
            .filter(|href| !href.is_empty())
            .map(ToString::to_string)
    }
}
