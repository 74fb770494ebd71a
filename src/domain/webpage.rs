use std::sync::LazyLock;

use scraper::{Html, Selector};

static META_DESCRIPTION_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(r#"meta[name="description"]"#).unwrap());
static ANCHOR_SELECTOR: LazyLock<Selector> = LazyLock::new(|| Selector::parse("a[href]").unwrap());

/// Markup retrieved for a single url.
#[derive(Debug, Clone)]
pub struct WebPage {
    pub url: String,
    pub page_source: String,
}

impl WebPage {
    pub fn new(url: impl Into<String>, page_source: impl Into<String>) -> Self {
        WebPage {
            url: url.into(),
            page_source: page_source.into(),
        }
    }

    pub fn document(&self) -> Document {
        Document::parse(&self.page_source)
    }
}

/// Read-only view over a parsed page. Extractors only go through these queries.
pub struct Document {
    html: Html,
}

impl Document {
    pub fn parse(page_source: &str) -> Self {
        Document {
            html: Html::parse_document(page_source),
        }
    }

    /// Text of the first element matching `selector`, untrimmed.
    pub fn first_text(&self, selector: &Selector) -> Option<String> {
        self.html
            .select(selector)
            .next()
            .map(|element| element.text().collect())
    }

    /// Text of every element matching `selector`, in document order.
    pub fn all_texts(&self, selector: &Selector) -> Vec<String> {
        self.html
            .select(selector)
            .map(|element| element.text().collect())
            .collect()
    }

    pub fn meta_description(&self) -> Option<String> {
        self.html
            .select(&META_DESCRIPTION_SELECTOR)
            .next()
            .and_then(|element| element.value().attr("content"))
            .map(|content| content.to_string())
    }

    pub fn anchor_hrefs(&self) -> Vec<String> {
        self.html
            .select(&ANCHOR_SELECTOR)
            .filter_map(|element| element.value().attr("href").map(|href| href.to_string()))
            .collect()
    }

    /// Every text node of the document concatenated without separators.
    pub fn plain_text(&self) -> String {
        self.html.root_element().text().collect()
    }
}
