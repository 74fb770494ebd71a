use std::{
    collections::{BTreeMap, BTreeSet},
    sync::LazyLock,
};

use regex::Regex;
use scraper::Selector;

use super::{
    company_profile::{SocialNetwork, NOT_FOUND},
    webpage::Document,
};

const RAW_TEXT_PARAGRAPHS: usize = 5;
pub const PROOF_SIGNAL_KEYWORDS: [&str; 7] = [
    "client",
    "certified",
    "iso",
    "case study",
    "award",
    "trusted",
    "partner",
];

static TITLE_SELECTOR: LazyLock<Selector> = LazyLock::new(|| Selector::parse("title").unwrap());
static H1_SELECTOR: LazyLock<Selector> = LazyLock::new(|| Selector::parse("h1").unwrap());
static PARAGRAPH_SELECTOR: LazyLock<Selector> = LazyLock::new(|| Selector::parse("p").unwrap());

static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}").unwrap());
static PHONE_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\+?\d[\d\s\-]{8,}\d").unwrap());

pub fn extract_company_name(document: &Document) -> String {
    match document.first_text(&TITLE_SELECTOR) {
        Some(title) => title.trim().to_string(),
        None => NOT_FOUND.to_string(),
    }
}

/// First `<h1>`, then a non-empty meta description. Never mixes the two.
pub fn extract_tagline(document: &Document) -> String {
    if let Some(heading) = document.first_text(&H1_SELECTOR) {
        return heading.trim().to_string();
    }

    match document.meta_description() {
        Some(content) if !content.is_empty() => content.trim().to_string(),
        _ => NOT_FOUND.to_string(),
    }
}

pub fn extract_raw_text_sample(document: &Document) -> String {
    let sample = document
        .all_texts(&PARAGRAPH_SELECTOR)
        .iter()
        .take(RAW_TEXT_PARAGRAPHS)
        .map(|paragraph| paragraph.trim())
        .collect::<Vec<&str>>()
        .join(" ");

    match sample.is_empty() {
        true => NOT_FOUND.to_string(),
        false => sample,
    }
}

/// A later anchor for the same network replaces an earlier one.
pub fn extract_social_links(document: &Document) -> BTreeMap<SocialNetwork, String> {
    let mut socials = BTreeMap::new();

    for href in document.anchor_hrefs() {
        for network in SocialNetwork::ALL {
            if href.contains(network.host()) {
                socials.insert(network, href.clone());
            }
        }
    }

    socials
}

pub fn extract_emails(text: &str) -> BTreeSet<String> {
    EMAIL_REGEX
        .find_iter(text)
        .map(|found| found.as_str().to_string())
        .collect()
}

pub fn extract_phones(text: &str) -> BTreeSet<String> {
    PHONE_REGEX
        .find_iter(text)
        .map(|found| found.as_str().to_string())
        .collect()
}

pub fn detect_proof_signals(text: &str) -> Vec<String> {
    let text = text.to_lowercase();

    PROOF_SIGNAL_KEYWORDS
        .iter()
        .filter(|keyword| text.contains(*keyword))
        .map(|keyword| keyword.to_string())
        .collect()
}
