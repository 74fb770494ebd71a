use std::collections::BTreeMap;

use serde::Serialize;

/// Known-purpose pages probed next to the seed page, in scan order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogicalPage {
    About,
    Products,
    Solutions,
    Careers,
    Contact,
}

impl LogicalPage {
    pub const ALL: [LogicalPage; 5] = [
        LogicalPage::About,
        LogicalPage::Products,
        LogicalPage::Solutions,
        LogicalPage::Careers,
        LogicalPage::Contact,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            LogicalPage::About => "about",
            LogicalPage::Products => "products",
            LogicalPage::Solutions => "solutions",
            LogicalPage::Careers => "careers",
            LogicalPage::Contact => "contact",
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            LogicalPage::About => "/about",
            LogicalPage::Products => "/products",
            LogicalPage::Solutions => "/solutions",
            LogicalPage::Careers => "/careers",
            LogicalPage::Contact => "/contact",
        }
    }

    pub fn candidate_url(&self, base_url: &str) -> String {
        format!("{}{}", base_url.trim_end_matches('/'), self.path())
    }
}

/// Reachable pages only. A missing page has no entry.
///
/// Keys iterate in scan order, so `urls()` is stable across runs.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct PageMap(BTreeMap<LogicalPage, String>);

impl PageMap {
    pub fn get(&self, page: LogicalPage) -> Option<&str> {
        self.0.get(&page).map(|url| url.as_str())
    }

    pub fn urls(&self) -> Vec<String> {
        self.0.values().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(LogicalPage, String)> for PageMap {
    fn from_iter<T: IntoIterator<Item = (LogicalPage, String)>>(iter: T) -> Self {
        PageMap(iter.into_iter().collect())
    }
}
