use futures::future::join_all;

use crate::domain::page_map::{LogicalPage, PageMap};

use super::{FetchFailure, Fetcher};

/// Outcome of probing every known page next to a seed url.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DiscoveryReport {
    pub pages: PageMap,
    pub failures: Vec<(LogicalPage, FetchFailure)>,
}

impl DiscoveryReport {
    /// Probes that failed for a reason other than the page being absent.
    pub fn probe_errors(&self) -> Vec<String> {
        self.failures
            .iter()
            .filter(|(_, failure)| !failure.is_missing_page())
            .map(|(page, failure)| format!("{}: {}", page.name(), failure))
            .collect()
    }
}

/// Probes all candidate pages concurrently and waits for every one of them.
///
/// A failed probe only leaves its page out of the map.
pub async fn discover_pages(fetcher: &Fetcher, base_url: &str) -> DiscoveryReport {
    let probes = LogicalPage::ALL.into_iter().map(|page| async move {
        let url = page.candidate_url(base_url);
        let outcome = fetcher.fetch_probe(&url).await;
        (page, url, outcome)
    });

    let mut report = DiscoveryReport::default();
    let mut found = vec![];

    for (page, url, outcome) in join_all(probes).await {
        match outcome {
            Ok(_) => {
                log::info!("Found {} page at {}", page.name(), url);
                found.push((page, url));
            }
            Err(e) => {
                log::debug!("No {} page at {}: {}", page.name(), url, e);
                report.failures.push((page, e));
            }
        }
    }

    report.pages = found.into_iter().collect();
    report
}
