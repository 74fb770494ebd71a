use crate::{
    configuration::{BusinessSummaryTemplate, FetcherSettings},
    domain::company_profile::CompanyProfile,
};

use super::{assemble_profile, discover_pages, FetchFailure, Fetcher};

/// Pipeline entry point: seed fetch, page discovery, extraction.
///
/// Holds no per-run state, so one instance can serve concurrent requests.
pub struct CompanyScraper {
    fetcher: Fetcher,
    template: BusinessSummaryTemplate,
}

impl CompanyScraper {
    pub fn new(fetcher_settings: FetcherSettings, template: BusinessSummaryTemplate) -> Self {
        CompanyScraper {
            fetcher: Fetcher::new(fetcher_settings),
            template,
        }
    }

    /// Fails only when the seed page cannot be fetched; nothing else runs then.
    pub async fn scrape_company(&self, url: &str) -> Result<CompanyProfile, FetchFailure> {
        log::info!("Scraping company website: {}", url);

        let seed_page = match self.fetcher.fetch_seed(url).await {
            Ok(page) => page,
            Err(e) => {
                log::warn!("Failed to fetch seed page {}: {}", url, e);
                return Err(e);
            }
        };

        let report = discover_pages(&self.fetcher, url).await;
        log::info!(
            "Detected {} known pages for {} ({} probes failed)",
            report.pages.len(),
            url,
            report.failures.len()
        );

        let document = seed_page.document();
        let profile = assemble_profile(
            url,
            &document,
            &report.pages,
            &self.template,
            &report.probe_errors(),
        );

        log::info!(
            "Profile for {}: {} emails, {} phones, {} signals",
            url,
            profile.contact.emails.len(),
            profile.contact.phones.len(),
            profile.evidence.signals_found.len()
        );

        Ok(profile)
    }
}
