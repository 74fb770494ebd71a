use chrono::Local;

use crate::{
    configuration::BusinessSummaryTemplate,
    domain::{
        company_profile::{
            BusinessSummary, CompanyProfile, Contact, Evidence, Identity, Metadata, TeamHiring,
            NOT_ANALYSED, NOT_FOUND, NO_ERRORS, SCRAPE_NOTES,
        },
        extractors::{
            detect_proof_signals, extract_company_name, extract_emails, extract_phones,
            extract_raw_text_sample, extract_social_links, extract_tagline,
        },
        page_map::{LogicalPage, PageMap},
        webpage::Document,
    },
};

/// Builds the profile from an already fetched seed page. Cannot fail.
pub fn assemble_profile(
    url: &str,
    document: &Document,
    pages: &PageMap,
    template: &BusinessSummaryTemplate,
    probe_errors: &[String],
) -> CompanyProfile {
    let text = document.plain_text();

    let errors = match probe_errors.is_empty() {
        true => NO_ERRORS.to_string(),
        false => probe_errors.join("; "),
    };

    CompanyProfile {
        identity: Identity {
            company_name: extract_company_name(document),
            website: url.to_string(),
            tagline: extract_tagline(document),
        },
        business_summary: BusinessSummary {
            what_they_do: template.what_they_do.clone(),
            primary_offerings: template.primary_offerings.clone(),
            target_segments: template.target_segments.clone(),
            raw_text_sample: extract_raw_text_sample(document),
        },
        evidence: Evidence {
            pages_detected: pages.clone(),
            signals_found: detect_proof_signals(&text),
            social_links: extract_social_links(document),
        },
        contact: Contact {
            emails: extract_emails(&text),
            phones: extract_phones(&text),
            address: NOT_FOUND.to_string(),
            contact_page: page_or_sentinel(pages, LogicalPage::Contact),
        },
        team_hiring: TeamHiring {
            careers_page: page_or_sentinel(pages, LogicalPage::Careers),
            roles_detected: NOT_ANALYSED.to_string(),
        },
        metadata: Metadata {
            timestamp: Local::now().format("%Y-%m-%d %H:%M:%S%.6f").to_string(),
            pages_checked: pages.urls(),
            errors,
            notes: SCRAPE_NOTES.to_string(),
        },
    }
}

fn page_or_sentinel(pages: &PageMap, page: LogicalPage) -> String {
    pages
        .get(page)
        .map(|url| url.to_string())
        .unwrap_or_else(|| NOT_FOUND.to_string())
}
