use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use super::page_map::PageMap;

pub const NOT_FOUND: &str = "Not found";
pub const NOT_ANALYSED: &str = "Not analysed";
pub const NO_ERRORS: &str = "None";
pub const SCRAPE_NOTES: &str = "Best-effort scrape; JS-heavy pages may be incomplete";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum SocialNetwork {
    LinkedIn,
    Twitter,
    YouTube,
    Instagram,
}

impl SocialNetwork {
    pub const ALL: [SocialNetwork; 4] = [
        SocialNetwork::LinkedIn,
        SocialNetwork::Twitter,
        SocialNetwork::YouTube,
        SocialNetwork::Instagram,
    ];

    pub fn host(&self) -> &'static str {
        match self {
            SocialNetwork::LinkedIn => "linkedin.com",
            SocialNetwork::Twitter => "twitter.com",
            SocialNetwork::YouTube => "youtube.com",
            SocialNetwork::Instagram => "instagram.com",
        }
    }
}

/// Final record handed to callers. Field order matches the published JSON layout.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompanyProfile {
    pub identity: Identity,
    pub business_summary: BusinessSummary,
    pub evidence: Evidence,
    pub contact: Contact,
    pub team_hiring: TeamHiring,
    pub metadata: Metadata,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Identity {
    pub company_name: String,
    pub website: String,
    pub tagline: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BusinessSummary {
    pub what_they_do: String,
    pub primary_offerings: Vec<String>,
    pub target_segments: Vec<String>,
    pub raw_text_sample: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Evidence {
    pub pages_detected: PageMap,
    pub signals_found: Vec<String>,
    pub social_links: BTreeMap<SocialNetwork, String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Contact {
    pub emails: BTreeSet<String>,
    pub phones: BTreeSet<String>,
    pub address: String,
    pub contact_page: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamHiring {
    pub careers_page: String,
    pub roles_detected: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Metadata {
    pub timestamp: String,
    pub pages_checked: Vec<String>,
    pub errors: String,
    pub notes: String,
}

impl CompanyProfile {
    /// Pretty JSON with a four space indent.
    pub fn to_pretty_json(&self) -> Result<String, serde_json::Error> {
        let mut buffer = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
        self.serialize(&mut serializer)?;

        // serde_json only writes valid utf-8
        Ok(String::from_utf8_lossy(&buffer).into_owned())
    }
}
