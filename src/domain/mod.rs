pub mod company_profile;
pub mod extractors;
pub mod page_map;
pub mod webpage;
