pub mod company_scraper;
pub mod data_persistance;
pub mod fetcher;
pub mod page_discoverer;
pub mod profile_assembler;

pub use company_scraper::*;
pub use data_persistance::*;
pub use fetcher::*;
pub use page_discoverer::*;
pub use profile_assembler::*;
