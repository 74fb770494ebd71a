pub mod scraper_route;
