use actix_web::{get, web, HttpResponse};
use askama::Template;
use serde::Deserialize;

use crate::services::CompanyScraper;

#[derive(Template)]
#[template(path = "scraper.html")]
struct ScraperTemplate {
    url: String,
    profile_json: Option<String>,
    error: Option<String>,
}

#[derive(Deserialize)]
pub struct ScraperQuery {
    url: Option<String>,
}

/// Form page. Results are shown but never persisted from here.
#[get("/scraper")]
pub async fn scraper(
    company_scraper: web::Data<CompanyScraper>,
    query: web::Query<ScraperQuery>,
) -> HttpResponse {
    let url = query.url.clone().unwrap_or_default().trim().to_string();

    let mut template = ScraperTemplate {
        url: url.clone(),
        profile_json: None,
        error: None,
    };

    if query.url.is_some() {
        if url.is_empty() {
            template.error = Some("Please enter a valid URL".to_string());
        } else {
            match company_scraper.scrape_company(&url).await {
                Ok(profile) => match profile.to_pretty_json() {
                    Ok(json) => template.profile_json = Some(json),
                    Err(e) => {
                        log::error!("Failed to serialize profile: {:?}", e);
                        template.error = Some("Failed to render profile".to_string());
                    }
                },
                Err(e) => template.error = Some(format!("Failed to fetch website: {}", e)),
            }
        }
    }

    match template.render() {
        Ok(body) => HttpResponse::Ok().content_type("text/html").body(body),
        Err(e) => {
            log::error!("Failed to render scraper template: {:?}", e);
            HttpResponse::InternalServerError().finish()
        }
    }
}
