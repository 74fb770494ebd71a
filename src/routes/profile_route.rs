use actix_web::{get, http::header, web, HttpResponse};
use serde::Deserialize;

use crate::{
    configuration::OutputSettings,
    domain::company_profile::CompanyProfile,
    services::{save_profile, CompanyScraper, FetchFailure},
};

pub const DOWNLOAD_FILE_NAME: &str = "company_profile.json";

#[derive(Deserialize)]
pub struct ProfileQuery {
    url: String,
}

pub fn fetch_failed_body(failure: &FetchFailure) -> serde_json::Value {
    serde_json::json!({
        "error": "could not fetch the site",
        "reason": failure.to_string(),
    })
}

async fn scrape(
    scraper: &CompanyScraper,
    output: &OutputSettings,
    url: &str,
) -> Result<CompanyProfile, HttpResponse> {
    let url = url.trim();
    if url.is_empty() {
        return Err(HttpResponse::BadRequest().json(serde_json::json!({
            "error": "Please enter a valid URL",
        })));
    }

    let profile = scraper
        .scrape_company(url)
        .await
        .map_err(|e| HttpResponse::BadGateway().json(fetch_failed_body(&e)))?;

    if output.persist {
        let (to_save, output) = (profile.clone(), output.clone());
        match web::block(move || save_profile(&to_save, &output)).await {
            Ok(Ok(_)) => {}
            Ok(Err(e)) => log::error!("Failed to persist profile for {}: {:?}", url, e),
            Err(e) => log::error!("Persist task for {} did not run: {:?}", url, e),
        }
    }

    Ok(profile)
}

#[get("")]
pub async fn get_profile(
    scraper: web::Data<CompanyScraper>,
    output: web::Data<OutputSettings>,
    query: web::Query<ProfileQuery>,
) -> HttpResponse {
    match scrape(&scraper, &output, &query.url).await {
        Ok(profile) => HttpResponse::Ok().json(profile),
        Err(res) => res,
    }
}

#[get("/download")]
pub async fn download_profile(
    scraper: web::Data<CompanyScraper>,
    output: web::Data<OutputSettings>,
    query: web::Query<ProfileQuery>,
) -> HttpResponse {
    let profile = match scrape(&scraper, &output, &query.url).await {
        Ok(profile) => profile,
        Err(res) => return res,
    };

    match profile.to_pretty_json() {
        Ok(body) => HttpResponse::Ok()
            .content_type("application/json")
            .append_header((
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", DOWNLOAD_FILE_NAME),
            ))
            .body(body),
        Err(e) => {
            log::error!("Failed to serialize profile: {:?}", e);
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[cfg(test)]
mod tests {
    use actix_web::{http::StatusCode, test, web, App};
    use wiremock::{
        matchers::{method, path},
        Mock, MockServer, ResponseTemplate,
    };

    use super::{download_profile, get_profile};
    use crate::{
        configuration::{BusinessSummaryTemplate, FetcherSettings, OutputSettings},
        services::CompanyScraper,
    };

    fn app_data() -> (web::Data<CompanyScraper>, web::Data<OutputSettings>) {
        let scraper = CompanyScraper::new(
            FetcherSettings {
                seed_timeout_secs: 2,
                probe_timeout_secs: 1,
                user_agent: Some("Mozilla/5.0".to_string()),
            },
            BusinessSummaryTemplate::default(),
        );
        let output = OutputSettings {
            persist: false,
            ..OutputSettings::default()
        };
        (web::Data::new(scraper), web::Data::new(output))
    }

    #[actix_web::test]
    async fn unreachable_site_is_bad_gateway() {
        let (scraper, output) = app_data();
        let app = test::init_service(
            App::new()
                .app_data(scraper)
                .app_data(output)
                .service(web::scope("/profile").service(get_profile)),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/profile?url=http%3A%2F%2F127.0.0.1%3A1")
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::BAD_GATEWAY);
        let body: serde_json::Value = test::read_body_json(res).await;
        assert_eq!(body["error"], "could not fetch the site");
    }

    #[actix_web::test]
    async fn empty_url_is_bad_request() {
        let (scraper, output) = app_data();
        let app = test::init_service(
            App::new()
                .app_data(scraper)
                .app_data(output)
                .service(web::scope("/profile").service(get_profile)),
        )
        .await;

        let req = test::TestRequest::get().uri("/profile?url=%20").to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn profile_is_persisted_when_enabled() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<title>Acme</title>"))
            .mount(&server)
            .await;

        let dir = tempfile::tempdir().unwrap();
        let (scraper, _) = app_data();
        let output = web::Data::new(OutputSettings {
            directory: dir.path().to_string_lossy().into_owned(),
            file_name: "company.json".to_string(),
            persist: true,
        });
        let app = test::init_service(
            App::new()
                .app_data(scraper)
                .app_data(output)
                .service(web::scope("/profile").service(get_profile)),
        )
        .await;

        let req = test::TestRequest::get()
            .uri(&format!("/profile?url={}", server.uri()))
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::OK);
        let saved: serde_json::Value = serde_json::from_str(
            &std::fs::read_to_string(dir.path().join("company.json")).unwrap(),
        )
        .unwrap();
        assert_eq!(saved["identity"]["company_name"], "Acme");
    }

    #[actix_web::test]
    async fn download_sets_attachment_header() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<title>Acme</title>"))
            .mount(&server)
            .await;

        let (scraper, output) = app_data();
        let app = test::init_service(
            App::new()
                .app_data(scraper)
                .app_data(output)
                .service(web::scope("/profile").service(download_profile)),
        )
        .await;

        let req = test::TestRequest::get()
            .uri(&format!("/profile/download?url={}", server.uri()))
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(
            res.headers().get("content-disposition").unwrap(),
            "attachment; filename=\"company_profile.json\""
        );
        let body: serde_json::Value = test::read_body_json(res).await;
        assert_eq!(body["identity"]["company_name"], "Acme");
    }
}
