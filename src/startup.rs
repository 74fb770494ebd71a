use std::net::TcpListener;

use actix_web::{dev::Server, middleware::Logger, web, App, HttpServer};

use crate::{
    configuration::OutputSettings,
    routes::{default_route, profile_route, scraper_route},
    services::CompanyScraper,
};

pub fn run(
    listener: TcpListener,
    company_scraper: CompanyScraper,
    output: OutputSettings,
) -> Result<Server, std::io::Error> {
    let company_scraper = web::Data::new(company_scraper);
    let output = web::Data::new(output);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .service(default_route::default)
            .service(
                web::scope("/profile")
                    .service(profile_route::download_profile)
                    .service(profile_route::get_profile),
            )
            .service(web::scope("/app").service(scraper_route::scraper))
            .app_data(company_scraper.clone())
            .app_data(output.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}
