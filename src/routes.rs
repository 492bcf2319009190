use crate::{
    api::{attendance, member, report},
    config::Config,
};
use actix_governor::{
    Governor, GovernorConfig, GovernorConfigBuilder, PeerIpKeyExtractor,
    governor::middleware::NoOpMiddleware,
};
use actix_web::web;

pub fn configure(cfg: &mut web::ServiceConfig, config: Config) {
    // Helper to build per-scope limiter config
    fn build_limiter(requests_per_min: u32) -> GovernorConfig<PeerIpKeyExtractor, NoOpMiddleware> {
        let per_ms = if requests_per_min == 0 {
            1
        } else {
            60_000 / requests_per_min as u64
        };
        GovernorConfigBuilder::default()
            .per_millisecond(per_ms)
            .burst_size(requests_per_min)
            .key_extractor(PeerIpKeyExtractor)
            .finish()
            .unwrap()
    }

    let api_limiter = build_limiter(config.rate_api_per_min);

    cfg.service(
        web::scope(&config.api_prefix)
            .wrap(Governor::new(&api_limiter)) // rate limiting
            .service(
                web::scope("/member")
                    // /member
                    .service(
                        web::resource("")
                            .route(web::post().to(member::create_member))
                            .route(web::get().to(member::list_members)),
                    )
                    // /member/{id}
                    .service(
                        web::resource("/{id}")
                            .route(web::put().to(member::update_member))
                            .route(web::get().to(member::get_member))
                            .route(web::delete().to(member::delete_member)),
                    )
                    // /member/{id}/reports
                    .service(
                        web::resource("/{id}/reports")
                            .route(web::get().to(report::member_reports)),
                    )
                    // /member/{id}/attendance/{year}
                    .service(
                        web::resource("/{id}/attendance/{year}")
                            .route(web::get().to(attendance::year_report)),
                    )
                    // /member/{id}/attendance/{year}/{month}
                    .service(
                        web::resource("/{id}/attendance/{year}/{month}")
                            .route(web::get().to(attendance::month_report)),
                    ),
            )
            .service(
                web::scope("/report")
                    // /report
                    .service(
                        web::resource("")
                            .route(web::post().to(report::create_reports))
                            .route(web::get().to(report::list_reports)),
                    )
                    // /report/{id}
                    .service(
                        web::resource("/{id}")
                            .route(web::put().to(report::update_report))
                            .route(web::get().to(report::get_report))
                            .route(web::delete().to(report::delete_report)),
                    ),
            )
            .service(
                web::scope("/attendance")
                    // /attendance/{year}
                    .service(
                        web::resource("/{year}")
                            .route(web::get().to(attendance::fleet_report)),
                    ),
            ),
    );
}
