pub mod inquiries;
pub mod portfolio;
pub mod site;

use actix_web::{HttpResponse, error, web};

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config());
    cfg.app_data(path_config());

    // ── Portfolio routes (reads public, writes require the admin password) ──
    cfg.service(
        web::resource("/portfolio")
            .route(web::get().to(portfolio::get_portfolios))
            .route(web::post().to(portfolio::create_portfolio)),
    );
    cfg.service(
        web::resource("/portfolio/{id}")
            .route(web::get().to(portfolio::get_portfolio))
            .route(web::delete().to(portfolio::delete_portfolio)),
    );

    // ── Inquiry routes ──
    cfg.service(web::resource("/inquiries").route(web::post().to(inquiries::submit_inquiry)));
    cfg.service(
        web::scope("/admin").route("/inquiries", web::post().to(inquiries::list_inquiries)),
    );
}

/// Report malformed JSON bodies with the same `{"error": ...}` shape as every other failure.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        let response = HttpResponse::BadRequest().json(serde_json::json!({
            "error": format!("Invalid JSON body: {err}"),
        }));
        error::InternalError::from_response(err, response).into()
    })
}

/// Unparseable path segments (e.g. a non-numeric id) are reported as a JSON 404.
///
/// Path extraction runs before any handler, so this applies to DELETE too:
/// an id that can never exist is not found, whatever the credential.
pub fn path_config() -> web::PathConfig {
    web::PathConfig::default().error_handler(|err, req| {
        let response = HttpResponse::NotFound().json(serde_json::json!({
            "error": format!("Not found: {}", req.path()),
        }));
        error::InternalError::from_response(err, response).into()
    })
}
