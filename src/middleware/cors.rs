use actix_cors::Cors;
use actix_web::http::{header, Method};

/// Cross-origin policy: only `allowed_origin` may call the API from a browser
pub fn cors(allowed_origin: &str) -> Cors {
    Cors::default()
        .allowed_origin(allowed_origin)
        .allowed_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_any_header()
        .expose_headers([header::HeaderName::from_static(super::REQUEST_ID_HEADER)])
        .max_age(3600)
}
