//! Generic HTTP handlers for a resource family
//!
//! | Verb + path                       | Success     | Empty |
//! |-----------------------------------|-------------|-------|
//! | GET    /api/{res}[?{param}=text]  | 200 + list  | 204   |
//! | GET    /api/{res}/{id}            | 200 + row   | 204   |
//! | POST   /api/{res}                 | 200 + saved |       |
//! | PUT    /api/{res}/{id}            | 200 + saved |       |
//! | DELETE /api/{res}/deletion/{id}   | 200         | 204   |
//! | DELETE /api/{res}/all             | 200         |       |
//!
//! Any failure is logged and answered with a bodiless 500.

use std::collections::HashMap;

use actix_web::{web, HttpResponse, Scope};
use tracing::{error, warn};

use crate::core::crud::CrudService;
use crate::core::resource::Resource;
use crate::core::AppError;

/// Log a failed operation before it is turned into a 500
fn logged<E: Resource>(operation: &'static str) -> impl FnOnce(AppError) -> AppError {
    move |err| {
        error!(resource = E::PATH, operation, error = %err, "Request failed");
        err
    }
}

fn rows_or_no_content<E: Resource>(rows: Vec<E>) -> HttpResponse {
    if rows.is_empty() {
        HttpResponse::NoContent().finish()
    } else {
        HttpResponse::Ok().json(rows)
    }
}

/// List all rows, or search when the resource's query parameter is present
///
/// An empty parameter value still searches (and matches every row).
pub async fn list<E: Resource>(
    service: web::Data<CrudService<E>>,
    query: web::Query<HashMap<String, String>>,
) -> Result<HttpResponse, AppError> {
    let rows = match query.get(E::SEARCH_PARAM) {
        None => service.find_all().await,
        Some(text) => service.find_all_containing(text).await,
    }
    .map_err(logged::<E>("list"))?;

    Ok(rows_or_no_content(rows))
}

pub async fn get<E: Resource>(
    service: web::Data<CrudService<E>>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let row = service
        .find_by_id(path.into_inner())
        .await
        .map_err(logged::<E>("get"))?;

    Ok(match row {
        Some(row) => HttpResponse::Ok().json(row),
        None => HttpResponse::NoContent().finish(),
    })
}

pub async fn create<E: Resource>(
    service: web::Data<CrudService<E>>,
    body: web::Json<E>,
) -> Result<HttpResponse, AppError> {
    let saved = service
        .save(body.into_inner())
        .await
        .map_err(logged::<E>("create"))?;

    Ok(HttpResponse::Ok().json(saved))
}

/// Saves the body as-is; the path id does not override the body id
pub async fn update<E: Resource>(
    service: web::Data<CrudService<E>>,
    path: web::Path<i64>,
    body: web::Json<E>,
) -> Result<HttpResponse, AppError> {
    let path_id = path.into_inner();
    let entity = body.into_inner();

    if entity.id() != Some(path_id) {
        warn!(
            resource = E::PATH,
            path_id,
            body_id = ?entity.id(),
            "Path id differs from body id, saving body id"
        );
    }

    let saved = service
        .save(entity)
        .await
        .map_err(logged::<E>("update"))?;

    Ok(HttpResponse::Ok().json(saved))
}

pub async fn remove<E: Resource>(
    service: web::Data<CrudService<E>>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let removed = service
        .remove_by_id(path.into_inner())
        .await
        .map_err(logged::<E>("remove"))?;

    Ok(if removed {
        HttpResponse::Ok().finish()
    } else {
        HttpResponse::NoContent().finish()
    })
}

pub async fn remove_all<E: Resource>(
    service: web::Data<CrudService<E>>,
) -> Result<HttpResponse, AppError> {
    service
        .remove_all()
        .await
        .map_err(logged::<E>("remove_all"))?;

    Ok(HttpResponse::Ok().finish())
}

/// Routes for one resource family, mounted under `/{E::PATH}`
pub fn resource_scope<E: Resource>(service: web::Data<CrudService<E>>) -> Scope {
    web::scope(&format!("/{}", E::PATH))
        .app_data(service)
        .route("", web::get().to(list::<E>))
        .route("", web::post().to(create::<E>))
        .route("/all", web::delete().to(remove_all::<E>))
        .route("/deletion/{id}", web::delete().to(remove::<E>))
        .route("/{id}", web::get().to(get::<E>))
        .route("/{id}", web::put().to(update::<E>))
}
