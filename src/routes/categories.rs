use actix_web::http::{StatusCode, header};
use actix_web::{HttpResponse, Responder, delete, get, post, put, web};

use crate::domain::category::CategorySearchQuery;
use crate::domain::types::CategoryId;
use crate::forms::categories::{
    CreateCategoryRequest, ListCategoriesParams, UpdateCategoryRequest,
};
use crate::repository::DieselRepository;
use crate::routes::{error_response, service_error_response, unprocessable};
use crate::services::categories::{
    create_category as create_category_service, delete_category as delete_category_service,
    get_category_by_id as get_category_service, list_categories as list_categories_service,
    update_category as update_category_service,
};

#[post("/categories")]
pub async fn create_category(
    repo: web::Data<DieselRepository>,
    web::Json(request): web::Json<CreateCategoryRequest>,
) -> impl Responder {
    create_category_service(request.into(), repo.get_ref()).map_or_else(unprocessable, |output| {
        HttpResponse::Created()
            .insert_header((header::LOCATION, format!("/categories/{}", output.id)))
            .json(output)
    })
}

#[get("/categories")]
pub async fn list_categories(
    repo: web::Data<DieselRepository>,
    params: web::Query<ListCategoriesParams>,
) -> impl Responder {
    let query: CategorySearchQuery = match params.into_inner().try_into() {
        Ok(query) => query,
        Err(e) => return error_response(StatusCode::BAD_REQUEST, e.to_string()),
    };

    match list_categories_service(&query, repo.get_ref()) {
        Ok(page) => HttpResponse::Ok().json(page),
        Err(err) => service_error_response(err),
    }
}

#[get("/categories/{id}")]
pub async fn get_category(
    id: web::Path<String>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let id = CategoryId::from(id.into_inner());
    match get_category_service(&id, repo.get_ref()) {
        Ok(category) => HttpResponse::Ok().json(category),
        Err(err) => service_error_response(err),
    }
}

#[put("/categories/{id}")]
pub async fn update_category(
    id: web::Path<String>,
    repo: web::Data<DieselRepository>,
    web::Json(request): web::Json<UpdateCategoryRequest>,
) -> impl Responder {
    match update_category_service(request.into_command(id.into_inner()), repo.get_ref()) {
        Ok(Ok(output)) => HttpResponse::Ok().json(output),
        Ok(Err(notification)) => unprocessable(notification),
        Err(err) => service_error_response(err),
    }
}

#[delete("/categories/{id}")]
pub async fn delete_category(
    id: web::Path<String>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let id = CategoryId::from(id.into_inner());
    match delete_category_service(&id, repo.get_ref()) {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(err) => service_error_response(err),
    }
}
