#![cfg(feature = "server")]

use actix_web::http::{StatusCode, header};
use actix_web::{App, test, web};
use serde_json::{Value, json};

use catalogue_admin::repository::DieselRepository;
use catalogue_admin::routes;

mod common;

macro_rules! app {
    ($db:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new(DieselRepository::new($db.pool())))
                .configure(routes::configure),
        )
        .await
    };
}

#[actix_web::test]
async fn create_category_returns_location_and_id() {
    let test_db = common::TestDb::new();
    let app = app!(test_db);

    let req = test::TestRequest::post()
        .uri("/categories")
        .set_json(json!({
            "name": "Filmes",
            "description": "A categoria mais assistida",
            "is_active": true
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::CREATED);
    let location = resp
        .headers()
        .get(header::LOCATION)
        .expect("location header")
        .to_str()
        .unwrap()
        .to_string();
    let body: Value = test::read_body_json(resp).await;
    let id = body["id"].as_str().expect("id in body");
    assert_eq!(location, format!("/categories/{id}"));

    let req = test::TestRequest::get().uri(&location).to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["id"], id);
    assert_eq!(body["name"], "Filmes");
    assert_eq!(body["description"], "A categoria mais assistida");
    assert_eq!(body["is_active"], true);
    assert!(body["deleted_at"].is_null());
    assert!(body["updated_at"].is_string());
}

#[actix_web::test]
async fn create_category_without_name_is_unprocessable() {
    let test_db = common::TestDb::new();
    let app = app!(test_db);

    let req = test::TestRequest::post()
        .uri("/categories")
        .set_json(json!({ "description": "Sem nome" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "'name' should not be null");
    assert_eq!(
        body["errors"],
        json!([{ "message": "'name' should not be null" }])
    );
}

#[actix_web::test]
async fn get_unknown_category_is_not_found() {
    let test_db = common::TestDb::new();
    let app = app!(test_db);

    let req = test::TestRequest::get().uri("/categories/123").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Category with ID 123 was not found");
    assert_eq!(body["errors"], json!([]));
}

#[actix_web::test]
async fn update_and_delete_category() {
    let test_db = common::TestDb::new();
    let app = app!(test_db);

    let req = test::TestRequest::post()
        .uri("/categories")
        .set_json(json!({ "name": "Film" }))
        .to_request();
    let created: Value = test::call_and_read_body_json(&app, req).await;
    let uri = format!("/categories/{}", created["id"].as_str().unwrap());

    let req = test::TestRequest::put()
        .uri(&uri)
        .set_json(json!({ "name": "Filmes", "is_active": false }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["id"], created["id"]);

    let req = test::TestRequest::get().uri(&uri).to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["name"], "Filmes");
    assert_eq!(body["is_active"], false);
    assert!(body["deleted_at"].is_string());

    let req = test::TestRequest::put()
        .uri(&uri)
        .set_json(json!({ "name": "ab" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let req = test::TestRequest::delete().uri(&uri).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let req = test::TestRequest::delete().uri(&uri).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let req = test::TestRequest::get().uri(&uri).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn update_unknown_category_is_not_found() {
    let test_db = common::TestDb::new();
    let app = app!(test_db);

    let req = test::TestRequest::put()
        .uri("/categories/123")
        .set_json(json!({ "name": "Filmes" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn list_categories_defaults_and_search() {
    let test_db = common::TestDb::new();
    let app = app!(test_db);

    let req = test::TestRequest::get().uri("/categories").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(
        body,
        json!({ "current_page": 0, "per_page": 10, "total": 0, "items": [] })
    );

    for name in ["Filmes", "Series", "Documentarios"] {
        let req = test::TestRequest::post()
            .uri("/categories")
            .set_json(json!({ "name": name }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
    }

    let req = test::TestRequest::get()
        .uri("/categories?search=ries&perPage=5&sort=name&dir=desc")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["per_page"], 5);
    assert_eq!(body["total"], 1);
    assert_eq!(body["items"][0]["name"], "Series");
    assert!(body["items"][0].get("updated_at").is_none());

    let req = test::TestRequest::get()
        .uri("/categories?sort=name&dir=desc&perPage=2&page=1")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["total"], 3);
    assert_eq!(body["items"].as_array().unwrap().len(), 1);
    assert_eq!(body["items"][0]["name"], "Documentarios");
}

#[actix_web::test]
async fn list_categories_rejects_invalid_params() {
    let test_db = common::TestDb::new();
    let app = app!(test_db);

    for uri in [
        "/categories?sort=colour",
        "/categories?dir=sideways",
        "/categories?perPage=0",
        "/categories?perPage=1001",
    ] {
        let req = test::TestRequest::get().uri(uri).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "{uri}");
    }
}
