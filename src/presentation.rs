use actix_web::{get, http::Method, HttpRequest, HttpResponse, Responder};

use crate::shared::api::ApiResponse;

const INDEX_HTML: &str = include_str!("../static/index.html");

fn index_page() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(INDEX_HTML)
}

#[get("/")]
pub async fn index() -> impl Responder {
    index_page()
}

/// Unmatched routes. Browser navigation gets the page, API calls get a
/// JSON 404.
pub async fn fallback(req: HttpRequest) -> HttpResponse {
    let path = req.path();
    let is_api = path == "/api" || path.starts_with("/api/");

    if req.method() == Method::GET && !is_api {
        return index_page();
    }

    ApiResponse::not_found(
        "ROUTE_NOT_FOUND",
        &format!("No route for {} {}", req.method(), path),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, web, App};
    use serde_json::Value;

    #[actix_web::test]
    async fn root_serves_the_page() {
        let app = test::init_service(App::new().service(index)).await;

        let req = test::TestRequest::get().uri("/").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body = test::read_body(resp).await;
        assert!(std::str::from_utf8(&body).unwrap().contains("<!DOCTYPE html>"));
    }

    #[actix_web::test]
    async fn unknown_page_paths_fall_back_to_the_page() {
        let app =
            test::init_service(App::new().default_service(web::route().to(fallback))).await;

        let req = test::TestRequest::get().uri("/blog/some-post").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            resp.headers().get("content-type").unwrap(),
            "text/html; charset=utf-8"
        );
    }

    #[actix_web::test]
    async fn unknown_api_paths_are_json_404() {
        let app =
            test::init_service(App::new().default_service(web::route().to(fallback))).await;

        let req = test::TestRequest::get().uri("/api/nope").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: Value = test::read_body_json(resp).await;
        assert!(body["error"].is_string());
        assert_eq!(body["code"], "ROUTE_NOT_FOUND");
    }

    #[actix_web::test]
    async fn non_get_on_page_paths_is_404() {
        let app =
            test::init_service(App::new().default_service(web::route().to(fallback))).await;

        let req = test::TestRequest::post().uri("/about").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
