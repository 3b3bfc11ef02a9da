#[macro_use]
extern crate rocket;

pub mod api;
pub mod db;
pub mod utils;

#[cfg(test)]
#[cfg(not(tarpaulin_include))]
#[ctor::ctor]
fn init() {
    crate::utils::logging::setup_console_log();
}

pub(crate) mod misc {
    use rocket::serde::json::Json;
    use utoipa::OpenApi;

    #[derive(OpenApi)]
    #[openapi(info(
        title = "Clanmark API",
        description = r"## Main API documentation

Bookmark lists of posts, one per user. Requests are made on behalf of the user
named by the session header (`X-User-Id` by default).
    ",
        version = "1.0"
    ))]
    pub struct ApiDoc;

    pub fn openapi() -> utoipa::openapi::OpenApi {
        use crate::api::bookmark;

        let mut doc = ApiDoc::openapi();
        doc.merge(bookmark::misc::ApiDoc::openapi());
        doc
    }

    #[get("/api-docs/openapi.json")]
    fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
        Json(openapi())
    }

    pub fn docs() -> Vec<rocket::Route> {
        routes![openapi_json]
    }
}

/// Assemble the application on top of the given configuration.
pub fn build(figment: rocket::figment::Figment) -> rocket::Rocket<rocket::Build> {
    use rocket::fairing::AdHoc;

    use crate::api::configs::Config;
    use crate::api::fairings;
    use crate::api::{bookmark, catchers};

    rocket::custom(figment)
        .attach(fairings::db::init())
        .mount("/api/bookmarks", bookmark::routes())
        .mount("/", misc::docs())
        .register("/", catchers::catchers())
        .attach(AdHoc::config::<Config>())
}

#[cfg(test)]
mod test {
    use super::*;

    use clanmark_types::Message;
    use rocket::http::Status;
    use rocket::local::asynchronous;

    #[rocket::async_test]
    async fn serve_openapi_document() {
        let client = asynchronous::Client::tracked(build(api::configs::config_provider()))
            .await
            .expect("valid rocket instance");

        let response = client.get("/api-docs/openapi.json").dispatch().await;
        assert_eq!(response.status(), Status::Ok);
        let body = response.into_string().await.unwrap();
        assert!(body.contains("Clanmark API"));
        assert!(body.contains("/api/bookmarks/{post_id}"));
    }

    #[rocket::async_test]
    async fn mounted_under_api_prefix() {
        let client = asynchronous::Client::tracked(build(api::configs::config_provider()))
            .await
            .expect("valid rocket instance");

        // unknown user in a fresh reference database
        let response = client
            .get("/api/bookmarks")
            .header(rocket::http::Header::new("X-User-Id", "1"))
            .dispatch()
            .await;
        assert_eq!(response.status(), Status::Unauthorized);
        let body: Message = response.into_json().await.unwrap();
        assert_eq!(body.message, "Unknown user");
    }
}
