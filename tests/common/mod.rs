#![allow(dead_code)]

use axum::{
    Router,
    body::Body,
    http::{Request, Response, header},
};
use http_body_util::BodyExt;
use nashikweb::{AppState, config::Config, create_app, email::EmailService};
use nashikweb_contact::{Command, store::MemoryStore};
use tower::ServiceExt;

pub struct TestApp {
    pub router: Router,
    pub state: AppState,
}

impl TestApp {
    pub async fn get(&self, uri: &str) -> Response<Body> {
        self.send(Request::get(uri).body(Body::empty()).unwrap())
            .await
    }

    pub async fn post_form(&self, uri: &str, fields: &[(&str, &str)]) -> Response<Body> {
        let body = serde_urlencoded::to_string(fields).unwrap();

        self.send(
            Request::post(uri)
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(body))
                .unwrap(),
        )
        .await
    }

    pub async fn post_json(&self, uri: &str, body: impl Into<String>) -> Response<Body> {
        self.send(
            Request::post(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.into()))
                .unwrap(),
        )
        .await
    }

    pub async fn send(&self, request: Request<Body>) -> Response<Body> {
        self.router.clone().oneshot(request).await.unwrap()
    }
}

pub fn create_test_app() -> TestApp {
    let state = AppState::new(Config::default(), Command::new(MemoryStore::new()));

    TestApp {
        router: create_app(state.clone()),
        state,
    }
}

pub fn create_test_app_with_email() -> (TestApp, EmailService) {
    let mut config = Config::default();
    config.email.enabled = true;
    config.email.notify_address = "owner@nashikwebdev.com".to_owned();

    create_test_app_with_email_config(config)
}

/// Same as [`create_test_app_with_email`] but with the caller's email settings.
pub fn create_test_app_with_email_config(config: Config) -> (TestApp, EmailService) {
    let email = EmailService::new_mock(&config.email).unwrap();
    let state = AppState::new(config, Command::new(MemoryStore::new())).with_email(email.clone());

    (
        TestApp {
            router: create_app(state.clone()),
            state,
        },
        email,
    )
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

pub async fn body_string(response: Response<Body>) -> String {
    String::from_utf8(body_bytes(response).await).unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

pub fn contact_fields<'a>(name: &'a str, service: &'a str) -> Vec<(&'a str, &'a str)> {
    vec![
        ("name", name),
        ("email", "priya.kulkarni@example.com"),
        ("phone", "+91 98765 43210"),
        ("service", service),
        ("message", "We run a bakery on Gangapur Road and need a website."),
    ]
}
