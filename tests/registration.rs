//! Startup registration posts the `/prices` descriptor to the guild commands endpoint.
mod common;

use axum::http::{Method, StatusCode};
use common::StubServer;
use lostark_market_bot::commands;
use serenity::http::HttpBuilder;
use serenity::model::id::{ApplicationId, GuildId};

#[tokio::test]
async fn install_posts_each_command_once() {
    // The stub's reply is not a full command object; only the request matters here.
    let stub = StubServer::start(StatusCode::OK, "{}").await;
    let http = HttpBuilder::new("test-token")
        .proxy(stub.base_url.clone())
        .application_id(ApplicationId::new(975786445338812436))
        .ratelimiter_disabled(true)
        .build();

    let _ = commands::install(&http, GuildId::new(975786445338812400)).await;

    let requests = stub.requests();
    assert_eq!(requests.len(), 1);
    let request = &requests[0];
    assert_eq!(request.method, Method::POST);
    assert!(
        request
            .uri
            .path()
            .ends_with("/applications/975786445338812436/guilds/975786445338812400/commands"),
        "unexpected path {}",
        request.uri.path()
    );

    let body: serde_json::Value =
        serde_json::from_slice(&request.body).expect("registration body is JSON");
    let expected =
        serde_json::to_value(commands::prices::register()).expect("descriptor serializes");
    assert_eq!(body, expected);
}

#[test]
fn all_lists_the_prices_command() {
    let names: Vec<String> = commands::all()
        .into_iter()
        .map(|command| {
            serde_json::to_value(command).expect("descriptor serializes")["name"]
                .as_str()
                .unwrap_or_default()
                .to_string()
        })
        .collect();
    assert_eq!(names, ["prices"]);
}
