use serde_json::json;
use sherlock_core::RelayPayload;
use sherlock_engine::{FailureKind, ForwardSettings, ReqwestUpstream, Upstream};
use wiremock::matchers::{body_json, method};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn payload() -> RelayPayload {
    RelayPayload {
        usernames: vec!["bob".to_string()],
        sites: vec!["A".to_string(), "B".to_string()],
        f: vec!["nsfw".to_string()],
    }
}

#[tokio::test]
async fn forward_passes_status_and_body_through() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(body_json(json!({ "usernames": ["bob"], "sites": ["A", "B"], "f": ["nsfw"] })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw(r#"[{"name":"A","link":"https://a"}]"#, "application/json"),
        )
        .expect(1)
        .mount(&server)
        .await;

    let upstream = ReqwestUpstream::new(ForwardSettings {
        upstream_url: server.uri(),
        ..ForwardSettings::default()
    });
    let reply = upstream.forward(&payload()).await.expect("forward ok");

    assert_eq!(reply.status, 200);
    assert_eq!(reply.content_type.as_deref(), Some("application/json"));
    assert_eq!(&reply.body[..], br#"[{"name":"A","link":"https://a"}]"#);
}

#[tokio::test]
async fn forward_does_not_treat_error_status_as_failure() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(422).set_body_string(r#"{"detail":"bad"}"#))
        .mount(&server)
        .await;

    let upstream = ReqwestUpstream::new(ForwardSettings {
        upstream_url: server.uri(),
        ..ForwardSettings::default()
    });
    let reply = upstream.forward(&payload()).await.expect("passthrough");

    assert_eq!(reply.status, 422);
    assert_eq!(&reply.body[..], br#"{"detail":"bad"}"#);
}

#[tokio::test]
async fn forward_reports_unreachable_upstream() {
    let server = MockServer::start().await;
    let upstream_url = server.uri();
    drop(server);

    let upstream = ReqwestUpstream::new(ForwardSettings {
        upstream_url,
        ..ForwardSettings::default()
    });
    let err = upstream.forward(&payload()).await.unwrap_err();
    assert_eq!(err.kind, FailureKind::Network);
}
