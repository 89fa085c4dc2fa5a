//! Schema handler — `GET /asyncapi.json`.

use axum::extract::State;

use crate::compose::{compose, ResponseDocument};

use super::AppState;

/// `GET /asyncapi.json`
///
/// Fetches the schema from the service and returns it. On any failure the
/// body is an error document and the status is still 200.
pub async fn asyncapi_json(State(state): State<AppState>) -> ResponseDocument {
    let outcome = state.bridge.fetch_schema().await;
    compose(outcome, state.bridge.address())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
    };
    use http_body_util::BodyExt;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::{
        bus::memory::{MemoryBus, Responder},
        bus::MessageBus,
        config::ViewerConfig,
        router::build_router,
    };

    const ROOT: &str = "master.service-staging";
    const SUBJECT: &str = "master.service-staging.schema.RETRIEVE";

    fn build_app(bus: &Arc<MemoryBus>) -> axum::Router {
        build_router(Arc::clone(bus) as Arc<dyn MessageBus>, ViewerConfig::new(ROOT))
    }

    async fn get(app: axum::Router, uri: &str) -> (StatusCode, Option<String>, Vec<u8>) {
        let req = Request::builder().uri(uri).body(Body::empty()).unwrap();
        let resp = app.oneshot(req).await.unwrap();
        let status = resp.status();
        let content_type = resp
            .headers()
            .get(header::CONTENT_TYPE)
            .map(|v| v.to_str().unwrap().to_string());
        let body = resp.into_body().collect().await.unwrap().to_bytes().to_vec();
        (status, content_type, body)
    }

    #[tokio::test]
    async fn schema_is_served_verbatim() {
        let bus = Arc::new(MemoryBus::new());
        let schema = json!({ "info": { "title": "X" }, "channels": { "a": 1 } });
        bus.respond(SUBJECT, Responder::json(&json!({ "result": schema })));

        let (status, content_type, body) = get(build_app(&bus), "/asyncapi.json").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(content_type.as_deref(), Some("application/json"));
        let v: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(v, schema);
    }

    #[tokio::test]
    async fn timeout_yields_error_document_with_200() {
        let bus = Arc::new(MemoryBus::new());
        bus.respond(SUBJECT, Responder::Silent);

        let (status, _, body) = get(build_app(&bus), "/asyncapi.json").await;
        assert_eq!(status, StatusCode::OK);
        let v: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(v["info"]["title"], "ERROR");
        assert_eq!(v["channels"], json!({}));
        assert!(v["info"]["description"]
            .as_str()
            .unwrap()
            .contains("timed out"));
    }

    #[tokio::test]
    async fn null_result_yields_error_document_with_200() {
        let bus = Arc::new(MemoryBus::new());
        bus.respond(SUBJECT, Responder::json(&json!({ "jsonrpc": "2.0", "result": null })));

        let (status, _, body) = get(build_app(&bus), "/asyncapi.json").await;
        assert_eq!(status, StatusCode::OK);
        let v: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(v["info"]["title"], "ERROR");
        assert_eq!(v["channels"], json!({}));
    }

    #[tokio::test]
    async fn one_bus_request_per_http_request() {
        let bus = Arc::new(MemoryBus::new());
        bus.respond(SUBJECT, Responder::json(&json!({ "result": {} })));
        let app = build_app(&bus);

        get(app.clone(), "/asyncapi.json").await;
        get(app.clone(), "/asyncapi.json").await;
        get(app, "/").await;

        let subjects: Vec<String> = bus.requests().into_iter().map(|r| r.subject).collect();
        assert_eq!(subjects, vec![SUBJECT.to_string(), SUBJECT.to_string()]);
    }

    #[tokio::test]
    async fn same_reply_gives_identical_bodies() {
        let bus = Arc::new(MemoryBus::new());
        bus.respond(
            SUBJECT,
            Responder::json(&json!({
                "jsonrpc": "2.0",
                "id": "ad1f2612-4f11-4667-bf7d-d20c2b5c8285",
                "result": { "asyncapi": "2.0.0", "info": { "title": "svc" }, "channels": {} }
            })),
        );
        let app = build_app(&bus);

        let (_, _, first) = get(app.clone(), "/asyncapi.json").await;
        let (_, _, second) = get(app, "/asyncapi.json").await;
        assert_eq!(first, second);

        // The correlation id of the outbound request never leaks into the body.
        let log = bus.requests();
        let sent: Value = serde_json::from_slice(&log[0].payload).unwrap();
        let id = sent["id"].as_str().unwrap();
        assert!(!String::from_utf8(first).unwrap().contains(id));
    }

    #[tokio::test]
    async fn concurrent_requests_get_their_own_outcome() {
        let mut set = tokio::task::JoinSet::new();
        for i in 0..12 {
            let bus = Arc::new(MemoryBus::new());
            match i % 3 {
                0 => {
                    let schema = json!({ "info": { "title": format!("svc-{i}") }, "channels": {} });
                    bus.respond(SUBJECT, Responder::json(&json!({ "result": schema })));
                }
                1 => bus.respond(SUBJECT, Responder::Silent),
                _ => bus.respond(SUBJECT, Responder::json(&json!({ "jsonrpc": "2.0" }))),
            }
            let app = build_app(&bus);
            set.spawn(async move {
                let (status, _, body) = get(app, "/asyncapi.json").await;
                (i, status, serde_json::from_slice::<Value>(&body).unwrap())
            });
        }

        let mut seen = 0;
        while let Some(res) = set.join_next().await {
            let (i, status, v) = res.unwrap();
            assert_eq!(status, StatusCode::OK);
            let description = v["info"]["description"].as_str().unwrap_or_default();
            match i % 3 {
                0 => assert_eq!(v["info"]["title"], format!("svc-{i}")),
                1 => {
                    assert_eq!(v["info"]["title"], "ERROR");
                    assert!(description.contains("timed out"));
                }
                _ => {
                    assert_eq!(v["info"]["title"], "ERROR");
                    assert!(description.contains("not able to retrieve schema"));
                }
            }
            seen += 1;
        }
        assert_eq!(seen, 12);
    }

    #[tokio::test]
    async fn root_and_unknown_paths_serve_viewer_page() {
        let bus = Arc::new(MemoryBus::new());
        for uri in ["/", "/docs", "/some/other/path"] {
            let (status, content_type, body) = get(build_app(&bus), uri).await;
            assert_eq!(status, StatusCode::OK, "{uri}");
            assert!(content_type.unwrap().starts_with("text/html"));
            assert!(String::from_utf8(body).unwrap().contains("<redoc"));
        }
        assert!(bus.requests().is_empty());
    }
}
