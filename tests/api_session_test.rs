//! Integration tests for the session lifecycle API endpoints

mod test_utils;

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use chrono::Utc;
    use serde_json::{Value, json};
    use tower::util::ServiceExt;

    use crate::test_utils::{FakeBackend, body_to_string, empty_request, json_request, test_app_with};

    /// Tests creating a session issues a new ID each time
    #[tokio::test]
    async fn it_creates_sessions() {
        let (app, state) = test_app_with(&FakeBackend::default(), Some("test-api-key"));

        let mut ids = Vec::new();
        for _ in 0..2 {
            let response = app
                .clone()
                .oneshot(empty_request("POST", "/api/session"))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::OK);
            let body: Value =
                serde_json::from_str(&body_to_string(response.into_body()).await).unwrap();
            ids.push(body["session_id"].as_str().unwrap().to_string());
        }

        assert_ne!(ids[0], ids[1]);
        assert_eq!(state.read().unwrap().sessions.len(), 2);

        // The new session starts with defaults
        let response = app
            .oneshot(empty_request("GET", &format!("/api/settings/{}", ids[0])))
            .await
            .unwrap();
        let body: Value =
            serde_json::from_str(&body_to_string(response.into_body()).await).unwrap();
        assert_eq!(body["language"], "English");
        assert_eq!(body["feature_level"], 1);
    }

    /// Tests ending a session discards it
    #[tokio::test]
    async fn it_ends_sessions() {
        let (app, state) = test_app_with(&FakeBackend::default(), Some("test-api-key"));

        app.clone()
            .oneshot(json_request(
                "POST",
                "/api/chat",
                json!({"session_id": "s1", "message": "Hello"}),
            ))
            .await
            .unwrap();
        assert!(state.read().unwrap().session("s1").is_some());

        let response = app
            .clone()
            .oneshot(empty_request("DELETE", "/api/session/s1"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
        assert!(state.read().unwrap().session("s1").is_none());

        let response = app
            .clone()
            .oneshot(empty_request("DELETE", "/api/session/s1"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = app
            .oneshot(empty_request("GET", "/api/chat/s1"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    /// Tests idle sessions are expired while active ones are kept
    #[tokio::test]
    async fn it_expires_idle_sessions() {
        let (app, state) = test_app_with(&FakeBackend::default(), Some("test-api-key"));

        for id in ["idle", "active"] {
            app.clone()
                .oneshot(json_request(
                    "POST",
                    "/api/chat",
                    json!({"session_id": id, "message": "Hello"}),
                ))
                .await
                .unwrap();
        }

        let idle = state.read().unwrap().session("idle").unwrap();
        idle.lock().await.last_active = Utc::now() - chrono::Duration::hours(2);

        let expired = state.write().unwrap().expire_idle_sessions(Utc::now());

        assert_eq!(expired, 1);
        assert!(state.read().unwrap().session("idle").is_none());
        assert!(state.read().unwrap().session("active").is_some());
    }
}
