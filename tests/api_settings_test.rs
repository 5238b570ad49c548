//! Integration tests for the settings, analytics, and voice API endpoints

mod test_utils;

#[cfg(test)]
mod tests {
    use axum::Router;
    use axum::http::StatusCode;
    use serde_json::{Value, json};
    use tower::util::ServiceExt;

    use crate::test_utils::{FakeBackend, body_to_string, empty_request, json_request, test_app_with};

    fn app_with_session() -> (Router, FakeBackend) {
        let backend = FakeBackend::default();
        let (app, state) = test_app_with(&backend, Some("test-api-key"));
        state.write().unwrap().get_or_create_session("s1");
        (app, backend)
    }

    async fn json_body(response: axum::response::Response) -> Value {
        serde_json::from_str(&body_to_string(response.into_body()).await).unwrap()
    }

    /// Tests updating language and feature level
    #[tokio::test]
    async fn it_updates_settings() {
        let (app, _backend) = app_with_session();

        let response = app
            .clone()
            .oneshot(json_request(
                "PUT",
                "/api/settings/s1",
                json!({"language": "Spanish", "feature_level": 2}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["language"], "Spanish");
        assert_eq!(body["feature_level"], 2);
        assert_eq!(body["feature_label"], "Level 2: Enhanced");

        // Partial updates leave the other field alone
        let response = app
            .oneshot(json_request(
                "PUT",
                "/api/settings/s1",
                json!({"feature_level": 3}),
            ))
            .await
            .unwrap();
        let body = json_body(response).await;
        assert_eq!(body["language"], "Spanish");
        assert_eq!(body["feature_level"], 3);
    }

    /// Tests invalid settings are rejected without changing anything
    #[tokio::test]
    async fn it_rejects_invalid_settings() {
        let (app, _backend) = app_with_session();

        let response = app
            .clone()
            .oneshot(json_request(
                "PUT",
                "/api/settings/s1",
                json!({"language": "German"}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = app
            .clone()
            .oneshot(json_request(
                "PUT",
                "/api/settings/s1",
                json!({"language": "French", "feature_level": 4}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = app
            .oneshot(empty_request("GET", "/api/settings/s1"))
            .await
            .unwrap();
        let body = json_body(response).await;
        assert_eq!(body["language"], "English");
        assert_eq!(body["feature_level"], 1);
    }

    /// Tests the selected language is used in the prompt, falling back
    /// to the English FAQ for French
    #[tokio::test]
    async fn it_uses_the_selected_language_in_the_prompt() {
        let (app, backend) = app_with_session();

        app.clone()
            .oneshot(json_request(
                "PUT",
                "/api/settings/s1",
                json!({"language": "French"}),
            ))
            .await
            .unwrap();
        app.oneshot(json_request(
            "POST",
            "/api/chat",
            json!({"session_id": "s1", "message": "Bonjour"}),
        ))
        .await
        .unwrap();

        let sent = backend.sent();
        assert!(sent[0].contains("Language: French."));
        assert!(sent[0].contains("Q: Where is the office?"));
    }

    /// Tests analytics count queries and report the active level
    #[tokio::test]
    async fn it_reports_analytics() {
        let (app, _backend) = app_with_session();

        for msg in ["one", "two"] {
            app.clone()
                .oneshot(json_request(
                    "POST",
                    "/api/chat",
                    json!({"session_id": "s1", "message": msg}),
                ))
                .await
                .unwrap();
        }
        app.clone()
            .oneshot(json_request(
                "PUT",
                "/api/settings/s1",
                json!({"feature_level": 2}),
            ))
            .await
            .unwrap();

        let response = app
            .clone()
            .oneshot(empty_request("GET", "/api/analytics/s1"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["total_queries"], 2);
        assert_eq!(body["active_level"], "L2");
        let started: chrono::DateTime<chrono::Utc> =
            serde_json::from_value(body["session_started"].clone()).unwrap();
        assert!(started <= chrono::Utc::now());

        let response = app
            .oneshot(empty_request("GET", "/api/analytics/unknown"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    /// Tests voice is only available at level 3
    #[tokio::test]
    async fn it_gates_voice_on_feature_level() {
        let (app, _backend) = app_with_session();

        let response = app
            .clone()
            .oneshot(empty_request("GET", "/api/voice/s1"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
        let body = body_to_string(response.into_body()).await;
        assert_eq!(body, "Please enable Level 3 to access Voice Features.");

        app.clone()
            .oneshot(json_request(
                "PUT",
                "/api/settings/s1",
                json!({"feature_level": 3}),
            ))
            .await
            .unwrap();

        let response = app
            .oneshot(empty_request("GET", "/api/voice/s1"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["status"], "Ready to receive voice input...");
    }
}
