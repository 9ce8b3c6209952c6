use std::sync::Arc;

use axum::extract::State;
use axum::http::{Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;
use tracing::{debug, error};

use crate::config::{ServerConfig, ASSET_NAMESPACES};
use crate::store::SceneStore;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<SceneStore>,
}

pub fn router(state: AppState, config: &ServerConfig) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_headers(Any)
        .allow_methods([Method::GET, Method::OPTIONS]);

    let mut app = Router::new()
        .route("/healthz", get(healthz))
        .route("/api/data", get(get_scenes));

    for name in ASSET_NAMESPACES {
        app = app.nest_service(
            &format!("/{name}"),
            ServeDir::new(config.asset_root.join(name)),
        );
    }

    // Anything else is the single-page front-end.
    let index = config.public_root.join("index.html");
    let public = ServeDir::new(&config.public_root).fallback(ServeFile::new(index));

    app.fallback_service(public)
        .layer(CompressionLayer::new())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn healthz() -> Response {
    (StatusCode::OK, "ok").into_response()
}

async fn get_scenes(State(state): State<AppState>) -> Response {
    match state.store.find().await {
        Ok(scenes) => {
            debug!("serving {} scenes", scenes.len());
            Json(scenes).into_response()
        }
        Err(err) => {
            error!("scene query failed: {err}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "error fetching scene data" })),
            )
                .into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request};
    use tower::ServiceExt;
    use tour_core::{Position, SceneRecord, SpotRecord, SpotType};

    async fn body_json(resp: Response) -> serde_json::Value {
        let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn api_data_returns_stored_scenes() {
        let dir = tempfile::tempdir().unwrap();
        let store = SceneStore::new(dir.path().join("scenes.json"));
        store
            .insert_many(vec![SceneRecord {
                id: "lobby".into(),
                src: "/img/lobby.jpg".into(),
                spots: vec![SpotRecord {
                    kind: Some(SpotType::Hotspot),
                    position: Some(Position::new(1.0, 0.0, -2.0)),
                    target: Some("garden".into()),
                    ..Default::default()
                }
                .with_store_defaults()],
            }])
            .await
            .unwrap();

        let state = AppState {
            store: Arc::new(store),
        };
        let resp = get_scenes(State(state)).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body = body_json(resp).await;
        assert_eq!(body[0]["id"], "lobby");
        assert_eq!(body[0]["spots"][0]["type"], "hotspot");
        assert_eq!(body[0]["spots"][0]["position"]["z"], -2.0);
        assert_eq!(body[0]["spots"][0]["size"], 50.0);
        assert!(body[0]["spots"][0]["contentType"].is_null());
    }

    #[tokio::test]
    async fn empty_store_is_an_empty_array() {
        let dir = tempfile::tempdir().unwrap();
        let state = AppState {
            store: Arc::new(SceneStore::new(dir.path().join("scenes.json"))),
        };
        let body = body_json(get_scenes(State(state)).await).await;
        assert_eq!(body, json!([]));
    }

    #[tokio::test]
    async fn unreadable_store_is_a_server_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scenes.json");
        tokio::fs::write(&path, b"[{").await.unwrap();
        let state = AppState {
            store: Arc::new(SceneStore::new(path)),
        };
        let resp = get_scenes(State(state)).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body_json(resp).await["error"].is_string());
    }

    fn site() -> (tempfile::TempDir, ServerConfig) {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("public")).unwrap();
        std::fs::create_dir_all(dir.path().join("img")).unwrap();
        std::fs::write(dir.path().join("public/index.html"), "<html>tour</html>").unwrap();
        std::fs::write(dir.path().join("img/x.jpg"), b"jpeg-bytes").unwrap();
        let config = ServerConfig {
            addr: crate::config::DEFAULT_ADDR.parse().unwrap(),
            store_path: dir.path().join("scenes.json"),
            public_root: dir.path().join("public"),
            asset_root: dir.path().to_path_buf(),
        };
        (dir, config)
    }

    fn app(config: &ServerConfig) -> Router {
        let state = AppState {
            store: Arc::new(SceneStore::new(&config.store_path)),
        };
        router(state, config)
    }

    async fn fetch(app: Router, uri: &str) -> Response {
        app.oneshot(Request::get(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    async fn body_text(resp: Response) -> String {
        let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn healthz_answers_ok() {
        let (_dir, config) = site();
        let resp = fetch(app(&config), "/healthz").await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(body_text(resp).await, "ok");
    }

    #[tokio::test]
    async fn asset_namespaces_serve_files_verbatim() {
        let (_dir, config) = site();
        let resp = fetch(app(&config), "/img/x.jpg").await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(body_text(resp).await, "jpeg-bytes");

        let resp = fetch(app(&config), "/icons/missing.png").await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn unmatched_paths_fall_back_to_index() {
        let (_dir, config) = site();
        for uri in ["/", "/tour/lobby"] {
            let resp = fetch(app(&config), uri).await;
            assert_eq!(resp.status(), StatusCode::OK, "{uri}");
            assert_eq!(body_text(resp).await, "<html>tour</html>");
        }
    }

    #[tokio::test]
    async fn api_data_is_routed_with_cors() {
        let (_dir, config) = site();
        SceneStore::new(&config.store_path)
            .insert_many(vec![SceneRecord {
                id: "lobby".into(),
                src: "/img/lobby.jpg".into(),
                spots: Vec::new(),
            }])
            .await
            .unwrap();

        let request = Request::get("/api/data")
            .header(header::ORIGIN, "http://example.com")
            .body(Body::empty())
            .unwrap();
        let resp = app(&config).oneshot(request).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            resp.headers()
                .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
                .and_then(|v| v.to_str().ok()),
            Some("*")
        );
        assert_eq!(body_json(resp).await[0]["id"], "lobby");
    }
}
