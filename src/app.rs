use axum::{
    Router,
    extract::DefaultBodyLimit,
    http::{HeaderValue, Method},
};
use sqlx::PgPool;
use tower_http::cors::CorsLayer;

use crate::{
    config::{AppConfig, MediaConfig},
    database,
    error::{AppError, Result},
    routes,
};

#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub media: MediaConfig,
}

pub async fn build(config: &AppConfig) -> Result<Router> {
    let pool = database::create_pool(&config.database).await?;

    tokio::fs::create_dir_all(&config.media.upload_dir)
        .await
        .map_err(|e| {
            AppError::ConfigError(format!(
                "Failed to create upload directory {}: {}",
                config.media.upload_dir.display(),
                e
            ))
        })?;

    let state = AppState {
        db: pool,
        media: config.media.clone(),
    };

    let cors = match &config.cors.allowed_origins {
        Some(origins) => {
            let allowed: Vec<HeaderValue> = origins
                .iter()
                .map(|origin| {
                    origin.parse::<HeaderValue>().map_err(|_| {
                        AppError::ConfigError(format!("Invalid CORS origin: {}", origin))
                    })
                })
                .collect::<Result<Vec<_>>>()?;

            CorsLayer::new()
                .allow_methods([
                    Method::GET,
                    Method::POST,
                    Method::PUT,
                    Method::DELETE,
                    Method::OPTIONS,
                ])
                .allow_headers([http::header::CONTENT_TYPE, http::header::AUTHORIZATION])
                .allow_origin(allowed)
        }
        None => CorsLayer::permissive(),
    };

    let app = routes::create_router()
        .layer(DefaultBodyLimit::max(config.server.max_body_size))
        .layer(cors)
        .with_state(state);

    Ok(app)
}
