mod admin;
mod health;
mod images;
mod products;

use axum::{
    Router,
    middleware::from_fn,
    routing::{get, post, put},
};

use crate::{AppState, middleware::admin_middleware};

pub fn create_router() -> Router<AppState> {
    let admin_routes = Router::new()
        .route("/products", post(admin::create_product))
        .route(
            "/products/:id",
            put(admin::update_product).delete(admin::delete_product),
        )
        .route_layer(from_fn(admin_middleware));

    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
        .route("/products", get(products::list_products))
        .route("/products/:id", get(products::get_product))
        .route("/products/:id/image", post(images::upload_image))
        .merge(admin_routes)
}
