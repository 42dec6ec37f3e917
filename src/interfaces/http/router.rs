//! API Router with Swagger UI

use std::sync::Arc;
use std::time::Instant;

use axum::{
    middleware,
    routing::{get, patch, post, put},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};
use utoipa_swagger_ui::SwaggerUi;

use crate::application::{AccountService, CartService, CatalogService};
use crate::domain::{Cart, CartLine, Item, ItemPatch, PublicUser, Store};
use crate::infrastructure::crypto::JwtConfig;
use crate::interfaces::http::common::ErrorBody;
use crate::interfaces::http::middleware::{auth_middleware, AuthState};
use crate::interfaces::http::modules::{auth, cart, health, items};

/// Security scheme modifier for OpenAPI
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("JWT Bearer token"))
                        .build(),
                ),
            );
        }
    }
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        // Health
        health::health_check,
        // Auth
        auth::signup,
        auth::login,
        auth::me,
        // Catalog
        items::list_items,
        items::get_item,
        items::create_item,
        items::update_item,
        items::delete_item,
        // Cart
        cart::get_cart,
        cart::add_to_cart,
        cart::set_quantity,
        cart::remove_from_cart,
    ),
    components(
        schemas(
            // Common
            ErrorBody,
            // Auth
            auth::SignupRequest,
            auth::LoginRequest,
            auth::AuthResponse,
            PublicUser,
            // Catalog
            Item,
            ItemPatch,
            items::CreateItemRequest,
            items::DeleteItemResponse,
            // Cart
            Cart,
            CartLine,
            cart::AddToCartRequest,
            cart::SetQuantityRequest,
            // Health
            health::HealthResponse,
            health::ComponentHealth,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Health", description = "Server health check endpoints"),
        (name = "Authentication", description = "Signup, login (JWT) and current-user lookup"),
        (name = "Catalog", description = "Item listing, search and CRUD"),
        (name = "Cart", description = "Per-user shopping cart"),
    ),
    info(
        title = "Shop Service API",
        version = "1.0.0",
        description = "REST API for a small shop: accounts, catalog and carts",
        license(name = "MIT")
    )
)]
pub struct ApiDoc;

/// Create the API router with all routes
pub fn create_api_router(store: Arc<dyn Store>, jwt_config: JwtConfig) -> Router {
    let middleware_state = AuthState {
        jwt_config: jwt_config.clone(),
    };

    let auth_state = auth::AuthHandlerState {
        accounts: Arc::new(AccountService::new(store.clone(), jwt_config)),
    };
    let items_state = items::ItemsHandlerState {
        catalog: Arc::new(CatalogService::new(store.clone())),
    };
    let cart_state = cart::CartHandlerState {
        carts: Arc::new(CartService::new(store.clone())),
    };
    let health_state = health::HealthState {
        store,
        started_at: Arc::new(Instant::now()),
    };

    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Auth routes (public)
    let auth_routes = Router::new()
        .route("/signup", post(auth::signup))
        .route("/login", post(auth::login))
        .with_state(auth_state.clone());

    // Auth routes (protected)
    let auth_protected_routes = Router::new()
        .route("/me", get(auth::me))
        .layer(middleware::from_fn_with_state(
            middleware_state.clone(),
            auth_middleware,
        ))
        .with_state(auth_state);

    // Catalog routes (public reads)
    let items_routes = Router::new()
        .route("/", get(items::list_items))
        .route("/{id}", get(items::get_item))
        .with_state(items_state.clone());

    // Catalog routes (protected writes)
    let items_protected_routes = Router::new()
        .route("/", post(items::create_item))
        .route(
            "/{id}",
            put(items::update_item).delete(items::delete_item),
        )
        .layer(middleware::from_fn_with_state(
            middleware_state.clone(),
            auth_middleware,
        ))
        .with_state(items_state);

    // Cart routes (all protected)
    let cart_routes = Router::new()
        .route("/", get(cart::get_cart).post(cart::add_to_cart))
        .route(
            "/{item_id}",
            patch(cart::set_quantity).delete(cart::remove_from_cart),
        )
        .layer(middleware::from_fn_with_state(
            middleware_state,
            auth_middleware,
        ))
        .with_state(cart_state);

    let swagger_routes = SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi());

    // Build router
    Router::new()
        // Swagger UI
        .merge(swagger_routes)
        // Health
        .route("/health", get(health::health_check).with_state(health_state))
        // Auth
        .nest("/api/auth", auth_routes)
        .nest("/api/auth", auth_protected_routes)
        // Catalog
        .nest("/api/items", items_routes)
        .nest("/api/items", items_protected_routes)
        // Cart
        .nest("/api/cart", cart_routes)
        // Middleware
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
