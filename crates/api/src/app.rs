use axum::{
    middleware,
    routing::{get, post, put},
    Router,
};
use domain::models::map::{Coordinate, MapView};
use domain::services::geocoding::Geocoder;
use std::sync::Arc;
use std::time::Duration;
use storage::repositories::{
    DashboardRepository, DonationRepository, FoodItemRepository, MapRepository, MessageRepository,
    NotificationRepository, PartnerRepository, ReportRepository,
};
use storage::Database;
use tower_http::{
    compression::CompressionLayer,
    cors::{AllowOrigin, Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::{Config, MapConfig};
use crate::jobs::CompletionScheduler;
use crate::middleware::{
    metrics_handler, metrics_middleware, security_headers_middleware, trace_id, HstsEnabled,
};
use crate::routes::{
    communication, dashboard, donations, health, inventory, map, partners, reports,
};

#[derive(Clone)]
pub struct AppState {
    pub db: Database,
    pub config: Arc<Config>,
    pub geocoder: Arc<dyn Geocoder>,
    pub completions: Arc<CompletionScheduler>,
}

impl AppState {
    pub fn new(config: Config, db: Database, geocoder: Arc<dyn Geocoder>) -> Self {
        let delay = Duration::from_millis(config.reports.completion_delay_ms);
        let completions = Arc::new(CompletionScheduler::new(
            ReportRepository::new(db.reports.clone()),
            delay,
        ));

        Self {
            db,
            config: Arc::new(config),
            geocoder,
            completions,
        }
    }

    pub fn donations(&self) -> DonationRepository {
        DonationRepository::new(self.db.donations.clone())
    }

    pub fn inventory(&self) -> FoodItemRepository {
        FoodItemRepository::new(self.db.inventory.clone())
    }

    pub fn partners(&self) -> PartnerRepository {
        PartnerRepository::new(self.db.partners.clone())
    }

    pub fn messages(&self) -> MessageRepository {
        MessageRepository::new(self.db.messages.clone())
    }

    pub fn notifications(&self) -> NotificationRepository {
        NotificationRepository::new(self.db.notifications.clone())
    }

    pub fn reports(&self) -> ReportRepository {
        ReportRepository::new(self.db.reports.clone())
    }

    pub fn map(&self) -> MapRepository {
        MapRepository::new(self.db.map.clone())
    }

    pub fn dashboard(&self) -> DashboardRepository {
        DashboardRepository::new(self.db.clone())
    }
}

/// Initial map view from configuration.
pub fn initial_map_view(config: &MapConfig) -> Result<MapView, domain::models::map::MapError> {
    let center = Coordinate::new(config.default_latitude, config.default_longitude)?;
    Ok(MapView::new(center, config.default_radius_meters))
}

pub fn create_app(state: AppState) -> Router {
    let config = state.config.clone();

    // Build CORS layer based on configuration
    let cors = if config.security.cors_origins.is_empty() {
        // Default: allow any origin (for development)
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        let origins: Vec<_> = config
            .security
            .cors_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(Any)
            .allow_headers(Any)
    };

    let api_routes = Router::new()
        .route("/api/v1/dashboard", get(dashboard::get_overview))
        // Donations
        .route(
            "/api/v1/donations",
            get(donations::list_donations).post(donations::create_donation),
        )
        .route("/api/v1/donations/stats", get(donations::get_stats))
        .route(
            "/api/v1/donations/:id",
            get(donations::get_donation)
                .put(donations::update_donation)
                .delete(donations::delete_donation),
        )
        // Inventory
        .route(
            "/api/v1/inventory",
            get(inventory::list_items).post(inventory::create_item),
        )
        .route("/api/v1/inventory/stats", get(inventory::get_stats))
        .route("/api/v1/inventory/categories", get(inventory::list_categories))
        .route(
            "/api/v1/inventory/:id",
            get(inventory::get_item)
                .put(inventory::update_item)
                .delete(inventory::delete_item),
        )
        .route("/api/v1/inventory/:id/add-stock", post(inventory::add_stock))
        // Partners
        .route(
            "/api/v1/partners",
            get(partners::list_partners).post(partners::create_partner),
        )
        .route("/api/v1/partners/stats", get(partners::get_stats))
        .route("/api/v1/partners/types", get(partners::list_types))
        .route(
            "/api/v1/partners/:id",
            get(partners::get_partner)
                .put(partners::update_partner)
                .delete(partners::delete_partner),
        )
        // Communication
        .route(
            "/api/v1/messages",
            get(communication::list_messages).post(communication::send_message),
        )
        .route(
            "/api/v1/messages/:id",
            get(communication::get_message).delete(communication::delete_message),
        )
        .route("/api/v1/messages/:id/read", post(communication::mark_message_read))
        .route("/api/v1/notifications", get(communication::list_notifications))
        .route(
            "/api/v1/notifications/:id",
            axum::routing::delete(communication::delete_notification),
        )
        .route(
            "/api/v1/notifications/:id/read",
            post(communication::mark_notification_read),
        )
        .route("/api/v1/communication/stats", get(communication::get_stats))
        // Reports
        .route(
            "/api/v1/reports",
            get(reports::list_reports).post(reports::generate_report),
        )
        .route("/api/v1/reports/stats", get(reports::get_stats))
        .route(
            "/api/v1/reports/:id",
            get(reports::get_report).delete(reports::delete_report),
        )
        // Map
        .route("/api/v1/map", get(map::get_view))
        .route("/api/v1/map/radius", put(map::set_radius))
        .route("/api/v1/map/locate", post(map::locate))
        .route("/api/v1/map/search", post(map::search));

    let public_routes = Router::new()
        .route("/api/health", get(health::health_check))
        .route("/api/health/ready", get(health::ready))
        .route("/api/health/live", get(health::live))
        .route("/metrics", get(metrics_handler));

    Router::new()
        .merge(public_routes)
        .merge(api_routes)
        // Global middleware (order matters: bottom layers run first)
        .layer(middleware::from_fn_with_state(
            HstsEnabled(config.security.hsts_enabled),
            security_headers_middleware,
        ))
        .layer(CompressionLayer::new())
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_secs,
        )))
        .layer(middleware::from_fn(metrics_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(trace_id))
        .layer(cors)
        .with_state(state)
}
