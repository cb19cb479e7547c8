use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use crate::{handlers, system};

/// Route table for the whole application
pub fn configure_routes() -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        // ========================================
        // SYSTEM AUTH ROUTES (PUBLIC)
        // ========================================
        .route(
            "/api/system/auth/login",
            post(system::handlers::auth::login),
        )
        // System auth routes (protected)
        .route(
            "/api/system/auth/me",
            get(system::handlers::auth::current_user)
                .layer(middleware::from_fn(system::auth::middleware::require_auth)),
        )
        // System users management (admin only)
        .route(
            "/api/system/users",
            get(system::handlers::users::list)
                .post(system::handlers::users::create)
                .layer(middleware::from_fn(system::auth::middleware::require_admin)),
        )
        .route(
            "/api/system/users/:id",
            get(system::handlers::users::get_by_id)
                .put(system::handlers::users::update)
                .delete(system::handlers::users::delete)
                .layer(middleware::from_fn(system::auth::middleware::require_admin)),
        )
        .route(
            "/api/system/users/:id/change-password",
            post(system::handlers::users::change_password)
                .layer(middleware::from_fn(system::auth::middleware::require_auth)),
        )
        // ========================================
        // CATALOG ROUTES
        // ========================================
        // A001 Languages
        .route(
            "/api/languages",
            get(handlers::a001_language::list_all).post(handlers::a001_language::upsert),
        )
        .route(
            "/api/languages/enabled",
            get(handlers::a001_language::list_enabled),
        )
        .route(
            "/api/languages/:locale",
            get(handlers::a001_language::get_by_locale).delete(handlers::a001_language::delete),
        )
        // A002 Language sets
        .route(
            "/api/langsets",
            get(handlers::a002_language_set::list_all).post(handlers::a002_language_set::upsert),
        )
        .route(
            "/api/langsets/:slug",
            get(handlers::a002_language_set::get_by_slug),
        )
        .route(
            "/api/langsets/id/:id",
            axum::routing::delete(handlers::a002_language_set::delete),
        )
        // A003 Translation platforms
        .route(
            "/api/platforms",
            get(handlers::a003_trans_platform::list_all)
                .post(handlers::a003_trans_platform::upsert),
        )
        .route(
            "/api/platforms/:slug",
            get(handlers::a003_trans_platform::get_by_slug),
        )
        .route(
            "/api/platforms/:slug/projects",
            post(handlers::a003_trans_platform::update_projects),
        )
        .route(
            "/api/platforms/:slug/packages",
            get(handlers::a006_package::list_by_platform),
        )
        .route(
            "/api/platforms/id/:id",
            axum::routing::delete(handlers::a003_trans_platform::delete),
        )
        // A004 Release streams
        .route(
            "/api/streams",
            get(handlers::a004_release_stream::list_all)
                .post(handlers::a004_release_stream::upsert),
        )
        .route(
            "/api/streams/:slug",
            get(handlers::a004_release_stream::get_by_slug),
        )
        .route(
            "/api/streams/:slug/built-tags",
            post(handlers::a004_release_stream::update_built_tags),
        )
        .route(
            "/api/streams/:slug/branches",
            get(handlers::a005_release_branch::list_by_stream),
        )
        .route(
            "/api/streams/id/:id",
            axum::routing::delete(handlers::a004_release_stream::delete),
        )
        // A005 Release branches
        .route(
            "/api/branches",
            get(handlers::a005_release_branch::list_all)
                .post(handlers::a005_release_branch::upsert),
        )
        .route(
            "/api/branches/:slug",
            get(handlers::a005_release_branch::get_by_slug),
        )
        .route(
            "/api/branches/id/:id",
            axum::routing::delete(handlers::a005_release_branch::delete),
        )
        // A006 Packages
        .route(
            "/api/packages",
            get(handlers::a006_package::list_all).post(handlers::a006_package::upsert),
        )
        .route(
            "/api/packages/:name",
            get(handlers::a006_package::get_by_name),
        )
        .route(
            "/api/packages/:name/stats",
            get(handlers::a009_sync_stat::list_by_package),
        )
        .route(
            "/api/packages/:name/stats/latest",
            get(handlers::a009_sync_stat::latest_for_package),
        )
        .route(
            "/api/packages/:name/details",
            post(handlers::a006_package::update_details),
        )
        .route(
            "/api/packages/:name/stats-diff",
            post(handlers::a006_package::update_stats_diff),
        )
        .route(
            "/api/packages/id/:id",
            axum::routing::delete(handlers::a006_package::delete),
        )
        // A007 Job templates
        .route(
            "/api/job-templates",
            get(handlers::a007_job_template::list_all).post(handlers::a007_job_template::upsert),
        )
        .route(
            "/api/job-templates/:type",
            get(handlers::a007_job_template::get_by_type),
        )
        .route(
            "/api/job-templates/id/:id",
            axum::routing::delete(handlers::a007_job_template::delete),
        )
        // A008 Jobs
        .route(
            "/api/jobs",
            get(handlers::a008_job::list_visible).post(handlers::a008_job::start),
        )
        .route("/api/jobs/:uuid", get(handlers::a008_job::get_by_uuid))
        .route("/api/jobs/:uuid/finish", post(handlers::a008_job::finish))
        // A009 Sync stats
        .route("/api/sync-stats", post(handlers::a009_sync_stat::record))
        // A010 Graph rules
        .route(
            "/api/graph-rules",
            get(handlers::a010_graph_rule::list_public).post(handlers::a010_graph_rule::upsert),
        )
        .route(
            "/api/graph-rules/all",
            get(handlers::a010_graph_rule::list_all)
                .layer(middleware::from_fn(system::auth::middleware::require_auth)),
        )
        .route(
            "/api/graph-rules/:name",
            get(handlers::a010_graph_rule::get_by_name),
        )
        .route(
            "/api/graph-rules/:name/deactivate",
            post(handlers::a010_graph_rule::deactivate),
        )
        .route(
            "/api/graph-rules/id/:id",
            axum::routing::delete(handlers::a010_graph_rule::delete),
        )
        // A011 Cached API responses
        .route(
            "/api/cache",
            get(handlers::a011_cache_api::fetch).post(handlers::a011_cache_api::store),
        )
        // A012 Reports
        .route("/api/reports", get(handlers::a012_report::list_all))
        .route(
            "/api/reports/:subject",
            get(handlers::a012_report::get_by_subject).put(handlers::a012_report::upsert),
        )
        // A013 Visitors (admin view)
        .route(
            "/api/visitors",
            get(handlers::a013_visitor::list_all)
                .layer(middleware::from_fn(system::auth::middleware::require_admin)),
        )
}
