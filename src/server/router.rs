use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{
        coach::{create_coach, delete_coach, get_coach_by_id, get_coaches, update_coach},
        health::health,
        player::{create_player, delete_player, get_player_by_id, get_players, update_player},
        team::{
            add_player_to_team, create_team, delete_team, get_team_by_id, get_teams,
            remove_player_from_team, update_team,
        },
    },
    docs::ApiDoc,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/health", get(health))
        .route("/api/players", get(get_players).post(create_player))
        .route(
            "/api/players/{id}",
            get(get_player_by_id)
                .put(update_player)
                .delete(delete_player),
        )
        .route("/api/coaches", get(get_coaches).post(create_coach))
        .route(
            "/api/coaches/{id}",
            get(get_coach_by_id).put(update_coach).delete(delete_coach),
        )
        .route("/api/teams", get(get_teams).post(create_team))
        .route(
            "/api/teams/{id}",
            get(get_team_by_id).put(update_team).delete(delete_team),
        )
        .route(
            "/api/teams/{id}/players/{player_id}",
            post(add_player_to_team).delete(remove_player_from_team),
        )
}

/// Builds the complete application: API routes, Swagger UI and HTTP layers.
pub fn app(state: AppState) -> Router {
    router()
        .with_state(state)
        .merge(SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
