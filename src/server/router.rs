use std::{sync::Arc, time::Duration};

use axum::{
    http::{header::CONTENT_TYPE, HeaderValue, Method, StatusCode},
    routing::{delete, get, post, put},
    Router,
};
use tower_governor::{governor::GovernorConfigBuilder, GovernorLayer};
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    config::Config,
    controller::{
        auth, game, game_rules, health, league, match_event, matches, media, news, page, player,
        season, setting, staff, team, user,
    },
    error::AppError,
    state::AppState,
};

const REQUEST_TIMEOUT_SECS: u64 = 30;

#[derive(OpenApi)]
#[openapi(
    info(title = "Courtside API", description = "League content and live game tracking"),
    paths(
        health::health,
        auth::login,
        auth::logout,
        auth::me,
        user::get_users,
        user::create_user,
        league::get_leagues,
        league::get_league,
        league::create_league,
        league::update_league,
        league::delete_league,
        season::get_seasons,
        season::get_season,
        season::create_season,
        season::update_season,
        season::delete_season,
        team::get_teams,
        team::get_team,
        team::create_team,
        team::update_team,
        team::delete_team,
        player::get_players,
        player::get_player,
        player::create_player,
        player::update_player,
        player::delete_player,
        staff::get_staff,
        staff::get_staff_member,
        staff::create_staff,
        staff::update_staff,
        staff::delete_staff,
        news::get_news,
        news::get_article,
        news::create_article,
        news::update_article,
        news::delete_article,
        news::get_comments,
        news::create_comment,
        news::delete_comment,
        page::get_pages,
        page::get_page,
        page::get_page_by_slug,
        page::create_page,
        page::update_page,
        page::delete_page,
        media::get_media,
        media::get_media_item,
        media::create_media,
        media::update_media,
        media::delete_media,
        setting::get_settings,
        setting::get_setting,
        setting::put_setting,
        setting::delete_setting,
        game_rules::get_all_game_rules,
        game_rules::get_game_rules,
        game_rules::create_game_rules,
        game_rules::update_game_rules,
        game_rules::delete_game_rules,
        game_rules::get_match_rules,
        game_rules::attach_match_rules,
        matches::get_matches,
        matches::get_match,
        matches::create_match,
        matches::update_match,
        matches::delete_match,
        matches::get_roster,
        matches::add_roster_player,
        matches::remove_roster_player,
        match_event::get_events,
        match_event::create_event,
        match_event::update_event,
        match_event::delete_event,
        match_event::get_play_by_play,
        match_event::get_box_score,
        game::get_game_state,
        game::update_game_state,
        game::start_game,
        game::pause_game,
        game::resume_game,
        game::end_period,
        game::end_game,
        game::create_timeout,
        game::create_substitution,
        game::create_jump_ball,
        game::get_periods,
        game::get_timeouts,
        game::get_substitutions,
        game::get_jump_balls,
    ),
    components(schemas(
        crate::model::api::ErrorDto,
        crate::model::api::StatusDto,
        crate::model::auth::LoginDto,
        crate::model::user::RoleDto,
        crate::model::user::UserDto,
        crate::model::user::CreateUserDto,
        crate::model::league::LeagueDto,
        crate::model::league::CreateLeagueDto,
        crate::model::league::UpdateLeagueDto,
        crate::model::season::SeasonDto,
        crate::model::season::CreateSeasonDto,
        crate::model::season::UpdateSeasonDto,
        crate::model::team::TeamDto,
        crate::model::team::CreateTeamDto,
        crate::model::team::UpdateTeamDto,
        crate::model::player::PlayerDto,
        crate::model::player::CreatePlayerDto,
        crate::model::player::UpdatePlayerDto,
        crate::model::staff::StaffDto,
        crate::model::staff::CreateStaffDto,
        crate::model::staff::UpdateStaffDto,
        crate::model::news::NewsArticleDto,
        crate::model::news::CreateNewsArticleDto,
        crate::model::news::UpdateNewsArticleDto,
        crate::model::news::CommentDto,
        crate::model::news::CreateCommentDto,
        crate::model::page::PageDto,
        crate::model::page::CreatePageDto,
        crate::model::page::UpdatePageDto,
        crate::model::media::MediaDto,
        crate::model::media::CreateMediaDto,
        crate::model::media::UpdateMediaDto,
        crate::model::setting::SettingDto,
        crate::model::setting::UpdateSettingDto,
        crate::model::game_rules::GameRulesDto,
        crate::model::game_rules::CreateGameRulesDto,
        crate::model::game_rules::UpdateGameRulesDto,
        crate::model::game_rules::AttachGameRulesDto,
        crate::model::matches::MatchStatus,
        crate::model::matches::MatchDto,
        crate::model::matches::CreateMatchDto,
        crate::model::matches::UpdateMatchDto,
        crate::model::matches::MatchPlayerDto,
        crate::model::matches::AddMatchPlayerDto,
        crate::model::match_event::EventType,
        crate::model::match_event::MatchEventDto,
        crate::model::match_event::CreateMatchEventDto,
        crate::model::match_event::UpdateMatchEventDto,
        crate::model::match_event::PlayByPlayEntryDto,
        crate::model::match_event::StatLineDto,
        crate::model::match_event::PlayerBoxScoreDto,
        crate::model::match_event::TeamBoxScoreDto,
        crate::model::match_event::BoxScoreDto,
        crate::model::game::TimeoutKind,
        crate::model::game::TeamGameStateDto,
        crate::model::game::GameStateDto,
        crate::model::game::PauseGameDto,
        crate::model::game::UpdateGameStateDto,
        crate::model::game::CreateTimeoutDto,
        crate::model::game::TimeoutDto,
        crate::model::game::CreateSubstitutionDto,
        crate::model::game::SubstitutionDto,
        crate::model::game::CreateJumpBallDto,
        crate::model::game::JumpBallDto,
        crate::model::game::MatchPeriodDto,
    )),
    tags(
        (name = "health", description = "Service health"),
        (name = "auth", description = "Login and session"),
        (name = "user", description = "CMS accounts"),
        (name = "league", description = "Leagues"),
        (name = "season", description = "Seasons"),
        (name = "team", description = "Teams"),
        (name = "player", description = "Players"),
        (name = "staff", description = "Team staff"),
        (name = "news", description = "News articles and comments"),
        (name = "page", description = "Static pages"),
        (name = "media", description = "Media library metadata"),
        (name = "setting", description = "Site settings"),
        (name = "game-rules", description = "Rule sets"),
        (name = "match", description = "Matches and rosters"),
        (name = "match-event", description = "Event log, play-by-play and box score"),
        (name = "game", description = "Live game tracking"),
    )
)]
pub struct ApiDoc;

/// Builds the application router with all API routes, docs and middleware.
///
/// # Returns
/// - `Ok(Router)` - Router ready to serve
/// - `Err(AppError::InternalError)` - Rate limiter configuration rejected
pub fn router(state: AppState, config: &Config) -> Result<Router, AppError> {
    // ~10 login attempts per minute per IP
    let governor_conf = GovernorConfigBuilder::default()
        .per_second(6)
        .burst_size(10)
        .finish()
        .ok_or_else(|| AppError::InternalError("Invalid rate limiter configuration".to_string()))?;

    let login_routes = Router::new()
        .route("/api/auth/login", post(auth::login))
        .layer(GovernorLayer::new(Arc::new(governor_conf)));

    let api = Router::new()
        .route("/api/health", get(health::health))
        .route("/api/auth/logout", post(auth::logout))
        .route("/api/auth/me", get(auth::me))
        .route("/api/users", get(user::get_users).post(user::create_user))
        .route(
            "/api/leagues",
            get(league::get_leagues).post(league::create_league),
        )
        .route(
            "/api/leagues/{id}",
            get(league::get_league)
                .put(league::update_league)
                .delete(league::delete_league),
        )
        .route(
            "/api/seasons",
            get(season::get_seasons).post(season::create_season),
        )
        .route(
            "/api/seasons/{id}",
            get(season::get_season)
                .put(season::update_season)
                .delete(season::delete_season),
        )
        .route("/api/teams", get(team::get_teams).post(team::create_team))
        .route(
            "/api/teams/{id}",
            get(team::get_team)
                .put(team::update_team)
                .delete(team::delete_team),
        )
        .route(
            "/api/players",
            get(player::get_players).post(player::create_player),
        )
        .route(
            "/api/players/{id}",
            get(player::get_player)
                .put(player::update_player)
                .delete(player::delete_player),
        )
        .route("/api/staff", get(staff::get_staff).post(staff::create_staff))
        .route(
            "/api/staff/{id}",
            get(staff::get_staff_member)
                .put(staff::update_staff)
                .delete(staff::delete_staff),
        )
        .route("/api/news", get(news::get_news).post(news::create_article))
        .route(
            "/api/news/{id}",
            get(news::get_article)
                .put(news::update_article)
                .delete(news::delete_article),
        )
        .route(
            "/api/news/{id}/comments",
            get(news::get_comments).post(news::create_comment),
        )
        .route(
            "/api/news/{id}/comments/{comment_id}",
            delete(news::delete_comment),
        )
        .route("/api/pages", get(page::get_pages).post(page::create_page))
        .route(
            "/api/pages/{id}",
            get(page::get_page)
                .put(page::update_page)
                .delete(page::delete_page),
        )
        .route("/api/pages/slug/{slug}", get(page::get_page_by_slug))
        .route("/api/media", get(media::get_media).post(media::create_media))
        .route(
            "/api/media/{id}",
            get(media::get_media_item)
                .put(media::update_media)
                .delete(media::delete_media),
        )
        .route("/api/settings", get(setting::get_settings))
        .route(
            "/api/settings/{key}",
            get(setting::get_setting)
                .put(setting::put_setting)
                .delete(setting::delete_setting),
        )
        .route(
            "/api/game-rules",
            get(game_rules::get_all_game_rules).post(game_rules::create_game_rules),
        )
        .route(
            "/api/game-rules/{id}",
            get(game_rules::get_game_rules)
                .put(game_rules::update_game_rules)
                .delete(game_rules::delete_game_rules),
        )
        .route(
            "/api/matches",
            get(matches::get_matches).post(matches::create_match),
        )
        .route(
            "/api/matches/{id}",
            get(matches::get_match)
                .put(matches::update_match)
                .delete(matches::delete_match),
        )
        .route(
            "/api/matches/{id}/players",
            get(matches::get_roster).post(matches::add_roster_player),
        )
        .route(
            "/api/matches/{id}/players/{player_id}",
            delete(matches::remove_roster_player),
        )
        .route(
            "/api/matches/{id}/events",
            get(match_event::get_events).post(match_event::create_event),
        )
        .route(
            "/api/matches/{id}/events/{event_id}",
            put(match_event::update_event).delete(match_event::delete_event),
        )
        .route(
            "/api/matches/{id}/box-score",
            get(match_event::get_box_score),
        )
        .route(
            "/api/games/{id}/play-by-play",
            get(match_event::get_play_by_play),
        )
        .route(
            "/api/games/{id}/rules",
            get(game_rules::get_match_rules).put(game_rules::attach_match_rules),
        )
        .route(
            "/api/games/{id}/state",
            get(game::get_game_state).put(game::update_game_state),
        )
        .route("/api/games/{id}/start", post(game::start_game))
        .route("/api/games/{id}/pause", post(game::pause_game))
        .route("/api/games/{id}/resume", post(game::resume_game))
        .route("/api/games/{id}/end-period", post(game::end_period))
        .route("/api/games/{id}/end", post(game::end_game))
        .route("/api/games/{id}/timeout", post(game::create_timeout))
        .route("/api/games/{id}/substitution", post(game::create_substitution))
        .route("/api/games/{id}/jump-ball", post(game::create_jump_ball))
        .route("/api/games/{id}/periods", get(game::get_periods))
        .route("/api/games/{id}/timeouts", get(game::get_timeouts))
        .route("/api/games/{id}/substitutions", get(game::get_substitutions))
        .route("/api/games/{id}/jump-balls", get(game::get_jump_balls))
        .merge(login_routes)
        .with_state(state);

    let origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([CONTENT_TYPE])
        .allow_credentials(true);

    Ok(api
        .merge(SwaggerUi::new("/api/docs").url("/api/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(REQUEST_TIMEOUT_SECS),
        ))
        .layer(cors))
}
