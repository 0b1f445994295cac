//! JSON REST API over stored brackets: routes, shared state, idle cleanup.

use crate::{
    bracket_issues, build_graph, compute_advancement_edges, reset_match, set_match_tie,
    set_match_winner, Bracket, BracketId, Fixture, MatchId, Scores,
};
use actix_web::{
    delete, get, post, put,
    web::{Data, Json, Path, ServiceConfig},
    HttpResponse, Responder,
};
use serde::Deserialize;
use std::collections::HashMap;
use std::fmt::Display;
use std::sync::RwLock;
use std::time::{Duration, Instant};

/// Per-bracket entry: bracket data + last activity time (for auto-cleanup).
pub struct BracketEntry {
    bracket: Bracket,
    last_activity: Instant,
}

/// In-memory state: many brackets by ID. Idle entries are removed by the cleanup task.
pub type AppState = Data<RwLock<HashMap<BracketId, BracketEntry>>>;

#[derive(serde::Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

#[derive(Deserialize)]
struct CreateBracketBody {
    #[serde(default = "default_bracket_name")]
    name: String,
    fixtures: Vec<Fixture>,
}

fn default_bracket_name() -> String {
    "Bracket".to_string()
}

#[derive(Deserialize)]
struct SetWinnerBody {
    winner: String,
    #[serde(default)]
    score1: Option<u32>,
    #[serde(default)]
    score2: Option<u32>,
}

#[derive(Deserialize)]
struct ScoresBody {
    #[serde(default)]
    score1: Option<u32>,
    #[serde(default)]
    score2: Option<u32>,
}

/// Path segment: bracket id (e.g. /api/brackets/{id})
#[derive(Deserialize)]
struct BracketPath {
    id: BracketId,
}

/// Path segments: bracket id and match id (e.g. /api/brackets/{id}/matches/{match_id})
#[derive(Deserialize)]
struct BracketMatchPath {
    id: BracketId,
    match_id: MatchId,
}

fn bad_request(e: impl Display) -> HttpResponse {
    HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() }))
}

/// Run `f` on the bracket with `id`, refreshing its last activity. 404 if not found.
fn with_bracket<F>(state: &AppState, id: BracketId, f: F) -> HttpResponse
where
    F: FnOnce(&mut Bracket) -> HttpResponse,
{
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match g.get_mut(&id) {
        Some(entry) => {
            entry.last_activity = Instant::now();
            f(&mut entry.bracket)
        }
        None => HttpResponse::NotFound().json(serde_json::json!({ "error": "No bracket" })),
    }
}

/// Graph of the bracket after a successful update (what a client re-renders).
fn graph_response(bracket: &Bracket) -> HttpResponse {
    match build_graph(&bracket.fixtures) {
        Ok(graph) => HttpResponse::Ok().json(graph),
        Err(e) => bad_request(e),
    }
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "fixture-graph",
    })
}

/// Stateless: advancement edges for the posted fixture list.
#[post("/api/edges")]
async fn api_edges(body: Json<Vec<Fixture>>) -> HttpResponse {
    match compute_advancement_edges(&body) {
        Ok(edges) => HttpResponse::Ok().json(edges),
        Err(e) => bad_request(e),
    }
}

/// Stateless: laid out graph for the posted fixture list.
#[post("/api/graph")]
async fn api_graph(body: Json<Vec<Fixture>>) -> HttpResponse {
    match build_graph(&body) {
        Ok(graph) => HttpResponse::Ok().json(graph),
        Err(e) => bad_request(e),
    }
}

/// Store a new bracket (returns it with id; client keeps the id for subsequent requests).
#[post("/api/brackets")]
async fn api_create_bracket(state: AppState, body: Json<CreateBracketBody>) -> HttpResponse {
    let CreateBracketBody { name, fixtures } = body.into_inner();
    let bracket = match Bracket::new(name.trim(), fixtures) {
        Ok(b) => b,
        Err(e) => return bad_request(e),
    };
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    log::info!(
        "Created bracket {} ({} fixtures)",
        bracket.id,
        bracket.fixtures.len()
    );
    let response = HttpResponse::Ok().json(&bracket);
    g.insert(
        bracket.id,
        BracketEntry {
            bracket,
            last_activity: Instant::now(),
        },
    );
    response
}

#[get("/api/brackets/{id}")]
async fn api_get_bracket(state: AppState, path: Path<BracketPath>) -> HttpResponse {
    with_bracket(&state, path.id, |b| HttpResponse::Ok().json(&*b))
}

#[delete("/api/brackets/{id}")]
async fn api_delete_bracket(state: AppState, path: Path<BracketPath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match g.remove(&path.id) {
        Some(_) => HttpResponse::NoContent().finish(),
        None => HttpResponse::NotFound().json(serde_json::json!({ "error": "No bracket" })),
    }
}

#[get("/api/brackets/{id}/edges")]
async fn api_bracket_edges(state: AppState, path: Path<BracketPath>) -> HttpResponse {
    with_bracket(&state, path.id, |b| {
        match compute_advancement_edges(&b.fixtures) {
            Ok(edges) => HttpResponse::Ok().json(edges),
            Err(e) => bad_request(e),
        }
    })
}

#[get("/api/brackets/{id}/graph")]
async fn api_bracket_graph(state: AppState, path: Path<BracketPath>) -> HttpResponse {
    with_bracket(&state, path.id, |b| graph_response(b))
}

/// Integrity diagnostics (ambiguous or missing advancement, round gaps).
#[get("/api/brackets/{id}/issues")]
async fn api_bracket_issues(state: AppState, path: Path<BracketPath>) -> HttpResponse {
    with_bracket(&state, path.id, |b| match bracket_issues(&b.fixtures) {
        Ok(issues) => HttpResponse::Ok().json(issues),
        Err(e) => bad_request(e),
    })
}

/// Set the winner of one match; the loser's edge disappears from the graph.
#[put("/api/brackets/{id}/matches/{match_id}/winner")]
async fn api_set_winner(
    state: AppState,
    path: Path<BracketMatchPath>,
    body: Json<SetWinnerBody>,
) -> HttpResponse {
    let scores = Scores {
        score1: body.score1,
        score2: body.score2,
    };
    with_bracket(&state, path.id, |b| {
        match set_match_winner(b, &path.match_id, body.winner.trim(), scores) {
            Ok(()) => graph_response(b),
            Err(e) => bad_request(e),
        }
    })
}

/// Set one match to a tie; both teams continue.
#[put("/api/brackets/{id}/matches/{match_id}/tie")]
async fn api_set_tie(
    state: AppState,
    path: Path<BracketMatchPath>,
    body: Option<Json<ScoresBody>>,
) -> HttpResponse {
    let scores = body
        .map(|b| Scores {
            score1: b.score1,
            score2: b.score2,
        })
        .unwrap_or_default();
    with_bracket(&state, path.id, |b| match set_match_tie(b, &path.match_id, scores) {
        Ok(()) => graph_response(b),
        Err(e) => bad_request(e),
    })
}

/// Reset one match to pending.
#[post("/api/brackets/{id}/matches/{match_id}/reset")]
async fn api_reset_match(state: AppState, path: Path<BracketMatchPath>) -> HttpResponse {
    with_bracket(&state, path.id, |b| match reset_match(b, &path.match_id) {
        Ok(()) => graph_response(b),
        Err(e) => bad_request(e),
    })
}

/// Empty bracket store, shared between workers.
pub fn new_state() -> AppState {
    Data::new(RwLock::new(HashMap::new()))
}

/// Remove brackets idle for at least `timeout`. Returns how many were removed.
pub fn purge_idle(state: &AppState, timeout: Duration) -> usize {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return 0,
    };
    let before = g.len();
    g.retain(|_, entry| entry.last_activity.elapsed() < timeout);
    before - g.len()
}

/// Register all API routes. State must be added with `app_data(state.clone())`.
pub fn configure(cfg: &mut ServiceConfig) {
    cfg.service(api_health)
        .service(api_edges)
        .service(api_graph)
        .service(api_create_bracket)
        .service(api_get_bracket)
        .service(api_delete_bracket)
        .service(api_bracket_edges)
        .service(api_bracket_graph)
        .service(api_bracket_issues)
        .service(api_set_winner)
        .service(api_set_tie)
        .service(api_reset_match);
}
