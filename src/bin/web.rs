//! Single binary web server: HTML from templates/, static from /static, API via REST.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default. Override with env: HOST, PORT.
//! ROSTER_CSV names a `name,label` CSV file replacing the built-in roster.

use actix_files::Files;
use actix_session::{storage::CookieSessionStore, Session, SessionMiddleware};
use actix_web::{
    cookie::Key,
    get, post, put,
    web::{self, Data, Json, Path},
    App, HttpResponse, HttpServer, Responder,
};
use knockout_bracket_web::{
    apply, Command, Leg, MatchId, Roster, RosterLoadError, RoundKey, Slot, SlotRef, Tournament,
    TournamentId,
};
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::RwLock;
use std::time::{Duration, Instant};

/// Per-tournament entry: current state, undo history, last activity time.
struct TournamentEntry {
    current: Tournament,
    history: Vec<Tournament>,
    last_activity: Instant,
}

/// Undo snapshots kept per tournament; older ones fall off.
const HISTORY_LIMIT: usize = 50;

impl TournamentEntry {
    fn new(tournament: Tournament) -> Self {
        Self {
            current: tournament,
            history: Vec::new(),
            last_activity: Instant::now(),
        }
    }

    /// Replace the current state, keeping the old one for undo.
    fn remember(&mut self, next: Tournament) {
        if self.history.len() == HISTORY_LIMIT {
            self.history.remove(0);
        }
        self.history.push(std::mem::replace(&mut self.current, next));
    }

    /// Step back one state; false when the history is empty.
    fn undo(&mut self) -> bool {
        match self.history.pop() {
            Some(prev) => {
                self.current = prev;
                true
            }
            None => false,
        }
    }
}

/// In-memory state: many tournaments by ID (sessioned). Entries are removed after 12h inactivity.
type AppState = Data<RwLock<HashMap<TournamentId, TournamentEntry>>>;

/// Inactivity threshold: tournaments not accessed for this long are removed.
const INACTIVITY_TIMEOUT: Duration = Duration::from_secs(12 * 3600);

/// Built-in roster used when ROSTER_CSV is not set.
const DEFAULT_ROSTER: [&str; 8] = [
    "Irving",
    "TucksG",
    "AxlGio",
    "Gerson Sanchez",
    "Jairo Machuca",
    "Jorge Garcia",
    "René Contreras",
    "Saulito",
];

/// Built-in label set: one club per participant.
const DEFAULT_LABELS: [&str; 8] = [
    "Real Madrid",
    "Barcelona",
    "Paris Saint-Germain",
    "Liverpool",
    "Manchester City",
    "Arsenal",
    "Bayern Munich",
    "Atlético Madrid",
];

#[derive(serde::Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

#[derive(Deserialize)]
struct PlaceBody {
    name: String,
    target: SlotRef,
}

#[derive(Deserialize)]
struct PoolBody {
    name: String,
}

#[derive(Deserialize)]
struct ClearSlotBody {
    round: RoundKey,
    index: usize,
    slot: Slot,
}

#[derive(Deserialize)]
struct ScoreBody {
    match_id: MatchId,
    leg: Leg,
    slot: Slot,
    raw_value: String,
}

/// One match addressed by position (e.g. clear-scores, advance).
#[derive(Deserialize)]
struct MatchRefBody {
    round: RoundKey,
    index: usize,
}

/// Path segment: tournament id (e.g. /api/tournaments/{id})
#[derive(Deserialize)]
struct TournamentPath {
    id: TournamentId,
}

/// Look up the tournament, apply one command, remember the old state
/// for undo, and respond with the new snapshot.
fn run_command(state: &AppState, id: TournamentId, command: Command) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = match g.get_mut(&id) {
        Some(e) => e,
        None => return HttpResponse::NotFound().json(serde_json::json!({ "error": "No tournament" })),
    };
    entry.last_activity = Instant::now();
    match apply(&entry.current, &command, &mut rand::thread_rng()) {
        Ok(next) => {
            entry.remember(next);
            HttpResponse::Ok().json(entry.current.snapshot())
        }
        Err(e) => HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() })),
    }
}

/// Respond with the snapshot of an existing tournament, touching it.
fn fetch_snapshot(state: &AppState, id: TournamentId) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match g.get_mut(&id) {
        Some(entry) => {
            entry.last_activity = Instant::now();
            HttpResponse::Ok().json(entry.current.snapshot())
        }
        None => HttpResponse::NotFound().json(serde_json::json!({ "error": "No tournament" })),
    }
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "knockout-bracket-web",
    })
}

/// Avoid 404 in browser tab: favicon not required for app logic.
#[get("/favicon.ico")]
async fn favicon() -> HttpResponse {
    HttpResponse::NoContent().finish()
}

/// Create a new tournament over the configured roster. The id lands in
/// the session cookie so the same browser finds it again.
#[post("/api/tournaments")]
async fn api_create_tournament(state: AppState, roster: Data<Roster>, session: Session) -> HttpResponse {
    let tournament = Tournament::new(roster.get_ref().clone());
    let id = tournament.id;
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = g.entry(id).or_insert_with(|| TournamentEntry::new(tournament));
    if session.insert("tournament_id", id).is_err() {
        log::warn!("Could not store tournament id in session");
    }
    log::info!("Created tournament {}", id);
    HttpResponse::Ok().json(entry.current.snapshot())
}

/// Tournament remembered by this browser's session cookie, if any.
#[get("/api/tournaments/current")]
async fn api_current_tournament(state: AppState, session: Session) -> HttpResponse {
    match session.get::<TournamentId>("tournament_id") {
        Ok(Some(id)) => fetch_snapshot(&state, id),
        _ => HttpResponse::NotFound().json(serde_json::json!({ "error": "No tournament" })),
    }
}

/// Get a tournament by id (404 if not found). Touching it refreshes last_activity.
#[get("/api/tournaments/{id}")]
async fn api_get_tournament(state: AppState, path: Path<TournamentPath>) -> HttpResponse {
    fetch_snapshot(&state, path.id)
}

/// Drop a participant onto a bracket slot.
#[post("/api/tournaments/{id}/place")]
async fn api_place(state: AppState, path: Path<TournamentPath>, body: Json<PlaceBody>) -> HttpResponse {
    let body = body.into_inner();
    run_command(
        &state,
        path.id,
        Command::Place {
            name: body.name,
            target: body.target,
        },
    )
}

/// Send a participant back to the pool from wherever it sits.
#[post("/api/tournaments/{id}/pool")]
async fn api_return_to_pool(state: AppState, path: Path<TournamentPath>, body: Json<PoolBody>) -> HttpResponse {
    run_command(&state, path.id, Command::ReturnToPool { name: body.into_inner().name })
}

/// Empty one slot (the "clear" control on a seat).
#[post("/api/tournaments/{id}/clear-slot")]
async fn api_clear_slot(state: AppState, path: Path<TournamentPath>, body: Json<ClearSlotBody>) -> HttpResponse {
    let body = body.into_inner();
    run_command(
        &state,
        path.id,
        Command::ClearSlot {
            round: body.round,
            index: body.index,
            slot: body.slot,
        },
    )
}

/// Store the raw text of one score field.
#[put("/api/tournaments/{id}/score")]
async fn api_record_score(state: AppState, path: Path<TournamentPath>, body: Json<ScoreBody>) -> HttpResponse {
    let body = body.into_inner();
    run_command(
        &state,
        path.id,
        Command::RecordScore {
            match_id: body.match_id,
            leg: body.leg,
            slot: body.slot,
            raw_value: body.raw_value,
        },
    )
}

/// Blank all four score fields of one match.
#[post("/api/tournaments/{id}/clear-scores")]
async fn api_clear_scores(state: AppState, path: Path<TournamentPath>, body: Json<MatchRefBody>) -> HttpResponse {
    let body = body.into_inner();
    run_command(&state, path.id, Command::ClearScores { round: body.round, index: body.index })
}

/// Advance the winner of one match into the next round.
#[post("/api/tournaments/{id}/advance")]
async fn api_advance(state: AppState, path: Path<TournamentPath>, body: Json<MatchRefBody>) -> HttpResponse {
    let body = body.into_inner();
    run_command(&state, path.id, Command::Advance { round: body.round, index: body.index })
}

/// Seed the quarterfinals with the roster in entry order.
#[post("/api/tournaments/{id}/seed/sequential")]
async fn api_seed_sequential(state: AppState, path: Path<TournamentPath>) -> HttpResponse {
    run_command(&state, path.id, Command::SeedSequential)
}

/// Seed the quarterfinals with a shuffled roster.
#[post("/api/tournaments/{id}/seed/random")]
async fn api_seed_random(state: AppState, path: Path<TournamentPath>) -> HttpResponse {
    run_command(&state, path.id, Command::SeedRandom)
}

/// Randomly assign a display label to every participant.
#[post("/api/tournaments/{id}/assign-labels")]
async fn api_assign_labels(state: AppState, path: Path<TournamentPath>) -> HttpResponse {
    run_command(&state, path.id, Command::AssignLabels)
}

/// Back to the initial state (pool full, bracket empty).
#[post("/api/tournaments/{id}/reset")]
async fn api_reset(state: AppState, path: Path<TournamentPath>) -> HttpResponse {
    run_command(&state, path.id, Command::Reset)
}

/// Step back to the previous state snapshot.
#[post("/api/tournaments/{id}/undo")]
async fn api_undo(state: AppState, path: Path<TournamentPath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = match g.get_mut(&path.id) {
        Some(e) => e,
        None => return HttpResponse::NotFound().json(serde_json::json!({ "error": "No tournament" })),
    };
    entry.last_activity = Instant::now();
    if entry.undo() {
        HttpResponse::Ok().json(entry.current.snapshot())
    } else {
        HttpResponse::BadRequest().json(serde_json::json!({ "error": "Nothing to undo" }))
    }
}

/// Roster from ROSTER_CSV if set, else the built-in default.
fn startup_roster() -> Result<Roster, RosterLoadError> {
    if let Ok(path) = std::env::var("ROSTER_CSV") {
        log::info!("Loading roster from {}", path);
        return Roster::from_csv_path(&path);
    }
    let names = DEFAULT_ROSTER.iter().map(|s| s.to_string()).collect();
    let labels = DEFAULT_LABELS.iter().map(|s| s.to_string()).collect();
    Ok(Roster::new(names, labels)?)
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let roster = match startup_roster() {
        Ok(r) => r,
        Err(e) => {
            log::error!("Roster configuration rejected: {}", e);
            return Err(std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()));
        }
    };

    let host = std::env::var("HOST").unwrap_or_else(|_| default_host());
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or_else(default_port);
    let bind = (host.as_str(), port);
    log::info!("Starting server at http://{}:{}", bind.0, bind.1);

    let state = Data::new(RwLock::new(HashMap::<TournamentId, TournamentEntry>::new()));
    let roster_data = Data::new(roster);
    // Cookies only need to outlive the in-memory state, which dies with
    // the process; a fresh key per boot is enough.
    let session_key = Key::generate();

    // Background task: every 30 minutes, remove tournaments inactive for 12+ hours
    let state_cleanup = state.clone();
    actix_web::rt::spawn(async move {
        let mut interval = actix_web::rt::time::interval(Duration::from_secs(30 * 60));
        loop {
            interval.tick().await;
            let mut g = match state_cleanup.write() {
                Ok(guard) => guard,
                Err(_) => continue,
            };
            let before = g.len();
            g.retain(|_, entry| entry.last_activity.elapsed() < INACTIVITY_TIMEOUT);
            let removed = before - g.len();
            if removed > 0 {
                log::info!("Cleaned up {} inactive tournament(s) (no activity for 12h)", removed);
            }
        }
    });

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .app_data(roster_data.clone())
            .wrap(
                SessionMiddleware::builder(CookieSessionStore::default(), session_key.clone())
                    .cookie_secure(false)
                    .build(),
            )
            .route("/", web::get().to(serve_index_async))
            .service(api_health)
            .service(favicon)
            .service(api_create_tournament)
            // current must precede the {id} route
            .service(api_current_tournament)
            .service(api_get_tournament)
            .service(api_place)
            .service(api_return_to_pool)
            .service(api_clear_slot)
            .service(api_record_score)
            .service(api_clear_scores)
            .service(api_advance)
            .service(api_seed_sequential)
            .service(api_seed_random)
            .service(api_assign_labels)
            .service(api_reset)
            .service(api_undo)
            .service(Files::new("/static", "static"))
    })
    .bind(bind)?
    .run()
    .await
}

async fn serve_index_async() -> HttpResponse {
    let html = include_str!("../../templates/index.html");
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(html)
}
