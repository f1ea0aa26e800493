// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

use axum::{
    Json, Router,
    extract::{MatchedPath, Path, Query, State as AxumState},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use clap::Parser;
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use std::sync::Arc;
use time::{Date, OffsetDateTime};
use tokio::sync::Mutex;
use tracing::{error, info, warn};
use warden_api::{
    AddCrimeRecordRequest, AddEquipmentRequest, AddExpenseRequest, AddMedicalNoteRequest,
    AdmitPrisonerRequest, ApiError, AssignGunRequest, AssignSupervisorRequest, AuditEventInfo,
    AuthenticatedActor, BlockSummaryResponse, CellInfo, CommandRequest, ContainmentRequest,
    CreateBlockRequest, CreateCellRequest, CreateDepartmentRequest, CreateFacilityRequest,
    CreateRoomRequest, CreateScheduleRequest, DeleteBlockRequest, DeleteCellRequest,
    DeleteDepartmentRequest, DeleteFacilityRequest, DeleteRoomRequest, DeleteScheduleRequest,
    DepartmentInfo, DismissStaffRequest, FacilityInfo, GunInfo, HireStaffRequest,
    ListFacilitiesResponse, ListGunsResponse, LogVisitRequest, PrisonerInfo, RegisterGunRequest,
    RegisterVisitorRequest, ReleasePrisonerRequest, RelocationPreviewResponse,
    RemoveSupervisorRequest, RemoveVisitorRequest, RetireGunRequest, ReturnGunRequest, Role,
    RoomInfo, StaffInfo, TransferPrisonerRequest, UpdateBlockRequest, UpdateCellRequest,
    UpdateDepartmentRequest, UpdateFacilityRequest, UpdatePrisonerRequest, UpdateRoomRequest,
    UpdateScheduleRequest, UpdateStaffRequest, UpdateVisitorRequest, VisitorInfo,
    WorkingHoursResponse, WriteResponse, authenticate_stub,
};
use warden_audit::Cause;
use warden_persistence::Persistence;

#[cfg(test)]
mod tests;

/// Warden Server - HTTP server for the Warden facility management system
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the `SQLite` database file. If not provided, uses in-memory database.
    #[arg(short, long)]
    database: Option<String>,

    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3000)]
    port: u16,

    /// Address to bind the server to
    #[arg(short, long, default_value = "127.0.0.1")]
    bind: String,
}

/// Application state shared across handlers.
///
/// Every request holds the lock for its whole unit of work, so writes are
/// applied one at a time.
#[derive(Clone)]
struct AppState {
    /// The persistence layer for the system state and its audit trail.
    persistence: Arc<Mutex<Persistence>>,
}

/// A write request together with the identity of whoever sends it.
///
/// The request's own fields sit next to the attribution fields in the
/// same JSON object.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct WriteEnvelope<R> {
    /// The actor ID performing this action.
    actor_id: String,
    /// The role of the actor.
    actor_role: String,
    /// The cause ID for this action.
    cause_id: String,
    /// The cause description.
    cause_description: String,
    /// The request itself.
    #[serde(flatten)]
    request: R,
}

/// Query parameters for a relocation preview.
#[derive(Debug, Deserialize)]
struct RelocationQuery {
    /// The proposed capacity. Without it the preview covers deleting the cell.
    capacity: Option<u32>,
}

/// Query parameters for a working-hours check.
#[derive(Debug, Deserialize)]
struct WorkingHoursQuery {
    /// Time of day, `HH:MM` or `HH:MM:SS`.
    time: String,
}

/// Error response type.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ErrorResponse {
    /// Error indicator.
    error: bool,
    /// Error message.
    message: String,
}

/// HTTP error wrapper that implements `IntoResponse`.
struct HttpError {
    /// The HTTP status code.
    status: StatusCode,
    /// The error message.
    message: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body: Json<ErrorResponse> = Json(ErrorResponse {
            error: true,
            message: self.message,
        });
        (self.status, body).into_response()
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        let status: StatusCode = match err {
            ApiError::AuthenticationFailed { .. } => StatusCode::UNAUTHORIZED,
            ApiError::Unauthorized { .. } => StatusCode::FORBIDDEN,
            ApiError::DomainRuleViolation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::InvalidInput { .. } => StatusCode::BAD_REQUEST,
            ApiError::ResourceNotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Internal { .. } => {
                error!(error = %err, "Internal error");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        Self {
            status,
            message: err.to_string(),
        }
    }
}

/// The observation date for date validation and derived values.
fn today() -> Date {
    OffsetDateTime::now_utc().date()
}

/// Handler for every POST endpoint.
///
/// Authenticates the sender, then hands the request to the API layer which
/// authorizes, applies and persists it.
async fn handle_write<R>(
    AxumState(app_state): AxumState<AppState>,
    matched_path: MatchedPath,
    Json(envelope): Json<WriteEnvelope<R>>,
) -> Result<Json<WriteResponse>, HttpError>
where
    R: CommandRequest + DeserializeOwned + Send + 'static,
{
    info!(
        path = matched_path.as_str(),
        actor_id = %envelope.actor_id,
        role = %envelope.actor_role,
        "Handling write request"
    );

    let role: Role = envelope.actor_role.parse::<Role>().map_err(ApiError::from)?;
    let actor: AuthenticatedActor =
        authenticate_stub(envelope.actor_id.clone(), role).map_err(ApiError::from)?;
    let cause: Cause = Cause::new(envelope.cause_id, envelope.cause_description);

    let mut persistence = app_state.persistence.lock().await;
    let result: Result<WriteResponse, ApiError> =
        warden_api::submit(&mut persistence, &envelope.request, &actor, cause, today());
    drop(persistence);

    match result {
        Ok(response) => Ok(Json(response)),
        Err(err) => {
            warn!(path = matched_path.as_str(), error = %err, "Write request rejected");
            Err(err.into())
        }
    }
}

/// Handler for GET `/facilities`.
async fn handle_list_facilities(
    AxumState(app_state): AxumState<AppState>,
) -> Result<Json<ListFacilitiesResponse>, HttpError> {
    info!("Handling list_facilities request");
    let mut persistence = app_state.persistence.lock().await;
    let response: ListFacilitiesResponse = warden_api::list_facilities(&mut persistence, today())?;
    Ok(Json(response))
}

/// Handler for GET `/facilities/{facility_id}`.
async fn handle_get_facility(
    AxumState(app_state): AxumState<AppState>,
    Path(facility_id): Path<i64>,
) -> Result<Json<FacilityInfo>, HttpError> {
    info!(facility_id, "Handling get_facility request");
    let mut persistence = app_state.persistence.lock().await;
    let response: FacilityInfo = warden_api::get_facility(&mut persistence, facility_id, today())?;
    Ok(Json(response))
}

/// Handler for GET `/blocks/{block_id}/summary`.
async fn handle_get_block_summary(
    AxumState(app_state): AxumState<AppState>,
    Path(block_id): Path<i64>,
) -> Result<Json<BlockSummaryResponse>, HttpError> {
    info!(block_id, "Handling get_block_summary request");
    let mut persistence = app_state.persistence.lock().await;
    let response: BlockSummaryResponse =
        warden_api::get_block_summary(&mut persistence, block_id, today())?;
    Ok(Json(response))
}

/// Handler for GET `/cells/{cell_id}`.
async fn handle_get_cell(
    AxumState(app_state): AxumState<AppState>,
    Path(cell_id): Path<i64>,
) -> Result<Json<CellInfo>, HttpError> {
    info!(cell_id, "Handling get_cell request");
    let mut persistence = app_state.persistence.lock().await;
    let response: CellInfo = warden_api::get_cell(&mut persistence, cell_id, today())?;
    Ok(Json(response))
}

/// Handler for GET `/cells/{cell_id}/relocation`.
///
/// Shows where displaced occupants would go, without changing anything.
async fn handle_preview_relocation(
    AxumState(app_state): AxumState<AppState>,
    Path(cell_id): Path<i64>,
    Query(params): Query<RelocationQuery>,
) -> Result<Json<RelocationPreviewResponse>, HttpError> {
    info!(
        cell_id,
        capacity = ?params.capacity,
        "Handling preview_relocation request"
    );
    let mut persistence = app_state.persistence.lock().await;
    let response: RelocationPreviewResponse =
        warden_api::preview_relocation(&mut persistence, cell_id, params.capacity, today())?;
    Ok(Json(response))
}

/// Handler for GET `/prisoners/{prisoner_id}`.
async fn handle_get_prisoner(
    AxumState(app_state): AxumState<AppState>,
    Path(prisoner_id): Path<i64>,
) -> Result<Json<PrisonerInfo>, HttpError> {
    info!(prisoner_id, "Handling get_prisoner request");
    let mut persistence = app_state.persistence.lock().await;
    let response: PrisonerInfo = warden_api::get_prisoner(&mut persistence, prisoner_id, today())?;
    Ok(Json(response))
}

/// Handler for GET `/visitors/{visitor_id}`.
async fn handle_get_visitor(
    AxumState(app_state): AxumState<AppState>,
    Path(visitor_id): Path<i64>,
) -> Result<Json<VisitorInfo>, HttpError> {
    info!(visitor_id, "Handling get_visitor request");
    let mut persistence = app_state.persistence.lock().await;
    let response: VisitorInfo = warden_api::get_visitor(&mut persistence, visitor_id, today())?;
    Ok(Json(response))
}

/// Handler for GET `/rooms/{room_id}`.
async fn handle_get_room(
    AxumState(app_state): AxumState<AppState>,
    Path(room_id): Path<i64>,
) -> Result<Json<RoomInfo>, HttpError> {
    info!(room_id, "Handling get_room request");
    let mut persistence = app_state.persistence.lock().await;
    let response: RoomInfo = warden_api::get_room(&mut persistence, room_id, today())?;
    Ok(Json(response))
}

/// Handler for GET `/departments/{department_id}`.
async fn handle_get_department(
    AxumState(app_state): AxumState<AppState>,
    Path(department_id): Path<i64>,
) -> Result<Json<DepartmentInfo>, HttpError> {
    info!(department_id, "Handling get_department request");
    let mut persistence = app_state.persistence.lock().await;
    let response: DepartmentInfo =
        warden_api::get_department(&mut persistence, department_id, today())?;
    Ok(Json(response))
}

/// Handler for GET `/staff/{staff_id}`.
async fn handle_get_staff(
    AxumState(app_state): AxumState<AppState>,
    Path(staff_id): Path<i64>,
) -> Result<Json<StaffInfo>, HttpError> {
    info!(staff_id, "Handling get_staff request");
    let mut persistence = app_state.persistence.lock().await;
    let response: StaffInfo = warden_api::get_staff(&mut persistence, staff_id, today())?;
    Ok(Json(response))
}

/// Handler for GET `/schedules/{schedule_id}/working_hours`.
async fn handle_check_working_hours(
    AxumState(app_state): AxumState<AppState>,
    Path(schedule_id): Path<i64>,
    Query(params): Query<WorkingHoursQuery>,
) -> Result<Json<WorkingHoursResponse>, HttpError> {
    info!(schedule_id, time = %params.time, "Handling check_working_hours request");
    let mut persistence = app_state.persistence.lock().await;
    let response: WorkingHoursResponse =
        warden_api::check_working_hours(&mut persistence, schedule_id, &params.time, today())?;
    Ok(Json(response))
}

/// Handler for GET `/guns`.
async fn handle_list_guns(
    AxumState(app_state): AxumState<AppState>,
) -> Result<Json<ListGunsResponse>, HttpError> {
    info!("Handling list_guns request");
    let mut persistence = app_state.persistence.lock().await;
    let response: ListGunsResponse = warden_api::list_guns(&mut persistence, today())?;
    Ok(Json(response))
}

/// Handler for GET `/guns/{serial_number}`.
async fn handle_get_gun(
    AxumState(app_state): AxumState<AppState>,
    Path(serial_number): Path<String>,
) -> Result<Json<GunInfo>, HttpError> {
    info!(serial_number = %serial_number, "Handling get_gun request");
    let mut persistence = app_state.persistence.lock().await;
    let response: GunInfo = warden_api::get_gun(&mut persistence, &serial_number, today())?;
    Ok(Json(response))
}

/// Handler for GET `/audit/timeline`.
///
/// Returns every audit event in the order it was recorded.
async fn handle_get_audit_timeline(
    AxumState(app_state): AxumState<AppState>,
) -> Result<Json<Vec<AuditEventInfo>>, HttpError> {
    info!("Handling get_audit_timeline request");
    let mut persistence = app_state.persistence.lock().await;
    let response: Vec<AuditEventInfo> = warden_api::get_audit_timeline(&mut persistence)?;
    Ok(Json(response))
}

/// Handler for GET `/audit/event/{event_id}`.
async fn handle_get_audit_event(
    AxumState(app_state): AxumState<AppState>,
    Path(event_id): Path<i64>,
) -> Result<Json<AuditEventInfo>, HttpError> {
    info!(event_id, "Handling get_audit_event request");
    let mut persistence = app_state.persistence.lock().await;
    let response: AuditEventInfo = warden_api::get_audit_event(&mut persistence, event_id)?;
    Ok(Json(response))
}

/// Builds the application router with all endpoints.
fn build_router(app_state: AppState) -> Router {
    Router::new()
        // Housing
        .route(
            "/facilities",
            post(handle_write::<CreateFacilityRequest>).get(handle_list_facilities),
        )
        .route("/facilities/update", post(handle_write::<UpdateFacilityRequest>))
        .route("/facilities/delete", post(handle_write::<DeleteFacilityRequest>))
        .route("/facilities/{facility_id}", get(handle_get_facility))
        .route("/blocks", post(handle_write::<CreateBlockRequest>))
        .route("/blocks/update", post(handle_write::<UpdateBlockRequest>))
        .route("/blocks/delete", post(handle_write::<DeleteBlockRequest>))
        .route("/blocks/{block_id}/summary", get(handle_get_block_summary))
        .route("/cells", post(handle_write::<CreateCellRequest>))
        .route("/cells/update", post(handle_write::<UpdateCellRequest>))
        .route("/cells/delete", post(handle_write::<DeleteCellRequest>))
        .route("/cells/{cell_id}", get(handle_get_cell))
        .route("/cells/{cell_id}/relocation", get(handle_preview_relocation))
        // Occupants and visits
        .route("/prisoners", post(handle_write::<AdmitPrisonerRequest>))
        .route("/prisoners/update", post(handle_write::<UpdatePrisonerRequest>))
        .route("/prisoners/transfer", post(handle_write::<TransferPrisonerRequest>))
        .route("/prisoners/release", post(handle_write::<ReleasePrisonerRequest>))
        .route("/prisoners/crime_records", post(handle_write::<AddCrimeRecordRequest>))
        .route("/prisoners/medical_notes", post(handle_write::<AddMedicalNoteRequest>))
        .route("/prisoners/{prisoner_id}", get(handle_get_prisoner))
        .route("/visitors", post(handle_write::<RegisterVisitorRequest>))
        .route("/visitors/update", post(handle_write::<UpdateVisitorRequest>))
        .route("/visitors/remove", post(handle_write::<RemoveVisitorRequest>))
        .route("/visitors/{visitor_id}", get(handle_get_visitor))
        .route("/visits", post(handle_write::<LogVisitRequest>))
        // Organization
        .route("/rooms", post(handle_write::<CreateRoomRequest>))
        .route("/rooms/update", post(handle_write::<UpdateRoomRequest>))
        .route("/rooms/equipment", post(handle_write::<AddEquipmentRequest>))
        .route("/rooms/delete", post(handle_write::<DeleteRoomRequest>))
        .route("/rooms/{room_id}", get(handle_get_room))
        .route("/departments", post(handle_write::<CreateDepartmentRequest>))
        .route("/departments/update", post(handle_write::<UpdateDepartmentRequest>))
        .route("/departments/expenses", post(handle_write::<AddExpenseRequest>))
        .route("/departments/delete", post(handle_write::<DeleteDepartmentRequest>))
        .route("/departments/{department_id}", get(handle_get_department))
        .route("/containment", post(handle_write::<ContainmentRequest>))
        // Staff
        .route("/staff", post(handle_write::<HireStaffRequest>))
        .route("/staff/update", post(handle_write::<UpdateStaffRequest>))
        .route("/staff/dismiss", post(handle_write::<DismissStaffRequest>))
        .route("/staff/{staff_id}", get(handle_get_staff))
        .route("/supervision", post(handle_write::<AssignSupervisorRequest>))
        .route("/supervision/remove", post(handle_write::<RemoveSupervisorRequest>))
        .route("/schedules", post(handle_write::<CreateScheduleRequest>))
        .route("/schedules/update", post(handle_write::<UpdateScheduleRequest>))
        .route("/schedules/delete", post(handle_write::<DeleteScheduleRequest>))
        .route(
            "/schedules/{schedule_id}/working_hours",
            get(handle_check_working_hours),
        )
        // Weapons
        .route(
            "/guns",
            post(handle_write::<RegisterGunRequest>).get(handle_list_guns),
        )
        .route("/guns/retire", post(handle_write::<RetireGunRequest>))
        .route("/guns/assign", post(handle_write::<AssignGunRequest>))
        .route("/guns/return", post(handle_write::<ReturnGunRequest>))
        .route("/guns/{serial_number}", get(handle_get_gun))
        // Audit
        .route("/audit/timeline", get(handle_get_audit_timeline))
        .route("/audit/event/{event_id}", get(handle_get_audit_event))
        .with_state(app_state)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing Warden Server");

    let persistence: Persistence = if let Some(db_path) = &args.database {
        info!("Using file-based database at: {}", db_path);
        Persistence::new_with_file(db_path)?
    } else {
        info!("Using in-memory database");
        Persistence::new_in_memory()?
    };

    let app_state: AppState = AppState {
        persistence: Arc::new(Mutex::new(persistence)),
    };

    let app: Router = build_router(app_state);

    let addr: std::net::SocketAddr = format!("{}:{}", args.bind, args.port).parse()?;
    info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
