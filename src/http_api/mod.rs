use std::{net::SocketAddr, str::FromStr, sync::Arc};

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chrono::NaiveDate;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::{
    AuthError, CalendarGrid, Contract, ContractStatus, CredentialTable, Credentials,
    DashboardSummary, Employee, EmployeeStatus, Invoice, InvoiceStatus, Language, ListFilter,
    LoginSuccess, PayrollLine, PortalStore, Product, ProductCategory, Repository,
    ScheduleViewState, Shift, ShiftConflict, ShiftStatus, StoreError, Translator, ViewMode,
    WorkCalendar, WorkloadRow, find_conflicts, i18n, payroll, report,
};

#[derive(Clone)]
pub struct AppState {
    store: Arc<RwLock<PortalStore>>,
    credentials: Arc<CredentialTable>,
    calendar: Arc<WorkCalendar>,
    default_language: Language,
}

impl AppState {
    pub fn new(store: PortalStore) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
            credentials: Arc::new(CredentialTable::demo()),
            calendar: Arc::new(WorkCalendar::default()),
            default_language: Language::default(),
        }
    }

    pub fn with_credentials(mut self, credentials: CredentialTable) -> Self {
        self.credentials = Arc::new(credentials);
        self
    }

    pub fn with_default_language(mut self, language: Language) -> Self {
        self.default_language = language;
        self
    }

    fn store(&self) -> Arc<RwLock<PortalStore>> {
        self.store.clone()
    }
}

#[derive(Debug, Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
    message: String,
}

#[derive(Debug)]
enum ApiError {
    NotFound(String),
    Conflict(String),
    Invalid(String),
    Unauthorized(String),
    Internal(String),
}

impl ApiError {
    fn not_found(message: impl Into<String>) -> Self {
        ApiError::NotFound(message.into())
    }

    fn invalid(message: impl Into<String>) -> Self {
        ApiError::Invalid(message.into())
    }
}

impl From<StoreError> for ApiError {
    fn from(value: StoreError) -> Self {
        match value {
            StoreError::NotFound { .. } => ApiError::NotFound(value.to_string()),
            StoreError::Duplicate { .. } | StoreError::Transition(_) => {
                ApiError::Conflict(value.to_string())
            }
            StoreError::Io(_) => ApiError::Internal(value.to_string()),
            other => ApiError::Invalid(other.to_string()),
        }
    }
}

impl From<AuthError> for ApiError {
    fn from(value: AuthError) -> Self {
        ApiError::Unauthorized(value.to_string())
    }
}

impl From<polars::prelude::PolarsError> for ApiError {
    fn from(value: polars::prelude::PolarsError) -> Self {
        ApiError::Internal(value.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error, message) = match self {
            ApiError::NotFound(message) => (StatusCode::NOT_FOUND, "not_found", message),
            ApiError::Conflict(message) => (StatusCode::CONFLICT, "conflict", message),
            ApiError::Invalid(message) => (StatusCode::BAD_REQUEST, "invalid_request", message),
            ApiError::Unauthorized(message) => (StatusCode::UNAUTHORIZED, "unauthorized", message),
            ApiError::Internal(message) => {
                tracing::error!(%message, "request failed on the server side");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal", message)
            }
        };
        tracing::debug!(status = status.as_u16(), error, %message, "request failed");
        (status, Json(ErrorBody { error, message })).into_response()
    }
}

fn parse_optional<T>(raw: Option<&str>) -> Result<Option<T>, ApiError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match raw.map(str::trim).filter(|value| !value.is_empty() && *value != "all") {
        Some(value) => value
            .parse::<T>()
            .map(Some)
            .map_err(|err| ApiError::invalid(err.to_string())),
        None => Ok(None),
    }
}

fn parse_date(raw: &str) -> Result<NaiveDate, ApiError> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|_| ApiError::invalid(format!("invalid date '{raw}' (expected YYYY-MM-DD)")))
}

#[derive(Debug, Default, Deserialize)]
struct ListQuery {
    #[serde(default)]
    search: String,
    status: Option<String>,
    category: Option<String>,
}

impl ListQuery {
    fn filter<K>(&self, raw_key: Option<&str>) -> Result<ListFilter<K>, ApiError>
    where
        K: FromStr + Copy + PartialEq,
        K::Err: std::fmt::Display,
    {
        Ok(ListFilter::new(self.search.clone(), parse_optional(raw_key)?))
    }
}

#[derive(Debug, Deserialize)]
struct CalendarQuery {
    anchor: String,
    #[serde(default)]
    mode: Option<String>,
    #[serde(default)]
    search: String,
    status: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SlotQuery {
    date: String,
    hour: u32,
}

#[derive(Debug, Deserialize)]
struct StatusPayload {
    status: String,
}

#[derive(Debug, Deserialize)]
struct PayrollQuery {
    start: String,
    end: String,
}

#[derive(Debug, Serialize)]
struct PayrollResponse {
    start: NaiveDate,
    end: NaiveDate,
    lines: Vec<PayrollLine>,
    total: f64,
}

#[derive(Debug, Deserialize)]
struct DashboardQuery {
    today: String,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/shifts", get(list_shifts).post(create_shift))
        .route("/shifts/:id", get(get_shift).put(update_shift))
        .route("/shifts/:id/status", post(change_shift_status))
        .route("/calendar", get(calendar))
        .route("/calendar/slot", get(calendar_slot))
        .route("/employees", get(list_employees))
        .route("/contracts", get(list_contracts))
        .route("/invoices", get(list_invoices))
        .route("/products", get(list_products))
        .route("/conflicts", get(conflicts))
        .route("/payroll", get(payroll_run))
        .route("/dashboard", get(dashboard))
        .route("/reports/workload", get(workload))
        .route("/login", post(login))
        .route("/i18n/:lang/:key", get(translate))
        .with_state(state)
}

pub async fn serve(addr: SocketAddr, state: AppState) -> std::io::Result<()> {
    let app = router(state);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "http api listening");
    axum::serve(listener, app).await
}

async fn health() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

async fn list_shifts(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<Shift>>, ApiError> {
    let filter = query.filter::<ShiftStatus>(query.status.as_deref())?;
    let store = state.store();
    let guard = store.read();
    Ok(Json(filter.apply(guard.shifts.iter()).into_iter().cloned().collect()))
}

async fn get_shift(
    State(state): State<AppState>,
    Path(shift_id): Path<u32>,
) -> Result<Json<Shift>, ApiError> {
    let store = state.store();
    let shift = store.read().shifts.get(shift_id);
    shift
        .map(Json)
        .ok_or_else(|| ApiError::not_found(format!("shift {shift_id} not found")))
}

async fn create_shift(
    State(state): State<AppState>,
    Json(shift): Json<Shift>,
) -> Result<(StatusCode, Json<Shift>), ApiError> {
    let store = state.store();
    let created = store.write().create_shift(shift)?;
    Ok((StatusCode::CREATED, Json(created)))
}

async fn update_shift(
    State(state): State<AppState>,
    Path(shift_id): Path<u32>,
    Json(shift): Json<Shift>,
) -> Result<Json<Shift>, ApiError> {
    if shift.id != shift_id {
        return Err(ApiError::invalid(
            "shift id in payload does not match path parameter",
        ));
    }
    let store = state.store();
    let updated = store.write().update_shift(shift)?;
    Ok(Json(updated))
}

async fn change_shift_status(
    State(state): State<AppState>,
    Path(shift_id): Path<u32>,
    Json(payload): Json<StatusPayload>,
) -> Result<Json<Shift>, ApiError> {
    let status = payload
        .status
        .parse::<ShiftStatus>()
        .map_err(|err| ApiError::invalid(err.to_string()))?;
    let store = state.store();
    let updated = store.write().set_shift_status(shift_id, status)?;
    Ok(Json(updated))
}

async fn calendar(
    State(state): State<AppState>,
    Query(query): Query<CalendarQuery>,
) -> Result<Json<CalendarGrid>, ApiError> {
    let mut view = ScheduleViewState::new(parse_date(&query.anchor)?);
    if let Some(mode) = parse_optional::<ViewMode>(query.mode.as_deref())? {
        view.mode = mode;
    }
    view.search = query.search;
    view.status_filter = parse_optional(query.status.as_deref())?;

    let store = state.store();
    let shifts = store.read().shifts.list();
    Ok(Json(view.render(&shifts, &state.calendar)))
}

async fn calendar_slot(
    State(state): State<AppState>,
    Query(query): Query<SlotQuery>,
) -> Result<Json<Vec<Shift>>, ApiError> {
    let date = parse_date(&query.date)?;
    if query.hour >= crate::projector::HOURS_PER_DAY {
        return Err(ApiError::invalid(format!(
            "hour {} out of range 0..24",
            query.hour
        )));
    }
    let store = state.store();
    let guard = store.read();
    let shifts = crate::shifts_in_slot(guard.shifts.iter(), date, query.hour)
        .into_iter()
        .cloned()
        .collect();
    Ok(Json(shifts))
}

async fn list_employees(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<Employee>>, ApiError> {
    let filter = query.filter::<EmployeeStatus>(query.status.as_deref())?;
    let store = state.store();
    let guard = store.read();
    Ok(Json(filter.apply(guard.employees.iter()).into_iter().cloned().collect()))
}

async fn list_contracts(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<Contract>>, ApiError> {
    let filter = query.filter::<ContractStatus>(query.status.as_deref())?;
    let store = state.store();
    let guard = store.read();
    Ok(Json(filter.apply(guard.contracts.iter()).into_iter().cloned().collect()))
}

async fn list_invoices(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<Invoice>>, ApiError> {
    let filter = query.filter::<InvoiceStatus>(query.status.as_deref())?;
    let store = state.store();
    let guard = store.read();
    Ok(Json(filter.apply(guard.invoices.iter()).into_iter().cloned().collect()))
}

async fn list_products(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<Product>>, ApiError> {
    let filter = query.filter::<ProductCategory>(query.category.as_deref())?;
    let store = state.store();
    let guard = store.read();
    Ok(Json(filter.apply(guard.products.iter()).into_iter().cloned().collect()))
}

async fn conflicts(State(state): State<AppState>) -> Json<Vec<ShiftConflict>> {
    let store = state.store();
    let guard = store.read();
    Json(find_conflicts(guard.shifts.iter()))
}

async fn payroll_run(
    State(state): State<AppState>,
    Query(query): Query<PayrollQuery>,
) -> Result<Json<PayrollResponse>, ApiError> {
    let start = parse_date(&query.start)?;
    let end = parse_date(&query.end)?;
    if start > end {
        return Err(ApiError::invalid(format!(
            "payroll start {start} is after end {end}"
        )));
    }
    let store = state.store();
    let (shifts, employees) = {
        let guard = store.read();
        (guard.shifts.list(), guard.employees.list())
    };
    let lines = payroll::run_payroll(&shifts, &employees, start, end);
    let total = payroll::payroll_total(&lines);
    Ok(Json(PayrollResponse {
        start,
        end,
        lines,
        total,
    }))
}

async fn dashboard(
    State(state): State<AppState>,
    Query(query): Query<DashboardQuery>,
) -> Result<Json<DashboardSummary>, ApiError> {
    let today = parse_date(&query.today)?;
    let store = state.store();
    let summary = DashboardSummary::build(&store.read(), &state.calendar, today);
    Ok(Json(summary))
}

async fn workload(State(state): State<AppState>) -> Result<Json<Vec<WorkloadRow>>, ApiError> {
    let store = state.store();
    let (shifts, employees) = {
        let guard = store.read();
        (guard.shifts.list(), guard.employees.list())
    };
    Ok(Json(report::workload_by_employee(&shifts, &employees)?))
}

async fn login(
    State(state): State<AppState>,
    Json(credentials): Json<Credentials>,
) -> Result<Json<LoginSuccess>, ApiError> {
    Ok(Json(state.credentials.login(&credentials)?))
}

async fn translate(
    State(state): State<AppState>,
    Path((lang, key)): Path<(String, String)>,
    headers: HeaderMap,
) -> Result<Response, ApiError> {
    let language = if lang == "auto" {
        headers
            .get(header::COOKIE)
            .and_then(|value| value.to_str().ok())
            .and_then(i18n::language_from_cookie)
            .unwrap_or(state.default_language)
    } else {
        lang.parse::<Language>()
            .map_err(|err| ApiError::invalid(err.to_string()))?
    };
    let text = Translator::new(language).translate(&key).to_string();
    Ok(Json(json!({ "language": language, "key": key, "text": text })).into_response())
}
