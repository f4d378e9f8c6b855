use std::sync::Arc;
use axum::{
    extract::{Json, Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::FixedOffset;
use tracing::{info, instrument, warn};

use health_tracker_data::repository::HealthRecordRepository;
use health_tracker_domain::entities::{NewHealthRecord, RecordType, UpdateHealthRecord};
use health_tracker_domain::services::{strip_trailing_zero, HealthRecordService, HealthRecordServiceTrait};

use crate::config::offset_from_minutes;
use crate::entities::common::{validate_request, ApiJson, ErrorResponse};
use crate::entities::records::{
    CreateRecordRequest, HealthRecordResponse, HeightResponse, RecordsQueryParams, UpdateRecordRequest,
};

/// Service type for dependency injection
pub type RecordService = Arc<dyn HealthRecordServiceTrait>;

/// State shared by the record handlers
#[derive(Clone)]
pub struct RecordsState {
    /// Record service
    pub service: RecordService,
    /// Owner offset used when a request does not carry one
    pub default_offset: FixedOffset,
}

impl RecordsState {
    pub fn new(service: RecordService, default_offset: FixedOffset) -> Self {
        Self { service, default_offset }
    }
}

/// Create a record service over the given repository
pub fn create_service(repository: HealthRecordRepository) -> RecordService {
    Arc::new(HealthRecordService::new(repository))
}

/// Create and save a new health record
#[utoipa::path(
    post,
    path = "/api/v1/records",
    request_body = CreateRecordRequest,
    responses(
        (status = 201, description = "Health record created", body = HealthRecordResponse),
        (status = 400, description = "Invalid request", body = ErrorResponse),
        (status = 422, description = "No reading attached", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    tag = "records"
)]
#[instrument(skip(state, request))]
pub async fn create_record(
    State(state): State<RecordsState>,
    ApiJson(request): ApiJson<CreateRecordRequest>,
) -> Result<impl IntoResponse, ErrorResponse> {
    validate_request(&request)?;

    let owner_offset = match request.utc_offset_minutes {
        Some(minutes) => offset_from_minutes(minutes).ok_or_else(|| {
            warn!("Rejected UTC offset of {} minutes", minutes);
            ErrorResponse::validation_error("utc_offset_minutes must be between -1439 and 1439", None)
        })?,
        None => state.default_offset,
    };

    let draft = NewHealthRecord {
        owner_id: request.owner_id,
        owner_offset,
        measurement: request.measurement.map(Into::into),
        record_date: request.record_date,
        details: request.details,
    };

    let record = state.service.create_record(draft).await?;
    info!("Health record created with ID: {}", record.id);

    Ok((StatusCode::CREATED, Json(HealthRecordResponse::from(record))))
}

/// List or search an owner's active records
#[utoipa::path(
    get,
    path = "/api/v1/records",
    params(RecordsQueryParams),
    responses(
        (status = 200, description = "Active records, oldest record date first", body = [HealthRecordResponse]),
        (status = 400, description = "Unknown kind", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    tag = "records"
)]
#[instrument(skip(state))]
pub async fn list_records(
    State(state): State<RecordsState>,
    Query(params): Query<RecordsQueryParams>,
) -> Result<impl IntoResponse, ErrorResponse> {
    let records = match params.q.as_deref() {
        Some(query) => state.service.search_records(&params.owner_id, query).await?,
        None => {
            let kind = match params.kind.as_deref() {
                Some(kind) => match RecordType::parse(kind) {
                    RecordType::Unknown => {
                        return Err(ErrorResponse::bad_request(format!(
                            "Unknown kind '{}'. Use blood_pressure or body_physique",
                            kind
                        )))
                    }
                    record_type => Some(record_type),
                },
                None => None,
            };
            state.service.list_records(&params.owner_id, kind).await?
        }
    };

    let response: Vec<HealthRecordResponse> = records.into_iter().map(HealthRecordResponse::from).collect();
    Ok((StatusCode::OK, Json(response)))
}

/// Get a single health record by ID, active or not
#[utoipa::path(
    get,
    path = "/api/v1/records/{id}",
    params(
        ("id" = String, Path, description = "Health record ID")
    ),
    responses(
        (status = 200, description = "Health record found", body = HealthRecordResponse),
        (status = 404, description = "Health record not found", body = ErrorResponse),
        (status = 422, description = "Stored record has no reading", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    tag = "records"
)]
#[instrument(skip(state))]
pub async fn get_record(
    State(state): State<RecordsState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ErrorResponse> {
    let record = state.service.get_record(&id).await?;
    Ok((StatusCode::OK, Json(HealthRecordResponse::from(record))))
}

/// Update a health record; key words are derived again
#[utoipa::path(
    put,
    path = "/api/v1/records/{id}",
    params(
        ("id" = String, Path, description = "Health record ID")
    ),
    request_body = UpdateRecordRequest,
    responses(
        (status = 200, description = "Health record updated", body = HealthRecordResponse),
        (status = 400, description = "Invalid request", body = ErrorResponse),
        (status = 404, description = "Health record not found or inactive", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    tag = "records"
)]
#[instrument(skip(state, request))]
pub async fn update_record(
    State(state): State<RecordsState>,
    Path(id): Path<String>,
    ApiJson(request): ApiJson<UpdateRecordRequest>,
) -> Result<impl IntoResponse, ErrorResponse> {
    validate_request(&request)?;

    let changes = UpdateHealthRecord {
        measurement: request.measurement.map(Into::into),
        record_date: request.record_date,
        details: request.details,
    };

    let record = state.service.update_record(&id, changes).await?;
    info!("Health record {} updated", record.id);

    Ok((StatusCode::OK, Json(HealthRecordResponse::from(record))))
}

/// Soft-delete a health record
#[utoipa::path(
    delete,
    path = "/api/v1/records/{id}",
    params(
        ("id" = String, Path, description = "Health record ID")
    ),
    responses(
        (status = 200, description = "Health record deactivated", body = HealthRecordResponse),
        (status = 404, description = "Health record not found or already inactive", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    tag = "records"
)]
#[instrument(skip(state))]
pub async fn delete_record(
    State(state): State<RecordsState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ErrorResponse> {
    let record = state.service.deactivate_record(&id).await?;
    Ok((StatusCode::OK, Json(HealthRecordResponse::from(record))))
}

/// Latest active blood pressure record of an owner
#[utoipa::path(
    get,
    path = "/api/v1/owners/{owner_id}/latest/blood-pressure",
    params(
        ("owner_id" = String, Path, description = "Owner ID")
    ),
    responses(
        (status = 200, description = "Latest blood pressure record", body = HealthRecordResponse),
        (status = 404, description = "Owner has no blood pressure record", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    tag = "records"
)]
#[instrument(skip(state))]
pub async fn latest_blood_pressure(
    State(state): State<RecordsState>,
    Path(owner_id): Path<String>,
) -> Result<impl IntoResponse, ErrorResponse> {
    let record = state
        .service
        .latest_blood_pressure(&owner_id)
        .await?
        .ok_or_else(|| ErrorResponse::not_found(format!("No blood pressure record for owner {}", owner_id)))?;

    Ok((StatusCode::OK, Json(HealthRecordResponse::from(record))))
}

/// Latest active body physique record of an owner, by record date
#[utoipa::path(
    get,
    path = "/api/v1/owners/{owner_id}/latest/body-physique",
    params(
        ("owner_id" = String, Path, description = "Owner ID")
    ),
    responses(
        (status = 200, description = "Latest body physique record", body = HealthRecordResponse),
        (status = 404, description = "Owner has no body physique record", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    tag = "records"
)]
#[instrument(skip(state))]
pub async fn latest_body_physique(
    State(state): State<RecordsState>,
    Path(owner_id): Path<String>,
) -> Result<impl IntoResponse, ErrorResponse> {
    let record = state
        .service
        .latest_body_physique(&owner_id)
        .await?
        .ok_or_else(|| ErrorResponse::not_found(format!("No body physique record for owner {}", owner_id)))?;

    Ok((StatusCode::OK, Json(HealthRecordResponse::from(record))))
}

/// Height of the owner's latest body physique record
#[utoipa::path(
    get,
    path = "/api/v1/owners/{owner_id}/latest/height",
    params(
        ("owner_id" = String, Path, description = "Owner ID")
    ),
    responses(
        (status = 200, description = "Latest height", body = HeightResponse),
        (status = 404, description = "Owner has no body physique record", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    tag = "records"
)]
#[instrument(skip(state))]
pub async fn latest_height(
    State(state): State<RecordsState>,
    Path(owner_id): Path<String>,
) -> Result<impl IntoResponse, ErrorResponse> {
    let height_cm = state
        .service
        .latest_height(&owner_id)
        .await?
        .ok_or_else(|| ErrorResponse::not_found(format!("No height recorded for owner {}", owner_id)))?;

    Ok((
        StatusCode::OK,
        Json(HeightResponse {
            owner_id,
            height_cm: strip_trailing_zero(height_cm),
        }),
    ))
}
