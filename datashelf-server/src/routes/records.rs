//! Record endpoints
//!
//! The HTML surface: a listing page plus form-driven mutations. Every
//! mutating endpoint answers 303 See Other back to `/` so a page refresh
//! never resubmits the form.

use axum::extract::State;
use axum::response::{Html, Redirect};
use axum::routing::{get, post};
use axum::{Form, Router};
use serde::Deserialize;

use datashelf_core::{RecordCategory, RecordValue};

use crate::db::RecordRepo;
use crate::error::ApiError;
use crate::extractors::RecordId;
use crate::state::AppState;
use crate::view;

/// Form body for POST /add_data
#[derive(Deserialize)]
pub struct AddForm {
    data: Option<String>,
    data_type: Option<String>,
}

/// Form body for POST /update_data/{id}
#[derive(Deserialize)]
pub struct UpdateForm {
    data: Option<String>,
}

/// Form body for POST /create_table
#[derive(Deserialize)]
pub struct CreateTableForm {
    table_name: Option<String>,
}

/// GET / - render the listing page with all records
async fn list_records(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    let records = RecordRepo::new(state.pool()).list().await?;
    Ok(Html(view::listing_page(&records)))
}

/// POST /create_table - accepts a table name but performs no storage action.
///
/// Preserved as a stub; dynamic table creation is deliberately not
/// implemented.
async fn create_table(Form(form): Form<CreateTableForm>) -> Redirect {
    let table_name = form.table_name.unwrap_or_default();
    tracing::debug!(%table_name, "create_table requested, no action taken");
    Redirect::to("/")
}

/// POST /add_data - insert a new record from form fields
async fn add_record(
    State(state): State<AppState>,
    Form(form): Form<AddForm>,
) -> Result<Redirect, ApiError> {
    let value = RecordValue::new(form.data.as_deref().unwrap_or_default())?;
    let category = RecordCategory::new(form.data_type.as_deref().unwrap_or_default())?;

    let record = RecordRepo::new(state.pool()).insert(value, category).await?;
    tracing::info!(id = record.id, "record added");

    Ok(Redirect::to("/"))
}

/// POST /delete_data/{id} - delete a record by id
async fn delete_record(
    State(state): State<AppState>,
    RecordId(id): RecordId,
) -> Result<Redirect, ApiError> {
    RecordRepo::new(state.pool()).delete(id).await?;
    tracing::info!(id, "record deleted");

    Ok(Redirect::to("/"))
}

/// POST /update_data/{id} - replace a record's value, category untouched
async fn update_record(
    State(state): State<AppState>,
    RecordId(id): RecordId,
    Form(form): Form<UpdateForm>,
) -> Result<Redirect, ApiError> {
    let value = RecordValue::new(form.data.as_deref().unwrap_or_default())?;

    let record = RecordRepo::new(state.pool()).update_value(id, value).await?;
    tracing::info!(id = record.id, "record updated");

    Ok(Redirect::to("/"))
}

/// Record routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_records))
        .route("/create_table", post(create_table))
        .route("/add_data", post(add_record))
        .route("/delete_data/{id}", post(delete_record))
        .route("/update_data/{id}", post(update_record))
}
