//! `/api/songs` routes.

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use super::metrics::record_error;
use super::state::{GuardedCatalogService, ServerState};
use super::{EmptyPageBody, ServerConfig};
use crate::catalog::CatalogError;
use crate::song::{FieldError, Song, SongId, SongInput};
use crate::song_store::Page;

const DEFAULT_PAGE: i64 = 0;
const DEFAULT_PAGE_SIZE: i64 = 3;

/// Paging parameters as sent by the caller. Values that are not integers
/// count as absent, the paging policy decides what to do with the rest.
#[derive(Deserialize, Debug, Default)]
pub struct PageQuery {
    pub page: Option<String>,
    pub size: Option<String>,
}

fn parse_or(value: Option<&str>, default: i64) -> i64 {
    value
        .and_then(|v| v.trim().parse::<i64>().ok())
        .unwrap_or(default)
}

impl PageQuery {
    pub fn page(&self) -> i64 {
        parse_or(self.page.as_deref(), DEFAULT_PAGE)
    }

    pub fn size(&self) -> i64 {
        parse_or(self.size.as_deref(), DEFAULT_PAGE_SIZE)
    }
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
struct SongPageBody {
    songs: Vec<Song>,
    current_page: usize,
    total_items: u64,
    total_pages: u64,
}

#[derive(Serialize, Debug)]
struct MessageBody {
    message: String,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
struct FieldErrorsBody {
    field_errors: Vec<FieldError>,
}

fn message_response(status: StatusCode, message: String) -> Response {
    (status, Json(MessageBody { message })).into_response()
}

impl IntoResponse for CatalogError {
    fn into_response(self) -> Response {
        match self {
            CatalogError::ValidationFailed(errors) => (
                StatusCode::BAD_REQUEST,
                Json(FieldErrorsBody {
                    field_errors: errors.into_inner(),
                }),
            )
                .into_response(),
            CatalogError::CategoryNotFound(_) | CatalogError::SongNotFound(_) => {
                message_response(StatusCode::NOT_FOUND, self.to_string())
            }
            CatalogError::Store(err) => {
                error!("Catalog store failure: {:#}", err);
                record_error("store");
                message_response(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        }
    }
}

fn rejection_response(rejection: JsonRejection) -> Response {
    debug!("Rejected song body: {}", rejection.body_text());
    record_error("bad_request");
    message_response(StatusCode::BAD_REQUEST, rejection.body_text())
}

fn page_response(page: Page<Song>, empty_page_body: EmptyPageBody) -> Response {
    if page.is_empty() && empty_page_body == EmptyPageBody::Omit {
        return StatusCode::OK.into_response();
    }
    let total_pages = page.total_pages();
    Json(SongPageBody {
        current_page: page.page,
        total_items: page.total_items,
        total_pages,
        songs: page.items,
    })
    .into_response()
}

async fn list_songs(
    State(catalog): State<GuardedCatalogService>,
    State(config): State<ServerConfig>,
    Query(query): Query<PageQuery>,
) -> Response {
    match catalog.list_all(query.page(), query.size()) {
        Ok(page) => page_response(page, config.empty_page_body),
        Err(err) => err.into_response(),
    }
}

async fn list_songs_by_category(
    State(catalog): State<GuardedCatalogService>,
    State(config): State<ServerConfig>,
    Path(category): Path<String>,
    Query(query): Query<PageQuery>,
) -> Response {
    match catalog.list_by_category(&category, query.page(), query.size()) {
        Ok(page) => page_response(page, config.empty_page_body),
        Err(err) => err.into_response(),
    }
}

async fn list_songs_by_artist(
    State(catalog): State<GuardedCatalogService>,
    State(config): State<ServerConfig>,
    Path(artist_name): Path<String>,
    Query(query): Query<PageQuery>,
) -> Response {
    match catalog.list_by_artist(&artist_name, query.page(), query.size()) {
        Ok(page) => page_response(page, config.empty_page_body),
        Err(err) => err.into_response(),
    }
}

async fn get_song(
    State(catalog): State<GuardedCatalogService>,
    Path(id): Path<i64>,
) -> Response {
    match catalog.get_by_id(SongId(id)) {
        Ok(song) => Json(song).into_response(),
        Err(err) => err.into_response(),
    }
}

async fn create_song(
    State(catalog): State<GuardedCatalogService>,
    payload: Result<Json<SongInput>, JsonRejection>,
) -> Response {
    let Json(input) = match payload {
        Ok(payload) => payload,
        Err(rejection) => return rejection_response(rejection),
    };
    match catalog.create(input) {
        Ok(song) => (StatusCode::CREATED, Json(song)).into_response(),
        Err(err) => err.into_response(),
    }
}

async fn update_song(
    State(catalog): State<GuardedCatalogService>,
    payload: Result<Json<SongInput>, JsonRejection>,
) -> Response {
    let Json(input) = match payload {
        Ok(payload) => payload,
        Err(rejection) => return rejection_response(rejection),
    };
    match catalog.update(input) {
        Ok(song) => Json(song).into_response(),
        Err(err) => err.into_response(),
    }
}

async fn delete_song(
    State(catalog): State<GuardedCatalogService>,
    Path(id): Path<i64>,
) -> Response {
    match catalog.delete_by_id(SongId(id)) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(err) => err.into_response(),
    }
}

pub fn make_song_routes(state: ServerState) -> Router {
    Router::new()
        .route(
            "/",
            get(list_songs).post(create_song).put(update_song),
        )
        .route("/{id}", get(get_song).delete(delete_song))
        .route("/category/{category}", get(list_songs_by_category))
        .route("/artist/{artist_name}", get(list_songs_by_artist))
        .with_state(state)
}
