//! Handlers for the `/movies` resource.
//!
//! Creation runs the enrichment flow: a submission missing `year` or
//! `description` is completed from the metadata provider before the
//! duplicate check, so the natural key compared is the enriched one.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use validator::Validate;
use reelbase_core::enrichment::Submission;
use reelbase_core::error::CoreError;
use reelbase_core::movie::ENTITY_MOVIE;
use reelbase_core::types::DbId;
use reelbase_db::models::movie::{CreateMovie, Movie, MovieListParams, UpdateMovie};
use reelbase_db::repositories::MovieRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppQuery};
use crate::state::AppState;

/// POST /movies/
///
/// Provider failures during enrichment are not swallowed; they surface as
/// 502 so the client can tell an outage from a bad request.
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateMovie>,
) -> AppResult<(StatusCode, Json<Movie>)> {
    input.validate()?;
    let input = input.normalized();

    let submission = Submission {
        year: input.year,
        description: input.description,
    };
    let submission = if submission.needs_enrichment() {
        let metadata = state.provider.lookup_by_title(&input.title).await?;
        tracing::debug!(
            title = %input.title,
            found = metadata.is_some(),
            "Enrichment lookup finished"
        );
        submission.enrich(metadata)
    } else {
        submission
    };

    let input = CreateMovie {
        title: input.title,
        year: submission.year,
        description: submission.description,
    };

    if MovieRepo::find_by_title_year(&state.pool, &input.title, input.year.as_deref())
        .await?
        .is_some()
    {
        return Err(AppError::Core(CoreError::Conflict(format!(
            "Movie '{}' ({}) already exists",
            input.title,
            input.year.as_deref().unwrap_or("no year")
        ))));
    }

    let movie = MovieRepo::create(&state.pool, &input).await?;
    tracing::info!(movie_id = movie.id, title = %movie.title, "Movie created");

    Ok((StatusCode::CREATED, Json(movie)))
}

/// GET /movies/?skip=&limit=&q=
pub async fn list(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<MovieListParams>,
) -> AppResult<Json<Vec<Movie>>> {
    if let Some(q) = params.q.as_deref() {
        tracing::debug!(q, "Title search is not applied to movie listing");
    }
    let movies = MovieRepo::list(&state.pool, params.offset(), params.limit()).await?;
    Ok(Json(movies))
}

/// GET /movies/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Movie>> {
    let movie = MovieRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: ENTITY_MOVIE,
            id,
        }))?;
    Ok(Json(movie))
}

/// PUT /movies/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    AppJson(input): AppJson<UpdateMovie>,
) -> AppResult<Json<Movie>> {
    input.validate()?;
    let movie = MovieRepo::update(&state.pool, id, &input.normalized())
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: ENTITY_MOVIE,
            id,
        }))?;

    tracing::info!(movie_id = id, "Movie updated");

    Ok(Json(movie))
}

/// DELETE /movies/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = MovieRepo::delete(&state.pool, id).await?;
    if deleted {
        tracing::info!(movie_id = id, "Movie deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: ENTITY_MOVIE,
            id,
        }))
    }
}
