use askama::Template;
use axum::{
    extract::{Path, State},
    http::{header, HeaderMap, HeaderValue, StatusCode},
    response::{Html, IntoResponse, Response},
    Form,
};
use serde::Deserialize;

use crate::{
    pkg::{
        internal::adaptors::jobs::{mutators::JobMutator, selectors::JobSelector, spec::JobForm},
        server::{
            state::{AppState, CreateDialog, GenerateDialog},
            uispec::JobTable,
        },
    },
    prelude::Result,
};

// failures keep the previous set on screen, overtaken loads are dropped
pub(crate) async fn reload(state: &AppState, tag: &str) {
    let seq = state.next_load_seq();
    {
        state.shell.write().await.loading = true;
    }
    let outcome = JobSelector::new(&state.jobs_client).list(tag).await;
    let mut shell = state.shell.write().await;
    shell.loading = false;
    match outcome {
        Ok(jobs) => {
            if !shell.apply_load(seq, jobs) {
                tracing::debug!("dropping overtaken load for tag '{}'", tag);
            }
        }
        Err(e) => {
            tracing::error!("failed to fetch jobs for tag '{}': {}", tag, &e);
        }
    }
}

#[derive(Deserialize)]
pub struct FilterInput {
    #[serde(default)]
    pub tag: String,
}

// one reload for the tag that was active when the change fired, then one
// for the fresh selection; the second load is the one that sticks
pub async fn filter(
    State(state): State<AppState>,
    Form(input): Form<FilterInput>,
) -> Result<Html<String>> {
    let previous = {
        let mut shell = state.shell.write().await;
        std::mem::replace(&mut shell.tag, input.tag.clone())
    };
    reload(&state, &previous).await;
    reload(&state, &input.tag).await;

    let shell = state.shell.read().await;
    Ok(Html(JobTable::build(&shell).render()?))
}

pub async fn create(
    State(state): State<AppState>,
    Form(input): Form<JobForm>,
) -> Result<HeaderMap> {
    {
        state.shell.write().await.create = CreateDialog::Closed;
    }
    let job = input.into_listing();
    match JobMutator::new(&state.jobs_client).create(&job).await {
        Ok(StatusCode::CREATED) => {
            {
                state.shell.write().await.tag.clear();
            }
            reload(&state, "").await;
        }
        Ok(status) => {
            tracing::debug!("create was not acknowledged, backend returned {}", status);
        }
        Err(e) => {
            tracing::error!("failed to create job: {}", &e);
        }
    }
    Ok(redirect_home())
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Form(input): Form<JobForm>,
) -> Result<HeaderMap> {
    {
        state.table.write().await.close_dialog();
    }
    let job = input.into_listing();
    match JobMutator::new(&state.jobs_client).update(&id, &job).await {
        Ok(StatusCode::OK) => {
            {
                state.shell.write().await.tag.clear();
            }
            reload(&state, "").await;
        }
        Ok(status) => {
            tracing::debug!(
                "update of job {} was not acknowledged, backend returned {}",
                &id,
                status
            );
        }
        Err(e) => {
            tracing::error!("failed to update job {}: {}", &id, &e);
        }
    }
    Ok(redirect_home())
}

pub async fn delete(State(state): State<AppState>) -> Result<HeaderMap> {
    let pending = state.table.write().await.take_pending_delete();
    if let Some(id) = pending {
        match JobMutator::new(&state.jobs_client).delete(&id).await {
            Ok(StatusCode::NO_CONTENT) => {
                {
                    state.shell.write().await.tag.clear();
                }
                reload(&state, "").await;
            }
            Ok(status) => {
                tracing::debug!(
                    "delete of job {} was not acknowledged, backend returned {}",
                    &id,
                    status
                );
            }
            Err(e) => {
                tracing::error!("failed to delete job {}: {}", &id, &e);
            }
        }
    }
    Ok(redirect_home())
}

#[derive(Deserialize)]
pub struct GenerateInput {
    #[serde(default)]
    pub tag: String,
}

pub async fn generate(
    State(state): State<AppState>,
    Form(input): Form<GenerateInput>,
) -> Result<HeaderMap> {
    {
        state.shell.write().await.generate = GenerateDialog::Closed;
    }
    match JobMutator::new(&state.jobs_client).scrape(&input.tag).await {
        Ok(StatusCode::OK) => {
            {
                state.shell.write().await.tag.clear();
            }
            reload(&state, "").await;
        }
        Ok(status) => {
            tracing::debug!(
                "scrape for tag '{}' was not acknowledged, backend returned {}",
                &input.tag,
                status
            );
        }
        Err(e) => {
            tracing::error!("failed to scrape jobs for tag '{}': {}", &input.tag, &e);
        }
    }
    Ok(redirect_home())
}

// a failed export answers an empty 204 and the page stays put
pub async fn export(State(state): State<AppState>) -> Result<Response> {
    let tag = state.shell.read().await.tag.clone();
    match JobSelector::new(&state.jobs_client).export(&tag).await {
        Ok(payload) => Ok((
            [
                (
                    header::CONTENT_TYPE,
                    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
                ),
                (
                    header::CONTENT_DISPOSITION,
                    "attachment; filename=\"jobs_export.xlsx\"",
                ),
            ],
            payload,
        )
            .into_response()),
        Err(e) => {
            tracing::error!("failed to export jobs for tag '{}': {}", &tag, &e);
            Ok(StatusCode::NO_CONTENT.into_response())
        }
    }
}

fn redirect_home() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert("HX-Redirect", HeaderValue::from_static("/"));
    headers
}
