use askama::Template;
use axum::{
    extract::{Path, Query, State},
    response::Html,
    Form,
};
use serde::Deserialize;

use crate::{
    pkg::{
        internal::adaptors::jobs::spec::JobForm,
        server::{
            state::{AppState, CreateDialog, GenerateDialog},
            uispec::{
                ConfirmDialogView, CreateDialogView, GenerateDialogView, Home, JobTable,
                RecordDialogView,
            },
        },
    },
    prelude::Result,
};

pub async fn home(State(state): State<AppState>) -> Result<Html<String>> {
    let shell = state.shell.read().await.clone();
    let table = state.table.read().await.clone();
    Ok(Html(Home::build(&shell, &table)?.render()?))
}

#[derive(Deserialize)]
pub struct PageQuery {
    pub page: usize,
}

pub async fn set_page(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Result<Html<String>> {
    let mut shell = state.shell.write().await;
    shell.set_page(query.page);
    Ok(Html(JobTable::build(&shell).render()?))
}

#[derive(Deserialize)]
pub struct PageSizeInput {
    pub page_size: usize,
}

pub async fn set_page_size(
    State(state): State<AppState>,
    Form(input): Form<PageSizeInput>,
) -> Result<Html<String>> {
    let mut shell = state.shell.write().await;
    shell.set_page_size(input.page_size);
    Ok(Html(JobTable::build(&shell).render()?))
}

pub async fn open_create(State(state): State<AppState>) -> Result<Html<String>> {
    let form = JobForm::default();
    {
        state.shell.write().await.create = CreateDialog::Open(form.clone());
    }
    Ok(Html(CreateDialogView { form: &form }.render()?))
}

pub async fn close_create(State(state): State<AppState>) -> Result<Html<String>> {
    state.shell.write().await.create = CreateDialog::Closed;
    Ok(Html(String::new()))
}

pub async fn open_generate(State(state): State<AppState>) -> Result<Html<String>> {
    {
        state.shell.write().await.generate = GenerateDialog::Open { tag: String::new() };
    }
    Ok(Html(GenerateDialogView::build("").render()?))
}

pub async fn close_generate(State(state): State<AppState>) -> Result<Html<String>> {
    state.shell.write().await.generate = GenerateDialog::Closed;
    Ok(Html(String::new()))
}

pub async fn open_detail(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Html<String>> {
    let job = state.shell.read().await.find(&id).cloned();
    match job {
        Some(job) => {
            {
                state.table.write().await.open_detail(&job);
            }
            let form = JobForm::from_listing(&job);
            Ok(Html(
                RecordDialogView {
                    form: &form,
                    read_only: true,
                }
                .render()?,
            ))
        }
        None => {
            tracing::debug!("job {} is not in the held set", &id);
            Ok(Html(String::new()))
        }
    }
}

pub async fn open_edit(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Html<String>> {
    let job = state.shell.read().await.find(&id).cloned();
    match job {
        Some(job) => {
            {
                state.table.write().await.open_edit(&job);
            }
            let form = JobForm::from_listing(&job);
            Ok(Html(
                RecordDialogView {
                    form: &form,
                    read_only: false,
                }
                .render()?,
            ))
        }
        None => {
            tracing::debug!("job {} is not in the held set", &id);
            Ok(Html(String::new()))
        }
    }
}

pub async fn close_record_dialog(State(state): State<AppState>) -> Result<Html<String>> {
    state.table.write().await.close_dialog();
    Ok(Html(String::new()))
}

pub async fn arm_delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Html<String>> {
    {
        state.table.write().await.arm_delete(&id);
    }
    Ok(Html(ConfirmDialogView.render()?))
}

pub async fn cancel_delete(State(state): State<AppState>) -> Result<Html<String>> {
    state.table.write().await.cancel_delete();
    Ok(Html(String::new()))
}
