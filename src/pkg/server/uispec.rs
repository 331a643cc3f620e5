use askama::Template;

use crate::conf::settings;
use crate::pkg::internal::adaptors::jobs::spec::{display_date, JobForm, TECH_OPTIONS};
use crate::pkg::server::state::{
    CreateDialog, DeleteConfirm, GenerateDialog, RecordDialog, ShellState, TableState,
    PAGE_SIZE_OPTIONS,
};
use crate::prelude::Result;

pub struct TechOption {
    pub value: &'static str,
    pub label: &'static str,
    pub selected: bool,
}

// display fallbacks resolved before templating; row numbers continue
// across pages
pub struct JobRow {
    pub number: usize,
    pub id: String,
    pub title: String,
    pub company_name: String,
    pub work_type: String,
    pub location: String,
    pub salary: String,
    pub listing_date: String,
    pub tag: String,
}

pub struct PageSizeOption {
    pub value: usize,
    pub selected: bool,
}

#[derive(Template)]
#[template(path = "table.html")]
pub struct JobTable {
    pub rows: Vec<JobRow>,
    pub range_label: String,
    pub prev_page: usize,
    pub next_page: usize,
    pub prev_disabled: bool,
    pub next_disabled: bool,
    pub size_options: Vec<PageSizeOption>,
}

impl JobTable {
    pub fn build(shell: &ShellState) -> JobTable {
        let total = shell.jobs.len();
        let base = shell.page.saturating_mul(shell.page_size);
        let rows = shell
            .page_slice()
            .iter()
            .enumerate()
            .map(|(index, job)| JobRow {
                number: base + index + 1,
                id: job.id.clone(),
                title: job.title.clone(),
                company_name: job.company_name.clone().unwrap_or_default(),
                work_type: job.work_type.clone().unwrap_or_default(),
                location: job.location.clone().unwrap_or_default(),
                salary: match &job.salary {
                    Some(salary) if !salary.is_empty() => salary.clone(),
                    _ => "-".to_string(),
                },
                listing_date: display_date(job.listing_date.as_deref().unwrap_or_default()),
                tag: job.tag.clone(),
            })
            .collect();
        let (_, end) = shell.page_window();
        let range_label = if total == 0 {
            "0–0 of 0".to_string()
        } else {
            format!("{}–{} of {}", base.saturating_add(1), end, total)
        };
        JobTable {
            rows,
            range_label,
            prev_page: shell.page.saturating_sub(1),
            next_page: shell.page.saturating_add(1),
            prev_disabled: shell.page == 0,
            next_disabled: base.saturating_add(shell.page_size) >= total,
            size_options: PAGE_SIZE_OPTIONS
                .iter()
                .map(|&value| PageSizeOption {
                    value,
                    selected: value == shell.page_size,
                })
                .collect(),
        }
    }
}

#[derive(Template)]
#[template(path = "create_dialog.html")]
pub struct CreateDialogView<'a> {
    pub form: &'a JobForm,
}

#[derive(Template)]
#[template(path = "record_dialog.html")]
pub struct RecordDialogView<'a> {
    pub form: &'a JobForm,
    pub read_only: bool,
}

#[derive(Template)]
#[template(path = "generate_dialog.html")]
pub struct GenerateDialogView {
    pub options: Vec<TechOption>,
    pub none_selected: bool,
}

impl GenerateDialogView {
    pub fn build(tag: &str) -> GenerateDialogView {
        GenerateDialogView {
            options: tech_options(tag),
            none_selected: tag.is_empty(),
        }
    }
}

#[derive(Template)]
#[template(path = "confirm_dialog.html")]
pub struct ConfirmDialogView;

#[derive(Template)]
#[template(path = "home.html")]
pub struct Home {
    pub title: String,
    pub filter_options: Vec<TechOption>,
    pub all_selected: bool,
    pub loading: bool,
    pub table_html: String,
    pub dialog_html: String,
}

impl Home {
    pub fn build(shell: &ShellState, table: &TableState) -> Result<Home> {
        Ok(Home {
            title: settings.service_name.clone(),
            filter_options: tech_options(&shell.tag),
            all_selected: shell.tag.is_empty(),
            loading: shell.loading,
            table_html: JobTable::build(shell).render()?,
            dialog_html: render_open_dialogs(shell, table)?,
        })
    }
}

pub fn tech_options(selected: &str) -> Vec<TechOption> {
    TECH_OPTIONS
        .iter()
        .map(|&(value, label)| TechOption {
            value,
            label,
            selected: value == selected,
        })
        .collect()
}

// nothing stops more than one dialog being open at once, each open one
// contributes its fragment
fn render_open_dialogs(shell: &ShellState, table: &TableState) -> Result<String> {
    let mut html = String::new();
    if let CreateDialog::Open(form) = &shell.create {
        html.push_str(&CreateDialogView { form }.render()?);
    }
    if let GenerateDialog::Open { tag } = &shell.generate {
        html.push_str(&GenerateDialogView::build(tag).render()?);
    }
    match &table.dialog {
        RecordDialog::Detail(form) => {
            html.push_str(
                &RecordDialogView {
                    form,
                    read_only: true,
                }
                .render()?,
            );
        }
        RecordDialog::Edit(form) => {
            html.push_str(
                &RecordDialogView {
                    form,
                    read_only: false,
                }
                .render()?,
            );
        }
        RecordDialog::Closed => {}
    }
    if let DeleteConfirm::Pending(_) = &table.confirm {
        html.push_str(&ConfirmDialogView.render()?);
    }
    Ok(html)
}
