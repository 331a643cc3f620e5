use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::conf::settings;
use crate::pkg::internal::adaptors::jobs::spec::{JobForm, JobListing};
use crate::pkg::internal::backend::JobsClient;
use crate::prelude::Result;

pub const DEFAULT_PAGE_SIZE: usize = 10;
pub const PAGE_SIZE_OPTIONS: &[usize] = &[10, 25, 50, 100];

#[derive(Debug, Clone, Default, PartialEq)]
pub enum CreateDialog {
    #[default]
    Closed,
    Open(JobForm),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum GenerateDialog {
    #[default]
    Closed,
    Open {
        tag: String,
    },
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum RecordDialog {
    #[default]
    Closed,
    Detail(JobForm),
    Edit(JobForm),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum DeleteConfirm {
    #[default]
    Closed,
    Pending(String),
}

#[derive(Debug, Clone)]
pub struct ShellState {
    pub jobs: Vec<JobListing>,
    pub tag: String,
    pub page: usize,
    pub page_size: usize,
    pub loading: bool,
    pub create: CreateDialog,
    pub generate: GenerateDialog,
    last_applied_seq: u64,
}

impl Default for ShellState {
    fn default() -> Self {
        ShellState {
            jobs: Vec::new(),
            tag: String::new(),
            page: 0,
            page_size: DEFAULT_PAGE_SIZE,
            loading: false,
            create: CreateDialog::Closed,
            generate: GenerateDialog::Closed,
            last_applied_seq: 0,
        }
    }
}

impl ShellState {
    pub fn set_page(&mut self, page: usize) {
        self.page = page;
    }

    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = page_size;
        self.page = 0;
    }

    pub fn page_window(&self) -> (usize, usize) {
        let start = self
            .page
            .saturating_mul(self.page_size)
            .min(self.jobs.len());
        let end = start.saturating_add(self.page_size).min(self.jobs.len());
        (start, end)
    }

    pub fn page_slice(&self) -> &[JobListing] {
        let (start, end) = self.page_window();
        &self.jobs[start..end]
    }

    // loads overtaken while in flight report false and leave the set alone
    pub fn apply_load(&mut self, seq: u64, jobs: Vec<JobListing>) -> bool {
        if seq <= self.last_applied_seq {
            return false;
        }
        self.jobs = jobs;
        self.last_applied_seq = seq;
        true
    }

    pub fn find(&self, id: &str) -> Option<&JobListing> {
        self.jobs.iter().find(|job| job.id == id)
    }
}

#[derive(Debug, Clone, Default)]
pub struct TableState {
    pub dialog: RecordDialog,
    pub confirm: DeleteConfirm,
}

impl TableState {
    pub fn open_detail(&mut self, job: &JobListing) {
        self.dialog = RecordDialog::Detail(JobForm::from_listing(job));
    }

    pub fn open_edit(&mut self, job: &JobListing) {
        self.dialog = RecordDialog::Edit(JobForm::from_listing(job));
    }

    pub fn close_dialog(&mut self) {
        self.dialog = RecordDialog::Closed;
    }

    pub fn arm_delete(&mut self, id: &str) {
        self.confirm = DeleteConfirm::Pending(id.to_string());
    }

    pub fn cancel_delete(&mut self) {
        self.confirm = DeleteConfirm::Closed;
    }

    // confirming with nothing armed hands back None
    pub fn take_pending_delete(&mut self) -> Option<String> {
        match std::mem::take(&mut self.confirm) {
            DeleteConfirm::Pending(id) => Some(id),
            DeleteConfirm::Closed => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppState {
    pub jobs_client: Arc<JobsClient>,
    pub shell: Arc<RwLock<ShellState>>,
    pub table: Arc<RwLock<TableState>>,
    load_seq: Arc<AtomicU64>,
}

impl AppState {
    pub fn new() -> Result<AppState> {
        Ok(Self::with_client(JobsClient::new(&settings.backend_url)?))
    }

    pub fn with_client(jobs_client: JobsClient) -> AppState {
        AppState {
            jobs_client: Arc::new(jobs_client),
            shell: Arc::new(RwLock::new(ShellState::default())),
            table: Arc::new(RwLock::new(TableState::default())),
            load_seq: Arc::new(AtomicU64::new(0)),
        }
    }

    // applied under the shell lock, plain counter semantics are enough
    pub fn next_load_seq(&self) -> u64 {
        self.load_seq.fetch_add(1, Ordering::Relaxed) + 1
    }
}
