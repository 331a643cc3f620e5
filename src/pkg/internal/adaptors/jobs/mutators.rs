use axum::http::StatusCode;

use crate::pkg::internal::adaptors::jobs::spec::JobListing;
use crate::pkg::internal::backend::JobsClient;
use crate::prelude::Result;

// each write hands the status code back for the caller's acknowledgement
// check; non 2xx statuses surface as errors
pub struct JobMutator<'a> {
    client: &'a JobsClient,
}

impl<'a> JobMutator<'a> {
    pub fn new(client: &'a JobsClient) -> Self {
        JobMutator { client }
    }

    pub async fn create(&self, job: &JobListing) -> Result<StatusCode> {
        let response = self
            .client
            .http()
            .post(self.client.url("/job"))
            .json(job)
            .send()
            .await?
            .error_for_status()?;
        Ok(response.status())
    }

    pub async fn update(&self, id: &str, job: &JobListing) -> Result<StatusCode> {
        let response = self
            .client
            .http()
            .put(self.client.url(&format!("/job/{}", id)))
            .json(job)
            .send()
            .await?
            .error_for_status()?;
        Ok(response.status())
    }

    pub async fn delete(&self, id: &str) -> Result<StatusCode> {
        let response = self
            .client
            .http()
            .delete(self.client.url(&format!("/job/{}", id)))
            .send()
            .await?
            .error_for_status()?;
        Ok(response.status())
    }

    // the backend blocks until the scrape run finishes, the request is untimed
    pub async fn scrape(&self, tag: &str) -> Result<StatusCode> {
        let response = self
            .client
            .http()
            .get(self.client.url(&format!("/job/scrape/{}", tag)))
            .send()
            .await?
            .error_for_status()?;
        Ok(response.status())
    }
}
