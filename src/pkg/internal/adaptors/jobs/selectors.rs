use axum::body::Bytes;
use serde_json::json;

use crate::pkg::internal::adaptors::jobs::spec::JobListing;
use crate::pkg::internal::backend::JobsClient;
use crate::prelude::Result;

pub struct JobSelector<'a> {
    client: &'a JobsClient,
}

impl<'a> JobSelector<'a> {
    pub fn new(client: &'a JobsClient) -> Self {
        JobSelector { client }
    }

    // an empty tag still goes on the wire as ?tag= and means unfiltered
    pub async fn list(&self, tag: &str) -> Result<Vec<JobListing>> {
        let jobs = self
            .client
            .http()
            .get(self.client.url("/job"))
            .query(&[("tag", tag)])
            .send()
            .await?
            .error_for_status()?
            .json::<Vec<JobListing>>()
            .await?;
        Ok(jobs)
    }

    pub async fn ping(&self) -> Result<()> {
        self.client
            .http()
            .get(self.client.url("/job"))
            .query(&[("tag", "")])
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }

    // the tag rides in both the query string and the body
    pub async fn export(&self, tag: &str) -> Result<Bytes> {
        let payload = self
            .client
            .http()
            .post(self.client.url("/job/export"))
            .query(&[("tag", tag)])
            .json(&json!({ "tag": tag }))
            .send()
            .await?
            .error_for_status()?
            .bytes()
            .await?;
        Ok(payload)
    }
}
