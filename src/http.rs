//! HTTP transport: the paginated patient source and the submission
//! sink, sharing one blocking client and one API-key credential.

use reqwest::blocking::Client;

use crate::categorize::CategoryBuckets;
use crate::config::ApiConfig;
use crate::constants::http;
use crate::data::{PageBody, PageResponse};
use crate::errors::TriageError;
use crate::retrieval::PatientSource;
use crate::submit::{ResultSink, SubmissionReceipt};
use crate::types::PageNumber;

/// `PatientSource` backed by `GET <base>?page=N&limit=L`.
pub struct HttpPatientSource {
    client: Client,
    config: ApiConfig,
}

impl HttpPatientSource {
    /// Build a source from a validated config.
    pub fn new(config: ApiConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    /// Build a source reusing an existing client (shared with a sink).
    pub fn with_client(client: Client, config: ApiConfig) -> Self {
        Self { client, config }
    }
}

impl PatientSource for HttpPatientSource {
    fn fetch_page(&self, page: PageNumber) -> Result<PageResponse, TriageError> {
        let response = self
            .client
            .get(&self.config.base_url)
            .query(&[("page", page), ("limit", self.config.page_limit)])
            .header(http::API_KEY_HEADER, &self.config.api_key)
            .send()
            .map_err(|err| TriageError::PageUnavailable {
                page,
                reason: err.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(TriageError::PageUnavailable {
                page,
                reason: format!("http status {status}"),
            });
        }

        let body: PageBody = response.json().map_err(|err| TriageError::PageUnavailable {
            page,
            reason: format!("failed decoding page body: {err}"),
        })?;
        Ok(PageResponse::from(body))
    }
}

/// `ResultSink` backed by one JSON `POST` to the submission endpoint.
pub struct HttpResultSink {
    client: Client,
    config: ApiConfig,
}

impl HttpResultSink {
    /// Build a sink from a validated config.
    pub fn new(config: ApiConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    /// Build a sink reusing an existing client (shared with a source).
    pub fn with_client(client: Client, config: ApiConfig) -> Self {
        Self { client, config }
    }
}

impl ResultSink for HttpResultSink {
    fn submit(&self, buckets: &CategoryBuckets) -> Result<SubmissionReceipt, TriageError> {
        let response = self
            .client
            .post(&self.config.submit_url)
            .header(http::API_KEY_HEADER, &self.config.api_key)
            .json(buckets)
            .send()
            .map_err(|err| TriageError::Submission {
                reason: err.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(TriageError::Submission {
                reason: format!("http status {status}"),
            });
        }

        response.json().map_err(|err| TriageError::Submission {
            reason: format!("failed decoding submission receipt: {err}"),
        })
    }
}
