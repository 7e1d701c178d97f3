use reqwest::{Client, Url};
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::{
    error::{RetrievalError, RetrievalResult},
    model::{DirectoryDocument, Employee},
};

pub const DEFAULT_DIRECTORY_URL: &str =
    "https://raw.githubusercontent.com/dixitsoham7/dixitsoham7.github.io/main/index.json";

/// Single-shot retrieval of the directory document. No retry, no caching.
#[derive(Clone, Debug)]
pub struct DirectoryLoader {
    client: Client,
    url: Url,
}

impl DirectoryLoader {
    pub fn new(url: Url) -> Self {
        Self::with_client(Client::new(), url)
    }

    pub fn with_client(client: Client, url: Url) -> Self {
        Self { client, url }
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    /// GET the document and extract its employees. Non-success statuses and
    /// undecodable bodies are errors; a missing `employees` key is not.
    pub async fn fetch(&self) -> RetrievalResult<Vec<Employee>> {
        debug!(url = %self.url, "fetching directory");
        let response = self
            .client
            .get(self.url.clone())
            .send()
            .await?
            .error_for_status()?;
        let body = response.bytes().await?;
        let document = DirectoryDocument::from_slice(&body)?;
        info!(url = %self.url, employees = document.employees.len(), "directory retrieved");
        Ok(document.employees)
    }

    /// Start the fetch in the background. Dropping the returned handle
    /// aborts the request if it is still in flight.
    pub fn spawn(self) -> LoadHandle {
        LoadHandle {
            task: tokio::spawn(async move { self.fetch().await }),
        }
    }
}

/// An in-flight directory retrieval, owned by whoever mounted the view.
#[derive(Debug)]
pub struct LoadHandle {
    task: JoinHandle<RetrievalResult<Vec<Employee>>>,
}

impl LoadHandle {
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    pub fn abort(&self) {
        self.task.abort();
    }

    /// Wait for the retrieval. An aborted fetch reports
    /// [`RetrievalError::Cancelled`].
    pub async fn join(mut self) -> RetrievalResult<Vec<Employee>> {
        self.wait().await
    }

    /// Like [`LoadHandle::join`] but keeps the handle, so it can sit in a
    /// `select!` loop. Dropping the returned future does not cancel the fetch.
    pub async fn wait(&mut self) -> RetrievalResult<Vec<Employee>> {
        match (&mut self.task).await {
            Ok(result) => result,
            Err(err) if err.is_cancelled() => Err(RetrievalError::Cancelled),
            Err(err) => std::panic::resume_unwind(err.into_panic()),
        }
    }
}

impl Drop for LoadHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}
