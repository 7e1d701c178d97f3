use std::path::PathBuf;

use anyhow::{Context, Result};
use products_hr::{DEFAULT_DIRECTORY_URL, DirectoryLoader};
use reqwest::{Client, Url};

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub directory_url: Url,
    pub user_agent: String,
    pub log_file: Option<PathBuf>,
}

impl AppConfig {
    pub fn load() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let raw_url = lookup("DIRECTORY_URL")
            .map(|val| val.trim().to_string())
            .filter(|val| !val.is_empty())
            .unwrap_or_else(|| DEFAULT_DIRECTORY_URL.into());
        let directory_url =
            Url::parse(&raw_url).with_context(|| format!("invalid DIRECTORY_URL {raw_url}"))?;

        let user_agent = lookup("DIRECTORY_USER_AGENT")
            .unwrap_or_else(|| concat!("directory-view/", env!("CARGO_PKG_VERSION")).into());

        let log_file = lookup("DIRECTORY_LOG_FILE")
            .filter(|val| !val.trim().is_empty())
            .map(PathBuf::from);

        Ok(Self {
            directory_url,
            user_agent,
            log_file,
        })
    }

    pub fn with_url_override(mut self, url: Option<Url>) -> Self {
        if let Some(url) = url {
            self.directory_url = url;
        }
        self
    }

    pub fn loader(&self) -> Result<DirectoryLoader> {
        let client = Client::builder()
            .user_agent(self.user_agent.clone())
            .build()
            .context("failed to build HTTP client")?;
        Ok(DirectoryLoader::with_client(
            client,
            self.directory_url.clone(),
        ))
    }
}
