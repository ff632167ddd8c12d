//! Prismic content source
//!
//! Every query is pinned to the repository's current master ref, which is
//! looked up from the API root before the query is sent. Cursor URLs
//! returned by the API already carry their ref and are fetched verbatim.

use super::ContentSource;
use crate::config::BlogConfig;
use crate::decode::{decode_api_root, decode_documents, decode_page, RawPage};
use crate::error::{Error, Result};
use crate::http::{HttpClient, HttpClientConfig, RequestConfig};
use crate::types::PostDocument;
use async_trait::async_trait;
use tracing::debug;
use url::Url;

const ACCESS_TOKEN_PARAM: &str = "access_token";

/// [`ContentSource`] backed by the Prismic REST API
#[derive(Debug, Clone)]
pub struct PrismicSource {
    client: HttpClient,
    config: BlogConfig,
}

impl PrismicSource {
    /// Create a source from a validated site config
    pub fn new(config: BlogConfig) -> Result<Self> {
        config.validate()?;
        let client = HttpClient::with_config(HttpClientConfig::from_site(&config.http))?;
        Ok(Self { client, config })
    }

    /// Site config this source queries with
    pub fn config(&self) -> &BlogConfig {
        &self.config
    }

    /// Look up the ref of the published content
    pub async fn master_ref(&self) -> Result<String> {
        let body = self
            .client
            .get_text_with_config(&self.config.api_endpoint, self.authorized(RequestConfig::new()))
            .await?;
        let root = decode_api_root(&body)?;
        root.master_ref()
            .map(ToString::to_string)
            .ok_or_else(|| Error::malformed("API root has no master ref"))
    }

    /// Predicate selecting every document of the configured type
    pub fn type_predicate(&self) -> String {
        format!(
            "[[at(document.type, \"{}\")]]",
            escape_quoted(&self.config.document_type)
        )
    }

    /// Predicate selecting the document with `uid`
    pub fn uid_predicate(&self, uid: &str) -> String {
        format!(
            "[[at(my.{}.uid, \"{}\")]]",
            self.config.document_type,
            escape_quoted(uid)
        )
    }

    fn search_url(&self) -> String {
        format!(
            "{}/documents/search",
            self.config.api_endpoint.trim_end_matches('/')
        )
    }

    fn authorized(&self, request: RequestConfig) -> RequestConfig {
        match &self.config.access_token {
            Some(token) => request.query(ACCESS_TOKEN_PARAM, token.as_str()),
            None => request,
        }
    }

    /// Append the access token to a cursor URL unless it already has one
    fn authorize_cursor(&self, cursor: &str) -> Result<String> {
        let mut url = Url::parse(cursor)?;
        if let Some(token) = &self.config.access_token {
            let has_token = url.query_pairs().any(|(k, _)| k == ACCESS_TOKEN_PARAM);
            if !has_token {
                url.query_pairs_mut().append_pair(ACCESS_TOKEN_PARAM, token);
            }
        }
        Ok(url.into())
    }
}

#[async_trait]
impl ContentSource for PrismicSource {
    async fn first_page(&self) -> Result<RawPage> {
        let reference = self.master_ref().await?;
        let request = self.authorized(
            RequestConfig::new()
                .query("ref", reference)
                .query("q", self.type_predicate())
                .query("fetch", self.config.fetch.join(","))
                .query("pageSize", self.config.page_size.to_string()),
        );

        let body = self
            .client
            .get_text_with_config(&self.search_url(), request)
            .await?;
        let page = decode_page(&body)?;
        debug!(
            "First page: {} posts, more: {}",
            page.results.len(),
            page.next_page.is_some()
        );
        Ok(page)
    }

    async fn fetch_page(&self, cursor: &str) -> Result<RawPage> {
        let url = self.authorize_cursor(cursor)?;
        let body = self
            .client
            .get_text_with_config(&url, RequestConfig::new())
            .await?;
        let page = decode_page(&body)?;
        debug!("Fetched page at {}: {} posts", cursor, page.results.len());
        Ok(page)
    }

    async fn get_by_uid(&self, uid: &str) -> Result<PostDocument> {
        let reference = self.master_ref().await?;
        let request = self.authorized(
            RequestConfig::new()
                .query("ref", reference)
                .query("q", self.uid_predicate(uid))
                .query("pageSize", "1"),
        );

        let body = self
            .client
            .get_text_with_config(&self.search_url(), request)
            .await?;
        decode_documents(&body)?
            .into_iter()
            .next()
            .ok_or_else(|| Error::not_found(uid))
    }
}

fn escape_quoted(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}
