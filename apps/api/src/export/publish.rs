//! Publishing a portfolio as a static site in the object store.

use async_trait::async_trait;
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::Client as S3Client;
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PublishedSite {
    pub url: String,
    pub site_id: String,
}

/// Hosts an exported portfolio document.
///
/// Carried in `AppState` as `Arc<dyn SitePublisher>`.
#[async_trait]
pub trait SitePublisher: Send + Sync {
    async fn publish(&self, portfolio_id: Uuid, html: String) -> Result<PublishedSite, AppError>;
}

pub fn site_key(portfolio_id: Uuid) -> String {
    format!("sites/{portfolio_id}/index.html")
}

pub fn site_url(base_url: &str, portfolio_id: Uuid) -> String {
    format!("{}/{}", base_url.trim_end_matches('/'), site_key(portfolio_id))
}

pub struct S3SitePublisher {
    client: S3Client,
    bucket: String,
    base_url: String,
}

impl S3SitePublisher {
    pub fn new(client: S3Client, bucket: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            client,
            bucket: bucket.into(),
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl SitePublisher for S3SitePublisher {
    async fn publish(&self, portfolio_id: Uuid, html: String) -> Result<PublishedSite, AppError> {
        let key = site_key(portfolio_id);
        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(&key)
            .body(ByteStream::from(html.into_bytes()))
            .content_type("text/html; charset=utf-8")
            .send()
            .await
            .map_err(|e| AppError::Storage(format!("S3 upload failed: {e}")))?;

        info!("Uploaded portfolio site to s3://{}/{}", self.bucket, key);

        Ok(PublishedSite {
            url: site_url(&self.base_url, portfolio_id),
            site_id: portfolio_id.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_site_key_and_url() {
        let id = Uuid::nil();
        assert_eq!(
            site_key(id),
            "sites/00000000-0000-0000-0000-000000000000/index.html"
        );
        assert_eq!(
            site_url("https://sites.example.com/", id),
            "https://sites.example.com/sites/00000000-0000-0000-0000-000000000000/index.html"
        );
    }
}
