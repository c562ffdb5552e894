// SPDX-License-Identifier: MPL-2.0
//! HTTP adapter for the style service.
//!
//! Implements [`StyleService`] with `reqwest`:
//!
//! - `POST {base}/analyze` with a multipart `image` field
//! - `POST {base}/generate-outfits` with a JSON body `{ tops, bottoms }`
//! - `GET {base}{catalog_image_path}{id}.jpg` for catalog thumbnails

pub mod wire;

use crate::application::port::{ServiceError, ServiceResult, StyleService};
use crate::config::ServiceConfig;
use crate::domain::analysis::{catalog_image_file_name, AnalysisReport};
use crate::domain::outfit::{GarmentId, OutfitPair};
use crate::domain::upload::SelectedFile;
use futures_util::future::BoxFuture;
use futures_util::FutureExt;
use std::time::Duration;

const USER_AGENT: &str = concat!("StyleSpark/", env!("CARGO_PKG_VERSION"));

// =============================================================================
// Endpoints
// =============================================================================

/// Resolved addresses of the service endpoints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    analyze: String,
    generate_outfits: String,
    catalog_images: String,
}

impl Endpoints {
    /// Builds the endpoint addresses from the service settings.
    ///
    /// Slashes between the base address and the paths are normalised, so
    /// `http://host/` + `static/` and `http://host` + `/static` are the same.
    #[must_use]
    pub fn from_config(config: &ServiceConfig) -> Self {
        let base = config.base_url.trim().trim_end_matches('/');
        let catalog_path = config.catalog_image_path.trim().trim_matches('/');

        let catalog_images = if catalog_path.is_empty() {
            format!("{base}/")
        } else {
            format!("{base}/{catalog_path}/")
        };

        Self {
            analyze: format!("{base}/analyze"),
            generate_outfits: format!("{base}/generate-outfits"),
            catalog_images,
        }
    }

    #[must_use]
    pub fn analyze(&self) -> &str {
        &self.analyze
    }

    #[must_use]
    pub fn generate_outfits(&self) -> &str {
        &self.generate_outfits
    }

    /// Address of the catalog image of item `id`.
    #[must_use]
    pub fn catalog_image(&self, id: &str) -> String {
        format!("{}{}", self.catalog_images, catalog_image_file_name(id))
    }
}

// =============================================================================
// HttpStyleService
// =============================================================================

/// [`StyleService`] backed by the HTTP API.
#[derive(Debug, Clone)]
pub struct HttpStyleService {
    client: reqwest::Client,
    endpoints: Endpoints,
}

impl HttpStyleService {
    /// Creates the adapter with a client configured from `config`.
    ///
    /// # Errors
    /// Returns [`ServiceError::Transport`] if the HTTP client cannot be built
    /// (e.g. the TLS backend fails to initialise).
    pub fn new(config: &ServiceConfig) -> ServiceResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs()))
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| ServiceError::Transport(e.to_string()))?;

        let endpoints = Endpoints::from_config(config);
        tracing::info!(analyze = endpoints.analyze(), "style service configured");

        Ok(Self { client, endpoints })
    }

    #[must_use]
    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }
}

/// Sends a request and returns the body of a 2xx response.
async fn send(request: reqwest::RequestBuilder) -> ServiceResult<Vec<u8>> {
    let response = request
        .send()
        .await
        .map_err(|e| ServiceError::Transport(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(ServiceError::Status(status.as_u16()));
    }

    let body = response
        .bytes()
        .await
        .map_err(|e| ServiceError::Transport(e.to_string()))?;
    Ok(body.to_vec())
}

impl StyleService for HttpStyleService {
    fn analyze(&self, file: SelectedFile) -> BoxFuture<'static, ServiceResult<AnalysisReport>> {
        let client = self.client.clone();
        let url = self.endpoints.analyze.clone();

        async move {
            let mime = crate::media::sniff_mime_type(file.bytes());
            let part = reqwest::multipart::Part::bytes(file.bytes().to_vec())
                .file_name(file.name().to_string())
                .mime_str(mime)
                .map_err(|e| ServiceError::Transport(e.to_string()))?;
            let form = reqwest::multipart::Form::new().part("image", part);

            tracing::debug!(%url, file = file.name(), size = file.len(), mime, "submitting image");
            let body = send(client.post(&url).multipart(form)).await?;
            let report = wire::decode_analysis(&body)?;
            tracing::debug!(
                recommendations = report.recommendations.len(),
                "analysis received"
            );
            Ok(report)
        }
        .boxed()
    }

    fn generate_outfits(
        &self,
        tops: Vec<GarmentId>,
        bottoms: Vec<GarmentId>,
    ) -> BoxFuture<'static, ServiceResult<Vec<OutfitPair>>> {
        let client = self.client.clone();
        let url = self.endpoints.generate_outfits.clone();

        async move {
            let request = client
                .post(&url)
                .json(&wire::GenerateOutfitsRequest::new(&tops, &bottoms));

            tracing::debug!(%url, tops = tops.len(), bottoms = bottoms.len(), "requesting outfits");
            let body = send(request).await?;
            wire::decode_outfits(&body)
        }
        .boxed()
    }

    fn fetch_catalog_image(&self, id: String) -> BoxFuture<'static, ServiceResult<Vec<u8>>> {
        let client = self.client.clone();
        let url = self.endpoints.catalog_image(&id);

        async move {
            let result = send(client.get(&url)).await;
            if let Err(err) = &result {
                tracing::warn!(%url, error = %err, "catalog image unavailable");
            }
            result
        }
        .boxed()
    }

    fn catalog_image_url(&self, id: &str) -> String {
        self.endpoints.catalog_image(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(base_url: &str, catalog_image_path: &str) -> ServiceConfig {
        ServiceConfig {
            base_url: base_url.to_string(),
            catalog_image_path: catalog_image_path.to_string(),
            ..ServiceConfig::default()
        }
    }

    #[test]
    fn default_endpoints_match_service_layout() {
        let endpoints = Endpoints::from_config(&ServiceConfig::default());
        assert_eq!(endpoints.analyze(), "http://127.0.0.1:5000/analyze");
        assert_eq!(
            endpoints.generate_outfits(),
            "http://127.0.0.1:5000/generate-outfits"
        );
        assert_eq!(
            endpoints.catalog_image("15970"),
            "http://127.0.0.1:5000/static/catalog_images/15970.jpg"
        );
    }

    #[test]
    fn slashes_are_normalised() {
        let a = Endpoints::from_config(&config("http://host:8000/", "static/img"));
        let b = Endpoints::from_config(&config("http://host:8000", "/static/img/"));
        assert_eq!(a, b);
        assert_eq!(a.catalog_image("7"), "http://host:8000/static/img/7.jpg");
    }

    #[test]
    fn empty_catalog_path_serves_from_root() {
        let endpoints = Endpoints::from_config(&config("http://host", ""));
        assert_eq!(endpoints.catalog_image("1"), "http://host/1.jpg");
    }

    #[test]
    fn service_builds_from_default_config() {
        let service = HttpStyleService::new(&ServiceConfig::default()).expect("client builds");
        assert_eq!(
            service.catalog_image_url("3"),
            "http://127.0.0.1:5000/static/catalog_images/3.jpg"
        );
    }
}
