// Copyright 2025 itscheems
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Transport seam between the signed envelope and the network

use std::time::Duration;

use async_trait::async_trait;
use hiex_protocol::{RawResponse, SignedRequest};
use reqwest::Client as ReqwestClient;
use tracing::debug;

use crate::error::TransportError;

/// Sends a signed request and returns the raw response
///
/// Implementations must not interpret the response: status codes, headers
/// and body are handed back untouched for validation.
#[async_trait]
pub trait Transport: Send + Sync {
	async fn send(&self, request: &SignedRequest) -> Result<RawResponse, TransportError>;
}

/// HTTP transport over reqwest
///
/// Every call is a POST with the JSON body and authentication headers of
/// the envelope. Redirects are followed.
#[derive(Debug, Clone)]
pub struct HttpTransport {
	client: ReqwestClient,
}

impl HttpTransport {
	pub fn new(timeout: Duration) -> Result<Self, TransportError> {
		let client = ReqwestClient::builder()
			.timeout(timeout)
			.build()
			.map_err(|e| TransportError::InvalidRequest(format!("Failed to create HTTP client: {}", e)))?;
		Ok(Self { client })
	}

	/// Wrap an already configured reqwest client.
	pub fn from_client(client: ReqwestClient) -> Self {
		Self { client }
	}
}

#[async_trait]
impl Transport for HttpTransport {
	async fn send(&self, request: &SignedRequest) -> Result<RawResponse, TransportError> {
		let mut builder = self.client.post(&request.url).body(request.body.clone());
		for (name, value) in &request.headers {
			builder = builder.header(name, value);
		}

		let response = builder.send().await.map_err(map_reqwest_error)?;

		let status = response.status().as_u16();
		let headers = response
			.headers()
			.iter()
			.filter_map(|(name, value)| {
				value
					.to_str()
					.ok()
					.map(|v| (name.as_str().to_string(), v.to_string()))
			})
			.collect();
		let body = response.text().await.map_err(map_reqwest_error)?;

		debug!(
			target: "transport",
			endpoint = %request.endpoint,
			status,
			bytes = body.len(),
			"Received response"
		);

		Ok(RawResponse {
			status,
			body,
			headers,
		})
	}
}

fn map_reqwest_error(e: reqwest::Error) -> TransportError {
	if e.is_timeout() {
		TransportError::Timeout(e.to_string())
	} else if e.is_builder() {
		TransportError::InvalidRequest(e.to_string())
	} else {
		TransportError::Network(format!("Request failed: {}", e))
	}
}
