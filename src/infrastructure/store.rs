//! Parameter store boundary: trait plus the real SSM implementation
//!
//! The trait abstracts the remote API so the application layer can be
//! tested with an in-memory implementation.

use async_trait::async_trait;
use aws_sdk_ssm::types::{ParameterTier, ParameterType};
use tracing::debug;

use crate::domain::{ParameterKind, StoredParameter};
use crate::infrastructure::error::{StoreError, StoreResult};

/// DeleteParameters accepts at most this many names per call.
const DELETE_BATCH_LIMIT: usize = 10;

/// Remote parameter store abstraction.
#[async_trait]
pub trait ParameterStore: Send + Sync {
    /// Look up a parameter by exact name. Not-found is `Ok(None)`.
    async fn fetch(&self, name: &str, decrypt: bool) -> StoreResult<Option<StoredParameter>>;

    /// Write a parameter (overwrite enabled, Standard tier, `text` data type).
    async fn put(&self, name: &str, value: &str, kind: ParameterKind) -> StoreResult<()>;

    /// List all parameters under a path, recursively, through all pages.
    async fn list(&self, path: &str, decrypt: bool) -> StoreResult<Vec<StoredParameter>>;

    /// Delete parameters by name, chunked to the API batch limit.
    async fn delete_batch(&self, names: &[String]) -> StoreResult<()>;
}

/// Real implementation over `aws-sdk-ssm`.
pub struct SsmStore {
    client: aws_sdk_ssm::Client,
}

impl SsmStore {
    pub fn new(client: aws_sdk_ssm::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ParameterStore for SsmStore {
    async fn fetch(&self, name: &str, decrypt: bool) -> StoreResult<Option<StoredParameter>> {
        debug!("GetParameter: {}", name);
        match self
            .client
            .get_parameter()
            .name(name)
            .with_decryption(decrypt)
            .send()
            .await
        {
            Ok(out) => {
                let Some(p) = out.parameter else {
                    return Ok(None);
                };
                Ok(Some(StoredParameter {
                    name: p.name.unwrap_or_else(|| name.to_string()),
                    value: p.value.unwrap_or_default(),
                    arn: p.arn.unwrap_or_default(),
                }))
            }
            Err(err) => {
                let service_err = err.into_service_error();
                if service_err.is_parameter_not_found() {
                    Ok(None)
                } else {
                    Err(StoreError::Api {
                        operation: "GetParameter",
                        message: service_err.to_string(),
                    })
                }
            }
        }
    }

    async fn put(&self, name: &str, value: &str, kind: ParameterKind) -> StoreResult<()> {
        debug!("PutParameter: {} ({})", name, kind.as_str());
        self.client
            .put_parameter()
            .name(name)
            .value(value)
            .r#type(parameter_type(kind))
            .overwrite(true)
            .tier(ParameterTier::Standard)
            .data_type("text")
            .send()
            .await
            .map_err(|e| StoreError::Api {
                operation: "PutParameter",
                message: e.into_service_error().to_string(),
            })?;
        Ok(())
    }

    async fn list(&self, path: &str, decrypt: bool) -> StoreResult<Vec<StoredParameter>> {
        debug!("GetParametersByPath: {} (decrypt: {})", path, decrypt);
        let mut pages = self
            .client
            .get_parameters_by_path()
            .path(path)
            .recursive(true)
            .with_decryption(decrypt)
            .into_paginator()
            .send();

        let mut parameters = Vec::new();
        while let Some(page) = pages.next().await {
            let page = page.map_err(|e| StoreError::Api {
                operation: "GetParametersByPath",
                message: e.into_service_error().to_string(),
            })?;
            for p in page.parameters.unwrap_or_default() {
                parameters.push(StoredParameter {
                    name: p.name.unwrap_or_default(),
                    value: p.value.unwrap_or_default(),
                    arn: p.arn.unwrap_or_default(),
                });
            }
        }
        Ok(parameters)
    }

    async fn delete_batch(&self, names: &[String]) -> StoreResult<()> {
        for chunk in names.chunks(DELETE_BATCH_LIMIT) {
            debug!("DeleteParameters: {} names", chunk.len());
            self.client
                .delete_parameters()
                .set_names(Some(chunk.to_vec()))
                .send()
                .await
                .map_err(|e| StoreError::Api {
                    operation: "DeleteParameters",
                    message: e.into_service_error().to_string(),
                })?;
        }
        Ok(())
    }
}

fn parameter_type(kind: ParameterKind) -> ParameterType {
    match kind {
        ParameterKind::String => ParameterType::String,
        ParameterKind::StringList => ParameterType::StringList,
        ParameterKind::SecureString => ParameterType::SecureString,
    }
}
