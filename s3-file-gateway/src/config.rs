/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::sync::Arc;

use aws_sdk_s3::config::retry::RetryConfig;

use crate::error::{self, Error};
use crate::gateway::{S3Gateway, SharedStorageGateway, StorageGateway};

/// Config loading from the environment
pub mod loader;

/// Configuration for a [`Client`](crate::client::Client)
#[derive(Debug, Clone)]
pub struct Config {
    gateway: SharedStorageGateway,
}

impl Config {
    /// Create a new `Config` builder
    pub fn builder() -> Builder {
        Builder::default()
    }

    /// The storage backend operations are sent to.
    pub fn gateway(&self) -> &dyn StorageGateway {
        self.gateway.as_ref()
    }
}

/// Fluent style builder for [Config]
#[derive(Debug, Clone, Default)]
pub struct Builder {
    client: Option<aws_sdk_s3::Client>,
    gateway: Option<SharedStorageGateway>,
    conditional_writes: bool,
}

impl Builder {
    /// Set an explicit S3 client to use.
    ///
    /// Requests are attempted exactly once, the client is rebuilt with retries disabled.
    pub fn client(mut self, client: aws_sdk_s3::Client) -> Self {
        let client = aws_sdk_s3::Client::from_conf(
            client
                .config()
                .to_builder()
                .retry_config(RetryConfig::disabled())
                .build(),
        );
        self.client = Some(client);
        self
    }

    /// Set the storage backend directly, e.g. an [`InMemoryGateway`](crate::gateway::InMemoryGateway).
    ///
    /// Takes precedence over [`client`](Self::client).
    pub fn gateway(mut self, gateway: impl StorageGateway + 'static) -> Self {
        self.gateway = Some(Arc::new(gateway));
        self
    }

    /// Ask S3 to reject uploads over an existing key with `If-None-Match: *`.
    ///
    /// Only applies to a backend configured through [`client`](Self::client).
    /// Default is `false`, not every S3 compatible service supports conditional writes.
    pub fn conditional_writes(mut self, enabled: bool) -> Self {
        self.conditional_writes = enabled;
        self
    }

    /// Consumes the builder and constructs a [`Config`](crate::config::Config)
    pub fn build(self) -> Result<Config, Error> {
        let gateway = match (self.gateway, self.client) {
            (Some(gateway), _) => gateway,
            (None, Some(client)) => {
                Arc::new(S3Gateway::new(client).with_conditional_writes(self.conditional_writes))
            }
            (None, None) => {
                return Err(error::invalid_argument(
                    "either an S3 client or a storage gateway must be configured",
                ))
            }
        };
        Ok(Config { gateway })
    }
}
