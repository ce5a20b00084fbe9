/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use aws_config::retry::RetryConfig;
use aws_config::{BehaviorVersion, Region};
use aws_sdk_s3::config::Credentials;
use aws_types::service_config::ServiceConfigKey;
use aws_types::SdkConfig;

use crate::config::Builder;
use crate::error::Error;
use crate::Config;

const CREDENTIALS_PROVIDER_NAME: &str = "s3-file-gateway";

const S3_SERVICE_ID: &str = "S3";

/// Load file gateway [`Config`] from the environment.
///
/// Credentials, region and endpoint come from the standard AWS configuration sources
/// (environment variables, shared config files, instance metadata) unless overridden here.
#[derive(Default, Debug)]
pub struct ConfigLoader {
    builder: Builder,
    region: Option<String>,
    endpoint_url: Option<String>,
    credentials: Option<Credentials>,
}

impl ConfigLoader {
    /// Override the region requests are sent to and buckets are created in.
    pub fn region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    /// Send requests to a custom S3 compatible endpoint (MinIO, LocalStack, ...).
    ///
    /// Buckets are addressed path-style whenever an endpoint is set.
    pub fn endpoint_url(mut self, endpoint_url: impl Into<String>) -> Self {
        self.endpoint_url = Some(endpoint_url.into());
        self
    }

    /// Use a static access key pair instead of the default credentials chain.
    pub fn credentials(
        mut self,
        access_key_id: impl Into<String>,
        secret_access_key: impl Into<String>,
    ) -> Self {
        self.credentials = Some(Credentials::new(
            access_key_id,
            secret_access_key,
            None,
            None,
            CREDENTIALS_PROVIDER_NAME,
        ));
        self
    }

    /// Ask S3 to reject uploads over an existing key with `If-None-Match: *`.
    ///
    /// Default is `false`.
    pub fn conditional_writes(mut self, enabled: bool) -> Self {
        self.builder = self.builder.conditional_writes(enabled);
        self
    }

    /// Load the default configuration
    ///
    /// If fields have been overridden during builder construction, the override values will be
    /// used. Otherwise, the default values for each field will be provided.
    pub async fn load(self) -> Result<Config, Error> {
        let mut loader =
            aws_config::defaults(BehaviorVersion::latest()).retry_config(RetryConfig::disabled());
        if let Some(region) = self.region {
            loader = loader.region(Region::new(region));
        }
        if let Some(credentials) = self.credentials {
            loader = loader.credentials_provider(credentials);
        }
        if let Some(endpoint_url) = self.endpoint_url {
            loader = loader.endpoint_url(endpoint_url);
        }

        let shared_config = loader.load().await;
        let s3_client = aws_sdk_s3::Client::from_conf(s3_config(&shared_config));
        self.builder.client(s3_client).build()
    }
}

/// S3 client config for the shared config, path-style when a custom endpoint is in use.
fn s3_config(shared_config: &SdkConfig) -> aws_sdk_s3::Config {
    let force_path_style = uses_custom_endpoint(shared_config);
    if force_path_style {
        tracing::debug!(
            "using custom endpoint {:?} with path-style addressing",
            s3_endpoint_url(shared_config).or_else(|| shared_config.endpoint_url().map(str::to_owned))
        );
    }
    aws_sdk_s3::config::Builder::from(shared_config)
        .force_path_style(force_path_style)
        .build()
}

/// Whether the S3 client built from `shared_config` talks to a custom endpoint, set either for
/// every service or for S3 only (`AWS_ENDPOINT_URL_S3`, `endpoint_url` in the profile's `s3`
/// section).
fn uses_custom_endpoint(shared_config: &SdkConfig) -> bool {
    shared_config.endpoint_url().is_some() || s3_endpoint_url(shared_config).is_some()
}

fn s3_endpoint_url(shared_config: &SdkConfig) -> Option<String> {
    let key = ServiceConfigKey::builder()
        .service_id(S3_SERVICE_ID)
        .env("AWS_ENDPOINT_URL")
        .profile("endpoint_url")
        .build()
        .ok()?;
    shared_config.service_config()?.load_config(key)
}

#[cfg(test)]
mod tests {
    use super::uses_custom_endpoint;
    use aws_config::{BehaviorVersion, Region};
    use aws_types::service_config::{LoadServiceConfig, ServiceConfigKey};
    use aws_types::SdkConfig;

    /// Service config with an endpoint configured for S3 only.
    #[derive(Debug)]
    struct S3EndpointOnly;

    impl LoadServiceConfig for S3EndpointOnly {
        fn load_config(&self, key: ServiceConfigKey<'_>) -> Option<String> {
            (key.service_id() == "S3" && key.profile() == "endpoint_url")
                .then(|| "http://localhost:9000".to_owned())
        }
    }

    #[test]
    fn test_custom_endpoint_forces_path_style() {
        let shared_config = SdkConfig::builder()
            .behavior_version(BehaviorVersion::latest())
            .region(Region::new("sa-east-1"))
            .endpoint_url("http://localhost:9000")
            .build();
        assert!(uses_custom_endpoint(&shared_config));
    }

    #[test]
    fn test_default_endpoint_keeps_virtual_host_style() {
        let shared_config = SdkConfig::builder()
            .behavior_version(BehaviorVersion::latest())
            .region(Region::new("us-west-2"))
            .build();
        assert!(!uses_custom_endpoint(&shared_config));
    }

    #[test]
    fn test_s3_only_endpoint_forces_path_style() {
        let shared_config = SdkConfig::builder()
            .behavior_version(BehaviorVersion::latest())
            .region(Region::new("us-west-2"))
            .service_config(S3EndpointOnly)
            .build();
        assert!(uses_custom_endpoint(&shared_config));
    }
}
