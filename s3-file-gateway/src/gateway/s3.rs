/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use async_trait::async_trait;
use aws_sdk_s3::error::ProvideErrorMetadata;
use aws_sdk_s3::operation::create_bucket::CreateBucketError;
use aws_sdk_s3::operation::head_object::HeadObjectError;
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::types::{BucketLocationConstraint, CreateBucketConfiguration};

use crate::error::{self, Error};
use crate::gateway::StorageGateway;
use crate::types::Existence;

/// Region in which buckets are created without an explicit location constraint.
const DEFAULT_BUCKET_REGION: &str = "us-east-1";

/// [`StorageGateway`] backed by Amazon S3 or any S3 compatible service.
#[derive(Debug, Clone)]
pub struct S3Gateway {
    client: aws_sdk_s3::Client,
    conditional_writes: bool,
}

impl S3Gateway {
    /// Create a new gateway sending requests with the given client.
    pub fn new(client: aws_sdk_s3::Client) -> Self {
        Self {
            client,
            conditional_writes: false,
        }
    }

    /// Send `If-None-Match: *` with every put so the backend itself rejects overwrites.
    ///
    /// Only enable this for backends that support conditional writes.
    pub fn with_conditional_writes(mut self, enabled: bool) -> Self {
        self.conditional_writes = enabled;
        self
    }

    /// The S3 client used to send requests.
    pub fn client(&self) -> &aws_sdk_s3::Client {
        &self.client
    }

    fn location_constraint(&self) -> Option<CreateBucketConfiguration> {
        let region = self.client.config().region()?;
        if region.as_ref() == DEFAULT_BUCKET_REGION {
            return None;
        }
        Some(
            CreateBucketConfiguration::builder()
                .location_constraint(BucketLocationConstraint::from(region.as_ref()))
                .build(),
        )
    }
}

#[async_trait]
impl StorageGateway for S3Gateway {
    async fn bucket_exists(&self, bucket: &str) -> Result<Existence, Error> {
        let mut continuation_token: Option<String> = None;
        loop {
            let resp = self
                .client
                .list_buckets()
                .set_continuation_token(continuation_token.take())
                .send()
                .await
                .map_err(error::backend)?;

            if resp.buckets().iter().any(|b| b.name() == Some(bucket)) {
                tracing::trace!("bucket {bucket} found in bucket listing");
                return Ok(Existence::Present);
            }

            match resp.continuation_token() {
                Some(token) if !token.is_empty() => {
                    continuation_token = Some(token.to_owned());
                }
                _ => break,
            }
        }

        tracing::trace!("bucket {bucket} not found in bucket listing");
        Ok(Existence::Absent)
    }

    async fn create_bucket(&self, bucket: &str) -> Result<(), Error> {
        let result = self
            .client
            .create_bucket()
            .bucket(bucket)
            .set_create_bucket_configuration(self.location_constraint())
            .send()
            .await;

        match result {
            Ok(_) => Ok(()),
            Err(err)
                if err.as_service_error().is_some_and(|e| {
                    matches!(
                        e,
                        CreateBucketError::BucketAlreadyOwnedByYou(_)
                            | CreateBucketError::BucketAlreadyExists(_)
                    )
                }) =>
            {
                tracing::debug!(
                    "create bucket {bucket} answered {}, treating as created",
                    err.code().unwrap_or("BucketAlreadyExists")
                );
                Ok(())
            }
            Err(err) => Err(error::backend(err)),
        }
    }

    async fn object_exists(&self, bucket: &str, key: &str) -> Result<Existence, Error> {
        let result = self.client.head_object().bucket(bucket).key(key).send().await;

        match result {
            Ok(_) => Ok(Existence::Present),
            Err(err) if err.as_service_error().is_some_and(HeadObjectError::is_not_found) => {
                Ok(Existence::Absent)
            }
            Err(err) => Err(error::backend(err)),
        }
    }

    async fn put_object(
        &self,
        bucket: &str,
        key: &str,
        content_type: &str,
        body: ByteStream,
    ) -> Result<(), Error> {
        let mut req = self
            .client
            .put_object()
            .bucket(bucket)
            .key(key)
            .content_type(content_type)
            .body(body);
        if self.conditional_writes {
            req = req.if_none_match("*");
        }

        match req.send().await {
            Ok(_) => Ok(()),
            Err(err) if self.conditional_writes && err.code() == Some("PreconditionFailed") => {
                Err(error::already_exists(err))
            }
            Err(err) => Err(error::backend(err)),
        }
    }

    async fn get_object(&self, bucket: &str, key: &str) -> Result<ByteStream, Error> {
        let resp = self
            .client
            .get_object()
            .bucket(bucket)
            .key(key)
            .send()
            .await?;
        Ok(resp.body)
    }

    async fn delete_object(&self, bucket: &str, key: &str) -> Result<(), Error> {
        self.client
            .delete_object()
            .bucket(bucket)
            .key(key)
            .send()
            .await?;
        Ok(())
    }
}
