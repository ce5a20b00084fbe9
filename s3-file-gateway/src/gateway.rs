/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Storage backends for the file gateway.
//!
//! [`StorageGateway`] is the narrow set of object-storage primitives the upload, retrieve and
//! delete operations are built on. Implementations carry no caching: every existence probe is
//! a fresh backend query.

use std::fmt::Debug;
use std::sync::Arc;

use async_trait::async_trait;
use aws_sdk_s3::primitives::ByteStream;

use crate::error::Error;
use crate::types::Existence;

mod in_memory;
mod s3;

pub use in_memory::{InMemoryGateway, StoredObject};
pub use s3::S3Gateway;

/// A shared, type erased [`StorageGateway`].
pub type SharedStorageGateway = Arc<dyn StorageGateway>;

/// Object-storage capabilities required by the file gateway operations.
#[async_trait]
pub trait StorageGateway: Send + Sync + Debug {
    /// Check whether a bucket exists.
    async fn bucket_exists(&self, bucket: &str) -> Result<Existence, Error>;

    /// Create a bucket.
    ///
    /// Implementations MUST succeed when the bucket already exists, concurrent uploads into a
    /// missing bucket all attempt to create it.
    async fn create_bucket(&self, bucket: &str) -> Result<(), Error>;

    /// Check whether an object exists.
    ///
    /// A "not found" answer is [`Existence::Absent`], any other failure is an error.
    async fn object_exists(&self, bucket: &str, key: &str) -> Result<Existence, Error>;

    /// Store an object with the given content type.
    async fn put_object(
        &self,
        bucket: &str,
        key: &str,
        content_type: &str,
        body: ByteStream,
    ) -> Result<(), Error>;

    /// Fetch the content of an object.
    async fn get_object(&self, bucket: &str, key: &str) -> Result<ByteStream, Error>;

    /// Delete an object.
    async fn delete_object(&self, bucket: &str, key: &str) -> Result<(), Error>;
}

#[async_trait]
impl<T> StorageGateway for Arc<T>
where
    T: StorageGateway + ?Sized,
{
    async fn bucket_exists(&self, bucket: &str) -> Result<Existence, Error> {
        (**self).bucket_exists(bucket).await
    }

    async fn create_bucket(&self, bucket: &str) -> Result<(), Error> {
        (**self).create_bucket(bucket).await
    }

    async fn object_exists(&self, bucket: &str, key: &str) -> Result<Existence, Error> {
        (**self).object_exists(bucket, key).await
    }

    async fn put_object(
        &self,
        bucket: &str,
        key: &str,
        content_type: &str,
        body: ByteStream,
    ) -> Result<(), Error> {
        (**self).put_object(bucket, key, content_type, body).await
    }

    async fn get_object(&self, bucket: &str, key: &str) -> Result<ByteStream, Error> {
        (**self).get_object(bucket, key).await
    }

    async fn delete_object(&self, bucket: &str, key: &str) -> Result<(), Error> {
        (**self).delete_object(bucket, key).await
    }
}
