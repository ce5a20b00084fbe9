/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! In-memory implementation of the StorageGateway trait.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use aws_sdk_s3::primitives::ByteStream;
use bytes::Bytes;
use tokio::sync::RwLock;

use crate::error::{self, Error};
use crate::gateway::StorageGateway;
use crate::types::Existence;

/// An object held by [`InMemoryGateway`].
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct StoredObject {
    /// The content type the object was stored with.
    pub content_type: String,
    /// The object content.
    pub body: Bytes,
}

/// A process-local [`StorageGateway`].
///
/// Buckets and objects only live as long as the gateway. Puts overwrite like S3 does, the
/// create-only policy is enforced by the operations. Suitable for tests and local development.
#[derive(Debug, Default)]
pub struct InMemoryGateway {
    // bucket -> (key -> object)
    buckets: RwLock<HashMap<String, HashMap<String, StoredObject>>>,
    requests: AtomicUsize,
}

impl InMemoryGateway {
    /// Create a new, empty in-memory gateway.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return a copy of the object stored at `bucket`/`key`, if any.
    pub async fn stored_object(&self, bucket: &str, key: &str) -> Option<StoredObject> {
        let buckets = self.buckets.read().await;
        buckets.get(bucket)?.get(key).cloned()
    }

    /// Total number of gateway calls served so far.
    pub fn request_count(&self) -> usize {
        self.requests.load(Ordering::SeqCst)
    }

    fn record_request(&self) {
        self.requests.fetch_add(1, Ordering::SeqCst);
    }
}

fn no_such_bucket(bucket: &str) -> Error {
    error::not_found(format!("no such bucket `{bucket}`"))
}

fn no_such_key(bucket: &str, key: &str) -> Error {
    error::not_found(format!("no such key `{key}` in bucket `{bucket}`"))
}

#[async_trait]
impl StorageGateway for InMemoryGateway {
    async fn bucket_exists(&self, bucket: &str) -> Result<Existence, Error> {
        self.record_request();
        let buckets = self.buckets.read().await;
        Ok(buckets.contains_key(bucket).into())
    }

    async fn create_bucket(&self, bucket: &str) -> Result<(), Error> {
        self.record_request();
        let mut buckets = self.buckets.write().await;
        buckets.entry(bucket.to_string()).or_default();
        Ok(())
    }

    async fn object_exists(&self, bucket: &str, key: &str) -> Result<Existence, Error> {
        self.record_request();
        let buckets = self.buckets.read().await;
        let exists = buckets
            .get(bucket)
            .is_some_and(|objects| objects.contains_key(key));
        Ok(exists.into())
    }

    async fn put_object(
        &self,
        bucket: &str,
        key: &str,
        content_type: &str,
        body: ByteStream,
    ) -> Result<(), Error> {
        self.record_request();
        // drain the body before taking the lock
        let body = body.collect().await?.into_bytes();
        let mut buckets = self.buckets.write().await;
        let objects = buckets.get_mut(bucket).ok_or_else(|| no_such_bucket(bucket))?;
        objects.insert(
            key.to_string(),
            StoredObject {
                content_type: content_type.to_string(),
                body,
            },
        );
        Ok(())
    }

    async fn get_object(&self, bucket: &str, key: &str) -> Result<ByteStream, Error> {
        self.record_request();
        let buckets = self.buckets.read().await;
        let objects = buckets.get(bucket).ok_or_else(|| no_such_bucket(bucket))?;
        let object = objects.get(key).ok_or_else(|| no_such_key(bucket, key))?;
        Ok(ByteStream::from(object.body.clone()))
    }

    async fn delete_object(&self, bucket: &str, key: &str) -> Result<(), Error> {
        self.record_request();
        let mut buckets = self.buckets.write().await;
        let objects = buckets
            .get_mut(bucket)
            .ok_or_else(|| no_such_bucket(bucket))?;
        if objects.remove(key).is_none() {
            return Err(no_such_key(bucket, key));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::InMemoryGateway;
    use crate::error::ErrorKind;
    use crate::gateway::StorageGateway;
    use crate::types::Existence;
    use aws_sdk_s3::primitives::ByteStream;

    #[tokio::test]
    async fn test_create_bucket_is_idempotent() {
        let gateway = InMemoryGateway::new();
        assert_eq!(Existence::Absent, gateway.bucket_exists("b").await.unwrap());
        gateway.create_bucket("b").await.unwrap();
        gateway
            .put_object("b", "k", "text/plain", ByteStream::from_static(b"data"))
            .await
            .unwrap();

        // a second create must not wipe existing objects
        gateway.create_bucket("b").await.unwrap();
        assert_eq!(Existence::Present, gateway.bucket_exists("b").await.unwrap());
        assert_eq!(
            Existence::Present,
            gateway.object_exists("b", "k").await.unwrap()
        );
    }

    #[tokio::test]
    async fn test_put_requires_bucket() {
        let gateway = InMemoryGateway::new();
        let err = gateway
            .put_object("missing", "k", "text/plain", ByteStream::from_static(b"data"))
            .await
            .unwrap_err();
        assert_eq!(&ErrorKind::NotFound, err.kind());
    }

    #[tokio::test]
    async fn test_get_and_delete() {
        let gateway = InMemoryGateway::new();
        gateway.create_bucket("b").await.unwrap();
        gateway
            .put_object("b", "k", "text/csv", ByteStream::from_static(b"a,b"))
            .await
            .unwrap();

        let stored = gateway.stored_object("b", "k").await.unwrap();
        assert_eq!("text/csv", stored.content_type);

        let body = gateway.get_object("b", "k").await.unwrap();
        let body = body.collect().await.unwrap().into_bytes();
        assert_eq!(&b"a,b"[..], &body[..]);

        gateway.delete_object("b", "k").await.unwrap();
        let err = gateway.delete_object("b", "k").await.unwrap_err();
        assert_eq!(&ErrorKind::NotFound, err.kind());
        let err = gateway.get_object("b", "k").await.unwrap_err();
        assert_eq!(&ErrorKind::NotFound, err.kind());
        assert_eq!(
            Existence::Absent,
            gateway.object_exists("missing", "k").await.unwrap()
        );
        assert_eq!(7, gateway.request_count());
    }
}
