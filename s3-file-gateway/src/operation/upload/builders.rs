/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::sync::Arc;

use aws_sdk_s3::primitives::ByteStream;

use crate::error::Error;
use crate::types::FileExtension;

use super::{UploadInputBuilder, UploadOutput};

/// Fluent builder for constructing a single file upload
#[derive(Debug)]
pub struct UploadFluentBuilder {
    handle: Arc<crate::client::Handle>,
    inner: UploadInputBuilder,
}

impl UploadFluentBuilder {
    pub(crate) fn new(handle: Arc<crate::client::Handle>) -> Self {
        Self {
            handle,
            inner: ::std::default::Default::default(),
        }
    }

    /// Upload the file, returning the final object key
    pub async fn send(self) -> Result<UploadOutput, Error> {
        let input = self.inner.build()?;
        crate::operation::upload::Upload::orchestrate(self.handle, input).await
    }

    /// Object data.
    pub fn body(mut self, input: ByteStream) -> Self {
        self.inner = self.inner.body(input);
        self
    }

    /// Object data.
    pub fn set_body(mut self, input: Option<ByteStream>) -> Self {
        self.inner = self.inner.set_body(input);
        self
    }

    /// Object data.
    pub fn get_body(&self) -> &Option<ByteStream> {
        self.inner.get_body()
    }

    /// The bucket to upload into. Created when it does not exist.
    pub fn bucket(mut self, input: impl Into<String>) -> Self {
        self.inner = self.inner.bucket(input);
        self
    }

    /// The bucket to upload into.
    pub fn set_bucket(mut self, input: Option<String>) -> Self {
        self.inner = self.inner.set_bucket(input);
        self
    }

    /// The bucket to upload into.
    pub fn get_bucket(&self) -> &Option<String> {
        self.inner.get_bucket()
    }

    /// Name of the object. The file extension is appended unless the name already ends with it.
    pub fn key(mut self, input: impl Into<String>) -> Self {
        self.inner = self.inner.key(input);
        self
    }

    /// Name of the object.
    pub fn set_key(mut self, input: Option<String>) -> Self {
        self.inner = self.inner.set_key(input);
        self
    }

    /// Name of the object.
    pub fn get_key(&self) -> &Option<String> {
        self.inner.get_key()
    }

    /// File extension, e.g. `.pdf`.
    pub fn extension(mut self, input: impl Into<FileExtension>) -> Self {
        self.inner = self.inner.extension(input);
        self
    }

    /// File extension of the uploaded file.
    pub fn set_extension(mut self, input: Option<FileExtension>) -> Self {
        self.inner = self.inner.set_extension(input);
        self
    }

    /// File extension of the uploaded file.
    pub fn get_extension(&self) -> &Option<FileExtension> {
        self.inner.get_extension()
    }
}

impl crate::operation::upload::input::UploadInputBuilder {
    /// Upload a single file with this input using the given client.
    pub async fn send_with(self, client: &crate::Client) -> Result<UploadOutput, Error> {
        let mut fluent_builder = client.upload();
        fluent_builder.inner = self;
        fluent_builder.send().await
    }
}
