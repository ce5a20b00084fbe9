/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use aws_sdk_s3::primitives::ByteStream;

use crate::types::FileExtension;

/// Request type for uploading a single file
#[non_exhaustive]
#[derive(Debug)]
pub struct UploadInput {
    /// Object data.
    pub body: Option<ByteStream>,

    /// The bucket to upload into. Created when it does not exist.
    pub bucket: Option<String>,

    /// Name of the object. The file extension is appended unless already present.
    pub key: Option<String>,

    /// File extension selecting the content type and the key suffix.
    pub extension: Option<FileExtension>,
}

impl UploadInput {
    /// Creates a new builder-style object to manufacture [`UploadInput`].
    pub fn builder() -> UploadInputBuilder {
        UploadInputBuilder::default()
    }

    /// Take the body out of the input, if one was set.
    pub(crate) fn take_body(&mut self) -> Option<ByteStream> {
        self.body.take()
    }

    /// Object data.
    pub fn body(&self) -> Option<&ByteStream> {
        self.body.as_ref()
    }

    /// The bucket to upload into.
    pub fn bucket(&self) -> Option<&str> {
        self.bucket.as_deref()
    }

    /// Name of the object.
    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    /// File extension of the uploaded file.
    pub fn extension(&self) -> Option<&FileExtension> {
        self.extension.as_ref()
    }
}

/// A builder for [`UploadInput`].
#[non_exhaustive]
#[derive(Debug, Default)]
pub struct UploadInputBuilder {
    pub(crate) body: Option<ByteStream>,
    pub(crate) bucket: Option<String>,
    pub(crate) key: Option<String>,
    pub(crate) extension: Option<FileExtension>,
}

impl UploadInputBuilder {
    /// Object data.
    ///
    /// This field is required.
    pub fn body(mut self, input: ByteStream) -> Self {
        self.body = Some(input);
        self
    }

    /// Object data.
    pub fn set_body(mut self, input: Option<ByteStream>) -> Self {
        self.body = input;
        self
    }

    /// Object data.
    pub fn get_body(&self) -> &Option<ByteStream> {
        &self.body
    }

    /// The bucket to upload into. Created when it does not exist.
    ///
    /// This field is required.
    pub fn bucket(mut self, input: impl Into<String>) -> Self {
        self.bucket = Some(input.into());
        self
    }

    /// The bucket to upload into.
    pub fn set_bucket(mut self, input: Option<String>) -> Self {
        self.bucket = input;
        self
    }

    /// The bucket to upload into.
    pub fn get_bucket(&self) -> &Option<String> {
        &self.bucket
    }

    /// Name of the object. The file extension is appended unless the name already ends with it.
    ///
    /// This field is required.
    pub fn key(mut self, input: impl Into<String>) -> Self {
        self.key = Some(input.into());
        self
    }

    /// Name of the object.
    pub fn set_key(mut self, input: Option<String>) -> Self {
        self.key = input;
        self
    }

    /// Name of the object.
    pub fn get_key(&self) -> &Option<String> {
        &self.key
    }

    /// File extension, e.g. `.pdf`. A missing leading `.` is added.
    ///
    /// Without an extension the key is used as is and the object is stored as
    /// `application/octet-stream`.
    pub fn extension(mut self, input: impl Into<FileExtension>) -> Self {
        self.extension = Some(input.into());
        self
    }

    /// File extension of the uploaded file.
    pub fn set_extension(mut self, input: Option<FileExtension>) -> Self {
        self.extension = input;
        self
    }

    /// File extension of the uploaded file.
    pub fn get_extension(&self) -> &Option<FileExtension> {
        &self.extension
    }

    /// Consumes the builder and constructs an [`UploadInput`].
    ///
    /// A missing body and missing or empty identifiers are rejected when the operation is sent.
    pub fn build(self) -> Result<UploadInput, ::aws_smithy_types::error::operation::BuildError> {
        Ok(UploadInput {
            body: self.body,
            bucket: self.bucket,
            key: self.key,
            extension: self.extension,
        })
    }
}
