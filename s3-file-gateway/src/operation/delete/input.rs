/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// Request type for deleting a single object
#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DeleteInput {
    /// The bucket containing the object.
    pub bucket: Option<String>,

    /// Key of the object to delete.
    pub key: Option<String>,
}

impl DeleteInput {
    /// Creates a new builder-style object to manufacture [`DeleteInput`].
    pub fn builder() -> DeleteInputBuilder {
        DeleteInputBuilder::default()
    }

    /// The bucket containing the object.
    pub fn bucket(&self) -> Option<&str> {
        self.bucket.as_deref()
    }

    /// Key of the object to delete.
    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }
}

/// A builder for [`DeleteInput`].
#[non_exhaustive]
#[derive(Clone, Debug, Default)]
pub struct DeleteInputBuilder {
    pub(crate) bucket: Option<String>,
    pub(crate) key: Option<String>,
}

impl DeleteInputBuilder {
    /// The bucket containing the object.
    ///
    /// This field is required.
    pub fn bucket(mut self, input: impl Into<String>) -> Self {
        self.bucket = Some(input.into());
        self
    }

    /// The bucket containing the object.
    pub fn set_bucket(mut self, input: Option<String>) -> Self {
        self.bucket = input;
        self
    }

    /// The bucket containing the object.
    pub fn get_bucket(&self) -> &Option<String> {
        &self.bucket
    }

    /// Key of the object to delete.
    ///
    /// The key is used exactly as given; no extension is appended.
    /// This field is required.
    pub fn key(mut self, input: impl Into<String>) -> Self {
        self.key = Some(input.into());
        self
    }

    /// Key of the object to delete.
    pub fn set_key(mut self, input: Option<String>) -> Self {
        self.key = input;
        self
    }

    /// Key of the object to delete.
    pub fn get_key(&self) -> &Option<String> {
        &self.key
    }

    /// Consumes the builder and constructs a [`DeleteInput`].
    pub fn build(self) -> Result<DeleteInput, ::aws_smithy_types::error::operation::BuildError> {
        Ok(DeleteInput {
            bucket: self.bucket,
            key: self.key,
        })
    }
}
