/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::sync::Arc;

use crate::error::Error;

use super::{RetrieveInputBuilder, RetrieveOutput};

/// Fluent builder for constructing a single object retrieval
#[derive(Debug)]
pub struct RetrieveFluentBuilder {
    handle: Arc<crate::client::Handle>,
    inner: RetrieveInputBuilder,
}

impl RetrieveFluentBuilder {
    pub(crate) fn new(handle: Arc<crate::client::Handle>) -> Self {
        Self {
            handle,
            inner: ::std::default::Default::default(),
        }
    }

    /// Retrieve the object, buffering its full content
    pub async fn send(self) -> Result<RetrieveOutput, Error> {
        let input = self.inner.build()?;
        crate::operation::retrieve::Retrieve::orchestrate(self.handle, input).await
    }

    /// The bucket containing the object.
    pub fn bucket(mut self, input: impl Into<String>) -> Self {
        self.inner = self.inner.bucket(input);
        self
    }

    /// The bucket containing the object.
    pub fn set_bucket(mut self, input: Option<String>) -> Self {
        self.inner = self.inner.set_bucket(input);
        self
    }

    /// The bucket containing the object.
    pub fn get_bucket(&self) -> &Option<String> {
        self.inner.get_bucket()
    }

    /// Key of the object to retrieve.
    pub fn key(mut self, input: impl Into<String>) -> Self {
        self.inner = self.inner.key(input);
        self
    }

    /// Key of the object to retrieve.
    pub fn set_key(mut self, input: Option<String>) -> Self {
        self.inner = self.inner.set_key(input);
        self
    }

    /// Key of the object to retrieve.
    pub fn get_key(&self) -> &Option<String> {
        self.inner.get_key()
    }
}

impl crate::operation::retrieve::input::RetrieveInputBuilder {
    /// Retrieve a single object with this input using the given client.
    pub async fn send_with(self, client: &crate::Client) -> Result<RetrieveOutput, Error> {
        let mut fluent_builder = client.retrieve();
        fluent_builder.inner = self;
        fluent_builder.send().await
    }
}
