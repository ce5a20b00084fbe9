/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use bytes::Bytes;

/// Response type for retrieving a single object
#[non_exhaustive]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RetrieveOutput {
    /// The bucket the object was read from.
    pub bucket: String,

    /// Key of the retrieved object.
    pub key: String,

    /// The full object content.
    pub body: Bytes,

    /// Content type to serve the object with. Always `application/octet-stream`.
    pub content_type: String,
}

impl RetrieveOutput {
    /// The bucket the object was read from.
    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    /// Key of the retrieved object, also the suggested download file name.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The full object content.
    pub fn body(&self) -> &Bytes {
        &self.body
    }

    /// Consume the output, returning the object content.
    pub fn into_body(self) -> Bytes {
        self.body
    }

    /// Content type to serve the object with.
    pub fn content_type(&self) -> &str {
        &self.content_type
    }
}
