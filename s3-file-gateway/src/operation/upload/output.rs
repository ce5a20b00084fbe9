/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// Response type for a single file upload
#[non_exhaustive]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UploadOutput {
    /// The bucket the object was stored in.
    pub bucket: String,

    /// The final object key, including the file extension.
    pub key: String,

    /// The content type the object was stored with.
    pub content_type: String,
}

impl UploadOutput {
    /// The bucket the object was stored in.
    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    /// The final object key. Pass this key to retrieve or delete the object.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The content type the object was stored with.
    pub fn content_type(&self) -> &str {
        &self.content_type
    }
}
