/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// Response type for deleting a single object
#[non_exhaustive]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeleteOutput {
    /// The bucket the object was removed from.
    pub bucket: String,

    /// Key of the removed object.
    pub key: String,
}

impl DeleteOutput {
    /// The bucket the object was removed from.
    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    /// Key of the removed object.
    pub fn key(&self) -> &str {
        &self.key
    }
}
