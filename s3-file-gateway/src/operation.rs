/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use crate::error::{self, Error};
use crate::gateway::StorageGateway;
use crate::types::Existence;

/// Types for single object upload operation
pub mod upload;

/// Types for single object retrieve operation
pub mod retrieve;

/// Types for single object delete operation
pub mod delete;

/// Return the value of a required identifier, failing on missing or empty values.
pub(crate) fn require<'a>(field: &str, value: Option<&'a str>) -> Result<&'a str, Error> {
    match value {
        Some(value) if !value.is_empty() => Ok(value),
        Some(_) => Err(error::invalid_argument(format!("{field} must not be empty"))),
        None => Err(error::invalid_argument(format!("{field} is required"))),
    }
}

/// Fail with `NotFound` unless both the bucket and the object exist.
pub(crate) async fn ensure_object_exists(
    gateway: &dyn StorageGateway,
    bucket: &str,
    key: &str,
) -> Result<(), Error> {
    if gateway.bucket_exists(bucket).await? == Existence::Absent {
        return Err(error::not_found(format!("no such bucket `{bucket}`")));
    }
    if gateway.object_exists(bucket, key).await? == Existence::Absent {
        return Err(error::not_found(format!(
            "no such key `{key}` in bucket `{bucket}`"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::require;
    use crate::error::ErrorKind;

    #[test]
    fn test_require() {
        assert_eq!("photos", require("bucket", Some("photos")).unwrap());
        let err = require("bucket", Some("")).unwrap_err();
        assert_eq!(&ErrorKind::InvalidArgument, err.kind());
        let err = require("key", None).unwrap_err();
        assert_eq!(&ErrorKind::InvalidArgument, err.kind());
    }
}
