/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// Operation builders
pub mod builders;
mod input;
mod output;

use std::sync::Arc;

use tracing::Instrument;

use crate::error::Error;
use crate::operation::{ensure_object_exists, require};
/// Request type for deleting objects
pub use input::{DeleteInput, DeleteInputBuilder};
/// Response type for deleting objects
pub use output::DeleteOutput;

/// Operation struct for single object deletion
#[derive(Clone, Default, Debug)]
pub(crate) struct Delete;

impl Delete {
    /// Execute a single `Delete` operation
    pub(crate) async fn orchestrate(
        handle: Arc<crate::client::Handle>,
        input: DeleteInput,
    ) -> Result<DeleteOutput, Error> {
        let bucket = require("bucket", input.bucket())?.to_owned();
        let key = require("key", input.key())?.to_owned();

        let span = tracing::debug_span!("delete", bucket = %bucket, key = %key);
        async move {
            let gateway = handle.gateway();
            ensure_object_exists(gateway, &bucket, &key).await?;
            gateway.delete_object(&bucket, &key).await?;
            tracing::debug!("deleted {key} from {bucket}");

            Ok(DeleteOutput { bucket, key })
        }
        .instrument(span)
        .await
    }
}
