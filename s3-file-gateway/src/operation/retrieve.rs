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

use crate::content_type::DEFAULT_CONTENT_TYPE;
use crate::error::Error;
use crate::operation::{ensure_object_exists, require};
/// Request type for retrieving objects
pub use input::{RetrieveInput, RetrieveInputBuilder};
/// Response type for retrieving objects
pub use output::RetrieveOutput;

/// Operation struct for single object retrieval
#[derive(Clone, Default, Debug)]
pub(crate) struct Retrieve;

impl Retrieve {
    /// Execute a single `Retrieve` operation
    pub(crate) async fn orchestrate(
        handle: Arc<crate::client::Handle>,
        input: RetrieveInput,
    ) -> Result<RetrieveOutput, Error> {
        let bucket = require("bucket", input.bucket())?.to_owned();
        let key = require("key", input.key())?.to_owned();

        let span = tracing::debug_span!("retrieve", bucket = %bucket, key = %key);
        async move {
            let gateway = handle.gateway();
            ensure_object_exists(gateway, &bucket, &key).await?;

            let body = gateway.get_object(&bucket, &key).await?;
            let body = body.collect().await?.into_bytes();
            tracing::trace!("retrieved {} bytes", body.len());

            Ok(RetrieveOutput {
                bucket,
                key,
                body,
                content_type: DEFAULT_CONTENT_TYPE.to_owned(),
            })
        }
        .instrument(span)
        .await
    }
}

#[cfg(test)]
mod test {
    use crate::error::ErrorKind;
    use aws_sdk_s3::error::ErrorMetadata;
    use aws_sdk_s3::operation::get_object::{GetObjectError, GetObjectOutput};
    use aws_sdk_s3::operation::head_object::{HeadObjectError, HeadObjectOutput};
    use aws_sdk_s3::operation::list_buckets::ListBucketsOutput;
    use aws_sdk_s3::primitives::ByteStream;
    use aws_sdk_s3::types::error::NotFound;
    use aws_sdk_s3::types::Bucket;
    use aws_smithy_mocks::{mock, mock_client, Rule, RuleMode};

    fn list_buckets(name: &'static str) -> Rule {
        mock!(aws_sdk_s3::Client::list_buckets).then_output(move || {
            ListBucketsOutput::builder()
                .buckets(Bucket::builder().name(name).build())
                .build()
        })
    }

    fn test_client(client: aws_sdk_s3::Client) -> crate::Client {
        let config = crate::Config::builder().client(client).build().unwrap();
        crate::Client::new(config)
    }

    #[tokio::test]
    async fn test_retrieve_buffers_body() {
        let list_buckets = list_buckets("docs");
        let head_object = mock!(aws_sdk_s3::Client::head_object)
            .then_output(|| HeadObjectOutput::builder().content_length(11).build());
        let get_object = mock!(aws_sdk_s3::Client::get_object)
            .match_requests(|r| r.bucket() == Some("docs") && r.key() == Some("notes.txt"))
            .then_output(|| {
                GetObjectOutput::builder()
                    .content_type("text/plain")
                    .body(ByteStream::from_static(b"hello world"))
                    .build()
            });

        let client = mock_client!(
            aws_sdk_s3,
            RuleMode::Sequential,
            &[&list_buckets, &head_object, &get_object]
        );
        let client = test_client(client);

        let output = client
            .retrieve()
            .bucket("docs")
            .key("notes.txt")
            .send()
            .await
            .unwrap();

        assert_eq!(&b"hello world"[..], &output.body()[..]);
        assert_eq!("application/octet-stream", output.content_type());
        assert_eq!("notes.txt", output.key());
    }

    #[tokio::test]
    async fn test_retrieve_missing_bucket() {
        let list_buckets = list_buckets("docs");
        let get_object = mock!(aws_sdk_s3::Client::get_object)
            .then_output(|| GetObjectOutput::builder().build());

        let client = mock_client!(
            aws_sdk_s3,
            RuleMode::Sequential,
            &[&list_buckets, &get_object]
        );
        let client = test_client(client);

        let err = client
            .retrieve()
            .bucket("photos")
            .key("notes.txt")
            .send()
            .await
            .unwrap_err();

        assert_eq!(&ErrorKind::NotFound, err.kind());
        assert_eq!(0, get_object.num_calls());
    }

    #[tokio::test]
    async fn test_retrieve_missing_key() {
        let list_buckets = list_buckets("docs");
        let head_object = mock!(aws_sdk_s3::Client::head_object)
            .then_error(|| HeadObjectError::NotFound(NotFound::builder().build()));

        let client = mock_client!(
            aws_sdk_s3,
            RuleMode::Sequential,
            &[&list_buckets, &head_object]
        );
        let client = test_client(client);

        let err = client
            .retrieve()
            .bucket("docs")
            .key("missing.txt")
            .send()
            .await
            .unwrap_err();

        assert_eq!(&ErrorKind::NotFound, err.kind());
    }

    #[tokio::test]
    async fn test_retrieve_get_failure_is_backend_error() {
        let list_buckets = list_buckets("docs");
        let head_object = mock!(aws_sdk_s3::Client::head_object)
            .then_output(|| HeadObjectOutput::builder().build());
        let get_object = mock!(aws_sdk_s3::Client::get_object).then_error(|| {
            GetObjectError::generic(
                ErrorMetadata::builder()
                    .code("InvalidObjectState")
                    .message("object is archived")
                    .build(),
            )
        });

        let client = mock_client!(
            aws_sdk_s3,
            RuleMode::Sequential,
            &[&list_buckets, &head_object, &get_object]
        );
        let client = test_client(client);

        let err = client
            .retrieve()
            .bucket("docs")
            .key("archived.txt")
            .send()
            .await
            .unwrap_err();

        assert_eq!(&ErrorKind::BackendError, err.kind());
    }
}
