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

use crate::content_type;
use crate::error::{self, Error};
use crate::operation::require;
use crate::types::{Existence, FileExtension};
/// Request type for uploads to object storage
pub use input::{UploadInput, UploadInputBuilder};
/// Response type for uploads to object storage
pub use output::UploadOutput;

/// Operation struct for single file upload
#[derive(Clone, Default, Debug)]
pub(crate) struct Upload;

impl Upload {
    /// Execute a single `Upload` operation
    pub(crate) async fn orchestrate(
        handle: Arc<crate::client::Handle>,
        mut input: UploadInput,
    ) -> Result<UploadOutput, Error> {
        let bucket = require("bucket", input.bucket())?.to_owned();
        let name = require("key", input.key())?.to_owned();
        let extension = input.extension.take().unwrap_or_default();
        let body = input
            .take_body()
            .ok_or_else(|| error::invalid_argument("body is required"))?;

        let span = tracing::debug_span!("upload", bucket = %bucket, key = %name);
        async move {
            let gateway = handle.gateway();

            if gateway.bucket_exists(&bucket).await? == Existence::Absent {
                tracing::debug!("bucket {bucket} does not exist; creating it");
                gateway.create_bucket(&bucket).await?;
            }

            let content_type = content_type::from_extension(&extension);
            let key = final_key(&name, &extension);

            if gateway.object_exists(&bucket, &key).await?.is_present() {
                return Err(error::already_exists(format!(
                    "object `{key}` already exists in bucket `{bucket}`"
                )));
            }

            tracing::trace!("storing {key} as {content_type}");
            gateway.put_object(&bucket, &key, content_type, body).await?;

            Ok(UploadOutput {
                bucket,
                key,
                content_type: content_type.to_owned(),
            })
        }
        .instrument(span)
        .await
    }
}

/// The object key a file named `name` is stored under.
fn final_key(name: &str, extension: &FileExtension) -> String {
    if extension.is_suffix_of(name) {
        name.to_owned()
    } else {
        format!("{name}{extension}")
    }
}

#[cfg(test)]
mod test {
    use super::final_key;
    use crate::error::ErrorKind;
    use crate::types::FileExtension;
    use aws_sdk_s3::error::ErrorMetadata;
    use aws_sdk_s3::operation::create_bucket::CreateBucketOutput;
    use aws_sdk_s3::operation::head_object::{HeadObjectError, HeadObjectOutput};
    use aws_sdk_s3::operation::list_buckets::ListBucketsOutput;
    use aws_sdk_s3::operation::put_object::{PutObjectError, PutObjectOutput};
    use aws_sdk_s3::primitives::ByteStream;
    use aws_sdk_s3::types::error::NotFound;
    use aws_sdk_s3::types::Bucket;
    use aws_smithy_mocks::{mock, mock_client, RuleMode};

    #[test]
    fn test_final_key() {
        let pdf = FileExtension::new(".pdf");
        assert_eq!("report.pdf", final_key("report", &pdf));
        assert_eq!("report.pdf", final_key("report.pdf", &pdf));
        assert_eq!("REPORT.PDF", final_key("REPORT.PDF", &pdf));
        assert_eq!("report.PDF", final_key("report", &FileExtension::new(".PDF")));
        assert_eq!("report.txt.pdf", final_key("report.txt", &pdf));
        assert_eq!("report", final_key("report", &FileExtension::default()));
    }

    fn test_client(client: aws_sdk_s3::Client) -> crate::Client {
        let config = crate::Config::builder().client(client).build().unwrap();
        crate::Client::new(config)
    }

    #[tokio::test]
    async fn test_upload_creates_missing_bucket() {
        let list_buckets = mock!(aws_sdk_s3::Client::list_buckets)
            .then_output(|| ListBucketsOutput::builder().build());
        let create_bucket = mock!(aws_sdk_s3::Client::create_bucket)
            .match_requests(|r| r.bucket() == Some("invoices"))
            .then_output(|| CreateBucketOutput::builder().build());
        let head_object = mock!(aws_sdk_s3::Client::head_object)
            .match_requests(|r| r.key() == Some("march.pdf"))
            .then_error(|| HeadObjectError::NotFound(NotFound::builder().build()));
        let put_object = mock!(aws_sdk_s3::Client::put_object)
            .match_requests(|r| {
                r.bucket() == Some("invoices")
                    && r.key() == Some("march.pdf")
                    && r.content_type() == Some("application/pdf")
            })
            .then_output(|| PutObjectOutput::builder().e_tag("test-etag").build());

        let client = mock_client!(
            aws_sdk_s3,
            RuleMode::Sequential,
            &[&list_buckets, &create_bucket, &head_object, &put_object]
        );
        let client = test_client(client);

        let output = client
            .upload()
            .bucket("invoices")
            .key("march")
            .extension(".pdf")
            .body(ByteStream::from_static(b"%PDF-1.7"))
            .send()
            .await
            .unwrap();

        assert_eq!("invoices", output.bucket());
        assert_eq!("march.pdf", output.key());
        assert_eq!("application/pdf", output.content_type());
    }

    #[tokio::test]
    async fn test_upload_never_overwrites() {
        let list_buckets = mock!(aws_sdk_s3::Client::list_buckets).then_output(|| {
            ListBucketsOutput::builder()
                .buckets(Bucket::builder().name("invoices").build())
                .build()
        });
        let head_object = mock!(aws_sdk_s3::Client::head_object)
            .then_output(|| HeadObjectOutput::builder().content_length(8).build());
        let put_object = mock!(aws_sdk_s3::Client::put_object)
            .then_output(|| PutObjectOutput::builder().build());

        let client = mock_client!(
            aws_sdk_s3,
            RuleMode::Sequential,
            &[&list_buckets, &head_object, &put_object]
        );
        let client = test_client(client);

        let err = client
            .upload()
            .bucket("invoices")
            .key("march.pdf")
            .extension(".pdf")
            .body(ByteStream::from_static(b"%PDF-1.7"))
            .send()
            .await
            .unwrap_err();

        assert_eq!(&ErrorKind::AlreadyExists, err.kind());
        assert_eq!(0, put_object.num_calls());
    }

    #[tokio::test]
    async fn test_upload_put_failure_is_backend_error() {
        let list_buckets = mock!(aws_sdk_s3::Client::list_buckets).then_output(|| {
            ListBucketsOutput::builder()
                .buckets(Bucket::builder().name("invoices").build())
                .build()
        });
        let head_object = mock!(aws_sdk_s3::Client::head_object)
            .then_error(|| HeadObjectError::NotFound(NotFound::builder().build()));
        let put_object = mock!(aws_sdk_s3::Client::put_object).then_error(|| {
            PutObjectError::generic(
                ErrorMetadata::builder()
                    .code("AccessDenied")
                    .message("access denied")
                    .build(),
            )
        });

        let client = mock_client!(
            aws_sdk_s3,
            RuleMode::Sequential,
            &[&list_buckets, &head_object, &put_object]
        );
        let client = test_client(client);

        let err = client
            .upload()
            .bucket("invoices")
            .key("march")
            .extension("csv")
            .body(ByteStream::from_static(b"a,b,c"))
            .send()
            .await
            .unwrap_err();

        assert_eq!(&ErrorKind::BackendError, err.kind());
        assert_eq!(1, put_object.num_calls());
    }
}
