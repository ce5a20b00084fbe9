/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::sync::Arc;

use crate::gateway::StorageGateway;
use crate::Config;

/// File gateway client for S3 compatible object storage.
///
/// Cloning is cheap, every clone shares the same storage backend.
#[derive(Debug, Clone)]
pub struct Client {
    pub(crate) handle: Arc<Handle>,
}

/// Whatever is needed to carry out operations, e.g. config and the storage backend
#[derive(Debug)]
pub(crate) struct Handle {
    pub(crate) config: crate::Config,
}

impl Handle {
    /// The storage backend to send requests to
    pub(crate) fn gateway(&self) -> &dyn StorageGateway {
        self.config.gateway()
    }
}

impl Client {
    /// Creates a new client from a file gateway config.
    pub fn new(config: Config) -> Client {
        let handle = Arc::new(Handle { config });
        Client { handle }
    }

    /// Returns the client's configuration
    pub fn config(&self) -> &Config {
        &self.handle.config
    }

    /// Constructs a fluent builder for the
    /// [`Upload`](crate::operation::upload::builders::UploadFluentBuilder) operation.
    ///
    /// The final object key is the given key with the file extension appended, unless the key
    /// already ends with it. Uploads never overwrite an existing object and create the bucket
    /// when it does not exist yet.
    ///
    /// # Examples
    /// ```no_run
    /// use s3_file_gateway::error::Error;
    /// use s3_file_gateway::primitives::ByteStream;
    ///
    /// async fn upload_report(client: &s3_file_gateway::Client) -> Result<(), Error> {
    ///     let output = client
    ///         .upload()
    ///         .bucket("reports")
    ///         .key("2024-q3")
    ///         .extension(".pdf")
    ///         .body(ByteStream::from_path("/tmp/q3.pdf").await?)
    ///         .send()
    ///         .await?;
    ///
    ///     assert_eq!("2024-q3.pdf", output.key());
    ///     Ok(())
    /// }
    /// ```
    pub fn upload(&self) -> crate::operation::upload::builders::UploadFluentBuilder {
        crate::operation::upload::builders::UploadFluentBuilder::new(self.handle.clone())
    }

    /// Constructs a fluent builder for the
    /// [`Retrieve`](crate::operation::retrieve::builders::RetrieveFluentBuilder) operation.
    ///
    /// The object content is fully buffered before it is returned.
    ///
    /// # Examples
    /// ```no_run
    /// use s3_file_gateway::error::Error;
    ///
    /// async fn fetch_report(client: &s3_file_gateway::Client) -> Result<(), Error> {
    ///     let output = client
    ///         .retrieve()
    ///         .bucket("reports")
    ///         .key("2024-q3.pdf")
    ///         .send()
    ///         .await?;
    ///
    ///     println!("{} bytes ({})", output.body().len(), output.content_type());
    ///     Ok(())
    /// }
    /// ```
    pub fn retrieve(&self) -> crate::operation::retrieve::builders::RetrieveFluentBuilder {
        crate::operation::retrieve::builders::RetrieveFluentBuilder::new(self.handle.clone())
    }

    /// Constructs a fluent builder for the
    /// [`Delete`](crate::operation::delete::builders::DeleteFluentBuilder) operation.
    ///
    /// The key is used exactly as given, pass the final key returned by an upload.
    pub fn delete(&self) -> crate::operation::delete::builders::DeleteFluentBuilder {
        crate::operation::delete::builders::DeleteFluentBuilder::new(self.handle.clone())
    }
}
