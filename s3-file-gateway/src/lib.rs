/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/* Automatically managed default lints */
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
/* End of automatically managed default lints */
#![warn(
    missing_debug_implementations,
    missing_docs,
    rustdoc::missing_crate_level_docs,
    unreachable_pub,
    rust_2018_idioms
)]

//! A small file storage client for Amazon S3 and S3 compatible object stores.
//!
//! The client stores files under a key derived from the file name and extension, serves them
//! back as fully buffered bytes and deletes them. Uploads create the target bucket on demand
//! and never overwrite an object that already exists.
//!
//! # Examples
//!
//! Load the default configuration:
//!
//! ```no_run
//! # async fn example() -> Result<(), s3_file_gateway::error::Error> {
//! let config = s3_file_gateway::from_env().load().await?;
//! let client = s3_file_gateway::Client::new(config);
//! # Ok(())
//! # }
//! ```
//!
//! Store a file against a local S3 compatible endpoint and read it back:
//!
//! ```no_run
//! # async fn example() -> Result<(), s3_file_gateway::error::Error> {
//! use s3_file_gateway::primitives::ByteStream;
//!
//! let config = s3_file_gateway::from_env()
//!     .endpoint_url("http://localhost:9000")
//!     .credentials("minioadmin", "minioadmin")
//!     .region("us-east-1")
//!     .load()
//!     .await?;
//! let client = s3_file_gateway::Client::new(config);
//!
//! let uploaded = client
//!     .upload()
//!     .bucket("documents")
//!     .key("invoice-0042")
//!     .extension(".pdf")
//!     .body(ByteStream::from_static(b"%PDF-1.7"))
//!     .send()
//!     .await?;
//!
//! let file = client
//!     .retrieve()
//!     .bucket("documents")
//!     .key(uploaded.key())
//!     .send()
//!     .await?;
//! assert_eq!(&b"%PDF-1.7"[..], &file.body()[..]);
//! # Ok(())
//! # }
//! ```
//!
//! See the documentation for each client operation for more information:
//!
//! * [`upload`](crate::Client::upload) - store a single file, creating the bucket if needed
//! * [`retrieve`](crate::Client::retrieve) - read a single object into memory
//! * [`delete`](crate::Client::delete) - remove a single object

/// Error types emitted by `s3-file-gateway`
pub mod error;

/// Common types used by `s3-file-gateway`
pub mod types;

/// Content type resolution for file extensions
pub mod content_type;

/// Storage backends
pub mod gateway;

/// File gateway client
pub mod client;

/// File gateway operations
pub mod operation;

/// File gateway configuration
pub mod config;

/// Re-exported primitives used in operation inputs
pub mod primitives {
    pub use aws_sdk_s3::primitives::ByteStream;
}

pub use self::client::Client;
pub use self::config::loader::ConfigLoader;
pub use self::config::Config;

/// Create a config loader
pub fn from_env() -> ConfigLoader {
    ConfigLoader::default()
}
