/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::fmt;

use aws_sdk_s3::error::ProvideErrorMetadata;

/// A boxed error that is `Send` and `Sync`.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Errors returned by this library
///
/// NOTE: Use [`aws_smithy_types::error::display::DisplayErrorContext`] or similar to display
/// the entire error cause/source chain.
#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    source: BoxError,
}

/// General categories of gateway errors.
#[derive(Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// Missing or empty bucket name or object key. Not retriable without correcting the input.
    InvalidArgument,

    /// The bucket or the object does not exist.
    NotFound,

    /// An object already exists at the upload target. Uploads never overwrite.
    AlreadyExists,

    /// The storage backend failed (transport, authentication, service error, etc).
    BackendError,
}

impl Error {
    /// Creates a new [`Error`] from a known kind of error as well as an arbitrary error
    /// source.
    pub fn new<E>(kind: ErrorKind, err: E) -> Error
    where
        E: Into<BoxError>,
    {
        Error {
            kind,
            source: err.into(),
        }
    }

    /// Returns the corresponding [`ErrorKind`] for this error.
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ErrorKind::InvalidArgument => write!(f, "invalid argument"),
            ErrorKind::NotFound => write!(f, "resource not found"),
            ErrorKind::AlreadyExists => write!(f, "object already exists"),
            ErrorKind::BackendError => write!(f, "storage backend error"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.source.as_ref())
    }
}

impl From<aws_smithy_types::error::operation::BuildError> for Error {
    fn from(value: aws_smithy_types::error::operation::BuildError) -> Self {
        Self::new(ErrorKind::InvalidArgument, value)
    }
}

impl From<aws_smithy_types::byte_stream::error::Error> for Error {
    fn from(value: aws_smithy_types::byte_stream::error::Error) -> Self {
        Self::new(ErrorKind::BackendError, value)
    }
}

impl<E, R> From<aws_sdk_s3::error::SdkError<E, R>> for Error
where
    E: std::error::Error + ProvideErrorMetadata + Send + Sync + 'static,
    R: Send + Sync + fmt::Debug + 'static,
{
    fn from(value: aws_sdk_s3::error::SdkError<E, R>) -> Self {
        let kind = match value.code() {
            Some("NotFound" | "NoSuchKey" | "NoSuchBucket") => ErrorKind::NotFound,
            _ => ErrorKind::BackendError,
        };

        Error::new(kind, value)
    }
}

pub(crate) fn invalid_argument<E>(err: E) -> Error
where
    E: Into<BoxError>,
{
    Error::new(ErrorKind::InvalidArgument, err)
}

pub(crate) fn not_found<E>(err: E) -> Error
where
    E: Into<BoxError>,
{
    Error::new(ErrorKind::NotFound, err)
}

pub(crate) fn already_exists<E>(err: E) -> Error
where
    E: Into<BoxError>,
{
    Error::new(ErrorKind::AlreadyExists, err)
}

/// Wrap any failure as a [`ErrorKind::BackendError`], regardless of the error code it carries.
pub(crate) fn backend<E>(err: E) -> Error
where
    E: Into<BoxError>,
{
    Error::new(ErrorKind::BackendError, err)
}
