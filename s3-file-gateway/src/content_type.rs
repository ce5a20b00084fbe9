/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use crate::types::FileExtension;

/// Content type used for unknown extensions and for every retrieved object.
pub const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

/// Resolve the content type stored with an object from its file extension.
///
/// Lookup is case-insensitive. Missing or unrecognized extensions resolve to
/// [`DEFAULT_CONTENT_TYPE`].
pub fn from_extension(extension: &FileExtension) -> &'static str {
    match extension.as_str().to_ascii_lowercase().as_str() {
        ".pdf" => "application/pdf",
        ".txt" => "text/plain",
        ".csv" => "text/csv",
        ".html" | ".htm" => "text/html",
        ".json" => "application/json",
        ".xml" => "application/xml",
        ".zip" => "application/zip",
        ".rar" => "application/x-rar-compressed",
        ".tar" => "application/x-tar",
        ".gz" => "application/gzip",
        ".7z" => "application/x-7z-compressed",
        ".jpg" | ".jpeg" => "image/jpeg",
        ".png" => "image/png",
        ".gif" => "image/gif",
        ".bmp" => "image/bmp",
        ".webp" => "image/webp",
        ".mp3" => "audio/mpeg",
        ".wav" => "audio/wav",
        ".mp4" => "video/mp4",
        ".mov" => "video/quicktime",
        ".avi" => "video/x-msvideo",
        ".mkv" => "video/x-matroska",
        _ => DEFAULT_CONTENT_TYPE,
    }
}
