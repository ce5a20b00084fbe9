/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::sync::Arc;

use bytes::Bytes;
use s3_file_gateway::gateway::InMemoryGateway;
use s3_file_gateway::{Client, Config};

/// Create a client backed by a fresh in-memory gateway.
///
/// The gateway is returned alongside the client so tests can inspect stored objects and
/// count backend requests.
pub fn in_memory_client() -> (Client, Arc<InMemoryGateway>) {
    let gateway = Arc::new(InMemoryGateway::new());
    let config = Config::builder().gateway(gateway.clone()).build().unwrap();
    (Client::new(config), gateway)
}

/// Random payload of `size` bytes
pub fn rand_data(size: usize) -> Bytes {
    let mut data = vec![0u8; size];
    fastrand::fill(&mut data);
    Bytes::from(data)
}

/// Create a temporary directory containing a single file called `file_name` holding `contents`.
pub fn create_test_file(file_name: &str, contents: &[u8]) -> tempfile::TempDir {
    let temp_dir = tempfile::tempdir().unwrap();
    let full_path = temp_dir.path().join(file_name);
    std::fs::write(&full_path, contents).unwrap();
    temp_dir
}
