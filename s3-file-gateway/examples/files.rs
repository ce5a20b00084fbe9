/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */
use std::error::Error;
use std::path::PathBuf;
use std::time;

use aws_sdk_s3::error::DisplayErrorContext;
use clap::{Parser, Subcommand};
use s3_file_gateway::primitives::ByteStream;
use s3_file_gateway::types::FileExtension;
use tokio::fs;

type BoxError = Box<dyn Error + Send + Sync>;

#[derive(Debug, Clone, clap::Parser)]
#[command(name = "files")]
#[command(about = "Stores, fetches and removes files in S3 compatible object storage.")]
struct Args {
    /// Custom S3 compatible endpoint, e.g. http://localhost:9000
    #[arg(long, global = true)]
    endpoint_url: Option<String>,

    /// Region to send requests to and create buckets in
    #[arg(long, global = true)]
    region: Option<String>,

    /// Access key id; requires --secret-key
    #[arg(long, global = true, requires = "secret_key")]
    access_key: Option<String>,

    /// Secret access key; requires --access-key
    #[arg(long, global = true, requires = "access_key")]
    secret_key: Option<String>,

    /// Reject uploads over existing keys server side with `If-None-Match: *`
    #[arg(long, global = true, default_value_t = false, action = clap::ArgAction::SetTrue)]
    conditional_writes: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone, Subcommand)]
enum Command {
    /// Upload a local file. The bucket is created when missing.
    Upload {
        /// Local file to upload
        path: PathBuf,

        /// Bucket to upload into
        #[arg(long)]
        bucket: String,

        /// Object name; defaults to the file name
        #[arg(long)]
        name: Option<String>,
    },
    /// Download an object to a local file
    Get {
        /// Bucket containing the object
        #[arg(long)]
        bucket: String,

        /// Key of the object, as printed by upload
        #[arg(long)]
        key: String,

        /// Destination file; defaults to the key in the current directory
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Delete an object
    Delete {
        /// Bucket containing the object
        #[arg(long)]
        bucket: String,

        /// Key of the object, as printed by upload
        #[arg(long)]
        key: String,
    },
}

async fn client(args: &Args) -> Result<s3_file_gateway::Client, BoxError> {
    let mut loader = s3_file_gateway::from_env().conditional_writes(args.conditional_writes);
    if let Some(endpoint_url) = &args.endpoint_url {
        loader = loader.endpoint_url(endpoint_url);
    }
    if let Some(region) = &args.region {
        loader = loader.region(region);
    }
    if let (Some(access_key), Some(secret_key)) = (&args.access_key, &args.secret_key) {
        loader = loader.credentials(access_key, secret_key);
    }
    let config = loader.load().await?;
    Ok(s3_file_gateway::Client::new(config))
}

async fn do_upload(
    client: &s3_file_gateway::Client,
    path: PathBuf,
    bucket: String,
    name: Option<String>,
) -> Result<(), BoxError> {
    let name = match name {
        Some(name) => name,
        None => path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .ok_or("upload path has no file name")?,
    };
    let extension = FileExtension::from_file_name(&path);
    let body = ByteStream::from_path(&path).await?;

    let start = time::Instant::now();
    let output = client
        .upload()
        .bucket(bucket)
        .key(name)
        .extension(extension)
        .body(body)
        .send()
        .await?;
    tracing::info!("upload output: {output:?}");

    println!(
        "uploaded {} to s3://{}/{} as {} in {:?}",
        path.display(),
        output.bucket(),
        output.key(),
        output.content_type(),
        start.elapsed()
    );
    Ok(())
}

async fn do_get(
    client: &s3_file_gateway::Client,
    bucket: String,
    key: String,
    output: Option<PathBuf>,
) -> Result<(), BoxError> {
    let dest = output.unwrap_or_else(|| PathBuf::from(&key));

    let start = time::Instant::now();
    let retrieved = client.retrieve().bucket(bucket).key(key).send().await?;
    fs::write(&dest, retrieved.body()).await?;

    println!(
        "downloaded {} bytes to {} in {:?}",
        retrieved.body().len(),
        dest.display(),
        start.elapsed()
    );
    Ok(())
}

async fn do_delete(
    client: &s3_file_gateway::Client,
    bucket: String,
    key: String,
) -> Result<(), BoxError> {
    let output = client.delete().bucket(bucket).key(key).send().await?;
    println!("deleted s3://{}/{}", output.bucket(), output.key());
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_thread_ids(true)
        .init();

    let client = client(&args).await?;
    let result = match args.command {
        Command::Upload { path, bucket, name } => do_upload(&client, path, bucket, name).await,
        Command::Get {
            bucket,
            key,
            output,
        } => do_get(&client, bucket, key, output).await,
        Command::Delete { bucket, key } => do_delete(&client, bucket, key).await,
    };

    if let Err(ref err) = result {
        tracing::error!("request failed: {}", DisplayErrorContext(err.as_ref()));
    }

    result
}
