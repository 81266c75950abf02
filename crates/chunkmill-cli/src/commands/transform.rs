//! Transform command

use crate::app::{OutputFormat, TransformArgs};
use anyhow::Result;
use chunkmill_core::{
    run_transformation, Error, FsStore, S3Store, Settings, Storage, TransformationEvent,
};
use std::io::Read;

pub async fn run(args: TransformArgs, format: OutputFormat) -> Result<()> {
    let raw = if args.event == "-" {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else {
        std::fs::read_to_string(&args.event)?
    };

    let event: TransformationEvent = serde_json::from_str(&raw)
        .map_err(|e| Error::Input(format!("malformed transformation event: {e}")))?;

    let mut settings = Settings::from_env();
    if let Some(bucket) = args.bucket {
        settings.transformation_bucket = bucket;
    }

    let store: Box<dyn Storage> = match args.local_root {
        Some(root) => Box::new(FsStore::new(root)),
        None => Box::new(S3Store::from_settings(&settings)?),
    };

    let output = run_transformation(&event, store.as_ref(), &settings).await?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Cli => {
            for file in &output.output_files {
                for batch in &file.content_batches {
                    println!(
                        "{} -> {}",
                        file.original_file_location.s3_location.uri, batch.key
                    );
                }
            }
        }
    }

    Ok(())
}
