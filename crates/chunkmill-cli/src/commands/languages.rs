//! Languages command

use crate::app::OutputFormat;
use anyhow::Result;
use chunkmill_core::chunk::{CODE_EXTENSIONS, TEXT_EXTENSIONS};
use serde::Serialize;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct LanguageListing {
    code_extensions: Vec<ExtensionEntry>,
    text_extensions: Vec<String>,
}

#[derive(Serialize)]
struct ExtensionEntry {
    extension: String,
    language: String,
}

pub fn run(format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            let listing = LanguageListing {
                code_extensions: CODE_EXTENSIONS
                    .iter()
                    .map(|(extension, language)| ExtensionEntry {
                        extension: extension.to_string(),
                        language: language.as_str().to_string(),
                    })
                    .collect(),
                text_extensions: TEXT_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
            };
            println!("{}", serde_json::to_string_pretty(&listing)?);
        }
        OutputFormat::Cli => {
            println!("Code extensions:");
            for (extension, language) in CODE_EXTENSIONS {
                println!("  .{extension} -> {}", language.as_str());
            }
            println!();
            println!("Text extensions:");
            for extension in TEXT_EXTENSIONS {
                println!("  .{extension}");
            }
        }
    }
    Ok(())
}
