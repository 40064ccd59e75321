use anyhow::Context;
use std::path::PathBuf;

use agroplot::{
    calculate_project_statistics, import_project_from_file, init_logging, BUILD_DATE, VERSION,
};

const USAGE: &str = "usage: agroplot <export.json>";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let Some(arg) = std::env::args_os().nth(1) else {
        anyhow::bail!(USAGE);
    };
    if arg == "--version" || arg == "-V" {
        println!("agroplot {VERSION} (built {BUILD_DATE})");
        return Ok(());
    }

    init_logging()?;

    let path = PathBuf::from(arg);
    let data = import_project_from_file(&path)
        .await
        .with_context(|| format!("Failed to import {}", path.display()))?;
    tracing::info!("Imported {}", path.display());

    let stats = calculate_project_statistics(&data.to_drawing_elements());
    println!(
        "{} ({}, exported {})",
        data.project_info.name,
        data.canvas_size,
        data.project_info.exported_at.format("%Y-%m-%d %H:%M UTC")
    );
    println!("{stats}");

    Ok(())
}
