//! Command-line entry point for the metadata template generator
//!
//! Reads the two field-standard workbooks, assembles the collection
//! template and the two readme tables, and writes all three as CSV files
//! in the working directory.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use sheet_io::Workbook;
use template_engine::{
    minimum_info_readme, package_readme, package_readme_filename, template_filename,
    FieldSources, SampleBatch, TemplateEngine, TemplateOptions, MIMS_README_FILENAME,
};

#[derive(Parser)]
#[command(name = "metatemplate")]
#[command(about = "Generate blank metadata-collection templates for environmental sample batches")]
#[command(version)]
struct Args {
    /// Workbook with the registry and minimum-information required fields (.xls/.xlsx)
    #[arg(long, value_name = "PATH")]
    registry_workbook: PathBuf,

    /// Workbook with the MIxS standard field reference (.xls/.xlsx)
    #[arg(long, value_name = "PATH")]
    mixs_workbook: PathBuf,

    /// Environmental packages, comma separated (e.g. soil or soil,water)
    #[arg(long, value_name = "LIST", required = true, value_delimiter = ',')]
    packages: Vec<String>,

    /// Number of blank sample rows to generate
    #[arg(long, value_name = "N")]
    samples: usize,

    /// Prefix for generated sample names
    #[arg(long, value_name = "STRING")]
    prefix: String,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    run(&args)
}

fn run(args: &Args) -> Result<()> {
    let mut standards = Workbook::open(&args.registry_workbook)
        .with_context(|| format!("opening {}", args.registry_workbook.display()))?;
    let mut mixs = Workbook::open(&args.mixs_workbook)
        .with_context(|| format!("opening {}", args.mixs_workbook.display()))?;

    let sources = FieldSources::load(&mut standards, &mut mixs)?;
    tracing::info!(
        registry_fields = sources.registry.len(),
        mims_fields = sources.mims.len(),
        package_rows = sources.package_fields.len(),
        "field sources loaded"
    );

    let batch = SampleBatch::new(args.packages.clone(), args.samples, &args.prefix);
    let engine = TemplateEngine::new(
        sources.registry,
        sources.mims,
        sources.package_fields,
        TemplateOptions::default(),
    );

    // All three tables are built before the first file is created; a
    // failure must not leave partial output behind.
    let template = engine.assemble(&batch)?;
    let info_readme = minimum_info_readme(&sources.migs_mims);
    let selected = engine.package_fields().select(&batch.packages);
    let pkg_readme = package_readme(&selected);

    let template_name = template_filename(&batch.prefix, &batch.packages, batch.samples);
    template
        .write_csv_file(&template_name)
        .with_context(|| format!("writing {}", template_name))?;
    tracing::info!(
        file = %template_name,
        columns = template.column_count(),
        rows = template.row_count(),
        "template written"
    );

    info_readme
        .write_csv_file(MIMS_README_FILENAME)
        .with_context(|| format!("writing {}", MIMS_README_FILENAME))?;
    tracing::info!(
        file = MIMS_README_FILENAME,
        rows = info_readme.row_count(),
        "minimum-information readme written"
    );

    let pkg_readme_name = package_readme_filename(&batch.packages);
    pkg_readme
        .write_csv_file(&pkg_readme_name)
        .with_context(|| format!("writing {}", pkg_readme_name))?;
    tracing::info!(
        file = %pkg_readme_name,
        rows = pkg_readme.row_count(),
        "package readme written"
    );

    Ok(())
}
