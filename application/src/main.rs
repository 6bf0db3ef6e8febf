use std::{io, path::Path, sync::OnceLock};

use application::{Args, CliCommand, Config, Request, Service};
use service::{
    command::{GenerateCoExhibitorAnnex, GenerateContract},
    infra::FsTemplates,
    pdf,
    Command as _,
};
use tracing as log;
use tracing_subscriber::{
    filter::filter_fn,
    layer::{Layer as _, SubscriberExt as _},
    util::SubscriberInitExt as _,
};

const STDERR_LEVELS: &[log::Level] = &[log::Level::WARN, log::Level::ERROR];

static LOG_LEVEL: OnceLock<log::Level> = OnceLock::new();

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .compact()
                .with_ansi(true)
                .with_thread_names(true)
                .with_writer(io::stdout)
                .with_filter(filter_fn(|meta| {
                    meta.is_span()
                        || (!STDERR_LEVELS.contains(meta.level()))
                            && LOG_LEVEL
                                .get()
                                .copied()
                                .unwrap_or(log::Level::INFO)
                                >= *meta.level()
                })),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .compact()
                .with_ansi(true)
                .with_thread_names(true)
                .with_writer(io::stderr)
                .with_filter(filter_fn(|meta| {
                    meta.is_span()
                        || (STDERR_LEVELS.contains(meta.level()))
                            && LOG_LEVEL
                                .get()
                                .copied()
                                .unwrap_or(log::Level::INFO)
                                >= *meta.level()
                })),
        )
        .init();

    _ = start().await;
}

async fn start() -> Result<(), ()> {
    let Args { config, command } = Args::parse().map_err(|e| {
        log::error!("failed to parse command line arguments: {e}");
    })?;

    let Config {
        templates,
        output,
        log,
    } = Config::new(config).map_err(|e| {
        log::error!("failed to load `Config`: {e}");
    })?;

    LOG_LEVEL
        .set(log.level.into())
        .unwrap_or_else(|_| unreachable!("first initialization"));

    let service = Service::new(FsTemplates::new(templates.dir));

    match command {
        CliCommand::Generate {
            request,
            preview_all,
        } => generate(&service, &request, &output.dir, preview_all).await,
        CliCommand::Fields { template } => fields(&template).await,
    }
}

/// Generates a filled contract (and co-exhibitor annexes, if any) from the
/// JSON request file at `request`.
async fn generate(
    service: &Service,
    request: &Path,
    out_dir: &Path,
    preview_all: bool,
) -> Result<(), ()> {
    let raw = tokio::fs::read(request).await.map_err(|e| {
        log::error!("failed to read `{}`: {e}", request.display());
    })?;
    let Request {
        exhibitor,
        selection,
        engagement,
    } = serde_json::from_slice(&raw).map_err(|e| {
        log::error!("failed to parse `{}`: {e}", request.display());
    })?;

    tokio::fs::create_dir_all(out_dir).await.map_err(|e| {
        log::error!("failed to create `{}`: {e}", out_dir.display());
    })?;

    let co_exhibitors = selection.space.co_exhibitors.clone();

    let contract = service
        .execute(GenerateContract {
            exhibitor,
            selection,
            engagement,
            preview_all,
        })
        .await
        .map_err(|e| {
            log::error!("failed to generate contract: {e}");
        })?;
    write_document(out_dir, &contract.file_name, &contract.document).await?;
    log::info!(
        excl_tax = %contract.totals.total_excl_tax,
        incl_tax = %contract.totals.total_incl_tax,
        "totals",
    );

    for (index, co_exhibitor) in co_exhibitors.into_iter().enumerate() {
        let annex = service
            .execute(GenerateCoExhibitorAnnex {
                co_exhibitor,
                index,
            })
            .await
            .map_err(|e| {
                log::error!("failed to generate co-exhibitor annex: {e}");
            })?;
        write_document(out_dir, &annex.file_name, &annex.document).await?;
    }

    Ok(())
}

/// Writes a generated document into `out_dir` under `file_name`.
async fn write_document(
    out_dir: &Path,
    file_name: &str,
    document: &[u8],
) -> Result<(), ()> {
    let path = out_dir.join(file_name);
    tokio::fs::write(&path, document).await.map_err(|e| {
        log::error!("failed to write `{}`: {e}", path.display());
    })?;
    log::info!("wrote `{}`", path.display());
    Ok(())
}

/// Prints the form fields of the template at `template`, with their kind and
/// explicit-map coverage.
async fn fields(template: &Path) -> Result<(), ()> {
    let raw = tokio::fs::read(template).await.map_err(|e| {
        log::error!("failed to read `{}`: {e}", template.display());
    })?;
    let report = pdf::inspect(&raw).map_err(|e| {
        log::error!("failed to inspect `{}`: {e}", template.display());
    })?;

    for entry in &report.entries {
        let coverage = if entry.covered { "mapped" } else { "unmapped" };
        println!("{coverage:<8} {:<10} {}", format!("{:?}", entry.flavor), entry.name);
    }
    println!(
        "{} of {} fields covered by the explicit map",
        report.covered(),
        report.total(),
    );

    Ok(())
}
