use structopt::StructOpt;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

use wsdl2ts_codegen as codegen;
use wsdl2ts_wsdl::LoadOptions;

#[derive(Debug, Error)]
enum Error {
    #[error("Error generating typings")]
    CodegenError(#[from] codegen::error::Error),

    #[error("{0} warning(s) emitted with --deny-warnings")]
    DeniedWarnings(usize),

    #[error("Unable to read command line arguments")]
    IoError(#[from] std::io::Error),
}

/// Transform a WSDL specification to TypeScript typings. Works best with the `soap` module.
#[derive(StructOpt)]
struct Args {
    /// Path to TypeScript output file
    #[structopt(short, long, alias = "output")]
    out: String,

    /// Use URL instead of file
    #[structopt(short, long)]
    url: bool,

    /// Fail without writing output if any type could not be resolved
    #[structopt(long)]
    deny_warnings: bool,

    /// Path or URL of the WSDL file
    wsdl: String,
}

#[paw::main]
fn main(args: Args) -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .init();

    let options = LoadOptions { url: args.url };
    let extracted = codegen::from_source(&args.wsdl, &options)?;

    for diagnostic in &extracted.diagnostics {
        tracing::warn!(subject = %diagnostic.subject, "{}", diagnostic);
    }

    if args.deny_warnings && !extracted.diagnostics.is_empty() {
        return Err(Error::DeniedWarnings(extracted.diagnostics.len()));
    }

    codegen::writer::write_file(&args.out, &extracted.value)?;
    tracing::info!(input = %args.wsdl, output = %args.out, "done");

    Ok(())
}
