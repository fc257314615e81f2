use action_catalog::catalog::CatalogError;
use action_catalog::catalogs::Catalogs;
use action_catalog::render::{emit, render};
use clap::Parser;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Fixture catalog to print
    #[arg(value_enum, default_value = "combat")]
    catalog: Catalogs,

    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,
}

fn run(args: &Args) -> Result<(), CatalogError> {
    let catalog = args.catalog.build();
    log::debug!("built {:?} catalog with {} actions", args.catalog, catalog.len());
    let text = render(&catalog)?;
    emit(&text)?;
    Ok(())
}

fn main() {
    let args = Args::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    if let Err(error) = run(&args) {
        log::error!("{}", error);
        std::process::exit(1);
    }
}
