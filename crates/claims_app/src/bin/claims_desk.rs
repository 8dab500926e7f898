//! Claims Desk - command line entry point
//!
//! # Usage
//!
//! ```bash
//! # Show statistics for the saved collection (seeding it on first run)
//! claims-desk stats
//!
//! # Export claims of one status, highest amount first
//! claims-desk export --status "Under Review" --sort amount --order desc --out ./exports
//! ```
//!
//! # Environment Variables
//!
//! * `CLAIMS_STORAGE_DIR` - Snapshot directory (default: .claims-data)
//! * `CLAIMS_STORAGE_KEY` - Snapshot key (default: zurich-claims-storage)
//! * `CLAIMS_SEED_COUNT` - Claims generated on first run (default: 50)
//! * `CLAIMS_SEED` - Fixed generator seed (default: random)
//! * `CLAIMS_TIMEZONE` - Reporting timezone (default: UTC)
//! * `CLAIMS_CURRENCY` - Reporting currency (default: CAD)
//! * `CLAIMS_LOG_LEVEL` - trace, debug, info, warn, error (default: info)
//! * `CLAIMS_LOG_FORMAT` - pretty or json (default: pretty)

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};

use claims_app::{bootstrap, init_tracing, open_snapshots, AppConfig, ClaimsService};
use core_kernel::{Clock, SystemClock};
use domain_claims::{ClaimPriority, ClaimStatus, ClaimType, FilterField, FilterValue, SortKey, SortOrder};

#[derive(Parser)]
#[command(name = "claims-desk")]
#[command(about = "Insurance claims desk - inspect and export the claims collection", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print collection statistics
    Stats,
    /// Print the filtered, sorted claims list
    List(ListArgs),
    /// Write the filtered, sorted claims list as CSV
    Export {
        #[command(flatten)]
        list: ListArgs,
        /// Directory the export is written to
        #[arg(long, default_value = ".")]
        out: PathBuf,
    },
    /// Discard the saved collection and seed a new one
    Reset,
}

#[derive(Args)]
struct ListArgs {
    #[arg(long)]
    status: Option<ClaimStatus>,
    #[arg(long = "type")]
    claim_type: Option<ClaimType>,
    #[arg(long)]
    priority: Option<ClaimPriority>,
    /// Substring of claim number, customer name or policy number
    #[arg(long, default_value = "")]
    search: String,
    #[arg(long, value_enum, default_value_t = SortArg::CreatedAt)]
    sort: SortArg,
    #[arg(long, value_enum, default_value_t = OrderArg::Desc)]
    order: OrderArg,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum SortArg {
    ClaimNumber,
    CustomerName,
    Amount,
    CreatedAt,
    UpdatedAt,
}

impl From<SortArg> for SortKey {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::ClaimNumber => SortKey::ClaimNumber,
            SortArg::CustomerName => SortKey::CustomerName,
            SortArg::Amount => SortKey::Amount,
            SortArg::CreatedAt => SortKey::CreatedAt,
            SortArg::UpdatedAt => SortKey::UpdatedAt,
        }
    }
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum OrderArg {
    Asc,
    Desc,
}

impl From<OrderArg> for SortOrder {
    fn from(arg: OrderArg) -> Self {
        match arg {
            OrderArg::Asc => SortOrder::Ascending,
            OrderArg::Desc => SortOrder::Descending,
        }
    }
}

impl ListArgs {
    fn apply<P: domain_claims::ClaimsSnapshotPort>(&self, service: &mut ClaimsService<P>) {
        service.set_filter(FilterField::Status(FilterValue::from(self.status)));
        service.set_filter(FilterField::Type(FilterValue::from(self.claim_type)));
        service.set_filter(FilterField::Priority(FilterValue::from(self.priority)));
        service.set_filter(FilterField::Search(self.search.clone()));
        service.set_sorting(self.sort.into(), self.order.into());
    }
}

fn main() -> anyhow::Result<()> {
    // Load .env file if present (useful for local development)
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = AppConfig::from_env().context("loading configuration")?;
    init_tracing(&config.log_level, config.log_format).context("installing tracing subscriber")?;

    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let snapshots = open_snapshots(&config)?;
    if matches!(cli.command, Commands::Reset) {
        snapshots.clear().context("clearing saved claims")?;
    }

    let store = bootstrap(&config, &snapshots, clock.clone())?;
    let mut service = ClaimsService::new(store, snapshots);

    match cli.command {
        Commands::Stats | Commands::Reset => {
            let stats = service.statistics();
            println!("Total claims:      {}", stats.total);
            println!("Pending:           {}", stats.pending);
            println!("Under review:      {}", stats.under_review);
            println!("Approved:          {}", stats.approved);
            println!("Denied:            {}", stats.denied);
            println!("Paid:              {}", stats.paid);
            println!("Filed this month:  {}", stats.this_month);
            println!("Total claimed:     {}", stats.total_amount);
        }
        Commands::List(args) => {
            args.apply(&mut service);
            for claim in service.filtered_claims() {
                println!(
                    "{}  {:<24} {:<10} {:<13} {}",
                    claim.claim_number, claim.customer_name, claim.claim_type, claim.status, claim.amount
                );
            }
        }
        Commands::Export { list, out } => {
            list.apply(&mut service);
            let today = service.store().timezone().local_date(clock.now());
            let export = service.export(today)?;
            let path = out.join(&export.file_name);
            std::fs::write(&path, export.contents)
                .with_context(|| format!("writing {}", path.display()))?;
            tracing::info!(path = %path.display(), "claims exported");
        }
    }

    Ok(())
}
