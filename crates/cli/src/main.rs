use clap::{Parser, Subcommand};
use drugcheck_core::{
    config::timeout_from_env_value, is_known_condition, CoreConfig, OpenFdaLookupService,
    ResultPayload, CONDITIONS, DEFAULT_OPENFDA_BASE_URL,
};
use std::fmt::Write;

#[derive(Parser)]
#[command(name = "drugcheck")]
#[command(about = "Look up medications, interactions and side effects on openFDA")]
struct Cli {
    /// openFDA base URL
    #[arg(long, global = true, env = "OPENFDA_BASE_URL", default_value = DEFAULT_OPENFDA_BASE_URL)]
    base_url: String,

    /// openFDA request timeout in seconds
    #[arg(long, global = true, env = "OPENFDA_TIMEOUT_SECS")]
    timeout_secs: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List the conditions offered for selection
    Conditions,
    /// Look up medications for one or more conditions
    Lookup {
        /// Condition names, searched as given
        conditions: Vec<String>,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("drugcheck=warn".parse()?)
                .add_directive("drugcheck_core=warn".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Conditions) => {
            for condition in CONDITIONS {
                println!("{condition}");
            }
        }
        Some(Commands::Lookup { conditions, json }) => {
            for condition in unlisted_conditions(&conditions) {
                tracing::warn!(condition, "not one of the offered conditions, searching anyway");
            }

            let cfg = CoreConfig::new(cli.base_url, timeout_from_env_value(cli.timeout_secs)?)?;
            let service = OpenFdaLookupService::from_config(&cfg)?;
            let payload = service.lookup(&conditions).await?;

            if json {
                println!("{}", serde_json::to_string_pretty(&payload)?);
            } else {
                print!("{}", render_text(&payload));
            }
        }
        None => {
            println!("Use 'drugcheck --help' for commands");
        }
    }

    Ok(())
}

/// Conditions outside the offered list. They are still searched, the CLI only flags them.
fn unlisted_conditions(conditions: &[String]) -> Vec<&str> {
    conditions
        .iter()
        .map(String::as_str)
        .filter(|c| !is_known_condition(c))
        .collect()
}

fn render_text(payload: &ResultPayload) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "Medications for {}:", payload.conditions.join(", "));
    push_list(&mut out, &payload.medications);

    let _ = writeln!(out, "Potential drug interactions:");
    push_list(&mut out, &payload.interactions);

    let _ = writeln!(out, "Potential side effects:");
    if payload.side_effects.is_empty() {
        let _ = writeln!(out, "  No potential side effects found.");
    } else {
        push_list(&mut out, &payload.side_effects);
    }

    out
}

fn push_list(out: &mut String, items: &[String]) {
    for item in items {
        let _ = writeln!(out, "  - {item}");
    }
}
