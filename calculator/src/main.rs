use anyhow::Context;
use bridge::server::HttpBridge;
use clap::Parser;
use generator::order::{build_sample_order, OrderConfig};
use glazecore::extract::panels_from_descriptions;
use glazecore::report::write_csv;
use glazecore::GlassPanelSpec;
use std::fs::{self, File};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::runtime::Builder as TokioBuilder;
use tokio::signal;
use workflow::config::{CalculatorConfig, ValidationPolicy};
use workflow::runner::Runner;

mod bridge;
mod generator;
mod workflow;

#[derive(Parser)]
#[command(author, version, about = "Glass weight, staffing and safety calculator")]
struct Args {
    /// JSON file holding an array of panel specs
    #[arg(long, group = "source")]
    input: Option<PathBuf>,
    /// Text file with one product description per line
    #[arg(long, group = "source")]
    descriptions: Option<PathBuf>,
    /// Calculate a generated sample order
    #[arg(long, group = "source")]
    demo: bool,
    #[arg(long, default_value_t = 6)]
    panels: usize,
    #[arg(long, default_value_t = 0)]
    seed: u64,
    /// Load the calculator config from YAML
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long, value_enum, default_value_t = ValidationPolicy::RejectBatch)]
    policy: ValidationPolicy,
    #[arg(long, default_value_t = 9000)]
    port: u16,
    /// Write the per-panel CSV export to this path
    #[arg(long)]
    csv: Option<PathBuf>,
    /// Keep the HTTP bridge alive for incoming calculation requests
    #[arg(long, default_value_t = false)]
    serve: bool,
}

fn load_panels(args: &Args) -> anyhow::Result<Option<(String, Vec<GlassPanelSpec>)>> {
    if let Some(path) = &args.input {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("reading panel specs {}", path.display()))?;
        let panels: Vec<GlassPanelSpec> = serde_json::from_str(&contents)
            .with_context(|| format!("parsing panel specs {}", path.display()))?;
        return Ok(Some((path.display().to_string(), panels)));
    }

    if let Some(path) = &args.descriptions {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("reading descriptions {}", path.display()))?;
        let lines: Vec<&str> = contents
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        let panels = panels_from_descriptions(&lines);
        log::info!(
            "{}: {} of {} description(s) yielded panel dimensions",
            path.display(),
            panels.len(),
            lines.len()
        );
        return Ok(Some((path.display().to_string(), panels)));
    }

    if args.demo {
        let config = OrderConfig {
            panels: args.panels,
            seed: args.seed,
            ..Default::default()
        };
        let panels = build_sample_order(&config).context("generating sample order")?;
        return Ok(Some((format!("sample seed {}", args.seed), panels)));
    }

    Ok(None)
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut config = if let Some(path) = &args.config {
        CalculatorConfig::load(path)?
    } else {
        CalculatorConfig::from_args(args.policy, args.port)
    };
    if args.csv.is_some() {
        config.csv_output = args.csv.clone();
    }

    let runner = Arc::new(Runner::new(config.clone()));
    let bridge = HttpBridge::new(runner.clone());
    if args.serve {
        bridge.serve(config.bind_address);
    }

    match load_panels(&args)? {
        Some((source, panels)) => match runner.execute(&source, &panels) {
            Ok(outcome) => {
                println!("{}", serde_json::to_string_pretty(&outcome)?);

                if let Some(path) = &config.csv_output {
                    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                        fs::create_dir_all(parent)?;
                    }
                    let file = File::create(path)
                        .with_context(|| format!("creating csv export {}", path.display()))?;
                    write_csv(&outcome.result, file)
                        .with_context(|| format!("writing csv export {}", path.display()))?;
                }

                bridge.publish(&source, outcome);
            }
            Err(err) => {
                for message in err.messages() {
                    eprintln!("{}", message);
                }
                if !args.serve {
                    return Err(err).context(format!("calculation for {} rejected", source));
                }
            }
        },
        None if !args.serve => {
            bridge.publish_status("Nothing to calculate; pass --input, --descriptions or --demo.");
        }
        None => {}
    }

    if args.serve {
        bridge.publish_status(&format!(
            "HTTP bridge running on {} (Ctrl+C to stop)...",
            config.bind_address
        ));
        let runtime = TokioBuilder::new_current_thread()
            .enable_all()
            .build()
            .context("creating runtime for signal handling")?;
        runtime.block_on(async {
            signal::ctrl_c().await.context("awaiting Ctrl+C to exit")?;
            Ok::<(), anyhow::Error>(())
        })?;
    }

    Ok(())
}
