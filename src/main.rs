use anyhow::Result;
use bintrace::{
    cli::{Cli, OutputFormat},
    config::Config,
    csv_output::{self, CsvOutput},
    html_output::HtmlOutput,
    json_output::JsonOutput,
    presets::PresetGallery,
    report::{self, TextReport},
    session::Session,
    stats::TraceStats,
    tracer::{self, SearchTrace},
};
use clap::Parser;
use std::io;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Initialize tracing subscriber for debug output
fn init_tracing(debug: bool) {
    if debug {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::from_default_env().add_directive(tracing::Level::TRACE.into()),
            )
            .with_writer(std::io::stderr)
            .init();
    }
}

/// Pick the raw values and target text from flags or an example
fn resolve_input(args: &Cli, gallery: &PresetGallery) -> Result<(String, String)> {
    if let Some(name) = &args.example {
        let Some(preset) = gallery.find(name) else {
            anyhow::bail!(
                "Unknown example: {}. Use --list-examples to see available examples",
                name
            );
        };
        info!(example = %preset.name, "running example");
        return Ok((preset.values.clone(), preset.target.clone()));
    }

    match (&args.values, &args.target) {
        (None, None) => anyhow::bail!(
            "Must specify --values and --target, or --example NAME. Usage: bintrace --values 23,5,17 --target 17"
        ),
        // A missing side is reported by input validation
        (values, target) => Ok((
            values.clone().unwrap_or_default(),
            target.clone().unwrap_or_default(),
        )),
    }
}

/// Render a trace in the requested format
fn render(trace: &SearchTrace, format: OutputFormat, summary: bool, diagrams: bool) -> Result<String> {
    let stats = TraceStats::from_trace(trace);

    let output = match (format, summary) {
        (OutputFormat::Text, false) => TextReport::new(diagrams).render(trace),
        (OutputFormat::Text, true) => {
            let mut out = report::render_summary_box(&stats, trace.target());
            out.push('\n');
            out.push_str(&report::render_statistics(&stats));
            out
        }
        (OutputFormat::Json, false) => {
            let mut out = JsonOutput::from_trace(trace).to_json()?;
            out.push('\n');
            out
        }
        (OutputFormat::Json, true) => {
            let mut out = serde_json::to_string_pretty(&stats)?;
            out.push('\n');
            out
        }
        (OutputFormat::Csv, false) => CsvOutput::from_trace(trace).to_csv(),
        (OutputFormat::Csv, true) => csv_output::stats_to_csv(&stats),
        // The HTML report always carries its statistics table
        (OutputFormat::Html, _) => HtmlOutput::new(diagrams).to_html(trace),
    };

    Ok(output)
}

fn main() -> Result<()> {
    let args = Cli::parse();

    // Initialize tracing if --debug flag is set
    init_tracing(args.debug);

    let config = match &args.config {
        Some(path) => {
            let config = Config::from_file(path)?;
            info!(path = %path.display(), presets = config.preset.len(), "loaded config");
            config
        }
        None => Config::default(),
    };

    let mut gallery = PresetGallery::new();
    gallery.extend(config.preset.iter().cloned());
    debug!(examples = gallery.len(), "example gallery ready");

    if args.about {
        print!("{}", report::render_about());
        return Ok(());
    }

    if args.list_examples {
        println!("{}", gallery.listing());
        return Ok(());
    }

    if args.interactive {
        let stdin = io::stdin();
        let mut stdout = io::stdout();
        Session::new(&gallery).run(stdin.lock(), &mut stdout)?;
        return Ok(());
    }

    let (values, target) = resolve_input(&args, &gallery)?;
    debug!(%values, %target, "tracing input");

    let trace = tracer::trace_text(&values, &target)?;
    debug!(
        found = trace.outcome().found,
        steps = trace.outcome().total_steps,
        "search finished"
    );

    let format = args.format.unwrap_or(config.format);
    let diagrams = config.diagrams && !args.no_diagram;
    print!("{}", render(&trace, format, args.summary, diagrams)?);

    Ok(())
}
