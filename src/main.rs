use clap::Parser;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use wipecert::{
    CertificateError, CertificateRenderer, CertificateSettings, RunConfiguration, WipeSessionRecord,
};

/// Generate PDF disk erasure certificates from wipe session records.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Run configuration (method, PRNG, verification, blanking, rounds) as JSON.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Certificate settings (output and branding) as JSON.
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Directory certificates are written to; overrides the settings file.
    #[arg(long)]
    out_dir: Option<PathBuf>,

    /// Wipe tool version printed in the footer; overrides the settings file.
    #[arg(long)]
    wipe_version: Option<String>,

    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Session record JSON files, one certificate each.
    #[arg(required = true)]
    records: Vec<PathBuf>,
}

fn read_record(path: &Path) -> Result<WipeSessionRecord, CertificateError> {
    let source = fs::read_to_string(path).map_err(|source| CertificateError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(serde_json::from_str(&source)?)
}

fn build_renderer(cli: &Cli) -> Result<CertificateRenderer, CertificateError> {
    let config = match &cli.config {
        Some(path) => RunConfiguration::from_json_file(path)?,
        None => RunConfiguration::default(),
    };
    let mut settings = match &cli.settings {
        Some(path) => CertificateSettings::from_json_file(path)?,
        None => CertificateSettings::default(),
    };
    if let Some(dir) = &cli.out_dir {
        settings = settings.with_output_dir(dir);
    }
    if let Some(version) = &cli.wipe_version {
        settings.version = version.clone();
    }
    CertificateRenderer::from_settings(config, settings)
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let renderer = match build_renderer(&cli) {
        Ok(renderer) => renderer,
        Err(e) => {
            log::error!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    let mut failed = false;
    let mut records = Vec::with_capacity(cli.records.len());
    for path in &cli.records {
        match read_record(path) {
            Ok(record) => records.push(record),
            Err(e) => {
                log::error!("Skipping {}: {}", path.display(), e);
                failed = true;
            }
        }
    }

    for result in renderer.render_batch(records) {
        match result {
            Ok(path) => println!("{}", path.display()),
            Err(e) => {
                log::error!("Certificate generation failed: {}", e);
                failed = true;
            }
        }
    }

    if failed { ExitCode::FAILURE } else { ExitCode::SUCCESS }
}
