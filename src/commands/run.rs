//! Command-line entry point

use super::common::{LogLevel, init_logging};
use super::export::export_from_file;
use super::host::Host;
use crate::Result;
use crate::config::DEFAULT_CONFIG_FILE;
use camino::Utf8PathBuf;
use clap::Parser;
use clap::builder::Styles;
use clap::builder::styling::{AnsiColor, Effects};
use ohno::IntoAppError;
use std::io::Write;

/// Directory that receives the reports unless told otherwise
pub const DEFAULT_OUTPUT_DIR: &str = "output";

const CLAP_STYLES: Styles = Styles::styled()
    .header(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .literal(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
    .placeholder(AnsiColor::Cyan.on_default());

#[derive(Parser, Debug)]
#[command(name = "green-metrics", version, long_about = None, display_name = "green-metrics")]
#[command(about = "Export CAST Highlight Green Impact metrics to a tech-debt spreadsheet")]
#[command(styles = CLAP_STYLES)]
struct Args {
    /// Path to the configuration file (json, toml or yaml)
    #[arg(long, short = 'c', value_name = "PATH", default_value = DEFAULT_CONFIG_FILE)]
    config: Utf8PathBuf,

    /// Directory where the spreadsheet is written
    #[arg(long, short = 'o', value_name = "PATH", default_value = DEFAULT_OUTPUT_DIR)]
    output_dir: Utf8PathBuf,

    /// Set the logging level for diagnostic output
    #[arg(long, value_name = "LEVEL", default_value = "warn")]
    log_level: LogLevel,
}

/// Parse command-line arguments and run one export.
///
/// On failure the error is reported through `host` and the host is asked to exit with
/// status 1 before the error is returned.
pub async fn run<I, T, H>(host: &mut H, args: I) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
    H: Host,
{
    let args = Args::parse_from(args);
    init_logging(args.log_level);

    match export_from_file(args.config.as_std_path(), args.output_dir.as_std_path()).await {
        Ok(path) => {
            let _ = writeln!(host.output(), "✅ Saved green metrics to {}", path.display());
            let _ = writeln!(host.output(), "💡 Enter cost rates in column E to calculate tech debt");
            Ok(())
        }
        Err(e) => {
            let _ = writeln!(host.error(), "❌ {e}");
            host.exit(1);
            Err(e).into_app_err("green metrics export failed")
        }
    }
}
