//! Command line arguments and the one-shot calculation path.

use crate::config::Config;
use crate::interactive::{pick_preset, run_interactive};
use crate::output::{
    copy_result, render_error, render_presets, render_result, Clipboard, FileClipboard,
    StdoutClipboard,
};
use crate::processing::Session;
use clap::Parser;
use std::error::Error;
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

/// Network calculator: network address, gateway and subnet mask for a host IP
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Network in CIDR notation, e.g. 192.168.100.0/24
    #[arg(short, long, conflicts_with = "preset")]
    pub network: Option<String>,

    /// Use preset number N (see --list-presets) as the network
    #[arg(short, long, value_name = "N")]
    pub preset: Option<String>,

    /// Host IP address, e.g. 192.168.100.10
    #[arg(short, long)]
    pub ip: Option<String>,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,

    /// Copy the result block to stdout (not with --json, use --copy-file)
    #[arg(long, conflicts_with = "json")]
    pub copy: bool,

    /// Copy the result block into this file instead of stdout
    #[arg(long, value_name = "PATH")]
    pub copy_file: Option<PathBuf>,

    /// List the configured presets and exit
    #[arg(long)]
    pub list_presets: bool,
}

/// Run the binary for parsed `args`.
///
/// Must be called inside a tokio runtime with worker threads: the interactive
/// loop blocks this thread on stdin while the copy indicator timers run.
pub fn run(args: &Args, config: &Config) -> Result<ExitCode, Box<dyn Error>> {
    if args.list_presets {
        println!("{}", render_presets(&config.presets));
        return Ok(ExitCode::SUCCESS);
    }

    let network = match &args.preset {
        Some(n) => Some(
            pick_preset(config, n)
                .ok_or_else(|| format!("No preset {n:?}, see --list-presets"))?
                .to_string(),
        ),
        None => args.network.clone(),
    };

    let mut clipboard: Box<dyn Clipboard> = match &args.copy_file {
        Some(path) => Box::new(FileClipboard::new(path)),
        None => Box::new(StdoutClipboard),
    };

    let (Some(network), Some(ip)) = (network.as_deref(), args.ip.as_deref()) else {
        let mut session = Session::new();
        if let Some(network) = network.as_deref() {
            session.set_network(network);
        }
        if let Some(ip) = args.ip.as_deref() {
            session.set_ip(ip);
        }
        let stdin = std::io::stdin().lock();
        let mut stdout = std::io::stdout();
        run_interactive(stdin, &mut stdout, config, &mut session, clipboard.as_mut())?;
        return Ok(ExitCode::SUCCESS);
    };

    let copy_to: Option<&mut dyn Clipboard> = if args.copy || args.copy_file.is_some() {
        Some(clipboard.as_mut())
    } else {
        None
    };
    let ok = run_once(
        network,
        ip,
        args.json,
        &mut std::io::stdout(),
        &mut std::io::stderr(),
        copy_to,
    )?;
    Ok(if ok {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

/// Calculate once and print the outcome. Returns false for a rejected input.
///
/// With `json` the result or error object is the only thing written to
/// `out`; otherwise errors go to `err`.
pub fn run_once<W, E>(
    network: &str,
    ip: &str,
    json: bool,
    out: &mut W,
    err: &mut E,
    clipboard: Option<&mut dyn Clipboard>,
) -> Result<bool, Box<dyn Error>>
where
    W: Write,
    E: Write,
{
    match crate::calculate(network, ip) {
        Ok(result) => {
            if json {
                writeln!(out, "{}", serde_json::to_string_pretty(&result)?)?;
            } else {
                writeln!(out, "{}", render_result(&result))?;
            }
            out.flush()?;
            if let Some(clipboard) = clipboard {
                copy_result(clipboard, &result);
            }
            Ok(true)
        }
        Err(e) => {
            if json {
                let body = serde_json::json!({
                    "error": e.to_string(),
                    "kind": format!("{:?}", e.kind()),
                });
                writeln!(out, "{}", serde_json::to_string_pretty(&body)?)?;
            } else {
                writeln!(err, "{}", render_error(&e))?;
            }
            Ok(false)
        }
    }
}
