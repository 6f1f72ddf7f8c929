//! Line-driven front end over [`Session`].
//!
//! Commands: `network <text>`, `preset <n>`, `ip <text>`, `calc`, `copy`,
//! `presets`, `help`, `quit`.

use crate::config::Config;
use crate::output::{
    copy_result, render_error, render_feedback, render_presets, render_result, Clipboard,
};
use crate::processing::{CopyFeedback, Session, SessionState};
use std::error::Error;
use std::io::{BufRead, Write};

const HELP: &str = "\
  network <a.b.c.d/cidr>  set the network
  preset <n>              use preset number n as the network
  ip <a.b.c.d>            set the host IP
  calc                    calculate
  copy                    copy the last result
  presets                 list presets
  quit                    exit";

/// One parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Network(String),
    Preset(String),
    Ip(String),
    Calc,
    Copy,
    Presets,
    Help,
    Quit,
    Unknown(String),
}

impl Command {
    pub fn parse(line: &str) -> Option<Command> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }
        let (word, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        let rest = rest.trim().to_string();
        let cmd = match word.to_ascii_lowercase().as_str() {
            "network" | "net" | "n" => Command::Network(rest),
            "preset" | "p" => Command::Preset(rest),
            "ip" | "i" => Command::Ip(rest),
            "calc" | "c" | "calculate" => Command::Calc,
            "copy" => Command::Copy,
            "presets" | "list" => Command::Presets,
            "help" | "?" => Command::Help,
            "quit" | "exit" | "q" => Command::Quit,
            _ => Command::Unknown(line.to_string()),
        };
        Some(cmd)
    }
}

/// Read commands from `input` until `quit` or end of input.
///
/// Must run inside a tokio runtime, the copy indicator uses tokio timers.
pub fn run_interactive<R, W>(
    input: R,
    output: &mut W,
    config: &Config,
    session: &mut Session,
    clipboard: &mut dyn Clipboard,
) -> Result<(), Box<dyn Error>>
where
    R: BufRead,
    W: Write,
{
    let mut feedback = CopyFeedback::new(config.feedback);
    writeln!(output, "Network Calculator, type 'help' for commands")?;
    write_prompt(output, &feedback)?;

    for line in input.lines() {
        let Some(cmd) = Command::parse(&line?) else {
            write_prompt(output, &feedback)?;
            continue;
        };
        log::trace!("command {cmd:?}");

        match cmd {
            Command::Network(text) => session.set_network(&text),
            Command::Ip(text) => session.set_ip(&text),
            Command::Preset(n) => match pick_preset(config, &n) {
                Some(value) => {
                    session.set_network(value);
                    writeln!(output, "network = {value}")?;
                }
                None => writeln!(output, "No preset {n:?}, try 'presets'")?,
            },
            Command::Calc => match session.calculate() {
                SessionState::Success(result) => writeln!(output, "{}", render_result(result))?,
                SessionState::Failed(e) => writeln!(output, "{}", render_error(e))?,
                SessionState::Idle => {}
            },
            Command::Copy => match session.result() {
                Some(result) => {
                    if copy_result(clipboard, result) {
                        feedback.trigger();
                    }
                }
                None => writeln!(output, "Nothing to copy, run 'calc' first")?,
            },
            Command::Presets => writeln!(output, "{}", render_presets(&config.presets))?,
            Command::Help => writeln!(output, "{HELP}")?,
            Command::Quit => break,
            Command::Unknown(text) => writeln!(output, "Unknown command {text:?}, try 'help'")?,
        }
        write_prompt(output, &feedback)?;
    }
    writeln!(output)?;
    Ok(())
}

/// Resolve a 1-based preset number.
pub fn pick_preset<'a>(config: &'a Config, n: &str) -> Option<&'a str> {
    let index: usize = n.trim().parse().ok()?;
    config
        .presets
        .get(index.checked_sub(1)?)
        .map(|p| p.value.as_str())
}

fn write_prompt<W: Write>(output: &mut W, feedback: &CopyFeedback) -> std::io::Result<()> {
    match render_feedback(feedback.state()) {
        Some(marker) => write!(output, "netcalc [{marker}]> ")?,
        None => write!(output, "netcalc> ")?,
    }
    output.flush()
}
