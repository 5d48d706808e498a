//! Results viewer host: configuration, effect runner and HTML output.
pub mod command;
pub mod config;
pub mod controller;
pub mod host;
pub mod html;
pub mod logging;
pub mod persist;

use std::io::{self, BufRead, IsTerminal, Write};

use anyhow::Context;
use results_core::Msg;
use results_engine::EngineHandle;
use results_logging::results_info;

use crate::command::{Command, HELP};
use crate::config::Cli;
use crate::controller::Controller;
use crate::host::FileHost;
use crate::persist::PageWriter;

/// Loads the first page, then follows pagination commands from stdin
/// until quit or end of input.
pub fn run(cli: Cli) -> anyhow::Result<()> {
    cli.validate()?;

    let engine = EngineHandle::new(cli.client_settings()).context("creating HTTP client")?;
    let stdout = io::stdout();
    let interactive = !cli.once && io::stdin().is_terminal();
    let host = FileHost::new(
        PageWriter::new(cli.output.clone()),
        stdout.lock(),
        stdout.is_terminal(),
    );
    let mut controller = Controller::new(cli.view_params(), engine, host);
    results_info!(
        "Rendering results for {:?} into {}",
        controller.state().query(),
        cli.output.display()
    );

    controller.dispatch(Msg::Load);
    controller.settle(None);
    if cli.once {
        return Ok(());
    }

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        if interactive {
            eprint!("{HELP}> ");
            let _ = io::stderr().flush();
        }
        let Some(line) = lines.next() else {
            break;
        };
        let line = line.context("reading command")?;
        match Command::parse(&line) {
            Some(Command::Quit) => break,
            Some(command) => {
                if let Some(msg) = command.to_msg() {
                    controller.dispatch(msg);
                    controller.settle(None);
                }
            }
            None if line.trim().is_empty() => {}
            None => eprintln!("Unknown command {:?}. {HELP}", line.trim()),
        }
    }
    Ok(())
}
