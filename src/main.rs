use std::process::ExitCode;

use json_iface::cli;

fn main() -> ExitCode {
    let command_line_interface = cli::CommandLineInterface::load();
    command_line_interface.run()
}
