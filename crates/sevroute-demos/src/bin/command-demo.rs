//! `command-demo`: one line printed uniformly through console and file sinks.

use std::process::ExitCode;

use sevroute_demos::Demo;

fn main() -> ExitCode {
    sevroute_demos::run(Demo::Command)
}
