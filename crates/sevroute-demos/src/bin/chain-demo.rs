//! `chain-demo`: Chain of Responsibility over severity-tagged messages.

use std::process::ExitCode;

use sevroute_demos::Demo;

fn main() -> ExitCode {
    sevroute_demos::run(Demo::Chain)
}
