//! `observer-demo`: severity events published to registered subscribers.

use std::process::ExitCode;

use sevroute_demos::Demo;

fn main() -> ExitCode {
    sevroute_demos::run(Demo::Observer)
}
