#![forbid(unsafe_code)]

//! Command-line argument parsing for the demo.
//!
//! Parses args manually (no external dependencies) to keep the binary lean.

use std::env;
use std::process;

const VERSION: &str = env!("CARGO_PKG_VERSION");

const HELP_TEXT: &str = "\
DialKit Demo — declarative control panel in the terminal

USAGE:
    dialkit-demo-showcase [OPTIONS]

OPTIONS:
    --script=N       Run N synthetic frames without a TTY and print the
                     final panel (for CI and dumb terminals)
    --ascii          ASCII indentation guides instead of Unicode
    --help, -h       Show this help message
    --version, -V    Show version

KEYBINDINGS:
    Up / Down        Move the cursor
    Left / Right     Adjust the focused control (step, cycle, flip, pad x)
    Enter            Collapse/expand a group, press a button
    q / Ctrl+C       Quit";

/// Parsed command-line options.
#[derive(Default)]
pub struct Opts {
    /// Scripted frame count; 0 means interactive.
    pub script_frames: u64,
    /// ASCII guide rendering.
    pub ascii: bool,
}

impl Opts {
    /// Parse command-line arguments.
    pub fn parse() -> Self {
        let mut opts = Self::default();

        let args: Vec<String> = env::args().skip(1).collect();
        for arg in &args {
            match arg.as_str() {
                "--help" | "-h" => {
                    println!("{HELP_TEXT}");
                    process::exit(0);
                }
                "--version" | "-V" => {
                    println!("dialkit-demo-showcase {VERSION}");
                    process::exit(0);
                }
                "--ascii" => {
                    opts.ascii = true;
                }
                other => {
                    if let Some(val) = other.strip_prefix("--script=") {
                        match val.parse() {
                            Ok(n) => opts.script_frames = n,
                            Err(_) => {
                                eprintln!("Invalid --script value: {val}");
                                process::exit(1);
                            }
                        }
                    } else {
                        eprintln!("Unknown option: {other}");
                        process::exit(1);
                    }
                }
            }
        }
        opts
    }
}
