#![forbid(unsafe_code)]

//! DialKit demo binary entry point.
//!
//! Builds a conveyor-belt style panel (background/text/foreground groups
//! plus a live monitor) and drives it interactively, or pumps synthetic
//! frames in `--script` mode for terminals without a TTY.

mod app;
mod cli;

use dialkit::{ControlSpec, PanelOptions};
use serde_json::json;

use crate::app::App;

fn conveyor_spec() -> ControlSpec {
    ControlSpec::new("panel", "group")
        .label("")
        .child(
            ControlSpec::new("background", "group")
                .label("background")
                .child(
                    ControlSpec::new("bgDirection", "pad2")
                        .label("direction")
                        .value(json!({"x": 1.0, "y": 0.5})),
                )
                .child(
                    ControlSpec::new("bgColor", "color")
                        .label("color")
                        .value("#000000"),
                )
                .child(
                    ControlSpec::new("bgThickness", "range")
                        .label("thickness")
                        .value(40)
                        .field("min", 10)
                        .field("max", 100)
                        .field("step", 5),
                )
                .child(
                    ControlSpec::new("bgSpeed", "range")
                        .label("speed")
                        .value(1)
                        .field("min", 0)
                        .field("max", 5)
                        .field("step", 0.1),
                ),
        )
        .child(
            ControlSpec::new("text-group", "group")
                .label("text")
                .child(ControlSpec::new("text", "text").value("dialkit"))
                .child(
                    ControlSpec::new("fontSize", "range")
                        .label("size")
                        .value(200)
                        .field("min", 50)
                        .field("max", 400)
                        .field("step", 10),
                ),
        )
        .child(
            ControlSpec::new("foreground", "group")
                .label("foreground")
                .child(
                    ControlSpec::new("fgDirection", "pad2")
                        .label("direction")
                        .value(json!({"x": -0.5, "y": -1.0})),
                )
                .child(
                    ControlSpec::new("fgColor", "color")
                        .label("color")
                        .value("#000000"),
                )
                .child(
                    ControlSpec::new("fgThickness", "range")
                        .label("thickness")
                        .value(30)
                        .field("min", 10)
                        .field("max", 100)
                        .field("step", 5),
                ),
        )
        .child(
            ControlSpec::new("stats", "group")
                .label("stats")
                .child(ControlSpec::new("monitor", "graph").label("monitor"))
                .child(
                    ControlSpec::new("quality", "buttons")
                        .label("quality")
                        .field("options", json!(["low", "med", "high"]))
                        .value("med"),
                )
                .child(ControlSpec::new("reset", "button").field("text", "Reset")),
        )
}

fn main() {
    let opts = cli::Opts::parse();

    let mut options = PanelOptions::default();
    if opts.ascii {
        options.class_names = vec!["dial-ascii".into()];
    }

    let panel = match dialkit::create_with(&conveyor_spec(), options) {
        Ok(panel) => panel,
        Err(e) => {
            eprintln!("Panel construction failed: {e}");
            std::process::exit(1);
        }
    };

    let app = App::new(panel);
    let result = if opts.script_frames > 0 {
        app.run_script(opts.script_frames)
    } else {
        app.run_interactive()
    };

    if let Err(e) = result {
        eprintln!("Terminal error: {e}");
        std::process::exit(1);
    }
}
