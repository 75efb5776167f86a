use crate::config;
use clap::{
    Arg, ColorChoice, Command,
    builder::styling::{AnsiColor, Effects, Styles},
};

/// Pure clap command definitions with zero business logic
#[must_use]
pub fn new() -> Command {
    let styles = Styles::styled()
        .header(AnsiColor::Yellow.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Blue.on_default() | Effects::BOLD)
        .placeholder(AnsiColor::Green.on_default());

    Command::new(env!("CARGO_PKG_NAME"))
        .about(env!("CARGO_PKG_DESCRIPTION"))
        .version(env!("CARGO_PKG_VERSION"))
        .color(ColorChoice::Auto)
        .styles(styles)
        .arg(
            Arg::new("config")
                .default_value(config::DEFAULT_CONFIG_FILE)
                .env("DBPROBE_CONFIG")
                .global(true)
                .help("Path to the key=value connection settings file")
                .long("config")
                .short('c')
                .value_name("FILE"),
        )
        .subcommand(
            Command::new("check").about("Verify the database accepts connections (default)"),
        )
        .subcommand(
            Command::new("inspect")
                .about("List tables and row counts for the configured database"),
        )
        .subcommand(
            Command::new("serve")
                .about("Expose the connectivity checks over HTTP")
                .arg(
                    Arg::new("listen")
                        .env("DBPROBE_LISTEN")
                        .help("IP address to bind to (default: [::]:port, accepts both IPv6 and IPv4)")
                        .long("listen")
                        .long_help(
                            "IP address to bind to:\n\
                            Not specified (default) binds to [::]:port which accepts both IPv6 and IPv4 connections.\n\
                            Falls back to 0.0.0.0:port if IPv6 is unavailable.\n\n\
                            Specific IPv4 examples: '0.0.0.0', '127.0.0.1'\n\
                            Specific IPv6: '::', '::1'\n\n\
                            Usage examples:\n\
                            - `--listen 0.0.0.0` binds IPv4 only\n\
                            - `--listen ::` binds IPv6 (typically accepts IPv4 too)\n\n\
                            Note: binding to [::] usually accepts both IPv6 and IPv4 through \
                            IPv4-mapped addresses on dual-stack systems."
                        )
                        .short('l')
                        .value_name("IP"),
                )
                .arg(
                    Arg::new("port")
                        .default_value("8080")
                        .env("DBPROBE_PORT")
                        .help("listening port for the HTTP endpoints")
                        .long("port")
                        .short('p')
                        .value_parser(clap::value_parser!(u16)),
                ),
        )
}
