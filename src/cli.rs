use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "create-favicon", version)]
#[command(
    about = "Write the embedded 16x16 shop favicon to ./favicon.ico.",
    long_about = "Write the embedded 16x16 shop favicon to ./favicon.ico, replacing any \
                  existing file. Set RUST_LOG=debug to trace the decode and write steps."
)]
pub struct Cli {}
