mod command;
mod input;
mod model;
mod screens;
mod tui;
mod ui;

fn main() -> anyhow::Result<()> {
    command::run()
}
