mod command;
mod highscore;
mod tui;
mod ui;

fn main() -> anyhow::Result<()> {
    command::run()
}
