mod logging;
mod persistence;
mod shell;

fn main() -> anyhow::Result<()> {
    logging::initialize(logging::LogDestination::File);
    shell::run()
}
