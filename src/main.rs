use anyhow::Result;

mod app;

fn main() -> Result<()> {
    let args = collectf::cli::parse();
    app::run(args)
}
