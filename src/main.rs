use anyhow::Result;

mod app;
mod logging;

fn main() -> Result<()> {
    let args = bulk_image_mover::cli::parse();
    app::run(args)
}
