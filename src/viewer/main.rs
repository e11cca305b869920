use crate::{
    cga::image::CgaImage,
    viewer::{cli::Cli, export, geometry::Geometry},
};
use anyhow::{Context, Result};

pub fn run(args: Cli) -> Result<()> {
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    let image = CgaImage::load(&args.file, &args.limits())
        .with_context(|| format!("failed to load {}", args.file.display()))?;
    log::info!("loaded {}: {}x{}", args.file.display(), image.width(), image.height());

    let geometry = Geometry::fit(args.width, args.height, &image)?;

    if let Some(path) = &args.export {
        return export::render_bitmap(path, &image, &geometry, args.width, args.height);
    }
    show(&args, &image, &geometry)
}

#[cfg(feature = "gui")]
fn show(args: &Cli, image: &CgaImage, geometry: &Geometry) -> Result<()> {
    use crate::viewer::ui;

    let mut viewer = ui::Viewer::new(ui::WINDOW_TITLE, args.width, args.height)?;
    viewer.present(image, geometry)?;
    viewer.wait_for_quit();
    Ok(())
}

#[cfg(not(feature = "gui"))]
fn show(_args: &Cli, _image: &CgaImage, _geometry: &Geometry) -> Result<()> {
    Err(anyhow::anyhow!("built without the gui feature, use --export"))
}
