use color_eyre::eyre;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use solar_system::consts::{WINDOW_HEIGHT, WINDOW_TITLE, WINDOW_WIDTH};
use solar_system::gui::{FrameLoop, RenderContext};
use solar_system::model::system::solar_system;

fn main() -> eyre::Result<()> {
    color_eyre::install()?;
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let scene = solar_system();
    info!(bodies = scene.bodies().len(), "built solar system");

    let mut context = RenderContext::new(WINDOW_TITLE, WINDOW_WIDTH, WINDOW_HEIGHT)?;
    FrameLoop::new(scene).run(&mut context);
    Ok(())
}
