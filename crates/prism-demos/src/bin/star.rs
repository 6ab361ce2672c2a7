use prism_demos::Demo;
use prism_engine::logging::{init_logging, LoggingConfig};
use prism_scene::geometry::star_scene;

fn main() -> anyhow::Result<()> {
    init_logging(LoggingConfig::default());

    let vertices = star_scene();
    log::info!("star: {} vertices", vertices.len());

    Demo::new().title("prism: star").size(600.0, 600.0).run_flat(vertices)
}
