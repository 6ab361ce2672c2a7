use prism_demos::{scenes, Demo};
use prism_engine::logging::{init_logging, LoggingConfig};
use prism_engine::render::{MeshStyle, Shading};
use prism_scene::controls::ControlConfig;
use prism_scene::Color;

fn main() -> anyhow::Result<()> {
    init_logging(LoggingConfig::default());

    Demo::new()
        .title("prism: lighting")
        .controls(ControlConfig { lights: true, ..ControlConfig::default() })
        .style(MeshStyle {
            shading: Shading::Phong,
            wire_color: Some(Color::BLACK),
            ..MeshStyle::default()
        })
        .run_scene(scenes::lighting())
}
