use prism_demos::{scenes, Demo};
use prism_engine::logging::{init_logging, LoggingConfig};
use prism_engine::render::{MeshStyle, Shading};
use prism_scene::controls::ControlConfig;

fn main() -> anyhow::Result<()> {
    init_logging(LoggingConfig::default());

    let (scene, animation) = scenes::orbit();
    Demo::new()
        .title("prism: orbit")
        .controls(ControlConfig { animation: true, ..ControlConfig::default() })
        .style(MeshStyle { shading: Shading::Color, ..MeshStyle::default() })
        .animation(animation)
        .run_scene(scene)
}
