use wgpu::util::DeviceExt;

use prism_scene::scene::Model;
use prism_scene::{Color, Scene};

use super::shader::{sources, ShaderError, ShaderProgram};
use super::uniforms::{FrameUniform, ModelUniform};
use super::{RenderCtx, RenderTarget};

/// Which shading program fills are drawn with.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum Shading {
    /// Ambient plus per-light diffuse/specular using each model's material.
    #[default]
    Phong,
    /// Model colour with a headlight term.
    Color,
}

impl Shading {
    fn source(self) -> (&'static str, &'static str) {
        match self {
            Shading::Phong => ("phong", sources::PHONG),
            Shading::Color => ("color", sources::COLOR),
        }
    }
}

/// Appearance settings for [`MeshRenderer`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct MeshStyle {
    pub shading: Shading,
    /// Fixed wireframe colour; `None` draws lines in each model's colour.
    pub wire_color: Option<Color>,
    pub clear: Color,
}

impl Default for MeshStyle {
    fn default() -> Self {
        Self {
            shading: Shading::Phong,
            wire_color: None,
            clear: Color::rgb(0.95, 0.95, 0.95),
        }
    }
}

/// GPU buffers owned by one model: one per attribute/index kind plus its uniform.
///
/// Created once per model and dropped with the renderer. No pooling.
pub struct GpuModel {
    vertex_count: u32,
    positions: wgpu::Buffer,
    normals: wgpu::Buffer,
    lines: Option<(wgpu::Buffer, u32)>,
    triangles: Option<(wgpu::Buffer, u32)>,
    uniform: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
}

impl GpuModel {
    /// Uploads the mesh of `model`. Returns `None` for a mesh without vertices.
    pub fn upload(
        device: &wgpu::Device,
        layout: &wgpu::BindGroupLayout,
        model: &Model,
    ) -> Option<Self> {
        let mesh = &model.mesh;
        if mesh.positions.is_empty() {
            return None;
        }

        let positions = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("prism mesh positions"),
            contents: bytemuck::cast_slice(&mesh.positions),
            usage: wgpu::BufferUsages::VERTEX,
        });

        // Meshes without normals still bind slot 1; zeros keep the stride valid.
        let zero_normals;
        let normals_src = if mesh.normals.len() == mesh.positions.len() {
            &mesh.normals
        } else {
            zero_normals = vec![glam::Vec3::ZERO; mesh.positions.len()];
            &zero_normals
        };
        let normals = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("prism mesh normals"),
            contents: bytemuck::cast_slice(normals_src),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let lines = index_buffer(device, "prism mesh line indices", &mesh.indices_lines);
        let triangles = index_buffer(device, "prism mesh triangle indices", &mesh.indices_tris);

        let uniform = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("prism model ubo"),
            size: std::mem::size_of::<ModelUniform>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("prism model bind group"),
            layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform.as_entire_binding(),
            }],
        });

        log::debug!(
            "uploaded mesh: {} vertices, {} lines, {} triangles",
            mesh.vertex_count(),
            mesh.line_count(),
            mesh.triangle_count()
        );

        Some(Self {
            vertex_count: mesh.positions.len() as u32,
            positions,
            normals,
            lines,
            triangles,
            uniform,
            bind_group,
        })
    }

    pub fn vertex_count(&self) -> u32 {
        self.vertex_count
    }
}

fn index_buffer(device: &wgpu::Device, label: &str, indices: &[u16]) -> Option<(wgpu::Buffer, u32)> {
    if indices.is_empty() {
        return None;
    }
    let buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some(label),
        contents: bytemuck::cast_slice(indices),
        usage: wgpu::BufferUsages::INDEX,
    });
    Some((buffer, indices.len() as u32))
}

/// Renderer for [`Scene`] models.
///
/// Draws each model according to its `DrawMode`: filled triangles with back-face
/// culling and a slope depth bias, then line wireframes on top.
///
/// Meshes are uploaded the first time a model index is seen; later frames only
/// rewrite uniforms. Callers run `Scene::update` before [`MeshRenderer::render`].
#[derive(Default)]
pub struct MeshRenderer {
    style: MeshStyle,

    pipeline_formats: Option<(wgpu::TextureFormat, Option<wgpu::TextureFormat>)>,
    fill_pipeline: Option<wgpu::RenderPipeline>,
    line_pipeline: Option<wgpu::RenderPipeline>,

    model_layout: Option<wgpu::BindGroupLayout>,
    frame_ubo: Option<wgpu::Buffer>,
    frame_bind_group: Option<wgpu::BindGroup>,

    models: Vec<Option<GpuModel>>,
}

impl MeshRenderer {
    pub fn new(style: MeshStyle) -> Self {
        Self { style, ..Self::default() }
    }

    #[inline]
    pub fn style(&self) -> &MeshStyle {
        &self.style
    }

    /// Number of models with uploaded GPU buffers.
    pub fn uploaded(&self) -> usize {
        self.models.iter().flatten().count()
    }

    pub fn render(
        &mut self,
        ctx: &RenderCtx<'_>,
        target: &mut RenderTarget<'_>,
        scene: &Scene,
    ) -> Result<(), ShaderError> {
        self.ensure_pipelines(ctx)?;
        self.sync_models(ctx, scene);
        self.write_uniforms(ctx, scene);

        let Some(fill_pipeline) = self.fill_pipeline.as_ref() else { return Ok(()) };
        let Some(line_pipeline) = self.line_pipeline.as_ref() else { return Ok(()) };
        let Some(frame_bind_group) = self.frame_bind_group.as_ref() else { return Ok(()) };

        let mut rpass = target.begin_pass("prism mesh pass");
        rpass.set_bind_group(0, frame_bind_group, &[]);

        for (model, gpu) in scene.models.iter().zip(&self.models) {
            let Some(gpu) = gpu else { continue };

            rpass.set_bind_group(1, &gpu.bind_group, &[]);
            rpass.set_vertex_buffer(0, gpu.positions.slice(..));
            rpass.set_vertex_buffer(1, gpu.normals.slice(..));

            if model.draw_mode.fills() {
                if let Some((ibo, count)) = gpu.triangles.as_ref() {
                    rpass.set_pipeline(fill_pipeline);
                    rpass.set_index_buffer(ibo.slice(..), wgpu::IndexFormat::Uint16);
                    rpass.draw_indexed(0..*count, 0, 0..1);
                }
            }

            if model.draw_mode.draws_lines() {
                if let Some((ibo, count)) = gpu.lines.as_ref() {
                    rpass.set_pipeline(line_pipeline);
                    rpass.set_index_buffer(ibo.slice(..), wgpu::IndexFormat::Uint16);
                    rpass.draw_indexed(0..*count, 0, 0..1);
                }
            }
        }

        Ok(())
    }

    // ── private helpers ────────────────────────────────────────────────────

    fn ensure_pipelines(&mut self, ctx: &RenderCtx<'_>) -> Result<(), ShaderError> {
        let formats = (ctx.surface_format, ctx.depth_format);
        if self.pipeline_formats == Some(formats) && self.fill_pipeline.is_some() {
            return Ok(());
        }

        let (label, source) = self.style.shading.source();
        let shader = ShaderProgram::compile(ctx.device, label, source)?;

        let frame_layout = uniform_layout::<FrameUniform>(ctx.device, "prism frame bgl");
        let model_layout = uniform_layout::<ModelUniform>(ctx.device, "prism model bgl");

        let pipeline_layout = ctx.device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("prism mesh pipeline layout"),
            bind_group_layouts: &[&frame_layout, &model_layout],
            immediate_size: 0,
        });

        let fill = MeshPipeline {
            label: "prism mesh fill pipeline",
            fragment_entry: "fs_main",
            topology: wgpu::PrimitiveTopology::TriangleList,
            cull_mode: Some(wgpu::Face::Back),
            // Pushes fills back so coincident wireframe lines stay visible.
            slope_bias: 0.5,
        };
        let lines = MeshPipeline {
            label: "prism mesh line pipeline",
            fragment_entry: "fs_line",
            topology: wgpu::PrimitiveTopology::LineList,
            cull_mode: None,
            slope_bias: 0.0,
        };

        self.fill_pipeline = Some(fill.build(ctx, &shader, &pipeline_layout));
        self.line_pipeline = Some(lines.build(ctx, &shader, &pipeline_layout));

        let frame_ubo = ctx.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("prism frame ubo"),
            size: std::mem::size_of::<FrameUniform>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        self.frame_bind_group = Some(ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("prism frame bind group"),
            layout: &frame_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: frame_ubo.as_entire_binding(),
            }],
        }));
        self.frame_ubo = Some(frame_ubo);

        // Model bind groups reference the old layout; re-upload against the new one.
        self.models.clear();
        self.model_layout = Some(model_layout);
        self.pipeline_formats = Some(formats);

        log::debug!("mesh pipelines ready ({label}, {formats:?})");
        Ok(())
    }

    fn sync_models(&mut self, ctx: &RenderCtx<'_>, scene: &Scene) {
        let Some(layout) = self.model_layout.as_ref() else { return };

        while self.models.len() < scene.models.len() {
            let model = &scene.models[self.models.len()];
            self.models.push(GpuModel::upload(ctx.device, layout, model));
        }
        self.models.truncate(scene.models.len());
    }

    fn write_uniforms(&self, ctx: &RenderCtx<'_>, scene: &Scene) {
        let Some(frame_ubo) = self.frame_ubo.as_ref() else { return };

        let camera = &scene.camera;
        let frame = FrameUniform::new(camera.projection_matrix, camera.view, &scene.illumination);
        ctx.queue.write_buffer(frame_ubo, 0, bytemuck::bytes_of(&frame));

        let wire = self.style.wire_color.map(Color::to_array);
        for (model, gpu) in scene.models.iter().zip(&self.models) {
            let Some(gpu) = gpu else { continue };
            let uniform = ModelUniform::new(model, wire);
            ctx.queue.write_buffer(&gpu.uniform, 0, bytemuck::bytes_of(&uniform));
        }
    }
}

/// Fixed-function state that differs between the fill and line pipelines.
struct MeshPipeline {
    label: &'static str,
    fragment_entry: &'static str,
    topology: wgpu::PrimitiveTopology,
    cull_mode: Option<wgpu::Face>,
    slope_bias: f32,
}

impl MeshPipeline {
    const POSITION_ATTRS: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x3];
    const NORMAL_ATTRS: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![1 => Float32x3];

    fn build(
        &self,
        ctx: &RenderCtx<'_>,
        shader: &ShaderProgram,
        layout: &wgpu::PipelineLayout,
    ) -> wgpu::RenderPipeline {
        let vec3_stride = std::mem::size_of::<[f32; 3]>() as u64;
        let buffers = [
            wgpu::VertexBufferLayout {
                array_stride: vec3_stride,
                step_mode: wgpu::VertexStepMode::Vertex,
                attributes: &Self::POSITION_ATTRS,
            },
            wgpu::VertexBufferLayout {
                array_stride: vec3_stride,
                step_mode: wgpu::VertexStepMode::Vertex,
                attributes: &Self::NORMAL_ATTRS,
            },
        ];

        let depth_stencil = ctx.depth_format.map(|format| wgpu::DepthStencilState {
            format,
            depth_write_enabled: true,
            depth_compare: wgpu::CompareFunction::Less,
            stencil: wgpu::StencilState::default(),
            bias: wgpu::DepthBiasState {
                constant: 0,
                slope_scale: self.slope_bias,
                clamp: 0.0,
            },
        });

        ctx.device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some(self.label),
            layout: Some(layout),
            vertex: wgpu::VertexState {
                module: shader.module(),
                entry_point: Some("vs_main"),
                compilation_options: Default::default(),
                buffers: &buffers,
            },
            fragment: Some(wgpu::FragmentState {
                module: shader.module(),
                entry_point: Some(self.fragment_entry),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format: ctx.surface_format,
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),
            primitive: wgpu::PrimitiveState {
                topology: self.topology,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: self.cull_mode,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },
            depth_stencil,
            multisample: wgpu::MultisampleState::default(),
            multiview_mask: None,
            cache: None,
        })
    }
}

fn uniform_layout<T>(device: &wgpu::Device, label: &str) -> wgpu::BindGroupLayout {
    device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some(label),
        entries: &[wgpu::BindGroupLayoutEntry {
            binding: 0,
            visibility: wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
            ty: wgpu::BindingType::Buffer {
                ty: wgpu::BufferBindingType::Uniform,
                has_dynamic_offset: false,
                min_binding_size: wgpu::BufferSize::new(std::mem::size_of::<T>() as u64),
            },
            count: None,
        }],
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_style_is_phong_on_light_grey() {
        let style = MeshStyle::default();
        assert_eq!(style.shading, Shading::Phong);
        assert_eq!(style.wire_color, None);
        assert_eq!(style.clear.to_array(), [0.95, 0.95, 0.95, 1.0]);
    }

    #[test]
    fn shading_selects_matching_source() {
        assert_eq!(Shading::Phong.source().0, "phong");
        assert_eq!(Shading::Color.source().1, sources::COLOR);
    }

    #[test]
    fn renderer_starts_without_gpu_state() {
        let renderer = MeshRenderer::new(MeshStyle { shading: Shading::Color, ..MeshStyle::default() });
        assert_eq!(renderer.uploaded(), 0);
        assert_eq!(renderer.style().shading, Shading::Color);
    }
}
