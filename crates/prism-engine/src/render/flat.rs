use bytemuck::{Pod, Zeroable};
use wgpu::util::DeviceExt;

use prism_scene::geometry::FlatVertex;

use super::shader::{sources, ShaderError, ShaderProgram};
use super::{RenderCtx, RenderTarget};

/// Vertex layout (20 bytes):
///
///  offset  0  position  [f32; 2]   loc 0  (clip space)
///  offset  8  color     [f32; 3]   loc 1
#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
struct FlatGpuVertex {
    position: [f32; 2],
    color: [f32; 3],
}

impl FlatGpuVertex {
    const ATTRS: [wgpu::VertexAttribute; 2] = wgpu::vertex_attr_array![
        0 => Float32x2, // position
        1 => Float32x3  // color
    ];

    fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<FlatGpuVertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

impl From<&FlatVertex> for FlatGpuVertex {
    fn from(v: &FlatVertex) -> Self {
        Self { position: v.position, color: v.color }
    }
}

/// Renderer for non-indexed 2D coloured triangles.
///
/// Positions are already in clip space; no uniforms, no depth test. The vertex
/// buffer is rebuilt only when the vertex count changes, otherwise rewritten.
#[derive(Default)]
pub struct FlatRenderer {
    pipeline_format: Option<wgpu::TextureFormat>,
    pipeline: Option<wgpu::RenderPipeline>,

    vbo: Option<wgpu::Buffer>,
    vertex_count: u32,
}

impl FlatRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn render(
        &mut self,
        ctx: &RenderCtx<'_>,
        target: &mut RenderTarget<'_>,
        vertices: &[FlatVertex],
    ) -> Result<(), ShaderError> {
        if vertices.is_empty() {
            return Ok(());
        }

        self.ensure_pipeline(ctx)?;
        self.write_vertices(ctx, vertices);

        let Some(pipeline) = self.pipeline.as_ref() else { return Ok(()) };
        let Some(vbo) = self.vbo.as_ref() else { return Ok(()) };

        let mut rpass = target.begin_pass("prism flat pass");
        rpass.set_pipeline(pipeline);
        rpass.set_vertex_buffer(0, vbo.slice(..));
        rpass.draw(0..self.vertex_count, 0..1);

        Ok(())
    }

    fn ensure_pipeline(&mut self, ctx: &RenderCtx<'_>) -> Result<(), ShaderError> {
        if self.pipeline_format == Some(ctx.surface_format) && self.pipeline.is_some() {
            return Ok(());
        }

        let shader = ShaderProgram::compile(ctx.device, "flat", sources::FLAT)?;

        let pipeline_layout = ctx.device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("prism flat pipeline layout"),
            bind_group_layouts: &[],
            immediate_size: 0,
        });

        // A depth attachment may still be bound by the frame; match its format
        // and leave it untouched.
        let depth_stencil = ctx.depth_format.map(|format| wgpu::DepthStencilState {
            format,
            depth_write_enabled: false,
            depth_compare: wgpu::CompareFunction::Always,
            stencil: wgpu::StencilState::default(),
            bias: wgpu::DepthBiasState::default(),
        });

        let pipeline = ctx.device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("prism flat pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: shader.module(),
                entry_point: Some("vs_main"),
                compilation_options: Default::default(),
                buffers: &[FlatGpuVertex::layout()],
            },
            fragment: Some(wgpu::FragmentState {
                module: shader.module(),
                entry_point: Some("fs_main"),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format: ctx.surface_format,
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },
            depth_stencil,
            multisample: wgpu::MultisampleState::default(),
            multiview_mask: None,
            cache: None,
        });

        self.pipeline_format = Some(ctx.surface_format);
        self.pipeline = Some(pipeline);
        Ok(())
    }

    fn write_vertices(&mut self, ctx: &RenderCtx<'_>, vertices: &[FlatVertex]) {
        let raw: Vec<FlatGpuVertex> = vertices.iter().map(FlatGpuVertex::from).collect();

        match self.vbo.as_ref() {
            Some(vbo) if self.vertex_count as usize == raw.len() => {
                ctx.queue.write_buffer(vbo, 0, bytemuck::cast_slice(&raw));
            }
            _ => {
                self.vbo = Some(ctx.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                    label: Some("prism flat vbo"),
                    contents: bytemuck::cast_slice(&raw),
                    usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
                }));
                self.vertex_count = raw.len() as u32;
            }
        }
    }
}
