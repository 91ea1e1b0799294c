//! GPU star field pass: a fullscreen triangle whose fragment stage evaluates the
//! star field per pixel, driven by a single uniform buffer.

use bytemuck::{Pod, Zeroable};
use slsh_starfield::{FrameInputs, StarfieldParams};

/// Uniform buffer for the star field pass. Layout matches `StarfieldUniform`
/// in `starfield.wgsl`.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct StarfieldUniform {
    /// Output size in pixels.
    pub resolution: [f32; 2],
    /// (yaw, pitch) in radians.
    pub view_angles: [f32; 2],
    pub density: f32,
    pub layer_offset: f32,
    pub center_spread: f32,
    pub radius_threshold: f32,
    pub fov_scale: f32,
    pub forward: f32,
    pub layer_count: u32,
    pub _pad: u32,
}

impl StarfieldUniform {
    pub fn new(frame: &FrameInputs, params: &StarfieldParams) -> Self {
        Self {
            resolution: frame.resolution.to_array(),
            view_angles: [frame.view_angles.yaw, frame.view_angles.pitch],
            density: params.density,
            layer_offset: params.layer_offset,
            center_spread: params.center_spread,
            radius_threshold: params.radius_threshold,
            fov_scale: params.fov_scale,
            forward: params.forward,
            layer_count: params.layer_count,
            _pad: 0,
        }
    }
}

/// WGSL shader source for the star field pass.
pub const STARFIELD_SHADER_SOURCE: &str = include_str!("starfield.wgsl");

/// GPU renderer drawing the procedural star field over the whole target.
pub struct GpuStarfieldRenderer {
    pipeline: wgpu::RenderPipeline,
    uniform_buffer: wgpu::Buffer,
    uniform_bind_group: wgpu::BindGroup,
}

impl GpuStarfieldRenderer {
    /// Create the pipeline for targets of `surface_format`.
    pub fn new(device: &wgpu::Device, surface_format: wgpu::TextureFormat) -> Self {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("starfield-shader"),
            source: wgpu::ShaderSource::Wgsl(STARFIELD_SHADER_SOURCE.into()),
        });

        let uniform_bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("starfield-uniform-bgl"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: std::num::NonZeroU64::new(
                        std::mem::size_of::<StarfieldUniform>() as u64,
                    ),
                },
                count: None,
            }],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("starfield-pipeline-layout"),
            bind_group_layouts: &[&uniform_bgl],
            immediate_size: 0,
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("starfield-pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_starfield"),
                buffers: &[],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                ..Default::default()
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_starfield"),
                targets: &[Some(wgpu::ColorTargetState {
                    format: surface_format,
                    blend: None,
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            multiview_mask: None,
            cache: None,
        });

        use wgpu::util::DeviceExt;
        let uniform = StarfieldUniform::new(
            &FrameInputs::new(1.0, 1.0, Default::default()),
            &StarfieldParams::default(),
        );
        let uniform_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("starfield-uniform"),
            contents: bytemuck::cast_slice(&[uniform]),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let uniform_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("starfield-uniform-bg"),
            layout: &uniform_bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });

        log::info!("Star field GPU renderer initialized for {surface_format:?}");

        Self {
            pipeline,
            uniform_buffer,
            uniform_bind_group,
        }
    }

    /// Upload this frame's resolution, view angles and parameters.
    pub fn update(&self, queue: &wgpu::Queue, frame: &FrameInputs, params: &StarfieldParams) {
        let uniform = StarfieldUniform::new(frame, params);
        queue.write_buffer(&self.uniform_buffer, 0, bytemuck::cast_slice(&[uniform]));
    }

    /// Draw the star field. Covers the whole render target.
    pub fn render<'a>(&'a self, pass: &mut wgpu::RenderPass<'a>) {
        pass.set_pipeline(&self.pipeline);
        pass.set_bind_group(0, &self.uniform_bind_group, &[]);
        pass.draw(0..3, 0..1);
    }
}
