use anyhow::Context;
use clap::Parser;
use wgpu_beam_renderer::{FrameConfig, FramePlan, PostEffectVertex, UniformPool, Uniforms, Vertex};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Surface width in pixels
    #[arg(long, default_value_t = 1280)]
    width: u32,

    /// Surface height in pixels
    #[arg(long = "height-px", default_value_t = 720)]
    height_px: u32,

    /// Vertical field of view in degrees
    #[arg(long, default_value_t = 65.0)]
    fov: f32,

    /// Cylinder radius
    #[arg(long, default_value_t = 1.0)]
    radius: f32,

    /// Cylinder height
    #[arg(long, default_value_t = 1.0)]
    height: f32,

    /// Cylinder segment count
    #[arg(long, default_value_t = 36)]
    segments: u32,

    /// Number of beams to lay out
    #[arg(long, default_value_t = 50)]
    beams: usize,

    /// Per-draw opacity
    #[arg(long, default_value_t = 1.0)]
    opacity: f32,

    /// Opacity of the geometry pass when composited over the frame
    #[arg(long, default_value_t = 1.0)]
    background_alpha: f32,

    /// Device min_uniform_buffer_offset_alignment
    #[arg(long, default_value_t = 256)]
    uniform_alignment: u32,
}

impl From<Args> for FrameConfig {
    fn from(args: Args) -> Self {
        Self {
            width: args.width,
            height: args.height_px,
            fovy_degrees: args.fov,
            cylinder_radius: args.radius,
            cylinder_height: args.height,
            cylinder_segments: args.segments,
            beam_count: args.beams,
            opacity: args.opacity,
            background_alpha: args.background_alpha,
            uniform_alignment: args.uniform_alignment,
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let config = FrameConfig::from(Args::parse());

    let plan = FramePlan::build(&config).context("Failed to build frame")?;

    println!("Vertex stride: {} bytes", Vertex::desc().array_stride);
    println!("PostEffectVertex stride: {} bytes", PostEffectVertex::desc().array_stride);
    println!("Uniforms size: {} bytes", std::mem::size_of::<Uniforms>());
    for part in plan.mesh.parts() {
        let count = part.vertex_count().context("Mesh too large to draw")?;
        println!("{}: {} vertices ({:?})", part.name, count, part.primitive);
    }
    println!(
        "Uniform pool: {} draws x {} bytes = {} bytes, binding size {:?}",
        plan.uniforms.len(),
        plan.uniforms.stride(),
        plan.uniforms.bytes().len(),
        UniformPool::binding_size().map(|size| size.get())
    );
    println!("Post-effect quad: {:?}", plan.quad);
    println!("Background alpha: {}", plan.background.alpha);

    Ok(())
}
