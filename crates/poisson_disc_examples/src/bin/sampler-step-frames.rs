use poisson_disc::prelude::*;
use poisson_disc_examples::{init_tracing, render_sampler_to_png, RenderConfig};
use rand::rngs::StdRng;
use rand::SeedableRng;

const STEPS_PER_FRAME: usize = 200;
const MAX_FRAMES: usize = 12;

fn main() -> anyhow::Result<()> {
    init_tracing();
    let config = SamplerConfig::new(400.0, 400.0, 10.0).with_attempts(16);
    let mut sampler = Sampler::from_rng(config, StdRng::seed_from_u64(7))?;
    let render = RenderConfig::new((400, 400)).with_background([255, 255, 255]);

    let mut retired = 0usize;
    let mut sink = FnSink::new(|event: SamplerEvent| {
        if let SamplerEvent::PointRetired { .. } = event {
            retired += 1;
        }
    });

    let mut frame = 0;
    while !sampler.is_finished() && frame < MAX_FRAMES {
        sampler.step_with_events(STEPS_PER_FRAME, &mut sink);

        render_sampler_to_png(&sampler, &render, format!("sampler-step-{frame:02}.png"))?;
        println!(
            "frame {frame}: {} points, {} active",
            sampler.points().len(),
            sampler.active_len()
        );
        frame += 1;
    }

    drop(sink);
    println!("{retired} points retired");
    Ok(())
}
