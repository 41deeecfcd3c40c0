use poisson_disc::prelude::*;
use poisson_disc_examples::{init_tracing, render_sampler_to_png, RenderConfig};

fn main() -> anyhow::Result<()> {
    init_tracing();
    let config = SamplerConfig::new(800.0, 600.0, 12.0)
        .with_attempts(30)
        .with_dimensions(2);

    let mut sampler = Sampler::seeded(config, 42)?;
    sampler.run();

    let stats = sampler.stats();
    println!(
        "{} points, {} iterations, {}/{} candidates rejected",
        sampler.points().len(),
        stats.iterations,
        stats.candidates_rejected,
        stats.candidates_evaluated
    );

    render_sampler_to_png(&sampler, &RenderConfig::new((800, 600)), "sampler-run-basic.png")?;
    Ok(())
}
