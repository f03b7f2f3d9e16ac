extern crate std;

use std::convert::Infallible;

use charming::{
    Chart, HtmlRenderer,
    component::{
        Axis, DataZoom, DataZoomType, Feature, Legend, Restore, SaveAsImage, Title, Toolbox,
        ToolboxDataZoom,
    },
    element::{AxisType, Tooltip},
    series::Line,
};
use clap::Parser;
use futures::executor::block_on;
use log::info;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use tactile_lib::{
    ConfettiSettings, HapticEngine, HapticPattern, HapticPlayer, Seconds, generate_confetti,
};

/// Synthesize a confetti haptic pattern, render it to a chart and play it
/// through a console engine
#[derive(Parser, Debug)]
struct Args {
    /// Length of the confetti shower in seconds
    #[arg(long, default_value_t = 1.5)]
    duration: f32,
    /// Seed for the pattern synthesizer
    #[arg(long, default_value_t = 0x5eed)]
    seed: u64,
    /// Where to write the rendered chart
    #[arg(long, default_value = "confetti.html")]
    out: String,
}

/// Engine which "actuates" by logging every scheduled event
#[derive(Debug, Default)]
struct ConsoleEngine {
    scheduled: usize,
}

impl HapticEngine for ConsoleEngine {
    type Error = Infallible;

    fn supports_haptics(&self) -> bool {
        true
    }

    async fn start(&mut self) -> Result<(), Infallible> {
        info!("console engine started");
        Ok(())
    }

    fn play(&mut self, pattern: &HapticPattern, at: Seconds) -> Result<(), Infallible> {
        for event in pattern.events() {
            info!(
                "tap at {:6.3}s  intensity {:.2}  sharpness {:.2}",
                at + event.time,
                event.intensity,
                event.sharpness
            );
        }
        self.scheduled += pattern.len();
        Ok(())
    }

    fn stop_when_finished(&mut self) {
        info!("console engine stops after {} scheduled taps", self.scheduled);
    }
}

fn create_graph(pattern: &HapticPattern) -> Chart {
    let x_data: Vec<String> = pattern
        .events()
        .iter()
        .map(|event| format!("{:.3}", event.time))
        .collect();
    let intensity: Vec<f32> = pattern.events().iter().map(|event| event.intensity).collect();
    let sharpness: Vec<f32> = pattern.events().iter().map(|event| event.sharpness).collect();

    Chart::new()
        .tooltip(Tooltip::new())
        .title(Title::new().text("Confetti shower"))
        .legend(Legend::new())
        .toolbox(
            Toolbox::new().feature(
                Feature::new()
                    .data_zoom(ToolboxDataZoom::new().y_axis_index("none"))
                    .restore(Restore::new())
                    .save_as_image(SaveAsImage::new()),
            ),
        )
        .x_axis(
            Axis::new()
                .name("Time (s)")
                .type_(AxisType::Category)
                .data(x_data),
        )
        .y_axis(Axis::new().name("Level").type_(AxisType::Value))
        .data_zoom(DataZoom::new().type_(DataZoomType::Inside))
        .data_zoom(DataZoom::new())
        .series(Line::new().name("Intensity").data(intensity))
        .series(Line::new().name("Sharpness").data(sharpness))
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let pattern = generate_confetti(
        args.duration,
        &ConfettiSettings::default(),
        &mut SmallRng::seed_from_u64(args.seed),
    );
    info!(
        "synthesized {} events over {}s from seed {}",
        pattern.len(),
        args.duration,
        args.seed
    );

    let chart = create_graph(&pattern);
    let mut renderer = HtmlRenderer::new("Confetti shower", 1000, 800);
    renderer.save(&chart, &args.out).unwrap();

    // the player draws from an identically seeded source, so the engine
    // receives exactly the charted pattern
    let mut player = HapticPlayer::new(
        ConsoleEngine::default(),
        SmallRng::seed_from_u64(args.seed),
    );
    block_on(player.confetti(args.duration)).unwrap();
}
