//! Boxball entry point
//!
//! Native host: owns pacing and input batching, and runs a scripted headless
//! demo (free fall, grab, throw). A windowed front-end would feed real
//! pointer events into the same loop and swap [`HeadlessBackend`] for a
//! canvas-backed one; the simulation side is identical either way.

use glam::Vec2;

use boxball::consts::*;
use boxball::renderer::{HeadlessBackend, RenderBackend, RenderError, encode_frame};
use boxball::sim::{Frame, PointerEvent, SimState, TickInput, tick};

/// Host state: the simulation plus the input batch collected for the next tick
struct App {
    state: SimState,
    input: TickInput,
    accumulator: f32,
    last_frame: Option<Frame>,
}

impl App {
    fn new() -> Self {
        Self {
            state: SimState::new(),
            input: TickInput::default(),
            accumulator: 0.0,
            last_frame: None,
        }
    }

    /// Drain whole sim steps from the elapsed time. The pending event batch
    /// goes to the first step and is cleared so nothing fires twice.
    fn update(&mut self, dt: f32) {
        let dt = dt.min(0.1);
        self.accumulator += dt;

        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            let input = std::mem::take(&mut self.input);
            self.last_frame = Some(tick(&mut self.state, &input, SIM_DT));
            self.accumulator -= SIM_DT;
            substeps += 1;
        }
    }

    fn render(&mut self, backend: &mut impl RenderBackend) {
        let Some(ref frame) = self.last_frame else {
            return;
        };
        let cmds = encode_frame(frame);
        match backend.submit(&cmds).and_then(|_| backend.present()) {
            Ok(()) => {}
            Err(RenderError::SurfaceLost) => {
                log::warn!("surface lost, dropping frame");
            }
            Err(RenderError::OutOfMemory) => {
                log::error!("render backend out of memory, giving up on frame");
            }
        }
    }

    fn queue(&mut self, event: PointerEvent) {
        self.input.events.push(event);
    }
}

/// Advance the host loop by a number of 60 Hz frames
fn run_frames(app: &mut App, backend: &mut impl RenderBackend, frames: u32) {
    for _ in 0..frames {
        app.update(SIM_DT);
        app.render(backend);

        if app.state.time_ticks.is_multiple_of(60)
            && let Some(ref frame) = app.last_frame
        {
            log::debug!("t={} {}", app.state.time_ticks, frame.distance_label);
        }
    }
}

fn main() {
    env_logger::init();
    log::info!("{WINDOW_TITLE} starting (headless demo)");

    let mut app = App::new();
    let mut backend = HeadlessBackend::new();

    // Free fall from rest: the ball drops from screen center and bounces out
    // along the box floor
    run_frames(&mut app, &mut backend, 240);
    if let Some(ref frame) = app.last_frame {
        log::info!("settled: ball at {}, {}", frame.ball_pos, frame.distance_label);
    }

    // Grab the ball where it lies and hold it for half a second; while held
    // it stays anchored
    let grab = app.state.ball.pos;
    app.queue(PointerEvent::down(grab));
    run_frames(&mut app, &mut backend, 30);

    // Release up and to the left: the drag delta becomes the launch velocity
    app.queue(PointerEvent::up(grab + Vec2::new(-80.0, -120.0)));
    run_frames(&mut app, &mut backend, 300);

    if let Some(ref frame) = app.last_frame {
        log::info!("thrown: ball at {}, {}", frame.ball_pos, frame.distance_label);
    }
    log::info!(
        "demo done: {} ticks simulated, {} frames presented",
        app.state.time_ticks,
        backend.frames_presented
    );
}
