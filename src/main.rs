//! Agari entry point
//!
//! Headless frame driver: both players are steered by the demo pilot, frames
//! are built into draw lists and handed to a recording sink. A windowed
//! driver plugs into the same `Game` loop by feeding keyboard events and
//! presenting to its own `FrameSink`.

use std::path::PathBuf;
use std::time::Duration;

use agari::platform::{Clock, InputEvent, KeyboardState, ManualClock, SystemClock};
use agari::renderer::{FrameSink, RecordingSink, RenderView, build_draw_list};
use agari::settings::SETTINGS_ENV;
use agari::sim::{GameEvent, PlayerId, SimulationState, TickInput, pilot, tick};
use agari::Settings;

/// Game instance holding all driver-side state
struct Game<C: Clock, S: FrameSink> {
    state: SimulationState,
    settings: Settings,
    clock: C,
    sink: S,
    keyboard: KeyboardState,
    /// Let the demo pilot steer both players instead of the keyboard
    autopilot: bool,
    fullscreen: bool,
    frames: u64,
    eliminations: [u32; 2],
}

impl<C: Clock, S: FrameSink> Game<C, S> {
    fn new(settings: Settings, seed: u64, clock: C, sink: S) -> Self {
        Self {
            state: SimulationState::new(seed),
            fullscreen: settings.fullscreen,
            settings,
            clock,
            sink,
            keyboard: KeyboardState::new(),
            autopilot: true,
            frames: 0,
            eliminations: [0; 2],
        }
    }

    fn finished(&self) -> bool {
        self.keyboard.quit_requested()
            || self
                .settings
                .max_frames
                .is_some_and(|max| self.frames >= max)
    }

    /// One frame: poll input, tick, draw
    fn frame(&mut self, events: &[InputEvent]) {
        self.keyboard.handle_all(events.iter().copied());
        let now = self.clock.now_millis();

        let mut input: TickInput = self.keyboard.snapshot();
        if self.autopilot {
            for id in PlayerId::ALL {
                input.players[id.index()] = pilot::steer(&self.state, id, now);
            }
        }

        if input.toggle_fullscreen {
            self.fullscreen = !self.fullscreen;
            log::info!("Fullscreen: {}", self.fullscreen);
        }

        tick(&mut self.state, &input, now);
        self.record_events();

        let view = RenderView::from_state(&self.state, now);
        let commands = build_draw_list(&view);
        log::trace!("Frame {} at {} ms: {} draw commands", self.frames, now, commands.len());
        self.sink.present(&commands);

        self.frames += 1;
    }

    fn record_events(&mut self) {
        for event in &self.state.events {
            if let GameEvent::PlayerEliminated { by, .. } = event {
                self.eliminations[by.index()] += 1;
            }
        }
    }
}

fn settings_path() -> Option<PathBuf> {
    std::env::args_os()
        .nth(1)
        .or_else(|| std::env::var_os(SETTINGS_ENV))
        .map(PathBuf::from)
}

fn run<C: Clock>(settings: Settings, seed: u64, clock: C, advance: impl Fn(&C)) {
    let delay = Duration::from_millis(settings.frame_delay_ms);
    let realtime = settings.realtime;
    let mut game = Game::new(settings, seed, clock, RecordingSink::default());

    while !game.finished() {
        game.frame(&[]);
        advance(&game.clock);
        if realtime {
            std::thread::sleep(delay);
        }
    }

    let [one, two] = &game.state.players;
    log::info!(
        "Stopped after {} frames ({} ms). Eliminations: one={} two={}. Sizes: one={} two={}",
        game.frames,
        game.state.last_tick_ms,
        game.eliminations[0],
        game.eliminations[1],
        one.size,
        two.size,
    );
    match serde_json::to_string(&RenderView::from_state(&game.state, game.state.last_tick_ms)) {
        Ok(json) => log::debug!("Final view: {}", json),
        Err(e) => log::warn!("Could not serialize final view: {}", e),
    }
}

fn main() {
    env_logger::init();
    log::info!("Agari (headless) starting...");

    let settings = Settings::load(settings_path().as_deref());

    let seed = settings.seed.unwrap_or_else(rand::random);
    log::info!("Game initialized with seed: {}", seed);

    if settings.realtime {
        run(settings, seed, SystemClock::new(), |_| {});
    } else {
        let step = settings.frame_delay_ms;
        run(settings, seed, ManualClock::new(0), move |c: &ManualClock| c.advance(step));
    }
}
