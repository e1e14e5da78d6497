use crate::domain::GenerationEngine;

/// Session orchestrates the engine lifecycle.
/// This is the application layer between the widgets and the domain:
/// it owns the interactive parameters, creates a fresh engine on start,
/// discards it on stop, and steps it at the configured cadence.
pub struct Session {
    pub engine: Option<GenerationEngine>,
    /// Pixel-to-cell scale factor; editable only while stopped
    pub resolution: u32,
    /// Initial population is one live cell per `density`; editable only
    /// while stopped
    pub density: u32,
    pub is_running: bool,
    pub update_timer: f32,
    pub steps_per_second: f32,
}

impl Session {
    pub const DEFAULT_RESOLUTION: u32 = 8;
    pub const DEFAULT_DENSITY: u32 = 2;

    pub fn new() -> Self {
        Self {
            engine: None,
            resolution: Self::DEFAULT_RESOLUTION,
            density: Self::DEFAULT_DENSITY,
            is_running: false,
            update_timer: 0.0,
            steps_per_second: 10.0,
        }
    }

    /// Start a new game over the given drawable area. The grid is sized
    /// so one cell covers `resolution` pixels per axis. No-op while a
    /// game is already running.
    pub fn start(&mut self, area_width_px: u32, area_height_px: u32) {
        if self.is_running {
            return;
        }

        let rows = (area_width_px / self.resolution) as usize;
        let columns = (area_height_px / self.resolution) as usize;

        match GenerationEngine::new(rows, columns, self.density) {
            Ok(engine) => {
                log::info!(
                    "session started: {rows}x{columns} cells, 1/{} seeded alive",
                    self.density
                );
                self.engine = Some(engine);
                self.is_running = true;
                self.update_timer = 0.0;
            }
            Err(err) => {
                log::warn!("cannot start session: {err}");
            }
        }
    }

    /// Stop the running game and discard its engine; the next start
    /// creates a fresh one.
    pub fn stop(&mut self) {
        if self.engine.take().is_some() {
            log::info!("session stopped");
        }
        self.is_running = false;
        self.update_timer = 0.0;
    }

    /// Start when stopped, stop when running
    pub fn toggle(&mut self, area_width_px: u32, area_height_px: u32) {
        if self.is_running {
            self.stop();
        } else {
            self.start(area_width_px, area_height_px);
        }
    }

    /// Adjust simulation speed
    pub fn adjust_speed(mut self, delta: f32) -> Self {
        self.steps_per_second = (self.steps_per_second + delta).clamp(1.0, 60.0);
        self
    }

    /// Update the simulation by one frame, stepping the engine whenever
    /// the accumulated time passes the tick interval
    pub fn tick(mut self, delta_seconds: f32) -> Self {
        if !self.is_running {
            return self;
        }

        self.update_timer += delta_seconds;
        let interval = 1.0 / self.steps_per_second;

        if self.update_timer >= interval {
            if let Some(engine) = self.engine.as_mut() {
                engine.step();
            }
            self.update_timer = 0.0;
        }

        self
    }

    /// Draw a live cell under the given pixel position. Positions that
    /// map off the grid are expected near the window edge and ignored.
    pub fn paint(&mut self, pixel_x: i32, pixel_y: i32) {
        let resolution = self.resolution;
        if let Some(engine) = self.engine.as_mut() {
            if let Err(err) = engine.set_alive(pixel_x, pixel_y, resolution) {
                log::debug!("ignoring paint: {err}");
            }
        }
    }

    /// Erase the cell under the given pixel position; same edge handling
    /// as [`Session::paint`]
    pub fn erase(&mut self, pixel_x: i32, pixel_y: i32) {
        let resolution = self.resolution;
        if let Some(engine) = self.engine.as_mut() {
            if let Err(err) = engine.set_dead(pixel_x, pixel_y, resolution) {
                log::debug!("ignoring erase: {err}");
            }
        }
    }

    /// Generation counter of the current game, 0 when stopped
    pub fn generation(&self) -> u64 {
        self.engine.as_ref().map_or(0, GenerationEngine::generation)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
