//! Fixed-step simulation clock.
//!
//! The clock accumulates real elapsed time and runs one callback per
//! due step of `dt`. It never sleeps or spawns; the host drives it,
//! either with frame times (`advance`) or one step at a time (`step`).

use crumple_types::constants::MAX_CATCH_UP_TICKS;

/// Returned by the tick callback to keep or stop the clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockControl {
    Continue,
    Stop,
}

/// What the tick callback is told about the tick it runs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickInfo {
    /// Index of this tick, counted from clock construction.
    pub tick: u64,
    /// Simulation time at the start of this tick (seconds).
    pub sim_time: f64,
    /// Fixed timestep (seconds).
    pub dt: f32,
}

/// Owned fixed-step scheduler.
#[derive(Debug, Clone)]
pub struct SimulationClock {
    dt: f32,
    running: bool,
    accumulator: f64,
    tick_count: u64,
    sim_time: f64,
    max_catch_up: u32,
}

impl SimulationClock {
    /// A stopped clock ticking at `tick_rate` Hz.
    pub fn new(tick_rate: f32) -> Self {
        Self {
            dt: 1.0 / tick_rate,
            running: false,
            accumulator: 0.0,
            tick_count: 0,
            sim_time: 0.0,
            max_catch_up: MAX_CATCH_UP_TICKS,
        }
    }

    /// Overrides the per-advance step cap. Clamped to at least 1.
    pub fn with_max_catch_up(mut self, max_catch_up: u32) -> Self {
        self.max_catch_up = max_catch_up.max(1);
        self
    }

    /// Starts ticking. Time accumulated while stopped is discarded.
    pub fn start(&mut self) {
        if !self.running {
            self.accumulator = 0.0;
            self.running = true;
        }
    }

    pub fn stop(&mut self) {
        self.running = false;
        self.accumulator = 0.0;
    }

    /// Stops and starts again, dropping any partial step.
    pub fn restart(&mut self) {
        self.stop();
        self.start();
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Ticks run since construction.
    #[inline]
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    /// Simulation seconds elapsed over all ticks.
    #[inline]
    pub fn sim_time(&self) -> f64 {
        self.sim_time
    }

    #[inline]
    pub fn dt(&self) -> f32 {
        self.dt
    }

    /// Adds `elapsed` real seconds and runs every step that became due.
    ///
    /// At most `max_catch_up` steps run per call; any remaining backlog
    /// is dropped. A callback returning [`ClockControl::Stop`] stops the
    /// clock immediately. Returns the number of ticks run.
    pub fn advance<F>(&mut self, elapsed: f64, mut on_tick: F) -> u32
    where
        F: FnMut(TickInfo) -> ClockControl,
    {
        if !self.running || !elapsed.is_finite() || elapsed <= 0.0 {
            return 0;
        }

        self.accumulator += elapsed;
        let dt = self.dt as f64;
        let mut ticks = 0;

        while self.running && self.accumulator >= dt {
            if ticks == self.max_catch_up {
                self.accumulator = 0.0;
                break;
            }
            self.accumulator -= dt;
            ticks += 1;
            if self.fire(&mut on_tick) == ClockControl::Stop {
                self.stop();
            }
        }

        ticks
    }

    /// Runs exactly one tick if the clock is running. Returns the number
    /// of ticks run (0 or 1).
    pub fn step<F>(&mut self, mut on_tick: F) -> u32
    where
        F: FnMut(TickInfo) -> ClockControl,
    {
        if !self.running {
            return 0;
        }
        if self.fire(&mut on_tick) == ClockControl::Stop {
            self.stop();
        }
        1
    }

    fn fire<F>(&mut self, on_tick: &mut F) -> ClockControl
    where
        F: FnMut(TickInfo) -> ClockControl,
    {
        let info = TickInfo {
            tick: self.tick_count,
            sim_time: self.sim_time,
            dt: self.dt,
        };
        let control = on_tick(info);
        self.tick_count += 1;
        self.sim_time += self.dt as f64;
        control
    }
}
