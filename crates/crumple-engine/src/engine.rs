//! The paper engine.
//!
//! Gestures rewrite the target shape; the clock drives the integrator,
//! which pulls the live shape toward the target; observers hear about
//! both.
//!
//! ```text
//! fold / toggle_puff ──► TargetShape ──► integrator.retarget()
//!                                              │
//! advance / step ──► SimulationClock ──► integrator.step() ──► live
//!                                              │
//!                        GeometrySink ◄────────┴────────► EventBus
//! ```

use tracing::{debug, info, trace, warn};

use crumple_deform::{FoldLine, FoldOutcome, TargetShape};
use crumple_math::Vec2;
use crumple_mesh::{generators, GridMesh, GridTopology, RenderBuffers, VertexBuffer};
use crumple_render::{GeometryFrame, GeometrySink};
use crumple_solver::{build_integrator, IntegratorKind, MotionIntegrator, MotionState, StepContext};
use crumple_telemetry::{EventBus, EventKind, EventSink, PaperEvent};
use crumple_types::{CrumpleError, CrumpleResult};

use crate::camera::OrbitCamera;
use crate::clock::{ClockControl, SimulationClock, TickInfo};
use crate::config::EngineConfig;
use crate::gesture::{Gesture, GestureOutcome};

/// Polling snapshot of the engine's observable state.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct PaperStatus {
    pub tick: u64,
    pub sim_time: f64,
    pub fold_count: u32,
    pub is_puffed: bool,
    pub integrator: IntegratorKind,
    /// Whether the clock is ticking.
    pub running: bool,
    /// Largest distance between a live vertex and its target.
    pub residual: f32,
    pub kinetic_energy: f64,
}

/// Interactive paper sheet.
pub struct PaperEngine {
    config: EngineConfig,
    mesh: GridMesh,
    target: TargetShape,
    motion: MotionState,
    integrator: Box<dyn MotionIntegrator>,
    clock: SimulationClock,
    camera: OrbitCamera,
    bus: EventBus,
    geometry_sinks: Vec<Box<dyn GeometrySink>>,
    fold_count: u32,
    is_puffed: bool,
    /// Ticks since the last retarget.
    animation_ticks: u32,
    shut_down: bool,
}

impl PaperEngine {
    /// Builds the flat sheet and the configured integrator.
    ///
    /// The spring clock starts right away; the eased clock waits for
    /// the first committed target.
    pub fn new(config: EngineConfig) -> CrumpleResult<Self> {
        config.validate()?;
        let mesh = generators::build(config.segments, config.paper_size)?;
        let target = TargetShape::from_rest(&mesh.rest);
        let motion = MotionState::from_rest(&mesh.rest);
        let integrator = build_integrator(&config.integrator, mesh.vertex_count());

        let mut clock = SimulationClock::new(config.integrator.tick_rate);
        if config.integrator.kind == IntegratorKind::Spring {
            clock.start();
        }

        info!(
            segments = config.segments,
            vertices = mesh.vertex_count(),
            triangles = mesh.triangle_count(),
            integrator = integrator.name(),
            "paper engine ready"
        );

        Ok(Self {
            config,
            mesh,
            target,
            motion,
            integrator,
            clock,
            camera: OrbitCamera::default(),
            bus: EventBus::new(),
            geometry_sinks: Vec::new(),
            fold_count: 0,
            is_puffed: false,
            animation_ticks: 0,
            shut_down: false,
        })
    }

    // ─── Observers ───

    /// Registers a geometry sink and initializes it with the topology.
    pub fn add_geometry_sink(&mut self, mut sink: Box<dyn GeometrySink>) -> CrumpleResult<()> {
        sink.init(&self.mesh.topology)?;
        debug!(sink = sink.name(), "geometry sink attached");
        self.geometry_sinks.push(sink);
        Ok(())
    }

    pub fn add_event_sink(&mut self, sink: Box<dyn EventSink>) {
        self.bus.add_sink(sink);
    }

    // ─── Gestures ───

    /// Folds the target along the line from `start` to `end`.
    ///
    /// Degenerate lines and folds that would move nothing leave every
    /// buffer, counter and observer untouched.
    pub fn fold(&mut self, start: Vec2, end: Vec2) -> FoldOutcome {
        match FoldLine::new(start, end) {
            Ok(line) => self.commit_fold(&line),
            Err(rejection) => {
                debug!(reason = rejection.name(), "fold ignored");
                FoldOutcome::Rejected(rejection)
            }
        }
    }

    /// Folds from hit-test results; a missed endpoint is a no-op.
    pub fn fold_gesture(&mut self, start: Option<Vec2>, end: Option<Vec2>) -> FoldOutcome {
        match FoldLine::resolve(start, end) {
            Ok(line) => self.commit_fold(&line),
            Err(rejection) => {
                debug!(reason = rejection.name(), "fold ignored");
                FoldOutcome::Rejected(rejection)
            }
        }
    }

    fn commit_fold(&mut self, line: &FoldLine) -> FoldOutcome {
        let outcome = self.target.fold(line, self.config.stacking_offset);
        match outcome {
            FoldOutcome::Applied { moved, recenter_shift } => {
                self.fold_count += 1;
                debug!(
                    fold_count = self.fold_count,
                    moved,
                    shift_x = recenter_shift.x,
                    shift_y = recenter_shift.y,
                    "fold applied"
                );
                self.emit(EventKind::FoldApplied {
                    fold_count: self.fold_count,
                    moved_vertices: moved as u32,
                });
                self.retarget();
            }
            FoldOutcome::Rejected(rejection) => {
                debug!(reason = rejection.name(), "fold ignored");
            }
        }
        outcome
    }

    /// Flips the puff state and re-inflates the target. Returns the new state.
    pub fn toggle_puff(&mut self) -> bool {
        self.is_puffed = !self.is_puffed;
        let outcome = self.target.puff(self.is_puffed, &self.config.puff);
        debug!(
            is_puffed = self.is_puffed,
            median_z = outcome.median_z,
            displaced = outcome.displaced,
            "puff toggled"
        );
        self.emit(EventKind::PuffToggled {
            is_puffed: self.is_puffed,
        });
        self.retarget();
        self.is_puffed
    }

    /// Orbits the view. Never touches the paper.
    pub fn rotate(&mut self, delta_yaw: f32, delta_pitch: f32) {
        self.camera.rotate(delta_yaw, delta_pitch);
        trace!(yaw = self.camera.yaw, pitch = self.camera.pitch, "camera rotated");
    }

    /// Flattens the sheet and clears all counters and motion.
    ///
    /// The camera keeps its orientation.
    pub fn reset(&mut self) -> CrumpleResult<()> {
        let rest = &self.mesh.rest;
        self.target.reset_to(rest);
        self.motion.reset_to(rest);
        self.integrator.cancel();
        self.fold_count = 0;
        self.is_puffed = false;
        self.animation_ticks = 0;
        if self.config.integrator.kind == IntegratorKind::Eased {
            self.clock.stop();
        }

        info!(tick = self.clock.tick_count(), "paper reset");
        self.emit(EventKind::Reset);

        let frame = GeometryFrame::new(self.clock.tick_count(), &self.motion.live, &self.mesh.topology);
        notify_sinks(&mut self.geometry_sinks, &frame)
    }

    /// Dispatches a gesture to the matching operation.
    pub fn apply(&mut self, gesture: &Gesture) -> CrumpleResult<GestureOutcome> {
        let outcome = match *gesture {
            Gesture::Fold { start, end } => {
                GestureOutcome::Fold(self.fold(Vec2::from(start), Vec2::from(end)))
            }
            Gesture::FoldUnresolved { start, end } => {
                GestureOutcome::Fold(self.fold_gesture(start.map(Vec2::from), end.map(Vec2::from)))
            }
            Gesture::TogglePuff => GestureOutcome::Puff {
                is_puffed: self.toggle_puff(),
            },
            Gesture::Rotate { yaw, pitch } => {
                self.rotate(yaw, pitch);
                GestureOutcome::Rotated {
                    yaw: self.camera.yaw,
                    pitch: self.camera.pitch,
                }
            }
            Gesture::Reset => {
                self.reset()?;
                GestureOutcome::Reset
            }
        };
        Ok(outcome)
    }

    fn retarget(&mut self) {
        self.integrator.retarget(&self.motion);
        self.animation_ticks = 0;
        if self.shut_down {
            return;
        }
        match self.config.integrator.kind {
            IntegratorKind::Eased => self.clock.restart(),
            IntegratorKind::Spring => self.clock.start(),
        }
    }

    fn emit(&mut self, kind: EventKind) {
        self.bus.emit(PaperEvent::new(self.clock.tick_count(), kind));
        self.bus.flush();
    }

    // ─── Time ───

    /// Feeds `elapsed` real seconds to the clock. Returns ticks run.
    pub fn advance(&mut self, elapsed: f64) -> CrumpleResult<u32> {
        self.drive(|clock, driver| clock.advance(elapsed, |info| driver.tick(info)))
    }

    /// Runs one tick if the clock is running. Returns ticks run (0 or 1).
    pub fn step(&mut self) -> CrumpleResult<u32> {
        self.drive(|clock, driver| clock.step(|info| driver.tick(info)))
    }

    /// Calls [`step`](Self::step) `count` times. Returns ticks actually run.
    pub fn run_ticks(&mut self, count: u32) -> CrumpleResult<u32> {
        let mut ran = 0;
        for _ in 0..count {
            ran += self.step()?;
        }
        Ok(ran)
    }

    fn drive<R>(&mut self, run: R) -> CrumpleResult<u32>
    where
        R: FnOnce(&mut SimulationClock, &mut TickDriver<'_>) -> u32,
    {
        let mut driver = TickDriver {
            integrator: &mut self.integrator,
            motion: &mut self.motion,
            target: &self.target,
            topology: &self.mesh.topology,
            sinks: &mut self.geometry_sinks,
            bus: &self.bus,
            puffed: self.is_puffed,
            animation_ticks: &mut self.animation_ticks,
            failure: None,
        };
        let ticks = run(&mut self.clock, &mut driver);
        let failure = driver.failure.take();

        self.bus.flush();
        match failure {
            Some(e) => Err(e),
            None => Ok(ticks),
        }
    }

    /// Stops the clock and finalizes every observer.
    pub fn shutdown(&mut self) -> CrumpleResult<()> {
        self.clock.stop();
        self.shut_down = true;
        self.bus.finalize();

        let mut first_error = None;
        for sink in &mut self.geometry_sinks {
            if let Err(e) = sink.finalize() {
                warn!(sink = sink.name(), error = %e, "geometry sink failed to finalize");
                first_error.get_or_insert(e);
            }
        }
        info!(ticks = self.clock.tick_count(), folds = self.fold_count, "paper engine shut down");
        first_error.map_or(Ok(()), Err)
    }

    // ─── Accessors ───

    pub fn status(&self) -> PaperStatus {
        PaperStatus {
            tick: self.clock.tick_count(),
            sim_time: self.clock.sim_time(),
            fold_count: self.fold_count,
            is_puffed: self.is_puffed,
            integrator: self.integrator.kind(),
            running: self.clock.is_running(),
            residual: self.motion.live.max_distance(&self.target.positions),
            kinetic_energy: self.motion.kinetic_energy(self.config.integrator.mass),
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn mesh(&self) -> &GridMesh {
        &self.mesh
    }

    pub fn topology(&self) -> &GridTopology {
        &self.mesh.topology
    }

    /// Positions currently shown.
    pub fn live(&self) -> &VertexBuffer {
        &self.motion.live
    }

    /// Positions the live shape is driven toward.
    pub fn target(&self) -> &VertexBuffer {
        &self.target.positions
    }

    pub fn target_shape(&self) -> &TargetShape {
        &self.target
    }

    /// Live positions and velocities.
    pub fn motion(&self) -> &MotionState {
        &self.motion
    }

    pub fn clock(&self) -> &SimulationClock {
        &self.clock
    }

    pub fn camera(&self) -> &OrbitCamera {
        &self.camera
    }

    pub fn fold_count(&self) -> u32 {
        self.fold_count
    }

    pub fn is_puffed(&self) -> bool {
        self.is_puffed
    }

    pub fn integrator_name(&self) -> &str {
        self.integrator.name()
    }

    /// Whether a further tick could still move the mesh.
    pub fn is_animating(&self) -> bool {
        self.clock.is_running() && self.integrator.is_active()
    }

    /// Renderer-ready copy of the live shape.
    pub fn render_buffers(&self) -> CrumpleResult<RenderBuffers> {
        self.mesh.render_buffers(&self.motion.live)
    }
}

/// Mutable view of the engine handed to the clock callback.
struct TickDriver<'a> {
    integrator: &'a mut Box<dyn MotionIntegrator>,
    motion: &'a mut MotionState,
    target: &'a TargetShape,
    topology: &'a GridTopology,
    sinks: &'a mut Vec<Box<dyn GeometrySink>>,
    bus: &'a EventBus,
    puffed: bool,
    animation_ticks: &'a mut u32,
    failure: Option<CrumpleError>,
}

impl TickDriver<'_> {
    fn tick(&mut self, info: TickInfo) -> ClockControl {
        let ctx = StepContext {
            dt: info.dt,
            sim_time: info.sim_time,
            puffed: self.puffed,
        };
        let result = self.integrator.step(self.motion, self.target, &ctx);
        *self.animation_ticks = self.animation_ticks.saturating_add(1);
        trace!(tick = info.tick, residual = result.max_residual, moved = result.moved, "tick");

        if result.moved {
            let frame = GeometryFrame::new(info.tick, &self.motion.live, self.topology);
            if let Err(e) = notify_sinks(self.sinks, &frame) {
                self.failure.get_or_insert(e);
            }
        }

        if result.finished {
            debug!(ticks = *self.animation_ticks, "motion settled");
            self.bus.emit(PaperEvent::new(
                info.tick,
                EventKind::MotionSettled {
                    ticks: *self.animation_ticks,
                },
            ));
            return ClockControl::Stop;
        }
        ClockControl::Continue
    }
}

/// Hands `frame` to every sink, even after one fails. Returns the first error.
fn notify_sinks(sinks: &mut [Box<dyn GeometrySink>], frame: &GeometryFrame) -> CrumpleResult<()> {
    let mut first_error = None;
    for sink in sinks.iter_mut() {
        if let Err(e) = sink.on_geometry_changed(frame) {
            warn!(sink = sink.name(), error = %e, "geometry sink failed");
            first_error.get_or_insert(e);
        }
    }
    first_error.map_or(Ok(()), Err)
}
