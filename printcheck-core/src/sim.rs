//! Simulated printer for host tests
//!
//! One shared `World` stands behind every collaborator so a test can poke
//! temperatures and endstop behaviour between polls and inspect what the
//! sequencer asked the hardware to do.

use std::cell::RefCell;
use std::rc::Rc;

use crate::config::SelfCheckConfig;
use crate::selfcheck::{CheckStep, Machine, SelfCheck, StepResult};
use crate::traits::{
    Axis, CheckDisplay, Clock, Endstop, EndstopProbe, Heater, MotionControl, ThermalControl,
    Watchdog,
};

/// Planner iterations a queued move stays pending
const MOVE_TICKS: u32 = 3;

#[derive(Debug, Clone, Default)]
pub(crate) struct SimHeater {
    pub temp_c: f32,
    pub target_c: f32,
    /// Added to the reading when monitoring starts, standing in for
    /// whatever the heater does over the soak
    pub response_c: f32,
    pub target_log: Vec<f32>,
    pub watch_count: u32,
}

impl SimHeater {
    pub fn new(temp_c: f32, target_c: f32, response_c: f32) -> Self {
        Self {
            temp_c,
            target_c,
            response_c,
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct SimAxis {
    /// Endstop state after jog, home and back-off
    pub script: [bool; 3],
    pub moves: usize,
}

impl SimAxis {
    pub fn healthy() -> Self {
        Self::scripted([true, false, false])
    }

    pub fn scripted(script: [bool; 3]) -> Self {
        Self { script, moves: 0 }
    }

    fn endstop(&self) -> bool {
        match self.moves {
            0 => false,
            n => self.script[(n - 1).min(2)],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum MoveCmd {
    Relative(Axis, f32, u16),
    Home(Axis),
    To(Axis, f32, u16),
}

#[derive(Debug, Clone)]
pub(crate) struct World {
    pub nozzle: SimHeater,
    pub bed: SimHeater,
    pub now_ms: u64,
    pub x: SimAxis,
    pub y: SimAxis,
    pub probe_triggered: bool,
    pub pending: u32,
    pub moves: Vec<MoveCmd>,
    pub watchdog_refreshes: u32,
    /// Thermal, motion and endstop calls (clock and watchdog excluded)
    pub hw_calls: u32,
}

impl World {
    /// Everything fitted and behaving
    pub fn healthy() -> Self {
        Self {
            nozzle: SimHeater::new(25.0, 0.0, 20.0),
            bed: SimHeater::new(22.0, 0.0, 6.0),
            now_ms: 0,
            x: SimAxis::healthy(),
            y: SimAxis::healthy(),
            probe_triggered: false,
            pending: 0,
            moves: Vec::new(),
            watchdog_refreshes: 0,
            hw_calls: 0,
        }
    }

    pub fn heater(&mut self, heater: Heater) -> &mut SimHeater {
        match heater {
            Heater::Nozzle => &mut self.nozzle,
            Heater::Bed => &mut self.bed,
        }
    }

    fn axis(&mut self, axis: Axis) -> &mut SimAxis {
        match axis {
            Axis::X => &mut self.x,
            Axis::Y => &mut self.y,
        }
    }

    fn queue(&mut self, cmd: MoveCmd) {
        let axis = match cmd {
            MoveCmd::Relative(a, ..) | MoveCmd::Home(a) | MoveCmd::To(a, ..) => a,
        };
        self.hw_calls += 1;
        self.axis(axis).moves += 1;
        self.moves.push(cmd);
        self.pending = MOVE_TICKS;
    }
}

/// Handle onto the shared world; every collaborator is a clone of this
#[derive(Debug, Clone)]
pub(crate) struct Sim(pub Rc<RefCell<World>>);

impl Sim {
    pub fn new(world: World) -> Self {
        Self(Rc::new(RefCell::new(world)))
    }

    pub fn world(&self) -> std::cell::RefMut<'_, World> {
        self.0.borrow_mut()
    }

    pub fn advance(&self, ms: u64) {
        self.world().now_ms += ms;
    }
}

impl ThermalControl for Sim {
    fn current_celsius(&mut self, heater: Heater) -> f32 {
        let mut world = self.world();
        world.hw_calls += 1;
        world.heater(heater).temp_c
    }

    fn target_celsius(&self, heater: Heater) -> f32 {
        let mut world = self.world();
        world.hw_calls += 1;
        world.heater(heater).target_c
    }

    fn set_target(&mut self, heater: Heater, celsius: f32) {
        let mut world = self.world();
        world.hw_calls += 1;
        let h = world.heater(heater);
        h.target_c = celsius;
        h.target_log.push(celsius);
    }

    fn begin_monitoring(&mut self, heater: Heater) {
        let mut world = self.world();
        world.hw_calls += 1;
        let h = world.heater(heater);
        h.watch_count += 1;
        h.temp_c += h.response_c;
    }
}

impl MotionControl for Sim {
    fn relative_move(&mut self, axis: Axis, distance_mm: f32, feed_mm_min: u16) {
        self.world()
            .queue(MoveCmd::Relative(axis, distance_mm, feed_mm_min));
    }

    fn home(&mut self, axis: Axis) {
        self.world().queue(MoveCmd::Home(axis));
    }

    fn move_to(&mut self, axis: Axis, position_mm: f32, feed_mm_min: u16) {
        self.world().queue(MoveCmd::To(axis, position_mm, feed_mm_min));
    }

    fn has_pending_moves(&self) -> bool {
        let mut world = self.world();
        if world.pending == 0 {
            return false;
        }
        world.pending -= 1;
        true
    }
}

impl EndstopProbe for Sim {
    fn is_triggered(&mut self, endstop: Endstop) -> bool {
        let mut world = self.world();
        world.hw_calls += 1;
        match endstop {
            Endstop::XMin => world.x.endstop(),
            Endstop::YMin => world.y.endstop(),
            Endstop::Probe => world.probe_triggered,
        }
    }
}

impl Clock for Sim {
    fn now_millis(&self) -> u64 {
        self.0.borrow().now_ms
    }
}

impl Watchdog for Sim {
    fn refresh(&mut self) {
        self.world().watchdog_refreshes += 1;
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Shown {
    Cleared,
    Result(CheckStep, StepResult),
    Checking(u8),
    Idle,
}

/// Display that records every call
#[derive(Debug, Default)]
pub(crate) struct RecordingDisplay {
    pub shown: Vec<Shown>,
}

impl RecordingDisplay {
    pub fn results(&self) -> Vec<(CheckStep, StepResult)> {
        self.shown
            .iter()
            .filter_map(|s| match *s {
                Shown::Result(step, result) => Some((step, result)),
                _ => None,
            })
            .collect()
    }
}

impl CheckDisplay for RecordingDisplay {
    fn clear_results(&mut self) {
        self.shown.push(Shown::Cleared);
    }

    fn report_result(&mut self, step: CheckStep, result: StepResult) {
        self.shown.push(Shown::Result(step, result));
    }

    fn report_checking(&mut self, frame: u8) {
        self.shown.push(Shown::Checking(frame));
    }

    fn report_idle(&mut self) {
        self.shown.push(Shown::Idle);
    }
}

pub(crate) type SimCheck = SelfCheck<Sim, Sim, Sim, Sim, Sim, RecordingDisplay>;

/// Build a sequencer over a simulated printer
pub(crate) fn rig(world: World) -> (Sim, SimCheck) {
    rig_with(world, SelfCheckConfig::default())
}

pub(crate) fn rig_with(world: World, config: SelfCheckConfig) -> (Sim, SimCheck) {
    let sim = Sim::new(world);
    let machine = Machine {
        thermal: sim.clone(),
        motion: sim.clone(),
        endstops: sim.clone(),
        clock: sim.clone(),
        watchdog: sim.clone(),
    };
    let check =
        SelfCheck::new(machine, RecordingDisplay::default(), config).expect("valid config");
    (sim, check)
}
