//! Self-check sequencer
//!
//! A poll-driven state machine. The control loop calls [`SelfCheck::poll`]
//! on every UI tick; each call enters at most one step.
//!
//! Temperature, homing and probe steps finish in the poll that enters them.
//! Heat-response steps apply a probe target and then sit in
//! [`Phase::HeatSoak`] until their deadline, polling the clock only.
//! Homing steps are the one blocking point: each stage waits for the
//! planner to drain while refreshing the watchdog.

use crate::config::{ConfigError, SelfCheckConfig};
use crate::traits::{
    Axis, CheckDisplay, Clock, Endstop, EndstopProbe, Heater, MotionControl, ThermalControl,
    Watchdog,
};

use super::fault::{CheckFault, HomingStage};
use super::results::CheckResults;
use super::step::{CheckStep, StepResult};

/// Time a heater is given to react to its probe target
pub const HEAT_SOAK_MS: u64 = 20_000;

/// Frames in the "checking" animation
pub const CHECKING_FRAMES: u8 = 3;

/// Firmware subsystems the self check drives
#[derive(Debug, Clone)]
pub struct Machine<T, M, E, C, W> {
    /// Thermal manager
    pub thermal: T,
    /// Motion queue
    pub motion: M,
    /// Endstop inputs
    pub endstops: E,
    /// Monotonic time source
    pub clock: C,
    /// Hardware watchdog, refreshed during blocking waits
    pub watchdog: W,
}

/// A heat-response step waiting out its soak
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct HeatProbe {
    /// Step being evaluated
    pub step: CheckStep,
    /// Heater under test
    pub heater: Heater,
    /// Target before the probe, restored afterwards
    pub saved_target_c: f32,
    /// Reading when the probe target was applied
    pub baseline_c: f32,
    /// Clock time at which the response is judged
    pub deadline_ms: u64,
}

/// Sequencer phase
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Phase {
    /// Not running
    Idle,
    /// `next` has been requested and is entered on the following poll
    Pending { next: CheckStep },
    /// A heat-response step is in progress
    HeatSoak(HeatProbe),
}

/// Answer to a request to leave the self-check screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ExitDecision {
    /// Sequencer is idle and the screen may close
    Exit,
    /// A homing step owns the toolhead; the request was ignored
    Deferred(CheckStep),
}

/// The self-check sequencer
///
/// Owns its collaborators for the lifetime of the screen. Nothing else
/// mutates the sequencer state.
pub struct SelfCheck<T, M, E, C, W, D> {
    machine: Machine<T, M, E, C, W>,
    display: D,
    config: SelfCheckConfig,
    phase: Phase,
    /// Last step entered in this run
    current: Option<CheckStep>,
    results: CheckResults,
    frame: u8,
}

impl<T, M, E, C, W, D> SelfCheck<T, M, E, C, W, D>
where
    T: ThermalControl,
    M: MotionControl,
    E: EndstopProbe,
    C: Clock,
    W: Watchdog,
    D: CheckDisplay,
{
    /// Create an idle sequencer and show the empty result table
    ///
    /// Fails without touching the display if `config` does not validate.
    pub fn new(
        machine: Machine<T, M, E, C, W>,
        mut display: D,
        config: SelfCheckConfig,
    ) -> Result<Self, ConfigError> {
        config.validate()?;

        display.clear_results();
        display.report_idle();

        Ok(Self {
            machine,
            display,
            config,
            phase: Phase::Idle,
            current: None,
            results: CheckResults::new(),
            frame: 0,
        })
    }

    /// Start a new run
    ///
    /// Returns `false` without doing anything if a run is in progress.
    pub fn start(&mut self) -> bool {
        if self.is_running() {
            debug!("self check: start ignored, already running");
            return false;
        }

        info!("self check: starting");
        self.results.reset();
        self.display.clear_results();
        self.current = None;
        self.frame = 0;
        self.phase = Phase::Pending {
            next: CheckStep::FIRST,
        };
        self.animate();
        true
    }

    /// Advance the sequence
    ///
    /// Safe to call at any rate. While idle this does nothing; while a heat
    /// soak is pending it only reads the clock and steps the animation.
    pub fn poll(&mut self) {
        match self.phase {
            Phase::Idle => return,
            Phase::Pending { next } => self.enter(next),
            Phase::HeatSoak(probe) => {
                if self.machine.clock.has_elapsed(probe.deadline_ms) {
                    self.finish_heat_probe(probe);
                }
            }
        }

        if self.is_running() {
            self.animate();
        }
    }

    /// Ask to leave the self-check screen
    ///
    /// A heater under probe gets its original target back before the
    /// sequencer goes idle. After a homing step the request is ignored
    /// and must be repeated once the sequence has moved on.
    pub fn cancel(&mut self) -> ExitDecision {
        if let Some(step) = self.current.filter(|s| s.is_homing()) {
            warn!("self check: exit deferred during {}", step);
            return ExitDecision::Deferred(step);
        }

        self.restore_probe_target();

        if self.is_running() {
            info!("self check: cancelled");
            self.phase = Phase::Idle;
            self.current = None;
            self.frame = 0;
            self.display.report_idle();
        }

        ExitDecision::Exit
    }

    /// Check if a run is in progress
    pub fn is_running(&self) -> bool {
        !matches!(self.phase, Phase::Idle)
    }

    /// Current phase
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Last step entered in this run (`None` when idle)
    pub fn current_step(&self) -> Option<CheckStep> {
        self.current
    }

    /// Step requested or in progress (`None` when idle)
    pub fn target_step(&self) -> Option<CheckStep> {
        match self.phase {
            Phase::Idle => None,
            Phase::Pending { next } => Some(next),
            Phase::HeatSoak(probe) => Some(probe.step),
        }
    }

    /// Results of the current or last run
    pub fn results(&self) -> &CheckResults {
        &self.results
    }

    /// Active configuration
    pub fn config(&self) -> &SelfCheckConfig {
        &self.config
    }

    /// Collaborators
    pub fn machine(&self) -> &Machine<T, M, E, C, W> {
        &self.machine
    }

    /// Collaborators, mutably
    pub fn machine_mut(&mut self) -> &mut Machine<T, M, E, C, W> {
        &mut self.machine
    }

    /// Display surface
    pub fn display(&self) -> &D {
        &self.display
    }

    /// Tear down, handing the collaborators back
    ///
    /// A heater under probe gets its original target back first.
    pub fn into_parts(mut self) -> (Machine<T, M, E, C, W>, D) {
        self.restore_probe_target();
        (self.machine, self.display)
    }

    fn restore_probe_target(&mut self) {
        if let Phase::HeatSoak(probe) = self.phase {
            self.machine
                .thermal
                .set_target(probe.heater, probe.saved_target_c);
            info!(
                "self check: {} target restored to {}",
                probe.heater,
                probe.saved_target_c
            );
        }
    }

    fn enter(&mut self, step: CheckStep) {
        trace!("self check: entering {}", step);
        self.current = Some(step);

        match step {
            CheckStep::NozzleTempRead => {
                let result = self.check_sensor(Heater::Nozzle);
                self.complete(step, result);
            }
            CheckStep::BedTempRead => {
                let result = self.check_sensor(Heater::Bed);
                self.complete(step, result);
            }
            CheckStep::NozzleHeatResponse => self.begin_heat_probe(step, Heater::Nozzle),
            CheckStep::BedHeatResponse => self.begin_heat_probe(step, Heater::Bed),
            CheckStep::HomeX => {
                let result = self.check_homing(Axis::X);
                self.complete(step, result);
            }
            CheckStep::HomeY => {
                let result = self.check_homing(Axis::Y);
                self.complete(step, result);
            }
            CheckStep::ServoEndstop => {
                let result = if self.machine.endstops.is_triggered(Endstop::Probe) {
                    StepResult::Fail(CheckFault::ProbeTriggered)
                } else {
                    StepResult::Pass
                };
                self.complete(step, result);
            }
        }
    }

    fn check_sensor(&mut self, heater: Heater) -> StepResult {
        let celsius = self.machine.thermal.current_celsius(heater);
        if celsius > self.config.sensor_floor_c {
            StepResult::Pass
        } else {
            StepResult::Fail(CheckFault::SensorAbsent)
        }
    }

    fn begin_heat_probe(&mut self, step: CheckStep, heater: Heater) {
        let baseline_c = self.machine.thermal.current_celsius(heater);
        // NaN means no usable sensor
        if baseline_c.is_nan() || baseline_c < self.config.sensor_floor_c {
            self.complete(step, StepResult::Fail(CheckFault::SensorAbsent));
            return;
        }

        let saved_target_c = self.machine.thermal.target_celsius(heater);
        let probe_target_c = self
            .config
            .heater(heater)
            .probe_target(saved_target_c, baseline_c);

        self.machine.thermal.set_target(heater, probe_target_c);
        self.machine.thermal.begin_monitoring(heater);

        let deadline_ms = self.machine.clock.deadline_after(HEAT_SOAK_MS);
        debug!(
            "self check: {} probe target {} (was {}), judged at {}",
            heater,
            probe_target_c,
            saved_target_c,
            deadline_ms
        );

        self.phase = Phase::HeatSoak(HeatProbe {
            step,
            heater,
            saved_target_c,
            baseline_c,
            deadline_ms,
        });
    }

    fn finish_heat_probe(&mut self, probe: HeatProbe) {
        let measured_c = self.machine.thermal.current_celsius(probe.heater);
        let responded = self
            .config
            .heater(probe.heater)
            .responded(probe.baseline_c, measured_c);

        self.machine
            .thermal
            .set_target(probe.heater, probe.saved_target_c);

        debug!(
            "self check: {} moved {} -> {}",
            probe.heater,
            probe.baseline_c,
            measured_c
        );

        let result = if responded {
            StepResult::Pass
        } else {
            StepResult::Fail(CheckFault::NoThermalResponse)
        };
        self.complete(probe.step, result);
    }

    /// Jog, home and back off one axis, checking the endstop after each move
    ///
    /// Blocks on the planner between stages. Stops at the first mismatch.
    fn check_homing(&mut self, axis: Axis) -> StepResult {
        let config = *self.config.axis(axis);
        let endstop = Endstop::min_of(axis);

        for stage in HomingStage::ALL {
            let motion = &mut self.machine.motion;
            match stage {
                HomingStage::Jog => {
                    motion.relative_move(axis, config.jog_mm, config.jog_feed_mm_min)
                }
                HomingStage::Home => motion.home(axis),
                HomingStage::BackOff => {
                    motion.move_to(axis, config.backoff_mm, config.backoff_feed_mm_min)
                }
            }
            motion.wait_for_drain(&mut self.machine.watchdog);

            if self.machine.endstops.is_triggered(endstop) != stage.expects_triggered() {
                return StepResult::Fail(CheckFault::EndstopMismatch(stage));
            }
        }

        StepResult::Pass
    }

    fn complete(&mut self, step: CheckStep, result: StepResult) {
        self.results.record(step, result);
        self.display.report_result(step, result);

        match result {
            StepResult::Fail(fault) => warn!("self check: {} failed ({})", step, fault),
            _ => info!("self check: {} passed", step),
        }

        match step.next() {
            Some(next) => self.phase = Phase::Pending { next },
            None => self.finish(),
        }
    }

    fn finish(&mut self) {
        info!(
            "self check: done, {} passed, {} failed",
            self.results.passed(),
            self.results.failed()
        );
        self.phase = Phase::Idle;
        self.current = None;
        self.frame = 0;
        self.display.report_idle();
    }

    fn animate(&mut self) {
        self.display.report_checking(self.frame);
        self.frame = (self.frame + 1) % CHECKING_FRAMES;
    }
}
