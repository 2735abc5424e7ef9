//! Simulation driver.
//!
//! Runs a fixed number of cycles over every controller in a [`Manager`],
//! writing a transcript and recording each advance in a [`CycleHistory`].

use crate::core::{Controller, ControllerKind, CycleHistory};
use crate::manager::Manager;
use serde::{Deserialize, Serialize};
use std::io::{self, Write};
use thiserror::Error;
use tracing::{debug, info};

/// Number of cycles run by the standard simulation.
pub const DEFAULT_CYCLES: usize = 5;

/// Errors that can occur while running a simulation
#[derive(Debug, Error)]
pub enum SimulationError {
    /// Writing the transcript failed
    #[error("Failed to write simulation output: {0}")]
    Io(#[from] io::Error),
}

/// Simulation settings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// How many times every controller is cycled
    pub cycles: usize,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            cycles: DEFAULT_CYCLES,
        }
    }
}

/// A manager plus the settings and history of one run.
///
/// # Example
///
/// ```rust
/// use signalcycle::simulation::Simulation;
///
/// let mut simulation = Simulation::standard();
/// let mut out = Vec::new();
///
/// let history = simulation.run(&mut out).unwrap();
/// assert_eq!(history.len(), 10);
/// ```
#[derive(Debug)]
pub struct Simulation {
    config: SimulationConfig,
    manager: Manager,
    history: CycleHistory,
}

impl Simulation {
    /// Create a simulation with no controllers.
    pub fn new(config: SimulationConfig) -> Self {
        Self::with_manager(config, Manager::new())
    }

    pub fn with_manager(config: SimulationConfig, manager: Manager) -> Self {
        Self {
            config,
            manager,
            history: CycleHistory::new(),
        }
    }

    /// Default settings with one Urban and one Pedestrian controller.
    pub fn standard() -> Self {
        let mut simulation = Self::new(SimulationConfig::default());
        simulation
            .manager
            .add_controller(Controller::new(ControllerKind::Urban));
        simulation
            .manager
            .add_controller(Controller::new(ControllerKind::Pedestrian));
        simulation
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn manager(&self) -> &Manager {
        &self.manager
    }

    pub fn manager_mut(&mut self) -> &mut Manager {
        &mut self.manager
    }

    pub fn history(&self) -> &CycleHistory {
        &self.history
    }

    /// Run every configured cycle, writing the transcript to `out`.
    ///
    /// Each cycle advances all controllers in insertion order and appends
    /// one transition per controller to the history. The history is kept
    /// across runs, like the controllers' positions, so a second run
    /// continues both. If writing fails, every advance made so far is
    /// still recorded.
    pub fn run<W: Write>(&mut self, out: &mut W) -> Result<&CycleHistory, SimulationError> {
        info!(
            cycles = self.config.cycles,
            controllers = self.manager.controller_count(),
            "simulation starting"
        );

        writeln!(out, "Starting Traffic Light Simulation")?;
        writeln!(out)?;

        for cycle in 1..=self.config.cycles {
            debug!(cycle, "running cycle");
            writeln!(out)?;
            writeln!(out, "Cycle {cycle}:")?;

            self.manager.cycle_all_into(out, &mut self.history)?;
        }

        writeln!(out)?;
        writeln!(out, "Simulation Complete")?;
        out.flush()?;

        info!(events = self.history.len(), "simulation complete");
        Ok(&self.history)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_runs_five_cycles() {
        assert_eq!(SimulationConfig::default().cycles, 5);
    }

    #[test]
    fn config_serializes_correctly() {
        let config = SimulationConfig { cycles: 12 };
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: SimulationConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }

    #[test]
    fn second_run_continues_history() {
        let mut simulation = Simulation::standard();
        let mut out = Vec::new();

        simulation.run(&mut out).unwrap();
        let history = simulation.run(&mut out).unwrap();

        assert_eq!(history.len(), 20);
        let urban = simulation.manager().get_controller(0).unwrap();
        assert_eq!(urban.cycles(), 10);
        assert_eq!(simulation.history().path(urban.id()).len(), 11);
    }

    #[test]
    fn standard_adds_urban_then_pedestrian() {
        let simulation = Simulation::standard();
        let kinds: Vec<_> = simulation.manager().iter().map(Controller::kind).collect();
        assert_eq!(
            kinds,
            [Some(ControllerKind::Urban), Some(ControllerKind::Pedestrian)]
        );
    }

    #[test]
    fn empty_simulation_prints_only_framing() {
        let mut simulation = Simulation::new(SimulationConfig { cycles: 2 });
        let mut out = Vec::new();

        let history = simulation.run(&mut out).unwrap();

        assert!(history.is_empty());
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Starting Traffic Light Simulation\n\n\nCycle 1:\n\nCycle 2:\n\nSimulation Complete\n"
        );
    }

    #[test]
    fn zero_cycles_leaves_controllers_untouched() {
        let mut simulation = Simulation::with_manager(SimulationConfig { cycles: 0 }, {
            let mut manager = Manager::new();
            manager.add_controller(Controller::new(ControllerKind::Urban));
            manager
        });
        let mut out = Vec::new();

        simulation.run(&mut out).unwrap();

        assert_eq!(
            simulation.manager().get_controller(0).unwrap().current_color(),
            "RED"
        );
    }

    #[test]
    fn manager_mut_changes_the_run() {
        let mut simulation = Simulation::standard();
        simulation.manager_mut().remove_controller(0).unwrap();
        let mut out = Vec::new();

        let history = simulation.run(&mut out).unwrap();

        assert_eq!(history.len(), 5);
        assert!(history.transitions().iter().all(|t| t.label == "Pedestrian"));
    }
}
