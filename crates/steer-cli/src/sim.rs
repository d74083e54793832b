//! Headless wander simulation.

use anyhow::{bail, Result};
use steer::{RecordingDebugDraw, SteeringBehaviour, SteeringRunner, Vec3, Wander};
use steer_core::TickContext;
use steer_tools::{SteeringSample, TraceSink};

use crate::config::SimConfig;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimSummary {
    pub agents: u64,
    pub ticks: u64,
    pub samples: u64,
    /// Mean speed over all agents at the end of the run.
    pub mean_speed: f32,
    /// Largest distance any agent ended up from its spawn point.
    pub max_displacement: f32,
}

pub fn spawn_position(config: &SimConfig, index: u64) -> Vec3 {
    Vec3::new(index as f32 * config.sim.spawn_spacing, 0.0, 0.0)
}

pub fn build_runner(config: &SimConfig) -> Result<SteeringRunner<Wander>> {
    let template = config.agent.to_agent();
    let mut runner = SteeringRunner::new();
    for id in 0..config.sim.agents {
        let agent = template.at(spawn_position(config, id));
        runner.insert(id, agent, Wander::new(config.wander)?)?;
    }
    Ok(runner)
}

/// Run the simulation, emitting one sample per agent per tick into `sink`.
///
/// With `draw` set, each sample also carries the debug shapes its behaviour drew.
/// The run stops after the tick in which the sink closed, returning its error.
pub fn run(config: &SimConfig, sink: &mut dyn TraceSink, draw: bool) -> Result<SimSummary> {
    config.validate()?;
    let mut runner = build_runner(config)?;

    let mut ctx = TickContext::new(0, config.sim.dt_seconds, config.sim.seed);
    let mut samples = 0_u64;
    let mut recorder = RecordingDebugDraw::default();

    for _ in 0..config.sim.ticks {
        let tick = ctx.tick;
        runner.step_observed(&ctx, |entry, output| {
            let mut sample =
                SteeringSample::capture(tick, entry.id, &entry.agent, &entry.behaviour, output);
            if draw {
                recorder.clear();
                entry.behaviour.debug_draw(&entry.agent, &mut recorder);
                sample = sample.with_shapes(recorder.shapes.clone());
            }
            sink.emit(sample);
            samples += 1;
        });
        if sink.is_closed() {
            sink.flush()?;
            bail!("trace sink closed at tick {tick}");
        }
        tracing::trace!(tick, "simulated tick");
        ctx = ctx.next();
    }
    sink.flush()?;

    let (speed_sum, max_displacement) = runner.agents().fold((0.0_f32, 0.0_f32), |(sum, max), e| {
        let displacement = e.agent.position.distance(spawn_position(config, e.id));
        (sum + e.agent.velocity.length(), max.max(displacement))
    });
    let mean_speed = if runner.is_empty() {
        0.0
    } else {
        speed_sum / runner.len() as f32
    };

    Ok(SimSummary {
        agents: runner.len() as u64,
        ticks: config.sim.ticks,
        samples,
        mean_speed,
        max_displacement,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use steer_tools::{JsonLinesSink, TraceError, TraceLog, TraceSink};

    /// Accepts a fixed number of samples, then reports itself closed.
    struct ClosingSink {
        capacity: usize,
        emitted: usize,
    }

    impl TraceSink for ClosingSink {
        fn emit(&mut self, _sample: SteeringSample) {
            self.emitted += 1;
        }

        fn flush(&mut self) -> Result<(), TraceError> {
            if self.is_closed() {
                Err(TraceError::Closed)
            } else {
                Ok(())
            }
        }

        fn is_closed(&self) -> bool {
            self.emitted >= self.capacity
        }
    }

    fn small() -> SimConfig {
        let mut config = SimConfig::default();
        config.sim.agents = 3;
        config.sim.ticks = 20;
        config.sim.seed = 5;
        config
    }

    #[test]
    fn emits_one_sample_per_agent_per_tick() {
        let mut log = TraceLog::default();
        let summary = run(&small(), &mut log, false).unwrap();

        assert_eq!(summary.samples, 60);
        assert_eq!(log.samples.len(), 60);
        assert_eq!(log.for_agent(2).count(), 20);
        assert!(log.samples.iter().all(|s| s.shapes.is_empty()));
    }

    #[test]
    fn samples_are_taken_before_motion() {
        let config = small();
        let mut log = TraceLog::default();
        run(&config, &mut log, false).unwrap();

        for id in 0..3 {
            let first = log.for_agent(id).next().unwrap();
            assert_eq!(first.tick, 0);
            assert_eq!(first.position, spawn_position(&config, id));
            assert!(((first.target - first.circle_center).length() - 150.0).abs() < 1e-2);
        }
    }

    #[test]
    fn draw_attaches_circle_and_lines() {
        let mut log = TraceLog::default();
        run(&small(), &mut log, true).unwrap();

        for sample in &log.samples {
            assert_eq!(sample.shapes.len(), 3);
        }
    }

    #[test]
    fn same_seed_same_trace() {
        let mut a = TraceLog::default();
        let mut b = TraceLog::default();
        run(&small(), &mut a, false).unwrap();
        run(&small(), &mut b, false).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn agents_move() {
        let mut log = TraceLog::default();
        let summary = run(&small(), &mut log, false).unwrap();
        assert!(summary.mean_speed > 0.0);
        assert!(summary.max_displacement > 0.0);
    }

    #[test]
    fn json_lines_output_has_one_line_per_sample() {
        let mut sink = JsonLinesSink::new(Vec::new());
        let summary = run(&small(), &mut sink, false).unwrap();
        assert_eq!(sink.written(), summary.samples);

        let bytes = sink.into_inner();
        let text = String::from_utf8(bytes).unwrap();
        assert_eq!(text.lines().count(), 60);
        let first: serde_json::Value = serde_json::from_str(text.lines().next().unwrap()).unwrap();
        assert_eq!(first["tick"], 0);
    }

    #[test]
    fn invalid_config_is_rejected_before_running() {
        let mut config = small();
        config.wander.circle_radius = -5.0;
        let mut log = TraceLog::default();
        assert!(run(&config, &mut log, false).is_err());
        assert!(log.samples.is_empty());
    }

    #[test]
    fn closed_sink_stops_the_run_early() {
        let mut sink = ClosingSink {
            capacity: 4,
            emitted: 0,
        };
        let err = run(&small(), &mut sink, false).unwrap_err();

        assert!(matches!(err.downcast_ref::<TraceError>(), Some(TraceError::Closed)));
        // Closed during tick 1 (samples 4..6); nothing after that tick.
        assert_eq!(sink.emitted, 6);
    }
}
