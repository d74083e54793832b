use glam::Vec3;
use steer::{DebugShape, SteeringAgent, SteeringOutput, Wander};
use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One agent's steering decision for one tick.
///
/// Plain data: recorded during simulation and rendered later by tooling.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SteeringSample {
    pub tick: u64,
    pub agent: u64,
    pub position: Vec3,
    pub forward: Vec3,
    pub velocity: Vec3,
    pub circle_center: Vec3,
    pub target: Vec3,
    pub desired_velocity: Vec3,
    pub steering_velocity: Vec3,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Vec::is_empty"))]
    pub shapes: Vec<DebugShape>,
}

impl SteeringSample {
    /// Snapshot a wander update.
    ///
    /// `agent` must be the pose the update was computed from, i.e. captured
    /// before the motion integrator moves it.
    pub fn capture(
        tick: u64,
        id: u64,
        agent: &SteeringAgent,
        wander: &Wander,
        output: SteeringOutput,
    ) -> Self {
        Self {
            tick,
            agent: id,
            position: agent.position,
            forward: agent.forward,
            velocity: agent.velocity,
            circle_center: wander.circle_center(agent),
            target: wander.previous_target(),
            desired_velocity: output.desired_velocity,
            steering_velocity: output.steering_velocity,
            shapes: Vec::new(),
        }
    }

    pub fn with_shapes(mut self, shapes: Vec<DebugShape>) -> Self {
        self.shapes = shapes;
        self
    }
}

#[derive(Debug, Error)]
pub enum TraceError {
    #[error("failed to write trace: {0}")]
    Io(#[from] std::io::Error),

    #[cfg(feature = "serde")]
    #[error("failed to encode trace sample: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("trace sink closed after an earlier write error")]
    Closed,
}

pub trait TraceSink {
    fn emit(&mut self, sample: SteeringSample);

    fn flush(&mut self) -> Result<(), TraceError> {
        Ok(())
    }

    /// True once the sink has stopped accepting samples.
    fn is_closed(&self) -> bool {
        false
    }
}

#[derive(Debug, Default)]
pub struct NullTraceSink;

impl TraceSink for NullTraceSink {
    fn emit(&mut self, _sample: SteeringSample) {}
}

#[derive(Debug, Default)]
pub struct VecTraceSink {
    pub samples: Vec<SteeringSample>,
}

impl TraceSink for VecTraceSink {
    fn emit(&mut self, sample: SteeringSample) {
        self.samples.push(sample);
    }
}

#[derive(Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TraceLog {
    pub samples: Vec<SteeringSample>,
}

impl TraceLog {
    pub fn push(&mut self, sample: SteeringSample) {
        self.samples.push(sample);
    }

    /// Samples for one agent, in tick order.
    pub fn for_agent(&self, agent: u64) -> impl Iterator<Item = &SteeringSample> + '_ {
        self.samples.iter().filter(move |s| s.agent == agent)
    }
}

impl TraceSink for TraceLog {
    fn emit(&mut self, sample: SteeringSample) {
        self.push(sample);
    }
}

/// Writes each sample as one JSON object per line.
///
/// `emit` cannot fail, so the first write error closes the sink: every later
/// sample is dropped, since the failed one may have left a partial line behind.
/// The next `flush` returns the error itself and later flushes return
/// [`TraceError::Closed`].
#[cfg(feature = "serde")]
#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
pub struct JsonLinesSink<W: std::io::Write> {
    writer: W,
    written: u64,
    error: Option<TraceError>,
    closed: bool,
}

#[cfg(feature = "serde")]
impl<W: std::io::Write> JsonLinesSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            written: 0,
            error: None,
            closed: false,
        }
    }

    pub fn written(&self) -> u64 {
        self.written
    }

    pub fn last_error(&self) -> Option<&TraceError> {
        self.error.as_ref()
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_sample(&mut self, sample: &SteeringSample) -> Result<(), TraceError> {
        serde_json::to_writer(&mut self.writer, sample)?;
        self.writer.write_all(b"\n")?;
        Ok(())
    }
}

#[cfg(feature = "serde")]
impl<W: std::io::Write> TraceSink for JsonLinesSink<W> {
    fn emit(&mut self, sample: SteeringSample) {
        if self.closed {
            return;
        }
        match self.write_sample(&sample) {
            Ok(()) => self.written += 1,
            Err(err) => {
                self.error = Some(err);
                self.closed = true;
            }
        }
    }

    fn flush(&mut self) -> Result<(), TraceError> {
        if let Some(err) = self.error.take() {
            return Err(err);
        }
        if self.closed {
            return Err(TraceError::Closed);
        }
        self.writer.flush()?;
        Ok(())
    }

    fn is_closed(&self) -> bool {
        self.closed
    }
}
