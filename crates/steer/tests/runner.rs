use steer::{
    RecordingDebugDraw, Seek, SteerError, SteeringAgent, SteeringBehaviour, SteeringRunner, Vec3,
    Wander, WanderConfig,
};
use steer_core::{seeded_rng, TickContext};

fn wander() -> Wander {
    Wander::new(WanderConfig::default()).unwrap()
}

fn populate(runner: &mut SteeringRunner<Wander>, ids: &[u64]) {
    for &id in ids {
        let agent = SteeringAgent::new(80.0, 200.0).at(Vec3::new(id as f32 * 10.0, 0.0, 0.0));
        runner.insert(id, agent, wander()).unwrap();
    }
}

fn run(runner: &mut SteeringRunner<Wander>, ticks: u64) {
    let mut ctx = TickContext::new(0, 0.1, 42);
    for _ in 0..ticks {
        runner.step(&ctx);
        ctx = ctx.next();
    }
}

#[test]
fn runner_is_deterministic_for_same_inputs() {
    let mut a = SteeringRunner::new();
    let mut b = SteeringRunner::new();
    populate(&mut a, &[1, 2, 3]);
    populate(&mut b, &[1, 2, 3]);

    run(&mut a, 40);
    run(&mut b, 40);

    let pa: Vec<_> = a.agents().map(|e| e.agent).collect();
    let pb: Vec<_> = b.agents().map(|e| e.agent).collect();
    assert_eq!(pa, pb);
}

#[test]
fn runner_is_invariant_to_insertion_order() {
    let mut a = SteeringRunner::new();
    let mut b = SteeringRunner::new();
    populate(&mut a, &[1, 2, 3, 4]);
    populate(&mut b, &[4, 2, 3, 1]);

    run(&mut a, 25);
    run(&mut b, 25);

    let ids: Vec<_> = b.agents().map(|e| e.id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4]);
    for (ea, eb) in a.agents().zip(b.agents()) {
        assert_eq!(ea.id, eb.id);
        assert_eq!(ea.agent, eb.agent);
    }
}

#[test]
fn runner_rejects_duplicate_ids() {
    let mut runner = SteeringRunner::new();
    populate(&mut runner, &[7]);

    let err = runner
        .insert(7, SteeringAgent::default(), wander())
        .unwrap_err();
    assert_eq!(err, SteerError::DuplicateAgent(7));
    assert_eq!(runner.len(), 1);
}

#[test]
fn runner_starts_behaviours_on_first_step() {
    let mut runner = SteeringRunner::new();
    populate(&mut runner, &[1]);
    assert!(!runner.get(1).unwrap().is_started());

    let outputs = runner.step(&TickContext::new(0, 0.1, 0));
    assert_eq!(outputs.len(), 1);
    assert_eq!(outputs[0].0, 1);

    let entry = runner.get(1).unwrap();
    assert!(entry.is_started());
    assert!(entry.behaviour.is_started());
    assert!(entry.agent.velocity.length() > 0.0);
}

#[test]
fn wanderers_move_and_keep_moving() {
    let mut runner = SteeringRunner::new();
    populate(&mut runner, &[1, 2]);
    let start: Vec<_> = runner.agents().map(|e| e.agent.position).collect();

    run(&mut runner, 100);

    for (entry, start) in runner.agents().zip(start) {
        assert!((entry.agent.position - start).length() > 1.0);
        assert!(entry.agent.velocity.length() <= entry.agent.max_speed + 1e-3);
    }
}

#[test]
fn remove_returns_agent_and_behaviour() {
    let mut runner = SteeringRunner::new();
    populate(&mut runner, &[1, 2]);

    let (agent, _) = runner.remove(1).unwrap();
    assert_eq!(agent.position, Vec3::new(10.0, 0.0, 0.0));
    assert!(runner.remove(1).is_none());
    assert_eq!(runner.len(), 1);
}

#[test]
fn runner_debug_draw_visits_every_agent() {
    let mut runner = SteeringRunner::new();
    populate(&mut runner, &[1, 2, 3]);
    run(&mut runner, 1);

    let mut draw = RecordingDebugDraw::default();
    runner.debug_draw(&mut draw);
    assert_eq!(draw.circles().count(), 3);
}

#[test]
fn seek_runner_closes_on_target() {
    let mut runner = SteeringRunner::new();
    let agent = SteeringAgent::new(5.0, 50.0);
    runner
        .insert(1, agent, Seek::new(Vec3::new(10.0, 0.0, 0.0)))
        .unwrap();

    let mut ctx = TickContext::new(0, 0.1, 0);
    for _ in 0..15 {
        runner.step(&ctx);
        ctx = ctx.next();
    }

    let entry = runner.get(1).unwrap();
    assert!(entry.agent.position.x > 2.0);
    assert!(entry.agent.velocity.x > 0.0);
    assert!(entry.agent.position.y.abs() < 1e-6);
}

#[test]
fn step_observed_sees_pose_before_motion() {
    let mut runner = SteeringRunner::new();
    populate(&mut runner, &[1, 2]);
    let ctx = TickContext::new(0, 0.1, 7);

    let mut seen = Vec::new();
    let outputs = runner.step_observed(&ctx, |entry, output| {
        let radius = entry.behaviour.config().circle_radius;
        let center = entry.behaviour.circle_center(&entry.agent);
        assert!(((entry.behaviour.previous_target() - center).length() - radius).abs() < 1e-2);
        seen.push((entry.id, entry.agent.position, output));
    });

    assert_eq!(seen.len(), 2);
    for ((id, before, output), (out_id, out)) in seen.iter().zip(&outputs) {
        assert_eq!(id, out_id);
        assert_eq!(output, out);
        assert_eq!(*before, Vec3::new(*id as f32 * 10.0, 0.0, 0.0));
        assert_ne!(runner.get(*id).unwrap().agent.position, *before);
    }
}

#[test]
fn runner_keeps_state_of_behaviour_started_before_insert() {
    let mut agent = SteeringAgent::new(80.0, 200.0);
    let mut behaviour = wander();
    behaviour.start(&mut agent, &mut seeded_rng(123));
    let heading = agent.forward;
    let target = behaviour.previous_target();

    let mut runner = SteeringRunner::new();
    runner.insert(1, agent, behaviour).unwrap();
    assert!(runner.get(1).unwrap().is_started());

    // dt = 0 keeps the pose fixed, so any heading change would come from `start`.
    runner.step(&TickContext::new(0, 0.0, 42));

    let entry = runner.get(1).unwrap();
    assert_eq!(entry.agent.forward, heading);
    let center = entry.behaviour.circle_center(&entry.agent);
    assert!(((entry.behaviour.previous_target() - center).length() - 150.0).abs() < 1e-2);
    // Jitter plus re-projection moves the seeded target by at most twice the jitter.
    assert!((entry.behaviour.previous_target() - target).length() <= 50.0 + 1e-3);
}
