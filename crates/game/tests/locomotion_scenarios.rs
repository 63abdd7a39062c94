//! End-to-end locomotion runs through the sandbox simulation.

use strider_game::input::{ActionInput, MovementInput};
use strider_game::{Level, LocomotionState, PlayerInput, Simulation, SimulationConfig, TickEvent};

const TRACK_SPAWN: usize = 1;
const WALL_SPAWN: usize = 0;
const LEDGE_SPAWN: usize = 2;

fn forward(sprint: bool, jump: bool) -> PlayerInput {
    PlayerInput {
        movement: MovementInput {
            forward: true,
            ..Default::default()
        },
        actions: ActionInput {
            sprint,
            jump,
            ..Default::default()
        },
        ..Default::default()
    }
}

fn sim_with_player(spawn: usize) -> Simulation {
    let mut sim = Simulation::new(SimulationConfig::default(), Level::test_arena());
    sim.add_player_at("runner", spawn);
    sim
}

fn horizontal_speed(sim: &Simulation) -> f32 {
    let v = sim.players[0].velocity();
    (v.x * v.x + v.z * v.z).sqrt()
}

#[test]
fn sprint_drains_stamina_then_walks_until_recovered() {
    let mut sim = sim_with_player(TRACK_SPAWN);
    let input = forward(true, false);

    // One tick to leave Idle, then five seconds of sprint
    sim.tick(&[input.clone()]);
    for _ in 0..290 {
        sim.tick(&[input.clone()]);
        assert!((horizontal_speed(&sim) - 12.0).abs() < 1e-3);
    }
    assert!(!sim.players[0].stamina().is_exhausted());

    // Around the five second mark the bar runs dry
    for _ in 0..20 {
        sim.tick(&[input.clone()]);
    }
    let stamina = sim.players[0].stamina();
    assert!(stamina.is_exhausted());
    assert!(stamina.current() < 0.5);
    assert!((horizontal_speed(&sim) - 5.0).abs() < 1e-3);

    // Holding sprint does nothing until a third of the bar is back
    for _ in 0..100 {
        sim.tick(&[input.clone()]);
    }
    assert!(sim.players[0].stamina().can_sprint());
    sim.tick(&[input.clone()]);
    assert!((horizontal_speed(&sim) - 12.0).abs() < 1e-3);

    assert_eq!(sim.players[0].state(), LocomotionState::Running);
    assert!(sim.players[0].on_ground());
}

#[test]
fn sprint_runs_through_the_track_zone() {
    let mut sim = sim_with_player(TRACK_SPAWN);
    let input = forward(true, false);

    let mut entered = Vec::new();
    for _ in 0..240 {
        for event in sim.tick(&[input.clone()]) {
            if let TickEvent::EnteredZone { zone, .. } = event {
                entered.push(zone);
            }
        }
    }

    assert_eq!(entered, ["track"]);
}

#[test]
fn jump_cycle_returns_to_running() {
    let mut sim = sim_with_player(TRACK_SPAWN);

    let mut states = Vec::new();
    for tick in 0..240 {
        let input = forward(false, tick == 10);
        for event in sim.tick(&[input]) {
            if let TickEvent::Transition { transition, .. } = event {
                states.push(transition.to);
            }
        }
    }

    assert_eq!(
        states,
        [
            LocomotionState::Running,
            LocomotionState::Jumping,
            LocomotionState::Falling,
            LocomotionState::Idle,
            LocomotionState::Running,
        ]
    );
    assert!(sim.players[0].on_ground());
}

#[test]
fn jump_carries_momentum_plus_air_control() {
    let mut sim = sim_with_player(TRACK_SPAWN);

    for tick in 0..=12 {
        sim.tick(&[forward(false, tick == 10)]);
    }

    assert_eq!(sim.players[0].state(), LocomotionState::Falling);
    // Walk speed carried from launch plus the clamped steer
    assert!((horizontal_speed(&sim) - 7.0).abs() < 1e-3);
    assert!(sim.players[0].velocity().y > 0.0);
}

#[test]
fn airborne_wall_hit_kills_horizontal_motion() {
    let mut sim = sim_with_player(WALL_SPAWN);

    let mut stopped_in_air = false;
    for tick in 0..120 {
        sim.tick(&[forward(false, tick == 10)]);

        let player = &sim.players[0];
        if player.state() == LocomotionState::Falling && horizontal_speed(&sim) == 0.0 {
            stopped_in_air = true;
            assert_eq!(player.controller.launch_velocity(), glam::Vec3::ZERO);
            break;
        }
    }
    assert!(stopped_in_air);

    // Never passes through the wall, whose face is at z=6
    for _ in 0..240 {
        sim.tick(&[forward(false, false)]);
        assert!(sim.players[0].position().z < 5.51);
    }
    assert!(sim.players[0].on_ground());
}

#[test]
fn walking_off_a_ledge_falls_without_jumping() {
    let mut sim = sim_with_player(LEDGE_SPAWN);

    let mut states = Vec::new();
    for _ in 0..120 {
        for event in sim.tick(&[forward(false, false)]) {
            if let TickEvent::Transition { transition, .. } = event {
                states.push(transition.to);
            }
        }
    }

    assert_eq!(
        &states[..3],
        [
            LocomotionState::Running,
            LocomotionState::Falling,
            LocomotionState::Idle,
        ]
    );
    assert!(!states.contains(&LocomotionState::Jumping));
    // Down on the floor, not the ledge
    assert!(sim.players[0].position().y < 1.1);
}

#[test]
fn idle_player_stays_put_and_regenerates() {
    let mut sim = sim_with_player(WALL_SPAWN);
    let start = sim.players[0].position();

    for _ in 0..120 {
        let events = sim.tick(&[PlayerInput::default()]);
        assert!(events
            .iter()
            .all(|e| !matches!(e, TickEvent::Transition { .. })));
    }

    let player = &sim.players[0];
    assert_eq!(player.state(), LocomotionState::Idle);
    assert!((player.position() - start).length() < 0.01);
    assert_eq!(player.stamina().current(), player.stamina().max());
}
