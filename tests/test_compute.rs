use flappy_block::compute::*;
use flappy_block::config::GameConfig;
use flappy_block::entities::*;

use rand::rngs::StdRng;
use rand::SeedableRng;

fn cfg() -> GameConfig {
    GameConfig::default()
}

fn make_state() -> GameState {
    init_state(&cfg())
}

fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

/// Pipe pair with the classic 150px gap.
fn pipe(x: f32, top_height: f32) -> Obstacle {
    Obstacle { x, top_height, bottom_y: top_height + 150.0, passed: false }
}

// ── init_state ────────────────────────────────────────────────────────────────

#[test]
fn init_state_player_position() {
    let s = make_state();
    assert_eq!(s.player.x, 80.0);
    assert_eq!(s.player.y, 250.0);
    assert_eq!(s.player.width, 35.0);
    assert_eq!(s.player.height, 30.0);
    assert_eq!(s.player.velocity, 0.0);
}

#[test]
fn init_state_empty_session() {
    let s = make_state();
    assert!(s.obstacles.is_empty());
    assert_eq!(s.score, 0);
    assert_eq!(s.frame, 0);
    assert_eq!(s.status, GameStatus::Running);
}

// ── integrate / flap ──────────────────────────────────────────────────────────

#[test]
fn gravity_step_from_rest() {
    let mut s = make_state();
    let motion = integrate(&mut s.player, &cfg());
    assert_eq!(motion, Motion::Airborne);
    assert_eq!(s.player.velocity, 0.5);
    assert_eq!(s.player.y, 250.5);
}

#[test]
fn flap_then_step() {
    let mut s = make_state();
    flap(&mut s.player, &cfg());
    assert_eq!(s.player.velocity, -9.0);
    integrate(&mut s.player, &cfg());
    assert_eq!(s.player.velocity, -8.5);
    assert_eq!(s.player.y, 241.5);
}

#[test]
fn flap_overrides_falling_velocity() {
    let mut s = make_state();
    s.player.velocity = 12.0;
    flap(&mut s.player, &cfg());
    assert_eq!(s.player.velocity, -9.0);
}

#[test]
fn ceiling_clamps_without_ending() {
    let mut s = make_state();
    s.player.y = 2.0;
    s.player.velocity = -9.0;
    let motion = integrate(&mut s.player, &cfg());
    assert_eq!(motion, Motion::HitCeiling);
    assert_eq!(s.player.y, 0.0);
    assert_eq!(s.player.velocity, 0.0);
}

#[test]
fn just_above_floor_is_airborne() {
    let mut s = make_state();
    s.player.y = 469.0; // bottom edge 499.5 after the step
    assert_eq!(integrate(&mut s.player, &cfg()), Motion::Airborne);
    assert_eq!(s.player.y, 469.5);
}

#[test]
fn touching_floor_is_ground_hit() {
    let mut s = make_state();
    s.player.y = 469.5; // bottom edge lands exactly on 500
    let motion = integrate(&mut s.player, &cfg());
    assert_eq!(motion, Motion::HitGround);
    assert_eq!(s.player.y, 470.0);
    assert_eq!(s.player.velocity, 0.0);
}

#[test]
fn falling_through_floor_is_clamped() {
    let mut s = make_state();
    s.player.y = 460.0;
    s.player.velocity = 40.0;
    assert_eq!(integrate(&mut s.player, &cfg()), Motion::HitGround);
    assert_eq!(s.player.y, 470.0);
    assert_eq!(s.player.velocity, 0.0);
}

#[test]
fn player_stays_in_bounds_while_flying() {
    let config = cfg();
    let mut s = make_state();
    for frame in 0..2_000 {
        if frame % 17 == 0 {
            flap(&mut s.player, &config);
        }
        let motion = integrate(&mut s.player, &config);
        assert!(s.player.y >= 0.0);
        assert!(s.player.y <= config.field_height - s.player.height);
        if motion == Motion::HitGround {
            break;
        }
    }
}

// ── generate_obstacle ─────────────────────────────────────────────────────────

#[test]
fn generated_gap_within_range() {
    let config = cfg();
    let mut rng = seeded_rng();
    let mut lowest = f32::MAX;
    let mut highest = f32::MIN;
    for _ in 0..10_000 {
        let o = generate_obstacle(&config, &mut rng);
        assert!(o.top_height >= 50.0 && o.top_height <= 300.0);
        assert_eq!(o.top_height.fract(), 0.0);
        assert_eq!(o.bottom_y, o.top_height + 150.0);
        assert_eq!(o.x, 400.0);
        assert!(!o.passed);
        lowest = lowest.min(o.top_height);
        highest = highest.max(o.top_height);
    }
    // Both ends of the inclusive range are reachable
    assert_eq!(lowest, 50.0);
    assert_eq!(highest, 300.0);
}

#[test]
fn generation_is_deterministic_for_a_seed() {
    let config = cfg();
    let mut a = seeded_rng();
    let mut b = seeded_rng();
    for _ in 0..20 {
        assert_eq!(generate_obstacle(&config, &mut a), generate_obstacle(&config, &mut b));
    }
}

#[test]
fn degenerate_range_uses_min_height() {
    let config = GameConfig { pipe_gap: 400.0, ..cfg() }; // range [50, 50]
    let o = generate_obstacle(&config, &mut seeded_rng());
    assert_eq!(o.top_height, 50.0);
    assert_eq!(o.bottom_y, 450.0);
}

// ── maybe_spawn ───────────────────────────────────────────────────────────────

#[test]
fn spawns_only_on_interval() {
    let config = cfg();
    let mut rng = seeded_rng();
    let mut obstacles = Vec::new();
    assert!(!maybe_spawn(&mut obstacles, 99, &config, &mut rng));
    assert!(obstacles.is_empty());
    assert!(maybe_spawn(&mut obstacles, 100, &config, &mut rng));
    assert!(!maybe_spawn(&mut obstacles, 101, &config, &mut rng));
    assert!(maybe_spawn(&mut obstacles, 200, &config, &mut rng));
    assert_eq!(obstacles.len(), 2);
}

// ── collides ──────────────────────────────────────────────────────────────────

#[test]
fn inside_gap_is_safe() {
    let s = make_state(); // player 80..115 x 250..280
    assert!(!collides(&s.player, &pipe(60.0, 200.0), &cfg()));
}

#[test]
fn gap_edges_are_safe() {
    let mut s = make_state();
    s.player.y = 200.0; // top edge on the top pipe's lip
    assert!(!collides(&s.player, &pipe(60.0, 200.0), &cfg()));
    s.player.y = 320.0; // bottom edge on the bottom pipe's lip
    assert!(!collides(&s.player, &pipe(60.0, 200.0), &cfg()));
}

#[test]
fn any_vertical_overlap_hits() {
    let mut s = make_state();
    s.player.y = 199.5;
    assert!(collides(&s.player, &pipe(60.0, 200.0), &cfg()));
    s.player.y = 320.5;
    assert!(collides(&s.player, &pipe(60.0, 200.0), &cfg()));
}

#[test]
fn horizontal_edges_are_exact() {
    let mut s = make_state();
    s.player.y = 100.0; // level with the top pipe
    // pipe's left edge touches the player's right edge
    assert!(!collides(&s.player, &pipe(115.0, 200.0), &cfg()));
    assert!(collides(&s.player, &pipe(114.0, 200.0), &cfg()));
    // pipe's right edge touches the player's left edge
    assert!(!collides(&s.player, &pipe(20.0, 200.0), &cfg()));
    assert!(collides(&s.player, &pipe(21.0, 200.0), &cfg()));
}

// ── advance_obstacles ─────────────────────────────────────────────────────────

#[test]
fn pipes_scroll_left() {
    let s = make_state();
    let mut obstacles = vec![pipe(400.0, 200.0), pipe(250.0, 100.0)];
    let mut score = 0;
    advance_obstacles(&mut obstacles, &s.player, &mut score, &cfg());
    assert_eq!(obstacles[0].x, 397.0);
    assert_eq!(obstacles[1].x, 247.0);
}

#[test]
fn pass_scores_once() {
    let s = make_state();
    // After the move: x=19, right edge 79 < player left 80
    let mut obstacles = vec![pipe(22.0, 200.0)];
    let mut score = 0;

    let report = advance_obstacles(&mut obstacles, &s.player, &mut score, &cfg());
    assert_eq!(report.scored, 1);
    assert_eq!(score, 1);
    assert!(obstacles[0].passed);

    let report = advance_obstacles(&mut obstacles, &s.player, &mut score, &cfg());
    assert_eq!(report.scored, 0);
    assert_eq!(score, 1);
}

#[test]
fn right_edge_level_with_player_does_not_score() {
    let s = make_state();
    let mut obstacles = vec![pipe(23.0, 200.0)]; // right edge ends at exactly 80
    let mut score = 0;
    advance_obstacles(&mut obstacles, &s.player, &mut score, &cfg());
    assert_eq!(score, 0);
    assert!(!obstacles[0].passed);
}

#[test]
fn prune_boundary() {
    let s = make_state();
    let mut a = pipe(-2.0, 200.0); // moves to -5, right edge 55
    let mut b = pipe(-58.0, 200.0); // moves to -61, right edge -1
    a.passed = true;
    b.passed = true;
    let mut obstacles = vec![a, b];
    let mut score = 0;

    let report = advance_obstacles(&mut obstacles, &s.player, &mut score, &cfg());
    assert_eq!(report.pruned, 1);
    assert_eq!(obstacles.len(), 1);
    assert_eq!(obstacles[0].x, -5.0);
}

#[test]
fn right_edge_at_zero_is_kept() {
    let s = make_state();
    let mut p = pipe(-57.0, 200.0); // moves to -60, right edge exactly 0
    p.passed = true;
    let mut obstacles = vec![p];
    let mut score = 0;
    advance_obstacles(&mut obstacles, &s.player, &mut score, &cfg());
    assert_eq!(obstacles.len(), 1);
}

#[test]
fn collision_blocks_scoring_but_still_prunes() {
    let s = make_state(); // player y 250..280
    let hitting = pipe(83.0, 300.0); // moves onto the player, top pipe covers it
    let scorable = pipe(10.0, 200.0);
    let mut gone = pipe(-58.0, 200.0);
    gone.passed = true;
    let mut obstacles = vec![hitting, scorable, gone];
    let mut score = 0;

    let report = advance_obstacles(&mut obstacles, &s.player, &mut score, &cfg());
    assert!(report.collided);
    assert_eq!(report.scored, 0);
    assert_eq!(score, 0);
    assert_eq!(report.pruned, 1);
    assert_eq!(obstacles.len(), 2);
}

#[test]
fn clear_run_reports_nothing() {
    let s = make_state();
    let mut obstacles = vec![pipe(300.0, 200.0)];
    let mut score = 0;
    let report = advance_obstacles(&mut obstacles, &s.player, &mut score, &cfg());
    assert_eq!(report, ObstacleReport::default());
}
