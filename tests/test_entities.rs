use flappy_block::entities::*;

fn pipe(x: f32, top_height: f32) -> Obstacle {
    Obstacle { x, top_height, bottom_y: top_height + 150.0, passed: false }
}

#[test]
fn status_eq() {
    assert_eq!(GameStatus::Running, GameStatus::Running);
    assert_ne!(GameStatus::Running, GameStatus::GameOver);
}

// ── Rect ──────────────────────────────────────────────────────────────────────

#[test]
fn rect_edges() {
    let r = Rect::new(10.0, 20.0, 30.0, 40.0);
    assert_eq!(r.right(), 40.0);
    assert_eq!(r.bottom(), 60.0);
}

#[test]
fn rect_overlap_is_symmetric() {
    let a = Rect::new(0.0, 0.0, 10.0, 10.0);
    let b = Rect::new(5.0, 5.0, 10.0, 10.0);
    assert!(a.intersects(&b));
    assert!(b.intersects(&a));
}

#[test]
fn rect_shared_edge_is_not_overlap() {
    let a = Rect::new(0.0, 0.0, 10.0, 10.0);
    let right = Rect::new(10.0, 0.0, 10.0, 10.0);
    let below = Rect::new(0.0, 10.0, 10.0, 10.0);
    assert!(!a.intersects(&right));
    assert!(!a.intersects(&below));
}

#[test]
fn rect_tiny_overlap_counts() {
    let a = Rect::new(0.0, 0.0, 10.0, 10.0);
    let b = Rect::new(9.5, 9.5, 10.0, 10.0);
    assert!(a.intersects(&b));
}

// ── Obstacle geometry ─────────────────────────────────────────────────────────

#[test]
fn obstacle_rects_span_ceiling_and_floor() {
    let o = pipe(100.0, 120.0);
    assert_eq!(o.top_rect(60.0), Rect::new(100.0, 0.0, 60.0, 120.0));
    assert_eq!(o.bottom_rect(60.0, 500.0), Rect::new(100.0, 270.0, 60.0, 230.0));
}

#[test]
fn player_bounds_match_fields() {
    let p = Player { x: 80.0, y: 250.0, width: 35.0, height: 30.0, velocity: 2.0 };
    assert_eq!(p.bounds(), Rect::new(80.0, 250.0, 35.0, 30.0));
}

#[test]
fn game_state_clone_is_independent() {
    let original = GameState {
        player: Player { x: 80.0, y: 250.0, width: 35.0, height: 30.0, velocity: 0.0 },
        obstacles: Vec::new(),
        score: 0,
        status: GameStatus::Running,
        frame: 0,
    };
    let mut cloned = original.clone();

    cloned.player.y = 10.0;
    cloned.score = 7;
    cloned.obstacles.push(pipe(5.0, 60.0));

    assert_eq!(original.player.y, 250.0);
    assert_eq!(original.score, 0);
    assert!(original.obstacles.is_empty());
}
