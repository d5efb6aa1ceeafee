//! One simulation step
//!
//! Order within a tick: paddle, brick sweep, balls, particles. Each ball
//! moves, then checks bricks (first hit only), then walls, then the paddle.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;

use super::collision::{Bounds, clamp_axis, clamp_to_walls, overlaps, resolve_bounce};
use super::state::{Scene, StageEvent};
use crate::settings::BurstSettings;

/// Advance the scene by one tick
pub fn tick(scene: &mut Scene, bounds: Bounds, burst: &BurstSettings, rng: &mut Pcg32) {
    scene.time_ticks += 1;

    advance_bar(scene, bounds);
    sweep_bricks(scene, burst, rng);
    advance_balls(scene, bounds);
    advance_particles(scene);
}

/// Move the paddle and keep it between the side walls
pub fn advance_bar(scene: &mut Scene, bounds: Bounds) {
    let bar = &mut scene.bar;
    bar.advance();
    if let Some(x) = clamp_axis(bar.rect.x, bar.rect.width, bounds.width) {
        bar.rect.x = x;
    }
}

/// Remove bricks whose hit points ran out, bursting each one
///
/// Bricks hit this tick stay in place until the next sweep so later balls in
/// the same tick still bounce off them.
pub fn sweep_bricks(scene: &mut Scene, burst: &BurstSettings, rng: &mut Pcg32) {
    let mut destroyed = Vec::new();
    scene.bricks.retain(|brick| {
        if brick.is_destroyed() {
            destroyed.push(brick.rect.center());
            false
        } else {
            true
        }
    });

    if destroyed.is_empty() {
        return;
    }

    for center in destroyed {
        log::debug!("Brick destroyed at ({:.1}, {:.1})", center.x, center.y);
        scene.events.push(StageEvent::BrickDestroyed { center });
        blast(scene, center, burst, rng);
    }

    if scene.bricks.is_empty() {
        log::info!("Stage cleared after {} ticks", scene.time_ticks);
        scene.events.push(StageEvent::StageCleared);
    }
}

/// Move every ball and resolve its collisions
pub fn advance_balls(scene: &mut Scene, bounds: Bounds) {
    for ball in &mut scene.balls {
        ball.advance();

        // No sub-stepping: at most one brick per ball per tick
        if let Some(brick) = scene
            .bricks
            .iter_mut()
            .find(|brick| overlaps(&ball.rect, &brick.rect))
        {
            brick.impact();
            resolve_bounce(ball, &brick.rect);
        }

        clamp_to_walls(&mut ball.rect, &mut ball.vel, bounds);

        if overlaps(&ball.rect, &scene.bar.rect) {
            resolve_bounce(ball, &scene.bar.rect);
        }
    }
}

/// Move and fade particles, retiring burned-out ones to the pool
pub fn advance_particles(scene: &mut Scene) {
    let mut i = 0;
    while i < scene.particles.len() {
        if scene.particles[i].advance() {
            i += 1;
        } else {
            let particle = scene.particles.swap_remove(i);
            scene.pool.release(particle);
        }
    }
}

/// Spawn a burst of particles at `center`
pub fn blast(scene: &mut Scene, center: Vec2, burst: &BurstSettings, rng: &mut Pcg32) {
    let reused_before = scene.pool.reused();

    for _ in 0..burst.count {
        let angle = rng.random_range(0.0..std::f32::consts::TAU);
        let speed = burst.base_speed + burst.speed_jitter * rng.random::<f32>();
        let color = if burst.palette.is_empty() {
            Default::default()
        } else {
            burst.palette[rng.random_range(0..burst.palette.len())]
        };

        let particle = scene.pool.acquire(center, burst.size, angle, speed, color);
        scene.particles.push(particle);
    }

    log::debug!(
        "Burst of {} particles ({} reused)",
        burst.count,
        scene.pool.reused() - reused_before
    );
    scene.events.push(StageEvent::Burst {
        center,
        count: burst.count,
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    use crate::consts::MAX_LIGHT_LEVEL;
    use crate::sim::entity::{Ball, Brick, MoveBase};
    use crate::sim::layout::LayoutSpec;
    use crate::sim::rect::Rect;

    const BOUNDS: Bounds = Bounds {
        width: 480.0,
        height: 360.0,
    };

    fn empty_scene() -> Scene {
        let mut layout = LayoutSpec::classic();
        layout.balls.clear();
        layout.bricks.clear();
        Scene::load(&layout)
    }

    fn rng() -> Pcg32 {
        Pcg32::seed_from_u64(7)
    }

    #[test]
    fn test_one_hit_brick_is_swept_next_tick_with_one_burst() {
        let burst = BurstSettings::default();
        let mut rng = rng();
        let mut scene = empty_scene();
        scene.bricks.push(Brick::new(Rect::new(70.0, 20.0, 200.0, 100.0), 1));
        let center = scene.bricks[0].rect.center();

        // Ball one step below the brick, heading straight up
        let mut ball = Ball::new(Rect::new(10.0, 10.0, 230.0, 125.0), 8.0, -std::f32::consts::FRAC_PI_2);
        ball.vel.x = 0.0;
        scene.balls.push(ball);

        tick(&mut scene, BOUNDS, &burst, &mut rng);
        assert_eq!(scene.bricks.len(), 1, "removal waits for the next sweep");
        assert_eq!(scene.bricks[0].hit_points, 0);
        assert!(scene.balls[0].vel.y > 0.0);
        assert_eq!(scene.balls[0].rect.y, 120.0);
        assert!(scene.particles.is_empty());

        tick(&mut scene, BOUNDS, &burst, &mut rng);
        assert!(scene.bricks.is_empty());
        assert_eq!(scene.particles.len(), burst.count);

        let events = scene.drain_events();
        let bursts: Vec<_> = events
            .iter()
            .filter_map(|e| match e {
                StageEvent::Burst { center, count } => Some((*center, *count)),
                _ => None,
            })
            .collect();
        assert_eq!(bursts, vec![(center, burst.count)]);
        assert!(events.contains(&StageEvent::BrickDestroyed { center }));
        assert!(events.contains(&StageEvent::StageCleared));
    }

    /// Straight-up ball at `(x, y)` moving 8px per tick
    fn rising_ball(x: f32, y: f32) -> Ball {
        let mut ball = Ball::new(Rect::new(10.0, 10.0, x, y), 8.0, -std::f32::consts::FRAC_PI_2);
        ball.vel.x = 0.0;
        ball
    }

    #[test]
    fn test_ball_hits_only_first_overlapping_brick() {
        let burst = BurstSettings::default();
        let mut rng = rng();
        let mut scene = empty_scene();
        scene.bricks.push(Brick::new(Rect::new(20.0, 20.0, 100.0, 100.0), 1));
        scene.bricks.push(Brick::new(Rect::new(20.0, 20.0, 120.0, 100.0), 1));
        // Straddles the seam between the two bricks after moving
        scene.balls.push(rising_ball(115.0, 125.0));

        tick(&mut scene, BOUNDS, &burst, &mut rng);
        let hit_points: Vec<_> = scene.bricks.iter().map(|b| b.hit_points).collect();
        assert_eq!(hit_points, vec![0, 1]);
        assert!(scene.balls[0].vel.y > 0.0);
        assert_eq!(scene.balls[0].rect.y, 120.0);
    }

    #[test]
    fn test_spent_brick_still_blocks_later_balls_in_same_tick() {
        let burst = BurstSettings::default();
        let mut rng = rng();
        let mut scene = empty_scene();
        scene.bricks.push(Brick::new(Rect::new(70.0, 20.0, 200.0, 100.0), 1));
        scene.balls.push(rising_ball(210.0, 125.0));
        scene.balls.push(rising_ball(250.0, 125.0));

        tick(&mut scene, BOUNDS, &burst, &mut rng);
        assert_eq!(scene.bricks.len(), 1);
        assert_eq!(scene.bricks[0].hit_points, 0);
        for ball in &scene.balls {
            assert!(ball.vel.y > 0.0);
            assert_eq!(ball.rect.y, 120.0);
        }

        tick(&mut scene, BOUNDS, &burst, &mut rng);
        assert!(scene.bricks.is_empty());
        let destroyed = scene
            .drain_events()
            .iter()
            .filter(|e| matches!(e, StageEvent::BrickDestroyed { .. }))
            .count();
        assert_eq!(destroyed, 1);
        assert_eq!(scene.particles.len(), burst.count);
    }

    #[test]
    fn test_particles_retire_exactly_at_zero_light() {
        let burst = BurstSettings::default();
        let mut rng = rng();
        let mut scene = empty_scene();
        blast(&mut scene, Vec2::new(240.0, 180.0), &burst, &mut rng);
        assert_eq!(scene.particles.len(), burst.count);

        for t in 1..MAX_LIGHT_LEVEL {
            advance_particles(&mut scene);
            assert_eq!(scene.particles.len(), burst.count);
            assert!(scene.pool.is_empty());
            assert!(scene.particles.iter().all(|p| p.light_level == MAX_LIGHT_LEVEL - t));
        }

        advance_particles(&mut scene);
        assert!(scene.particles.is_empty());
        assert_eq!(scene.pool.len(), burst.count);
        assert!(scene.pool.iter().all(|p| p.light_level == 0));

        // Next burst draws entirely from the pool
        blast(&mut scene, Vec2::new(100.0, 100.0), &burst, &mut rng);
        assert!(scene.pool.is_empty());
        assert_eq!(scene.pool.created(), burst.count);
        assert_eq!(scene.pool.reused(), burst.count);
    }

    #[test]
    fn test_burst_is_deterministic_for_a_seed() {
        let burst = BurstSettings::default();
        let mut a = empty_scene();
        let mut b = empty_scene();
        blast(&mut a, Vec2::new(50.0, 50.0), &burst, &mut rng());
        blast(&mut b, Vec2::new(50.0, 50.0), &burst, &mut rng());
        assert_eq!(a.particles, b.particles);
        for p in &a.particles {
            assert!((0.0..std::f32::consts::TAU).contains(&p.angle));
            assert!(p.speed >= burst.base_speed && p.speed <= burst.base_speed + burst.speed_jitter);
            assert!(burst.palette.contains(&p.base_color));
        }
    }

    #[test]
    fn test_bar_clamps_at_side_walls() {
        let mut scene = empty_scene();
        scene.bar.rect.x = 2.0;
        scene.bar.move_base = MoveBase::Left;
        advance_bar(&mut scene, BOUNDS);
        assert_eq!(scene.bar.rect.x, 0.0);
        assert_eq!(scene.bar.move_base, MoveBase::Left);

        scene.bar.rect.x = BOUNDS.width - scene.bar.rect.width - 1.0;
        scene.bar.move_base = MoveBase::Right;
        advance_bar(&mut scene, BOUNDS);
        assert_eq!(scene.bar.rect.x, BOUNDS.width - scene.bar.rect.width);
    }

    #[test]
    fn test_ball_bounces_off_paddle() {
        let mut scene = empty_scene();
        let bar = scene.bar.rect.clone();
        let mut ball = Ball::new(Rect::new(10.0, 10.0, bar.x + 20.0, bar.y - 14.0), 6.0, std::f32::consts::FRAC_PI_2);
        ball.vel.x = 0.0;
        scene.balls.push(ball);

        advance_balls(&mut scene, BOUNDS);
        let ball = &scene.balls[0];
        assert_eq!(ball.rect.y, bar.y - 10.0);
        assert!(ball.vel.y < 0.0);
    }
}
