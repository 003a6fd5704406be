//! Shared motion model for every character
//!
//! Hero and enemies both own a [`Body`] and run it through [`apply_physics`]
//! once per tick. Velocities are in units per tick; gravity only pulls down and
//! platforms are one-way (you can jump up through them and land on top).

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::consts::*;

/// Which way a character faces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Facing {
    Left,
    #[default]
    Right,
}

impl Facing {
    /// -1 for left, +1 for right
    #[inline]
    pub fn sign(self) -> f32 {
        match self {
            Facing::Left => -1.0,
            Facing::Right => 1.0,
        }
    }

    /// Facing that looks from `from_x` toward `to_x` (ties look left)
    pub fn toward(from_x: f32, to_x: f32) -> Self {
        if from_x < to_x {
            Facing::Right
        } else {
            Facing::Left
        }
    }
}

/// What a character is currently doing. Exactly one is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Action {
    #[default]
    Idle,
    Run,
    Jump,
    Attack,
    Hurt,
}

/// Kinematic body: anchor position (bottom-center), velocity, sprite size
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Body {
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: Vec2,
    pub grounded: bool,
}

impl Body {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            size,
            grounded: false,
        }
    }

    /// Full sprite bounds
    pub fn bounds(&self) -> Rect {
        Rect::from_anchor(self.pos, self.size)
    }

    /// Shrunk rectangle used for every combat check; the sprite has
    /// transparent margins that shouldn't count as a hit
    pub fn hurtbox(&self) -> Rect {
        self.bounds().inflate(-HURTBOX_INSET_X, -HURTBOX_INSET_Y)
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y
    }

    /// Shift horizontally so the sprite stays inside [0, WIDTH]
    pub fn clamp_to_world(&mut self) {
        let half = self.size.x / 2.0;
        if self.pos.x - half < 0.0 {
            self.pos.x = half;
        }
        if self.pos.x + half > WIDTH {
            self.pos.x = WIDTH - half;
        }
    }
}

/// Advance a body by one tick: gravity, move, clamp, land
///
/// Landing only happens while falling. If several platforms qualify in the
/// same tick the first one in list order wins, which is not necessarily the
/// highest.
pub fn apply_physics(body: &mut Body, platforms: &[Rect]) {
    body.vel.y += GRAVITY;
    body.pos += body.vel;
    body.clamp_to_world();

    body.grounded = false;
    if body.vel.y <= 0.0 {
        return;
    }

    let rect = body.bounds();
    // Bottom edge before this tick's fall
    let prev_bottom = body.bottom() - body.vel.y;
    for plat in platforms {
        if rect.overlaps(plat) && prev_bottom <= plat.top() + LANDING_TOLERANCE {
            body.pos.y = plat.top();
            body.vel.y = 0.0;
            body.grounded = true;
            break;
        }
    }
}

/// Advance an animation accumulator by one tick for the given action
#[inline]
pub fn advance_anim(anim_timer: &mut f32, action: Action) {
    *anim_timer += if action == Action::Idle {
        ANIM_RATE_IDLE
    } else {
        ANIM_RATE_ACTIVE
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn ground() -> Vec<Rect> {
        vec![Rect::new(0.0, 660.0, WIDTH, 48.0)]
    }

    fn body_at(x: f32, y: f32) -> Body {
        Body::new(Vec2::new(x, y), Vec2::new(HERO_WIDTH, HERO_HEIGHT))
    }

    #[test]
    fn test_gravity_accumulates_in_air() {
        let mut body = body_at(300.0, 100.0);
        apply_physics(&mut body, &ground());
        assert_eq!(body.vel.y, 1.0);
        assert_eq!(body.pos.y, 101.0);
        apply_physics(&mut body, &ground());
        assert_eq!(body.vel.y, 2.0);
        assert_eq!(body.pos.y, 103.0);
        assert!(!body.grounded);
    }

    #[test]
    fn test_lands_on_platform_top() {
        let mut body = body_at(300.0, 650.0);
        body.vel.y = 14.0;
        apply_physics(&mut body, &ground());
        assert!(body.grounded);
        assert_eq!(body.pos.y, 660.0);
        assert_eq!(body.vel.y, 0.0);
    }

    #[test]
    fn test_no_landing_from_below() {
        // Jumping up through a ledge: bottom was far below its top
        let ledge = vec![Rect::new(200.0, 390.0, 350.0, 30.0)];
        let mut body = body_at(300.0, 450.0);
        body.vel.y = 5.0;
        apply_physics(&mut body, &ledge);
        assert!(!body.grounded);
        assert_eq!(body.pos.y, 456.0);
    }

    #[test]
    fn test_no_landing_while_rising() {
        let mut body = body_at(300.0, 665.0);
        body.vel.y = -22.0;
        apply_physics(&mut body, &ground());
        assert!(!body.grounded);
        assert_eq!(body.vel.y, -21.0);
    }

    #[test]
    fn test_first_platform_in_list_wins() {
        let lower = Rect::new(0.0, 300.0, 400.0, 30.0);
        let upper = Rect::new(0.0, 295.0, 400.0, 30.0);
        let mut body = body_at(200.0, 290.0);
        body.vel.y = 11.0;
        apply_physics(&mut body, &[lower, upper]);
        assert!(body.grounded);
        assert_eq!(body.pos.y, 300.0);
    }

    #[test]
    fn test_clamps_to_world_edges() {
        let mut body = body_at(10.0, 100.0);
        body.vel.x = -30.0;
        apply_physics(&mut body, &[]);
        assert_eq!(body.bounds().left(), 0.0);

        let mut body = body_at(WIDTH - 10.0, 100.0);
        body.vel.x = 30.0;
        apply_physics(&mut body, &[]);
        assert_eq!(body.bounds().right(), WIDTH);
    }

    #[test]
    fn test_grounded_body_at_rest_stays_put() {
        let mut body = body_at(300.0, 660.0);
        apply_physics(&mut body, &ground());
        let settled = body.pos;
        for _ in 0..2 {
            apply_physics(&mut body, &ground());
            assert_eq!(body.pos, settled);
            assert!(body.grounded);
            assert_eq!(body.vel.y, 0.0);
        }
    }

    #[test]
    fn test_hurtbox_is_inset() {
        let body = body_at(300.0, 660.0);
        let hb = body.hurtbox();
        assert_eq!(hb.w, HERO_WIDTH - HURTBOX_INSET_X);
        assert_eq!(hb.h, HERO_HEIGHT - HURTBOX_INSET_Y);
        assert_eq!(hb.center(), body.bounds().center());
    }

    proptest! {
        #[test]
        fn landing_snaps_bottom_to_platform(
            x in 100.0f32..1300.0,
            above in 0.0f32..15.0,
            vy in 0.0f32..30.0,
        ) {
            let platforms = ground();
            let mut body = body_at(x, 660.0 - above);
            body.vel.y = vy;
            apply_physics(&mut body, &platforms);

            // Falling bodies that end up overlapping the ground must rest on it
            let fell = vy + GRAVITY > 0.0;
            let penetrates = (660.0 - above) + (vy + GRAVITY) > 660.0;
            if fell && penetrates {
                prop_assert!(body.grounded);
                prop_assert_eq!(body.pos.y, 660.0);
                prop_assert_eq!(body.vel.y, 0.0);
            }
        }

        #[test]
        fn body_stays_within_world(
            x in -500.0f32..2000.0,
            vx in -50.0f32..50.0,
        ) {
            let mut body = body_at(x, 300.0);
            body.vel.x = vx;
            apply_physics(&mut body, &[]);
            let b = body.bounds();
            prop_assert!(b.left() >= 0.0);
            prop_assert!(b.right() <= WIDTH);
        }
    }
}
