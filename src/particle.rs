// Simple particle struct to keep track of individual position, velocity, size and color

use crate::color::Color;
use rand::Rng;
use vecmath::{vec2_add, vec2_len, vec2_sub, Vector2};

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Particle {
    pub pos: Vector2<f64>,
    pub vel: Vector2<f64>,
    pub radius: f64,
    pub color: Color,
}

impl Particle {
    pub fn new(pos_x: f64, pos_y: f64, vel_x: f64, vel_y: f64, radius: f64, color: Color) -> Particle {
        Particle {
            pos: [pos_x, pos_y],
            vel: [vel_x, vel_y],
            radius,
            color,
        }
    }

    // Uniformly placed inside [0, width) x [0, height), each velocity
    // component in [-move_speed / 2, move_speed / 2)
    pub fn random<R: Rng>(
        rng: &mut R,
        width: f64,
        height: f64,
        move_speed: f64,
        radius: (f64, f64),
        color: Color,
    ) -> Particle {
        let pos_x = rng.gen::<f64>() * width;
        let pos_y = rng.gen::<f64>() * height;
        let vel_x = (rng.gen::<f64>() - 0.5) * move_speed;
        let vel_y = (rng.gen::<f64>() - 0.5) * move_speed;
        let (min_radius, max_radius) = radius;
        let radius = rng.gen::<f64>() * (max_radius - min_radius) + min_radius;
        Particle::new(pos_x, pos_y, vel_x, vel_y, radius, color)
    }

    // One frame of Euler integration followed by edge bounce. Only the sign of
    // a velocity component changes, and only while the particle is out of
    // bounds and still heading away, so a crossing flips it exactly once.
    pub fn advance(&mut self, width: f64, height: f64) {
        self.pos = vec2_add(self.pos, self.vel);

        if (self.pos[0] < 0.0 && self.vel[0] < 0.0) || (self.pos[0] > width && self.vel[0] > 0.0) {
            self.vel[0] *= -1.0;
        }
        if (self.pos[1] < 0.0 && self.vel[1] < 0.0) || (self.pos[1] > height && self.vel[1] > 0.0) {
            self.vel[1] *= -1.0;
        }
    }

    pub fn distance_to(&self, other: &Particle) -> f64 {
        vec2_len(vec2_sub(self.pos, other.pos))
    }

    pub fn is_inside(&self, width: f64, height: f64) -> bool {
        self.pos[0] >= 0.0 && self.pos[0] <= width && self.pos[1] >= 0.0 && self.pos[1] <= height
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn particle(x: f64, y: f64, vx: f64, vy: f64) -> Particle {
        Particle::new(x, y, vx, vy, 2.0, Color::ACCENT)
    }

    #[test]
    fn random_particles_start_inside_with_bounded_attributes() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..500 {
            let p = Particle::random(&mut rng, 320.0, 200.0, 0.5, (1.0, 3.0), Color::ACCENT);
            assert!(p.pos[0] >= 0.0 && p.pos[0] < 320.0);
            assert!(p.pos[1] >= 0.0 && p.pos[1] < 200.0);
            assert!(p.vel[0] >= -0.25 && p.vel[0] < 0.25);
            assert!(p.vel[1] >= -0.25 && p.vel[1] < 0.25);
            assert!(p.radius >= 1.0 && p.radius < 3.0);
        }
    }

    #[test]
    fn moves_by_its_velocity() {
        let mut p = particle(10.0, 20.0, 0.25, -0.125);
        p.advance(100.0, 100.0);
        assert_eq!(p.pos, [10.25, 19.875]);
        assert_eq!(p.vel, [0.25, -0.125]);
    }

    #[test]
    fn crossing_right_edge_flips_vx() {
        let width = 100.0;
        let mut p = particle(width - 0.1, 50.0, 0.2, 0.0);
        p.advance(width, 100.0);
        assert!(p.pos[0] > width);
        assert!(p.vel[0] < 0.0);
        assert_eq!(p.vel[0].abs(), 0.2);
    }

    #[test]
    fn crossing_top_edge_flips_vy_only() {
        let mut p = particle(50.0, 0.05, 0.1, -0.2);
        p.advance(100.0, 100.0);
        assert!(p.pos[1] < 0.0);
        assert_eq!(p.vel, [0.1, 0.2]);
    }

    #[test]
    fn flips_once_and_returns_from_far_outside() {
        let mut p = particle(130.0, 50.0, 0.5, 0.0);
        let mut flips = 0;
        let mut last_sign = p.vel[0].signum();
        for _ in 0..200 {
            p.advance(100.0, 100.0);
            if p.vel[0].signum() != last_sign {
                flips += 1;
                last_sign = p.vel[0].signum();
            }
        }
        assert_eq!(flips, 1);
        assert!(p.is_inside(100.0, 100.0));
        assert_eq!(p.vel[0], -0.5);
    }

    #[test]
    fn stays_in_bounds_over_many_frames() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut p = Particle::random(&mut rng, 40.0, 30.0, 0.5, (1.0, 3.0), Color::ACCENT);
        let speed = [p.vel[0].abs(), p.vel[1].abs()];
        for _ in 0..10_000 {
            p.advance(40.0, 30.0);
            assert!(p.pos[0] >= -speed[0] && p.pos[0] <= 40.0 + speed[0]);
            assert!(p.pos[1] >= -speed[1] && p.pos[1] <= 30.0 + speed[1]);
            assert_eq!([p.vel[0].abs(), p.vel[1].abs()], speed);
        }
    }

    #[test]
    fn distance_is_euclidean() {
        let a = particle(0.0, 0.0, 0.0, 0.0);
        let b = particle(3.0, 4.0, 0.0, 0.0);
        assert_eq!(a.distance_to(&b), 5.0);
    }
}
