// The set of live particles together with the surface size they bounce inside.
// A field is never resized in place: a new size means a brand new field.

use crate::color::Color;
use crate::particle::Particle;
use rand::Rng;
use vecmath::Vector2;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldConfig {
    // Viewports narrower than this get the mobile particle count
    pub mobile_breakpoint: f64,
    pub mobile_count: usize,
    pub desktop_count: usize,
    pub move_speed: f64,
    pub min_radius: f64,
    pub max_radius: f64,
    pub color: Color,
    pub particle_alpha: f64,
    pub connection_distance: f64,
    pub line_width: f64,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            mobile_breakpoint: 768.0,
            mobile_count: 30,
            desktop_count: 60,
            move_speed: 0.5,
            min_radius: 1.0,
            max_radius: 3.0,
            color: Color::ACCENT,
            particle_alpha: 0.5,
            connection_distance: 150.0,
            line_width: 0.5,
        }
    }
}

impl FieldConfig {
    pub fn particle_count(&self, viewport_width: f64) -> usize {
        if viewport_width < self.mobile_breakpoint {
            self.mobile_count
        } else {
            self.desktop_count
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub width: f64,
    pub height: f64,
    pub particles: Vec<Particle>,
}

impl Field {
    pub fn setup<R: Rng>(config: &FieldConfig, width: f64, height: f64, rng: &mut R) -> Field {
        let num_particles = config.particle_count(width);
        let mut particles = Vec::with_capacity(num_particles);
        for _ in 0..num_particles {
            particles.push(Particle::random(
                rng,
                width,
                height,
                config.move_speed,
                (config.min_radius, config.max_radius),
                config.color,
            ));
        }
        Field {
            width,
            height,
            particles,
        }
    }

    // Drops every particle and starts over at the new size
    pub fn on_resize<R: Rng>(
        &self,
        config: &FieldConfig,
        width: f64,
        height: f64,
        rng: &mut R,
    ) -> Field {
        Field::setup(config, width, height, rng)
    }

    pub fn advance(&mut self) {
        let (width, height) = (self.width, self.height);
        for particle in &mut self.particles {
            particle.advance(width, height);
        }
    }

    // Every unordered pair closer than `max_distance`, in (i, j) order with i < j
    pub fn connections(&self, max_distance: f64) -> impl Iterator<Item = Connection> + '_ {
        let particles = &self.particles;
        particles.iter().enumerate().flat_map(move |(i, a)| {
            particles[i + 1..].iter().filter_map(move |b| {
                connection_alpha(a.distance_to(b), max_distance).map(|alpha| Connection {
                    from: a.pos,
                    to: b.pos,
                    alpha,
                })
            })
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Connection {
    pub from: Vector2<f64>,
    pub to: Vector2<f64>,
    pub alpha: f64,
}

// Linear fade from opaque at distance 0 to transparent at the threshold.
// Pairs at or beyond the threshold are not linked.
pub fn connection_alpha(distance: f64, max_distance: f64) -> Option<f64> {
    if distance < max_distance {
        Some(1.0 - distance / max_distance)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn still(x: f64, y: f64) -> Particle {
        Particle::new(x, y, 0.0, 0.0, 1.0, Color::ACCENT)
    }

    #[test]
    fn count_follows_breakpoint() {
        let config = FieldConfig::default();
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(Field::setup(&config, 800.0, 600.0, &mut rng).particles.len(), 60);
        assert_eq!(Field::setup(&config, 500.0, 600.0, &mut rng).particles.len(), 30);
        assert_eq!(Field::setup(&config, 767.9, 600.0, &mut rng).particles.len(), 30);
        assert_eq!(Field::setup(&config, 768.0, 600.0, &mut rng).particles.len(), 60);
    }

    #[test]
    fn setup_places_everything_inside() {
        let config = FieldConfig::default();
        let mut rng = StdRng::seed_from_u64(2);
        let field = Field::setup(&config, 1280.0, 720.0, &mut rng);
        assert_eq!((field.width, field.height), (1280.0, 720.0));
        for p in &field.particles {
            assert!(p.pos[0] >= 0.0 && p.pos[0] < 1280.0);
            assert!(p.pos[1] >= 0.0 && p.pos[1] < 720.0);
            assert_eq!(p.color, Color::ACCENT);
        }
    }

    #[test]
    fn same_seed_same_field() {
        let config = FieldConfig::default();
        let a = Field::setup(&config, 1024.0, 768.0, &mut StdRng::seed_from_u64(9));
        let b = Field::setup(&config, 1024.0, 768.0, &mut StdRng::seed_from_u64(9));
        assert_eq!(a, b);
    }

    #[test]
    fn resize_rebuilds_from_scratch() {
        let config = FieldConfig::default();
        let mut rng = StdRng::seed_from_u64(4);
        let mut field = Field::setup(&config, 1440.0, 900.0, &mut rng);
        for _ in 0..10 {
            field.advance();
        }

        let field = field.on_resize(&config, 390.0, 844.0, &mut rng);
        assert_eq!((field.width, field.height), (390.0, 844.0));
        assert_eq!(field.particles.len(), 30);
        assert!(field.particles.iter().all(|p| p.is_inside(390.0, 844.0)));

        let field = field.on_resize(&config, 1024.0, 700.0, &mut rng);
        assert_eq!(field.particles.len(), 60);
    }

    #[test]
    fn advance_keeps_speed_and_count() {
        let config = FieldConfig::default();
        let mut rng = StdRng::seed_from_u64(5);
        let mut field = Field::setup(&config, 200.0, 150.0, &mut rng);
        let speeds: Vec<_> = field
            .particles
            .iter()
            .map(|p| (p.vel[0].abs(), p.vel[1].abs()))
            .collect();
        for _ in 0..5_000 {
            field.advance();
        }
        assert_eq!(field.particles.len(), 30);
        for (p, speed) in field.particles.iter().zip(speeds) {
            assert_eq!((p.vel[0].abs(), p.vel[1].abs()), speed);
            assert!(p.pos[0] >= -0.25 && p.pos[0] <= 200.25);
            assert!(p.pos[1] >= -0.25 && p.pos[1] <= 150.25);
        }
    }

    #[test]
    fn alpha_fades_with_distance() {
        assert_eq!(connection_alpha(0.0, 150.0), Some(1.0));
        let alpha = connection_alpha(100.0, 150.0).unwrap();
        assert!((alpha - 1.0 / 3.0).abs() < 1e-12);
        let near_edge = connection_alpha(149.999, 150.0).unwrap();
        assert!(near_edge > 0.0 && near_edge < 1e-4);
        assert_eq!(connection_alpha(150.0, 150.0), None);
        assert_eq!(connection_alpha(150.1, 150.0), None);
    }

    #[test]
    fn connects_close_pairs_only() {
        let field = Field {
            width: 500.0,
            height: 500.0,
            particles: vec![still(0.0, 0.0), still(100.0, 0.0), still(400.0, 400.0)],
        };
        let connections: Vec<_> = field.connections(150.0).collect();
        assert_eq!(connections.len(), 1);
        assert_eq!(connections[0].from, [0.0, 0.0]);
        assert_eq!(connections[0].to, [100.0, 0.0]);
        assert!((connections[0].alpha - 0.333).abs() < 1e-3);
    }

    #[test]
    fn every_pair_checked_once() {
        let particles = (0..60).map(|i| still(i as f64, 0.0)).collect();
        let field = Field {
            width: 100.0,
            height: 100.0,
            particles,
        };
        assert_eq!(field.connections(150.0).count(), 60 * 59 / 2);
    }
}
