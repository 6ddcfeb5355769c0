// Renderer struct that turns a field into 2d drawing calls: particle discs first,
// then the connection lines between close pairs

use crate::field::{Field, FieldConfig};
use crate::surface::DrawSurface;

pub struct Renderer {
    pub color: String,
    pub particle_alpha: f64,
    pub connection_distance: f64,
    pub line_width: f64,
}

impl Renderer {
    pub fn new(config: &FieldConfig) -> Self {
        Renderer {
            color: config.color.to_css(),
            particle_alpha: config.particle_alpha,
            connection_distance: config.connection_distance,
            line_width: config.line_width,
        }
    }

    pub fn render<S: DrawSurface + ?Sized>(&self, field: &Field, surface: &mut S) {
        self.clear_screen(field, surface);
        self.render_particles(field, surface);
        self.render_connections(field, surface);
    }

    pub fn clear_screen<S: DrawSurface + ?Sized>(&self, field: &Field, surface: &mut S) {
        surface.clear_rect(0.0, 0.0, field.width, field.height);
    }

    pub fn render_particles<S: DrawSurface + ?Sized>(&self, field: &Field, surface: &mut S) {
        for p in &field.particles {
            surface.set_fill_color(&self.color);
            surface.set_global_alpha(self.particle_alpha);
            surface.fill_circle(p.pos[0], p.pos[1], p.radius);
        }
    }

    pub fn render_connections<S: DrawSurface + ?Sized>(&self, field: &Field, surface: &mut S) {
        for connection in field.connections(self.connection_distance) {
            surface.set_stroke_color(&self.color);
            surface.set_global_alpha(connection.alpha);
            surface.set_line_width(self.line_width);
            surface.stroke_line(connection.from, connection.to);
        }
    }
}
