// The handful of 2d drawing calls the renderer needs, so it can target the
// browser canvas or a recording stand-in

use std::f64::consts::PI;
use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

pub trait DrawSurface {
    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64);
    fn set_fill_color(&mut self, color: &str);
    fn set_stroke_color(&mut self, color: &str);
    fn set_global_alpha(&mut self, alpha: f64);
    fn set_line_width(&mut self, width: f64);
    fn fill_circle(&mut self, x: f64, y: f64, radius: f64);
    fn stroke_line(&mut self, from: [f64; 2], to: [f64; 2]);
}

impl DrawSurface for CanvasRenderingContext2d {
    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        CanvasRenderingContext2d::clear_rect(self, x, y, width, height);
    }

    fn set_fill_color(&mut self, color: &str) {
        self.set_fill_style(&JsValue::from_str(color));
    }

    fn set_stroke_color(&mut self, color: &str) {
        self.set_stroke_style(&JsValue::from_str(color));
    }

    fn set_global_alpha(&mut self, alpha: f64) {
        CanvasRenderingContext2d::set_global_alpha(self, alpha);
    }

    fn set_line_width(&mut self, width: f64) {
        CanvasRenderingContext2d::set_line_width(self, width);
    }

    fn fill_circle(&mut self, x: f64, y: f64, radius: f64) {
        self.begin_path();
        // Only throws for a negative radius, which particles never have
        if self.arc(x, y, radius, 0.0, PI * 2.0).is_ok() {
            self.fill();
        }
    }

    fn stroke_line(&mut self, from: [f64; 2], to: [f64; 2]) {
        self.begin_path();
        self.move_to(from[0], from[1]);
        self.line_to(to[0], to[1]);
        self.stroke();
    }
}
