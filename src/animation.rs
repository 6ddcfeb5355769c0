// Drives the hero background: one update + draw per display refresh, and a
// fresh field whenever the window changes size

use std::cell::RefCell;
use std::rc::Rc;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{console, CanvasRenderingContext2d, HtmlCanvasElement};

use crate::error::SiteError;
use crate::field::{Field, FieldConfig};
use crate::renderer::Renderer;
use crate::surface::DrawSurface;
use crate::timer::Timer;
use crate::utils;

pub const CANVAS_ID: &str = "hero-canvas";

// Everything one frame needs, independent of the browser
pub struct FieldAnimation<R: Rng> {
    pub config: FieldConfig,
    pub field: Field,
    pub renderer: Renderer,
    pub frames: u64,
    rng: R,
}

impl<R: Rng> FieldAnimation<R> {
    pub fn new(config: FieldConfig, width: f64, height: f64, mut rng: R) -> Self {
        let field = Field::setup(&config, width, height, &mut rng);
        FieldAnimation {
            renderer: Renderer::new(&config),
            config,
            field,
            frames: 0,
            rng,
        }
    }

    pub fn tick<S: DrawSurface + ?Sized>(&mut self, surface: &mut S) {
        self.field.advance();
        self.renderer.render(&self.field, surface);
        self.frames += 1;
    }

    // The new field is fully built before it replaces the old one
    pub fn resize(&mut self, width: f64, height: f64) {
        self.field = self.field.on_resize(&self.config, width, height, &mut self.rng);
    }
}

struct HeroScene {
    canvas: HtmlCanvasElement,
    context: CanvasRenderingContext2d,
    animation: FieldAnimation<StdRng>,
}

impl HeroScene {
    fn fit_to_viewport(&mut self) -> Result<(), SiteError> {
        let (width, height) = utils::viewport_size(&utils::window()?);
        self.canvas.set_width(width as u32);
        self.canvas.set_height(height as u32);
        let _timer = Timer::new("FieldAnimation::resize");
        self.animation.resize(width, height);
        Ok(())
    }
}

// Once started, the loop runs until the page goes away; there is no stop
pub struct AnimationDriver {
    scene: Rc<RefCell<HeroScene>>,
}

impl AnimationDriver {
    pub fn new(canvas: HtmlCanvasElement, config: FieldConfig) -> Result<AnimationDriver, SiteError> {
        let context = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .ok_or(SiteError::NoContext)?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| SiteError::NoContext)?;

        let (width, height) = utils::viewport_size(&utils::window()?);
        canvas.set_width(width as u32);
        canvas.set_height(height as u32);
        let animation = {
            let _timer = Timer::new("FieldAnimation::new");
            FieldAnimation::new(config, width, height, StdRng::from_entropy())
        };

        Ok(AnimationDriver {
            scene: Rc::new(RefCell::new(HeroScene {
                canvas,
                context,
                animation,
            })),
        })
    }

    pub fn from_document(config: FieldConfig) -> Result<AnimationDriver, SiteError> {
        let document = utils::document()?;
        let canvas = utils::element_by_id::<HtmlCanvasElement>(&document, CANVAS_ID, "canvas")?;
        AnimationDriver::new(canvas, config)
    }

    pub fn tick(&self) {
        let mut scene = self.scene.borrow_mut();
        let HeroScene {
            context, animation, ..
        } = &mut *scene;
        animation.tick(context);
    }

    pub fn start(self) -> Result<(), JsValue> {
        let window = utils::window()?;
        self.listen_for_resize(&window)?;

        // The frame callback has to hold a handle to itself to reschedule
        let driver = Rc::new(self);
        let frame = Rc::new(RefCell::new(None::<Closure<dyn FnMut()>>));
        let next_frame = frame.clone();
        let loop_window = window.clone();
        *next_frame.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            driver.tick();
            if let Some(callback) = frame.borrow().as_ref() {
                if let Err(e) = loop_window.request_animation_frame(callback.as_ref().unchecked_ref()) {
                    console::error_1(&e);
                }
            }
        }) as Box<dyn FnMut()>));

        if let Some(callback) = next_frame.borrow().as_ref() {
            window.request_animation_frame(callback.as_ref().unchecked_ref())?;
        }
        Ok(())
    }

    fn listen_for_resize(&self, window: &web_sys::Window) -> Result<(), JsValue> {
        let scene = self.scene.clone();
        let on_resize = Closure::wrap(Box::new(move || {
            let mut scene = scene.borrow_mut();
            match scene.fit_to_viewport() {
                Ok(()) => {
                    let field = &scene.animation.field;
                    console::log_1(
                        &format!(
                            "hero canvas resized to {}x{}, {} particles",
                            field.width,
                            field.height,
                            field.particles.len()
                        )
                        .into(),
                    );
                }
                Err(e) => console::error_1(&e.into()),
            }
        }) as Box<dyn FnMut()>);
        window.add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())?;
        on_resize.forget();
        Ok(())
    }
}
