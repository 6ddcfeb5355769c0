//! Scroll reveal animations.
//!
//! The page describes what fades in and when; the tweening and the scroll
//! triggers themselves are done by the page's GSAP and ScrollTrigger globals.
//! The plan is plain data so it can be checked without a browser, and
//! [`register`] turns it into `gsap` calls.

use js_sys::{Object, Reflect};
use wasm_bindgen::prelude::*;
use web_sys::Document;

use crate::utils;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = gsap, js_name = registerPlugin)]
    fn register_plugin(plugin: &JsValue);

    #[wasm_bindgen(js_namespace = gsap, js_name = fromTo)]
    fn from_to(targets: &JsValue, from: &JsValue, to: &JsValue);

    type Timeline;

    #[wasm_bindgen(js_namespace = gsap, js_name = timeline)]
    fn timeline() -> Timeline;

    #[wasm_bindgen(method)]
    fn to(this: &Timeline, targets: &str, vars: &JsValue, position: &JsValue) -> Timeline;
}

pub const EASE: &str = "power2.out";

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    fn key(self) -> &'static str {
        match self {
            Axis::X => "x",
            Axis::Y => "y",
        }
    }
}

/// One on-load hero step, chained on a single timeline.
#[derive(Debug, Clone, PartialEq)]
pub struct HeroStep {
    pub selector: &'static str,
    pub duration: f64,
    /// Timeline position relative to the end of the previous step, `None`
    /// for the first step.
    pub overlap: Option<&'static str>,
}

pub fn hero_sequence() -> Vec<HeroStep> {
    let selectors = [".hero__label", ".hero__title", ".hero__bio", ".hero__actions"];
    selectors
        .iter()
        .enumerate()
        .map(|(i, &selector)| HeroStep {
            selector,
            duration: 0.8,
            overlap: if i == 0 { None } else { Some("-=0.6") },
        })
        .collect()
}

/// How a selector's matches are handed to the tween.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Targets {
    /// A tween per matched element, triggered by that element.
    EachElement,
    /// One staggered tween over the children of the matched section,
    /// triggered by the section. Skipped when the section has no children.
    Children { stagger: f64 },
    /// A tween per matched element, each delayed by its index times `step`.
    Sequenced { step: f64 },
}

/// Declarative fade/slide-in for everything a selector matches.
#[derive(Debug, Clone, PartialEq)]
pub struct Reveal {
    pub selector: &'static str,
    pub targets: Targets,
    pub axis: Axis,
    /// Starting offset along `axis`, ending at 0.
    pub offset: f64,
    pub duration: f64,
    /// ScrollTrigger start, "top 85%" fires once the element's top reaches
    /// 85% of the viewport height.
    pub start: &'static str,
}

impl Reveal {
    pub fn delay_for(&self, index: usize) -> f64 {
        match self.targets {
            Targets::Sequenced { step } => index as f64 * step,
            _ => 0.0,
        }
    }
}

pub fn reveal_plan() -> Vec<Reveal> {
    let mut plan = vec![Reveal {
        selector: ".reveal-up, .reveal-text",
        targets: Targets::EachElement,
        axis: Axis::Y,
        offset: 30.0,
        duration: 0.8,
        start: "top 85%",
    }];
    for &section in &[".skills__grid", ".projects__list", ".services__grid"] {
        plan.push(Reveal {
            selector: section,
            targets: Targets::Children { stagger: 0.1 },
            axis: Axis::Y,
            offset: 30.0,
            duration: 0.6,
            start: "top 85%",
        });
    }
    plan.push(Reveal {
        selector: ".process__step",
        targets: Targets::Sequenced { step: 0.1 },
        axis: Axis::X,
        offset: -30.0,
        duration: 0.6,
        start: "top 90%",
    });
    plan
}

pub fn init(document: &Document) -> Result<(), JsValue> {
    let scroll_trigger = Reflect::get(&js_sys::global(), &JsValue::from_str("ScrollTrigger"))?;
    register_plugin(&scroll_trigger);

    play_hero(&hero_sequence())?;
    for reveal in reveal_plan() {
        register(document, &reveal)?;
    }
    Ok(())
}

fn play_hero(steps: &[HeroStep]) -> Result<(), JsValue> {
    let timeline = timeline();
    for step in steps {
        let vars = object(&[
            ("opacity", JsValue::from(1.0_f64)),
            ("y", JsValue::from(0.0_f64)),
            ("duration", step.duration.into()),
            ("ease", EASE.into()),
        ])?;
        let position = step.overlap.map(JsValue::from_str).unwrap_or(JsValue::UNDEFINED);
        timeline.to(step.selector, &vars, &position);
    }
    Ok(())
}

pub fn register(document: &Document, reveal: &Reveal) -> Result<(), JsValue> {
    match reveal.targets {
        Targets::Children { stagger } => {
            let children = format!("{} > *", reveal.selector);
            let items = utils::select_all(document, &children)?;
            if items.is_empty() {
                return Ok(());
            }
            let targets: js_sys::Array = items.iter().collect();
            let trigger = JsValue::from_str(reveal.selector);
            tween(reveal, &targets, &trigger, Some(stagger), 0.0)
        }
        Targets::EachElement | Targets::Sequenced { .. } => {
            for (index, element) in utils::select_all(document, reveal.selector)?.iter().enumerate() {
                let element: &JsValue = element.as_ref();
                tween(reveal, element, element, None, reveal.delay_for(index))?;
            }
            Ok(())
        }
    }
}

fn tween(
    reveal: &Reveal,
    targets: &JsValue,
    trigger: &JsValue,
    stagger: Option<f64>,
    delay: f64,
) -> Result<(), JsValue> {
    let from = object(&[
        ("opacity", JsValue::from(0.0_f64)),
        (reveal.axis.key(), JsValue::from(reveal.offset)),
    ])?;

    let scroll_trigger = object(&[("trigger", trigger.clone()), ("start", reveal.start.into())])?;
    let mut to = vec![
        ("opacity", JsValue::from(1.0_f64)),
        (reveal.axis.key(), JsValue::from(0.0_f64)),
        ("duration", reveal.duration.into()),
        ("ease", EASE.into()),
        ("scrollTrigger", scroll_trigger.into()),
    ];
    if let Some(stagger) = stagger {
        to.push(("stagger", stagger.into()));
    }
    if delay > 0.0 {
        to.push(("delay", delay.into()));
    }
    from_to(targets, &from, &object(&to)?);
    Ok(())
}

fn object(entries: &[(&str, JsValue)]) -> Result<JsValue, JsValue> {
    let obj = Object::new();
    for (key, value) in entries {
        Reflect::set(&obj, &JsValue::from_str(key), value)?;
    }
    Ok(obj.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hero_steps_overlap_after_the_first() {
        let steps = hero_sequence();
        let selectors: Vec<_> = steps.iter().map(|s| s.selector).collect();
        assert_eq!(
            selectors,
            [".hero__label", ".hero__title", ".hero__bio", ".hero__actions"]
        );
        assert_eq!(steps[0].overlap, None);
        assert!(steps[1..].iter().all(|s| s.overlap == Some("-=0.6")));
        assert!(steps.iter().all(|s| s.duration == 0.8));
    }

    #[test]
    fn grids_stagger_their_children() {
        let plan = reveal_plan();
        let grids: Vec<_> = plan
            .iter()
            .filter(|r| matches!(r.targets, Targets::Children { .. }))
            .collect();
        assert_eq!(grids.len(), 3);
        for grid in grids {
            assert_eq!(grid.targets, Targets::Children { stagger: 0.1 });
            assert_eq!(grid.duration, 0.6);
            assert_eq!(grid.start, "top 85%");
            assert_eq!((grid.axis, grid.offset), (Axis::Y, 30.0));
        }
    }

    #[test]
    fn process_steps_slide_in_with_growing_delay() {
        let plan = reveal_plan();
        let steps = plan.iter().find(|r| r.selector == ".process__step").unwrap();
        assert_eq!((steps.axis, steps.offset), (Axis::X, -30.0));
        assert_eq!(steps.start, "top 90%");
        assert_eq!(steps.delay_for(0), 0.0);
        assert!((steps.delay_for(3) - 0.3).abs() < 1e-12);
    }

    #[test]
    fn generic_reveals_have_no_delay() {
        let plan = reveal_plan();
        let generic = &plan[0];
        assert_eq!(generic.selector, ".reveal-up, .reveal-text");
        assert_eq!(generic.targets, Targets::EachElement);
        assert_eq!(generic.delay_for(7), 0.0);
        assert_eq!(generic.duration, 0.8);
    }
}
