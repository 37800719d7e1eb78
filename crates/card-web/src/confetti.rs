//! Canvas confetti burst.
//!
//! One call to [`burst`] runs a self-terminating requestAnimationFrame loop
//! for a fixed frame budget, then clears the surface and drops its own
//! closure. The simulation lives in `card_core::particles`; this module
//! only owns the 2D-canvas drawing.

use crate::dom;
use card_core::{
    spawn_burst, Particle, ParticleKind, BURST_FRAMES, HEART_LEFT, HEART_RIGHT, HEART_SCALE,
    HEART_TOP,
};
use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn burst(canvas: &web::HtmlCanvasElement) {
    let Some(window) = web::window() else {
        return;
    };
    let ctx = match canvas.get_context("2d") {
        Ok(Some(obj)) => match obj.dyn_into::<web::CanvasRenderingContext2d>() {
            Ok(c) => c,
            Err(_) => return,
        },
        _ => return,
    };

    // Backing size is synced at burst start and re-synced for at most one
    // resize during the burst; later resizes are ignored.
    let dpr = dom::sync_canvas_backing_size(canvas);
    let _ = ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0);
    wire_once_resize(&window, canvas, &ctx);
    let (vw, vh) = dom::viewport_size(&window);

    let mut rng = StdRng::from_entropy();
    let center = Vec2::new(vw as f32 / 2.0, vh as f32 / 2.0);
    let pieces = Rc::new(RefCell::new(spawn_burst(&mut rng, center)));
    let frame = Cell::new(0u32);

    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame.set(frame.get() + 1);
        ctx.clear_rect(0.0, 0.0, vw, vh);

        for p in pieces.borrow_mut().iter_mut() {
            p.step();
            if !p.alive() {
                continue;
            }
            draw_particle(&ctx, p);
        }
        ctx.set_global_alpha(1.0);

        if frame.get() < BURST_FRAMES {
            if let Some(w) = web::window() {
                let _ = w.request_animation_frame(
                    tick_clone
                        .borrow()
                        .as_ref()
                        .unwrap()
                        .as_ref()
                        .unchecked_ref(),
                );
            }
        } else {
            ctx.clear_rect(0.0, 0.0, vw, vh);
            // One-shot is over; release the closure so the loop cannot
            // be rescheduled.
            tick_clone.borrow_mut().take();
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        let _ = w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}

fn wire_once_resize(
    window: &web::Window,
    canvas: &web::HtmlCanvasElement,
    ctx: &web::CanvasRenderingContext2d,
) {
    let canvas = canvas.clone();
    let ctx = ctx.clone();
    let cb = Closure::once_into_js(move || {
        let dpr = dom::sync_canvas_backing_size(&canvas);
        let _ = ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0);
    });
    let opts = web::AddEventListenerOptions::new();
    opts.set_once(true);
    let _ = window.add_event_listener_with_callback_and_add_event_listener_options(
        "resize",
        cb.unchecked_ref(),
        &opts,
    );
}

fn draw_particle(ctx: &web::CanvasRenderingContext2d, p: &Particle) {
    ctx.set_global_alpha(f64::from(p.alpha()));

    let (x, y) = (f64::from(p.pos.x), f64::from(p.pos.y));
    let (w, h) = (f64::from(p.size.x), f64::from(p.size.y));
    let grad = ctx.create_linear_gradient(x, y, x + w, y + h);
    let _ = grad.add_color_stop(0.0, "rgba(255,59,138,0.95)");
    let _ = grad.add_color_stop(1.0, "rgba(255,123,183,0.95)");
    ctx.set_fill_style_canvas_gradient(&grad);

    match p.kind {
        ParticleKind::Heart => draw_heart(ctx, x, y, f64::from(p.rotation)),
        ParticleKind::Rect => {
            ctx.save();
            let _ = ctx.translate(x, y);
            let _ = ctx.rotate(f64::from(p.rotation));
            ctx.fill_rect(-w / 2.0, -h / 2.0, w, h);
            ctx.restore();
        }
    }
}

fn draw_heart(ctx: &web::CanvasRenderingContext2d, x: f64, y: f64, rotation: f64) {
    ctx.save();
    let _ = ctx.translate(x, y);
    let _ = ctx.rotate(rotation);
    let _ = ctx.scale(f64::from(HEART_SCALE), f64::from(HEART_SCALE));
    ctx.begin_path();
    ctx.move_to(f64::from(HEART_TOP[0]), f64::from(HEART_TOP[1]));
    ctx.bezier_curve_to(
        f64::from(HEART_LEFT[0][0]),
        f64::from(HEART_LEFT[0][1]),
        f64::from(HEART_LEFT[1][0]),
        f64::from(HEART_LEFT[1][1]),
        f64::from(HEART_LEFT[2][0]),
        f64::from(HEART_LEFT[2][1]),
    );
    ctx.bezier_curve_to(
        f64::from(HEART_RIGHT[0][0]),
        f64::from(HEART_RIGHT[0][1]),
        f64::from(HEART_RIGHT[1][0]),
        f64::from(HEART_RIGHT[1][1]),
        f64::from(HEART_RIGHT[2][0]),
        f64::from(HEART_RIGHT[2][1]),
    );
    ctx.close_path();
    ctx.fill();
    ctx.restore();
}
