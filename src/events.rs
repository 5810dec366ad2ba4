use crate::constants::RELAX_TICK_MS;
use crate::dom;
use crate::game::CarGame;
use crate::input::{self, InputVector, JoystickGeometry};
use crate::relax::{KnobMotion, Phase};
use crate::render;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Everything one joystick widget needs wired into its pointer events.
/// Pointer events cover both mouse and touch with one coordinate contract.
#[derive(Clone)]
pub struct JoystickWiring {
    pub canvas: web::HtmlCanvasElement,
    pub ctx: web::CanvasRenderingContext2d,
    pub geom: JoystickGeometry,
    pub deadzone: i32,
    pub motion: Rc<RefCell<KnobMotion>>,
    pub on_sample: Rc<dyn Fn(InputVector)>,
}

pub fn wire_joystick(w: JoystickWiring) {
    render::draw_joystick(&w.ctx, &w.geom, w.motion.borrow().pos());
    wire_pointerdown(&w);
    wire_pointermove(&w);
    wire_pointerup(&w);
}

fn handle_pointer(w: &JoystickWiring, ev: &web::PointerEvent) {
    let pointer = input::pointer_canvas_px(ev, &w.canvas);
    let (offset, raw) = input::map_pointer(pointer, &w.geom);
    w.motion.borrow_mut().drag_to(w.geom.center + offset);
    render::draw_joystick(&w.ctx, &w.geom, w.motion.borrow().pos());
    (w.on_sample)(input::apply_deadzone(raw, w.deadzone));
}

fn wire_pointerdown(w: &JoystickWiring) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();

    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        w.motion.borrow_mut().begin_drag();
        _ = w.canvas.set_pointer_capture(ev.pointer_id());
        handle_pointer(&w, &ev);
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);
    _ = canvas_for_listener
        .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointermove(w: &JoystickWiring) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();

    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let dragging = w.motion.borrow().phase() == Phase::Dragging;
        if dragging {
            handle_pointer(&w, &ev);
            ev.prevent_default();
        }
    }) as Box<dyn FnMut(_)>);
    _ = canvas_for_listener
        .add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointerup(w: &JoystickWiring) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();

    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        w.motion.borrow_mut().release();
        start_relaxation(w.clone());
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);
    _ = canvas_for_listener
        .add_event_listener_with_callback("pointerup", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Self-rescheduling relaxation tick. A fresh drag stops the chain through
/// the phase check inside `KnobMotion::step`.
fn start_relaxation(w: JoystickWiring) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        let again = w.motion.borrow_mut().step();
        render::draw_joystick(&w.ctx, &w.geom, w.motion.borrow().pos());
        if again {
            if let Some(win) = web::window() {
                _ = win.set_timeout_with_callback_and_timeout_and_arguments_0(
                    tick_clone.borrow().as_ref().unwrap().as_ref().unchecked_ref(),
                    RELAX_TICK_MS,
                );
            }
        }
    }) as Box<dyn FnMut()>));
    if let Some(win) = web::window() {
        _ = win.set_timeout_with_callback_and_timeout_and_arguments_0(
            tick.borrow().as_ref().unwrap().as_ref().unchecked_ref(),
            RELAX_TICK_MS,
        );
    }
}

/// Mini-game render loop driven by requestAnimationFrame. The loop exits
/// when the game stops and is restarted by the menu wiring.
#[derive(Clone)]
pub struct GameWiring {
    pub document: web::Document,
    pub ctx: web::CanvasRenderingContext2d,
    pub game: Rc<RefCell<CarGame>>,
}

pub fn start_game_loop(w: GameWiring) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        {
            let mut game = w.game.borrow_mut();
            if !game.running {
                return;
            }
            game.collect();
            render::draw_game(&w.ctx, &game);
            dom::set_text(
                &w.document,
                "game-stats",
                &format!("Score: {} | Coins: {}", game.score, game.coins().len()),
            );
        }
        if let Some(win) = web::window() {
            _ = win.request_animation_frame(
                tick_clone.borrow().as_ref().unwrap().as_ref().unchecked_ref(),
            );
        }
    }) as Box<dyn FnMut()>));
    if let Some(win) = web::window() {
        _ = win.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}
