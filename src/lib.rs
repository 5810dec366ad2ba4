#![cfg(target_arch = "wasm32")]
//! Browser demo comparing Hall-effect, TMR, and analog potentiometer
//! joystick sensors: draggable knobs, per-technology noise injection,
//! rolling accuracy statistics, live charts, and a car-and-coin mini-game.

use crate::events::{GameWiring, JoystickWiring};
use crate::game::CarGame;
use crate::input::{InputVector, JoystickGeometry};
use crate::relax::KnobMotion;
use crate::render::ChartView;
use crate::sensor::{NoiseModel, SensorType};
use crate::stats::SensorSession;
use smallvec::SmallVec;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod chart;
mod constants;
mod dom;
mod events;
mod game;
mod input;
mod menu;
mod relax;
mod render;
mod sensor;
mod stats;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("joystick-lab starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    let seed = js_sys::Date::now() as u64;
    let noise = Rc::new(RefCell::new(NoiseModel::new(seed)));
    let hall = Rc::new(RefCell::new(SensorSession::new()));
    let tmr = Rc::new(RefCell::new(SensorSession::new()));
    let analog = Rc::new(RefCell::new(SensorSession::new()));
    let game = Rc::new(RefCell::new(CarGame::new(
        seed.wrapping_add(0x9E37_79B9_7F4A_7C15),
    )));

    wire_hall_panel(&document, &noise, &hall)?;
    wire_tmr_panel(&document, &noise, &tmr)?;
    wire_analog_panel(&document, &noise, &analog)?;
    wire_comparison_panel(&document, &noise, &hall, &tmr, &analog, &game)?;
    wire_mini_joysticks(&document, &game)?;
    wire_menu(&document, &game)?;

    log::info!("[init] wired 4 sensor panels, 4 mini joysticks, mini-game");
    Ok(())
}

fn make_chart(
    document: &web::Document,
    canvas_id: &str,
    colors: Vec<&'static str>,
) -> anyhow::Result<Rc<RefCell<ChartView>>> {
    let canvas = dom::canvas_by_id(document, canvas_id)?;
    let ctx = dom::context_2d(&canvas)?;
    Ok(Rc::new(RefCell::new(ChartView::new(&canvas, ctx, colors))))
}

fn wire_joystick_canvas(
    document: &web::Document,
    canvas_id: &str,
    geom: JoystickGeometry,
    sensor: SensorType,
    on_sample: Rc<dyn Fn(InputVector)>,
) -> anyhow::Result<()> {
    let canvas = dom::canvas_by_id(document, canvas_id)?;
    let ctx = dom::context_2d(&canvas)?;
    events::wire_joystick(JoystickWiring {
        canvas,
        ctx,
        geom,
        deadzone: sensor.mapper_deadzone(),
        motion: Rc::new(RefCell::new(KnobMotion::new(geom.center))),
        on_sample,
    });
    Ok(())
}

fn wire_hall_panel(
    document: &web::Document,
    noise: &Rc<RefCell<NoiseModel>>,
    session: &Rc<RefCell<SensorSession>>,
) -> anyhow::Result<()> {
    let chart = make_chart(document, "graph-canvas1", vec!["blue"])?;
    let noise = noise.clone();
    let session = session.clone();
    let doc = document.clone();
    wire_joystick_canvas(
        document,
        "joystick-canvas1",
        JoystickGeometry::standard(),
        SensorType::Hall,
        Rc::new(move |v: InputVector| {
            let reading = noise.borrow_mut().hall(v.x);
            dom::set_text(&doc, "label-hall", &format!("Hall: X={}  Y={}", reading, v.y));
            let snap = session.borrow_mut().record(reading, v.x as f64);
            dom::set_text(
                &doc,
                "stats-hall",
                &format!("Avg Noise: {} | Accuracy: {}%", snap.avg_noise, snap.accuracy),
            );
            chart.borrow_mut().emit(&[reading]);
        }),
    )
}

fn wire_tmr_panel(
    document: &web::Document,
    noise: &Rc<RefCell<NoiseModel>>,
    session: &Rc<RefCell<SensorSession>>,
) -> anyhow::Result<()> {
    let chart = make_chart(document, "graph-canvas2", vec!["green"])?;
    let noise = noise.clone();
    let session = session.clone();
    let doc = document.clone();
    wire_joystick_canvas(
        document,
        "joystick-canvas2",
        JoystickGeometry::standard(),
        SensorType::Tmr,
        Rc::new(move |v: InputVector| {
            let reading = noise.borrow_mut().tmr(v.x, js_sys::Date::now());
            dom::set_text(
                &doc,
                "label-tmr",
                &format!("TMR: X={}  Y={}", reading.round() as i64, v.y),
            );
            let snap = session.borrow_mut().record(reading, v.x as f64);
            dom::set_text(
                &doc,
                "stats-tmr",
                &format!("Avg Noise: {} | Accuracy: {}%", snap.avg_noise, snap.accuracy),
            );
            chart.borrow_mut().emit(&[reading]);
        }),
    )
}

fn wire_analog_panel(
    document: &web::Document,
    noise: &Rc<RefCell<NoiseModel>>,
    session: &Rc<RefCell<SensorSession>>,
) -> anyhow::Result<()> {
    let chart = make_chart(document, "graph-canvas3", vec!["orange"])?;
    let noise = noise.clone();
    let session = session.clone();
    let doc = document.clone();
    wire_joystick_canvas(
        document,
        "joystick-canvas3",
        JoystickGeometry::standard(),
        SensorType::Analog,
        Rc::new(move |v: InputVector| {
            let sample = noise.borrow_mut().analog(v.x);
            dom::set_text(
                &doc,
                "label-analog",
                &format!("Analog: X={}  Y={}", sample.reading, v.y),
            );
            let snap = session
                .borrow_mut()
                .record(sample.reading, sample.target as f64);
            dom::set_text(
                &doc,
                "stats-analog",
                &format!("Avg Noise: {} | Accuracy: {}%", snap.avg_noise, snap.accuracy),
            );
            chart.borrow_mut().emit(&[sample.reading]);
        }),
    )
}

/// The comparison panel runs all three models on one knob, shares the same
/// rolling windows as the single-sensor panels, and doubles as a game input.
fn wire_comparison_panel(
    document: &web::Document,
    noise: &Rc<RefCell<NoiseModel>>,
    hall: &Rc<RefCell<SensorSession>>,
    tmr: &Rc<RefCell<SensorSession>>,
    analog: &Rc<RefCell<SensorSession>>,
    game: &Rc<RefCell<CarGame>>,
) -> anyhow::Result<()> {
    let chart = make_chart(document, "graph-canvas4", vec!["blue", "green", "orange"])?;
    let noise = noise.clone();
    let hall = hall.clone();
    let tmr = tmr.clone();
    let analog = analog.clone();
    let game = game.clone();
    let doc = document.clone();
    wire_joystick_canvas(
        document,
        "joystick-canvas4",
        JoystickGeometry::standard(),
        SensorType::Comparison,
        Rc::new(move |v: InputVector| {
            let sample = noise.borrow_mut().comparison(v.x, js_sys::Date::now());

            dom::set_text(
                &doc,
                "label-comp-hall",
                &format!("Hall: X={}  Y={}", sample.hall, v.y),
            );
            let hall_snap = hall.borrow_mut().record(sample.hall, v.x as f64);

            dom::set_text(
                &doc,
                "label-comp-tmr",
                &format!("TMR: X={}  Y={}", sample.tmr.round() as i64, v.y),
            );
            let tmr_snap = tmr.borrow_mut().record(sample.tmr, v.x as f64);

            dom::set_text(
                &doc,
                "label-comp-analog",
                &format!("Analog: X={}  Y={}", sample.analog.reading, v.y),
            );
            let analog_snap = analog
                .borrow_mut()
                .record(sample.analog.reading, sample.analog.target as f64);

            dom::set_text(
                &doc,
                "stats-comp",
                &format!(
                    "Hall Noise: {} | TMR Noise: {} | Analog Noise: {}",
                    hall_snap.avg_noise, tmr_snap.avg_noise, analog_snap.avg_noise
                ),
            );

            let values: SmallVec<[f64; 3]> =
                SmallVec::from_slice(&[sample.hall, sample.tmr, sample.analog.reading]);
            chart.borrow_mut().emit(&values);

            game.borrow_mut().steer(v);
        }),
    )
}

fn wire_mini_joysticks(
    document: &web::Document,
    game: &Rc<RefCell<CarGame>>,
) -> anyhow::Result<()> {
    let minis = [
        ("mini-joystick1", SensorType::Hall),
        ("mini-joystick2", SensorType::Tmr),
        ("mini-joystick3", SensorType::Analog),
        ("mini-joystick4", SensorType::Comparison),
    ];
    for (canvas_id, sensor) in minis {
        let game = game.clone();
        wire_joystick_canvas(
            document,
            canvas_id,
            JoystickGeometry::mini(),
            sensor,
            Rc::new(move |v: InputVector| {
                game.borrow_mut().steer(v);
            }),
        )?;
    }
    Ok(())
}

fn wire_menu(document: &web::Document, game: &Rc<RefCell<CarGame>>) -> anyhow::Result<()> {
    let game_canvas = dom::canvas_by_id(document, "game-canvas")?;
    let game_ctx = dom::context_2d(&game_canvas)?;
    let wiring = GameWiring {
        document: document.clone(),
        ctx: game_ctx,
        game: game.clone(),
    };

    let doc = document.clone();
    dom::add_click_listener(document, "desktop-mode-start", move || {
        menu::hide(&doc, "start-menu");
        menu::show(&doc, "main-menu");
    });

    let doc = document.clone();
    dom::add_click_listener(document, "mobile-mode-start", move || {
        menu::hide(&doc, "start-menu");
        menu::show(&doc, "main-menu");
        menu::enable_mobile_mode(&doc);
    });

    let doc = document.clone();
    let game_start = game.clone();
    let wiring_start = wiring;
    dom::add_click_listener(document, "mini-game-btn", move || {
        menu::hide(&doc, "main-menu");
        menu::show(&doc, "mini-game");
        game_start.borrow_mut().start();
        log::info!("[game] started");
        events::start_game_loop(wiring_start.clone());
    });

    let doc = document.clone();
    let game_stop = game.clone();
    dom::add_click_listener(document, "back-to-main", move || {
        menu::hide(&doc, "mini-game");
        menu::show(&doc, "main-menu");
        game_stop.borrow_mut().stop();
        log::info!("[game] stopped");
    });

    Ok(())
}
