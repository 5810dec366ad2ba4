use crate::chart::ChartFeed;
use crate::constants::{CAR_HALF, CHART_VALUE_MAX, CHART_VALUE_MIN, GAME_HEIGHT, GAME_WIDTH};
use crate::game::CarGame;
use crate::input::JoystickGeometry;
use glam::Vec2;
use std::f64::consts::TAU;
use web_sys as web;

/// Redraw one joystick widget: travel ring plus the knob at `pos`.
pub fn draw_joystick(ctx: &web::CanvasRenderingContext2d, geom: &JoystickGeometry, pos: Vec2) {
    ctx.clear_rect(0.0, 0.0, geom.width, geom.height);

    ctx.begin_path();
    _ = ctx.arc(
        geom.center.x as f64,
        geom.center.y as f64,
        geom.radius as f64,
        0.0,
        TAU,
    );
    ctx.set_stroke_style_str("black");
    ctx.set_line_width(2.0);
    ctx.stroke();

    ctx.begin_path();
    _ = ctx.arc(pos.x as f64, pos.y as f64, geom.knob_size, 0.0, TAU);
    ctx.set_fill_style_str("red");
    ctx.fill();
}

/// A chart canvas together with its bounded history feed.
pub struct ChartView {
    ctx: web::CanvasRenderingContext2d,
    width: f64,
    height: f64,
    feed: ChartFeed,
    colors: Vec<&'static str>,
}

impl ChartView {
    pub fn new(
        canvas: &web::HtmlCanvasElement,
        ctx: web::CanvasRenderingContext2d,
        colors: Vec<&'static str>,
    ) -> Self {
        let feed = ChartFeed::new(colors.len());
        Self {
            ctx,
            width: canvas.width() as f64,
            height: canvas.height() as f64,
            feed,
            colors,
        }
    }

    /// Push one value per series and redraw the whole chart.
    pub fn emit(&mut self, values: &[f64]) {
        self.feed.emit(values);
        self.draw();
    }

    fn value_to_y(&self, value: f64) -> f64 {
        let t = (value - CHART_VALUE_MIN) / (CHART_VALUE_MAX - CHART_VALUE_MIN);
        (1.0 - t.clamp(0.0, 1.0)) * self.height
    }

    fn draw(&self) {
        let ctx = &self.ctx;
        ctx.set_fill_style_str("white");
        ctx.fill_rect(0.0, 0.0, self.width, self.height);

        // zero line
        let y0 = self.value_to_y(0.0);
        ctx.begin_path();
        ctx.move_to(0.0, y0);
        ctx.line_to(self.width, y0);
        ctx.set_stroke_style_str("rgba(0,0,0,0.1)");
        ctx.set_line_width(1.0);
        ctx.stroke();

        for (series, color) in self.feed.series().iter().zip(&self.colors) {
            if series.len() < 2 {
                continue;
            }
            let span = (series.len() - 1) as f64;
            ctx.begin_path();
            for (i, (_step, value)) in series.iter().enumerate() {
                let x = i as f64 / span * self.width;
                let y = self.value_to_y(value);
                if i == 0 {
                    ctx.move_to(x, y);
                } else {
                    ctx.line_to(x, y);
                }
            }
            ctx.set_stroke_style_str(color);
            ctx.set_line_width(2.0);
            ctx.stroke();
        }
    }
}

/// Redraw the mini-game scene: blue car square and gold coins.
pub fn draw_game(ctx: &web::CanvasRenderingContext2d, game: &CarGame) {
    ctx.clear_rect(0.0, 0.0, GAME_WIDTH, GAME_HEIGHT);

    ctx.set_fill_style_str("blue");
    ctx.fill_rect(
        game.car_x - CAR_HALF,
        game.car_y - CAR_HALF,
        CAR_HALF * 2.0,
        CAR_HALF * 2.0,
    );

    ctx.set_fill_style_str("gold");
    for coin in game.coins() {
        ctx.begin_path();
        _ = ctx.arc(coin.x, coin.y, coin.radius, 0.0, TAU);
        ctx.fill();
    }
}
