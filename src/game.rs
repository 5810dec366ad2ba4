use crate::constants::{
    CAR_HALF, CAR_SPEED, COIN_COUNT, COIN_RADIUS, COIN_SCORE, GAME_HEIGHT, GAME_MARGIN, GAME_WIDTH,
    MAX_OUTPUT,
};
use crate::input::InputVector;
use rand::prelude::*;

#[derive(Clone, Copy, Debug)]
pub struct Coin {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
}

/// Car-and-coin toy driven by whichever joystick is on screen.
pub struct CarGame {
    pub car_x: f64,
    pub car_y: f64,
    pub score: i32,
    pub running: bool,
    coins: Vec<Coin>,
    rng: StdRng,
}

impl CarGame {
    pub fn new(seed: u64) -> Self {
        Self {
            car_x: GAME_WIDTH / 2.0,
            car_y: GAME_HEIGHT / 2.0,
            score: 0,
            running: false,
            coins: Vec::new(),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn start(&mut self) {
        self.running = true;
        self.score = 0;
        self.car_x = GAME_WIDTH / 2.0;
        self.car_y = GAME_HEIGHT / 2.0;
        self.coins.clear();
        for _ in 0..COIN_COUNT {
            let coin = self.random_coin();
            self.coins.push(coin);
        }
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn coins(&self) -> &[Coin] {
        &self.coins
    }

    fn random_coin(&mut self) -> Coin {
        Coin {
            x: self.rng.gen_range(GAME_MARGIN..GAME_WIDTH - GAME_MARGIN),
            y: self.rng.gen_range(GAME_MARGIN..GAME_HEIGHT - GAME_MARGIN),
            radius: COIN_RADIUS,
        }
    }

    /// Steer by one normalized input sample; the playfield bounds keep the
    /// car on screen.
    pub fn steer(&mut self, v: InputVector) {
        if !self.running {
            return;
        }
        let max = MAX_OUTPUT as f64;
        self.car_x =
            (self.car_x + v.x as f64 / max * CAR_SPEED).clamp(GAME_MARGIN, GAME_WIDTH - GAME_MARGIN);
        self.car_y = (self.car_y + v.y as f64 / max * CAR_SPEED)
            .clamp(GAME_MARGIN, GAME_HEIGHT - GAME_MARGIN);
    }

    /// Collect any coins under the car, respawning one per pickup so the
    /// coin count stays constant. Returns the number collected.
    pub fn collect(&mut self) -> usize {
        let (cx, cy) = (self.car_x, self.car_y);
        let mut picked = 0;
        self.coins.retain(|coin| {
            let dx = cx - coin.x;
            let dy = cy - coin.y;
            let hit = (dx * dx + dy * dy).sqrt() < CAR_HALF + coin.radius;
            if hit {
                picked += 1;
            }
            !hit
        });
        self.score += picked as i32 * COIN_SCORE;
        for _ in 0..picked {
            let coin = self.random_coin();
            self.coins.push(coin);
        }
        picked
    }
}
