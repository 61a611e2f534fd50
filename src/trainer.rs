//! The `yop` main loop: act, score, learn, and report.

use std::io::Write;
use std::thread;
use std::time::Duration;

use log::{info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::agent::Brain;
use crate::config::{Config, RunConfig};
use crate::error::Result;
use crate::metrics::ScoreLog;
use crate::visualization::draw_world;
use crate::world::{Transition, World};

const PLOT_WIDTH: usize = 60;
const PLOT_HEIGHT: usize = 12;

/// Switches taken from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrainerOptions {
    /// Redraw the grid every iteration
    pub draw: bool,
    /// Store experience and train
    pub learning: bool,
    /// Slow each step down and never learn
    pub demo: bool,
    /// Print an ASCII score chart with every report
    pub plot: bool,
}

impl Default for TrainerOptions {
    fn default() -> Self {
        Self {
            draw: true,
            learning: true,
            demo: false,
            plot: false,
        }
    }
}

pub struct Trainer<W: Write> {
    world: World,
    brain: Brain,
    score_log: ScoreLog,
    iter: u64,
    last_score: i64,
    options: TrainerOptions,
    run: RunConfig,
    rng: StdRng,
    out: W,
}

impl<W: Write> Trainer<W> {
    /// Set up the world, resume (or create) the brain and truncate the score log.
    pub fn new(config: Config, options: TrainerOptions, out: W) -> Result<Self> {
        config.validate()?;

        // The world draws from its own stream, offset from the brain's seed.
        let mut rng = match config.brain.seed {
            Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(1)),
            None => StdRng::from_entropy(),
        };
        let world = World::new(config.world.size, &mut rng)?;

        let mut brain = Brain::load_or_new(&config.run.snapshot_path, config.brain.clone())?;
        if options.demo || !options.learning {
            info!("learning disabled");
            brain.stop_learning();
        }

        let score_log = ScoreLog::create(&config.run.score_log_path)?;

        Ok(Trainer {
            world,
            brain,
            score_log,
            iter: 0,
            last_score: 0,
            options,
            run: config.run,
            rng,
            out,
        })
    }

    /// One iteration of the loop. Returns the transition the yop made.
    pub fn step(&mut self) -> Result<Transition> {
        if self.options.draw {
            write!(self.out, "{}", draw_world(&self.world))?;
            writeln!(self.out, "iter: {}", self.iter)?;
            writeln!(self.out, "score: {}", self.brain.score())?;
            self.out.flush()?;
        } else if self.iter % self.run.report_interval == 0 {
            self.report()?;
        }

        let direction = self.brain.compute_move(&self.world)?;
        let transition = self.world.step(direction, &mut self.rng);
        self.brain.reward(transition.reward, &self.world, direction, &transition.next)?;
        self.world = transition.next.clone();

        if self.options.demo {
            thread::sleep(Duration::from_millis(self.run.demo_delay_ms));
        }
        if self.brain.is_learning() && self.iter % self.run.save_freq == 0 {
            if let Err(err) = self.brain.save(&self.run.snapshot_path) {
                warn!("could not save snapshot at iteration {}: {}", self.iter, err);
            }
        }

        self.iter += 1;
        Ok(transition)
    }

    fn report(&mut self) -> Result<()> {
        let delta = self.brain.score() - self.last_score;
        self.score_log.record(delta)?;
        writeln!(self.out, "{}, {}", self.iter / self.run.report_interval, delta)?;
        if self.options.plot {
            write!(self.out, "{}", self.score_log.plot(PLOT_WIDTH, PLOT_HEIGHT))?;
        }
        self.out.flush()?;
        self.last_score = self.brain.score();
        Ok(())
    }

    /// Step `iterations` times, or forever when `None`.
    pub fn run(&mut self, iterations: Option<u64>) -> Result<()> {
        match iterations {
            Some(n) => {
                for _ in 0..n {
                    self.step()?;
                }
            }
            None => loop {
                self.step()?;
            },
        }
        Ok(())
    }

    pub fn iteration(&self) -> u64 {
        self.iter
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn brain(&self) -> &Brain {
        &self.brain
    }

    pub fn score_log(&self) -> &ScoreLog {
        &self.score_log
    }

    pub fn into_output(self) -> W {
        self.out
    }
}
