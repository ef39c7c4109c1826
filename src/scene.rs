//! Scene lifecycle: menu, play, game over
//!
//! `App` owns the current scene and the high score store. The platform
//! layer feeds it keys and fixed frames, renders `App::view` and turns
//! `AppEvent`s into sounds.

use crate::highscores::HighScore;
use crate::input::Key;
use crate::platform::KeyValueStore;
use crate::renderer::Frame;
use crate::session::{Session, SessionEvent};
use crate::sim::{FadeOut, FadeState, Grid, SimError, World};

/// Cues for the audio layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEvent {
    FirstMove,
    EggEaten,
    LevelUp(u32),
    GameOver { score: u64 },
    /// The game over screen is up; `new_best` if the score beat the record
    Results { new_best: bool },
}

/// State shown after the snake dies
pub struct GameOverScreen {
    world: World,
    level: u32,
    fade: FadeOut,
    /// Record before this run, known once the fade ends
    best: Option<u64>,
}

impl GameOverScreen {
    fn new(world: World, level: u32) -> Self {
        Self {
            world,
            level,
            fade: FadeOut::new(),
            best: None,
        }
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    /// Waiting for a key to leave
    pub fn is_showing_results(&self) -> bool {
        self.best.is_some()
    }
}

pub enum Scene {
    Menu,
    Playing(Session),
    GameOver(GameOverScreen),
}

pub struct App<S> {
    grid: Grid,
    scene: Scene,
    high_score: HighScore<S>,
}

impl<S: KeyValueStore> App<S> {
    pub fn new(grid: Grid, store: S) -> Self {
        Self {
            grid,
            scene: Scene::Menu,
            high_score: HighScore::new(store),
        }
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn high_score(&self) -> &HighScore<S> {
        &self.high_score
    }

    /// Handle a key press. `seed` seeds a session if this key starts one.
    pub fn press(&mut self, key: Key, seed: u64) -> Vec<AppEvent> {
        match &mut self.scene {
            Scene::Menu => {
                if key == Key::Space {
                    self.start(seed);
                }
                Vec::new()
            }
            Scene::Playing(session) => {
                let result = session.press(key);
                self.handle_session(result)
            }
            Scene::GameOver(screen) => {
                if screen.is_showing_results() {
                    self.scene = Scene::Menu;
                }
                Vec::new()
            }
        }
    }

    /// Advance one fixed frame
    pub fn frame(&mut self) -> Vec<AppEvent> {
        match &mut self.scene {
            Scene::Menu => Vec::new(),
            Scene::Playing(session) => {
                let result = session.frame();
                self.handle_session(result)
            }
            Scene::GameOver(screen) => {
                if screen.fade.on_frame() != FadeState::Finished {
                    return Vec::new();
                }

                let score = screen.world.score();
                screen.best = Some(self.high_score.best());
                let new_best = self.high_score.record(score, screen.level);
                vec![AppEvent::Results { new_best }]
            }
        }
    }

    /// What the renderer should draw now
    pub fn view(&self) -> Frame<'_> {
        match &self.scene {
            Scene::Menu => Frame::Menu,
            Scene::Playing(session) => Frame::Play {
                world: session.world(),
                level: session.level(),
                grid: self.grid,
            },
            Scene::GameOver(screen) => match screen.best {
                Some(best) => Frame::GameOver {
                    score: screen.world.score(),
                    best,
                },
                None => Frame::Fading {
                    world: &screen.world,
                    level: screen.level,
                    grid: self.grid,
                    alpha: screen.fade.alpha(),
                },
            },
        }
    }

    fn start(&mut self, seed: u64) {
        match Session::new(self.grid, seed) {
            Ok(session) => self.scene = Scene::Playing(session),
            Err(e) => log::error!("Failed to start session: {}", e),
        }
    }

    fn handle_session(
        &mut self,
        result: Result<Vec<SessionEvent>, SimError>,
    ) -> Vec<AppEvent> {
        let events = match result {
            Ok(events) => events,
            Err(e) => {
                log::error!("Session aborted: {}", e);
                if let Scene::Playing(session) = &mut self.scene {
                    session.stop();
                }
                self.scene = Scene::Menu;
                return Vec::new();
            }
        };

        let mut cues = Vec::with_capacity(events.len());
        for event in events {
            match event {
                SessionEvent::FirstMove => cues.push(AppEvent::FirstMove),
                SessionEvent::EggEaten { .. } => cues.push(AppEvent::EggEaten),
                SessionEvent::LevelChanged { level, .. } => cues.push(AppEvent::LevelUp(level)),
                SessionEvent::GameOver { world, level } => {
                    if let Ok(json) = world.to_json() {
                        log::debug!("final world: {}", json);
                    }
                    cues.push(AppEvent::GameOver {
                        score: world.score(),
                    });
                    self.scene = Scene::GameOver(GameOverScreen::new(world, level));
                }
            }
        }
        cues
    }
}
