//! Scripted headless session: key events fed through the input bindings
//! frame by frame, plus placeholder sprite strips for running without art.

use skyward_assets::{AssetError, AssetServer, ImageAsset};
use skyward_core::{EntityId, GameTime};
use skyward_game::{
    ClipSpec, DirectHit, InputAction, InputHandler, PlayerConfig, PlayerController, PlayerState,
    Scene, SpritePaths, TrainingDummy,
};
use tracing::{debug, info, warn};
use winit::event::ElementState;
use winit::keyboard::{KeyCode, PhysicalKey};

/// Frame size of generated strips
const PLACEHOLDER_FRAME: u32 = 32;

/// Scene name of the player object
pub const PLAYER_NAME: &str = "Player";

/// Something that happens to the session on a given frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptEvent {
    Press(KeyCode),
    Release(KeyCode),
    /// Damage dealt to the player from outside the scene
    Damage(u32),
}

/// Frame-ordered list of events
#[derive(Debug, Clone, Default)]
pub struct Script {
    events: Vec<(u64, ScriptEvent)>,
}

impl Script {
    /// Walk right, jump, attack on the move, dash, pause for a moment, get
    /// hit, die.
    pub fn walkthrough() -> Self {
        use ScriptEvent::*;

        let mut script = Self::default();
        script
            .at(1, Press(KeyCode::KeyD))
            .at(20, Press(KeyCode::KeyW))
            .at(21, Release(KeyCode::KeyW))
            .at(60, Press(KeyCode::Space))
            .at(61, Release(KeyCode::Space))
            .at(80, Release(KeyCode::KeyD))
            .at(100, Press(KeyCode::ShiftLeft))
            .at(101, Release(KeyCode::ShiftLeft))
            .at(140, Press(KeyCode::Space))
            .at(141, Release(KeyCode::Space))
            .at(160, Press(KeyCode::Escape))
            .at(161, Release(KeyCode::Escape))
            .at(170, Press(KeyCode::Escape))
            .at(171, Release(KeyCode::Escape))
            .at(180, Damage(3))
            .at(240, Damage(100));
        script
    }

    pub fn at(&mut self, frame: u64, event: ScriptEvent) -> &mut Self {
        let index = self.events.partition_point(|(f, _)| *f <= frame);
        self.events.insert(index, (frame, event));
        self
    }

    /// Events due on `frame`, in insertion order
    pub fn events_at(&self, frame: u64) -> impl Iterator<Item = ScriptEvent> + '_ {
        self.events
            .iter()
            .filter(move |(f, _)| *f == frame)
            .map(|(_, event)| *event)
    }

    /// Feed key events into the handler and return the total damage due
    pub fn apply(&self, frame: u64, input: &mut InputHandler) -> u32 {
        let mut damage = 0;
        for event in self.events_at(frame) {
            debug!("Frame {}: {:?}", frame, event);
            match event {
                ScriptEvent::Press(key) => {
                    input.handle_keyboard(PhysicalKey::Code(key), ElementState::Pressed)
                }
                ScriptEvent::Release(key) => {
                    input.handle_keyboard(PhysicalKey::Code(key), ElementState::Released)
                }
                ScriptEvent::Damage(amount) => damage += amount,
            }
        }
        damage
    }

    pub fn last_frame(&self) -> u64 {
        self.events.last().map_or(0, |(frame, _)| *frame)
    }
}

/// Scene plus clock plus input, advanced one frame at a time.
///
/// Each frame feeds one frame of wall time equal to the tick length, so an
/// unpaused session at scale 1.0 runs exactly one tick per frame.
pub struct Session {
    time: GameTime,
    scene: Scene,
    input: InputHandler,
    script: Script,
    player_id: EntityId,
}

impl Session {
    /// Spawn the player and a training dummy named after the player's target
    pub fn new(
        time: GameTime,
        config: PlayerConfig,
        assets: &mut AssetServer,
        dummy_health: u32,
        script: Script,
    ) -> Result<Self, AssetError> {
        let target = config.target_name.clone();
        let mut player = PlayerController::spawn(config, assets, time.fixed_dt())?;
        player.set_name(PLAYER_NAME);

        let mut scene = Scene::new(Box::new(DirectHit::new()));
        let player_id = scene.spawn(PLAYER_NAME, player);
        scene.spawn(target.clone(), TrainingDummy::new(target, dummy_health));

        Ok(Self {
            time,
            scene,
            input: InputHandler::new(),
            script,
            player_id,
        })
    }

    /// Run one frame: scripted events, pause toggle, then however many
    /// ticks the clock allows. Returns the ids removed this frame.
    pub fn frame(&mut self) -> Vec<EntityId> {
        let frame = self.time.frame_count + 1;
        let damage = self.script.apply(frame, &mut self.input);

        if self.input.state.is_just_pressed(InputAction::Pause) {
            self.time.toggle_pause();
            info!(
                "Frame {}: {}",
                frame,
                if self.time.paused { "paused" } else { "resumed" }
            );
        }

        if damage > 0 {
            match self.scene.combatant_mut(PLAYER_NAME) {
                Some(player) => player.take_damage(damage),
                None => warn!("Frame {}: no player to damage", frame),
            }
        }

        let fixed_dt = self.time.fixed_dt();
        self.time.update(fixed_dt);

        let mut removed = Vec::new();
        for _ in 0..self.time.fixed_steps() {
            for id in self.scene.tick(&self.input.state) {
                if id == self.player_id {
                    info!("Player removed after {} ticks", self.scene.tick_count());
                }
                removed.push(id);
            }
        }
        self.input.end_frame();
        removed
    }

    /// Nothing left to happen: the script has played out and either the
    /// player is gone or the clock is paused with no event left to resume it.
    pub fn is_finished(&self) -> bool {
        self.time.frame_count >= self.script.last_frame()
            && (self.player().is_none() || self.time.paused)
    }

    pub fn player(&self) -> Option<&PlayerController> {
        self.scene
            .get(self.player_id)
            .and_then(|object| object.downcast_ref::<PlayerController>())
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn time(&self) -> &GameTime {
        &self.time
    }
}

/// Register a flat-colour strip for every player state under its configured
/// path, so spawning succeeds without files on disk.
pub fn register_placeholders(assets: &mut AssetServer, paths: &SpritePaths) {
    for state in PlayerState::ALL {
        let frames = ClipSpec::for_state(state).frame_count.max(1);
        let width = PLACEHOLDER_FRAME * frames;
        let shade = 40 + (state as u8) * 25;
        let data = [shade, shade, 255, 255].repeat((width * PLACEHOLDER_FRAME) as usize);
        assets.insert_image(paths.path(state), ImageAsset::from_rgba(width, PLACEHOLDER_FRAME, data));
    }
}
