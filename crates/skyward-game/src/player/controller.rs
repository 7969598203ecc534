//! Player controller: input-driven state machine with per-tick gravity

use std::any::Any;

use glam::Vec2;
use skyward_assets::{AssetError, AssetServer, ImageHandle};
use skyward_core::{EntityId, Facing, Transform2D};
use tracing::{debug, info, warn};

use crate::animation::{Animation, SpriteDraw};
use crate::combat::{Attacker, CombatContext, Combatant};
use crate::input::{InputState, PlayerIntent};
use crate::scene::{Behavior, Lifecycle};

use super::{PlayerConfig, PlayerSprites, PlayerState, PowerUp};

/// What the player does this tick, chosen from the frame's input.
///
/// Variants are listed in precedence order. The `Run*` combinations move the
/// player as well as performing the action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerAction {
    RunJump,
    RunDash,
    RunAttack,
    Run,
    Jump,
    Dash,
    Attack,
    Idle,
    /// Airborne with nothing pressed: keep the current state
    Nothing,
}

impl PlayerAction {
    /// Resolve simultaneous inputs. Attacks are only considered once the
    /// cooldown has elapsed; idling requires being on the ground.
    pub fn select(intent: &PlayerIntent, attack_ready: bool, grounded: bool) -> Self {
        let running = intent.is_running();
        let attacking = intent.attack && attack_ready;

        if running && intent.jump {
            Self::RunJump
        } else if running && intent.dash {
            Self::RunDash
        } else if running && attacking {
            Self::RunAttack
        } else if running {
            Self::Run
        } else if intent.jump {
            Self::Jump
        } else if intent.dash {
            Self::Dash
        } else if attacking {
            Self::Attack
        } else if grounded {
            Self::Idle
        } else {
            Self::Nothing
        }
    }
}

/// The player entity: position, vertical motion, health and the action
/// state machine that drives its animation.
pub struct PlayerController {
    id: EntityId,
    name: String,
    config: PlayerConfig,
    transform: Transform2D,
    vertical_velocity: f32,
    grounded: bool,
    health: u32,
    score: u32,
    level: u32,
    attack_power: u32,
    attack_timer: f32,
    state: PlayerState,
    animation: Animation,
    sprites: PlayerSprites,
    active_power_up: Option<ImageHandle>,
    acquired_power_ups: Vec<PowerUp>,
    active_power_ups: Vec<PowerUp>,
    death_complete: bool,
    fixed_dt: f32,
}

impl PlayerController {
    /// Create a player standing at the configured spawn point.
    ///
    /// `fixed_dt` is the tick length in seconds; it drives the attack
    /// cooldown and animation playback.
    pub fn new(config: PlayerConfig, sprites: PlayerSprites, fixed_dt: f32) -> Self {
        let health = config.max_health;
        let state = if health == 0 {
            PlayerState::Death
        } else {
            PlayerState::Idle
        };

        Self {
            id: EntityId::new(),
            name: String::new(),
            transform: Transform2D::from_position(config.spawn_position()),
            vertical_velocity: 0.0,
            grounded: true,
            health,
            score: 0,
            level: 1,
            attack_power: config.attack_power,
            attack_timer: 0.0,
            state,
            animation: Animation::new(sprites.clip(state)),
            sprites,
            active_power_up: None,
            acquired_power_ups: Vec::new(),
            active_power_ups: Vec::new(),
            death_complete: false,
            fixed_dt,
            config,
        }
    }

    /// Load the sprite strips and create the player. Fails if any strip is
    /// missing; a player without sprites is not playable.
    pub fn spawn(
        config: PlayerConfig,
        assets: &mut AssetServer,
        fixed_dt: f32,
    ) -> Result<Self, AssetError> {
        let sprites = PlayerSprites::load(assets, &config.sprites)?;
        let player = Self::new(config, sprites, fixed_dt);
        info!("Player spawned at {:?}", player.position());
        Ok(player)
    }

    /// Run one tick. Returns [`Lifecycle::Destroy`] exactly once: on the tick
    /// the death animation is first seen complete.
    pub fn update(&mut self, input: &InputState, combat: &mut CombatContext<'_>) -> Lifecycle {
        let mut lifecycle = Lifecycle::Active;

        if !self.is_dead() {
            self.handle_input(&PlayerIntent::from_input(input), combat);
            self.apply_gravity();
            self.check_landing();
        } else if !self.death_complete && self.animation.is_complete() {
            self.death_complete = true;
            info!("Player '{}' death animation finished", self.name);
            lifecycle = Lifecycle::Destroy;
        }

        self.attack_timer = (self.attack_timer - self.fixed_dt).max(0.0);
        self.animation.advance(self.fixed_dt);
        lifecycle
    }

    /// Pick this tick's action, then apply lateral movement from held keys.
    pub fn handle_input(&mut self, intent: &PlayerIntent, combat: &mut CombatContext<'_>) {
        if self.is_dead() {
            return;
        }

        let action = PlayerAction::select(intent, self.attack_ready(), self.grounded);
        match action {
            PlayerAction::RunJump => {
                if !self.jump() {
                    self.run();
                }
            }
            PlayerAction::RunDash | PlayerAction::Dash => self.dash(),
            PlayerAction::RunAttack | PlayerAction::Attack => self.attack(combat),
            PlayerAction::Run => self.run(),
            PlayerAction::Jump => {
                self.jump();
            }
            PlayerAction::Idle => self.set_state(PlayerState::Idle),
            PlayerAction::Nothing => {}
        }

        // Full air control: held keys always move the player
        if intent.move_left {
            self.transform.position.x -= self.config.speed;
            self.transform.facing = Facing::Left;
        }
        if intent.move_right {
            self.transform.position.x += self.config.speed;
            self.transform.facing = Facing::Right;
        }
    }

    /// Integrate one tick of gravity while airborne
    pub fn apply_gravity(&mut self) {
        if !self.grounded {
            self.vertical_velocity += self.config.gravity;
            self.transform.position.y += self.vertical_velocity;
        }
    }

    /// Snap to the floor when reaching it; leave the ground when pushed off it
    pub fn check_landing(&mut self) {
        let ground = self.config.ground_level;
        let y = self.transform.position.y;

        if !self.grounded && y >= ground {
            self.grounded = true;
            self.transform.position.y = ground;
            self.vertical_velocity = 0.0;
            self.set_state(PlayerState::Fall);
        } else if self.grounded && y < ground {
            self.grounded = false;
        }
    }

    /// Transition to `new_state` and swap the animation. Re-entering the
    /// current state does nothing, and nothing leaves Death.
    pub fn set_state(&mut self, new_state: PlayerState) {
        if self.state.is_terminal() || self.state == new_state {
            return;
        }

        debug!("Player state {} -> {}", self.state, new_state);
        self.state = new_state;

        let clip = match new_state {
            PlayerState::Attack => self
                .active_power_ups
                .first()
                .and_then(|power_up| power_up.attack_clip)
                .unwrap_or_else(|| self.sprites.clip(PlayerState::Attack)),
            other => self.sprites.clip(other),
        };
        self.animation.configure(clip);

        if new_state == PlayerState::Jump {
            self.grounded = false;
        }
    }

    pub fn run(&mut self) {
        self.set_state(PlayerState::Run);
    }

    /// Start a jump if standing on the ground. Returns whether it happened.
    pub fn jump(&mut self) -> bool {
        if !self.grounded {
            return false;
        }
        self.vertical_velocity = -self.config.jump_force;
        self.grounded = false;
        self.set_state(PlayerState::Jump);
        true
    }

    /// Step forward by one dash increment in the facing direction
    pub fn dash(&mut self) {
        self.transform.advance(self.config.dash_step());
        self.set_state(PlayerState::Dash);
    }

    /// Attack the configured target. Without a target the swing still
    /// happens and the cooldown still starts, but nothing is resolved.
    pub fn attack(&mut self, combat: &mut CombatContext<'_>) {
        let attacker = self.attacker();
        match combat.targets.find_target(&self.config.target_name) {
            Some(target) => combat.resolver.perform_attack(&attacker, target),
            None => warn!(
                "No target named '{}', attack not resolved",
                self.config.target_name
            ),
        }

        self.attack_timer = self.config.attack_cooldown;
        self.set_state(PlayerState::Attack);
    }

    /// Lose `amount` health, never going below zero. Reaching zero enters
    /// Death; anything else plays the hit reaction.
    pub fn take_damage(&mut self, amount: u32) {
        if self.is_dead() {
            return;
        }

        self.health = self.health.saturating_sub(amount);
        if self.health > 0 {
            self.set_state(PlayerState::Hit);
        } else {
            info!("Player '{}' died", self.name);
            self.set_state(PlayerState::Death);
        }
    }

    pub fn attacker(&self) -> Attacker {
        Attacker {
            id: self.id,
            name: self.name.clone(),
            attack_power: self.attack_power,
        }
    }

    pub fn draw(&self) -> SpriteDraw {
        self.animation.draw(self.transform.position, self.transform.facing)
    }

    pub fn id(&self) -> EntityId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn health(&self) -> u32 {
        self.health
    }

    /// Overwrite health. Zero kills; a dead player stays dead.
    pub fn set_health(&mut self, health: u32) {
        if self.is_dead() {
            return;
        }
        self.health = health;
        if health == 0 {
            self.set_state(PlayerState::Death);
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Add `points` to the score
    pub fn update_score(&mut self, points: u32) {
        self.score = self.score.saturating_add(points);
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn update_level(&mut self, level: u32) {
        self.level = level;
    }

    pub fn attack_power(&self) -> u32 {
        self.attack_power
    }

    pub fn state(&self) -> PlayerState {
        self.state
    }

    pub fn is_dead(&self) -> bool {
        self.state.is_terminal()
    }

    pub fn position(&self) -> Vec2 {
        self.transform.position
    }

    /// Move the player from outside the state machine (knockback, teleport).
    /// Grounding is re-evaluated on the next tick.
    pub fn set_position(&mut self, position: Vec2) {
        self.transform.position = position;
    }

    pub fn facing(&self) -> Facing {
        self.transform.facing
    }

    pub fn vertical_velocity(&self) -> f32 {
        self.vertical_velocity
    }

    pub fn is_grounded(&self) -> bool {
        self.grounded
    }

    /// Seconds until the next attack is allowed
    pub fn attack_cooldown_remaining(&self) -> f32 {
        self.attack_timer
    }

    pub fn attack_ready(&self) -> bool {
        self.attack_timer <= 0.0
    }

    pub fn animation(&self) -> &Animation {
        &self.animation
    }

    pub fn config(&self) -> &PlayerConfig {
        &self.config
    }

    pub fn active_power_up(&self) -> Option<ImageHandle> {
        self.active_power_up
    }

    /// Show `image` as the active power-up
    pub fn apply_power_up(&mut self, image: ImageHandle) {
        self.active_power_up = Some(image);
    }

    /// Keep a picked-up power-up and show it as active
    pub fn collect_power_up(&mut self, power_up: PowerUp) {
        self.apply_power_up(power_up.image);
        self.add_power_up(power_up);
    }

    pub fn add_power_up(&mut self, power_up: PowerUp) {
        debug!("Player acquired power-up '{}'", power_up.name);
        self.acquired_power_ups.push(power_up);
    }

    pub fn acquired_power_ups(&self) -> &[PowerUp] {
        &self.acquired_power_ups
    }

    /// Power-ups in effect. The first one supplies the attack animation.
    pub fn set_active_power_ups(&mut self, power_ups: Vec<PowerUp>) {
        self.active_power_ups = power_ups;
    }

    pub fn active_power_ups(&self) -> &[PowerUp] {
        &self.active_power_ups
    }
}

impl Combatant for PlayerController {
    fn id(&self) -> EntityId {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn health(&self) -> u32 {
        self.health
    }

    fn take_damage(&mut self, amount: u32) {
        PlayerController::take_damage(self, amount);
    }
}

impl Behavior for PlayerController {
    fn update(&mut self, input: &InputState, combat: &mut CombatContext<'_>) -> Lifecycle {
        PlayerController::update(self, input, combat)
    }

    fn draw(&self) -> Option<SpriteDraw> {
        Some(PlayerController::draw(self))
    }

    fn as_combatant_mut(&mut self) -> Option<&mut dyn Combatant> {
        Some(self)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use skyward_assets::ImageAsset;

    use super::*;
    use crate::animation::AnimationClip;
    use crate::combat::{DirectHit, TrainingDummy};
    use crate::input::InputAction;

    const DT: f32 = 1.0 / 60.0;

    struct Harness {
        player: PlayerController,
        targets: Vec<TrainingDummy>,
        resolver: DirectHit,
        assets: AssetServer,
    }

    impl Harness {
        fn new() -> Self {
            Self::with_config(PlayerConfig::default())
        }

        fn with_config(config: PlayerConfig) -> Self {
            let mut assets = AssetServer::new("/nonexistent");
            for state in PlayerState::ALL {
                assets.insert_image(
                    config.sprites.path(state),
                    ImageAsset::from_rgba(1, 1, vec![0; 4]),
                );
            }
            let player = PlayerController::spawn(config, &mut assets, DT).unwrap();
            Self {
                player,
                targets: vec![TrainingDummy::new("Enemy", 1000)],
                resolver: DirectHit::new(),
                assets,
            }
        }

        fn tick(&mut self, held: &[InputAction], pressed: &[InputAction]) -> Lifecycle {
            let mut input = InputState::new();
            input.held.extend(held.iter().copied());
            input.just_pressed.extend(pressed.iter().copied());
            let mut combat = CombatContext::new(&mut self.targets, &mut self.resolver);
            self.player.update(&input, &mut combat)
        }

        fn idle(&mut self) -> Lifecycle {
            self.tick(&[], &[])
        }

        fn tick_until_grounded(&mut self, limit: usize) {
            for _ in 0..limit {
                self.idle();
                if self.player.is_grounded() {
                    return;
                }
            }
            panic!("player never landed");
        }
    }

    fn intent(left: bool, right: bool, jump: bool, dash: bool, attack: bool) -> PlayerIntent {
        PlayerIntent {
            move_left: left,
            move_right: right,
            jump,
            dash,
            attack,
        }
    }

    #[test]
    fn test_spawns_idle_on_the_floor() {
        let h = Harness::new();
        assert_eq!(h.player.state(), PlayerState::Idle);
        assert_eq!(h.player.position(), Vec2::new(50.0, 500.0));
        assert!(h.player.is_grounded());
        assert_eq!(h.player.health(), 10);
        assert_eq!(h.player.level(), 1);
        assert_eq!(h.player.facing(), Facing::Right);
    }

    #[test]
    fn test_zero_health_config_spawns_dead() {
        let h = Harness::with_config(PlayerConfig {
            max_health: 0,
            ..PlayerConfig::default()
        });
        assert_eq!(h.player.state(), PlayerState::Death);
    }

    #[test]
    fn test_missing_sprite_fails_spawn() {
        let mut assets = AssetServer::new("/nonexistent");
        let result = PlayerController::spawn(PlayerConfig::default(), &mut assets, DT);
        assert!(matches!(result, Err(AssetError::NotFound(_))));
    }

    #[test]
    fn test_action_precedence() {
        use PlayerAction::*;

        let cases = [
            (intent(false, true, true, true, true), true, true, RunJump),
            (intent(true, false, false, true, true), true, true, RunDash),
            (intent(false, true, false, false, true), true, true, RunAttack),
            (intent(false, true, false, false, true), false, true, Run),
            (intent(true, true, false, false, false), true, true, Run),
            (intent(false, false, true, true, true), true, true, Jump),
            (intent(false, false, false, true, true), true, true, Dash),
            (intent(false, false, false, false, true), true, true, Attack),
            (intent(false, false, false, false, true), false, true, Idle),
            (intent(false, false, false, false, false), true, true, Idle),
            (intent(false, false, false, false, false), true, false, Nothing),
            (intent(false, false, false, false, true), false, false, Nothing),
        ];

        for (intent, ready, grounded, expected) in cases {
            assert_eq!(
                PlayerAction::select(&intent, ready, grounded),
                expected,
                "{:?} ready={} grounded={}",
                intent,
                ready,
                grounded
            );
        }
    }

    #[test]
    fn test_health_never_goes_negative_and_death_sticks() {
        let mut h = Harness::new();
        let mut expected = 10u32;

        for amount in [3, 0, 4, 2, 5, 1, u32::MAX] {
            let was_dead = h.player.is_dead();
            h.player.take_damage(amount);
            if !was_dead {
                expected = expected.saturating_sub(amount);
            }
            assert_eq!(h.player.health(), expected);
            assert_eq!(h.player.is_dead(), expected == 0);
            if expected > 0 {
                assert_eq!(h.player.state(), PlayerState::Hit);
            }
            h.idle();
        }

        assert_eq!(h.player.state(), PlayerState::Death);
        let position = h.player.position();

        h.tick(&[InputAction::MoveRight], &[InputAction::Jump, InputAction::Attack]);
        h.player.set_state(PlayerState::Idle);
        h.player.set_health(10);

        assert_eq!(h.player.state(), PlayerState::Death);
        assert_eq!(h.player.position(), position);
        assert_eq!(h.player.health(), 0);
    }

    #[test]
    fn test_oversized_damage_kills_once() {
        let mut h = Harness::new();
        h.player.take_damage(25);
        assert_eq!(h.player.health(), 0);
        assert_eq!(h.player.state(), PlayerState::Death);

        let configured = h.player.animation().configure_count();
        h.player.take_damage(25);
        assert_eq!(h.player.animation().configure_count(), configured);
    }

    #[test]
    fn test_destroy_signal_fires_once() {
        let mut h = Harness::new();
        h.player.take_damage(10);

        let mut destroyed = 0;
        for _ in 0..300 {
            if h.idle() == Lifecycle::Destroy {
                destroyed += 1;
            }
        }
        assert_eq!(destroyed, 1);
    }

    #[test]
    fn test_death_waits_for_animation() {
        let mut h = Harness::new();
        h.player.take_damage(10);

        // 10 frames at 0.055s is well over a dozen ticks
        for _ in 0..12 {
            assert_eq!(h.idle(), Lifecycle::Active);
        }
    }

    #[test]
    fn test_run_and_jump_apply_both() {
        let mut h = Harness::new();
        h.tick(&[InputAction::MoveRight], &[InputAction::Jump]);

        assert_eq!(h.player.state(), PlayerState::Jump);
        assert_eq!(h.player.position().x, 55.0);
        assert!(!h.player.is_grounded());
        // jump velocity plus one tick of gravity
        assert_eq!(h.player.vertical_velocity(), -18.5);
        assert_eq!(h.player.position().y, 481.5);
    }

    #[test]
    fn test_run_and_dash_apply_both() {
        let mut h = Harness::new();
        h.tick(&[InputAction::MoveRight], &[InputAction::Dash]);

        assert_eq!(h.player.state(), PlayerState::Dash);
        assert_eq!(h.player.position().x, 50.0 + 20.0 + 5.0);
    }

    #[test]
    fn test_dash_follows_facing() {
        let mut h = Harness::new();
        h.tick(&[InputAction::MoveLeft], &[]);
        assert_eq!(h.player.facing(), Facing::Left);
        assert_eq!(h.player.position().x, 45.0);

        h.tick(&[], &[InputAction::Dash]);
        assert_eq!(h.player.state(), PlayerState::Dash);
        assert_eq!(h.player.position().x, 25.0);
    }

    #[test]
    fn test_attack_respects_cooldown() {
        let mut h = Harness::new();

        h.tick(&[], &[InputAction::Attack]);
        assert_eq!(h.player.state(), PlayerState::Attack);
        assert_eq!(h.resolver.resolved(), 1);
        assert_eq!(h.targets[0].health(), 990);
        let after_first = h.player.attack_cooldown_remaining();
        assert!(after_first > 0.0);

        h.tick(&[], &[InputAction::Attack]);
        assert_eq!(h.resolver.resolved(), 1);
        assert!(h.player.attack_cooldown_remaining() < after_first);

        for _ in 0..30 {
            h.idle();
        }
        assert!(h.player.attack_ready());
        assert_eq!(h.player.attack_cooldown_remaining(), 0.0);

        h.tick(&[], &[InputAction::Attack]);
        assert_eq!(h.resolver.resolved(), 2);
        assert_eq!(h.targets[0].health(), 980);
    }

    #[test]
    fn test_run_attack_during_cooldown_just_runs() {
        let mut h = Harness::new();
        h.tick(&[], &[InputAction::Attack]);
        h.tick(&[InputAction::MoveRight], &[InputAction::Attack]);

        assert_eq!(h.player.state(), PlayerState::Run);
        assert_eq!(h.resolver.resolved(), 1);
        assert_eq!(h.player.position().x, 55.0);
    }

    #[test]
    fn test_attack_without_target_still_swings() {
        let mut h = Harness::new();
        h.targets.clear();

        h.tick(&[], &[InputAction::Attack]);
        assert_eq!(h.player.state(), PlayerState::Attack);
        assert!(!h.player.attack_ready());
        assert_eq!(h.resolver.resolved(), 0);
    }

    #[test]
    fn test_jump_lands_exactly_on_the_floor() {
        let mut h = Harness::new();
        h.tick(&[], &[InputAction::Jump]);
        h.tick_until_grounded(100);

        assert_eq!(h.player.position().y, 500.0);
        assert_eq!(h.player.vertical_velocity(), 0.0);
        assert_eq!(h.player.state(), PlayerState::Fall);

        h.idle();
        assert_eq!(h.player.state(), PlayerState::Idle);
    }

    #[test]
    fn test_pushed_off_the_floor_falls_back() {
        let mut h = Harness::new();
        h.player.set_position(Vec2::new(50.0, 497.0));

        h.idle();
        assert!(!h.player.is_grounded());

        // 1.5 then 3.0 crosses the floor on the second tick
        h.idle();
        assert!(!h.player.is_grounded());
        h.idle();
        assert!(h.player.is_grounded());
        assert_eq!(h.player.position().y, 500.0);
        assert_eq!(h.player.vertical_velocity(), 0.0);
    }

    #[test]
    fn test_airborne_keeps_air_control_and_state() {
        let mut h = Harness::new();
        h.tick(&[], &[InputAction::Jump]);

        h.idle();
        assert_eq!(h.player.state(), PlayerState::Jump);

        let x = h.player.position().x;
        h.tick(&[InputAction::MoveLeft], &[]);
        assert_eq!(h.player.position().x, x - 5.0);
        assert_eq!(h.player.state(), PlayerState::Run);

        // no double jump
        let velocity = h.player.vertical_velocity();
        h.tick(&[], &[InputAction::Jump]);
        assert_eq!(h.player.vertical_velocity(), velocity + 1.5);
    }

    #[test]
    fn test_same_state_transition_is_a_no_op() {
        let mut h = Harness::new();
        let before = h.player.animation().configure_count();

        h.player.set_state(PlayerState::Idle);
        assert_eq!(h.player.animation().configure_count(), before);

        h.tick(&[InputAction::MoveRight], &[]);
        let running = h.player.animation().configure_count();
        assert_eq!(running, before + 1);

        h.tick(&[InputAction::MoveRight], &[]);
        assert_eq!(h.player.animation().configure_count(), running);
    }

    #[test]
    fn test_entering_jump_clears_grounded() {
        let mut h = Harness::new();
        h.player.set_state(PlayerState::Jump);
        assert!(!h.player.is_grounded());
        assert!(!h.player.animation().clip().looping);
    }

    #[test]
    fn test_hit_reaction_then_idle() {
        let mut h = Harness::new();
        h.player.take_damage(3);
        assert_eq!(h.player.state(), PlayerState::Hit);
        assert_eq!(h.player.health(), 7);

        h.idle();
        assert_eq!(h.player.state(), PlayerState::Idle);
    }

    #[test]
    fn test_power_up_supplies_attack_animation() {
        let mut h = Harness::new();
        let icon = h
            .assets
            .insert_image("PowerUps/Fire.png", ImageAsset::from_rgba(1, 1, vec![0; 4]));
        let clip = AnimationClip::once(9, 0.04, icon);

        h.player.collect_power_up(PowerUp::new("Fire", icon).with_attack_clip(clip));
        assert_eq!(h.player.active_power_up(), Some(icon));
        assert_eq!(h.player.acquired_power_ups().len(), 1);

        h.player.set_active_power_ups(h.player.acquired_power_ups().to_vec());
        h.tick(&[], &[InputAction::Attack]);
        assert_eq!(h.player.animation().clip(), &clip);
    }

    #[test]
    fn test_score_level_and_name() {
        let mut h = Harness::new();
        h.player.set_name("Ash");
        h.player.update_score(15);
        h.player.update_score(5);
        h.player.update_level(3);

        assert_eq!(h.player.name(), "Ash");
        assert_eq!(h.player.score(), 20);
        assert_eq!(h.player.level(), 3);
        assert_eq!(h.player.attacker().attack_power, 10);
    }

    #[test]
    fn test_set_health_zero_kills() {
        let mut h = Harness::new();
        h.player.set_health(4);
        assert_eq!(h.player.health(), 4);

        h.player.set_health(0);
        assert_eq!(h.player.state(), PlayerState::Death);
    }

    #[test]
    fn test_draw_tracks_position_and_facing() {
        let mut h = Harness::new();
        h.tick(&[InputAction::MoveLeft], &[]);

        let draw = h.player.draw();
        assert_eq!(draw.position, h.player.position());
        assert_eq!(draw.facing, Facing::Left);
        assert_eq!(draw.frame_count, 8);
    }
}
