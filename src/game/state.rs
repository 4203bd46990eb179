//! Game state machine
//!
//! `Game` is the context object for one run. It owns the player, the working
//! map, the active encounter, the RNG and the message log; every command
//! handler mutates it and appends feedback to the log.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::command::{help_lines, Command};
use super::error::GameError;
use crate::combat::{roll_bug_damage, roll_player_damage, Encounter};
use crate::data::DataManager;
use crate::entities::player::{FEATURE_HEAL, FEATURE_MAX_HEALTH_BONUS};
use crate::entities::{spawn_bug, Bug, Player};
use crate::progression::BugScaling;
use crate::world::{Direction, Map, Room, RoomContent};

/// Health restored for squashing a bug
pub const BUG_KILL_HEAL: i32 = 5;

/// The main game struct that holds all run data
pub struct Game {
    /// Current game state
    state: GameState,
    /// Validated world data; the template every run copies from
    data: DataManager,
    /// Working copy of the map for this run
    map: Map,
    player: Player,
    /// Bug currently being fought, if any
    encounter: Encounter,
    /// Random number generator (seeded for reproducibility)
    rng: StdRng,
    /// Feedback not yet shown to the player
    messages: Vec<GameMessage>,
}

/// All possible game states
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameState {
    /// Accepting commands
    Playing,
    /// Player health reached zero
    GameOver { features_collected: usize },
    /// Every feature collected
    Victory,
    /// Player quit
    Quit,
}

impl GameState {
    pub fn is_running(&self) -> bool {
        matches!(self, GameState::Playing)
    }
}

/// A line of feedback for the player
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameMessage {
    pub text: String,
    pub category: MessageCategory,
}

/// Categories for message filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageCategory {
    Combat,
    Item,
    System,
    Warning,
}

impl Game {
    /// Create a game and start its first run.
    ///
    /// With `seed` set, every roll (bug names, damage, auth token) is reproducible.
    pub fn new(data: DataManager, seed: Option<u64>) -> Self {
        let map = data.new_map();
        let player = Player::new(map.start_room);
        let mut game = Self {
            state: GameState::Playing,
            data,
            map,
            player,
            encounter: Encounter::NoBug,
            rng: StdRng::from_entropy(),
            messages: Vec::new(),
        };
        game.start_new_run(seed);
        game
    }

    /// Start a new run from the untouched world template
    pub fn start_new_run(&mut self, seed: Option<u64>) {
        self.rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_entropy(),
        };
        self.map = self.data.new_map();
        self.player = Player::new(self.map.start_room);
        self.encounter = Encounter::NoBug;
        self.messages.clear();
        self.set_state(GameState::Playing);

        log::info!(
            "New run: {} rooms, {} features to ship",
            self.map.room_count(),
            self.map.total_features()
        );

        self.add_message(
            "--- Code Debugger Adventure: The Software Engineering RPG ---",
            MessageCategory::System,
        );
        self.add_message(
            "Goal: Collect features and squash all bugs to ship the final product!",
            MessageCategory::System,
        );
        self.add_message("Type 'help' for commands.\n", MessageCategory::System);

        let auth_token: u32 = self.rng.gen_range(1000..=9999);
        self.add_message(
            format!("Initializing system... Auth Token: {}", auth_token),
            MessageCategory::System,
        );
        self.show_status();
        if let Err(e) = self.look() {
            self.report_fault(&e.to_string());
        }
    }

    /// Handle one line of player input.
    ///
    /// Input is ignored once the game has ended. Errors are unexpected
    /// faults; the caller reports them and keeps going.
    pub fn handle_command(&mut self, input: &str) -> Result<(), GameError> {
        if !self.is_running() {
            log::debug!("Ignoring input after game end: {:?}", input);
            return Ok(());
        }
        let Some(command) = Command::parse(input) else {
            return Ok(());
        };
        log::debug!("Command: {:?}", command);

        match command {
            Command::Help => {
                self.show_help();
                Ok(())
            }
            Command::Look => self.look(),
            Command::Status => {
                self.show_status();
                Ok(())
            }
            Command::Move(direction) => self.move_player(direction),
            Command::Attack => self.attack(),
            Command::Collect => self.collect(),
            Command::Quit => {
                self.add_message(
                    "Exiting Code Debugger Adventure. Work in progress...",
                    MessageCategory::System,
                );
                self.set_state(GameState::Quit);
                Ok(())
            }
            Command::Unknown(word) => {
                self.add_message(
                    format!(
                        "[ERROR]: Unknown command '{}'. Type 'help' for a list of commands.",
                        word
                    ),
                    MessageCategory::Warning,
                );
                Ok(())
            }
        }
    }

    /// Report a fault caught while handling a command
    pub fn report_fault(&mut self, description: &str) {
        log::warn!("Command fault: {}", description);
        self.add_message(
            format!(
                "\n[SYSTEM ERROR]: An unexpected error occurred: {}. Please try again.",
                description
            ),
            MessageCategory::Warning,
        );
    }

    /// Describe the current room; spawns its bug if it has one and none is active
    pub fn look(&mut self) -> Result<(), GameError> {
        let room = self.current_room()?;
        let name = room.name.clone();
        let exits = room.exit_summary();
        let content = room.content.clone();

        self.add_message(
            format!("\n[CURRENT LOCATION]: You are in the {}.", name),
            MessageCategory::System,
        );
        self.add_message(format!("Available Exits: {}", exits), MessageCategory::System);

        match content {
            RoomContent::Bug => {
                self.ensure_encounter()?;
                let health = self
                    .encounter
                    .active_bug()
                    .map(|bug| bug.vitals.health_display())
                    .ok_or(GameError::EncounterMissing {
                        room: self.player.location,
                    })?;
                self.add_message(
                    "!!! WARNING: A Bug detected in this module! You must 'attack' it!",
                    MessageCategory::Warning,
                );
                self.add_message(format!("Bug Health: {}", health), MessageCategory::Warning);
            }
            RoomContent::Feature(feature) => {
                self.add_message(
                    format!(
                        "[*] Found a valuable Feature: {}! Type 'collect' to implement it.",
                        feature
                    ),
                    MessageCategory::Item,
                );
            }
            RoomContent::Empty => {
                self.add_message(
                    "[STATUS]: Module clean. No outstanding issues or features.",
                    MessageCategory::System,
                );
            }
        }
        Ok(())
    }

    pub fn show_status(&mut self) {
        for line in self.player.status_lines() {
            self.add_message(line, MessageCategory::System);
        }
    }

    pub fn show_help(&mut self) {
        for line in help_lines() {
            self.add_message(line, MessageCategory::System);
        }
    }

    /// Move through an exit of the current room.
    ///
    /// A live bug in the room blocks every direction.
    pub fn move_player(&mut self, direction: Option<Direction>) -> Result<(), GameError> {
        self.ensure_encounter()?;
        if self.encounter.is_active_in(self.player.location) {
            self.add_message(
                "\n[BLOCKED]: You must 'attack' and squash the active bug before moving!",
                MessageCategory::Warning,
            );
            return Ok(());
        }

        let target = match direction {
            Some(d) => self.current_room()?.exit(d),
            None => None,
        };
        let Some(target) = target else {
            self.add_message(
                "\n[INVALID MOVE]: You can't go that way. Check the available exits.",
                MessageCategory::Warning,
            );
            return Ok(());
        };

        if self.map.room(target).is_none() {
            return Err(GameError::RoomOutOfBounds {
                index: target,
                rooms: self.map.room_count(),
            });
        }

        log::debug!("Player moved: room {} -> room {}", self.player.location, target);
        self.player.location = target;
        self.look()
    }

    /// One round of combat: the player strikes first, a surviving bug hits back
    pub fn attack(&mut self) -> Result<(), GameError> {
        let room = self.player.location;
        if !self.current_room()?.content.is_bug() {
            self.add_message(
                "\n[DEBUGGING]: There is no bug to attack here. Proceed with caution.",
                MessageCategory::System,
            );
            return Ok(());
        }
        if self.ensure_encounter()? {
            self.add_message(
                "Combat initiated! Use the 'attack' command to fight.",
                MessageCategory::Combat,
            );
        }

        let player_damage = roll_player_damage(self.player.vitals.attack, &mut self.rng);
        let (bug_name, bug_report, bug_alive, bug_attack) = {
            let bug = self
                .encounter
                .active_bug_mut()
                .ok_or(GameError::EncounterMissing { room })?;
            bug.vitals.take_damage(player_damage);
            (
                bug.vitals.name.clone(),
                bug.vitals.hit_report(player_damage),
                bug.vitals.is_alive(),
                bug.vitals.attack,
            )
        };
        self.add_message(
            format!(
                "\n> You debug and commit a change, dealing {} damage to the {}!",
                player_damage, bug_name
            ),
            MessageCategory::Combat,
        );
        self.add_message(bug_report, MessageCategory::Combat);

        if !bug_alive {
            return self.squash_bug();
        }

        let bug_damage = roll_bug_damage(bug_attack, &mut self.rng);
        self.player.vitals.take_damage(bug_damage);
        self.add_message(
            format!(
                "> The {} retaliates and causes a crash, dealing {} damage to you!",
                bug_name, bug_damage
            ),
            MessageCategory::Combat,
        );
        let player_report = self.player.vitals.hit_report(bug_damage);
        self.add_message(player_report, MessageCategory::Combat);

        if !self.player.vitals.is_alive() {
            self.game_over();
        }
        Ok(())
    }

    /// Pick up the feature in the current room
    pub fn collect(&mut self) -> Result<(), GameError> {
        let feature = self
            .current_room()?
            .content
            .feature_name()
            .map(str::to_string);
        let Some(feature) = feature else {
            self.add_message(
                "\n[NOTE]: Nothing valuable to collect here.",
                MessageCategory::System,
            );
            return Ok(());
        };

        self.current_room_mut()?.content = RoomContent::Empty;
        self.player.add_feature(feature.clone());
        log::info!(
            "Collected '{}' ({}/{})",
            feature,
            self.player.features_collected(),
            self.map.total_features()
        );

        self.add_message(
            format!(
                "\n[Feature Collected]: You implemented '{}'! (+{} Max HP, +{} HP)",
                feature, FEATURE_MAX_HEALTH_BONUS, FEATURE_HEAL
            ),
            MessageCategory::Item,
        );
        self.add_message(
            format!("Current Max HP: {}", self.player.vitals.max_health),
            MessageCategory::Item,
        );

        if self.player.features_collected() >= self.map.total_features() {
            self.victory();
            Ok(())
        } else {
            self.look()
        }
    }

    /// Spawn the current room's bug unless one is already active there.
    /// Returns true if a bug was spawned.
    fn ensure_encounter(&mut self) -> Result<bool, GameError> {
        let room = self.player.location;
        let has_bug = self.current_room()?.content.is_bug();
        let scaling = BugScaling::for_progress(self.player.features_collected(), room);

        let names = self.data.bug_names();
        let rng = &mut self.rng;
        let spawned = self
            .encounter
            .ensure_for_room(room, has_bug, || spawn_bug(scaling, names, rng));

        let alert = self.encounter.active_bug().filter(|_| spawned).map(Bug::alert);
        if let Some(alert) = alert {
            self.add_message(alert, MessageCategory::Combat);
        }
        Ok(spawned)
    }

    /// Clear a defeated bug from the room and reward the player
    fn squash_bug(&mut self) -> Result<(), GameError> {
        let room = self.player.location;
        let Some((_, bug)) = self.encounter.resolve_defeat() else {
            return Err(GameError::EncounterMissing { room });
        };

        self.current_room_mut()?.content = RoomContent::Empty;
        self.player.vitals.heal(BUG_KILL_HEAL);
        log::info!("Squashed level {} '{}' in room {}", bug.level, bug.vitals.name, room);

        self.add_message(bug.vitals.elimination_notice(), MessageCategory::Combat);
        self.add_message(
            format!("\n[SUCCESS]: You have squashed the {}!", bug.vitals.name),
            MessageCategory::Combat,
        );
        self.add_message(
            "You receive a small health boost for eliminating the threat.",
            MessageCategory::Combat,
        );
        self.look()
    }

    fn game_over(&mut self) {
        let features_collected = self.player.features_collected();
        let notice = self.player.vitals.elimination_notice();
        self.add_message(notice, MessageCategory::Combat);
        self.add_message(
            "\n[GAME OVER]: Your system crashed. The project failed. You couldn't squash the bug.",
            MessageCategory::Warning,
        );
        self.add_message(
            format!(
                "You managed to collect {} features before failing.",
                features_collected
            ),
            MessageCategory::Warning,
        );
        log::info!("Game over with {} features collected", features_collected);
        self.set_state(GameState::GameOver { features_collected });
    }

    fn victory(&mut self) {
        let rule = "=".repeat(50);
        self.add_message(format!("\n{}", rule), MessageCategory::System);
        self.add_message("!!! PROJECT SHIPPED SUCCESSFULLY !!!", MessageCategory::System);
        self.add_message(
            "You have collected all critical features. The release is out the door.",
            MessageCategory::System,
        );
        self.add_message(
            format!(
                "FINAL STATS: Max HP: {}, Features: {}",
                self.player.vitals.max_health,
                self.player.features_collected()
            ),
            MessageCategory::System,
        );
        self.add_message(rule, MessageCategory::System);
        log::info!("Project shipped with {} features", self.player.features_collected());
        self.set_state(GameState::Victory);
    }

    fn current_room(&self) -> Result<&Room, GameError> {
        let index = self.player.location;
        self.map.room(index).ok_or(GameError::RoomOutOfBounds {
            index,
            rooms: self.map.room_count(),
        })
    }

    fn current_room_mut(&mut self) -> Result<&mut Room, GameError> {
        let index = self.player.location;
        let rooms = self.map.room_count();
        self.map
            .room_mut(index)
            .ok_or(GameError::RoomOutOfBounds { index, rooms })
    }

    /// Get the current game state
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Set a new game state
    fn set_state(&mut self, state: GameState) {
        log::debug!("State transition: {:?} -> {:?}", self.state, state);
        self.state = state;
    }

    /// True while commands are accepted
    pub fn is_running(&self) -> bool {
        self.state.is_running()
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }

    /// Get the working map
    pub fn map(&self) -> &Map {
        &self.map
    }

    /// Get the world data this game was built from
    pub fn data(&self) -> &DataManager {
        &self.data
    }

    pub fn encounter(&self) -> &Encounter {
        &self.encounter
    }

    pub fn active_bug(&self) -> Option<&Bug> {
        self.encounter.active_bug()
    }

    pub fn active_bug_mut(&mut self) -> Option<&mut Bug> {
        self.encounter.active_bug_mut()
    }

    /// Messages not yet drained
    pub fn messages(&self) -> &[GameMessage] {
        &self.messages
    }

    /// Take every pending message, leaving the log empty
    pub fn drain_messages(&mut self) -> Vec<GameMessage> {
        std::mem::take(&mut self.messages)
    }

    /// Add a message to the log
    pub fn add_message(&mut self, text: impl Into<String>, category: MessageCategory) {
        self.messages.push(GameMessage {
            text: text.into(),
            category,
        });
    }
}
