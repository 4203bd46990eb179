//! End-to-end play-throughs driven through the public `Game` API

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use code_debugger::combat::Encounter;
use code_debugger::world::RoomContent;
use code_debugger::{DataManager, Game, GameState};

fn new_game(seed: u64) -> Game {
    Game::new(DataManager::load().unwrap(), Some(seed))
}

fn said(game: &Game, needle: &str) -> bool {
    game.messages().iter().any(|m| m.text.contains(needle))
}

fn count_said(game: &Game, needle: &str) -> usize {
    game.messages().iter().filter(|m| m.text.contains(needle)).count()
}

/// Make the next player hit lethal for any bug
fn overpower(game: &mut Game) {
    game.player_mut().vitals.attack = 1000;
}

#[test]
fn fresh_game_clean_start_then_bug_to_the_north() {
    let mut game = new_game(1);
    game.drain_messages();

    game.handle_command("look").unwrap();
    assert!(said(&game, "Module clean."));
    assert_eq!(game.player().location, 0);

    game.handle_command("move N").unwrap();
    assert_eq!(game.player().location, 1);
    assert!(said(&game, "You are in the Frontend Component."));
    assert!(said(&game, "[BUG ALERT]"));
    assert!(game.encounter().is_active_in(1));
    assert_eq!(game.map().room(1).map(|r| &r.content), Some(&RoomContent::Bug));
}

#[test]
fn live_bug_blocks_every_direction() {
    let mut game = new_game(2);
    game.handle_command("move n").unwrap();

    for dir in ["n", "e", "s", "w", "north", "sideways"] {
        game.drain_messages();
        game.handle_command(&format!("move {}", dir)).unwrap();
        assert!(said(&game, "[BLOCKED]"), "move {} was not blocked", dir);
        assert_eq!(game.player().location, 1);
    }
}

#[test]
fn squashing_a_bug_clears_room_heals_and_unblocks() {
    let mut game = new_game(3);
    game.handle_command("move n").unwrap();
    game.player_mut().vitals.take_damage(20);
    overpower(&mut game);

    game.drain_messages();
    game.handle_command("attack").unwrap();

    assert!(said(&game, "[SUCCESS]: You have squashed the"));
    assert!(!said(&game, "retaliates"));
    assert_eq!(game.map().room(1).map(|r| &r.content), Some(&RoomContent::Empty));
    assert_eq!(game.player().vitals.health, 85);
    assert!(matches!(game.encounter(), Encounter::Defeated { room: 1, .. }));
    // Room is re-rendered after the kill
    assert!(said(&game, "Module clean."));

    // Looking again never respawns
    game.handle_command("look").unwrap();
    assert!(game.active_bug().is_none());

    game.handle_command("move s").unwrap();
    assert_eq!(game.player().location, 0);
}

#[test]
fn kill_heal_is_capped_at_max() {
    let mut game = new_game(4);
    game.handle_command("move n").unwrap();
    game.player_mut().vitals.take_damage(2);
    overpower(&mut game);

    game.handle_command("attack").unwrap();
    assert_eq!(game.player().vitals.health, 100);
    assert_eq!(game.player().vitals.max_health, 100);
}

#[test]
fn surviving_bug_retaliates_within_bounds() {
    for seed in 0..50 {
        let mut game = new_game(seed);
        game.handle_command("move n").unwrap();
        let bug_attack = game.active_bug().unwrap().vitals.attack;
        let bug_health = game.active_bug().unwrap().vitals.health;

        game.handle_command("attack").unwrap();

        // 15 ± 5 never kills a 30 HP bug in one hit
        let bug = game.active_bug().unwrap();
        let dealt = bug_health - bug.vitals.health;
        assert!((10..=20).contains(&dealt), "player hit {}", dealt);

        let taken = 100 - game.player().vitals.health;
        assert!(
            taken >= bug_attack - 3 && taken <= bug_attack + 3,
            "bug hit {} for attack {}",
            taken,
            bug_attack
        );
    }
}

#[test]
fn collecting_every_feature_ships_once() {
    // Five rooms in a line, each holding a feature
    let world = r#"(
        rooms: [
            (name: "Alpha", exits: { East: 1 }, content: Feature),
            (name: "Beta", exits: { East: 2, West: 0 }, content: Feature),
            (name: "Gamma", exits: { East: 3, West: 1 }, content: Feature),
            (name: "Delta", exits: { East: 4, West: 2 }, content: Feature),
            (name: "Epsilon", exits: { West: 3 }, content: NamedFeature("Release Notes")),
        ],
        feature_pool: ["User Profiles", "API Caching", "Real-time Notifications", "Data Migration Script"],
        bug_names: ["Null Pointer"],
    )"#;
    let mut game = Game::new(DataManager::from_ron(world).unwrap(), Some(5));
    assert_eq!(game.map().total_features(), 5);
    game.drain_messages();

    for step in 0..5 {
        game.handle_command("collect").unwrap();
        assert_eq!(game.player().features_collected(), step + 1);
        if step < 4 {
            assert!(game.is_running());
            game.handle_command("move e").unwrap();
        }
    }

    assert_eq!(game.state(), &GameState::Victory);
    assert!(!game.is_running());
    assert_eq!(count_said(&game, "PROJECT SHIPPED SUCCESSFULLY"), 1);
    assert!(said(&game, "FINAL STATS: Max HP: 125, Features: 5"));
    assert_eq!(game.player().inventory().last().map(String::as_str), Some("Release Notes"));

    // Nothing more happens after shipping
    game.handle_command("collect").unwrap();
    game.handle_command("move w").unwrap();
    assert_eq!(count_said(&game, "PROJECT SHIPPED SUCCESSFULLY"), 1);
    assert_eq!(game.player().location, 4);
}

#[test]
fn default_world_can_be_won() {
    let mut game = new_game(6);
    game.handle_command("move e").unwrap();
    game.handle_command("collect").unwrap();
    assert!(game.is_running());

    game.handle_command("move n").unwrap();
    assert_eq!(game.player().location, 3);
    // One feature collected, room 3: level 1 + 0 + 1
    assert_eq!(game.active_bug().map(|b| b.level), Some(2));

    overpower(&mut game);
    game.handle_command("attack").unwrap();
    game.handle_command("move e").unwrap();
    assert_eq!(game.player().location, 4);

    game.drain_messages();
    game.handle_command("collect").unwrap();
    assert_eq!(game.state(), &GameState::Victory);
    assert_eq!(count_said(&game, "PROJECT SHIPPED SUCCESSFULLY"), 1);
    assert_eq!(
        game.player().inventory(),
        ["User Profiles".to_string(), "API Caching".to_string()]
    );
}

#[test]
fn dying_to_retaliation_ends_the_game() {
    let mut game = new_game(7);
    game.handle_command("move n").unwrap();
    game.player_mut().vitals.health = 1;
    // At most 5 damage, the bug survives and hits back
    game.player_mut().vitals.attack = 0;

    game.drain_messages();
    game.handle_command("attack").unwrap();

    assert_eq!(game.player().vitals.health, 0);
    assert!(!game.is_running());
    assert_eq!(game.state(), &GameState::GameOver { features_collected: 0 });
    assert!(said(&game, "[GAME OVER]"));
    assert!(said(&game, "--- [The Developer] has been eliminated! ---"));

    game.drain_messages();
    for cmd in ["look", "attack", "move s", "status", "help"] {
        game.handle_command(cmd).unwrap();
    }
    assert!(game.messages().is_empty());
    assert_eq!(game.player().location, 1);
}

#[test]
fn random_play_keeps_invariants() {
    let commands = [
        "look", "status", "help", "attack", "attack", "attack", "collect", "move n", "move e",
        "move s", "move w", "move x", "dance",
    ];

    for seed in 0..100 {
        let mut game = new_game(seed);
        let mut picker = StdRng::seed_from_u64(seed.wrapping_mul(31));

        for _ in 0..80 {
            let cmd = commands.choose(&mut picker).unwrap();
            game.handle_command(cmd).unwrap();

            let player = game.player();
            assert!(player.vitals.health >= 0);
            assert!(player.vitals.health <= player.vitals.max_health);
            assert_eq!(player.features_collected(), player.inventory().len());
            assert!(player.location < game.map().room_count());
            for room in game.map().rooms() {
                assert!(room.exits.values().all(|&to| to < game.map().room_count()));
            }
            if !game.is_running() {
                break;
            }
        }
    }
}
