//! Turn table and movement permission

use junction_signals::simulation::{
    is_movement_allowed, turn_for, Road, SignalColor, SignalController, SignalState, SimError, Turn,
};

#[test]
fn test_turn_table() {
    use Road::*;
    use Turn::*;

    let table = [
        (North, East, Left),
        (North, South, Straight),
        (North, West, Right),
        (East, South, Left),
        (East, West, Straight),
        (East, North, Right),
        (South, West, Left),
        (South, North, Straight),
        (South, East, Right),
        (West, North, Left),
        (West, East, Straight),
        (West, South, Right),
    ];

    for (origin, destination, turn) in table {
        assert_eq!(
            turn_for(origin, destination),
            Ok(turn),
            "{} -> {}",
            origin,
            destination
        );
    }
}

#[test]
fn test_straight_always_leads_to_the_opposite_road() {
    for road in Road::ALL {
        assert_eq!(turn_for(road, road.opposite()), Ok(Turn::Straight));
    }
}

#[test]
fn test_same_road_is_illegal() {
    for road in Road::ALL {
        assert_eq!(turn_for(road, road), Err(SimError::IllegalMovement { road }));
        assert!(is_movement_allowed(road, road, &SignalState::new()).is_err());
    }
}

#[test]
fn test_movement_allowed_follows_the_governing_light() {
    for origin in Road::ALL {
        for destination in Road::ALL.into_iter().filter(|&d| d != origin) {
            let turn = turn_for(origin, destination).unwrap();

            for color in [SignalColor::Red, SignalColor::Green] {
                let mut state = SignalState::new();
                state.set(origin, turn, color);
                assert_eq!(
                    is_movement_allowed(origin, destination, &state),
                    Ok(color == SignalColor::Green),
                    "{} -> {} with {}-{} {}",
                    origin,
                    destination,
                    origin,
                    turn,
                    color
                );
            }
        }
    }
}

#[test]
fn test_other_lights_do_not_grant_movement() {
    // Everything green except North-Straight
    let mut state = SignalState::new();
    for road in Road::ALL {
        for turn in Turn::ALL {
            state.set(road, turn, SignalColor::Green);
        }
    }
    state.set(Road::North, Turn::Straight, SignalColor::Red);

    assert_eq!(is_movement_allowed(Road::North, Road::South, &state), Ok(false));
    assert_eq!(is_movement_allowed(Road::North, Road::East, &state), Ok(true));
}

#[test]
fn test_controller_movement_check_surfaces_illegal_movement() {
    let mut controller = SignalController::new();
    controller.toggle(Road::West, Turn::Left);

    assert_eq!(controller.is_movement_allowed(Road::West, Road::North), Ok(true));
    assert_eq!(controller.is_movement_allowed(Road::West, Road::East), Ok(false));
    assert!(controller.is_movement_allowed(Road::West, Road::West).is_err());
}

#[test]
fn test_enumerants_parse_case_insensitively() {
    assert_eq!("n".parse::<Road>(), Ok(Road::North));
    assert_eq!(" W ".parse::<Road>(), Ok(Road::West));
    assert_eq!("r".parse::<Turn>(), Ok(Turn::Right));
    assert_eq!("GREEN".parse::<SignalColor>(), Ok(SignalColor::Green));
    assert!(matches!("north".parse::<Road>(), Err(SimError::InvalidKey(_))));
    assert!(matches!("U".parse::<Turn>(), Err(SimError::InvalidKey(_))));
    assert!(matches!("yellow".parse::<SignalColor>(), Err(SimError::InvalidKey(_))));
}
