//! Tests for the routing system
//!
//! Validates route definitions, path rendering, and URL recognition for
//! the application's routing table.

use super::MainRoute;
use yew_router::Routable;

/// Tests route enum variants
#[test]
fn test_route_variants() {
    let home = MainRoute::Home;
    let login = MainRoute::Login;
    let teams = MainRoute::Teams;
    let boards = MainRoute::Boards;
    let not_found = MainRoute::NotFound;
    let team_detail = MainRoute::TeamDetail {
        team_id: "team-123".to_string(),
    };

    assert!(format!("{home:?}").contains("Home"));
    assert!(format!("{login:?}").contains("Login"));
    assert!(format!("{teams:?}").contains("Teams"));
    assert!(format!("{boards:?}").contains("Boards"));
    assert!(format!("{not_found:?}").contains("NotFound"));
    assert!(format!("{team_detail:?}").contains("TeamDetail"));
}

/// Tests the rendered path for each route
#[test]
fn test_route_paths() {
    assert_eq!(MainRoute::Home.to_path(), "/");
    assert_eq!(MainRoute::Login.to_path(), "/login");
    assert_eq!(MainRoute::Teams.to_path(), "/team");
    assert_eq!(MainRoute::Boards.to_path(), "/board");
    assert_eq!(
        MainRoute::TeamDetail {
            team_id: "t1".to_string()
        }
        .to_path(),
        "/team/t1"
    );
    assert_eq!(
        MainRoute::BoardDetail {
            board_id: "b1".to_string()
        }
        .to_path(),
        "/board/b1"
    );
}

/// Tests URL recognition, including the catch-all
#[test]
fn test_route_recognition() {
    assert_eq!(MainRoute::recognize("/"), Some(MainRoute::Home));
    assert_eq!(MainRoute::recognize("/login"), Some(MainRoute::Login));
    assert_eq!(
        MainRoute::recognize("/team/abc"),
        Some(MainRoute::TeamDetail {
            team_id: "abc".to_string()
        })
    );
    assert_eq!(
        MainRoute::recognize("/no/such/page"),
        Some(MainRoute::NotFound)
    );
}

/// Tests route equality
#[test]
fn test_route_equality() {
    assert_eq!(MainRoute::Teams, MainRoute::Teams);

    let first = MainRoute::BoardDetail {
        board_id: "b-1".to_string(),
    };
    let second = MainRoute::BoardDetail {
        board_id: "b-1".to_string(),
    };
    assert_eq!(first, second);

    let third = MainRoute::BoardDetail {
        board_id: "b-2".to_string(),
    };
    assert_ne!(first, third);
}
