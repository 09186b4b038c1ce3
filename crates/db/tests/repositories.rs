//! Repository tests against a real PostgreSQL database.
//!
//! These need `DATABASE_URL` pointing at a server where `sqlx::test` may
//! create scratch databases, so they are ignored by default. Run with
//! `cargo test -p spielplan-db -- --ignored`.

use assert_matches::assert_matches;
use chrono::{TimeZone, Utc};
use sqlx::PgPool;
use spielplan_db::models::favorite::FavoriteToggle;
use spielplan_db::models::game::CreateGame;
use spielplan_db::models::schedule::CreateScheduleEntry;
use spielplan_db::models::staff::CreateStaffMember;
use spielplan_db::models::team::CreateTeam;
use spielplan_db::models::todo::CreateTodo;
use spielplan_db::models::user::{CreateUser, User};
use spielplan_db::repositories::{
    FavoriteRepo, GameRepo, ScheduleRepo, StaffRepo, TeamRepo, TodoRepo, UserRepo,
};
use spielplan_db::user_store::{PgUserStore, UserStore};

async fn create_user(pool: &PgPool, username: &str) -> User {
    UserRepo::create(
        pool,
        &CreateUser {
            username: username.to_string(),
            password_hash: "$argon2id$v=19$placeholder".to_string(),
        },
    )
    .await
    .expect("user creation should succeed")
}

async fn create_team(pool: &PgPool, name: &str) -> i64 {
    TeamRepo::create(
        pool,
        &CreateTeam {
            name: name.to_string(),
            trainer: None,
            group_name: None,
        },
    )
    .await
    .expect("team creation should succeed")
    .id
}

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires DATABASE_URL"]
async fn test_duplicate_username_is_reported_as_none(pool: PgPool) {
    let store = PgUserStore::new(pool.clone());
    let input = CreateUser {
        username: "alice".to_string(),
        password_hash: "first".to_string(),
    };

    let first = store.insert(&input).await.expect("insert should succeed");
    assert!(first.is_some());

    let second = store
        .insert(&CreateUser {
            username: "alice".to_string(),
            password_hash: "second".to_string(),
        })
        .await
        .expect("duplicate must not surface as an error");
    assert!(second.is_none());

    let stored = UserRepo::find_by_username(&pool, "alice")
        .await
        .expect("lookup should succeed")
        .expect("alice exists");
    assert_eq!(stored.password_hash, "first", "stored hash must be unchanged");
}

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires DATABASE_URL"]
async fn test_user_lookups_return_none_when_absent(pool: PgPool) {
    assert!(UserRepo::find_by_id(&pool, 4242).await.unwrap().is_none());
    assert!(UserRepo::find_by_username(&pool, "ghost").await.unwrap().is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires DATABASE_URL"]
async fn test_todos_are_scoped_to_owner(pool: PgPool) {
    let alice = create_user(&pool, "alice").await;
    let bob = create_user(&pool, "bob").await;

    let later = CreateTodo {
        content: "Trikots waschen".to_string(),
        due: Utc.with_ymd_and_hms(2024, 6, 2, 10, 0, 0).unwrap(),
    };
    let sooner = CreateTodo {
        content: "Platz reservieren".to_string(),
        due: Utc.with_ymd_and_hms(2024, 6, 1, 10, 0, 0).unwrap(),
    };
    let todo = TodoRepo::create(&pool, alice.id, &later).await.unwrap();
    TodoRepo::create(&pool, alice.id, &sooner).await.unwrap();

    let listed = TodoRepo::list_for_user(&pool, alice.id).await.unwrap();
    let contents: Vec<&str> = listed.iter().map(|t| t.content.as_str()).collect();
    assert_eq!(contents, ["Platz reservieren", "Trikots waschen"]);
    assert!(TodoRepo::list_for_user(&pool, bob.id).await.unwrap().is_empty());

    // Bob cannot complete Alice's to-do.
    assert!(!TodoRepo::complete(&pool, bob.id, todo.id).await.unwrap());
    assert!(TodoRepo::complete(&pool, alice.id, todo.id).await.unwrap());
    assert_eq!(TodoRepo::list_for_user(&pool, alice.id).await.unwrap().len(), 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires DATABASE_URL"]
async fn test_favorite_toggle_round_trip(pool: PgPool) {
    let alice = create_user(&pool, "alice").await;
    let home = create_team(&pool, "Adler").await;
    let away = create_team(&pool, "Bären").await;
    let game_id = GameRepo::create(
        &pool,
        &CreateGame {
            home_team_id: home,
            away_team_id: away,
            home_goals: 2,
            away_goals: 1,
        },
    )
    .await
    .unwrap();

    assert_matches!(
        FavoriteRepo::toggle(&pool, alice.id, game_id).await,
        Ok(FavoriteToggle::Added)
    );
    let favorites = GameRepo::list_favorites(&pool, alice.id).await.unwrap();
    assert_eq!(favorites.len(), 1);
    assert_eq!(favorites[0].home_team, "Adler");
    assert!(favorites[0].is_favorite);

    assert_matches!(
        FavoriteRepo::toggle(&pool, alice.id, game_id).await,
        Ok(FavoriteToggle::Removed)
    );
    assert!(GameRepo::list_favorites(&pool, alice.id).await.unwrap().is_empty());

    assert_matches!(
        FavoriteRepo::toggle(&pool, alice.id, game_id + 100).await,
        Ok(FavoriteToggle::GameMissing)
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires DATABASE_URL"]
async fn test_update_result_reports_missing_game(pool: PgPool) {
    let home = create_team(&pool, "Adler").await;
    let away = create_team(&pool, "Bären").await;
    let game_id = GameRepo::create(
        &pool,
        &CreateGame {
            home_team_id: home,
            away_team_id: away,
            home_goals: 0,
            away_goals: 0,
        },
    )
    .await
    .unwrap();

    assert!(GameRepo::update_result(&pool, game_id, 3, 1).await.unwrap());
    assert!(!GameRepo::update_result(&pool, game_id + 1, 3, 1).await.unwrap());

    let scores = GameRepo::list_scores(&pool).await.unwrap();
    assert_eq!((scores[0].home_goals, scores[0].away_goals), (3, 1));
}

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires DATABASE_URL"]
async fn test_team_group_is_stored(pool: PgPool) {
    let team = TeamRepo::create(
        &pool,
        &CreateTeam {
            name: "Adler".to_string(),
            trainer: Some("Frau Weber".to_string()),
            group_name: Some("A".to_string()),
        },
    )
    .await
    .unwrap();

    let stored = TeamRepo::find_by_id(&pool, team.id).await.unwrap().expect("team exists");
    assert_eq!(stored.group_name.as_deref(), Some("A"));
}

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires DATABASE_URL"]
async fn test_schedule_reuses_fixture_and_orders_by_matchday(pool: PgPool) {
    let home = create_team(&pool, "Adler").await;
    let away = create_team(&pool, "Bären").await;
    let entry = |matchday, kickoff| CreateScheduleEntry {
        home_team_id: home,
        away_team_id: away,
        matchday,
        kickoff,
    };

    let later = ScheduleRepo::schedule(&pool, &entry(3, None)).await.unwrap();
    let kickoff = Utc.with_ymd_and_hms(2024, 5, 4, 15, 30, 0).unwrap();
    let first = ScheduleRepo::schedule(&pool, &entry(1, Some(kickoff))).await.unwrap();
    assert!(later.is_some() && first.is_some());

    // Same pairing on the same matchday is refused without an error.
    assert_eq!(ScheduleRepo::schedule(&pool, &entry(1, None)).await.unwrap(), None);

    let listed = ScheduleRepo::list(&pool).await.unwrap();
    let days: Vec<i32> = listed.iter().map(|s| s.matchday).collect();
    assert_eq!(days, [1, 3]);
    assert_eq!(listed[0].fixture_id, listed[1].fixture_id);
    assert_eq!(listed[0].kickoff, Some(kickoff));
    assert_eq!(listed[0].home_team, "Adler");

    assert!(ScheduleRepo::remove(&pool, listed[0].id).await.unwrap());
    assert!(!ScheduleRepo::remove(&pool, listed[0].id).await.unwrap());
    assert_eq!(ScheduleRepo::list(&pool).await.unwrap().len(), 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires DATABASE_URL"]
async fn test_staff_membership_round_trip(pool: PgPool) {
    let adler = create_team(&pool, "Adler").await;
    let baeren = create_team(&pool, "Bären").await;
    let jonas = StaffRepo::create(
        &pool,
        &CreateStaffMember {
            name: "Jonas Berg".to_string(),
            role: Some("Betreuer".to_string()),
        },
    )
    .await
    .unwrap();

    assert!(StaffRepo::assign(&pool, jonas.id, baeren).await.unwrap());
    assert!(StaffRepo::assign(&pool, jonas.id, adler).await.unwrap());
    assert!(!StaffRepo::assign(&pool, jonas.id, adler).await.unwrap());

    let memberships = StaffRepo::list_assignments(&pool).await.unwrap();
    let teams: Vec<&str> = memberships.iter().map(|m| m.team.as_str()).collect();
    assert_eq!(teams, ["Adler", "Bären"]);
    assert_eq!(memberships[0].role.as_deref(), Some("Betreuer"));

    assert!(StaffRepo::unassign(&pool, jonas.id, adler).await.unwrap());
    assert!(!StaffRepo::unassign(&pool, jonas.id, adler).await.unwrap());
    assert_eq!(StaffRepo::list_assignments(&pool).await.unwrap().len(), 1);
    assert!(StaffRepo::find_by_id(&pool, jonas.id + 1).await.unwrap().is_none());
}
