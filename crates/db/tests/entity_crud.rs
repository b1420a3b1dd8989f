//! Repository-level tests against a migrated database.

use grandline_core::pagination::PageRequest;
use grandline_db::models::boat::CreateBoat;
use grandline_db::models::character::CreateCharacter;
use grandline_db::models::crew::CreateCrew;
use grandline_db::models::devil_fruit::{CreateDevilFruit, CreateDevilFruitType};
use grandline_db::models::manga::{CreateManga, UpdateManga};
use grandline_db::models::user::CreateUser;
use grandline_db::repositories::{
    BoatRepo, CharacterRepo, CrewRepo, DevilFruitRepo, DevilFruitTypeRepo, MangaRepo, UserRepo,
};
use sqlx::PgPool;

fn character(name: &str) -> CreateCharacter {
    CreateCharacter {
        name: name.to_string(),
        ..Default::default()
    }
}

// ---------------------------------------------------------------------------
// Manga
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_manga_partial_update(pool: PgPool) {
    let manga = MangaRepo::create(
        &pool,
        &CreateManga {
            name: "One Piece".into(),
            image: "cover.png".into(),
        },
    )
    .await
    .unwrap();

    let updated = MangaRepo::update(
        &pool,
        manga.id,
        &UpdateManga {
            name: None,
            image: Some("cover-v2.png".into()),
        },
    )
    .await
    .unwrap()
    .unwrap();

    assert_eq!(updated.name, "One Piece");
    assert_eq!(updated.image, "cover-v2.png");

    let missing = MangaRepo::update(&pool, manga.id + 1000, &UpdateManga::default())
        .await
        .unwrap();
    assert!(missing.is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_manga_name_is_unique(pool: PgPool) {
    let input = CreateManga {
        name: "One Piece".into(),
        image: "a".into(),
    };
    MangaRepo::create(&pool, &input).await.unwrap();

    let err = MangaRepo::create(&pool, &input).await.unwrap_err();
    let db_err = err.as_database_error().expect("expected a database error");
    assert_eq!(db_err.code().as_deref(), Some("23505"));
    assert_eq!(db_err.constraint(), Some("uq_manga_name"));
}

// ---------------------------------------------------------------------------
// Users
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_user_lookup_by_name(pool: PgPool) {
    let created = UserRepo::create(
        &pool,
        &CreateUser {
            name: "nami".into(),
            email: "nami@test.com".into(),
            password_hash: "$argon2id$stub".into(),
        },
    )
    .await
    .unwrap();

    let found = UserRepo::find_by_name(&pool, "nami").await.unwrap().unwrap();
    assert_eq!(found.id, created.id);
    assert!(UserRepo::find_by_name(&pool, "NAMI").await.unwrap().is_none());
}

// ---------------------------------------------------------------------------
// Characters
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_character_accepts_dangling_references(pool: PgPool) {
    let input = CreateCharacter {
        crew_id: Some(9_999),
        devil_fruit_id: Some(8_888),
        ..character("Luffy")
    };
    let created = CharacterRepo::create(&pool, &input).await.unwrap();

    let found = CharacterRepo::find_by_id(&pool, created.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(found.crew_id, Some(9_999));
    assert_eq!(found.devil_fruit_id, Some(8_888));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_character_list_windows_by_id(pool: PgPool) {
    for i in 0..15 {
        CharacterRepo::create(&pool, &character(&format!("c{i}")))
            .await
            .unwrap();
    }

    let first = CharacterRepo::list(&pool, &PageRequest::default())
        .await
        .unwrap();
    assert_eq!(first.len(), 10);
    assert!(first.windows(2).all(|w| w[0].id < w[1].id));
    assert_eq!(first[0].name, "c0");

    let rest = CharacterRepo::list(&pool, &PageRequest::new(10, 10))
        .await
        .unwrap();
    assert_eq!(rest.len(), 5);
    assert_eq!(rest[0].name, "c10");

    let past_end = CharacterRepo::list(&pool, &PageRequest::new(100, 10))
        .await
        .unwrap();
    assert!(past_end.is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_character_replace_overwrites_all_columns(pool: PgPool) {
    let created = CharacterRepo::create(
        &pool,
        &CreateCharacter {
            strength: Some(10.0),
            weapon_id: Some(1),
            ..character("Zoro")
        },
    )
    .await
    .unwrap();

    let replaced = CharacterRepo::replace(&pool, created.id, &character("Roronoa Zoro"))
        .await
        .unwrap()
        .unwrap();

    assert_eq!(replaced.id, created.id);
    assert_eq!(replaced.name, "Roronoa Zoro");
    assert_eq!(replaced.strength, None);
    assert_eq!(replaced.weapon_id, None);

    let missing = CharacterRepo::replace(&pool, created.id + 1, &character("x"))
        .await
        .unwrap();
    assert!(missing.is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_character_delete_reports_whether_a_row_went(pool: PgPool) {
    let created = CharacterRepo::create(&pool, &character("Buggy")).await.unwrap();

    assert!(CharacterRepo::delete(&pool, created.id).await.unwrap());
    assert!(!CharacterRepo::delete(&pool, created.id).await.unwrap());
    assert!(CharacterRepo::find_by_id(&pool, created.id)
        .await
        .unwrap()
        .is_none());
}

// ---------------------------------------------------------------------------
// Crew children and lookups
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_crew_children_lookup_and_no_cascade(pool: PgPool) {
    let crew = CrewRepo::create(
        &pool,
        &CreateCrew {
            name: "Straw Hats".into(),
            flag: None,
            manga_id: None,
        },
    )
    .await
    .unwrap();

    let boat = BoatRepo::create(
        &pool,
        &CreateBoat {
            name: "Going Merry".into(),
            crew_id: crew.id,
            manga_id: None,
        },
    )
    .await
    .unwrap();
    CharacterRepo::create(
        &pool,
        &CreateCharacter {
            crew_id: Some(crew.id),
            ..character("Usopp")
        },
    )
    .await
    .unwrap();

    let boats = BoatRepo::list_by_crew_ids(&pool, &[crew.id]).await.unwrap();
    assert_eq!(boats.len(), 1);
    let members = CharacterRepo::list_by_crew_ids(&pool, &[crew.id])
        .await
        .unwrap();
    assert_eq!(members.len(), 1);
    assert!(BoatRepo::list_by_crew_ids(&pool, &[]).await.unwrap().is_empty());

    assert!(CrewRepo::delete(&pool, crew.id).await.unwrap());
    let orphan = BoatRepo::find_by_id(&pool, boat.id).await.unwrap().unwrap();
    assert_eq!(orphan.crew_id, Some(crew.id));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_type_lookup_by_id_set(pool: PgPool) {
    let paramecia = DevilFruitTypeRepo::create(
        &pool,
        &CreateDevilFruitType {
            name: "Paramecia".into(),
        },
    )
    .await
    .unwrap();
    let logia = DevilFruitTypeRepo::create(
        &pool,
        &CreateDevilFruitType {
            name: "Logia".into(),
        },
    )
    .await
    .unwrap();

    let found = DevilFruitTypeRepo::find_by_ids(&pool, &[logia.id, paramecia.id, 12_345])
        .await
        .unwrap();
    let mut names: Vec<_> = found.into_iter().map(|t| t.name).collect();
    names.sort();
    assert_eq!(names, vec!["Logia", "Paramecia"]);

    let fruit = DevilFruitRepo::create(
        &pool,
        &CreateDevilFruit {
            name: "Gomu Gomu no Mi".into(),
            type_id: paramecia.id,
            manga_id: None,
        },
    )
    .await
    .unwrap();
    assert_eq!(fruit.type_id, Some(paramecia.id));
}
