//! Route definitions for the series catalogue entities.

use axum::routing::get;
use axum::Router;

use crate::handlers::{
    boat, character, crew, devil_fruit, devil_fruit_type, haki, haki_type, island, manga, rank,
    region, weapon,
};
use crate::state::AppState;

/// ```text
/// GET    /mangas/                 -> manga::list
/// POST   /mangas/                 -> manga::create
/// GET    /mangas/{id}             -> manga::get_by_id
/// PATCH  /mangas/{id}             -> manga::update
///
/// For every other resource:
/// GET    /<resource>/             -> list
/// POST   /<resource>/             -> create
/// GET    /<resource>/{id}         -> get_by_id
/// PUT    /<resource>/{id}         -> update
/// DELETE /<resource>/{id}         -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/mangas/", get(manga::list).post(manga::create))
        .route("/mangas/{id}", get(manga::get_by_id).patch(manga::update))
        .route("/characters/", get(character::list).post(character::create))
        .route(
            "/characters/{id}",
            get(character::get_by_id)
                .put(character::update)
                .delete(character::delete),
        )
        .route(
            "/devilfruits/",
            get(devil_fruit::list).post(devil_fruit::create),
        )
        .route(
            "/devilfruits/{id}",
            get(devil_fruit::get_by_id)
                .put(devil_fruit::update)
                .delete(devil_fruit::delete),
        )
        .route(
            "/devilfruit-types/",
            get(devil_fruit_type::list).post(devil_fruit_type::create),
        )
        .route(
            "/devilfruit-types/{id}",
            get(devil_fruit_type::get_by_id)
                .put(devil_fruit_type::update)
                .delete(devil_fruit_type::delete),
        )
        .route("/weapons/", get(weapon::list).post(weapon::create))
        .route(
            "/weapons/{id}",
            get(weapon::get_by_id)
                .put(weapon::update)
                .delete(weapon::delete),
        )
        .route("/haki/", get(haki::list).post(haki::create))
        .route(
            "/haki/{id}",
            get(haki::get_by_id).put(haki::update).delete(haki::delete),
        )
        .route(
            "/haki-types/",
            get(haki_type::list).post(haki_type::create),
        )
        .route(
            "/haki-types/{id}",
            get(haki_type::get_by_id)
                .put(haki_type::update)
                .delete(haki_type::delete),
        )
        .route("/boats/", get(boat::list).post(boat::create))
        .route(
            "/boats/{id}",
            get(boat::get_by_id).put(boat::update).delete(boat::delete),
        )
        .route("/crews/", get(crew::list).post(crew::create))
        .route(
            "/crews/{id}",
            get(crew::get_by_id).put(crew::update).delete(crew::delete),
        )
        .route("/islands/", get(island::list).post(island::create))
        .route(
            "/islands/{id}",
            get(island::get_by_id)
                .put(island::update)
                .delete(island::delete),
        )
        .route("/regions/", get(region::list).post(region::create))
        .route(
            "/regions/{id}",
            get(region::get_by_id)
                .put(region::update)
                .delete(region::delete),
        )
        .route("/ranks/", get(rank::list).post(rank::create))
        .route(
            "/ranks/{id}",
            get(rank::get_by_id).put(rank::update).delete(rank::delete),
        )
}
