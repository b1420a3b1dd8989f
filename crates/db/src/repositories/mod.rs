//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument. Every method issues a
//! single statement; nothing here spans more than one row mutation.

pub mod boat_repo;
pub mod character_repo;
pub mod crew_repo;
pub mod devil_fruit_repo;
pub mod devil_fruit_type_repo;
pub mod haki_repo;
pub mod haki_type_repo;
pub mod island_repo;
pub mod manga_repo;
pub mod rank_repo;
pub mod region_repo;
pub mod user_repo;
pub mod weapon_repo;

pub use boat_repo::BoatRepo;
pub use character_repo::CharacterRepo;
pub use crew_repo::CrewRepo;
pub use devil_fruit_repo::DevilFruitRepo;
pub use devil_fruit_type_repo::DevilFruitTypeRepo;
pub use haki_repo::HakiRepo;
pub use haki_type_repo::HakiTypeRepo;
pub use island_repo::IslandRepo;
pub use manga_repo::MangaRepo;
pub use rank_repo::RankRepo;
pub use region_repo::RegionRepo;
pub use user_repo::UserRepo;
pub use weapon_repo::WeaponRepo;
