pub mod favorite_repo;
pub mod game_repo;
pub mod schedule_repo;
pub mod staff_repo;
pub mod team_repo;
pub mod todo_repo;
pub mod user_repo;

pub use favorite_repo::FavoriteRepo;
pub use game_repo::GameRepo;
pub use schedule_repo::ScheduleRepo;
pub use staff_repo::StaffRepo;
pub use team_repo::TeamRepo;
pub use todo_repo::TodoRepo;
pub use user_repo::UserRepo;
