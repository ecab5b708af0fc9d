pub mod db;
pub mod item {
    pub mod entity;
    pub mod partial_update;
    pub mod repository;
}
