pub mod api_client;
pub mod confirmation;
pub mod task_spawner;
pub mod time_service;
