//---------------------------------------
pub mod web_api {
    pub mod api_error;
    pub mod controllers;
    pub mod routes;
}

pub use web_api::api_error;
pub use web_api::controllers::*;
pub use web_api::routes::map_routes;
//---------------------------------------

//---------------------------------------
pub mod shared {
    pub mod dto;
    pub mod models;
}

pub use shared::dto::*;
pub use shared::models::*;
//---------------------------------------

//---------------------------------------
pub mod data_access {
    pub mod data_context;
    pub mod memory_store;
    pub mod store_error;
    pub mod task_store;
}

pub use data_access::{
    data_context::DataContext, memory_store::MemoryStore, store_error::StoreError,
    task_store::TaskStore,
};
//---------------------------------------
