pub mod config {
    pub mod env_loader;
    pub mod model;
}

pub mod lives {
    pub mod dto;
    pub mod loader;
    pub mod model;
    pub mod render;
}

pub mod page {
    pub mod document;
    pub mod splice;
}

pub mod tracing;
pub mod update;
