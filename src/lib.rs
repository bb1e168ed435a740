pub mod error;

pub mod service {
    pub mod cache;
    pub mod config_service;
    pub mod converter;
    pub mod surface;
    pub mod viewer;
    pub mod traits {
        pub mod i_service;
    }
}

pub mod config {
    pub mod config;
    pub mod ports;
}

pub mod action {
    pub mod cli;
    pub mod interactive;
}

pub mod facade {
    pub mod viewer_facade;
    pub mod traits {
        pub mod i_viewer;
    }
}

pub mod models {
    pub mod conversion;
    pub mod viewer;
}

pub mod utils {
    pub mod html;
    pub mod utils;
}
