pub mod domain {
    pub mod entities;
}
pub mod ports {
    pub mod incoming {
        pub mod use_cases;
    }
    pub mod outgoing;
}
pub mod project_use_cases;
pub mod service;
