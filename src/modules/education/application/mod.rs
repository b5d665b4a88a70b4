pub mod domain {
    pub mod entities;
}
pub mod education_use_cases;
pub mod ports {
    pub mod incoming {
        pub mod use_cases;
    }
    pub mod outgoing;
}
pub mod service;
