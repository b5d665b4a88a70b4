pub mod contact_use_cases;
pub mod domain {
    pub mod entities;
}
pub mod ports {
    pub mod incoming {
        pub mod use_cases;
    }
    pub mod outgoing;
}
pub mod service;
