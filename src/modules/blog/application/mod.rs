pub mod blog_use_cases;
pub mod domain {
    pub mod derivation;
    pub mod entities;
    pub mod upload_policy;
}
pub mod ports {
    pub mod incoming {
        pub mod use_cases;
    }
    pub mod outgoing;
}
pub mod service;
