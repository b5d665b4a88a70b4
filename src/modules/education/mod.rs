pub mod adapter {
    pub mod incoming {
        pub mod web {
            pub mod routes;
        }
    }
    pub mod outgoing;
}
pub mod application;
