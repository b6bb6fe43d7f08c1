pub(crate) mod data {
    pub(crate) mod datasources {
        pub(crate) mod google_play_developer_api_datasource;
    }
    pub(crate) mod models {
        pub(crate) mod google_play_developer_api {
            pub(crate) mod product_purchase_model;
            pub(crate) mod subscription_purchase_model;
        }
    }
    pub(crate) mod repositories {
        pub(crate) mod verification_repository_impl;
    }
}

pub mod domain {
    pub mod confirm;
    pub mod entities {
        pub mod product_type;
        pub mod subscription_status;
        pub mod verification;
    }
    pub mod repositories {
        pub mod verification_repository;
    }
}

pub mod errors;
pub mod secrets;
pub mod util;
