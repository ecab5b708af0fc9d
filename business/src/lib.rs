pub mod application {
    pub mod item {
        pub mod create;
        pub mod delete;
        pub mod get_all;
        pub mod get_by_id;
        pub mod get_category_summary;
        pub mod update;
        pub mod update_partially;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod item {
        pub mod changes;
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod summary;
        pub mod value_objects;
        pub mod use_cases {
            pub mod create;
            pub mod delete;
            pub mod get_all;
            pub mod get_by_id;
            pub mod get_category_summary;
            pub mod update;
            pub mod update_partially;
        }
    }
}
