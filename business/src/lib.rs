pub mod application {
    pub mod cart {
        pub mod add_item;
        pub mod clear_cart;
        pub mod close_cart;
        pub mod get_cart;
        pub mod open_cart;
        pub mod remove_item;
        pub mod set_quantity;
        pub mod store;
    }
    pub mod feedback {
        pub mod submit;
    }
    pub mod order {
        pub mod confirm_order;
        pub mod feed;
        pub mod list_orders;
        pub mod place_order;
        pub mod submissions;
        pub mod update_status;
        pub mod verify_prices;
    }
    pub mod product {
        pub mod export_menu;
        pub mod get_menu;
        pub mod seed_menu;
    }
    pub mod rate_limit {
        pub mod limiter;
    }
}

pub mod domain {
    pub mod clock;
    pub mod connectivity;
    pub mod errors;
    pub mod logger;
    pub mod storage;
    pub mod cart {
        pub mod model;
        pub mod use_cases {
            pub mod add_item;
            pub mod clear_cart;
            pub mod close_cart;
            pub mod get_cart;
            pub mod open_cart;
            pub mod remove_item;
            pub mod set_quantity;
        }
    }
    pub mod feedback {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod submit;
        }
    }
    pub mod order {
        pub mod errors;
        pub mod model;
        pub mod pricing;
        pub mod repository;
        pub mod services;
        pub mod submission;
        pub mod value_objects;
        pub mod use_cases {
            pub mod confirm_order;
            pub mod list_orders;
            pub mod place_order;
            pub mod update_status;
        }
    }
    pub mod product {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod seed;
        pub mod use_cases {
            pub mod export_menu;
            pub mod get_menu;
            pub mod seed_menu;
        }
    }
    pub mod rate_limit {
        pub mod errors;
        pub mod service;
    }
    pub mod shared {
        pub mod value_objects;
    }
}
