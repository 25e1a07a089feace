pub mod shared {
    pub mod core {
        pub mod names;
    }
    pub mod infrastructure {
        pub mod person_store;
    }
}

pub mod modules {
    pub mod people {
        pub mod core {
            pub mod person;
        }
        pub mod use_cases {
            pub mod register_person {
                pub mod command;
                pub mod decide;
                pub mod decision;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod list_people_by_last_name {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod get_person_by_full_name {
                pub mod inbound {
                    pub mod http;
                }
            }
        }
    }
}

pub mod shell;
