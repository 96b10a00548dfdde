pub mod modules {
    pub mod lifecycle {
        pub mod core {
            pub mod outcome;
            pub mod phase;
            pub mod signal;
        }
        pub mod errors;
        pub mod ports;
        pub mod sequencer;
        pub mod signals;
    }
    pub mod health {
        pub mod core {
            pub mod report;
        }
        pub mod adapters {
            pub mod outbound {
                pub mod tcp_ping;
            }
        }
        pub mod inbound {
            pub mod http;
        }
        pub mod ports;
        pub mod service;
    }
}

pub mod shell;
