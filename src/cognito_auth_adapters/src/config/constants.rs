pub mod env {
    pub const ENV_PREFIX: &str = "COGNITO_AUTH";
    pub const ENV_SEPARATOR: &str = "__";
}

pub const CONFIG_FILE: &str = "config/default";

pub mod prod {
    pub const APP_ADDRESS: &str = "0.0.0.0:3000";

    pub mod cognito {
        pub const TIMEOUT_IN_MILLIS: u64 = 10_000;
    }
}

pub mod test {
    pub const APP_ADDRESS: &str = "127.0.0.1:0";

    pub mod cognito {
        use std::time::Duration;

        pub const APP_CLIENT_ID: &str = "test-app-client";
        pub const TIMEOUT: Duration = Duration::from_millis(500);
    }
}
