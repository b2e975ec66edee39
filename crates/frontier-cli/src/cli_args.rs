use clap::{ArgAction, Parser};

pub(crate) const DEFAULT_BASE_URL: &str = "http://localhost:8002";
pub(crate) const DEFAULT_STRATEGY: &str = "mailotp";

#[derive(Parser, Debug)]
#[command(name = "frontier-signin")]
#[command(about = "Frontier Connect RPC sign-in helper")]
pub struct Cli {
    #[arg(help = "Email address to sign in with")]
    pub email: String,
    #[arg(long, env = "FRONTIER_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,
    #[command(flatten)]
    pub db: DbArgs,
    #[arg(
        long,
        env = "FRONTIER_OTP",
        help = "Use this one-time code instead of reading it from the flows table"
    )]
    pub otp: Option<String>,
    #[arg(long, default_value = DEFAULT_STRATEGY)]
    pub strategy: String,
    #[arg(long, help = "Fetch only the first page of ListUsers")]
    pub no_pagination: bool,
    #[command(flatten)]
    pub probes: ProbeArgs,
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(clap::Args, Debug, Clone)]
pub struct DbArgs {
    #[arg(long, env = "FRONTIER_DB_HOST", default_value = "localhost")]
    pub db_host: String,
    #[arg(long, env = "FRONTIER_DB_PORT", default_value_t = 5432)]
    pub db_port: u16,
    #[arg(long, env = "FRONTIER_DB_NAME", default_value = "frontier")]
    pub db_name: String,
    #[arg(long, env = "FRONTIER_DB_USER", default_value = "frontier")]
    pub db_user: String,
    #[arg(long, env = "FRONTIER_DB_PASSWORD", default_value = "frontier")]
    pub db_password: String,
    #[arg(
        long,
        env = "FRONTIER_DATABASE_URL",
        help = "Full postgres:// URL; overrides the individual --db-* options"
    )]
    pub database_url: Option<String>,
}

/// Optional post-authentication RPC checks. User-ID values accept `created`
/// to target the user made by `--test-create-user` in the same run.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct ProbeArgs {
    #[arg(long, help = "Test ListUsers after authentication")]
    pub test_list_users: bool,
    #[arg(long, help = "Test CreateUser after authentication")]
    pub test_create_user: bool,
    #[arg(long, value_name = "USER_ID", help = "Test GetUser with a user ID")]
    pub test_get_user: Option<String>,
    #[arg(long, help = "Test GetCurrentUser after authentication")]
    pub test_get_current_user: bool,
    #[arg(long, value_name = "USER_ID", help = "Test UpdateUser with a user ID")]
    pub test_update_user: Option<String>,
    #[arg(long, help = "Test UpdateCurrentUser after authentication")]
    pub test_update_current_user: bool,
    #[arg(long, value_name = "USER_ID", help = "Test EnableUser with a user ID")]
    pub test_enable_user: Option<String>,
    #[arg(long, value_name = "USER_ID", help = "Test DisableUser with a user ID")]
    pub test_disable_user: Option<String>,
    #[arg(long, value_name = "USER_ID", help = "Test DeleteUser with a user ID")]
    pub test_delete_user: Option<String>,
    #[arg(long, value_name = "USER_ID", help = "Test ListUserGroups with a user ID")]
    pub test_list_user_groups: Option<String>,
    #[arg(long, help = "Test ListCurrentUserGroups after authentication")]
    pub test_list_current_user_groups: bool,
    #[arg(
        long,
        value_name = "USER_ID",
        help = "Test ListOrganizationsByUser with a user ID"
    )]
    pub test_list_organizations_by_user: Option<String>,
    #[arg(long, help = "Test ListOrganizationsByCurrentUser after authentication")]
    pub test_list_organizations_by_current_user: bool,
    #[arg(long, value_name = "USER_ID", help = "Test ListProjectsByUser with a user ID")]
    pub test_list_projects_by_user: Option<String>,
    #[arg(long, help = "Test ListProjectsByCurrentUser after authentication")]
    pub test_list_projects_by_current_user: bool,
    #[arg(long, value_name = "ORG_ID", help = "Test ListServiceUsers with an organization ID")]
    pub test_list_service_users: Option<String>,
}
