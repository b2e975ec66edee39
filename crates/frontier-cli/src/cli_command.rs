use std::future::Future;
use tracing::debug;

use crate::cli_args::ProbeArgs;
use crate::modules::groups::{probe_list_current_user_groups, probe_list_user_groups};
use crate::modules::organizations::{
    probe_list_organizations_by_current_user, probe_list_organizations_by_user,
};
use crate::modules::projects::{probe_list_projects_by_current_user, probe_list_projects_by_user};
use crate::modules::serviceusers::probe_list_service_users;
use crate::modules::shared::{print_banner, resolve_user_id, CREATED_USER};
use crate::modules::system::ProbeContext;
use crate::modules::users::{
    probe_create_user, probe_delete_user, probe_disable_user, probe_enable_user,
    probe_get_current_user, probe_get_user, probe_list_users, probe_update_current_user,
    probe_update_user,
};

/// Outcome counts for one run of the selected probes.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ProbeSummary {
    pub passed: usize,
    pub failed: usize,
    pub skipped: usize,
}

impl ProbeSummary {
    pub(crate) fn ran(&self) -> usize {
        self.passed + self.failed
    }
}

async fn run_probe<T, F>(summary: &mut ProbeSummary, rpc: &str, probe: F) -> Option<T>
where
    F: Future<Output = anyhow::Result<T>>,
{
    match probe.await {
        Ok(value) => {
            summary.passed += 1;
            println!();
            println!("{rpc} API test successful!");
            Some(value)
        }
        Err(err) => {
            summary.failed += 1;
            debug!(rpc = %rpc, "probe failed");
            eprintln!("Error calling {rpc} API: {err:#}");
            println!();
            println!("{rpc} API test failed!");
            None
        }
    }
}

fn target_user(arg: &str, created: Option<&str>, summary: &mut ProbeSummary) -> Option<String> {
    let resolved = resolve_user_id(arg, created);
    match (&resolved, arg.trim() == CREATED_USER) {
        (Some(id), true) => println!("Using newly created user ID: {id}"),
        (Some(id), false) => println!("Using provided user ID: {id}"),
        (None, _) => {
            summary.skipped += 1;
            eprintln!("Cannot use 'created' user ID: no user was created in this session");
            eprintln!("Use --test-create-user first, or provide a specific user ID");
        }
    }
    resolved
}

/// Runs every requested probe in a fixed order. A failing probe is reported
/// and the next one still runs.
pub(crate) async fn handle_probes(
    args: &ProbeArgs,
    paginate: bool,
    ctx: &ProbeContext<'_>,
) -> ProbeSummary {
    let mut summary = ProbeSummary::default();

    if args.test_list_users {
        print_banner("TESTING LISTUSERS API");
        run_probe(&mut summary, "ListUsers", probe_list_users(ctx, paginate)).await;
    }

    let mut created_user_id: Option<String> = None;
    if args.test_create_user {
        print_banner("TESTING CREATEUSER API");
        if let Some(user) = run_probe(&mut summary, "CreateUser", probe_create_user(ctx)).await {
            created_user_id = user.id;
        }
    }
    let created = created_user_id.as_deref();

    if let Some(arg) = args.test_get_user.as_deref() {
        print_banner("TESTING GETUSER API");
        if let Some(id) = target_user(arg, created, &mut summary) {
            run_probe(&mut summary, "GetUser", probe_get_user(ctx, &id)).await;
        }
    }

    if args.test_get_current_user {
        print_banner("TESTING GETCURRENTUSER API");
        let principal =
            run_probe(&mut summary, "GetCurrentUser", probe_get_current_user(ctx)).await;
        if let Some(Some(principal)) = principal {
            println!("Current principal details:");
            println!("   ID: {}", principal.id().unwrap_or("N/A"));
            println!("   Email: {}", principal.email().unwrap_or("N/A"));
            println!("   Type: {}", principal.kind());
        }
    }

    if let Some(arg) = args.test_update_user.as_deref() {
        print_banner("TESTING UPDATEUSER API");
        if let Some(id) = target_user(arg, created, &mut summary) {
            run_probe(&mut summary, "UpdateUser", probe_update_user(ctx, &id)).await;
        }
    }

    if args.test_update_current_user {
        print_banner("TESTING UPDATECURRENTUSER API");
        run_probe(
            &mut summary,
            "UpdateCurrentUser",
            probe_update_current_user(ctx),
        )
        .await;
    }

    if let Some(arg) = args.test_enable_user.as_deref() {
        print_banner("TESTING ENABLEUSER API");
        if let Some(id) = target_user(arg, created, &mut summary) {
            run_probe(&mut summary, "EnableUser", probe_enable_user(ctx, &id)).await;
        }
    }

    if let Some(arg) = args.test_disable_user.as_deref() {
        print_banner("TESTING DISABLEUSER API");
        if let Some(id) = target_user(arg, created, &mut summary) {
            run_probe(&mut summary, "DisableUser", probe_disable_user(ctx, &id)).await;
        }
    }

    if let Some(arg) = args.test_delete_user.as_deref() {
        print_banner("TESTING DELETEUSER API");
        if let Some(id) = target_user(arg, created, &mut summary) {
            run_probe(&mut summary, "DeleteUser", probe_delete_user(ctx, &id)).await;
        }
    }

    if let Some(arg) = args.test_list_user_groups.as_deref() {
        print_banner("TESTING LISTUSERGROUPS API");
        if let Some(id) = target_user(arg, created, &mut summary) {
            run_probe(
                &mut summary,
                "ListUserGroups",
                probe_list_user_groups(ctx, &id),
            )
            .await;
        }
    }

    if args.test_list_current_user_groups {
        print_banner("TESTING LISTCURRENTUSERGROUPS API");
        run_probe(
            &mut summary,
            "ListCurrentUserGroups",
            probe_list_current_user_groups(ctx),
        )
        .await;
    }

    if let Some(arg) = args.test_list_organizations_by_user.as_deref() {
        print_banner("TESTING LISTORGANIZATIONSBYUSER API");
        if let Some(id) = target_user(arg, created, &mut summary) {
            run_probe(
                &mut summary,
                "ListOrganizationsByUser",
                probe_list_organizations_by_user(ctx, &id),
            )
            .await;
        }
    }

    if args.test_list_organizations_by_current_user {
        print_banner("TESTING LISTORGANIZATIONSBYCURRENTUSER API");
        run_probe(
            &mut summary,
            "ListOrganizationsByCurrentUser",
            probe_list_organizations_by_current_user(ctx),
        )
        .await;
    }

    if let Some(arg) = args.test_list_projects_by_user.as_deref() {
        print_banner("TESTING LISTPROJECTSBYUSER API");
        if let Some(id) = target_user(arg, created, &mut summary) {
            run_probe(
                &mut summary,
                "ListProjectsByUser",
                probe_list_projects_by_user(ctx, &id),
            )
            .await;
        }
    }

    if args.test_list_projects_by_current_user {
        print_banner("TESTING LISTPROJECTSBYCURRENTUSER API");
        run_probe(
            &mut summary,
            "ListProjectsByCurrentUser",
            probe_list_projects_by_current_user(ctx),
        )
        .await;
    }

    if let Some(org_id) = args.test_list_service_users.as_deref() {
        print_banner("TESTING LISTSERVICEUSERS API");
        run_probe(
            &mut summary,
            "ListServiceUsers",
            probe_list_service_users(ctx, org_id),
        )
        .await;
    }

    summary
}
