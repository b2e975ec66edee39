use super::http::{list_organizations_by_current_user, list_organizations_by_user};
use crate::modules::organizations::{ListOrganizationsResponse, Organization};
use crate::modules::shared::or_na;
use crate::modules::system::ProbeContext;

fn print_organizations(heading: &str, organizations: &[Organization], with_updated: bool) {
    println!("   {heading}:");
    for (index, org) in organizations.iter().enumerate() {
        println!("      {}. ID: {}", index + 1, or_na(org.id.as_deref()));
        println!("         Name: {}", or_na(org.name.as_deref()));
        println!("         Title: {}", or_na(org.title.as_deref()));
        println!("         State: {}", or_na(org.state.as_deref()));
        if let Some(created_at) = org.created_at.as_deref() {
            println!("         Created: {created_at}");
        }
        if with_updated {
            if let Some(updated_at) = org.updated_at.as_deref() {
                println!("         Updated: {updated_at}");
            }
        }
    }
}

fn report(response: &ListOrganizationsResponse, subject: &str) {
    println!(
        "   Found {} organizations for {subject}",
        response.organizations.len()
    );
    println!(
        "   Found {} joinable organizations via domain",
        response.joinable_via_domain.len()
    );
    if response.organizations.is_empty() {
        println!("   No organizations found for {subject}");
    } else {
        print_organizations("Organizations", &response.organizations, true);
    }
    if response.joinable_via_domain.is_empty() {
        println!("   No organizations joinable via {subject}'s email domain");
    } else {
        print_organizations(
            "Organizations Joinable via Email Domain",
            &response.joinable_via_domain,
            false,
        );
    }
}

pub(crate) async fn probe_list_organizations_by_user(
    ctx: &ProbeContext<'_>,
    user_id: &str,
) -> anyhow::Result<ListOrganizationsResponse> {
    println!("Listing organizations for user: {user_id}");
    let response = list_organizations_by_user(ctx, user_id).await?;
    report(&response, "user");
    Ok(response)
}

pub(crate) async fn probe_list_organizations_by_current_user(
    ctx: &ProbeContext<'_>,
) -> anyhow::Result<ListOrganizationsResponse> {
    println!("Listing organizations for current user");
    let response = list_organizations_by_current_user(ctx).await?;
    report(&response, "current user");
    Ok(response)
}
