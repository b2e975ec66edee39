use super::http::{list_current_user_groups, list_user_groups};
use crate::modules::groups::{Group, ListCurrentUserGroupsResponse};
use crate::modules::shared::{or_na, value_text};
use crate::modules::system::ProbeContext;

fn print_groups(groups: &[Group]) {
    println!("   Groups:");
    for (index, group) in groups.iter().enumerate() {
        println!("      {}. ID: {}", index + 1, or_na(group.id.as_deref()));
        println!("         Name: {}", or_na(group.name.as_deref()));
        println!("         Title: {}", or_na(group.title.as_deref()));
        println!("         Organization ID: {}", or_na(group.org_id.as_deref()));
        let members = if group.members_count.is_null() {
            "0".to_string()
        } else {
            value_text(&group.members_count)
        };
        println!("         Members: {members}");
        if let Some(created_at) = group.created_at.as_deref() {
            println!("         Created: {created_at}");
        }
        if let Some(updated_at) = group.updated_at.as_deref() {
            println!("         Updated: {updated_at}");
        }
    }
}

pub(crate) async fn probe_list_user_groups(
    ctx: &ProbeContext<'_>,
    user_id: &str,
) -> anyhow::Result<Vec<Group>> {
    println!("Listing groups for user: {user_id}");
    let response = list_user_groups(ctx, user_id).await?;
    println!("   Found {} groups for user", response.groups.len());
    if response.groups.is_empty() {
        println!("   User is not a member of any groups");
    } else {
        print_groups(&response.groups);
    }
    Ok(response.groups)
}

pub(crate) async fn probe_list_current_user_groups(
    ctx: &ProbeContext<'_>,
) -> anyhow::Result<ListCurrentUserGroupsResponse> {
    println!("Listing groups for current user");
    let response = list_current_user_groups(ctx).await?;
    println!("   Found {} groups for current user", response.groups.len());
    if response.groups.is_empty() {
        println!("   Current user is not a member of any groups");
    } else {
        print_groups(&response.groups);
    }
    if !response.access_pairs.is_empty() {
        println!("   Access Pairs (Permissions):");
        for (index, pair) in response.access_pairs.iter().enumerate() {
            println!("      {}. Group ID: {}", index + 1, or_na(pair.group_id.as_deref()));
            if pair.permissions.is_empty() {
                println!("         Permissions: None");
            } else {
                println!("         Permissions: {}", pair.permissions.join(", "));
            }
        }
    }
    Ok(response)
}
